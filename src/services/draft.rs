//! Application draft renderer.
//!
//! Turns an [`ApplicationRecord`] into the Markdown draft of the paper form.
//! The section order and wording are fixed; every field is printed exactly
//! once, with a placeholder when it is blank.

use crate::domain::application::{ApplicationField, ApplicationRecord, FieldValue};

/// Placeholder printed for a blank field.
pub const NOT_FILLED: &str = "（未填）";

/// Placeholder for a blank prior application number.
pub const NOT_APPLICABLE: &str = "不適用";

pub const DRAFT_TITLE: &str = "第二、三等級醫療器材查驗登記申請書（線上草稿）";

enum Entry {
    /// `- label：value`
    Item(&'static str, ApplicationField),
    /// `- label：` with the value on the following line.
    ItemBelow(&'static str, ApplicationField),
    /// `### heading` followed by the value as a paragraph.
    Block(&'static str, ApplicationField),
    /// `### heading` only.
    Subheading(&'static str),
}

struct Section {
    title: &'static str,
    entries: &'static [Entry],
}

use ApplicationField as F;
use Entry::*;

const LAYOUT: &[Section] = &[
    Section {
        title: "一、案件基本資料",
        entries: &[
            Item("公文文號", F::DocNo),
            Item("電子流水號", F::ENo),
            Item("申請日", F::ApplyDate),
            Item("案件類型", F::CaseType),
            Item("醫療器材類型", F::DeviceCategory),
            Item("案件種類", F::CaseKind),
            Item("產地", F::Origin),
            Item("產品等級", F::ProductClass),
            Item("有無類似品", F::Similar),
            Item("是否勾選「替代臨床前測試及原廠品質管制資料」", F::ReplaceFlag),
            Item("前次申請案號", F::PriorAppNo),
        ],
    },
    Section {
        title: "二、醫療器材基本資訊",
        entries: &[
            Item("中文名稱", F::NameZh),
            Item("英文名稱", F::NameEn),
            Item("效能、用途或適應症說明", F::Indications),
            Item("型號、規格或主要成分", F::SpecComp),
            Subheading("分類分級品項"),
            Item("主類別", F::MainCat),
            Item("分級品項代碼", F::ItemCode),
            Item("分級品項名稱", F::ItemName),
        ],
    },
    Section {
        title: "三、醫療器材商資料",
        entries: &[
            Item("統一編號", F::UniformId),
            Item("醫療器材商名稱", F::FirmName),
            Item("地址", F::FirmAddr),
            Item("負責人姓名", F::RespName),
            Item("聯絡人姓名", F::ContactName),
            Item("電話", F::ContactTel),
            Item("傳真", F::ContactFax),
            Item("電子郵件", F::ContactEmail),
            Item("已確認與最新醫療器材商證照資訊相符", F::ConfirmMatch),
            Subheading("其它佐證"),
            Item("RAPS", F::CertRaps),
            Item("AHWP", F::CertAhwp),
            Item("其它訓練/證書", F::CertOther),
        ],
    },
    Section {
        title: "四、製造廠資訊",
        entries: &[
            Item("製造方式", F::ManuType),
            Item("製造廠名稱", F::ManuName),
            Item("製造國別", F::ManuCountry),
            Item("製造廠地址", F::ManuAddr),
            Item("製造相關說明", F::ManuNote),
        ],
    },
    Section {
        title: "五～七、附屬文件資料",
        entries: &[
            Item("原廠授權登記書適用性", F::AuthApplicable),
            Item("原廠授權登記書資料說明", F::AuthDesc),
            Item("出產國製售證明適用性", F::CfsApplicable),
            Item("出產國製售證明資料說明", F::CfsDesc),
            Item("QMS/QSD 適用性", F::QmsApplicable),
            Item("QMS/QSD 資料說明", F::QmsDesc),
        ],
    },
    Section {
        title: "十～十二、技術資料摘要",
        entries: &[
            Block("類似品相關資訊", F::SimilarInfo),
            Block("標籤／說明書／包裝擬稿重點", F::LabelingInfo),
            Block("產品結構、材料、規格、性能、用途、圖樣等技術檔案摘要", F::TechFileInfo),
        ],
    },
    Section {
        title: "十三～十七、安全性與臨床前測試",
        entries: &[
            Block("臨床前測試與原廠品質管制資料摘要", F::PreclinicalInfo),
            Block("替代「臨床前測試及原廠品質管制資料」之說明", F::PreclinicalReplace),
        ],
    },
    Section {
        title: "十八、臨床證據資料",
        entries: &[
            Item("臨床證據適用性", F::ClinicalJust),
            ItemBelow("臨床證據摘要", F::ClinicalInfo),
        ],
    },
];

/// Labels printed for `true` / `false`.
fn flag_labels(field: ApplicationField) -> (&'static str, &'static str) {
    match field {
        F::CertRaps | F::CertAhwp => ("有", "無"),
        _ => ("是", "否"),
    }
}

fn blank_placeholder(field: ApplicationField) -> &'static str {
    match field {
        F::PriorAppNo => NOT_APPLICABLE,
        _ => NOT_FILLED,
    }
}

/// Display text of one field in the draft.
pub fn display_value(record: &ApplicationRecord, field: ApplicationField) -> String {
    match record.value(field) {
        FieldValue::Flag(b) => {
            let (yes, no) = flag_labels(field);
            let label = if b { yes } else { no };
            label.to_string()
        }
        FieldValue::Text(s) if s.is_empty() => blank_placeholder(field).to_string(),
        FieldValue::Text(s) => s,
    }
}

struct Lines(Vec<String>);

impl Lines {
    fn push(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    /// Separates a `###` heading from preceding content, but not from its
    /// own `##` section heading.
    fn subheading(&mut self, title: &str) {
        if !self.0.last().is_some_and(|l| l.starts_with("## ")) {
            self.push("");
        }
        self.push(format!("### {}", title));
    }
}

/// Render the Markdown draft. Pure: identical records give identical text.
pub fn render_draft(record: &ApplicationRecord) -> String {
    let mut out = Lines(Vec::new());
    out.push(format!("# {}", DRAFT_TITLE));

    for section in LAYOUT {
        out.push("");
        out.push(format!("## {}", section.title));
        for entry in section.entries {
            match entry {
                Item(label, field) => {
                    out.push(format!("- {}：{}", label, display_value(record, *field)));
                }
                ItemBelow(label, field) => {
                    out.push(format!("- {}：", label));
                    out.push(display_value(record, *field));
                }
                Block(title, field) => {
                    out.subheading(title);
                    out.push(display_value(record, *field));
                }
                Subheading(title) => out.subheading(title),
            }
        }
    }

    let mut text = out.0.join("\n");
    text.push('\n');
    text
}
