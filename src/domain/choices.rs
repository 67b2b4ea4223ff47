//! Documented value sets of the enumerated application fields.
//!
//! The form never rejects a value outside these sets; they drive the option
//! lists offered to clients and the `is_known_value` check.

use serde::Serialize;

use super::application::{ApplicationField, ApplicationRecord, FieldKind, FieldValue};

pub const CASE_TYPES: &[&str] = &[
    "一般申請案",
    "同一產品不同品名",
    "專供外銷",
    "許可證有效期限屆至後六個月內重新申請",
];

pub const DEVICE_CATEGORIES: &[&str] = &["一般醫材", "體外診斷器材(IVD)"];

pub const CASE_KINDS: &[&str] = &["新案", "變更案", "展延案"];

pub const ORIGINS: &[&str] = &["國產", "輸入", "陸輸"];

pub const PRODUCT_CLASSES: &[&str] = &["第二等級", "第三等級"];

pub const SIMILAR_OPTIONS: &[&str] = &["有", "無", "全球首創"];

pub const YES_NO: &[&str] = &["否", "是"];

pub const MANUFACTURING_TYPES: &[&str] = &[
    "單一製造廠",
    "全部製程委託製造",
    "委託非全部製程之製造/包裝/貼標/滅菌及最終驗放",
];

pub const MANUFACTURER_COUNTRIES: &[&str] = &[
    "TAIWAN， ROC",
    "UNITED STATES",
    "EU (Member State)",
    "JAPAN",
    "CHINA",
    "KOREA， REPUBLIC OF",
    "OTHER",
];

pub const MAIN_CATEGORIES: &[&str] = &[
    "A.臨床化學及臨床毒理學",
    "B.血液學及病理學",
    "C.免疫學及微生物學",
    "D.麻醉學",
    "E.心臟血管醫學",
    "F.牙科學",
    "G.耳鼻喉科學",
    "H.胃腸病科學及泌尿科學",
    "I.一般及整形外科手術",
    "J.一般醫院及個人使用裝置",
    "K.神經科學",
    "L.婦產科學",
    "M.眼科學",
    "N.骨科學",
    "O.物理醫學科學",
    "P.放射學科學",
];

pub const APPLICABILITY: &[&str] = &["不適用", "適用"];

/// Option list of an enumerated field, `None` for free-text and flag fields.
pub fn domain_values(field: ApplicationField) -> Option<&'static [&'static str]> {
    use ApplicationField::*;

    let values = match field {
        CaseType => CASE_TYPES,
        DeviceCategory => DEVICE_CATEGORIES,
        CaseKind => CASE_KINDS,
        Origin => ORIGINS,
        ProductClass => PRODUCT_CLASSES,
        Similar => SIMILAR_OPTIONS,
        ReplaceFlag => YES_NO,
        ManuType => MANUFACTURING_TYPES,
        ManuCountry => MANUFACTURER_COUNTRIES,
        MainCat => MAIN_CATEGORIES,
        AuthApplicable | CfsApplicable | QmsApplicable | ClinicalJust => APPLICABILITY,
        _ => return None,
    };
    Some(values)
}

/// Whether `value` belongs to the field's documented set. Fields without a
/// set accept anything; an empty main category means "not chosen yet".
pub fn is_known_value(field: ApplicationField, value: &str) -> bool {
    match domain_values(field) {
        Some(_) if field == ApplicationField::MainCat && value.is_empty() => true,
        Some(values) => values.contains(&value),
        None => true,
    }
}

/// One field of the form as offered to clients.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'static [&'static str]>,
    pub value: FieldValue,
    /// False when the current value is outside the documented options.
    pub known: bool,
}

/// Every field in declaration order, with options and the record's values.
pub fn describe_fields(record: &ApplicationRecord) -> Vec<FieldDescriptor> {
    record
        .values()
        .map(|(field, value)| FieldDescriptor {
            name: field.as_str(),
            kind: field.kind(),
            options: domain_values(field),
            known: match &value {
                FieldValue::Text(s) => is_known_value(field, s),
                FieldValue::Flag(_) => true,
            },
            value,
        })
        .collect()
}
