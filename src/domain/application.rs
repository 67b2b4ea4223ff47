//! Premarket application form record.
//!
//! One [`ApplicationRecord`] holds every answer of a class II/III medical
//! device registration form. All attributes always exist: "not filled in" is
//! an empty string or `false`, never a missing key. Enumerated attributes are
//! plain strings; see [`crate::domain::choices`] for their documented values.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("field {field} expects a {expected} value")]
    TypeMismatch {
        field: &'static str,
        expected: FieldKind,
    },

    #[error("malformed application record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Declared type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Flag,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("string"),
            Self::Flag => f.write_str("boolean"),
        }
    }
}

trait FieldType {
    const KIND: FieldKind;
}

impl FieldType for String {
    const KIND: FieldKind = FieldKind::Text;
}

impl FieldType for bool {
    const KIND: FieldKind = FieldKind::Flag;
}

/// A single field value as accepted by [`ApplicationRecord::set`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Flag(_) => FieldKind::Flag,
            Self::Text(_) => FieldKind::Text,
        }
    }

    /// Empty string or `false`.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Flag(b) => !b,
            Self::Text(s) => s.is_empty(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(b) => write!(f, "{}", b),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Body of a single-field update.
#[derive(Debug, Clone, Deserialize)]
pub struct SetFieldRequest {
    pub value: FieldValue,
}

enum FieldSlot<'a> {
    Text(&'a mut String),
    Flag(&'a mut bool),
}

impl<'a> From<&'a mut String> for FieldSlot<'a> {
    fn from(s: &'a mut String) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<&'a mut bool> for FieldSlot<'a> {
    fn from(b: &'a mut bool) -> Self {
        Self::Flag(b)
    }
}

macro_rules! application_fields {
    ($( $variant:ident => $field:ident : $ty:ty = $name:literal ),* $(,)?) => {
        /// The flat form record. Field order is the canonical declaration
        /// order used by every export.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct ApplicationRecord {
            $(
                #[serde(rename = $name)]
                pub $field: $ty,
            )*
        }

        /// Names every attribute of [`ApplicationRecord`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ApplicationField {
            $( $variant, )*
        }

        impl ApplicationField {
            /// All fields in declaration order.
            pub const ALL: &'static [ApplicationField] = &[ $( ApplicationField::$variant, )* ];

            /// Serialized (camelCase) name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )*
                }
            }

            pub fn kind(self) -> FieldKind {
                match self {
                    $( Self::$variant => <$ty as FieldType>::KIND, )*
                }
            }
        }

        impl ApplicationRecord {
            pub fn value(&self, field: ApplicationField) -> FieldValue {
                match field {
                    $( ApplicationField::$variant => FieldValue::from(self.$field.clone()), )*
                }
            }

            fn slot_mut(&mut self, field: ApplicationField) -> FieldSlot<'_> {
                match field {
                    $( ApplicationField::$variant => FieldSlot::from(&mut self.$field), )*
                }
            }
        }
    };
}

application_fields! {
    // Case identity
    DocNo => doc_no: String = "docNo",
    ENo => e_no: String = "eNo",
    ApplyDate => apply_date: String = "applyDate",
    CaseType => case_type: String = "caseType",
    DeviceCategory => device_category: String = "deviceCategory",
    CaseKind => case_kind: String = "caseKind",
    Origin => origin: String = "origin",
    ProductClass => product_class: String = "productClass",
    Similar => similar: String = "similar",
    ReplaceFlag => replace_flag: String = "replaceFlag",
    PriorAppNo => prior_app_no: String = "priorAppNo",

    // Device description
    NameZh => name_zh: String = "nameZh",
    NameEn => name_en: String = "nameEn",
    Indications => indications: String = "indications",
    SpecComp => spec_comp: String = "specComp",
    MainCat => main_cat: String = "mainCat",
    ItemCode => item_code: String = "itemCode",
    ItemName => item_name: String = "itemName",

    // Applicant
    UniformId => uniform_id: String = "uniformId",
    FirmName => firm_name: String = "firmName",
    FirmAddr => firm_addr: String = "firmAddr",
    RespName => resp_name: String = "respName",
    ContactName => contact_name: String = "contactName",
    ContactTel => contact_tel: String = "contactTel",
    ContactFax => contact_fax: String = "contactFax",
    ContactEmail => contact_email: String = "contactEmail",
    ConfirmMatch => confirm_match: bool = "confirmMatch",
    CertRaps => cert_raps: bool = "certRaps",
    CertAhwp => cert_ahwp: bool = "certAhwp",
    CertOther => cert_other: String = "certOther",

    // Manufacturer
    ManuType => manu_type: String = "manuType",
    ManuName => manu_name: String = "manuName",
    ManuCountry => manu_country: String = "manuCountry",
    ManuAddr => manu_addr: String = "manuAddr",
    ManuNote => manu_note: String = "manuNote",

    // Attachments and summaries
    AuthApplicable => auth_applicable: String = "authApplicable",
    AuthDesc => auth_desc: String = "authDesc",
    CfsApplicable => cfs_applicable: String = "cfsApplicable",
    CfsDesc => cfs_desc: String = "cfsDesc",
    QmsApplicable => qms_applicable: String = "qmsApplicable",
    QmsDesc => qms_desc: String = "qmsDesc",
    SimilarInfo => similar_info: String = "similarInfo",
    LabelingInfo => labeling_info: String = "labelingInfo",
    TechFileInfo => tech_file_info: String = "techFileInfo",
    PreclinicalInfo => preclinical_info: String = "preclinicalInfo",
    PreclinicalReplace => preclinical_replace: String = "preclinicalReplace",
    ClinicalJust => clinical_just: String = "clinicalJust",
    ClinicalInfo => clinical_info: String = "clinicalInfo",
}

impl FromStr for ApplicationField {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ApplicationError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for ApplicationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default text of the indications and specification fields.
pub const SEE_APPROVED_LABEL: &str = "詳如核定之中文說明書";

impl ApplicationRecord {
    /// Canonical default record with the given application date.
    pub fn default_on(apply_date: NaiveDate) -> Self {
        Self {
            doc_no: String::new(),
            e_no: "MDE-".to_string(),
            apply_date: apply_date.format("%Y-%m-%d").to_string(),
            case_type: "一般申請案".to_string(),
            device_category: "一般醫材".to_string(),
            case_kind: "新案".to_string(),
            origin: "國產".to_string(),
            product_class: "第二等級".to_string(),
            similar: "無".to_string(),
            replace_flag: "否".to_string(),
            prior_app_no: String::new(),

            name_zh: String::new(),
            name_en: String::new(),
            indications: SEE_APPROVED_LABEL.to_string(),
            spec_comp: SEE_APPROVED_LABEL.to_string(),
            main_cat: String::new(),
            item_code: String::new(),
            item_name: String::new(),

            uniform_id: String::new(),
            firm_name: String::new(),
            firm_addr: String::new(),
            resp_name: String::new(),
            contact_name: String::new(),
            contact_tel: String::new(),
            contact_fax: String::new(),
            contact_email: String::new(),
            confirm_match: false,
            cert_raps: false,
            cert_ahwp: false,
            cert_other: String::new(),

            manu_type: "單一製造廠".to_string(),
            manu_name: String::new(),
            manu_country: "TAIWAN， ROC".to_string(),
            manu_addr: String::new(),
            manu_note: String::new(),

            auth_applicable: "不適用".to_string(),
            auth_desc: String::new(),
            cfs_applicable: "不適用".to_string(),
            cfs_desc: String::new(),
            qms_applicable: "適用".to_string(),
            qms_desc: String::new(),
            similar_info: String::new(),
            labeling_info: String::new(),
            tech_file_info: String::new(),
            preclinical_info: String::new(),
            preclinical_replace: String::new(),
            clinical_just: "不適用".to_string(),
            clinical_info: String::new(),
        }
    }

    /// Default record dated today (UTC).
    pub fn new_default() -> Self {
        Self::default_on(Utc::now().date_naive())
    }

    /// Update one field. The value must match the field's declared type;
    /// enumerated fields accept any string.
    pub fn set(
        &mut self,
        field: ApplicationField,
        value: impl Into<FieldValue>,
    ) -> Result<(), ApplicationError> {
        match (self.slot_mut(field), value.into()) {
            (FieldSlot::Text(slot), FieldValue::Text(v)) => *slot = v,
            (FieldSlot::Flag(slot), FieldValue::Flag(v)) => *slot = v,
            _ => {
                return Err(ApplicationError::TypeMismatch {
                    field: field.as_str(),
                    expected: field.kind(),
                })
            }
        }
        Ok(())
    }

    /// [`set`](Self::set) addressed by serialized field name.
    pub fn set_by_name(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<ApplicationField, ApplicationError> {
        let field: ApplicationField = name.parse()?;
        self.set(field, value)?;
        Ok(field)
    }

    /// Parse a full record. Every field must be present.
    pub fn from_json(json: &str) -> Result<Self, ApplicationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Values of all fields in declaration order.
    pub fn values(&self) -> impl Iterator<Item = (ApplicationField, FieldValue)> + '_ {
        ApplicationField::ALL.iter().map(move |f| (*f, self.value(*f)))
    }
}

impl Default for ApplicationRecord {
    fn default() -> Self {
        Self::new_default()
    }
}
