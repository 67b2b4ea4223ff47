//! JSON and CSV exports of the application record.

use crate::domain::application::{ApplicationError, ApplicationField, ApplicationRecord};

/// UTF-8 byte-order mark; spreadsheet tools need it to pick the right encoding.
pub const UTF8_BOM: &str = "\u{feff}";

/// Pretty-printed JSON with every field.
pub fn to_json(record: &ApplicationRecord) -> Result<String, ApplicationError> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// Inverse of [`to_json`].
pub fn from_json(json: &str) -> Result<ApplicationRecord, ApplicationError> {
    ApplicationRecord::from_json(json)
}

/// Header line of field names and one data line, every value quoted.
pub fn to_csv(record: &ApplicationRecord) -> Result<String, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .double_quote(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(vec![]);

    let header: Vec<&str> = ApplicationField::ALL.iter().map(|f| f.as_str()).collect();
    // Field names are plain identifiers; only values are quoted.
    let mut out = header.join(",");
    out.push('\n');

    let values: Vec<String> = record.values().map(|(_, v)| v.to_string()).collect();
    wtr.write_record(&values)?;
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    let row = String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })?;
    out.push_str(row.trim_end_matches('\n'));
    Ok(out)
}

/// CSV body as downloaded: BOM followed by [`to_csv`].
pub fn to_csv_download(record: &ApplicationRecord) -> Result<String, csv::Error> {
    Ok(format!("{}{}", UTF8_BOM, to_csv(record)?))
}

/// `Application_<docNo>.<ext>`, or `Application_Draft.<ext>` without a docNo.
pub fn export_file_name(record: &ApplicationRecord, ext: &str) -> String {
    let stem = if record.doc_no.is_empty() {
        "Draft"
    } else {
        record.doc_no.as_str()
    };
    format!("Application_{}.{}", stem, ext)
}
