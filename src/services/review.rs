//! Screen-review prompt composition.
//!
//! The collaborator's answer is treated as opaque text; nothing here parses
//! the verdict.

use crate::domain::application::{ApplicationError, ApplicationRecord};
use crate::services::export::to_json;

pub const REVIEW_TAB: &str = "TW Premarket";
pub const REVIEW_AGENT: &str = "Screen Reviewer";

pub const REVIEW_SYSTEM_PROMPT: &str = "You are a TFDA premarket screen reviewer. Analyze the application for completeness and consistency based on the TFDA regulations.";

/// Output shown when the collaborator call fails.
pub const REVIEW_FAILED: &str = "Error generating review.";

/// Output shown when a free-text tool call fails.
pub const TOOL_FAILED: &str = "Error processing request.";

/// Verdicts the reviewer is asked to choose from.
pub const VERDICTS: [&str; 3] = ["Pass", "Conditional", "Fail"];

/// Build the user prompt: the full JSON record followed by the review task.
pub fn compose_review_prompt(record: &ApplicationRecord) -> Result<String, ApplicationError> {
    let json = to_json(record)?;
    Ok(format!(
        "=== Application Data ===\n\
         {json}\n\
         \n\
         Task: Perform a screen review.\n\
         1. List missing fields based on 'completeness'.\n\
         2. Check for internal inconsistencies (e.g. Class II device but missing QMS info, or Manufacturer country mismatch).\n\
         3. Provide a summary verdict ({verdicts}).\n",
        json = json,
        verdicts = VERDICTS.join("/"),
    ))
}

/// Text length in UTF-16 code units, the unit the estimate is defined in.
pub fn text_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Crude token estimate: four characters per token, rounded up.
pub fn estimate_tokens(prompt_len: usize, response_len: usize) -> u64 {
    (prompt_len + response_len).div_ceil(4) as u64
}

/// [`estimate_tokens`] for a prompt/response pair.
pub fn estimate_exchange_tokens(prompt: &str, response: &str) -> u64 {
    estimate_tokens(text_len(prompt), text_len(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn prompt_embeds_full_record_json() {
        let mut record =
            ApplicationRecord::default_on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        record.name_en = "Cardiac Stent".into();

        let prompt = compose_review_prompt(&record).unwrap();
        assert!(prompt.starts_with("=== Application Data ===\n{\n"));
        assert!(prompt.contains(&to_json(&record).unwrap()));
        assert!(prompt.contains("List missing fields"));
        assert!(prompt.contains("internal inconsistencies"));
        assert!(prompt.contains("(Pass/Conditional/Fail)"));
    }

    #[test]
    fn prompt_is_deterministic() {
        let record = ApplicationRecord::default_on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(
            compose_review_prompt(&record).unwrap(),
            compose_review_prompt(&record).unwrap()
        );
    }

    #[test]
    fn token_estimate_rounds_up_quarter_length() {
        assert_eq!(estimate_tokens(100, 300), 100);
        assert_eq!(estimate_tokens(1, 0), 1);
        assert_eq!(estimate_tokens(0, 0), 0);
        assert_eq!(estimate_tokens(5, 2), 2);
    }

    #[test]
    fn length_counts_utf16_units() {
        assert_eq!(text_len("心臟支架"), 4);
        assert_eq!(estimate_exchange_tokens("心臟支架", "ok"), 2);
    }
}
