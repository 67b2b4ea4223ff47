//! Agent catalog
//!
//! The review agent and the free-text tools that share its dispatch path.

use serde::{Deserialize, Serialize};

/// Read-only agent configuration entry.
#[derive(Debug, Clone, Serialize)]
pub struct AgentConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub model: &'static str,
    pub system_prompt: &'static str,
    pub max_tokens: u32,
    pub category: &'static str,
}

pub const DEFAULT_AGENTS: &[AgentConfig] = &[
    AgentConfig {
        id: "tw_screen_review",
        name: "TFDA Screen Review",
        model: "gemini-2.5-flash",
        system_prompt: "You are a TFDA premarket screen reviewer. Analyze the application for completeness.",
        max_tokens: 4000,
        category: "TFDA",
    },
    AgentConfig {
        id: "fda_510k_analyst",
        name: "510(k) Analyst",
        model: "gemini-2.5-flash",
        system_prompt: "You are an FDA 510(k) analyst. Summarize device info and predicate comparisons.",
        max_tokens: 4000,
        category: "FDA",
    },
    AgentConfig {
        id: "note_organizer",
        name: "Note Organizer",
        model: "gemini-2.5-flash",
        system_prompt: "Organize messy notes into structured Markdown. Highlight risks and action items.",
        max_tokens: 2000,
        category: "Productivity",
    },
];

/// A free-text tool: fixed system instruction, user-supplied input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextTool {
    pub id: &'static str,
    pub tab: &'static str,
    pub agent: &'static str,
    pub system_prompt: &'static str,
    pub default_input: &'static str,
}

pub const TEXT_TOOLS: &[TextTool] = &[
    TextTool {
        id: "five-ten-k",
        tab: "510(k) Intelligence",
        agent: "510(k) Analyst",
        system_prompt: "You are an FDA 510(k) analyst. Summarize the device information, predicate comparisons, and testing requirements.",
        default_input: "Device: New MRI System\nPredicate: K123456\nTech: 1.5T Magnet...",
    },
    TextTool {
        id: "pdf-to-md",
        tab: "PDF → Markdown",
        agent: "PDF Converter",
        system_prompt: "You are a document converter. Convert the provided raw text (extracted from PDF) into clean, structured Markdown format.",
        default_input: "",
    },
    TextTool {
        id: "notes",
        tab: "Note Keeper",
        agent: "Note Organizer",
        system_prompt: "Organize the following messy notes into a structured report. Highlight Action Items and Risks.",
        default_input: "",
    },
];

pub fn text_tool(id: &str) -> Option<&'static TextTool> {
    TEXT_TOOLS.iter().find(|t| t.id == id)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunToolRequest {
    /// Falls back to the tool's default input when absent.
    pub input: Option<String>,
}

impl RunToolRequest {
    pub fn into_input(self, tool: &TextTool) -> String {
        self.input
            .unwrap_or_else(|| tool.default_input.to_string())
    }
}

/// Outcome of a collaborator dispatch. `succeeded == false` means `output`
/// holds the failure placeholder and nothing was logged.
#[derive(Debug, Clone, Serialize)]
pub struct AgentRunResponse {
    pub tab: String,
    pub agent: String,
    pub output: String,
    pub succeeded: bool,
    pub requested_model: String,
    pub effective_model: String,
    pub model_substituted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_est: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_id: Option<uuid::Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tools_resolve_by_id() {
        assert_eq!(text_tool("notes").map(|t| t.agent), Some("Note Organizer"));
        assert!(text_tool("tw-premarket").is_none());
    }

    #[test]
    fn missing_input_uses_tool_default() {
        let tool = text_tool("five-ten-k").unwrap();
        assert!(RunToolRequest::default().into_input(tool).starts_with("Device: New MRI System"));

        let req: RunToolRequest = serde_json::from_str(r#"{"input": ""}"#).unwrap();
        assert_eq!(req.into_input(tool), "");
    }
}
