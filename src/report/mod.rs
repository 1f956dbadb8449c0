//! Result rendering and the one-line summary used for sharing

use crate::{ResultPanel, ScoringResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest snippet of the pasted text kept in a summary
pub const SNIPPET_CHARS: usize = 240;
/// Marker appended when the snippet was cut
pub const ELLIPSIS: &str = "…";

/// Output format for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("unknown output format '{}' (expected text or json)", other),
        }
    }
}

/// One-line summary of a scored result and the text it was scored on
pub fn summarize(result: &ScoringResult, text: &str) -> String {
    summarize_panel(&ResultPanel::Scored(result.clone()), text)
}

/// Summary line for any panel state, including the unscored placeholder
pub fn summarize_panel(panel: &ResultPanel, text: &str) -> String {
    let (snippet, truncated) = snippet(text);
    format!(
        "AI-VERIFY Result: {} ({}). Snippet: \"{}{}\"",
        panel.label(),
        panel.score_text(),
        snippet,
        if truncated { ELLIPSIS } else { "" }
    )
}

/// Collapse whitespace runs and cut to [`SNIPPET_CHARS`] characters.
///
/// Returns the snippet and whether anything was cut.
pub fn snippet(text: &str) -> (String, bool) {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match collapsed.char_indices().nth(SNIPPET_CHARS) {
        Some((cut, _)) => (collapsed[..cut].to_string(), true),
        None => (collapsed, false),
    }
}

/// Human-readable result block
pub fn render_text(panel: &ResultPanel) -> String {
    let mut out = String::new();
    let icon = match panel {
        ResultPanel::Pending => "⚪",
        ResultPanel::Scored(r) => match r.band {
            crate::SeverityBand::Green => "🟢",
            crate::SeverityBand::Amber => "🟠",
            crate::SeverityBand::Red => "🔴",
        },
    };
    out.push_str(&format!("{} {}  {}\n", icon, panel.label(), panel.score_text()));
    out.push_str(&format!("{}\n", panel.message()));

    if let ResultPanel::Scored(r) = panel {
        if !r.actions.is_empty() {
            out.push_str("\nActions:\n");
            for (i, action) in r.actions.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, action));
            }
        }
    }
    out
}

/// Pretty JSON for a panel
pub fn render_json(panel: &ResultPanel) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(panel)?)
}

/// Shareable record of a scoring run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRecord {
    pub generated_at: DateTime<Utc>,
    pub band: String,
    pub score: Option<u32>,
    pub summary: String,
    pub actions: Vec<String>,
}

impl ExportRecord {
    pub fn new(panel: &ResultPanel, text: &str) -> Self {
        let score = match panel {
            ResultPanel::Pending => None,
            ResultPanel::Scored(r) => Some(r.score),
        };
        Self {
            generated_at: Utc::now(),
            band: panel.label(),
            score,
            summary: summarize_panel(panel, text),
            actions: panel.actions().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::score;
    use crate::ChecklistState;

    #[test]
    fn test_summary_truncates_long_text() {
        let text = "a".repeat(300);
        let result = score(&ChecklistState::all_ticked(), &text);
        let summary = summarize(&result, &text);

        let expected = format!(
            "AI-VERIFY Result: Green (Score: 0). Snippet: \"{}…\"",
            "a".repeat(240)
        );
        assert_eq!(summary, expected);
    }

    #[test]
    fn test_summary_keeps_short_text() {
        let text = "b".repeat(100);
        let result = score(&ChecklistState::all_ticked(), &text);
        let summary = summarize(&result, &text);
        assert!(summary.ends_with(&format!("\"{}\"", text)));
        assert!(!summary.contains(ELLIPSIS));
    }

    #[test]
    fn test_snippet_collapses_whitespace() {
        let (s, cut) = snippet("  take\n\n two   tablets\t daily ");
        assert_eq!(s, "take two tablets daily");
        assert!(!cut);
    }

    #[test]
    fn test_snippet_counts_chars_not_bytes() {
        let text = "é".repeat(241);
        let (s, cut) = snippet(&text);
        assert_eq!(s.chars().count(), 240);
        assert!(cut);
    }

    #[test]
    fn test_pending_summary() {
        let summary = summarize_panel(&ResultPanel::Pending, "");
        assert_eq!(summary, "AI-VERIFY Result: — (Score: —). Snippet: \"\"");
    }

    #[test]
    fn test_render_text_lists_actions() {
        let result = score(&ChecklistState::new(), "");
        let out = render_text(&result.into());
        assert!(out.contains("Red"));
        assert!(out.contains("Score: 22"));
        assert!(out.contains("  6. "));
        assert!(!out.contains("  7. "));
    }

    #[test]
    fn test_render_text_pending() {
        let out = render_text(&ResultPanel::Pending);
        assert!(out.contains("Score: —"));
        assert!(out.contains(ResultPanel::PENDING_MESSAGE));
    }

    #[test]
    fn test_render_json_tags_state() {
        let json = render_json(&ResultPanel::Pending).unwrap();
        assert!(json.contains("\"state\": \"pending\""));

        let result = score(&ChecklistState::all_ticked(), "");
        let json = render_json(&result.into()).unwrap();
        assert!(json.contains("\"state\": \"scored\""));
        assert!(json.contains("\"band\": \"Green\""));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_export_record() {
        let result = score(&ChecklistState::new(), "");
        let record = ExportRecord::new(&result.into(), "text");
        assert_eq!(record.band, "Red");
        assert_eq!(record.score, Some(22));
        assert_eq!(record.actions.len(), 6);

        let pending = ExportRecord::new(&ResultPanel::Pending, "");
        assert_eq!(pending.score, None);
    }
}
