//! AI-Verify Library
//!
//! Checklist risk scoring for AI-generated clinical text.

pub mod analyzer;
pub mod checklist;
pub mod config;
pub mod report;
pub mod state;

pub use analyzer::score;
pub use checklist::{reset, ChecklistItem, ChecklistState, ScoringInput};
pub use report::summarize;

use serde::{Deserialize, Serialize};

/// Severity band derived from the numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityBand {
    /// Score 8 or below
    Green,
    /// Score 9 to 15
    Amber,
    /// Score 16 or above
    Red,
}

impl SeverityBand {
    /// Style tag a renderer attaches to the result box
    pub fn class_tag(self) -> &'static str {
        match self {
            SeverityBand::Green => "good",
            SeverityBand::Amber => "warn",
            SeverityBand::Red => "bad",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            SeverityBand::Green => {
                "Low risk based on checklist. Still verify key clinical details in trusted sources."
            }
            SeverityBand::Amber => {
                "Moderate risk. Verify key details before relying on this information."
            }
            SeverityBand::Red => {
                "High risk. Do not rely on this without thorough verification and professional judgement."
            }
        }
    }
}

impl std::fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeverityBand::Green => write!(f, "Green"),
            SeverityBand::Amber => write!(f, "Amber"),
            SeverityBand::Red => write!(f, "Red"),
        }
    }
}

/// Outcome of one scoring run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Weighted risk points
    pub score: u32,
    /// Band the score falls in
    pub band: SeverityBand,
    /// Renderer style tag (good, warn, bad)
    pub class_tag: String,
    /// Human-readable advisory for the band
    pub message: String,
    /// Remediation actions, at most six, checklist order
    pub actions: Vec<String>,
    /// Items that contributed to the score, deduplicated
    pub missing: Vec<ChecklistItem>,
    /// Whether the pasted text tripped the absolute-language check
    pub absolute_language: bool,
}

/// What a renderer shows in the result area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResultPanel {
    /// Nothing scored yet
    #[default]
    Pending,
    Scored(ScoringResult),
}

impl ResultPanel {
    pub const PENDING_LABEL: &'static str = "—";
    pub const PENDING_MESSAGE: &'static str = "Tick the checklist and click “Score risk”.";

    /// Band name, or a dash before scoring
    pub fn label(&self) -> String {
        match self {
            ResultPanel::Pending => Self::PENDING_LABEL.to_string(),
            ResultPanel::Scored(r) => r.band.to_string(),
        }
    }

    pub fn score_text(&self) -> String {
        match self {
            ResultPanel::Pending => format!("Score: {}", Self::PENDING_LABEL),
            ResultPanel::Scored(r) => format!("Score: {}", r.score),
        }
    }

    pub fn class_tag(&self) -> &str {
        match self {
            ResultPanel::Pending => "neutral",
            ResultPanel::Scored(r) => &r.class_tag,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ResultPanel::Pending => Self::PENDING_MESSAGE,
            ResultPanel::Scored(r) => &r.message,
        }
    }

    pub fn actions(&self) -> &[String] {
        match self {
            ResultPanel::Pending => &[],
            ResultPanel::Scored(r) => &r.actions,
        }
    }
}

impl From<ScoringResult> for ResultPanel {
    fn from(result: ScoringResult) -> Self {
        ResultPanel::Scored(result)
    }
}
