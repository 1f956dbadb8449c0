//! Checklist risk scorer
//!
//! Turns a checklist state and the pasted AI output into a weighted score,
//! a severity band and a short list of remediation actions.

pub mod language;
pub mod risk_scorer;

use super::checklist::{ChecklistItem, ChecklistState, ScoringInput};
use super::ScoringResult;
use tracing::debug;

/// Most actions returned for one result
pub const MAX_ACTIONS: usize = 6;

/// Score a checklist and text
pub fn score(checklist: &ChecklistState, text: &str) -> ScoringResult {
    let mut total = 0;
    let mut missing = Vec::new();

    for item in checklist.unticked() {
        total += item.weight();
        missing.push(item);
    }

    let absolute_language = language::has_absolute_language(text);
    if absolute_language {
        debug!("Absolute language found in text");
        total += 1;
        if !missing.contains(&ChecklistItem::NoAbsoluteLanguage) {
            missing.push(ChecklistItem::NoAbsoluteLanguage);
        }
    }

    let band = risk_scorer::calculate_band(total);
    debug!("Scored {} ({} missing) -> {}", total, missing.len(), band);

    let actions = build_actions(&missing);

    ScoringResult {
        score: total,
        band,
        class_tag: band.class_tag().to_string(),
        message: band.message().to_string(),
        actions,
        missing,
        absolute_language,
    }
}

/// Score a bundled input
pub fn score_input(input: &ScoringInput) -> ScoringResult {
    score(&input.checklist, &input.text)
}

/// Map missing items to their actions, first occurrence wins, capped at six
pub fn build_actions(missing: &[ChecklistItem]) -> Vec<String> {
    let mut seen = Vec::with_capacity(missing.len());
    for item in missing {
        if !seen.contains(item) {
            seen.push(*item);
        }
    }

    seen.into_iter()
        .filter_map(ChecklistItem::action)
        .take(MAX_ACTIONS)
        .map(str::to_string)
        .collect()
}
