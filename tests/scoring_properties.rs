use ai_verify::analyzer::{score, MAX_ACTIONS};
use ai_verify::report::summarize;
use ai_verify::{ChecklistItem, ChecklistState, SeverityBand};

/// A checklist whose unticked items add up to exactly `target` points
fn state_scoring(target: u32) -> ChecklistState {
    let mut state = ChecklistState::all_ticked();
    let mut remaining = target;
    for item in ChecklistItem::ALL {
        if remaining >= item.weight() {
            state.untick(item);
            remaining -= item.weight();
        }
    }
    assert_eq!(remaining, 0, "cannot build a state scoring {}", target);
    state
}

#[test]
fn all_ticked_scores_zero() {
    let result = score(&ChecklistState::all_ticked(), "");
    assert_eq!(result.score, 0);
    assert_eq!(result.band, SeverityBand::Green);
}

#[test]
fn none_ticked_scores_sum_of_weights() {
    let result = score(&ChecklistState::new(), "");
    assert_eq!(result.score, 22);
    assert_eq!(result.band, SeverityBand::Red);
}

#[test]
fn band_boundaries() {
    for (target, band) in [
        (8, SeverityBand::Green),
        (9, SeverityBand::Amber),
        (15, SeverityBand::Amber),
        (16, SeverityBand::Red),
    ] {
        let result = score(&state_scoring(target), "");
        assert_eq!(result.score, target);
        assert_eq!(result.band, band, "score {}", target);
    }
}

#[test]
fn unticking_never_lowers_score() {
    let texts = ["", "always check", "Plain advice"];
    for text in texts {
        for mask in [0u32, 0b101_0101_0101_0101, 0b111_1111_1111_1111, 0b000_1111_0000_1111] {
            let state = ChecklistState::with_ticked(
                ChecklistItem::ALL
                    .into_iter()
                    .filter(|i| mask & (1 << i.index()) != 0),
            );
            let before = score(&state, text).score;
            for item in ChecklistItem::ALL.into_iter().filter(|i| state.is_ticked(*i)) {
                let mut unticked = state;
                unticked.untick(item);
                assert!(score(&unticked, text).score >= before, "{} lowered the score", item);
            }
        }
    }
}

#[test]
fn scoring_is_repeatable() {
    let state = state_scoring(11);
    let text = "You must never exceed four doses";
    assert_eq!(score(&state, text), score(&state, text));
}

#[test]
fn absolute_language_counted_once() {
    let state = ChecklistState::new();
    let result = score(&state, "ALWAYS take with food");
    assert_eq!(result.score, 23);
    let hits = result
        .missing
        .iter()
        .filter(|i| **i == ChecklistItem::NoAbsoluteLanguage)
        .count();
    assert_eq!(hits, 1);
}

#[test]
fn actions_capped_and_unique() {
    let result = score(&ChecklistState::new(), "guaranteed");
    assert!(result.actions.len() <= MAX_ACTIONS);
    let mut sorted = result.actions.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), result.actions.len());
}

#[test]
fn summary_snippet_lengths() {
    let result = score(&ChecklistState::all_ticked(), "");

    let long = "x".repeat(300);
    let summary = summarize(&result, &long);
    let snippet = summary
        .split("Snippet: \"")
        .nth(1)
        .unwrap()
        .trim_end_matches('"');
    assert_eq!(snippet, format!("{}…", "x".repeat(240)));

    let short = "y".repeat(100);
    let summary = summarize(&result, &short);
    assert!(summary.ends_with(&format!("Snippet: \"{}\"", short)));
}
