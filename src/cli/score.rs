//! Score command - rate an AI output against the checklist

use super::input::InputArgs;
use ai_verify::analyzer::{language, score_input};
use ai_verify::config::Config;
use ai_verify::report::{render_json, render_text, OutputFormat};
use ai_verify::ResultPanel;

pub fn run(args: &InputArgs, format: Option<OutputFormat>, config: &Config) -> anyhow::Result<()> {
    let input = args.resolve(config)?;
    let result = score_input(&input);
    let terms = language::find_absolute_terms(&input.text);
    let panel = ResultPanel::from(result);

    match format.unwrap_or(config.format) {
        OutputFormat::Json => println!("{}", render_json(&panel)?),
        OutputFormat::Text => {
            println!("🩺 AI-Verify Risk Score");
            println!("──────────────────────");
            print!("{}", render_text(&panel));
            if !terms.is_empty() {
                println!("\n⚠️  Absolute language: {}", terms.join(", "));
            }
        }
    }

    Ok(())
}
