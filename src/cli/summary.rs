//! Summary command - one shareable line for a scored output

use super::input::InputArgs;
use ai_verify::analyzer::score_input;
use ai_verify::config::Config;
use ai_verify::report::{summarize, ExportRecord, OutputFormat};
use ai_verify::ResultPanel;
use std::path::Path;
use tracing::{info, warn};

pub fn run(
    args: &InputArgs,
    format: Option<OutputFormat>,
    out: Option<&Path>,
    config: &Config,
) -> anyhow::Result<()> {
    let input = args.resolve(config)?;
    let result = score_input(&input);

    let line = match format.unwrap_or(config.format) {
        OutputFormat::Text => summarize(&result, &input.text),
        OutputFormat::Json => {
            let record = ExportRecord::new(&ResultPanel::from(result), &input.text);
            serde_json::to_string(&record)?
        }
    };

    println!("{}", line);

    // The summary was produced either way; a failed sink is only reported
    if let Some(path) = out {
        match std::fs::write(path, format!("{}\n", line)) {
            Ok(()) => info!("Summary written to {}", path.display()),
            Err(e) => warn!("Could not write summary to {}: {}", path.display(), e),
        }
    }

    Ok(())
}
