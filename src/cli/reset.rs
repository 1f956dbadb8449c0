//! Reset command - clear the checklist and text

use ai_verify::config::Config;
use ai_verify::report::render_text;
use ai_verify::state::save_input;
use ai_verify::{reset, ResultPanel};
use std::path::PathBuf;
use tracing::info;

pub fn run(state: Option<PathBuf>, config: &Config) -> anyhow::Result<()> {
    let input = reset();

    match state.or_else(|| config.state_path.clone()) {
        Some(path) => {
            save_input(&path, &input)?;
            info!("Cleared {}", path.display());
            println!("✅ Checklist reset: {}", path.display());
        }
        None => println!("✅ Checklist reset (no state file configured)"),
    }

    print!("{}", render_text(&ResultPanel::Pending));
    Ok(())
}
