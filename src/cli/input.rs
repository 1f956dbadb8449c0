//! Gathering the scoring input from flags, stdin and state files

use ai_verify::checklist::{ChecklistItem, ChecklistState, ScoringInput};
use ai_verify::config::Config;
use ai_verify::state::load_input;
use clap::Args;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// State file (YAML or JSON) holding the checklist and text
    #[arg(short, long)]
    pub state: Option<PathBuf>,

    /// Tick a checklist item (repeatable), e.g. dose-present
    #[arg(short, long = "tick", value_name = "ITEM")]
    pub tick: Vec<ChecklistItem>,

    /// Untick a checklist item (repeatable)
    #[arg(short, long = "untick", value_name = "ITEM")]
    pub untick: Vec<ChecklistItem>,

    /// Start from every item ticked
    #[arg(long)]
    pub all: bool,

    /// The AI output to scan
    #[arg(long, conflicts_with = "text_file")]
    pub text: Option<String>,

    /// Read the AI output from a file ("-" for stdin)
    #[arg(long)]
    pub text_file: Option<PathBuf>,
}

impl InputArgs {
    /// Build the input: state file first, then flags on top
    pub fn resolve(&self, config: &Config) -> anyhow::Result<ScoringInput> {
        let mut input = match self.state.as_ref() {
            Some(path) => load_input(path)?,
            None => match config.state_path.as_ref().filter(|p| p.exists()) {
                Some(path) => {
                    info!("Using state file {}", path.display());
                    load_input(path)?
                }
                None => ScoringInput::default(),
            },
        };

        if self.all {
            input.checklist = ChecklistState::all_ticked();
        }
        for item in &self.tick {
            input.checklist.tick(*item);
        }
        for item in &self.untick {
            input.checklist.untick(*item);
        }

        if let Some(ref text) = self.text {
            input.text = text.clone();
        } else if let Some(ref path) = self.text_file {
            input.text = read_text(path)?;
        }

        debug!(
            "Input: {}/{} ticked, {} chars",
            input.checklist.ticked_count(),
            ChecklistItem::COUNT,
            input.text.chars().count()
        );
        Ok(input)
    }
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
