//! Checklist definitions and the caller-owned scoring input
//!
//! The fifteen criteria are a closed enum. Weights, labels and remediation
//! actions are exhaustive matches over it, so adding an item without filling
//! in its tables does not compile.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::warn;

/// One yes/no clinical-safety criterion about an AI-generated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChecklistItem {
    DosePresent,
    RoutePresent,
    FrequencyPresent,
    DurationPresent,
    ContraindicationsPresent,
    InteractionsPresent,
    MonitoringPresent,
    RedFlagsPresent,
    PatientFactorsConsidered,
    SourcesProvided,
    SourcesVerifiable,
    UncertaintyFlagged,
    NoAbsoluteLanguage,
    PlainLanguage,
    CulturallySensitive,
}

impl ChecklistItem {
    pub const COUNT: usize = 15;

    /// Every item, in declaration order
    pub const ALL: [ChecklistItem; Self::COUNT] = [
        ChecklistItem::DosePresent,
        ChecklistItem::RoutePresent,
        ChecklistItem::FrequencyPresent,
        ChecklistItem::DurationPresent,
        ChecklistItem::ContraindicationsPresent,
        ChecklistItem::InteractionsPresent,
        ChecklistItem::MonitoringPresent,
        ChecklistItem::RedFlagsPresent,
        ChecklistItem::PatientFactorsConsidered,
        ChecklistItem::SourcesProvided,
        ChecklistItem::SourcesVerifiable,
        ChecklistItem::UncertaintyFlagged,
        ChecklistItem::NoAbsoluteLanguage,
        ChecklistItem::PlainLanguage,
        ChecklistItem::CulturallySensitive,
    ];

    /// Position in declaration order
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable identifier used in state files and JSON output
    pub fn id(self) -> &'static str {
        match self {
            ChecklistItem::DosePresent => "dose-present",
            ChecklistItem::RoutePresent => "route-present",
            ChecklistItem::FrequencyPresent => "frequency-present",
            ChecklistItem::DurationPresent => "duration-present",
            ChecklistItem::ContraindicationsPresent => "contraindications-present",
            ChecklistItem::InteractionsPresent => "interactions-present",
            ChecklistItem::MonitoringPresent => "monitoring-present",
            ChecklistItem::RedFlagsPresent => "red-flags-present",
            ChecklistItem::PatientFactorsConsidered => "patient-factors-considered",
            ChecklistItem::SourcesProvided => "sources-provided",
            ChecklistItem::SourcesVerifiable => "sources-verifiable",
            ChecklistItem::UncertaintyFlagged => "uncertainty-flagged",
            ChecklistItem::NoAbsoluteLanguage => "no-absolute-language",
            ChecklistItem::PlainLanguage => "plain-language",
            ChecklistItem::CulturallySensitive => "culturally-sensitive",
        }
    }

    /// Form field id the checklist page used for this item
    fn legacy_id(self) -> &'static str {
        match self {
            ChecklistItem::DosePresent => "dosePresent",
            ChecklistItem::RoutePresent => "routePresent",
            ChecklistItem::FrequencyPresent => "freqPresent",
            ChecklistItem::DurationPresent => "durationPresent",
            ChecklistItem::ContraindicationsPresent => "contraPresent",
            ChecklistItem::InteractionsPresent => "interactionsPresent",
            ChecklistItem::MonitoringPresent => "monitoringPresent",
            ChecklistItem::RedFlagsPresent => "redFlagsPresent",
            ChecklistItem::PatientFactorsConsidered => "patientFactors",
            ChecklistItem::SourcesProvided => "sourcesProvided",
            ChecklistItem::SourcesVerifiable => "sourcesVerifiable",
            ChecklistItem::UncertaintyFlagged => "uncertainty",
            ChecklistItem::NoAbsoluteLanguage => "noAbsoluteLanguage",
            ChecklistItem::PlainLanguage => "plainLanguage",
            ChecklistItem::CulturallySensitive => "culturalSensitivity",
        }
    }

    /// Risk points added when this item is NOT ticked
    pub fn weight(self) -> u32 {
        match self {
            ChecklistItem::DosePresent => 2,
            ChecklistItem::RoutePresent => 1,
            ChecklistItem::FrequencyPresent => 2,
            ChecklistItem::DurationPresent => 1,

            ChecklistItem::ContraindicationsPresent => 2,
            ChecklistItem::InteractionsPresent => 2,
            ChecklistItem::MonitoringPresent => 1,
            ChecklistItem::RedFlagsPresent => 1,

            ChecklistItem::PatientFactorsConsidered => 2,
            ChecklistItem::SourcesProvided => 2,
            ChecklistItem::SourcesVerifiable => 2,
            ChecklistItem::UncertaintyFlagged => 1,

            ChecklistItem::NoAbsoluteLanguage => 1,
            ChecklistItem::PlainLanguage => 1,
            ChecklistItem::CulturallySensitive => 1,
        }
    }

    /// The question a reviewer answers when ticking this item
    pub fn label(self) -> &'static str {
        match self {
            ChecklistItem::DosePresent => "Dose/strength is stated",
            ChecklistItem::RoutePresent => "Route/formulation is stated",
            ChecklistItem::FrequencyPresent => "Frequency and maximum use are stated",
            ChecklistItem::DurationPresent => "Duration or stop criteria are stated",
            ChecklistItem::ContraindicationsPresent => "Contraindications/cautions are covered",
            ChecklistItem::InteractionsPresent => "Drug interactions are covered",
            ChecklistItem::MonitoringPresent => "Monitoring requirements are covered",
            ChecklistItem::RedFlagsPresent => "Red flags and safety-netting are included",
            ChecklistItem::PatientFactorsConsidered => "Patient factors are considered",
            ChecklistItem::SourcesProvided => "Sources are provided",
            ChecklistItem::SourcesVerifiable => "Sources are real and verifiable",
            ChecklistItem::UncertaintyFlagged => "Uncertainty is acknowledged",
            ChecklistItem::NoAbsoluteLanguage => "No absolute or overconfident language",
            ChecklistItem::PlainLanguage => "Plain, patient-friendly language",
            ChecklistItem::CulturallySensitive => "Culturally sensitive and accessible",
        }
    }

    /// Remediation suggested when this item is missing
    pub fn action(self) -> Option<&'static str> {
        let action = match self {
            ChecklistItem::DosePresent => {
                "Verify the dose/strength in a trusted source (e.g., BNF/local guidance)."
            }
            ChecklistItem::RoutePresent => {
                "Confirm route/formulation and ensure the advice matches the product."
            }
            ChecklistItem::FrequencyPresent => {
                "Check frequency/maximum usage advice (avoid unsafe overuse)."
            }
            ChecklistItem::DurationPresent => "Clarify duration/stop criteria where relevant.",
            ChecklistItem::ContraindicationsPresent => {
                "Check contraindications/cautions for the patient’s comorbidities."
            }
            ChecklistItem::InteractionsPresent => {
                "Check for clinically significant drug–drug interactions."
            }
            ChecklistItem::MonitoringPresent => {
                "Confirm monitoring requirements (labs/response) where relevant."
            }
            ChecklistItem::RedFlagsPresent => {
                "Add safety-netting and clear red flags for urgent review."
            }
            ChecklistItem::PatientFactorsConsidered => {
                "Consider patient factors (renal/hepatic, pregnancy, age, asthma control, etc.)."
            }
            ChecklistItem::SourcesProvided => {
                "Require sources; avoid using uncited outputs for clinical decisions."
            }
            ChecklistItem::SourcesVerifiable => {
                "Verify citations are real and up-to-date (avoid fabricated references)."
            }
            ChecklistItem::UncertaintyFlagged => {
                "Look for uncertainty; if missing, assume it may be incomplete and verify."
            }
            ChecklistItem::NoAbsoluteLanguage => {
                "Be cautious of absolute claims; verify and contextualise."
            }
            ChecklistItem::PlainLanguage => "Rephrase into clear patient-friendly counselling.",
            ChecklistItem::CulturallySensitive => {
                "Adapt counselling for health literacy, language needs, and beliefs."
            }
        };
        Some(action)
    }
}

impl std::fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for ChecklistItem {
    type Err = UnknownItem;

    /// Accepts the kebab-case id or the legacy form field id
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ChecklistItem::ALL
            .into_iter()
            .find(|item| item.id() == s || item.legacy_id() == s)
            .ok_or_else(|| UnknownItem(s.to_string()))
    }
}

/// An identifier that names no checklist item
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown checklist item: {0}")]
pub struct UnknownItem(pub String);

/// Weight for an identifier coming from outside the enum.
///
/// Unknown ids count as 1.
pub fn weight_for_id(id: &str) -> u32 {
    id.parse::<ChecklistItem>().map(ChecklistItem::weight).unwrap_or(1)
}

/// Remediation action for an identifier coming from outside the enum
pub fn action_for_id(id: &str) -> Option<&'static str> {
    id.parse::<ChecklistItem>().ok().and_then(ChecklistItem::action)
}

/// Sum of every item's weight: the score of an empty checklist
pub fn max_checklist_score() -> u32 {
    ChecklistItem::ALL.iter().map(|item| item.weight()).sum()
}

/// Ticked/unticked state for all fifteen items
///
/// Serialized as a map keyed by item id. Keys missing from the source are
/// unticked; unknown keys are dropped with a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "BTreeMap<String, bool>")]
pub struct ChecklistState {
    ticked: [bool; ChecklistItem::COUNT],
}

impl ChecklistState {
    /// Every item unticked
    pub fn new() -> Self {
        Self::default()
    }

    /// Every item ticked
    pub fn all_ticked() -> Self {
        Self {
            ticked: [true; ChecklistItem::COUNT],
        }
    }

    /// Build a state with exactly the given items ticked
    pub fn with_ticked<I>(items: I) -> Self
    where
        I: IntoIterator<Item = ChecklistItem>,
    {
        let mut state = Self::new();
        for item in items {
            state.tick(item);
        }
        state
    }

    pub fn is_ticked(&self, item: ChecklistItem) -> bool {
        self.ticked[item.index()]
    }

    pub fn set(&mut self, item: ChecklistItem, ticked: bool) {
        self.ticked[item.index()] = ticked;
    }

    pub fn tick(&mut self, item: ChecklistItem) {
        self.set(item, true);
    }

    pub fn untick(&mut self, item: ChecklistItem) {
        self.set(item, false);
    }

    pub fn ticked_count(&self) -> usize {
        self.ticked.iter().filter(|t| **t).count()
    }

    /// Unticked items in declaration order
    pub fn unticked(&self) -> impl Iterator<Item = ChecklistItem> + '_ {
        ChecklistItem::ALL
            .into_iter()
            .filter(move |item| !self.is_ticked(*item))
    }

    /// (item, ticked) pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ChecklistItem, bool)> + '_ {
        ChecklistItem::ALL
            .into_iter()
            .map(move |item| (item, self.is_ticked(item)))
    }
}

impl From<BTreeMap<String, bool>> for ChecklistState {
    fn from(map: BTreeMap<String, bool>) -> Self {
        let mut state = Self::new();
        for (key, ticked) in map {
            match key.parse::<ChecklistItem>() {
                Ok(item) => state.set(item, ticked),
                Err(e) => warn!("Ignoring {}", e),
            }
        }
        state
    }
}

impl Serialize for ChecklistState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ChecklistItem::COUNT))?;
        for (item, ticked) in self.iter() {
            map.serialize_entry(item.id(), &ticked)?;
        }
        map.end()
    }
}

/// Everything the scorer reads: checklist plus the pasted AI output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringInput {
    #[serde(default)]
    pub checklist: ChecklistState,
    #[serde(default)]
    pub text: String,
}

impl ScoringInput {
    pub fn new(checklist: ChecklistState, text: impl Into<String>) -> Self {
        Self {
            checklist,
            text: text.into(),
        }
    }
}

/// The empty input: nothing ticked, no text
pub fn reset() -> ScoringInput {
    ScoringInput::default()
}
