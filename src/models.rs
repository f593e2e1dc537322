use serde::{Deserialize, Serialize};

/// App-switching frequency as self-reported on the daily form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchLevel {
    Low,
    Medium,
    High,
}

/// One day's raw form values. Ranges are not enforced here: out-of-range
/// numbers flow through the score arithmetic unchanged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyInputs {
    pub screen_time: f64,
    pub sleep: f64,
    pub breaks: bool,
    pub switches: SwitchLevel,
    pub focus: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Focused,
    Drifting,
    #[serde(rename = "Burnout Risk")]
    BurnoutRisk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorClass {
    Green,
    Yellow,
    Red,
}

/// Derived scores and guidance for one day. Both scores are clamped to
/// [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyResults {
    pub burnout_score: u8,
    pub focus_stability: u8,
    pub status: Status,
    pub color_class: ColorClass,
    pub message: String,
    pub tips: Vec<String>,
}

/// One recorded day, keyed by its ISO `YYYY-MM-DD` date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub date: String,
    pub inputs: DailyInputs,
    pub results: DailyResults,
}

/// The whole persisted collection. Serializes as a bare JSON array of
/// entries; at most one entry per date.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct AppData {
    pub entries: Vec<Entry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EntryRequest {
    pub date: String,
    pub inputs: DailyInputs,
}

/// View model for the trend chart: three parallel series, oldest first.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrendResponse {
    pub labels: Vec<String>,
    pub burnout: Vec<u8>,
    pub focus: Vec<u8>,
}
