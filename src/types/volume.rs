use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Traded volume between two tokens on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeEntry {
    #[serde(default)]
    pub token_from_namespace: Option<String>,
    pub token_from_name: String,
    #[serde(default)]
    pub token_to_namespace: Option<String>,
    pub token_to_name: String,
    #[serde(default)]
    pub token_from_volume: f64,
    #[serde(default)]
    pub token_to_volume: f64,
}

impl VolumeEntry {
    /// Stats identifier of the sold token (`namespace.name` or bare `name`)
    pub fn from_id(&self) -> String {
        qualified(self.token_from_namespace.as_deref(), &self.token_from_name)
    }

    /// Stats identifier of the bought token
    pub fn to_id(&self) -> String {
        qualified(self.token_to_namespace.as_deref(), &self.token_to_name)
    }

    /// Volume traded on `stats_id`'s side of this entry
    pub fn volume_of(&self, stats_id: &str) -> f64 {
        let mut volume = 0.0;
        if self.from_id() == stats_id {
            volume += self.token_from_volume;
        }
        if self.to_id() == stats_id {
            volume += self.token_to_volume;
        }
        volume
    }

    /// Whether the entry is a trade between `a` and `b` in either direction
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        let (from, to) = (self.from_id(), self.to_id());
        (from == a && to == b) || (from == b && to == a)
    }
}

fn qualified(namespace: Option<&str>, name: &str) -> String {
    match namespace {
        Some(ns) if !ns.is_empty() => format!("{}.{}", ns, name),
        _ => name.to_string(),
    }
}

/// All swap volumes recorded on one day for one chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyVolume {
    #[serde(deserialize_with = "deserialize_day")]
    pub day: NaiveDate,
    #[serde(default)]
    pub chain: Option<u8>,
    #[serde(default)]
    pub volumes: Vec<VolumeEntry>,
}

fn deserialize_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.date_naive())
        .map_err(serde::de::Error::custom)
}

/// Daily volume records as returned by the stats service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VolumeDataset {
    pub days: Vec<DailyVolume>,
}

impl VolumeDataset {
    pub fn new(days: Vec<DailyVolume>) -> Self {
        Self { days }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Most recent day present in the dataset
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.days.iter().map(|d| d.day).max()
    }

    /// Every entry recorded on the most recent day, across all chains
    pub fn latest_day(&self) -> impl Iterator<Item = &VolumeEntry> {
        let latest = self.latest_date();
        self.days
            .iter()
            .filter(move |d| Some(d.day) == latest)
            .flat_map(|d| d.volumes.iter())
    }
}
