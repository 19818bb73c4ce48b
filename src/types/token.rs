use serde::{Deserialize, Serialize};

/// Static catalog entry describing a listed token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Display name, also used as the pair identifier (e.g. `KDA`)
    pub name: String,
    /// Pact module reference (e.g. `coin`, `kaddex.kdx`)
    pub code: String,
    /// Identifier used by the stats service's volume records
    pub stats_id: String,
    /// Glyph drawn next to the token name
    pub icon: String,
    /// Decimal precision of the token
    #[serde(default = "default_precision")]
    pub precision: u32,
    /// Whether the token is pegged to one US dollar
    #[serde(default)]
    pub is_usd_stable: bool,
}

fn default_precision() -> u32 {
    crate::core::constants::DEFAULT_PRECISION
}

impl TokenRecord {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        stats_id: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            stats_id: stats_id.into(),
            icon: icon.into(),
            precision: default_precision(),
            is_usd_stable: false,
        }
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn usd_stable(mut self) -> Self {
        self.is_usd_stable = true;
        self
    }
}

/// A catalog token merged with the aggregates derived from pairs and volumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRow {
    #[serde(flatten)]
    pub token: TokenRecord,
    /// Sum of the token's reserves across every pair containing it
    pub liquidity: f64,
    /// `liquidity` valued in USD, absent when no price is known
    pub liquidity_usd: Option<f64>,
    /// Token volume traded over the last day across its pairs
    pub volume_24h: f64,
    /// `volume_24h` valued in USD, absent when no price is known
    pub volume_24h_usd: Option<f64>,
    /// Highest APR among the token's pairs (0 when it has none)
    pub apr: f64,
}

impl TokenRow {
    pub fn name(&self) -> &str {
        &self.token.name
    }
}
