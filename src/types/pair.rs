use crate::utils::balance::{reduce_balance_default, PactDecimal};
use serde::{Deserialize, Serialize};

/// A liquidity pair and its current reserves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairRecord {
    pub token0: String,
    pub token1: String,
    /// Reserves in the order `[token0, token1]`
    pub reserves: [PactDecimal; 2],
}

impl PairRecord {
    pub fn new(token0: impl Into<String>, token1: impl Into<String>, reserves: [f64; 2]) -> Self {
        Self {
            token0: token0.into(),
            token1: token1.into(),
            reserves: [reserves[0].into(), reserves[1].into()],
        }
    }

    /// Whether either side of the pair is `token`
    pub fn contains(&self, token: &str) -> bool {
        self.token0 == token || self.token1 == token
    }

    /// Reduced reserve held for `token`, or `None` if the token is not in the pair
    pub fn reserve_of(&self, token: &str) -> Option<f64> {
        if self.token0 == token {
            Some(reduce_balance_default(&self.reserves[0]))
        } else if self.token1 == token {
            Some(reduce_balance_default(&self.reserves[1]))
        } else {
            None
        }
    }

    /// The token on the other side of the pair
    pub fn counterpart(&self, token: &str) -> Option<&str> {
        if self.token0 == token {
            Some(&self.token1)
        } else if self.token1 == token {
            Some(&self.token0)
        } else {
            None
        }
    }

    /// Display name such as `KDA/KDX`
    pub fn name(&self) -> String {
        format!("{}/{}", self.token0, self.token1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_of() {
        let pair = PairRecord::new("KDA", "KDX", [100.0, 250.0]);
        assert_eq!(pair.reserve_of("KDA"), Some(100.0));
        assert_eq!(pair.reserve_of("KDX"), Some(250.0));
        assert_eq!(pair.reserve_of("FLUX"), None);
        assert_eq!(pair.counterpart("KDX"), Some("KDA"));
        assert_eq!(pair.name(), "KDA/KDX");
    }

    #[test]
    fn test_pair_from_pact_json() {
        let pair: PairRecord = serde_json::from_str(
            r#"{"token0":"KDA","token1":"zUSDC","reserves":[{"decimal":"1000.5"},500]}"#,
        )
        .unwrap();
        assert!(pair.contains("zUSDC"));
        assert_eq!(pair.reserve_of("KDA"), Some(1000.5));
    }
}
