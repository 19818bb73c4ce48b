//! Static catalog of listed tokens.
//!
//! The catalog is the list of tokens the liquidity table shows, in display
//! order. Aggregates are derived per catalog entry; pairs referencing tokens
//! outside the catalog are ignored except as pricing routes.

use crate::errors::{CatalogError, DashboardResult};
use crate::types::TokenRecord;
use std::path::Path;

/// Ordered collection of token catalog entries, unique by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenCatalog {
    tokens: Vec<TokenRecord>,
}

impl TokenCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate names
    pub fn from_tokens(tokens: Vec<TokenRecord>) -> DashboardResult<Self> {
        let mut catalog = Self::new();
        for token in tokens {
            catalog.insert(token)?;
        }
        Ok(catalog)
    }

    /// Append a token; fails if the name is already present
    pub fn insert(&mut self, token: TokenRecord) -> DashboardResult<()> {
        if self.contains(&token.name) {
            return Err(
                CatalogError::with_token("Duplicate token in catalog", token.name.clone()).into(),
            );
        }
        self.tokens.push(token);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TokenRecord> {
        self.tokens.iter().find(|t| t.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenRecord> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Icon glyph for a token, if it is listed
    pub fn icon_for(&self, name: &str) -> Option<&str> {
        self.get(name).map(|t| t.icon.as_str())
    }

    /// Whether `name` is a listed USD-pegged token
    pub fn is_usd_stable(&self, name: &str) -> bool {
        self.get(name).map(|t| t.is_usd_stable).unwrap_or(false)
    }

    /// Parse a JSON array of token records
    pub fn from_json_str(json: &str) -> DashboardResult<Self> {
        let tokens: Vec<TokenRecord> = serde_json::from_str(json)?;
        Self::from_tokens(tokens)
    }

    /// Load a JSON catalog file
    pub fn load(path: impl AsRef<Path>) -> DashboardResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

/// Tokens listed on the Kaddex exchange.
pub fn default_catalog() -> TokenCatalog {
    TokenCatalog {
        tokens: vec![
            TokenRecord::new("KDA", "coin", "coin", "Ⓚ"),
            TokenRecord::new("KDX", "kaddex.kdx", "kaddex.kdx", "✕"),
            TokenRecord::new("zUSDC", "lago.USD2", "lago.USD2", "$").usd_stable(),
            TokenRecord::new("FLUX", "runonflux.flux", "runonflux.flux", "ϟ").with_precision(8),
            TokenRecord::new("ABC", "free.anedak", "free.anedak", "α"),
            TokenRecord::new("HYPE", "hypercent.prod-hype-coin", "hypercent.prod-hype-coin", "♥"),
            TokenRecord::new("BABENA", "free.babena", "free.babena", "β"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.iter().next().map(|t| t.name.as_str()), Some("KDA"));
        assert!(catalog.is_usd_stable("zUSDC"));
        assert!(!catalog.is_usd_stable("KDA"));
        assert_eq!(catalog.icon_for("KDX"), Some("✕"));
        assert!(catalog.icon_for("DOGE").is_none());
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = TokenCatalog::from_tokens(vec![
            TokenRecord::new("KDA", "coin", "coin", "K"),
            TokenRecord::new("KDA", "coin", "coin", "K"),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json() {
        let catalog = TokenCatalog::from_json_str(
            r#"[{"name":"USD","code":"usd","stats_id":"usd","icon":"$","is_usd_stable":true}]"#,
        )
        .unwrap();
        let usd = catalog.get("USD").unwrap();
        assert!(usd.is_usd_stable);
        assert_eq!(usd.precision, 12);
    }
}
