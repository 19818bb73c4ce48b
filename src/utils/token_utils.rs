//! Price, volume and APR derivations over fetched pair and volume data.
//!
//! Everything here is a pure function of the pair list, the volume dataset
//! and the token catalog. Prices are discovered by walking pair reserves:
//! USD-stable tokens are worth one dollar, other tokens are priced through a
//! stable pair or, failing that, through a pair with KDA.

use crate::catalog::TokenCatalog;
use crate::core::constants::{DAYS_PER_YEAR, LIQUIDITY_PROVIDER_FEE, NATIVE_TOKEN};
use crate::types::{PairRecord, TokenRow, VolumeDataset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Resolved USD prices keyed by token name
pub type TokenPrices = HashMap<String, f64>;

/// Derived valuation of one pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairValues {
    pub token0: String,
    pub token1: String,
    pub liquidity_usd: Option<f64>,
    pub volume_24h_usd: Option<f64>,
    /// Annualised fee yield in percent
    pub apr: f64,
}

impl PairValues {
    pub fn contains(&self, token: &str) -> bool {
        self.token0 == token || self.token1 == token
    }
}

fn stats_id<'a>(name: &'a str, catalog: &'a TokenCatalog) -> &'a str {
    catalog.get(name).map(|t| t.stats_id.as_str()).unwrap_or(name)
}

fn positive(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Volume traded on `stats_id`'s side during the latest day
pub fn get_24h_volume_single_sided(volumes: &VolumeDataset, stats_id: &str) -> f64 {
    volumes.latest_day().map(|e| e.volume_of(stats_id)).sum()
}

/// Latest-day volume of trades between `a` and `b`, as `(a side, b side)`
pub fn get_pair_24h_volume(volumes: &VolumeDataset, a: &str, b: &str) -> (f64, f64) {
    volumes
        .latest_day()
        .filter(|e| e.is_between(a, b))
        .fold((0.0, 0.0), |(va, vb), e| {
            (va + e.volume_of(a), vb + e.volume_of(b))
        })
}

/// Price of `base` expressed in `quote` from the pair's reserves
fn spot_price(pair: &PairRecord, base: &str, quote: &str) -> Option<f64> {
    let base_reserve = positive(pair.reserve_of(base)?)?;
    let quote_reserve = pair.reserve_of(quote)?;
    positive(quote_reserve / base_reserve)
}

/// Price of `token` through its deepest pair with a USD-stable token
fn price_via_stable(token: &str, pairs: &[PairRecord], catalog: &TokenCatalog) -> Option<f64> {
    pairs
        .iter()
        .filter_map(|pair| {
            let other = pair.counterpart(token)?;
            if !catalog.is_usd_stable(other) {
                return None;
            }
            let depth = pair.reserve_of(other)?;
            Some((depth, spot_price(pair, token, other)?))
        })
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, price)| price)
}

/// Resolve the USD price of `token`, or `None` when no pricing route exists
pub fn get_token_usd_price(
    token: &str,
    pairs: &[PairRecord],
    catalog: &TokenCatalog,
) -> Option<f64> {
    if catalog.is_usd_stable(token) {
        return Some(1.0);
    }
    if let Some(price) = price_via_stable(token, pairs, catalog) {
        return Some(price);
    }
    if token == NATIVE_TOKEN {
        return None;
    }

    let native_price = price_via_stable(NATIVE_TOKEN, pairs, catalog)?;
    pairs
        .iter()
        .filter(|p| p.contains(token) && p.counterpart(token) == Some(NATIVE_TOKEN))
        .filter_map(|p| spot_price(p, token, NATIVE_TOKEN))
        .next()
        .map(|in_native| in_native * native_price)
}

/// Price every catalog token and every token appearing in a pair
pub fn resolve_token_prices(pairs: &[PairRecord], catalog: &TokenCatalog) -> TokenPrices {
    let mut names: Vec<&str> = catalog.iter().map(|t| t.name.as_str()).collect();
    for pair in pairs {
        for name in [pair.token0.as_str(), pair.token1.as_str()] {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }

    let prices: TokenPrices = names
        .into_iter()
        .filter_map(|name| {
            get_token_usd_price(name, pairs, catalog).map(|price| (name.to_string(), price))
        })
        .collect();
    debug!(priced = prices.len(), "Resolved token prices");
    prices
}

/// Annualised LP fee yield in percent; 0 when either input is unknown or zero
pub fn compute_apr(volume_24h_usd: Option<f64>, liquidity_usd: Option<f64>) -> f64 {
    match (volume_24h_usd.and_then(positive), liquidity_usd.and_then(positive)) {
        (Some(volume), Some(liquidity)) => {
            volume * LIQUIDITY_PROVIDER_FEE * DAYS_PER_YEAR / liquidity * 100.0
        }
        _ => 0.0,
    }
}

/// Value every pair: USD liquidity, USD volume over the last day, and APR
pub fn get_all_pair_values(
    pairs: &[PairRecord],
    volumes: &VolumeDataset,
    catalog: &TokenCatalog,
    prices: &TokenPrices,
) -> Vec<PairValues> {
    pairs
        .iter()
        .map(|pair| {
            let price0 = prices.get(&pair.token0).copied();
            let price1 = prices.get(&pair.token1).copied();
            let reserve0 = pair.reserve_of(&pair.token0).unwrap_or(0.0);
            let reserve1 = pair.reserve_of(&pair.token1).unwrap_or(0.0);

            let liquidity_usd = match (price0, price1) {
                (Some(p0), Some(p1)) => Some(reserve0 * p0 + reserve1 * p1),
                (Some(p0), None) => Some(2.0 * reserve0 * p0),
                (None, Some(p1)) => Some(2.0 * reserve1 * p1),
                (None, None) => None,
            };

            let (volume0, volume1) = get_pair_24h_volume(
                volumes,
                stats_id(&pair.token0, catalog),
                stats_id(&pair.token1, catalog),
            );
            let volume_24h_usd = price0
                .map(|p| volume0 * p)
                .or_else(|| price1.map(|p| volume1 * p));

            let apr = compute_apr(volume_24h_usd, liquidity_usd);
            trace!(pair = %pair.name(), apr, "Valued pair");

            PairValues {
                token0: pair.token0.clone(),
                token1: pair.token1.clone(),
                liquidity_usd,
                volume_24h_usd,
                apr,
            }
        })
        .collect()
}

/// Highest finite APR among `aprs`, or 0 when there is none
pub fn highest_apr(aprs: impl IntoIterator<Item = f64>) -> f64 {
    aprs.into_iter()
        .filter(|a| a.is_finite())
        .fold(None, |best: Option<f64>, a| Some(best.map_or(a, |b| b.max(a))))
        .unwrap_or(0.0)
}

/// Derive one table row per catalog token.
///
/// Liquidity is the sum of the token's reserves across its pairs and the
/// 24h volume is the sum of its per-pair traded volume. USD values are only
/// present when the token has a non-zero price.
pub fn aggregate_token_rows(
    catalog: &TokenCatalog,
    pairs: &[PairRecord],
    volumes: &VolumeDataset,
    prices: &TokenPrices,
) -> Vec<TokenRow> {
    let pair_values = get_all_pair_values(pairs, volumes, catalog, prices);

    let rows: Vec<TokenRow> = catalog
        .iter()
        .map(|token| {
            let name = token.name.as_str();
            let price = prices.get(name).copied().and_then(positive);

            let mut liquidity = 0.0;
            let mut volume_24h = 0.0;
            for pair in pairs.iter().filter(|p| p.contains(name)) {
                liquidity += pair.reserve_of(name).unwrap_or(0.0);
                if let Some(other) = pair.counterpart(name) {
                    let (own, _) = get_pair_24h_volume(
                        volumes,
                        &token.stats_id,
                        stats_id(other, catalog),
                    );
                    volume_24h += own;
                }
            }

            let apr = highest_apr(
                pair_values
                    .iter()
                    .filter(|v| v.contains(name))
                    .map(|v| v.apr),
            );

            TokenRow {
                token: token.clone(),
                liquidity,
                liquidity_usd: price.map(|p| liquidity * p),
                volume_24h,
                volume_24h_usd: price.map(|p| volume_24h * p),
                apr,
            }
        })
        .collect();

    debug!(tokens = rows.len(), pairs = pairs.len(), "Aggregated token rows");
    rows
}
