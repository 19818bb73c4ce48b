//! Numeric helpers and data derivations shared by the components

pub mod balance;
pub mod token_utils;

pub use balance::{human_readable_number, reduce_balance, PactDecimal};
pub use token_utils::{
    aggregate_token_rows, get_24h_volume_single_sided, get_all_pair_values, get_token_usd_price,
    resolve_token_prices, PairValues, TokenPrices,
};
