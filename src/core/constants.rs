//! Constants shared by the dashboard components
//! Values mirror the ones used by the Kaddex web frontend

/// Default precision used when reducing Pact decimals
pub const DEFAULT_PRECISION: u32 = 12;

/// Share of the swap fee paid out to liquidity providers (0.25%)
pub const LIQUIDITY_PROVIDER_FEE: f64 = 0.0025;

/// Days per year used for APR annualisation
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Name of the native token used as the pricing hub
pub const NATIVE_TOKEN: &str = "KDA";

/// Fill color used by chart segments without an explicit color
pub const DEFAULT_SEGMENT_COLOR: &str = "#A9AAB4";

/// Corner radius applied to the outer ends of a stacked bar
pub const BAR_CORNER_RADIUS: u8 = 10;

/// Label rendered in the fees column
pub const FEES_LABEL: &str = "Gasless";

/// Placeholder rendered in the APR booster column
pub const APR_BOOSTER_LABEL: &str = "Coming Soon";

/// Shown while the liquidity table is fetching
pub const TABLE_LOADING_LABEL: &str = "Loading liquidity data...";

/// Width of every liquidity table column
pub const TABLE_COLUMN_WIDTH: u16 = 160;

/// Data service endpoints
pub const MAINNET_PAIRS_ENDPOINT: &str = "https://api.kaddex.com/pairs";
pub const MAINNET_STATS_ENDPOINT: &str = "https://kaddex-stats.kaddex.com";
pub const TESTNET_PAIRS_ENDPOINT: &str = "https://api.testnet.kaddex.com/pairs";
pub const TESTNET_STATS_ENDPOINT: &str = "https://kaddex-stats.testnet.kaddex.com";
pub const LOCAL_PAIRS_ENDPOINT: &str = "http://127.0.0.1:8080/pairs";
pub const LOCAL_STATS_ENDPOINT: &str = "http://127.0.0.1:8080";

/// Timeout for a single data service request in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Upper bound on the total time spent retrying one fetch step
pub const DEFAULT_MAX_FETCH_SECS: u64 = 60;

/// Initial delay between fetch retries in milliseconds
pub const INITIAL_RETRY_DELAY_MS: u64 = 250;
