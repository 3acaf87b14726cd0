use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// CoinGecko API key (optional, for pro tier).
    pub coingecko_api_key: Option<String>,
    /// Symbols refreshed by the background task (lowercase).
    pub tracked_symbols: Vec<String>,
    /// Days of daily price history fed to the indicators.
    pub history_days: u32,
    /// Interval between background signal refreshes (seconds).
    pub refresh_interval_secs: u64,
    /// Delay before the first signal generation after startup (ms).
    pub startup_delay_ms: u64,
    /// Timeout for upstream HTTP requests (seconds).
    pub request_timeout_secs: u64,
    /// Seed for the simulated sentiment and neutral-strength RNGs.
    /// Unset means seeded from OS entropy.
    pub sentiment_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            coingecko_api_key: None,
            tracked_symbols: vec!["btc".to_string(), "eth".to_string()],
            history_days: 30,
            refresh_interval_secs: 300,
            startup_delay_ms: 1000,
            request_timeout_secs: 10,
            sentiment_seed: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        // Format: "btc,eth,sol"
        let tracked_symbols = env::var("TRACKED_SYMBOLS")
            .ok()
            .map(|s| parse_symbol_list(&s))
            .filter(|symbols| !symbols.is_empty())
            .unwrap_or(defaults.tracked_symbols);

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT").unwrap_or(defaults.port),
            coingecko_api_key: env::var("COINGECKO_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            tracked_symbols,
            history_days: parse_var("HISTORY_DAYS")
                .filter(|d: &u32| *d > 0)
                .unwrap_or(defaults.history_days),
            refresh_interval_secs: parse_var("REFRESH_INTERVAL_SECS")
                .filter(|s: &u64| *s > 0)
                .unwrap_or(defaults.refresh_interval_secs),
            startup_delay_ms: parse_var("STARTUP_DELAY_MS").unwrap_or(defaults.startup_delay_ms),
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
            sentiment_seed: parse_var("SENTIMENT_SEED"),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Split a comma-separated symbol list, normalizing to lowercase.
pub fn parse_symbol_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
