use std::env;

use time::Duration;

const DEFAULT_REDEMPTION_VALIDITY_HOURS: i64 = 24;
const DEFAULT_LEDGER_PAGE_SIZE: u64 = 20;
const DEFAULT_LEADERBOARD_LEN: usize = 10;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub redemption_validity: Duration,
    pub ledger_page_size: u64,
    pub leaderboard_len: usize,
}

impl Cfg {
    pub fn from_env_or_default() -> Self {
        let mut cfg = Self::default();
        if let Some(hours) = env_var_parsed("ECOCHAIN_REDEMPTION_VALIDITY_HOURS") {
            cfg.redemption_validity = Duration::hours(hours);
        }
        if let Some(page_size) = env_var_parsed("ECOCHAIN_LEDGER_PAGE_SIZE") {
            cfg.ledger_page_size = page_size;
        }
        if let Some(len) = env_var_parsed("ECOCHAIN_LEADERBOARD_LEN") {
            cfg.leaderboard_len = len;
        }
        cfg
    }
}

fn env_var_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    let value = env::var(key).ok()?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("Ignoring unparsable value {value:?} of {key}");
            None
        }
    }
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            redemption_validity: Duration::hours(DEFAULT_REDEMPTION_VALIDITY_HOURS),
            ledger_page_size: DEFAULT_LEDGER_PAGE_SIZE,
            leaderboard_len: DEFAULT_LEADERBOARD_LEN,
        }
    }
}
