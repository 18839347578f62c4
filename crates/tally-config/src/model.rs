use serde::{de::Deserializer, Deserialize, Serialize};
use std::path::PathBuf;

use tally_domain::{CurrencyCode, LedgerDefaults, Theme};

/// Overrides the data directory.
pub const HOME_ENV: &str = "TALLY_HOME";
/// Overrides the preferred colour scheme (`light` / `dark`).
pub const COLOR_SCHEME_ENV: &str = "TALLY_COLOR_SCHEME";

const DEFAULT_DIR_NAME: &str = "tally";

/// Stores user preferences that shape a fresh or partially stored ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    /// Preferred colour scheme, used when the stored ledger carries no theme.
    #[serde(default, deserialize_with = "lenient_theme")]
    pub color_scheme: Theme,
    #[serde(default = "Config::default_log_filter")]
    pub log_filter: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the ledger slot. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Self::default_currency(),
            color_scheme: Theme::default(),
            log_filter: Self::default_log_filter(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_currency() -> String {
        CurrencyCode::DEFAULT.into()
    }

    pub fn default_log_filter() -> String {
        "tally=info".into()
    }

    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(DEFAULT_DIR_NAME)
    }

    /// Defaults handed to the ledger when filling gaps.
    pub fn ledger_defaults(&self) -> LedgerDefaults {
        let currency = if self.currency.trim().is_empty() {
            CurrencyCode::default()
        } else {
            CurrencyCode::new(self.currency.as_str())
        };
        LedgerDefaults::new(currency, self.color_scheme)
    }

    /// Applies overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(home) = lookup(HOME_ENV).filter(|value| !value.trim().is_empty()) {
            self.data_dir = Some(PathBuf::from(home));
        }
        if let Some(theme) = lookup(COLOR_SCHEME_ENV).as_deref().and_then(Theme::parse) {
            self.color_scheme = theme;
        }
        self
    }
}

fn lenient_theme<'de, D>(deserializer: D) -> Result<Theme, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(Theme::parse).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_color_scheme_falls_back_to_light() {
        let cfg: Config =
            serde_json::from_str(r#"{"currency":"EUR","color_scheme":"neon"}"#).expect("parse");
        assert_eq!(cfg.color_scheme, Theme::Light);
        assert_eq!(cfg.currency, "EUR");
        assert_eq!(cfg.log_filter, "tally=info");
    }

    #[test]
    fn overrides_replace_dir_and_scheme() {
        let cfg = Config::default().with_overrides(|key| match key {
            HOME_ENV => Some("/tmp/tally-test".into()),
            COLOR_SCHEME_ENV => Some("Dark".into()),
            _ => None,
        });
        assert_eq!(cfg.resolve_data_dir(), PathBuf::from("/tmp/tally-test"));
        assert_eq!(cfg.color_scheme, Theme::Dark);
    }

    #[test]
    fn blank_currency_uses_default() {
        let cfg = Config {
            currency: "  ".into(),
            ..Config::default()
        };
        assert_eq!(cfg.ledger_defaults().currency.as_str(), "USD");
    }
}
