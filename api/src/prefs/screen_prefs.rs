use crate::fiat_currency::FiatCurrency;
use crate::rate_providers::coinbase::DEFAULT_ENDPOINT;
use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Settings for the rates screen: where rates come from and what is shown first.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ScreenPrefs {
    /// Exchange-rates endpoint; the base currency is sent as `?currency=`.
    endpoint: String,

    /// The base currency selected when the screen opens.
    base_currency: FiatCurrency,

    /// Upper bound on a single rates request.
    request_timeout: Duration,
}

impl ScreenPrefs {
    const DEFAULT_TIMEOUT_SECS: u64 = 15;

    pub fn new(endpoint: impl Into<String>, base_currency: FiatCurrency, request_timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            base_currency,
            request_timeout,
        }
    }

    /// Creates a ScreenPrefs instance from environment variables,
    /// with in-code defaults.
    ///
    /// # Environment Variables
    /// - `RATES_ENDPOINT`: URL of the exchange-rates endpoint.
    /// - `BASE_CURRENCY`: initial base currency code, case-insensitive. Defaults to "TRY".
    /// - `RATES_TIMEOUT_SECS`: request timeout in whole seconds. Defaults to 15.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but reads variables through `lookup`.
    ///
    /// Unparseable values are logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let endpoint = lookup("RATES_ENDPOINT")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let base_currency = match lookup("BASE_CURRENCY") {
            Some(s) => FiatCurrency::from_str(s.trim()).unwrap_or_else(|_| {
                warn!("ignoring unknown BASE_CURRENCY {:?}", s);
                FiatCurrency::default()
            }),
            None => FiatCurrency::default(),
        };

        let timeout_secs = match lookup("RATES_TIMEOUT_SECS") {
            Some(s) => match s.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    warn!("ignoring invalid RATES_TIMEOUT_SECS {:?}", s);
                    Self::DEFAULT_TIMEOUT_SECS
                }
            },
            None => Self::DEFAULT_TIMEOUT_SECS,
        };

        Self {
            endpoint,
            base_currency,
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn base_currency(&self) -> FiatCurrency {
        self.base_currency
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

impl Default for ScreenPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn prefs_from(vars: &[(&str, &str)]) -> ScreenPrefs {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ScreenPrefs::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let prefs = prefs_from(&[]);
        assert_eq!(prefs.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(prefs.base_currency(), FiatCurrency::TRY);
        assert_eq!(prefs.request_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn variables_override_defaults() {
        let prefs = prefs_from(&[
            ("RATES_ENDPOINT", "http://127.0.0.1:9000/rates"),
            ("BASE_CURRENCY", "eur"),
            ("RATES_TIMEOUT_SECS", "3"),
        ]);
        assert_eq!(prefs.endpoint(), "http://127.0.0.1:9000/rates");
        assert_eq!(prefs.base_currency(), FiatCurrency::EUR);
        assert_eq!(prefs.request_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn invalid_values_fall_back() {
        let prefs = prefs_from(&[
            ("RATES_ENDPOINT", "  "),
            ("BASE_CURRENCY", "XYZ"),
            ("RATES_TIMEOUT_SECS", "0"),
        ]);
        assert_eq!(prefs, prefs_from(&[]));
    }
}
