//! Defines the trait and implementation for external exchange-rate providers.

use crate::fiat_currency::FiatCurrency;
use crate::fixed_amount::ParseFixedAmountError;
use crate::rate_list::RateList;
use thiserror::Error;

/// Everything that can go wrong while fetching a rate list.
///
/// The screen does not distinguish between variants; they exist for logging.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The provider answered with a non-success status code.
    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),
    /// The body is not the expected `{ data: { rates } }` JSON.
    #[error("malformed rates payload: {0}")]
    Payload(#[from] serde_json::Error),
    /// No HTTP client could be set up to send the request.
    #[error("rate provider unavailable: {0}")]
    Unavailable(String),
    /// A most-used currency came with a rate that is not a decimal number.
    #[error("invalid rate for {code}: {source}")]
    InvalidRate {
        code: &'static str,
        source: ParseFixedAmountError,
    },
}

/// A trait for any service that can provide exchange rates for a base currency.
pub trait RateProvider {
    /// Fetches the current rates of `base` against the most used currencies.
    async fn get_rates(&self, base: FiatCurrency) -> Result<RateList, FetchError>;
}

/// Provides exchange rates from the public Coinbase API.
pub mod coinbase {
    use super::*;
    use crate::prefs::screen_prefs::ScreenPrefs;
    use dioxus_logger::tracing::debug;

    pub const DEFAULT_ENDPOINT: &str = "https://api.coinbase.com/v2/exchange-rates";

    /// An implementation of the `RateProvider` trait for Coinbase.
    ///
    /// Cloning is cheap; clones share the underlying connection pool.
    #[derive(Clone, Debug)]
    pub struct Coinbase {
        client: reqwest::Client,
        endpoint: String,
    }

    impl Coinbase {
        pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
            Self {
                client,
                endpoint: endpoint.into(),
            }
        }

        /// Builds a provider using the endpoint and timeout from `prefs`.
        pub fn from_prefs(prefs: &ScreenPrefs) -> Result<Self, FetchError> {
            let client = reqwest::Client::builder()
                .timeout(prefs.request_timeout())
                .build()?;
            Ok(Self::new(client, prefs.endpoint()))
        }
    }

    impl RateProvider for Coinbase {
        async fn get_rates(&self, base: FiatCurrency) -> Result<RateList, FetchError> {
            debug!("requesting rates for {} from {}", base, self.endpoint);

            let resp = self
                .client
                .get(&self.endpoint)
                .query(&[("currency", base.code())])
                .send()
                .await?;

            let status = resp.status();
            if !status.is_success() {
                return Err(FetchError::Status(status));
            }

            let body = resp.text().await?;
            RateList::from_payload(&body)
        }
    }
}
