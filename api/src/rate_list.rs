//! The ordered list of exchange rates shown on the screen.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::fiat_currency::FiatCurrency;
use crate::fiat_currency::MOST_USED_CURRENCIES;
use crate::fixed_amount::FixedAmount;
use crate::rate_providers::FetchError;

/// The rate of one unit of the base currency expressed in `currency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry {
    currency: FiatCurrency,
    rate: FixedAmount,
}

impl RateEntry {
    pub fn new(currency: FiatCurrency, rate: FixedAmount) -> Self {
        Self { currency, rate }
    }

    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    /// The uppercase ISO code of the listed currency.
    pub fn code(&self) -> &'static str {
        self.currency.code()
    }

    pub fn rate(&self) -> FixedAmount {
        self.rate
    }
}

/// Rates for the most used currencies, in [`MOST_USED_CURRENCIES`] order.
///
/// A `RateList` is built once per successful fetch and never edited; a new
/// fetch replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateList(Vec<RateEntry>);

impl RateList {
    /// Builds the list from a provider's `code -> rate` map.
    ///
    /// Codes outside the most-used list are dropped. Output order is the
    /// most-used order, whatever order the map iterates in, and each code
    /// appears at most once. A listed code whose rate does not parse as a
    /// finite decimal fails the whole list.
    pub fn from_rates(rates: &HashMap<String, String>) -> Result<Self, FetchError> {
        let mut entries = Vec::with_capacity(MOST_USED_CURRENCIES.len());
        for currency in MOST_USED_CURRENCIES {
            let Some(raw) = rates.get(currency.code()) else {
                continue;
            };
            let rate = raw
                .parse::<FixedAmount>()
                .map_err(|source| FetchError::InvalidRate {
                    code: currency.code(),
                    source,
                })?;
            entries.push(RateEntry::new(currency, rate));
        }
        Ok(Self(entries))
    }

    /// Decodes a raw response body shaped `{ "data": { "rates": { .. } } }`.
    pub fn from_payload(body: &str) -> Result<Self, FetchError> {
        let response: RatesResponse = serde_json::from_str(body)?;
        Self::from_rates(&response.data.rates)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RateEntry> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[RateEntry] {
        &self.0
    }
}

impl FromIterator<RateEntry> for RateList {
    fn from_iter<I: IntoIterator<Item = RateEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RateList {
    type Item = &'a RateEntry;
    type IntoIter = std::slice::Iter<'a, RateEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The JSON body returned by the exchange-rates endpoint.
#[derive(Deserialize, Debug)]
pub(crate) struct RatesResponse {
    pub(crate) data: RatesData,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RatesData {
    pub(crate) rates: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &RateList) -> Vec<&'static str> {
        list.iter().map(RateEntry::code).collect()
    }

    #[test]
    fn keeps_only_most_used_in_list_order() {
        let body = r#"{"data":{"rates":{"USD":"0.5","XYZ":"9","EUR":"0.45"}}}"#;
        let list = RateList::from_payload(body).unwrap();

        assert_eq!(
            list.as_slice(),
            &[
                RateEntry::new(FiatCurrency::USD, FixedAmount::new_from_hundredths(50)),
                RateEntry::new(FiatCurrency::EUR, FixedAmount::new_from_hundredths(45)),
            ]
        );
        assert_eq!(list.iter().next().unwrap().rate().to_string(), "0.50");
    }

    #[test]
    fn order_ignores_payload_order() {
        let body = r#"{"data":{"currency":"TRY","rates":{
            "AED":"0.11","HKD":"0.24","TRY":"1.0","JPY":"4.4","GBP":"0.024","USD":"0.031"
        }}}"#;
        let list = RateList::from_payload(body).unwrap();

        assert_eq!(codes(&list), ["USD", "GBP", "JPY", "HKD", "AED"]);
    }

    #[test]
    fn full_payload_yields_every_most_used_code_once() {
        let mut rates: HashMap<String, String> = MOST_USED_CURRENCIES
            .iter()
            .map(|c| (c.code().to_string(), "1.234".to_string()))
            .collect();
        rates.insert("BTC".to_string(), "0.0000003".to_string());
        rates.insert("usd".to_string(), "99".to_string());

        let list = RateList::from_rates(&rates).unwrap();

        let expected: Vec<_> = MOST_USED_CURRENCIES.iter().map(|c| c.code()).collect();
        assert_eq!(codes(&list), expected);
        assert!(list.iter().all(|e| e.rate().to_string() == "1.23"));
    }

    #[test]
    fn empty_rates_give_empty_list() {
        let list = RateList::from_payload(r#"{"data":{"rates":{}}}"#).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn malformed_payloads_are_errors() {
        assert!(matches!(
            RateList::from_payload("not json"),
            Err(FetchError::Payload(_))
        ));
        assert!(matches!(
            RateList::from_payload(r#"{"rates":{"USD":"1"}}"#),
            Err(FetchError::Payload(_))
        ));
        assert!(matches!(
            RateList::from_payload(r#"{"data":{"rates":{"USD":1}}}"#),
            Err(FetchError::Payload(_))
        ));
    }

    #[test]
    fn unparseable_listed_rate_fails_the_list() {
        let body = r#"{"data":{"rates":{"USD":"n/a","EUR":"0.45"}}}"#;
        assert!(matches!(
            RateList::from_payload(body),
            Err(FetchError::InvalidRate { code: "USD", .. })
        ));
    }

    #[test]
    fn unparseable_unlisted_rate_is_ignored() {
        let body = r#"{"data":{"rates":{"XYZ":"n/a","EUR":"0.45"}}}"#;
        let list = RateList::from_payload(body).unwrap();
        assert_eq!(codes(&list), ["EUR"]);
    }
}
