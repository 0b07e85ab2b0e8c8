//! Defines the fiat currencies the rates screen knows about.

use serde::Deserialize;
use serde::Serialize;

/// The "most used" currencies shown in the rate list, in display order.
///
/// Any other code returned by a rate provider is discarded.
pub const MOST_USED_CURRENCIES: [FiatCurrency; 15] = [
    FiatCurrency::USD,
    FiatCurrency::EUR,
    FiatCurrency::GBP,
    FiatCurrency::CHF,
    FiatCurrency::JPY,
    FiatCurrency::CNY,
    FiatCurrency::RUB,
    FiatCurrency::CAD,
    FiatCurrency::AUD,
    FiatCurrency::SEK,
    FiatCurrency::NOK,
    FiatCurrency::DKK,
    FiatCurrency::SGD,
    FiatCurrency::HKD,
    FiatCurrency::AED,
];

/// A fiat currency, identified by its ISO 4217 code.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    AED, // United Arab Emirates Dirham
    ARS, // Argentine Peso
    AUD, // Australian Dollar
    BRL, // Brazilian Real
    CAD, // Canadian Dollar
    CHF, // Swiss Franc
    CNY, // Chinese Yuan
    CZK, // Czech Koruna
    DKK, // Danish Krone
    EUR, // Euro
    GBP, // Great British Pound
    HKD, // Hong Kong Dollar
    HUF, // Hungarian Forint
    INR, // Indian Rupee
    JPY, // Japanese Yen
    KRW, // South Korean Won
    MXN, // Mexican Peso
    NOK, // Norwegian Krone
    NZD, // New Zealand Dollar
    PLN, // Polish Złoty
    RUB, // Russian Ruble
    SAR, // Saudi Riyal
    SEK, // Swedish Krona
    SGD, // Singapore Dollar
    #[default]
    TRY, // Turkish Lira
    UAH, // Ukrainian Hryvnia
    USD, // United States Dollar
    ZAR, // South African Rand
}

impl FiatCurrency {
    /// Returns the ISO 4217 string code for the currency (e.g., "USD").
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AED => "United Arab Emirates Dirham",
            Self::ARS => "Argentine Peso",
            Self::AUD => "Australian Dollar",
            Self::BRL => "Brazilian Real",
            Self::CAD => "Canadian Dollar",
            Self::CHF => "Swiss Franc",
            Self::CNY => "Chinese Yuan",
            Self::CZK => "Czech Koruna",
            Self::DKK => "Danish Krone",
            Self::EUR => "Euro",
            Self::GBP => "Great British Pound",
            Self::HKD => "Hong Kong Dollar",
            Self::HUF => "Hungarian Forint",
            Self::INR => "Indian Rupee",
            Self::JPY => "Japanese Yen",
            Self::KRW => "South Korean Won",
            Self::MXN => "Mexican Peso",
            Self::NOK => "Norwegian Krone",
            Self::NZD => "New Zealand Dollar",
            Self::PLN => "Polish Złoty",
            Self::RUB => "Russian Ruble",
            Self::SAR => "Saudi Riyal",
            Self::SEK => "Swedish Krona",
            Self::SGD => "Singapore Dollar",
            Self::TRY => "Turkish Lira",
            Self::UAH => "Ukrainian Hryvnia",
            Self::USD => "United States Dollar",
            Self::ZAR => "South African Rand",
        }
    }
}

impl std::fmt::Display for FiatCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn default_base_currency_is_turkish_lira() {
        assert_eq!(FiatCurrency::default(), FiatCurrency::TRY);
    }

    #[test]
    fn most_used_list_has_no_duplicates() {
        let unique: HashSet<_> = MOST_USED_CURRENCIES.iter().collect();
        assert_eq!(unique.len(), MOST_USED_CURRENCIES.len());
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(FiatCurrency::from_str("usd"), Ok(FiatCurrency::USD));
        assert_eq!(FiatCurrency::from_str("Try"), Ok(FiatCurrency::TRY));
        assert!(FiatCurrency::from_str("XYZ").is_err());
    }

    #[test]
    fn code_round_trips_through_parse() {
        for currency in FiatCurrency::iter() {
            assert_eq!(FiatCurrency::from_str(currency.code()), Ok(currency));
            assert_eq!(currency.to_string(), currency.code());
        }
    }
}
