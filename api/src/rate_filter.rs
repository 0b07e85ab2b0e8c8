//! Case-insensitive text filtering of a rate list.

use crate::rate_list::RateList;

/// Returns the entries whose currency code contains `query`, ignoring case.
///
/// An empty query keeps every entry. Order is preserved.
pub fn filter(list: &RateList, query: &str) -> RateList {
    let query = query.to_lowercase();
    list.iter()
        .filter(|entry| entry.code().to_lowercase().contains(&query))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fiat_currency::FiatCurrency;
    use crate::fiat_currency::MOST_USED_CURRENCIES;
    use crate::fixed_amount::FixedAmount;
    use crate::rate_list::RateEntry;

    fn list_of(currencies: &[FiatCurrency]) -> RateList {
        currencies
            .iter()
            .enumerate()
            .map(|(i, c)| RateEntry::new(*c, FixedAmount::new_from_hundredths(i as i128 + 1)))
            .collect()
    }

    #[test]
    fn matches_substring_ignoring_case() {
        let list = list_of(&[FiatCurrency::USD, FiatCurrency::EUR]);

        let filtered = filter(&list, "us");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.iter().next().unwrap().currency(), FiatCurrency::USD);

        assert_eq!(filter(&list, "uS"), filtered);
        assert_eq!(filter(&list, "USD"), filtered);
    }

    #[test]
    fn empty_query_is_identity() {
        let list = list_of(&MOST_USED_CURRENCIES);
        assert_eq!(filter(&list, ""), list);
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let list = list_of(&MOST_USED_CURRENCIES);
        for query in ["", "d", "K", "sd", "zzz", "nok"] {
            let once = filter(&list, query);
            assert_eq!(filter(&once, query), once, "query {query:?}");
        }
    }

    #[test]
    fn keeps_list_order() {
        let list = list_of(&MOST_USED_CURRENCIES);
        let codes: Vec<_> = filter(&list, "d").iter().map(|e| e.code()).collect();
        assert_eq!(codes, ["USD", "CAD", "AUD", "DKK", "SGD", "HKD", "AED"]);
    }

    #[test]
    fn no_match_gives_empty_list() {
        let list = list_of(&MOST_USED_CURRENCIES);
        assert!(filter(&list, "xyz").is_empty());
        assert!(filter(&RateList::default(), "usd").is_empty());
    }
}
