//! The state behind the rates screen, and the only code allowed to change it.
//!
//! Each user or network event has exactly one transition method. Everything
//! the screen renders (filtered list, converted amounts) is derived from the
//! stored state on read and never stored itself.

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

use crate::amount_converter;
use crate::fiat_currency::FiatCurrency;
use crate::fixed_amount::FixedAmount;
use crate::rate_filter;
use crate::rate_list::RateList;
use crate::rate_providers::FetchError;
use crate::rate_providers::RateProvider;

/// Which part of the screen is shown. Exactly one holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum LoadState {
    Loading,
    Error,
    Ready,
}

/// Identifies one rates request.
///
/// Only the most recently issued ticket is accepted by
/// [`ConversionScreen::finish_fetch`]; results for older tickets are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    base: FiatCurrency,
}

impl FetchTicket {
    /// The base currency this request must be sent for.
    pub fn base(&self) -> FiatCurrency {
        self.base
    }
}

/// One line of the rendered list: a rate and the entered amount converted through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedRow {
    currency: FiatCurrency,
    rate: FixedAmount,
    converted: String,
}

impl ConvertedRow {
    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    pub fn code(&self) -> &'static str {
        self.currency.code()
    }

    pub fn rate(&self) -> FixedAmount {
        self.rate
    }

    /// The converted amount, always with two decimals.
    pub fn converted(&self) -> &str {
        &self.converted
    }
}

/// What the screen should render right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Loading,
    Error,
    Ready(Vec<ConvertedRow>),
}

/// The complete view state of the rates screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionScreen {
    base_currency: FiatCurrency,
    amount: String,
    query: String,
    load_state: LoadState,
    rates: RateList,
    issued: u64,
    pending: Option<FetchTicket>,
}

impl ConversionScreen {
    /// The amount field's initial content.
    pub const INITIAL_AMOUNT: &'static str = "1";

    /// Creates the screen in `Loading` for `base_currency`.
    ///
    /// No request is issued yet; call [`Self::begin_fetch`] for the first one.
    pub fn new(base_currency: FiatCurrency) -> Self {
        Self {
            base_currency,
            amount: Self::INITIAL_AMOUNT.to_string(),
            query: String::new(),
            load_state: LoadState::Loading,
            rates: RateList::default(),
            issued: 0,
            pending: None,
        }
    }

    // --- Transitions ---

    /// Enters `Loading` for the current base currency and issues a ticket for
    /// the request the caller is about to send.
    ///
    /// Any previously issued ticket becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        let ticket = FetchTicket {
            generation: self.issued,
            base: self.base_currency,
        };

        self.load_state = LoadState::Loading;
        self.rates = RateList::default();
        self.pending = Some(ticket);

        info!(
            "fetching rates for {} (request #{})",
            ticket.base, ticket.generation
        );
        ticket
    }

    /// Switches the base currency and starts a new fetch for it.
    ///
    /// Selecting the currency that is already the base changes nothing and
    /// returns `None`.
    pub fn set_base_currency(&mut self, base_currency: FiatCurrency) -> Option<FetchTicket> {
        if base_currency == self.base_currency {
            return None;
        }
        self.base_currency = base_currency;
        Some(self.begin_fetch())
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when `ticket` is not the
    /// latest one issued.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<RateList, FetchError>) -> bool {
        if self.pending != Some(ticket) {
            debug!(
                "dropping stale rates for {} (request #{}, latest #{})",
                ticket.base, ticket.generation, self.issued
            );
            return false;
        }
        self.pending = None;

        match result {
            Ok(rates) => {
                debug!("received {} rates for {}", rates.len(), ticket.base);
                self.rates = rates;
                self.load_state = LoadState::Ready;
            }
            Err(e) => {
                warn!("fetching rates for {} failed: {}", ticket.base, e);
                self.rates = RateList::default();
                self.load_state = LoadState::Error;
            }
        }
        true
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    /// Runs one complete fetch cycle for the current base currency against `provider`.
    pub async fn refresh<P: RateProvider>(&mut self, provider: &P) -> bool {
        let ticket = self.begin_fetch();
        let result = provider.get_rates(ticket.base()).await;
        self.finish_fetch(ticket, result)
    }

    // --- Getters ---

    pub fn base_currency(&self) -> FiatCurrency {
        self.base_currency
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn rates(&self) -> &RateList {
        &self.rates
    }

    /// The ticket whose result is still awaited, if any.
    pub fn pending(&self) -> Option<FetchTicket> {
        self.pending
    }

    // --- Derived state ---

    /// The rate list narrowed by the current query.
    pub fn filtered(&self) -> RateList {
        rate_filter::filter(&self.rates, &self.query)
    }

    /// The filtered list with the current amount converted through each rate.
    pub fn rows(&self) -> Vec<ConvertedRow> {
        self.filtered()
            .iter()
            .map(|entry| ConvertedRow {
                currency: entry.currency(),
                rate: entry.rate(),
                converted: amount_converter::convert_rate(entry.rate(), &self.amount),
            })
            .collect()
    }

    pub fn view(&self) -> ScreenView {
        match self.load_state {
            LoadState::Loading => ScreenView::Loading,
            LoadState::Error => ScreenView::Error,
            LoadState::Ready => ScreenView::Ready(self.rows()),
        }
    }
}

impl Default for ConversionScreen {
    fn default() -> Self {
        Self::new(FiatCurrency::default())
    }
}
