//=============================================================================
// File: src/screens/rates.rs
//=============================================================================
use api::conversion_screen::ConversionScreen;
use api::conversion_screen::FetchTicket;
use api::conversion_screen::ScreenView;
use api::fiat_currency::FiatCurrency;
use api::prefs::screen_prefs::ScreenPrefs;
use api::rate_providers::coinbase::Coinbase;
use api::rate_providers::FetchError;
use api::rate_providers::RateProvider;
use dioxus::core::Task;
use dioxus::prelude::*;

use crate::components::amount_input::AmountInput;
use crate::components::currency_picker::CurrencyPicker;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Card;
use crate::components::rate_row::RateRow;
use crate::components::search_input::SearchInput;

/// Sends the request for `ticket` in the background.
///
/// A request still in flight is cancelled first; if it already finished,
/// `finish_fetch` drops its result anyway because its ticket is stale.
fn spawn_fetch(
    mut screen: Signal<ConversionScreen>,
    mut in_flight: Signal<Option<Task>>,
    provider: Result<Coinbase, String>,
    ticket: FetchTicket,
) {
    if let Some(previous) = *in_flight.peek() {
        previous.cancel();
    }

    let task = spawn(async move {
        let result = match provider {
            Ok(provider) => provider.get_rates(ticket.base()).await,
            Err(reason) => Err(FetchError::Unavailable(reason)),
        };
        screen.write().finish_fetch(ticket, result);
    });
    in_flight.set(Some(task));
}

/// Hint under the empty-list message; only a search can explain the miss.
fn no_match_description(query: &str) -> Option<String> {
    if query.is_empty() {
        None
    } else {
        Some(format!("Nothing matches \"{query}\"."))
    }
}

#[allow(non_snake_case)]
#[component]
pub fn RatesScreen() -> Element {
    let prefs = use_hook(ScreenPrefs::from_env);
    let provider = use_hook(|| {
        Coinbase::from_prefs(&prefs).map_err(|e| {
            dioxus_logger::tracing::error!("could not set up rate provider: {}", e);
            e.to_string()
        })
    });

    let mut screen = use_signal(|| ConversionScreen::new(prefs.base_currency()));
    let in_flight = use_signal(|| None::<Task>);

    // Initial request for the starting base currency.
    use_effect({
        let provider = provider.clone();
        move || {
            let ticket = screen.write().begin_fetch();
            spawn_fetch(screen, in_flight, provider.clone(), ticket);
        }
    });

    let (amount, base_currency, query, view) = {
        let state = screen.read();
        (
            state.amount().to_string(),
            state.base_currency(),
            state.query().to_string(),
            state.view(),
        )
    };

    rsx! {
        div {
            class: "form-row",
            div {
                style: "flex-grow: 1;",
                AmountInput {
                    value: amount,
                    on_input: move |value: String| screen.write().set_amount(value),
                }
            }
            CurrencyPicker {
                selected: base_currency,
                on_select: move |currency: FiatCurrency| {
                    let ticket = screen.write().set_base_currency(currency);
                    if let Some(ticket) = ticket {
                        spawn_fetch(screen, in_flight, provider.clone(), ticket);
                    }
                },
            }
        }
        h4 {
            class: "list-header",
            "Converted currencies:"
        }
        Card {
            match view {
                ScreenView::Loading => rsx! {
                    p { "Loading..." }
                    progress {}
                },
                ScreenView::Error => rsx! {
                    p { "An error occurred..." }
                },
                ScreenView::Ready(rows) => rsx! {
                    SearchInput {
                        query: query.clone(),
                        on_input: move |value: String| screen.write().set_query(value),
                    }
                    if rows.is_empty() {
                        EmptyState {
                            title: "No currencies found".to_string(),
                            description: no_match_description(&query),
                        }
                    }
                    for row in rows {
                        RateRow {
                            key: "{row.code()}",
                            row,
                        }
                    }
                },
            }
        }
    }
}
