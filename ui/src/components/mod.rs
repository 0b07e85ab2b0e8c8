//! The components module contains the presentational building blocks of the rates screen.
//! They render props and report user input back through event handlers; none of them
//! owns screen state.
pub mod amount_input;
pub mod currency_picker;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod pico;
pub mod rate_row;
pub mod search_input;
