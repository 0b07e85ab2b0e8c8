//! User-adjustable settings for the rates screen.

pub mod screen_prefs;
