//! Subscription price quotes.

pub mod calculator;

pub use calculator::quote;
