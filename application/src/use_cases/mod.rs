//! Use cases (application services)

pub mod send_quote;
