//! Core domain concepts shared across the run.
//!
//! - [`quote::Quote`]: the generated text delivered to every recipient
//! - [`phone::PhoneNumber`]: an E.164 validated recipient
//! - [`model::Model`]: language model identifiers
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod phone;
pub mod quote;
