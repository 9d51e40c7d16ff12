//! Domain layer for quote-sender
//!
//! This crate contains the value objects and vocabulary of a quote run.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Quote**: one piece of generated text per run
//! - **PhoneNumber**: an E.164 validated recipient
//! - **Provider kinds**: which quote provider / notifier variant a run uses
//! - **RunState**: the linear lifecycle of a single run

pub mod core;
pub mod orchestration;
pub mod prompt;
pub mod providers;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model, phone::PhoneNumber, quote::Quote};
pub use orchestration::state::RunState;
pub use prompt::persona::PersonaPrompt;
pub use providers::{NotifierKind, QuoteProviderKind};
