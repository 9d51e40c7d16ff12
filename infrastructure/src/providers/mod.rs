//! Quote provider adapters
//!
//! - [`MockQuoteProvider`]: fixed quote, counts calls
//! - [`OpenAiQuoteProvider`]: OpenAI chat completions

mod mock;
mod openai;

pub use mock::{MOCK_QUOTE, MockQuoteProvider};
pub use openai::OpenAiQuoteProvider;
