//! Prompts sent to the quote provider

pub mod persona;
