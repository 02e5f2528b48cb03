//! Service layer module
//!
//! Contains the chat completion client and the response classifier

pub mod classifier;
pub mod client;

pub use classifier::{classify, explain, Outcome};
pub use client::CompletionClient;
