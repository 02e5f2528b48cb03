//! Data models module
//!
//! Defines request and response data structures for the chat completions API

pub mod chat;

pub use chat::{
    ApiErrorBody, ChatMessage, Choice, CompletionRequest, CompletionResponse, ErrorEnvelope, Role,
};
