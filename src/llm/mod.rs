//! LLM integration for eval-forge.
//!
//! The harness consumes exactly one capability from the model backend:
//! "generate a reply to a single conversational request, asynchronously,
//! returning the reply or failing". That capability is the [`LlmProvider`]
//! trait; [`LiteLlmClient`] is the production implementation against any
//! OpenAI-compatible chat-completions endpoint (LiteLLM, OpenRouter, ...).

pub mod litellm;

pub use litellm::{
    Choice, GenerationRequest, GenerationResponse, LiteLlmClient, LlmProvider, Message, Usage,
};
