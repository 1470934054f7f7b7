// Mock interview question generation.
// Implements: form validation, prompt building, response extraction, the
// generation pipeline, and persistence of generated interviews.
// All LLM calls go through llm_client via the TextGenerator trait.

pub mod extractor;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod prompt_builder;
pub mod prompts;
pub mod store;
pub mod validation;
