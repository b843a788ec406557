// src/infrastructure/enrichment/mod.rs
mod openai;
pub mod prompts;

pub use openai::OpenAiEnricher;
