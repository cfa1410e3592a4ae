// ATS Engine: CV text extraction, scoring prompt, model call, resilient reply parsing.
// All LLM calls go through llm_client. No direct provider calls here.

pub mod analysis;
pub mod error;
pub mod extractor;
pub mod handlers;
pub mod models;
pub mod ocr;
pub mod parser;
pub mod pipeline;
pub mod prompts;
