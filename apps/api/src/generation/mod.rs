// Plant profile generation
// Implements: prompt construction, completion call, JSON extraction, optional shape check.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod extract;
pub mod generator;
pub mod handlers;
pub mod profile;
pub mod prompts;
