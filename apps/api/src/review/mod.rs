// Resume review: validate the request, ask the model (or fall back), relay the evaluation.
// The model is reached only through the `GenerativeModel` trait in llm_client.

pub mod fallback;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod schema;
pub mod service;
