// Bio suggestions for the new-profile form.
// Remote generation goes through llm_client; every failure lands on the template.

pub mod generator;
pub mod handlers;
pub mod prompts;
