//! Extraction — turns raw résumé text into a validated `CandidateRecord`.
//!
//! `schema` is the single declarative description of the candidate shape,
//! consumed both by `prompts` (to render extraction instructions) and by the
//! validator (to check the service response). Keeping both on one table means
//! the prompt and the validator cannot drift apart.

pub mod extractor;
pub mod pdf;
pub mod prompts;
pub mod schema;
