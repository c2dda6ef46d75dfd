//! Text processing and skill analysis modules

pub mod job_parser;
pub mod matcher;
pub mod pipeline;
pub mod scoring;
pub mod skill_extractor;
pub mod text_cleaner;
