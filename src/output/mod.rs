//! Report building and rendering

pub mod formatter;
pub mod report;
