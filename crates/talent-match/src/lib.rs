//! Job-to-applicant match scoring and the application intake built around it.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
pub mod workflows;

#[cfg(test)]
mod test_support;
