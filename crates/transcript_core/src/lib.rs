//! Core domain logic for the transcript registry.
//! This crate is the single source of truth for registry invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::transcript::{CourseGrade, Student, StudentId, Transcript};
pub use repo::transcript_repo::{
    InMemoryTranscriptRepository, RepoError, RepoResult, TranscriptRepository,
};
pub use service::shared_service::SharedTranscriptService;
pub use service::transcript_service::TranscriptService;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
