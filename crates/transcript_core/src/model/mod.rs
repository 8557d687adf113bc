//! Domain model for the transcript registry.
//!
//! # Responsibility
//! - Define the student, grade and transcript records owned by the registry.
//!
//! # Invariants
//! - Every transcript is identified by its student's `StudentId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod transcript;
