//! Repository layer abstractions and the in-memory registry.
//!
//! # Responsibility
//! - Define the transcript registry call contract.
//! - Keep lookup/storage details out of service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `GradeNotFound`)
//!   instead of sentinel values.
//! - Failed calls leave the registry unchanged.

pub mod transcript_repo;
