//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep host layers decoupled from registry storage details.

pub mod shared_service;
pub mod transcript_service;
