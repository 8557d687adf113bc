//! Transcript use-case service.
//!
//! # Responsibility
//! - Provide stable registry entry points for core callers.
//! - Delegate storage and lookup to repository implementations.
//! - Emit metadata-only diagnostic events for mutations.
//!
//! # Invariants
//! - Service APIs never bypass repository contracts.
//! - Log events carry IDs and counts only, never names or grades.

use crate::model::transcript::{CourseGrade, StudentId, Transcript};
use crate::repo::transcript_repo::{RepoError, RepoResult, TranscriptRepository};
use log::{info, warn};

/// Use-case service wrapper for transcript registry operations.
pub struct TranscriptService<R: TranscriptRepository> {
    repo: R,
}

impl<R: TranscriptRepository> TranscriptService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrows the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Registers a student with an empty transcript and returns the new ID.
    pub fn add_student(&mut self, name: &str) -> StudentId {
        let id = self.repo.add_student(name);
        info!("event=student_add module=service status=ok student_id={id}");
        id
    }

    pub fn get_transcript(&self, id: StudentId) -> RepoResult<Transcript> {
        self.repo.get_transcript(id)
    }

    /// Permanently removes a student and their transcript.
    pub fn delete_student(&mut self, id: StudentId) -> RepoResult<()> {
        let result = self.repo.delete_student(id);
        log_mutation("student_delete", id, &result);
        result
    }

    /// Records a grade, replacing any existing grade for the same course.
    pub fn add_grade(&mut self, id: StudentId, course: &str, grade: f64) -> RepoResult<()> {
        let result = self.repo.add_grade(id, course, grade);
        log_mutation("grade_add", id, &result);
        result
    }

    pub fn get_grade(&self, id: StudentId, course: &str) -> RepoResult<CourseGrade> {
        self.repo.get_grade(id, course)
    }

    /// Returns IDs of students whose name matches exactly, in add-order.
    pub fn name_to_ids(&self, name: &str) -> Vec<StudentId> {
        self.repo.name_to_ids(name)
    }

    /// Returns every live student ID in add-order.
    pub fn all_student_ids(&self) -> Vec<StudentId> {
        self.repo.all_student_ids()
    }

    pub fn list_transcripts(&self) -> Vec<Transcript> {
        self.repo.list_transcripts()
    }
}

fn log_mutation(event: &str, id: StudentId, result: &RepoResult<()>) {
    match result {
        Ok(()) => info!("event={event} module=service status=ok student_id={id}"),
        Err(err) => warn!(
            "event={event} module=service status=error student_id={id} error_code={}",
            error_code(err)
        ),
    }
}

fn error_code(err: &RepoError) -> &'static str {
    match err {
        RepoError::NotFound(_) => "student_not_found",
        RepoError::GradeNotFound { .. } => "grade_not_found",
    }
}
