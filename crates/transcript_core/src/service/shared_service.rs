//! Lock-protected transcript service for concurrent hosts.
//!
//! # Invariants
//! - Every operation runs inside one mutual-exclusion critical section.
//! - Clones share the same registry.
//! - A poisoned lock is recovered: registry calls either fully apply or
//!   leave state unchanged, so the guarded value stays consistent.

use crate::model::transcript::{CourseGrade, StudentId, Transcript};
use crate::repo::transcript_repo::{RepoResult, TranscriptRepository};
use crate::service::transcript_service::TranscriptService;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to a transcript service guarded by a single mutex.
pub struct SharedTranscriptService<R: TranscriptRepository> {
    inner: Arc<Mutex<TranscriptService<R>>>,
}

impl<R: TranscriptRepository> Clone for SharedTranscriptService<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: TranscriptRepository> SharedTranscriptService<R> {
    pub fn new(service: TranscriptService<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    pub fn add_student(&self, name: &str) -> StudentId {
        self.lock().add_student(name)
    }

    pub fn get_transcript(&self, id: StudentId) -> RepoResult<Transcript> {
        self.lock().get_transcript(id)
    }

    pub fn delete_student(&self, id: StudentId) -> RepoResult<()> {
        self.lock().delete_student(id)
    }

    pub fn add_grade(&self, id: StudentId, course: &str, grade: f64) -> RepoResult<()> {
        self.lock().add_grade(id, course, grade)
    }

    pub fn get_grade(&self, id: StudentId, course: &str) -> RepoResult<CourseGrade> {
        self.lock().get_grade(id, course)
    }

    pub fn name_to_ids(&self, name: &str) -> Vec<StudentId> {
        self.lock().name_to_ids(name)
    }

    pub fn all_student_ids(&self) -> Vec<StudentId> {
        self.lock().all_student_ids()
    }

    pub fn list_transcripts(&self) -> Vec<Transcript> {
        self.lock().list_transcripts()
    }

    fn lock(&self) -> MutexGuard<'_, TranscriptService<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
