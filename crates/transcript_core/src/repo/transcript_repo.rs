//! Transcript repository contract and in-memory registry.
//!
//! # Responsibility
//! - Provide create/read/delete APIs over student transcripts.
//! - Allocate student IDs from a monotonic counter.
//!
//! # Invariants
//! - The first issued ID is 1 and IDs are never reissued, even after delete.
//! - Listing order is add-order; IDs are strictly increasing so the ordered
//!   map key order is the insertion order.
//! - Deleted and never-issued IDs are indistinguishable (`NotFound`).

use crate::model::transcript::{CourseGrade, StudentId, Transcript};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Lookup failures for transcript operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// No live transcript exists for this student ID.
    NotFound(StudentId),
    /// Student exists but has no grade recorded for `course`.
    GradeNotFound { id: StudentId, course: String },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "student not found: {id}"),
            Self::GradeNotFound { id, course } => {
                write!(f, "grade not found for course `{course}` (student {id})")
            }
        }
    }
}

impl Error for RepoError {}

/// Repository interface for transcript registry operations.
pub trait TranscriptRepository {
    fn add_student(&mut self, name: &str) -> StudentId;
    fn get_transcript(&self, id: StudentId) -> RepoResult<Transcript>;
    fn delete_student(&mut self, id: StudentId) -> RepoResult<()>;
    fn add_grade(&mut self, id: StudentId, course: &str, grade: f64) -> RepoResult<()>;
    fn get_grade(&self, id: StudentId, course: &str) -> RepoResult<CourseGrade>;
    fn name_to_ids(&self, name: &str) -> Vec<StudentId>;
    fn all_student_ids(&self) -> Vec<StudentId>;
    fn list_transcripts(&self) -> Vec<Transcript>;
}

/// In-memory transcript registry.
///
/// Owns every transcript exclusively; callers receive owned copies.
#[derive(Debug, Default)]
pub struct InMemoryTranscriptRepository {
    transcripts: BTreeMap<StudentId, Transcript>,
    last_id: StudentId,
}

impl InMemoryTranscriptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live transcripts.
    pub fn len(&self) -> usize {
        self.transcripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcripts.is_empty()
    }

    fn transcript(&self, id: StudentId) -> RepoResult<&Transcript> {
        self.transcripts.get(&id).ok_or(RepoError::NotFound(id))
    }

    fn transcript_mut(&mut self, id: StudentId) -> RepoResult<&mut Transcript> {
        self.transcripts.get_mut(&id).ok_or(RepoError::NotFound(id))
    }
}

impl TranscriptRepository for InMemoryTranscriptRepository {
    fn add_student(&mut self, name: &str) -> StudentId {
        self.last_id += 1;
        let id = self.last_id;
        self.transcripts.insert(id, Transcript::new(id, name));
        id
    }

    fn get_transcript(&self, id: StudentId) -> RepoResult<Transcript> {
        self.transcript(id).cloned()
    }

    fn delete_student(&mut self, id: StudentId) -> RepoResult<()> {
        self.transcripts
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound(id))
    }

    fn add_grade(&mut self, id: StudentId, course: &str, grade: f64) -> RepoResult<()> {
        self.transcript_mut(id)?.upsert_grade(course, grade);
        Ok(())
    }

    fn get_grade(&self, id: StudentId, course: &str) -> RepoResult<CourseGrade> {
        self.transcript(id)?
            .grade_for(course)
            .cloned()
            .ok_or_else(|| RepoError::GradeNotFound {
                id,
                course: course.to_string(),
            })
    }

    fn name_to_ids(&self, name: &str) -> Vec<StudentId> {
        self.transcripts
            .values()
            .filter(|transcript| transcript.student.student_name == name)
            .map(Transcript::student_id)
            .collect()
    }

    fn all_student_ids(&self) -> Vec<StudentId> {
        self.transcripts.keys().copied().collect()
    }

    fn list_transcripts(&self) -> Vec<Transcript> {
        self.transcripts.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryTranscriptRepository, RepoError, TranscriptRepository};

    #[test]
    fn first_issued_id_is_one() {
        let mut repo = InMemoryTranscriptRepository::new();
        assert_eq!(repo.add_student("blair"), 1);
        assert_eq!(repo.add_student("corey"), 2);
    }

    #[test]
    fn failed_mutations_leave_registry_unchanged() {
        let mut repo = InMemoryTranscriptRepository::new();
        let id = repo.add_student("blair");

        assert_eq!(repo.add_grade(id + 1, "Physics", 75.0), Err(RepoError::NotFound(id + 1)));
        assert_eq!(repo.delete_student(id + 1), Err(RepoError::NotFound(id + 1)));

        assert_eq!(repo.len(), 1);
        assert!(repo.get_transcript(id).unwrap().grades.is_empty());
    }

    #[test]
    fn error_messages_name_the_missing_target() {
        assert_eq!(RepoError::NotFound(3).to_string(), "student not found: 3");
        let err = RepoError::GradeNotFound {
            id: 3,
            course: "Physics".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "grade not found for course `Physics` (student 3)"
        );
    }
}
