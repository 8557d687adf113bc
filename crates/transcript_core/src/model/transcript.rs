//! Transcript domain model.
//!
//! # Responsibility
//! - Define the canonical student/grade records held by the registry.
//! - Provide grade lookup and replacement helpers on one transcript.
//!
//! # Invariants
//! - `student_id` is unique and never reused for another student.
//! - A transcript holds at most one `CourseGrade` per distinct course.
//! - Course matching is exact (case-sensitive, whole-value).

use serde::{Deserialize, Serialize};

/// Stable identifier for one student and their transcript.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type StudentId = u64;

/// Registered student identity.
///
/// Names are not unique; identity is carried by `student_id` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: StudentId,
    pub student_name: String,
}

/// One grade record for one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseGrade {
    /// Course identifier, compared by exact value.
    pub course: String,
    pub grade: f64,
}

impl CourseGrade {
    pub fn new(course: impl Into<String>, grade: f64) -> Self {
        Self {
            course: course.into(),
            grade,
        }
    }
}

/// A student together with their recorded grades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub student: Student,
    /// Grades in the order their course was first recorded.
    pub grades: Vec<CourseGrade>,
}

impl Transcript {
    /// Creates an empty transcript for a freshly registered student.
    pub fn new(student_id: StudentId, student_name: impl Into<String>) -> Self {
        Self {
            student: Student {
                student_id,
                student_name: student_name.into(),
            },
            grades: Vec::new(),
        }
    }

    pub fn student_id(&self) -> StudentId {
        self.student.student_id
    }

    /// Returns the grade recorded for exactly `course`, if any.
    pub fn grade_for(&self, course: &str) -> Option<&CourseGrade> {
        self.grades.iter().find(|entry| entry.course == course)
    }

    /// Records `grade` for `course`.
    ///
    /// # Contract
    /// - An existing entry for the same course is replaced in place and its
    ///   previous grade is returned.
    /// - Otherwise a new entry is appended and `None` is returned.
    pub fn upsert_grade(&mut self, course: impl Into<String>, grade: f64) -> Option<f64> {
        let course = course.into();
        match self.grades.iter_mut().find(|entry| entry.course == course) {
            Some(existing) => Some(std::mem::replace(&mut existing.grade, grade)),
            None => {
                self.grades.push(CourseGrade { course, grade });
                None
            }
        }
    }
}
