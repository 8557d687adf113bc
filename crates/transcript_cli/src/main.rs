//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `transcript_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use transcript_core::{InMemoryTranscriptRepository, RepoResult, TranscriptService};

fn main() {
    println!("transcript_core ping={}", transcript_core::ping());
    println!("transcript_core version={}", transcript_core::core_version());

    if let Err(err) = run_session() {
        eprintln!("transcript_core session failed: {err}");
        std::process::exit(1);
    }
}

fn run_session() -> RepoResult<()> {
    let mut service = TranscriptService::new(InMemoryTranscriptRepository::new());
    let blair = service.add_student("blair");
    let corey = service.add_student("corey");
    service.add_grade(blair, "Physics", 75.0)?;
    service.add_grade(blair, "Chemistry", 95.0)?;
    service.delete_student(corey)?;

    println!("students={:?}", service.all_student_ids());
    for grade in service.get_transcript(blair)?.grades {
        println!("student={blair} course={} grade={}", grade.course, grade.grade);
    }
    Ok(())
}
