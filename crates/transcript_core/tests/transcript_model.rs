use transcript_core::{CourseGrade, Transcript};

#[test]
fn transcript_serialization_uses_expected_wire_fields() {
    let mut transcript = Transcript::new(3, "blair");
    transcript.upsert_grade("Physics", 75.0);

    let json = serde_json::to_value(&transcript).unwrap();
    assert_eq!(json["student"]["student_id"], 3);
    assert_eq!(json["student"]["student_name"], "blair");
    assert_eq!(json["grades"][0]["course"], "Physics");
    assert_eq!(json["grades"][0]["grade"], 75.0);

    let decoded: Transcript = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, transcript);
}

#[test]
fn course_grade_deserializes_from_plain_object() {
    let value = serde_json::json!({ "course": "test course", "grade": 100 });
    let grade: CourseGrade = serde_json::from_value(value).unwrap();
    assert_eq!(grade, CourseGrade::new("test course", 100.0));
}
