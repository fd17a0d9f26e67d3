#![cfg(test)]
use crate::session::{default_tracker, replay};

#[test]
fn points_and_lookup_session() {
    let mut tracker = default_tracker();
    replay(&mut tracker, &["add students", "John Doe jdoe@mail.net", "back"]);

    let output = replay(
        &mut tracker,
        &[
            "add points",
            "1000 10 10 5 8",
            "1000 7 7 7 7",
            "1000 7 7 7",
            "1000 -1 2 2 2",
            "1000 ? 2 2 2",
            "1001 1 1 1 1",
            "imsurethereisnosuchstudentid 1 1 1 1",
            "back",
            "find",
            "1000",
            "1001",
            "back",
        ],
    );

    assert_eq!(
        output,
        vec![
            "Enter an id and points or 'back' to return:",
            "Points updated.",
            "Points updated.",
            "Incorrect points format.",
            "Incorrect points format.",
            "Incorrect points format.",
            "No student is found for id=1001",
            "No student is found for id=imsurethereisnosuchstudentid",
            "Enter an id or 'back' to return",
            "1000 points: Python=17; DSA=17; Databases=12; Flask=15",
            "No student is found for id=1001",
        ]
    );
}

#[test]
fn zero_submission_changes_no_course_counters() {
    let mut tracker = default_tracker();
    replay(
        &mut tracker,
        &["add students", "John Doe jdoe@mail.net", "back", "add points", "1000 600 0 0 0"],
    );

    let python = &tracker.courses()[0];
    assert_eq!(python.completed_tasks(), 1);
    assert_eq!(python.total_score(), 600);
    assert_eq!(python.pending_completions(), &[1000]);

    replay(&mut tracker, &["1000 0 0 0 0", "back"]);

    for course in tracker.courses() {
        let expected_tasks = if course.name() == "Python" { 1 } else { 0 };
        assert_eq!(course.completed_tasks(), expected_tasks);
    }
    let python = &tracker.courses()[0];
    assert_eq!(python.total_score(), 600);
    assert_eq!(python.pending_completions(), &[1000]);
}

#[test]
fn rejected_lines_are_atomic() {
    let mut tracker = default_tracker();
    replay(
        &mut tracker,
        &["add students", "John Doe jdoe@mail.net", "back", "add points", "1000 1 2 3 4"],
    );

    replay(&mut tracker, &["1000 100 100 100", "1000 100 100 100 x", "back"]);

    let student = tracker.find_by_id("1000").unwrap();
    assert_eq!(
        student.score_summary(),
        "1000 points: Python=1; DSA=2; Databases=3; Flask=4"
    );
    assert!(tracker.courses().iter().all(|c| c.completed_tasks() == 1));
}
