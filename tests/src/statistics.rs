#![cfg(test)]
use crate::session::{default_tracker, replay, tracker_with};

#[test]
fn statistics_without_submissions() {
    let mut tracker = default_tracker();

    let output = replay(&mut tracker, &["statistics", "java", "Python", "back"]);
    assert_eq!(
        output,
        vec![
            "Type the name of a course to see details or 'back' to quit:",
            "Most popular: n/a",
            "Least popular: n/a",
            "Highest activity: n/a",
            "Lowest activity: n/a",
            "Easiest course: n/a",
            "Hardest course: n/a",
            "Unknown course.",
            "Python",
            "id  points completed",
        ]
    );
}

#[test]
fn statistics_and_rankings() {
    let mut tracker = default_tracker();
    replay(
        &mut tracker,
        &[
            "add students",
            "John Doe jdoe@mail.net",
            "Jane Doe jane@mail.net",
            "Ann Lee ann@mail.net",
            "back",
            "add points",
            "1000 8 7 7 5",
            "1001 8 0 8 6",
            "1002 7 0 0 0",
            "1002 1 0 0 0",
            "back",
        ],
    );

    let output = replay(&mut tracker, &["statistics", "PYTHON", "dsa", "back"]);
    assert_eq!(
        output,
        vec![
            "Type the name of a course to see details or 'back' to quit:",
            "Most popular: Python",
            "Least popular: DSA",
            "Highest activity: Python",
            "Lowest activity: DSA",
            "Easiest course: Databases",
            "Hardest course: Flask",
            "Python",
            "id  points completed",
            "1000 8    1.3%",
            "1001 8    1.3%",
            "1002 8    1.3%",
            "DSA",
            "id  points completed",
            "1000 7    1.8%",
        ]
    );
}

#[test]
fn single_qualifying_course_is_only_most() {
    let mut tracker = tracker_with(&[("Rust", 100), ("Go", 50)]).unwrap();
    replay(
        &mut tracker,
        &["add students", "John Doe jdoe@mail.net", "back", "add points", "1000 20 0", "back"],
    );

    let output = replay(&mut tracker, &["statistics", "back"]);
    assert_eq!(output[1], "Most popular: Rust");
    assert_eq!(output[2], "Least popular: n/a");
    assert_eq!(output[5], "Easiest course: Rust");
    assert_eq!(output[6], "Hardest course: n/a");
}
