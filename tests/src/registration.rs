#![cfg(test)]
use crate::session::{default_tracker, replay};

#[test]
fn registration_session() {
    let mut tracker = default_tracker();

    let output = replay(
        &mut tracker,
        &[
            "add students",
            "John Doe jdoe@mail.net",
            "Jane Doe jdoe@mail.net",
            "Robert Jemison Van de Graaff robertvdgraaff@mit.edu",
            "J Doe j@mail.net",
            "John D. john@mail.net",
            "John Doe johnmail.net",
            "John",
            "back",
            "list",
        ],
    );

    assert_eq!(
        output,
        vec![
            "Enter student credentials or 'back' to return: ",
            "The student has been added.",
            "This email is already taken.",
            "The student has been added.",
            "Incorrect first name",
            "Incorrect last name",
            "Incorrect email",
            "Incorrect credentials",
            "Total 2 students have been added.",
            "Students:",
            "1000",
            "1001",
        ]
    );

    let robert = tracker.find_by_id("1001").unwrap();
    assert_eq!(robert.first_name(), "Robert");
    assert_eq!(robert.last_name(), "Jemison Van de Graaff");
    assert_eq!(robert.email(), "robertvdgraaff@mit.edu");
}

#[test]
fn added_count_is_per_session_and_ids_keep_growing() {
    let mut tracker = default_tracker();

    replay(&mut tracker, &["add students", "John Doe jdoe@mail.net", "back"]);
    let output = replay(
        &mut tracker,
        &["add students", "Jane Doe jane@mail.net", "Ann Lee ann@mail.net", "back"],
    );

    assert_eq!(output.last().map(String::as_str), Some("Total 2 students have been added."));
    let ids: Vec<u64> = tracker.roster().keys().copied().collect();
    assert_eq!(ids, vec![1000, 1001, 1002]);
}

#[test]
fn empty_and_unknown_commands_do_not_end_the_session() {
    let mut tracker = default_tracker();

    let output = replay(&mut tracker, &["", "hello", "Add Students", "back", "exit"]);
    assert_eq!(
        output,
        vec![
            "No input.",
            "Error: unknown command!",
            "Error: unknown command!",
            "Enter 'exit' to exit the program.",
            "Bye!",
        ]
    );
    assert!(tracker.is_exited());
}
