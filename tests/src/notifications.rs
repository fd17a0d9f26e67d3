#![cfg(test)]
use crate::session::{default_tracker, replay};

#[test]
fn notify_session() {
    let mut tracker = default_tracker();
    replay(
        &mut tracker,
        &[
            "add students",
            "John Doe jdoe@mail.net",
            "Jane Spark jspark@yahoo.com",
            "back",
            "add points",
            "1000 600 400 0 0",
            "1001 599 0 0 0",
            "back",
        ],
    );

    let output = replay(&mut tracker, &["notify"]);
    assert_eq!(
        output,
        vec![
            "To: jdoe@mail.net",
            "Re: Your Learning Progress",
            "Hello, John Doe! You have accomplished our Python course!",
            "To: jdoe@mail.net",
            "Re: Your Learning Progress",
            "Hello, John Doe! You have accomplished our DSA course!",
            "Total 1 students have been notified.",
        ]
    );

    assert_eq!(
        replay(&mut tracker, &["notify"]),
        vec!["", "Total 0 students have been notified."]
    );

    // John is already done with Python, Jane crosses the line now
    let output = replay(
        &mut tracker,
        &["add points", "1000 10 0 0 0", "1001 1 0 0 0", "back", "notify"],
    );
    assert_eq!(
        output[3..].to_vec(),
        vec![
            "To: jspark@yahoo.com",
            "Re: Your Learning Progress",
            "Hello, Jane Spark! You have accomplished our Python course!",
            "Total 1 students have been notified.",
        ]
    );
}
