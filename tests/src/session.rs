use lptrack_common::config::{Config, CourseSpec};
use lptrack_core::tracker::Tracker;

/// Feeds each input line to `tracker` and collects every output line.
pub fn replay(tracker: &mut Tracker, input: &[&str]) -> Vec<String> {
    input
        .iter()
        .flat_map(|line| tracker.handle_line(line).lines)
        .collect()
}

/// A tracker with the default four-course registry.
pub fn default_tracker() -> Tracker {
    Tracker::new(&Config::default())
}

pub fn tracker_with(courses: &[(&str, u64)]) -> anyhow::Result<Tracker> {
    let specs = courses
        .iter()
        .map(|(name, score)| CourseSpec::new(*name, *score))
        .collect();
    Ok(Tracker::new(&Config::new(specs)?))
}
