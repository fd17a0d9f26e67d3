//! # Cross-Course Statistics
//!
//! Ranks the whole course registry on three criteria:
//!
//! * **Popularity**: number of enrolled students.
//! * **Activity**: number of nonzero submissions.
//! * **Difficulty**: average points per submission (a high average means an easy course).
//!
//! Courses whose metric is zero take no part in the comparison. When no course
//! qualifies both sides read `n/a`. When every qualifying course shares the
//! same value the course list is only reported on the "most" side.

use crate::course::Course;

pub const NOT_AVAILABLE: &str = "n/a";

/// Course names at both ends of one criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extremes {
    pub most: Vec<String>,
    pub least: Vec<String>,
}

impl Extremes {
    fn not_available() -> Self {
        Self {
            most: Vec::new(),
            least: Vec::new(),
        }
    }

    pub fn most_label(&self) -> String {
        label(&self.most)
    }

    pub fn least_label(&self) -> String {
        label(&self.least)
    }
}

fn label(names: &[String]) -> String {
    if names.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        names.join(", ")
    }
}

pub struct TrackerStatistics<'a> {
    courses: &'a [Course],
}

impl<'a> TrackerStatistics<'a> {
    pub fn new(courses: &'a [Course]) -> Self {
        Self { courses }
    }

    pub fn popularity(&self) -> Extremes {
        self.extremes_by(|course| course.enrolled() as f64)
    }

    pub fn activity(&self) -> Extremes {
        self.extremes_by(|course| course.completed_tasks() as f64)
    }

    pub fn difficulty(&self) -> Extremes {
        self.extremes_by(Course::average_score)
    }

    /// The six summary lines shown when entering the statistics view.
    pub fn report(&self) -> Vec<String> {
        let popularity = self.popularity();
        let activity = self.activity();
        let difficulty = self.difficulty();

        vec![
            format!("Most popular: {}", popularity.most_label()),
            format!("Least popular: {}", popularity.least_label()),
            format!("Highest activity: {}", activity.most_label()),
            format!("Lowest activity: {}", activity.least_label()),
            format!("Easiest course: {}", difficulty.most_label()),
            format!("Hardest course: {}", difficulty.least_label()),
        ]
    }

    fn extremes_by<F>(&self, metric: F) -> Extremes
    where
        F: Fn(&Course) -> f64,
    {
        let scored: Vec<(&str, f64)> = self
            .courses
            .iter()
            .map(|course| (course.name(), metric(course)))
            .filter(|(_, value)| *value > 0.0)
            .collect();

        if scored.is_empty() {
            return Extremes::not_available();
        }

        let max = scored.iter().map(|(_, v)| *v).fold(f64::MIN, f64::max);
        let min = scored.iter().map(|(_, v)| *v).fold(f64::MAX, f64::min);

        let names_at = |target: f64| -> Vec<String> {
            scored
                .iter()
                .filter(|(_, v)| *v == target)
                .map(|(name, _)| name.to_string())
                .collect()
        };

        let most = names_at(max);
        let least = names_at(min);

        if most == least {
            return Extremes {
                most,
                least: Vec::new(),
            };
        }
        Extremes { most, least }
    }
}
