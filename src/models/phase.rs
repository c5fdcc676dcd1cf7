use serde::{Deserialize, Serialize};

use super::{Story, StoryStatus};

/// A project stage grouping epics.
///
/// `story_points` is the total declared by the data author. It should equal
/// the sum of the points of every story nested under the phase; the catalog
/// checks this when it is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Phase {
    pub id: String,
    pub title: String,
    pub short_title: String,
    /// Number of sprints the phase spans.
    pub sprints: u32,
    /// Declared point total.
    pub story_points: u64,
    /// Duration label, e.g. `6 semanas`.
    pub duration: String,
    pub status: StoryStatus,
    #[serde(default)]
    pub milestones: Vec<String>,
    pub epics: Vec<Epic>,
}

impl Phase {
    /// Stories of every epic in this phase, in definition order.
    pub fn stories(&self) -> impl Iterator<Item = &Story> {
        self.epics.iter().flat_map(|e| e.stories.iter())
    }

    /// Sum of the points of every nested story.
    pub fn actual_points(&self) -> u64 {
        self.epics.iter().map(Epic::points).sum()
    }

    /// Share of completed stories, as a rounded percentage. Zero for an empty phase.
    pub fn progress(&self) -> u32 {
        let total = self.stories().count();
        let completed = self.stories().filter(|s| s.is_completed()).count();
        percentage(completed as u64, total as u64)
    }
}

/// A themed group of stories. Story order is display order only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Epic {
    pub id: String,
    pub title: String,
    pub stories: Vec<Story>,
}

impl Epic {
    /// Derived point total.
    pub fn points(&self) -> u64 {
        self.stories.iter().map(|s| u64::from(s.points)).sum()
    }

    pub fn completed_count(&self) -> usize {
        self.stories.iter().filter(|s| s.is_completed()).count()
    }

    /// Share of completed stories, as a rounded percentage. Zero for an empty epic.
    pub fn progress(&self) -> u32 {
        percentage(self.completed_count() as u64, self.stories.len() as u64)
    }
}

/// `round(part / whole * 100)`, or 0 when `whole` is 0.
pub fn percentage(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Complexity, Responsible, StoryType, Team};

    fn story(id: &str, points: u32, status: StoryStatus) -> Story {
        Story {
            id: id.to_string(),
            item: id.to_string(),
            feature: String::new(),
            points,
            responsible: Responsible::BackendPython,
            sprint: "S1".to_string(),
            status,
            story_type: StoryType::Core,
            complexity: Complexity::Hard,
            note: String::new(),
            device: "API".to_string(),
            team: Team::Engineering,
            functionality: String::new(),
        }
    }

    fn epic(stories: Vec<Story>) -> Epic {
        Epic {
            id: "epic-1".to_string(),
            title: "Epic".to_string(),
            stories,
        }
    }

    #[test]
    fn test_epic_progress_counts_completed_stories() {
        let epic = epic(vec![
            story("A", 8, StoryStatus::Completed),
            story("B", 5, StoryStatus::InProgress),
            story("C", 3, StoryStatus::Pending),
        ]);
        assert_eq!(epic.completed_count(), 1);
        assert_eq!(epic.progress(), 33);
        assert_eq!(epic.points(), 16);
    }

    #[test]
    fn test_empty_epic_has_zero_progress() {
        let epic = epic(vec![]);
        assert_eq!(epic.completed_count(), 0);
        assert_eq!(epic.progress(), 0);
        assert_eq!(epic.points(), 0);
    }

    #[test]
    fn test_points_do_not_overflow_u32() {
        let epic = epic(vec![
            story("A", 3_000_000_000, StoryStatus::Completed),
            story("B", 3_000_000_000, StoryStatus::Pending),
        ]);
        assert_eq!(epic.points(), 6_000_000_000);
        assert_eq!(epic.progress(), 50);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(percentage(5, 13), 38);
        assert_eq!(percentage(8, 13), 62);
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(1, 8), 13);
    }

    #[test]
    fn test_percentage_of_zero_is_zero() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(0, 10), 0);
        assert_eq!(percentage(10, 10), 100);
    }
}
