use serde::{Deserialize, Serialize};

/// The atomic planning unit of the roadmap.
///
/// Stories are identified by a human-readable code combining the phase and a
/// sequence number (`F1-013`). Each belongs to exactly one epic; its `sprint`
/// must be a member of [`SPRINTS`](super::SPRINTS) and its `points` positive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Story {
    pub id: String,
    /// Short title.
    pub item: String,
    /// Feature grouping label, e.g. `Chat - Frontend`.
    pub feature: String,
    pub points: u32,
    pub responsible: Responsible,
    /// Iteration label, e.g. `S3`.
    pub sprint: String,
    pub status: StoryStatus,
    #[serde(rename = "type")]
    pub story_type: StoryType,
    pub complexity: Complexity,
    pub note: String,
    /// Target surface label (`API`, `Desktop`, `Desktop/Mobile`).
    pub device: String,
    pub team: Team,
    pub functionality: String,
}

impl Story {
    /// Fields covered by free-text search, in match order.
    pub fn searchable_fields(&self) -> [&str; 5] {
        [
            &self.item,
            &self.id,
            &self.feature,
            &self.note,
            &self.functionality,
        ]
    }

    pub fn is_completed(&self) -> bool {
        self.status == StoryStatus::Completed
    }
}

/// Lifecycle annotation of a story or phase.
///
/// - `Pending`: Not started
/// - `InProgress`: Being worked on
/// - `Completed`: Done (`done` is accepted when loading data)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StoryStatus {
    Pending,
    InProgress,
    #[serde(alias = "done")]
    Completed,
}

impl StoryStatus {
    pub const ALL: [StoryStatus; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "in_progress" => Some(Self::InProgress),
            "completed" | "done" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Human-facing label used in tables and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// Difficulty tier. Variants are declared in increasing order of difficulty.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    Medium,
    Hard,
    VeryHard,
}

impl Complexity {
    pub const ALL: [Complexity; 4] = [Self::Simple, Self::Medium, Self::Hard, Self::VeryHard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::VeryHard => "very_hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "simple" => Some(Self::Simple),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            "very_hard" => Some(Self::VeryHard),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::VeryHard => "Very Hard",
        }
    }
}

/// Work category tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StoryType {
    Core,
    #[serde(rename = "UI")]
    Ui,
    #[serde(rename = "UX")]
    Ux,
    Integration,
    Security,
    Tool,
    Compliance,
    Product,
}

impl StoryType {
    pub const ALL: [StoryType; 8] = [
        Self::Core,
        Self::Ui,
        Self::Ux,
        Self::Integration,
        Self::Security,
        Self::Tool,
        Self::Compliance,
        Self::Product,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::Ui => "UI",
            Self::Ux => "UX",
            Self::Integration => "Integration",
            Self::Security => "Security",
            Self::Tool => "Tool",
            Self::Compliance => "Compliance",
            Self::Product => "Product",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Core" => Some(Self::Core),
            "UI" => Some(Self::Ui),
            "UX" => Some(Self::Ux),
            "Integration" => Some(Self::Integration),
            "Security" => Some(Self::Security),
            "Tool" => Some(Self::Tool),
            "Compliance" => Some(Self::Compliance),
            "Product" => Some(Self::Product),
            _ => None,
        }
    }
}

/// Owning team.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Team {
    Engineering,
    Product,
}

impl Team {
    pub const ALL: [Team; 2] = [Self::Engineering, Self::Product];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Product => "Product",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Engineering" => Some(Self::Engineering),
            "Product" => Some(Self::Product),
            _ => None,
        }
    }
}

/// The role or pairing responsible for delivering a story.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Responsible {
    #[serde(rename = "Backend Python")]
    BackendPython,
    #[serde(rename = "Backend Go")]
    BackendGo,
    #[serde(rename = "Frontend 1")]
    Frontend1,
    #[serde(rename = "Frontend 2")]
    Frontend2,
    #[serde(rename = "Backend Go + Python")]
    BackendGoPython,
}

impl Responsible {
    /// Display order used by breakdowns.
    pub const ALL: [Responsible; 5] = [
        Self::BackendPython,
        Self::BackendGo,
        Self::Frontend1,
        Self::Frontend2,
        Self::BackendGoPython,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BackendPython => "Backend Python",
            Self::BackendGo => "Backend Go",
            Self::Frontend1 => "Frontend 1",
            Self::Frontend2 => "Frontend 2",
            Self::BackendGoPython => "Backend Go + Python",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Backend Python" => Some(Self::BackendPython),
            "Backend Go" => Some(Self::BackendGo),
            "Frontend 1" => Some(Self::Frontend1),
            "Frontend 2" => Some(Self::Frontend2),
            "Backend Go + Python" => Some(Self::BackendGoPython),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accepts_done_alias() {
        assert_eq!(StoryStatus::from_str("done"), Some(StoryStatus::Completed));
        let status: StoryStatus = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(status, StoryStatus::Completed);
        assert_eq!(status.as_str(), "completed");
    }

    #[test]
    fn test_complexity_is_ordered() {
        assert!(Complexity::Simple < Complexity::Medium);
        assert!(Complexity::Hard < Complexity::VeryHard);
        let mut tiers = vec![Complexity::VeryHard, Complexity::Simple, Complexity::Hard];
        tiers.sort();
        assert_eq!(
            tiers,
            vec![Complexity::Simple, Complexity::Hard, Complexity::VeryHard]
        );
    }

    #[test]
    fn test_enum_strings_round_trip_through_serde() {
        for r in Responsible::ALL {
            let json = serde_json::to_string(&r).unwrap();
            assert_eq!(json, format!("\"{}\"", r.as_str()));
        }
        for t in StoryType::ALL {
            assert_eq!(StoryType::from_str(t.as_str()), Some(t));
        }
        assert_eq!(
            serde_json::to_string(&Complexity::VeryHard).unwrap(),
            "\"very_hard\""
        );
    }

    #[test]
    fn test_unknown_values_do_not_parse() {
        assert_eq!(Team::from_str("Design"), None);
        assert_eq!(Responsible::from_str("backend python"), None);
        assert_eq!(Complexity::from_str("trivial"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(StoryStatus::InProgress.label(), "In Progress");
        assert_eq!(Complexity::VeryHard.label(), "Very Hard");
    }
}
