use serde::Serialize;

use super::StoryRef;
use crate::catalog::Catalog;
use crate::models::*;

/// Summary of a filtered set of stories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    pub total: usize,
    pub total_points: u64,
    /// Story count per tier, easiest first. Tiers with no stories are kept with 0.
    pub by_complexity: Vec<(Complexity, usize)>,
}

impl FilterStats {
    pub fn from_refs(refs: &[StoryRef<'_>]) -> Self {
        let by_complexity = Complexity::ALL
            .iter()
            .map(|tier| {
                let count = refs.iter().filter(|r| r.story.complexity == *tier).count();
                (*tier, count)
            })
            .collect();

        Self {
            total: refs.len(),
            total_points: refs.iter().map(|r| u64::from(r.story.points)).sum(),
            by_complexity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SprintSummary {
    pub sprint: &'static str,
    pub stories: usize,
    pub points: u64,
    pub completed: usize,
    /// Completed stories over stories, rounded percentage.
    pub progress: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponsibleSummary {
    pub responsible: Responsible,
    pub stories: usize,
    pub points: u64,
    /// Share of the catalog's total points, rounded percentage.
    pub share: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseSummary {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub stories: usize,
    pub declared_points: u64,
    pub actual_points: u64,
    pub progress: u32,
}

/// Catalog-wide totals plus every breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub stories: usize,
    pub total_points: u64,
    pub completed_points: u64,
    pub progress: u32,
    pub phases: Vec<PhaseSummary>,
    pub sprints: Vec<SprintSummary>,
    pub responsibles: Vec<ResponsibleSummary>,
}

impl Catalog {
    /// One entry per known sprint, in schedule order, including empty sprints.
    pub fn sprint_breakdown(&self) -> Vec<SprintSummary> {
        SPRINTS
            .iter()
            .map(|&sprint| {
                let stories = self.stories_by_sprint(sprint);
                let completed = stories.iter().filter(|s| s.is_completed()).count();
                SprintSummary {
                    sprint,
                    stories: stories.len(),
                    points: stories.iter().map(|s| u64::from(s.points)).sum(),
                    completed,
                    progress: percentage(completed as u64, stories.len() as u64),
                }
            })
            .collect()
    }

    pub fn responsible_breakdown(&self) -> Vec<ResponsibleSummary> {
        let total = self.total_points();
        Responsible::ALL
            .iter()
            .map(|responsible| {
                let stories = self.stories_by_responsible(*responsible);
                let points: u64 = stories.iter().map(|s| u64::from(s.points)).sum();
                ResponsibleSummary {
                    responsible: *responsible,
                    stories: stories.len(),
                    points,
                    share: percentage(points, total),
                }
            })
            .collect()
    }

    pub fn phase_summaries(&self) -> Vec<PhaseSummary> {
        self.phases()
            .iter()
            .map(|phase| PhaseSummary {
                id: phase.id.clone(),
                title: phase.title.clone(),
                duration: phase.duration.clone(),
                stories: phase.stories().count(),
                declared_points: phase.story_points,
                actual_points: phase.actual_points(),
                progress: phase.progress(),
            })
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            stories: self.stories().count(),
            total_points: self.total_points(),
            completed_points: self.completed_points(),
            progress: self.progress_percentage(),
            phases: self.phase_summaries(),
            sprints: self.sprint_breakdown(),
            responsibles: self.responsible_breakdown(),
        }
    }
}
