use std::collections::HashSet;

use super::Catalog;
use crate::error::ValidationIssue;
use crate::models::sprint_index;

/// Check a catalog's consistency, returning every issue found.
///
/// Checks, in order: duplicate phase ids, then per phase the declared point
/// total, then per story duplicate ids, zero points and unknown sprints.
pub fn validate(catalog: &Catalog) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut phase_ids = HashSet::new();
    let mut story_ids = HashSet::new();

    for phase in catalog.phases() {
        if !phase_ids.insert(phase.id.as_str()) {
            issues.push(ValidationIssue::DuplicatePhaseId {
                phase_id: phase.id.clone(),
            });
        }

        let actual = phase.actual_points();
        if actual != phase.story_points {
            issues.push(ValidationIssue::PointsMismatch {
                phase_id: phase.id.clone(),
                declared: phase.story_points,
                actual,
            });
        }

        for story in phase.stories() {
            if !story_ids.insert(story.id.as_str()) {
                issues.push(ValidationIssue::DuplicateStoryId {
                    story_id: story.id.clone(),
                });
            }
            if story.points == 0 {
                issues.push(ValidationIssue::ZeroPoints {
                    story_id: story.id.clone(),
                });
            }
            if sprint_index(&story.sprint).is_none() {
                issues.push(ValidationIssue::UnknownSprint {
                    story_id: story.id.clone(),
                    sprint: story.sprint.clone(),
                });
            }
        }
    }

    issues
}
