//! The roadmap catalog: the full Phase → Epic → Story tree plus pure queries.
//!
//! A [`Catalog`] is built once, validated, and then only read. The bundled
//! roadmap is compiled into the binary from `roadmap.json`; other catalogs of
//! the same shape can be loaded from disk.

mod validate;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::models::*;
use crate::query::{StoryFilter, StoryRef};

pub use validate::validate;

/// Raw JSON of the bundled roadmap.
pub const BUNDLED: &str = include_str!("roadmap.json");

/// Immutable catalog of planning records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    phases: Vec<Phase>,
}

impl Catalog {
    /// Build a catalog from phases, rejecting data that fails validation.
    pub fn new(phases: Vec<Phase>) -> Result<Self> {
        let catalog = Self { phases };
        let issues = validate(&catalog);
        if !issues.is_empty() {
            for issue in &issues {
                tracing::warn!("Catalog issue: {}", issue);
            }
            return Err(CatalogError::Invalid(issues));
        }
        Ok(catalog)
    }

    /// The roadmap compiled into this crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Catalog = serde_json::from_str(json)?;
        Self::new(raw.phases)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_json_str(&read_catalog_file(path)?)
    }

    /// Parse JSON of the catalog shape without validating it.
    ///
    /// Used by tooling that wants to report issues rather than refuse the data.
    pub fn from_json_str_unchecked(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path_unchecked(path: &Path) -> Result<Self> {
        Self::from_json_str_unchecked(&read_catalog_file(path)?)
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn phase(&self, id: &str) -> Option<&Phase> {
        self.phases.iter().find(|p| p.id == id)
    }

    // ============================================================
    // Flattening
    // ============================================================

    /// Every story across every phase and epic, in definition order.
    pub fn all_stories(&self) -> Vec<&Story> {
        self.stories().collect()
    }

    pub fn stories(&self) -> impl Iterator<Item = &Story> {
        self.phases.iter().flat_map(Phase::stories)
    }

    /// Every story together with the phase and epic it belongs to.
    pub fn story_refs(&self) -> Vec<StoryRef<'_>> {
        self.phases
            .iter()
            .flat_map(|phase| {
                phase.epics.iter().flat_map(move |epic| {
                    epic.stories
                        .iter()
                        .map(move |story| StoryRef { phase, epic, story })
                })
            })
            .collect()
    }

    pub fn find_story(&self, id: &str) -> Option<StoryRef<'_>> {
        self.story_refs().into_iter().find(|r| r.story.id == id)
    }

    // ============================================================
    // Single-criterion filters
    // ============================================================

    /// Stories scheduled in `sprint`. An unknown label yields nothing.
    pub fn stories_by_sprint(&self, sprint: &str) -> Vec<&Story> {
        self.stories().filter(|s| s.sprint == sprint).collect()
    }

    pub fn stories_by_responsible(&self, responsible: Responsible) -> Vec<&Story> {
        self.stories()
            .filter(|s| s.responsible == responsible)
            .collect()
    }

    pub fn stories_by_status(&self, status: StoryStatus) -> Vec<&Story> {
        self.stories().filter(|s| s.status == status).collect()
    }

    /// Multi-criterion filter; every set constraint must hold.
    pub fn filter(&self, filter: &StoryFilter) -> Vec<StoryRef<'_>> {
        self.story_refs()
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect()
    }

    // ============================================================
    // Aggregates
    // ============================================================

    pub fn total_points(&self) -> u64 {
        self.stories().map(|s| u64::from(s.points)).sum()
    }

    /// Points of stories whose status is `completed`.
    pub fn completed_points(&self) -> u64 {
        self.stories()
            .filter(|s| s.is_completed())
            .map(|s| u64::from(s.points))
            .sum()
    }

    /// Completed share of all points as a rounded percentage, 0 for an empty catalog.
    pub fn progress_percentage(&self) -> u32 {
        percentage(self.completed_points(), self.total_points())
    }

    /// Sum of every phase's declared total.
    pub fn declared_points(&self) -> u64 {
        self.phases.iter().map(|p| p.story_points).sum()
    }
}

fn read_catalog_file(path: &Path) -> Result<String> {
    tracing::debug!("Loading catalog from {}", path.display());
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str, points: u32, status: StoryStatus) -> Story {
        Story {
            id: id.to_string(),
            item: format!("Item {}", id),
            feature: "Feature".to_string(),
            points,
            responsible: Responsible::BackendGo,
            sprint: "S1".to_string(),
            status,
            story_type: StoryType::Core,
            complexity: Complexity::Medium,
            note: String::new(),
            device: "API".to_string(),
            team: Team::Engineering,
            functionality: String::new(),
        }
    }

    fn single_phase(stories: Vec<Story>) -> Vec<Phase> {
        let declared = stories.iter().map(|s| u64::from(s.points)).sum();
        vec![Phase {
            id: "phase-0".to_string(),
            title: "Phase 0".to_string(),
            short_title: "Zero".to_string(),
            sprints: 1,
            story_points: declared,
            duration: "2 weeks".to_string(),
            status: StoryStatus::Pending,
            milestones: vec![],
            epics: vec![Epic {
                id: "epic-0-1".to_string(),
                title: "Epic".to_string(),
                stories,
            }],
        }]
    }

    #[test]
    fn test_progress_with_first_story_done() {
        let catalog = Catalog::new(single_phase(vec![
            story("A-1", 5, StoryStatus::Completed),
            story("A-2", 8, StoryStatus::Pending),
        ]))
        .unwrap();
        assert_eq!(catalog.total_points(), 13);
        assert_eq!(catalog.completed_points(), 5);
        assert_eq!(catalog.progress_percentage(), 38);
    }

    #[test]
    fn test_progress_with_second_story_done() {
        let catalog = Catalog::new(single_phase(vec![
            story("A-1", 5, StoryStatus::Pending),
            story("A-2", 8, StoryStatus::Completed),
        ]))
        .unwrap();
        assert_eq!(catalog.completed_points(), 8);
        assert_eq!(catalog.progress_percentage(), 62);
    }

    #[test]
    fn test_empty_catalog_has_zero_progress() {
        let catalog = Catalog::new(vec![]).unwrap();
        assert_eq!(catalog.total_points(), 0);
        assert_eq!(catalog.progress_percentage(), 0);
        assert!(catalog.all_stories().is_empty());
    }

    #[test]
    fn test_new_rejects_inconsistent_data() {
        let mut phases = single_phase(vec![story("A-1", 5, StoryStatus::Pending)]);
        phases[0].story_points = 9;
        let err = Catalog::new(phases.clone()).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(ref issues) if issues.len() == 1));

        let unchecked = Catalog { phases };
        assert_eq!(unchecked.declared_points(), 9);
        assert_eq!(unchecked.total_points(), 5);
    }

    #[test]
    fn test_large_points_do_not_wrap() {
        let catalog = Catalog::new(single_phase(vec![
            story("A-1", 3_000_000_000, StoryStatus::Completed),
            story("A-2", 3_000_000_000, StoryStatus::Pending),
        ]))
        .unwrap();
        assert_eq!(catalog.total_points(), 6_000_000_000);
        assert_eq!(catalog.completed_points(), 3_000_000_000);
        assert_eq!(catalog.declared_points(), 6_000_000_000);
        assert_eq!(catalog.progress_percentage(), 50);
    }

    #[test]
    fn test_unchecked_load_from_path_keeps_issues() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roadmap.json");
        let mut phases = single_phase(vec![story("A-1", 5, StoryStatus::Pending)]);
        phases[0].story_points = 9;
        std::fs::write(&path, serde_json::to_string(&Catalog { phases }).unwrap()).unwrap();

        assert!(matches!(
            Catalog::from_path(&path).unwrap_err(),
            CatalogError::Invalid(_)
        ));
        let unchecked = Catalog::from_path_unchecked(&path).unwrap();
        assert_eq!(validate(&unchecked).len(), 1);

        let missing = Catalog::from_path_unchecked(&dir.path().join("missing.json"));
        assert!(matches!(missing.unwrap_err(), CatalogError::Io { .. }));
    }

    #[test]
    fn test_story_refs_carry_placement() {
        let catalog = Catalog::new(single_phase(vec![story("A-1", 5, StoryStatus::Pending)]))
            .unwrap();
        let found = catalog.find_story("A-1").unwrap();
        assert_eq!(found.phase.id, "phase-0");
        assert_eq!(found.epic.id, "epic-0-1");
        assert!(catalog.find_story("A-9").is_none());
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.phases().len(), 5);
        assert_eq!(catalog.all_stories().len(), 83);
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = Catalog::from_json_str("{\"phases\": [{\"id\": 3}]}").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
