//! Story filtering and ordering over a [`Catalog`](crate::catalog::Catalog).
//!
//! [`StoryFilter`] is a set of optional equality constraints combined with
//! logical AND. Unset constraints impose nothing. Raw filter values that do
//! not name a known status, tier, team, etc. are kept as *unmatched* and make
//! the filter match nothing, so a stale selection yields an empty result
//! instead of an error.

mod stats;

use clap::ValueEnum;

use crate::models::*;

pub use stats::*;

/// A story together with the phase and epic it is nested under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryRef<'a> {
    pub phase: &'a Phase,
    pub epic: &'a Epic,
    pub story: &'a Story,
}

/// Optional constraints over stories. `Default` is the empty filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryFilter {
    /// Case-insensitive substring over item, id, feature, note and functionality.
    pub search: Option<String>,
    pub phase: Option<String>,
    pub sprint: Option<String>,
    pub responsible: Option<Responsible>,
    pub status: Option<StoryStatus>,
    pub story_type: Option<StoryType>,
    pub complexity: Option<Complexity>,
    pub team: Option<Team>,
    unmatched: Vec<String>,
}

/// Raw, string-valued filter selections as they arrive from a user.
///
/// Empty strings and `all` mean "no constraint".
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub search: Option<String>,
    pub phase: Option<String>,
    pub sprint: Option<String>,
    pub responsible: Option<String>,
    pub status: Option<String>,
    pub story_type: Option<String>,
    pub complexity: Option<String>,
    pub team: Option<String>,
}

impl StoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn phase(mut self, id: impl Into<String>) -> Self {
        self.phase = Some(id.into());
        self
    }

    pub fn sprint(mut self, label: impl Into<String>) -> Self {
        self.sprint = Some(label.into());
        self
    }

    pub fn responsible(mut self, responsible: Responsible) -> Self {
        self.responsible = Some(responsible);
        self
    }

    pub fn status(mut self, status: StoryStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn story_type(mut self, story_type: StoryType) -> Self {
        self.story_type = Some(story_type);
        self
    }

    pub fn complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = Some(complexity);
        self
    }

    pub fn team(mut self, team: Team) -> Self {
        self.team = Some(team);
        self
    }

    /// Raw values that did not parse. A non-empty list makes the filter match nothing.
    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    /// Whether any constraint is set.
    pub fn is_active(&self) -> bool {
        self.search.as_deref().is_some_and(|s| !s.is_empty())
            || self.phase.is_some()
            || self.sprint.is_some()
            || self.responsible.is_some()
            || self.status.is_some()
            || self.story_type.is_some()
            || self.complexity.is_some()
            || self.team.is_some()
            || !self.unmatched.is_empty()
    }

    pub fn matches(&self, r: &StoryRef<'_>) -> bool {
        if !self.unmatched.is_empty() {
            return false;
        }
        let story = r.story;

        if let Some(query) = self.search.as_deref().filter(|q| !q.is_empty()) {
            let query = query.to_lowercase();
            let hit = story
                .searchable_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&query));
            if !hit {
                return false;
            }
        }

        self.phase.as_deref().map_or(true, |p| r.phase.id == p)
            && self.sprint.as_deref().map_or(true, |s| story.sprint == s)
            && self.responsible.map_or(true, |v| story.responsible == v)
            && self.status.map_or(true, |v| story.status == v)
            && self.story_type.map_or(true, |v| story.story_type == v)
            && self.complexity.map_or(true, |v| story.complexity == v)
            && self.team.map_or(true, |v| story.team == v)
    }
}

impl FilterParams {
    /// Convert raw selections into a typed filter.
    ///
    /// Enum-valued selections that name no known variant are recorded as
    /// unmatched. Phase ids and sprint labels are free strings and simply
    /// match nothing when unknown.
    pub fn into_filter(self) -> StoryFilter {
        let mut filter = StoryFilter {
            search: self.search.filter(|s| !s.is_empty()),
            phase: selected(self.phase),
            sprint: selected(self.sprint),
            ..StoryFilter::default()
        };

        filter.responsible = parse_selection(
            self.responsible,
            Responsible::from_str,
            &mut filter.unmatched,
        );
        filter.status = parse_selection(self.status, StoryStatus::from_str, &mut filter.unmatched);
        filter.story_type =
            parse_selection(self.story_type, StoryType::from_str, &mut filter.unmatched);
        filter.complexity =
            parse_selection(self.complexity, Complexity::from_str, &mut filter.unmatched);
        filter.team = parse_selection(self.team, Team::from_str, &mut filter.unmatched);

        if !filter.unmatched.is_empty() {
            tracing::debug!(
                "Unrecognized filter values {:?}; filter matches nothing",
                filter.unmatched
            );
        }
        filter
    }
}

fn selected(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != "all")
}

fn parse_selection<T>(
    value: Option<String>,
    parse: fn(&str) -> Option<T>,
    unmatched: &mut Vec<String>,
) -> Option<T> {
    let value = selected(value)?;
    let parsed = parse(&value);
    if parsed.is_none() {
        unmatched.push(value);
    }
    parsed
}

/// Ordering applied to filtered stories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    /// Catalog definition order.
    #[default]
    Definition,
    Id,
    /// Largest first.
    Points,
    /// Schedule order of the sprint label.
    Sprint,
    /// Easiest first.
    Complexity,
}

/// Stable sort; ties keep definition order.
pub fn sort_stories(stories: &mut [StoryRef<'_>], key: SortKey) {
    match key {
        SortKey::Definition => {}
        SortKey::Id => stories.sort_by(|a, b| a.story.id.cmp(&b.story.id)),
        SortKey::Points => stories.sort_by(|a, b| b.story.points.cmp(&a.story.points)),
        SortKey::Sprint => stories.sort_by_key(|r| sprint_index(&r.story.sprint)),
        SortKey::Complexity => stories.sort_by_key(|r| r.story.complexity),
    }
}
