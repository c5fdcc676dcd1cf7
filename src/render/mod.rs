//! Text, JSON and CSV output for catalog queries.

mod csv;
mod table;
mod tree;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::Story;
use crate::query::StoryRef;

pub use csv::{export_csv, HEADERS as CSV_HEADERS};
pub use table::{filter_summary, render_table, stats_report, stories_table};
pub use tree::{render_nodes, render_tree, TreeNode};

/// How listings are written to stdout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// A story flattened with its placement, used for JSON output.
///
/// The story fields are flattened into the object alongside `phase`,
/// `phase_name` and `epic`.
#[derive(Debug, Clone, Serialize)]
pub struct StoryView<'a> {
    #[serde(flatten)]
    pub story: &'a Story,
    pub phase: &'a str,
    pub phase_name: &'a str,
    pub epic: &'a str,
}

impl<'a> From<&StoryRef<'a>> for StoryView<'a> {
    fn from(r: &StoryRef<'a>) -> Self {
        Self {
            story: r.story,
            phase: &r.phase.id,
            phase_name: &r.phase.short_title,
            epic: &r.epic.id,
        }
    }
}

pub fn stories_json(stories: &[StoryRef<'_>]) -> serde_json::Result<String> {
    let views: Vec<StoryView<'_>> = stories.iter().map(StoryView::from).collect();
    serde_json::to_string_pretty(&views)
}
