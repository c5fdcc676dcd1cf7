//! CSV export of filtered stories.

use crate::query::StoryRef;

pub const HEADERS: [&str; 13] = [
    "Reference",
    "Item",
    "Feature",
    "Version",
    "Person",
    "Type",
    "Complexity",
    "Note",
    "Device",
    "Team",
    "Functionality",
    "Status",
    "Points",
];

/// Serialize stories as CSV, one row per story, rows joined with `\n`.
///
/// Note and functionality are always quoted; other fields only when they
/// contain a comma, a quote or a line break.
pub fn export_csv(stories: &[StoryRef<'_>]) -> String {
    let mut lines = Vec::with_capacity(stories.len() + 1);
    lines.push(HEADERS.join(","));

    for r in stories {
        let s = r.story;
        let row = [
            field(&s.id),
            field(&s.item),
            field(&s.feature),
            field(&s.sprint),
            field(s.responsible.as_str()),
            field(s.story_type.as_str()),
            field(s.complexity.label()),
            quoted(&s.note),
            field(&s.device),
            field(s.team.as_str()),
            quoted(&s.functionality),
            field(s.status.label()),
            s.points.to_string(),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

fn field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        quoted(value)
    } else {
        value.to_string()
    }
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
