//! Plain-text tables for terminal output.

use crate::query::{CatalogStats, FilterStats, StoryRef};

/// Left-aligned columns separated by two spaces, with a dashed rule under the header.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut output = String::new();
    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_row(&mut output, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut output, &rule, &widths);
    for row in rows {
        push_row(&mut output, row, &widths);
    }
    output
}

fn push_row(output: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    output.push_str(line.trim_end());
    output.push('\n');
}

pub fn stories_table(stories: &[StoryRef<'_>]) -> String {
    let rows: Vec<Vec<String>> = stories
        .iter()
        .map(|r| {
            let s = r.story;
            vec![
                s.id.clone(),
                s.item.clone(),
                r.phase.short_title.clone(),
                s.sprint.clone(),
                s.responsible.as_str().to_string(),
                s.story_type.as_str().to_string(),
                s.complexity.label().to_string(),
                s.team.as_str().to_string(),
                s.status.label().to_string(),
                s.points.to_string(),
            ]
        })
        .collect();

    render_table(
        &[
            "ID", "Item", "Phase", "Sprint", "Responsible", "Type", "Complexity", "Team", "Status",
            "Points",
        ],
        &rows,
    )
}

/// One-line summary printed under a filtered listing.
pub fn filter_summary(stats: &FilterStats, of_total: usize) -> String {
    let tiers = stats
        .by_complexity
        .iter()
        .map(|(tier, n)| format!("{} {}", tier.label(), n))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Showing {} of {} stories, {} pts ({})",
        stats.total, of_total, stats.total_points, tiers
    )
}

pub fn stats_report(stats: &CatalogStats) -> String {
    let mut output = format!(
        "{} stories, {} pts, {} pts completed ({}%)\n\n",
        stats.stories, stats.total_points, stats.completed_points, stats.progress
    );

    let phases: Vec<Vec<String>> = stats
        .phases
        .iter()
        .map(|p| {
            vec![
                p.id.clone(),
                p.title.clone(),
                p.duration.clone(),
                p.stories.to_string(),
                p.declared_points.to_string(),
                p.actual_points.to_string(),
                format!("{}%", p.progress),
            ]
        })
        .collect();
    output.push_str(&render_table(
        &["Phase", "Title", "Duration", "Stories", "Declared", "Actual", "Progress"],
        &phases,
    ));
    output.push('\n');

    let sprints: Vec<Vec<String>> = stats
        .sprints
        .iter()
        .map(|s| {
            vec![
                s.sprint.to_string(),
                s.stories.to_string(),
                s.points.to_string(),
                format!("{}/{}", s.completed, s.stories),
                format!("{}%", s.progress),
            ]
        })
        .collect();
    output.push_str(&render_table(
        &["Sprint", "Stories", "Points", "Done", "Progress"],
        &sprints,
    ));
    output.push('\n');

    let responsibles: Vec<Vec<String>> = stats
        .responsibles
        .iter()
        .map(|r| {
            vec![
                r.responsible.as_str().to_string(),
                r.stories.to_string(),
                r.points.to_string(),
                format!("{}%", r.share),
            ]
        })
        .collect();
    output.push_str(&render_table(
        &["Responsible", "Stories", "Points", "Share"],
        &responsibles,
    ));

    output
}
