//! ASCII tree rendering for the phase hierarchy.

use crate::models::{Phase, StoryStatus};

const PENDING: char = '◇';
const IN_PROGRESS: char = '○';
const COMPLETED: char = '●';

/// Get the status symbol for a story status.
fn status_symbol(status: StoryStatus) -> char {
    match status {
        StoryStatus::Pending => PENDING,
        StoryStatus::InProgress => IN_PROGRESS,
        StoryStatus::Completed => COMPLETED,
    }
}

/// A labelled node; only story leaves carry a status symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub label: String,
    pub status: Option<StoryStatus>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Phase → epics → stories. Phases carry their point total; epics add
    /// completed stories and progress.
    pub fn from_phase(phase: &Phase) -> Self {
        let epics = phase
            .epics
            .iter()
            .map(|epic| TreeNode {
                label: format!(
                    "{} ({} pts, {}/{} done, {}%)",
                    epic.title,
                    epic.points(),
                    epic.completed_count(),
                    epic.stories.len(),
                    epic.progress()
                ),
                status: None,
                children: epic
                    .stories
                    .iter()
                    .map(|story| TreeNode {
                        label: format!(
                            "{} {} [{}, {} pts]",
                            story.id, story.item, story.sprint, story.points
                        ),
                        status: Some(story.status),
                        children: vec![],
                    })
                    .collect(),
            })
            .collect();

        TreeNode {
            label: format!("{} ({} pts)", phase.title, phase.actual_points()),
            status: None,
            children: epics,
        }
    }
}

/// Render phases as ASCII art with status symbols.
///
/// Example output:
/// ```text
/// Fase 0: Fundacao (8 pts)
/// └── Setup AI Engine (8 pts, 1/2 done, 50%)
///     ├── ◇ F0-004 FastAPI AI Engine Base [S1, 5 pts]
///     └── ● F0-009 Logging Estruturado [S1, 3 pts]
/// ```
pub fn render_tree(phases: &[Phase]) -> String {
    let nodes: Vec<TreeNode> = phases.iter().map(TreeNode::from_phase).collect();
    render_nodes(&nodes)
}

pub fn render_nodes(nodes: &[TreeNode]) -> String {
    let mut output = String::new();
    for node in nodes {
        render_node(&mut output, node, "", false, true);
    }
    output
}

/// Recursively render a node and its children.
fn render_node(output: &mut String, node: &TreeNode, prefix: &str, is_last: bool, is_root: bool) {
    if is_root {
        output.push_str(&node.label);
        output.push('\n');
    } else {
        let branch = if is_last { "└── " } else { "├── " };
        output.push_str(prefix);
        output.push_str(branch);
        if let Some(status) = node.status {
            output.push(status_symbol(status));
            output.push(' ');
        }
        output.push_str(&node.label);
        output.push('\n');
    }

    let child_prefix = if is_root {
        String::new()
    } else {
        let continuation = if is_last { "    " } else { "│   " };
        format!("{}{}", prefix, continuation)
    };

    for (i, child) in node.children.iter().enumerate() {
        let child_is_last = i == node.children.len() - 1;
        render_node(output, child, &child_prefix, child_is_last, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(label: &str, status: StoryStatus) -> TreeNode {
        TreeNode {
            label: label.to_string(),
            status: Some(status),
            children: vec![],
        }
    }

    fn group(label: &str, children: Vec<TreeNode>) -> TreeNode {
        TreeNode {
            label: label.to_string(),
            status: None,
            children,
        }
    }

    #[test]
    fn test_single_root() {
        let output = render_nodes(&[group("Fase 0", vec![])]);
        assert_eq!(output, "Fase 0\n");
    }

    #[test]
    fn test_nested_children() {
        let tree = vec![group(
            "Fase 1",
            vec![
                group(
                    "Chat",
                    vec![
                        leaf("Endpoint", StoryStatus::Completed),
                        leaf("Streaming", StoryStatus::InProgress),
                    ],
                ),
                group("Citations", vec![leaf("Processor", StoryStatus::Pending)]),
            ],
        )];
        let output = render_nodes(&tree);
        let expected = "Fase 1\n├── Chat\n│   ├── ● Endpoint\n│   └── ○ Streaming\n└── Citations\n    └── ◇ Processor\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_multiple_roots_each_start_a_block() {
        let output = render_nodes(&[group("A", vec![]), group("B", vec![])]);
        assert_eq!(output, "A\nB\n");
    }

    #[test]
    fn test_from_phase_labels() {
        let catalog = crate::catalog::Catalog::bundled().unwrap();
        let phase = catalog.phase("phase-0").unwrap();
        let node = TreeNode::from_phase(phase);
        assert_eq!(node.label, "Fase 0: Fundacao (28 pts)");
        assert_eq!(node.children[0].label, "Setup AI Engine (28 pts, 0/6 done, 0%)");
        assert_eq!(
            node.children[0].children[0].label,
            "F0-004 FastAPI AI Engine Base [S1, 5 pts]"
        );
        assert_eq!(node.children[0].children[0].status, Some(StoryStatus::Pending));
    }

    #[test]
    fn test_epic_lines_show_progress() {
        let json = r#"{
            "id": "phase-9", "title": "Fase 9", "short_title": "Nine", "sprints": 1,
            "story_points": 8, "duration": "2 semanas", "status": "in_progress",
            "epics": [
                { "id": "epic-9-1", "title": "Setup", "stories": [
                    { "id": "F9-001", "item": "Base", "feature": "Core", "points": 5,
                      "responsible": "Backend Go", "sprint": "S1", "status": "pending",
                      "type": "Core", "complexity": "medium", "note": "", "device": "API",
                      "team": "Engineering", "functionality": "" },
                    { "id": "F9-002", "item": "Logs", "feature": "Core", "points": 3,
                      "responsible": "Backend Go", "sprint": "S1", "status": "completed",
                      "type": "Core", "complexity": "simple", "note": "", "device": "API",
                      "team": "Engineering", "functionality": "" }
                ] },
                { "id": "epic-9-2", "title": "Later", "stories": [] }
            ]
        }"#;
        let phase: Phase = serde_json::from_str(json).unwrap();
        let output = render_tree(std::slice::from_ref(&phase));
        let expected = "Fase 9 (8 pts)\n\
                        ├── Setup (8 pts, 1/2 done, 50%)\n\
                        │   ├── ◇ F9-001 Base [S1, 5 pts]\n\
                        │   └── ● F9-002 Logs [S1, 3 pts]\n\
                        └── Later (0 pts, 0/0 done, 0%)\n";
        assert_eq!(output, expected);
    }
}
