//! Document-tree reconstruction.
//!
//! Documents are stored flat as `(id, name, parent_id)` rows where
//! `parent_id == 0` marks a root. Two consumers share the same input: a
//! generic tree widget that wants parent-pointer records, and the rendered
//! navigation sidebar that wants nested lists with the selected node and
//! its top-level ancestor marked. Display text is emitted verbatim;
//! escaping is the presentation layer's job.

use std::collections::HashSet;
use std::fmt::Write as _;

use serde::Serialize;

use crate::types::DbId;

/// Sentinel parent id marking a root-level document.
pub const ROOT_PARENT_ID: DbId = 0;

/// One flat document node, ordered by the caller (usually by sort order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocNode {
    pub id: DbId,
    pub name: String,
    pub parent_id: DbId,
}

/// A parent-pointer re-encoding of a [`DocNode`] for a generic tree widget.
///
/// Roots get the widget's `"#"` parent sentinel; everything else carries its
/// parent id as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEntry {
    pub id: String,
    pub text: String,
    pub parent: String,
}

/// Re-encode every node as a [`TreeEntry`], preserving input order.
pub fn to_tree_entries(nodes: &[DocNode]) -> Vec<TreeEntry> {
    nodes
        .iter()
        .map(|node| TreeEntry {
            id: node.id.to_string(),
            text: node.name.clone(),
            parent: if node.parent_id == ROOT_PARENT_ID {
                "#".to_string()
            } else {
                node.parent_id.to_string()
            },
        })
        .collect()
}

/// Walk `parent_id` links upward from `candidate_id` to its root-level
/// ancestor, returning that ancestor's id.
///
/// Returns 0 when the candidate does not resolve to any node or a link in
/// the chain dangles. A visited set keeps malformed (self-referential or
/// cyclic) chains terminating instead of looping.
pub fn resolve_open_ancestor(nodes: &[DocNode], candidate_id: DbId) -> DbId {
    let mut current = candidate_id;
    let mut visited = HashSet::new();

    loop {
        if !visited.insert(current) {
            return 0;
        }
        match nodes.iter().find(|n| n.id == current) {
            None => return 0,
            Some(node) if node.parent_id == ROOT_PARENT_ID => return node.id,
            Some(node) => current = node.parent_id,
        }
    }
}

/// Render the nested navigation list for a project's documents.
///
/// Nodes are grouped by `parent_id` starting from the roots; a node with
/// children recurses before closing its own entry. The node matching
/// `selected_id` is marked `jstree-clicked` and its top-level ancestor
/// `jstree-open` so the navigation path stays expanded. `href` maps a
/// document id to its canonical view path.
pub fn render_nav_tree<F>(nodes: &[DocNode], selected_id: DbId, href: F) -> String
where
    F: Fn(DbId) -> String,
{
    if nodes.is_empty() {
        return String::new();
    }
    let open_id = resolve_open_ancestor(nodes, selected_id);
    let mut out = String::new();
    render_level(&mut out, nodes, ROOT_PARENT_ID, selected_id, open_id, &href);
    out
}

fn render_level<F>(
    out: &mut String,
    nodes: &[DocNode],
    parent_id: DbId,
    selected_id: DbId,
    open_id: DbId,
    href: &F,
) where
    F: Fn(DbId) -> String,
{
    out.push_str("<ul>");
    for node in nodes.iter().filter(|n| n.parent_id == parent_id) {
        let open_class = if node.id == open_id {
            " class=\"jstree-open\""
        } else {
            ""
        };
        let selected_class = if node.id == selected_id {
            " class=\"jstree-clicked\""
        } else {
            ""
        };
        // Writing to a String is infallible.
        let _ = write!(
            out,
            "<li id=\"{}\"{}><a href=\"{}\" title=\"{}\"{}>{}</a>",
            node.id,
            open_class,
            href(node.id),
            node.name,
            selected_class,
            node.name,
        );
        if nodes.iter().any(|n| n.parent_id == node.id) {
            render_level(out, nodes, node.id, selected_id, open_id, href);
        }
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}
