use common::config::Config;
use common::types::FocusPattern;
use serde::Serialize;

use crate::graph::ResolvedEdge;
use crate::selection::{Selection, ViewMode};

/// Renderable edge between two visible wallets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewLink {
    pub source: String,
    pub target: String,
    pub amount: f64,
    pub width: f64,
    /// Set when the active pattern's evidence list contains this edge;
    /// the renderer highlights it.
    pub is_pattern_edge: bool,
}

/// Reduce the full edge list to edges between visible wallets, with
/// mode-specific restrictions on top:
/// - pattern mode shows only edges touching the anchor (no multi-hop
///   edges, even between visible wallets);
/// - node-focus mode shows only edges touching the selected wallet,
///   capped at the first 10 in scan order;
/// - the overview keeps every edge between visible wallets.
pub fn filter_links(
    edges: &[ResolvedEdge],
    selection: &Selection,
    pattern: Option<&FocusPattern>,
    config: &Config,
) -> Vec<ViewLink> {
    let mut links = Vec::new();

    for edge in edges {
        if !selection.is_visible(&edge.source) || !selection.is_visible(&edge.target) {
            continue;
        }

        let is_pattern_edge = match selection.mode {
            ViewMode::Pattern => {
                let Some(anchor) = selection.focus.as_deref() else {
                    continue;
                };
                if edge.source != anchor && edge.target != anchor {
                    continue;
                }
                pattern.is_some_and(|p| matches_evidence(edge, p))
            }
            ViewMode::NodeFocus => {
                let Some(selected) = selection.focus.as_deref() else {
                    continue;
                };
                if edge.source != selected && edge.target != selected {
                    continue;
                }
                false
            }
            ViewMode::Overview => false,
        };

        links.push(ViewLink {
            source: edge.source.clone(),
            target: edge.target.clone(),
            amount: edge.amount,
            width: config.links.link_width,
            is_pattern_edge,
        });
    }

    if selection.mode == ViewMode::NodeFocus {
        links.truncate(config.links.focus_link_cap);
    }
    links
}

/// Evidence match: same endpoint hash pair, or same transaction id/hash.
fn matches_evidence(edge: &ResolvedEdge, pattern: &FocusPattern) -> bool {
    pattern.transactions.iter().any(|ev| {
        (ev.from == edge.from_hash && ev.to == edge.to_hash) || ev.hash == edge.tx_id
    })
}
