use std::collections::HashSet;

use common::config::Config;
use common::types::{FocusPattern, PatternKind};
use serde::Serialize;

use crate::graph::ResolvedEdge;
use crate::roles::EnrichedNode;

/// Mutually exclusive view modes; every input combination maps to exactly
/// one. Precedence: resolvable pattern > resolvable selection > overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    Pattern,
    NodeFocus,
    Overview,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pattern => "pattern",
            Self::NodeFocus => "node-focus",
            Self::Overview => "overview",
        }
    }
}

/// Bounded set of wallets chosen for display.
#[derive(Debug, Clone)]
pub struct Selection {
    pub mode: ViewMode,
    /// Visible wallet ids in insertion order. Insertion order is the
    /// explicit truncation order for the global cap.
    pub visible: Vec<String>,
    /// Wallets rendered with full emphasis.
    pub core: HashSet<String>,
    /// Focal wallet: the resolved pattern anchor or the clicked wallet.
    /// `None` in overview mode.
    pub focus: Option<String>,
}

impl Selection {
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.iter().any(|v| v == id)
    }
}

/// Choose the visible subgraph for the current focus.
///
/// A pattern whose anchor hash matches no wallet cannot activate pattern
/// mode; precedence then falls through as if no pattern were supplied.
/// Likewise an unknown selected id falls through to the overview.
pub fn select_subgraph(
    nodes: &[EnrichedNode],
    edges: &[ResolvedEdge],
    pattern: Option<&FocusPattern>,
    selected_id: Option<&str>,
    config: &Config,
) -> Selection {
    if let Some(p) = pattern {
        if let Some(anchor) = nodes.iter().find(|n| n.hash == p.wallet_hash) {
            return select_pattern(anchor, p.kind, edges, config);
        }
        tracing::debug!(
            wallet_hash = %p.wallet_hash,
            kind = p.kind.as_str(),
            "pattern anchor not found among wallets; falling back"
        );
    }

    if let Some(selected) = selected_id {
        if nodes.iter().any(|n| n.id == selected) {
            return select_node_focus(selected, edges, config);
        }
        tracing::debug!(selected, "selected wallet not found; falling back to overview");
    }

    select_overview(nodes, edges, config)
}

/// Anchor plus the first distinct related wallets in edge-scan order.
/// Scan order is the tie-break — first-encountered wins, not largest
/// amount or earliest timestamp.
fn select_pattern(
    anchor: &EnrichedNode,
    kind: PatternKind,
    edges: &[ResolvedEdge],
    config: &Config,
) -> Selection {
    let anchor_id = anchor.id.as_str();
    let cap = config.selection.pattern_related_cap;

    // Fan-in explains where funds came from; fan-out and high-volume where
    // they went. Every other typology shows both sides of the anchor.
    let (want_predecessors, want_successors) = match kind {
        PatternKind::FanIn => (true, false),
        PatternKind::FanOut | PatternKind::HighVolume => (false, true),
        PatternKind::Circular
        | PatternKind::Layering
        | PatternKind::Structuring
        | PatternKind::PassThrough
        | PatternKind::PeelChain
        | PatternKind::Mixer => (true, true),
    };

    let mut related: Vec<&str> = Vec::new();
    for edge in edges {
        if related.len() >= cap {
            break;
        }
        if want_predecessors
            && edge.target == anchor_id
            && edge.source != anchor_id
            && !related.contains(&edge.source.as_str())
        {
            related.push(edge.source.as_str());
        }
        if related.len() >= cap {
            break;
        }
        if want_successors
            && edge.source == anchor_id
            && edge.target != anchor_id
            && !related.contains(&edge.target.as_str())
        {
            related.push(edge.target.as_str());
        }
    }

    let mut visible = Vec::with_capacity(1 + related.len());
    visible.push(anchor_id.to_string());
    visible.extend(related.into_iter().map(str::to_string));

    Selection {
        mode: ViewMode::Pattern,
        visible: cap_visible(visible, config),
        core: HashSet::from([anchor_id.to_string()]),
        focus: Some(anchor_id.to_string()),
    }
}

/// Selected wallet plus its first distinct neighbors in edge-scan order.
/// One shared counter covers both directions: the combined in+out neighbor
/// count is capped, not capped per direction.
fn select_node_focus(selected: &str, edges: &[ResolvedEdge], config: &Config) -> Selection {
    let cap = config.selection.focus_neighbor_cap;

    let mut neighbors: Vec<&str> = Vec::new();
    for edge in edges {
        if neighbors.len() >= cap {
            break;
        }
        if edge.source == selected
            && edge.target != selected
            && !neighbors.contains(&edge.target.as_str())
        {
            neighbors.push(edge.target.as_str());
        }
        if neighbors.len() >= cap {
            break;
        }
        if edge.target == selected
            && edge.source != selected
            && !neighbors.contains(&edge.source.as_str())
        {
            neighbors.push(edge.source.as_str());
        }
    }

    let mut visible = Vec::with_capacity(1 + neighbors.len());
    visible.push(selected.to_string());
    visible.extend(neighbors.into_iter().map(str::to_string));

    Selection {
        mode: ViewMode::NodeFocus,
        visible: cap_visible(visible, config),
        core: HashSet::from([selected.to_string()]),
        focus: Some(selected.to_string()),
    }
}

/// Nothing focused: show the highest-risk wallets and a little context
/// around each. Core = wallets at or above the high-risk threshold, by
/// descending raw risk score (stable sort, so input order breaks ties),
/// truncated to the core cap.
fn select_overview(nodes: &[EnrichedNode], edges: &[ResolvedEdge], config: &Config) -> Selection {
    let mut core_nodes: Vec<&EnrichedNode> = nodes
        .iter()
        .filter(|n| n.risk >= config.style.high_risk_threshold)
        .collect();
    core_nodes.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));
    core_nodes.truncate(config.selection.overview_core_cap);

    let mut visible: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for node in &core_nodes {
        if seen.insert(node.id.as_str()) {
            visible.push(node.id.clone());
        }
    }

    // Each core node collects its own neighbors independently; one shared
    // counter per core node covers senders and recipients together. The
    // union dedups across core nodes afterwards.
    for node in &core_nodes {
        let mut collected: Vec<&str> = Vec::new();
        for edge in edges {
            if collected.len() >= config.selection.overview_neighbor_cap {
                break;
            }
            let other = if edge.source == node.id {
                Some(edge.target.as_str())
            } else if edge.target == node.id {
                Some(edge.source.as_str())
            } else {
                None
            };
            let Some(other) = other else { continue };
            if other == node.id || collected.contains(&other) {
                continue;
            }
            collected.push(other);
            if seen.insert(other) {
                visible.push(other.to_string());
            }
        }
    }

    Selection {
        mode: ViewMode::Overview,
        visible: cap_visible(visible, config),
        core: core_nodes.iter().map(|n| n.id.clone()).collect(),
        focus: None,
    }
}

/// Global cap, applied in every mode. Truncation uses insertion order:
/// core/focal wallets first, then neighbors in the order they were
/// collected. Only the overview can actually hit the cap (4 core + 4x3
/// neighbors = 16 candidates).
fn cap_visible(mut visible: Vec<String>, config: &Config) -> Vec<String> {
    let cap = config.selection.max_visible_nodes;
    if visible.len() > cap {
        tracing::debug!(
            candidates = visible.len(),
            cap,
            "visible set exceeds global cap; truncating in insertion order"
        );
        visible.truncate(cap);
    }
    visible
}
