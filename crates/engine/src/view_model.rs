use common::config::Config;
use common::types::{FocusPattern, Role, Transaction, Wallet};
use serde::Serialize;

use crate::graph;
use crate::links::{self, ViewLink};
use crate::roles;
use crate::selection::{self, ViewMode};
use crate::style::{self, ViewNode};

/// Payload the host forwards where the old UI used a selection callback.
/// Present exactly when the engine lands in node-focus mode; absent on
/// clear, on pattern entry, and in the overview.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    pub id: String,
    pub hash: String,
    pub risk_score: u8,
    pub transaction_count: u32,
    pub inflow: f64,
    pub outflow: f64,
    pub role: Role,
}

/// Bounded, annotated node/link structure handed to the rendering layer.
#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    pub mode: ViewMode,
    pub nodes: Vec<ViewNode>,
    pub links: Vec<ViewLink>,
    pub selection: Option<SelectionSummary>,
}

/// Recompute the full view-model from scratch.
///
/// Pure and idempotent: identical inputs produce an identical view-model,
/// and nothing is retained across calls. Callers invoke this whenever any
/// input changes; stale in-flight results are theirs to discard.
pub fn compute_view_model(
    wallets: &[Wallet],
    transactions: &[Transaction],
    pattern: Option<&FocusPattern>,
    selected_id: Option<&str>,
    config: &Config,
) -> ViewModel {
    let edges = graph::resolve_edges(wallets, transactions);
    let enriched = roles::classify_roles(wallets, &edges, config);
    let selection = selection::select_subgraph(&enriched, &edges, pattern, selected_id, config);
    let links = links::filter_links(&edges, &selection, pattern, config);
    let nodes = style::annotate_nodes(&enriched, &selection, config);

    let summary = match selection.mode {
        ViewMode::NodeFocus => selection
            .focus
            .as_deref()
            .and_then(|id| enriched.iter().find(|n| n.id == id))
            .map(|n| SelectionSummary {
                id: n.id.clone(),
                hash: n.hash.clone(),
                risk_score: n.risk_score,
                transaction_count: n.transaction_count,
                inflow: n.inflow,
                outflow: n.outflow,
                role: n.role,
            }),
        ViewMode::Pattern | ViewMode::Overview => None,
    };

    tracing::debug!(
        mode = selection.mode.as_str(),
        nodes = nodes.len(),
        links = links.len(),
        "view model recomputed"
    );

    ViewModel {
        mode: selection.mode,
        nodes,
        links,
        selection: summary,
    }
}
