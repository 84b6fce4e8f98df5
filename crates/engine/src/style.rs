use std::collections::HashMap;

use common::config::Config;
use common::types::{NodeColor, Role};
use serde::Serialize;

use crate::roles::EnrichedNode;
use crate::selection::{Selection, ViewMode};

// Mode-dependent emphasis. These are presentation constants, not tunable
// heuristics, so they live here rather than in the config file.
const PATTERN_ANCHOR_SIZE_MULT: f64 = 1.6;
const PATTERN_CONTEXT_SIZE_MULT: f64 = 0.75;
const PATTERN_CONTEXT_OPACITY: f64 = 0.45;
const FOCUS_SELECTED_SIZE_MULT: f64 = 1.4;
const FOCUS_NEIGHBOR_SIZE_MULT: f64 = 0.8;
const FOCUS_NEIGHBOR_OPACITY: f64 = 0.6;
const OVERVIEW_NEIGHBOR_OPACITY: f64 = 0.4;
const FULL_OPACITY: f64 = 1.0;

/// Fully annotated node handed to the renderer: enriched wallet data plus
/// the final size/opacity/color for the active mode.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewNode {
    pub id: String,
    pub hash: String,
    pub risk_score: u8,
    pub risk: f64,
    pub inflow: f64,
    pub outflow: f64,
    pub transaction_count: u32,
    pub role: Role,
    pub in_degree: u32,
    pub out_degree: u32,
    pub size: f64,
    pub opacity: f64,
    pub color: NodeColor,
    pub is_core: bool,
}

/// Assign per-node emphasis for the visible set, in visible order.
///
/// Pattern mode grays out everything but the anchor; node-focus mode
/// grays out neighbors unless they are high-risk in their own right; the
/// overview keeps risk colors everywhere and only dims non-core nodes.
pub fn annotate_nodes(
    nodes: &[EnrichedNode],
    selection: &Selection,
    config: &Config,
) -> Vec<ViewNode> {
    let by_id: HashMap<&str, &EnrichedNode> =
        nodes.iter().map(|n| (n.id.as_str(), n)).collect();

    selection
        .visible
        .iter()
        .filter_map(|id| by_id.get(id.as_str()).copied())
        .map(|node| {
            let is_core = selection.core.contains(node.id.as_str());
            let tier = NodeColor::risk_tier(
                node.risk,
                config.style.high_risk_threshold,
                config.style.medium_risk_threshold,
            );

            let (size, opacity, color) = match selection.mode {
                ViewMode::Pattern => {
                    if is_core {
                        (node.size * PATTERN_ANCHOR_SIZE_MULT, FULL_OPACITY, tier)
                    } else {
                        (
                            node.size * PATTERN_CONTEXT_SIZE_MULT,
                            PATTERN_CONTEXT_OPACITY,
                            NodeColor::Neutral,
                        )
                    }
                }
                ViewMode::NodeFocus => {
                    if is_core {
                        (node.size * FOCUS_SELECTED_SIZE_MULT, FULL_OPACITY, tier)
                    } else {
                        // High-risk neighbors keep their risk color even
                        // while de-emphasized.
                        let color = if node.risk >= config.style.high_risk_threshold {
                            tier
                        } else {
                            NodeColor::Neutral
                        };
                        (node.size * FOCUS_NEIGHBOR_SIZE_MULT, FOCUS_NEIGHBOR_OPACITY, color)
                    }
                }
                ViewMode::Overview => {
                    let opacity = if is_core {
                        FULL_OPACITY
                    } else {
                        OVERVIEW_NEIGHBOR_OPACITY
                    };
                    (node.size, opacity, tier)
                }
            };

            ViewNode {
                id: node.id.clone(),
                hash: node.hash.clone(),
                risk_score: node.risk_score,
                risk: node.risk,
                inflow: node.inflow,
                outflow: node.outflow,
                transaction_count: node.transaction_count,
                role: node.role,
                in_degree: node.in_degree,
                out_degree: node.out_degree,
                size,
                opacity,
                color,
                is_core,
            }
        })
        .collect()
}
