use std::collections::HashMap;

use common::config::Config;
use common::types::{Role, Wallet};

use crate::graph::ResolvedEdge;

/// Wallet enriched with full-graph degree statistics, an inferred
/// structural role, and the risk-derived base render size.
#[derive(Debug, Clone)]
pub struct EnrichedNode {
    pub id: String,
    pub hash: String,
    pub risk_score: u8,
    /// `risk_score / 100`, clamped into [0, 1].
    pub risk: f64,
    pub inflow: f64,
    pub outflow: f64,
    pub transaction_count: u32,
    pub role: Role,
    pub in_degree: u32,
    pub out_degree: u32,
    /// Base size, role multiplier already applied. Mode-dependent emphasis
    /// multiplies this again during style annotation.
    pub size: f64,
}

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Degrees are counted over the entire resolved edge list, not the visible
/// subset: a fan-out hub is a hub even when the view shows two of its edges.
pub fn classify_roles(
    wallets: &[Wallet],
    edges: &[ResolvedEdge],
    config: &Config,
) -> Vec<EnrichedNode> {
    let mut degrees: HashMap<&str, (u32, u32)> = HashMap::new();
    for edge in edges {
        degrees.entry(edge.source.as_str()).or_default().1 += 1;
        degrees.entry(edge.target.as_str()).or_default().0 += 1;
    }

    wallets
        .iter()
        .map(|w| {
            let (in_degree, out_degree) = degrees.get(w.id.as_str()).copied().unwrap_or((0, 0));
            let role = assign_role(in_degree, out_degree, config);
            let risk = clamp01(f64::from(w.risk_score) / 100.0);
            let size = (config.roles.base_size + risk * config.roles.risk_size_span)
                * role.size_multiplier();
            EnrichedNode {
                id: w.id.clone(),
                hash: w.hash.clone(),
                risk_score: w.risk_score,
                risk,
                inflow: w.inflow,
                outflow: w.outflow,
                transaction_count: w.transaction_count,
                role,
                in_degree,
                out_degree,
                size,
            }
        })
        .collect()
}

/// First matching rule wins; the order matters for wallets that satisfy
/// more than one rule (a 20-in/0-out wallet is a sink, never a mule).
fn assign_role(in_degree: u32, out_degree: u32, config: &Config) -> Role {
    let r = &config.roles;
    if in_degree >= r.sink_min_in_degree && out_degree == 0 {
        Role::Sink
    } else if out_degree >= r.source_min_out_degree && in_degree == 0 {
        Role::Source
    } else if in_degree >= r.mule_min_in_degree && out_degree >= r.mule_min_out_degree {
        Role::Mule
    } else {
        Role::Normal
    }
}
