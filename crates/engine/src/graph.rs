use std::collections::HashMap;

use common::types::{Transaction, Wallet};

/// Transaction with both endpoint hashes resolved to wallet ids.
///
/// Built once per recomputation and consumed by every downstream stage; the
/// list's order is the documented tie-break order for all neighbor and
/// related-wallet selection.
#[derive(Debug, Clone)]
pub struct ResolvedEdge {
    pub source: String,
    pub target: String,
    pub amount: f64,
    pub tx_id: String,
    /// Original endpoint hashes, kept for pattern-evidence matching.
    pub from_hash: String,
    pub to_hash: String,
}

/// Resolve transactions against the wallet list, order-preserving.
///
/// An edge whose `from_wallet` or `to_wallet` hash is unknown is dropped
/// silently: a wallet referenced by a transaction but missing from the
/// wallet list is absent evidence, never an error. Dropped edges contribute
/// to no wallet's degree and appear in no output.
pub fn resolve_edges(wallets: &[Wallet], transactions: &[Transaction]) -> Vec<ResolvedEdge> {
    let id_by_hash: HashMap<&str, &str> = wallets
        .iter()
        .map(|w| (w.hash.as_str(), w.id.as_str()))
        .collect();

    let mut edges = Vec::with_capacity(transactions.len());
    let mut dropped = 0usize;
    for tx in transactions {
        match (
            id_by_hash.get(tx.from_wallet.as_str()),
            id_by_hash.get(tx.to_wallet.as_str()),
        ) {
            (Some(source), Some(target)) => edges.push(ResolvedEdge {
                source: (*source).to_string(),
                target: (*target).to_string(),
                amount: tx.amount,
                tx_id: tx.id.clone(),
                from_hash: tx.from_wallet.clone(),
                to_hash: tx.to_wallet.clone(),
            }),
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, "dropped transactions with unresolved endpoints");
    }
    edges
}
