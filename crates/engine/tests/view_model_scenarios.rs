use common::config::Config;
use common::types::{EvidenceTx, FocusPattern, PatternKind, Transaction, Wallet};
use engine::{compute_view_model, ViewMode};

// End-to-end scenarios against the public API, one per documented
// behavior of the pipeline.

fn wallet(id: &str, risk: u8) -> Wallet {
    Wallet {
        id: id.to_string(),
        hash: format!("0x{id}"),
        risk_score: risk,
        inflow: 1000.0,
        outflow: 500.0,
        transaction_count: 10,
    }
}

fn tx(id: &str, from: &str, to: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        from_wallet: format!("0x{from}"),
        to_wallet: format!("0x{to}"),
        amount: 25.0,
        timestamp: None,
    }
}

fn fan_in_pattern(anchor: &str, evidence: Vec<EvidenceTx>) -> FocusPattern {
    FocusPattern {
        kind: PatternKind::FanIn,
        wallet_hash: format!("0x{anchor}"),
        wallets: Vec::new(),
        transactions: evidence,
        start_time: None,
        end_time: None,
    }
}

#[test]
fn overview_shows_high_risk_wallets_without_edges() {
    // Wallets A(90), B(10), C(85), D(5), no edges, nothing focused:
    // visible = {A, C}, both core, no links.
    let wallets = vec![
        wallet("a", 90),
        wallet("b", 10),
        wallet("c", 85),
        wallet("d", 5),
    ];
    let vm = compute_view_model(&wallets, &[], None, None, &Config::default());

    assert_eq!(vm.mode, ViewMode::Overview);
    let ids: Vec<&str> = vm.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
    assert!(vm.nodes.iter().all(|n| n.is_core));
    assert!(vm.links.is_empty());
}

#[test]
fn overview_caps_neighbors_at_three_per_core() {
    // A(95) sends to B, C, D, E: exactly the first 3 scanned neighbors
    // are visible, never 4.
    let wallets = vec![
        wallet("a", 95),
        wallet("b", 5),
        wallet("c", 5),
        wallet("d", 5),
        wallet("e", 5),
    ];
    let txs = vec![
        tx("t1", "a", "b"),
        tx("t2", "a", "c"),
        tx("t3", "a", "d"),
        tx("t4", "a", "e"),
    ];
    let vm = compute_view_model(&wallets, &txs, None, None, &Config::default());

    let ids: Vec<&str> = vm.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d"]);
    assert_eq!(vm.nodes.iter().filter(|n| n.is_core).count(), 1);
}

#[test]
fn fan_in_pattern_shows_anchor_plus_first_six_predecessors() {
    // 7 predecessors of X: the 7th in scan order is excluded; links are
    // only the 6 kept *->X edges, flagged when present in the evidence.
    let mut wallets = vec![wallet("x", 50)];
    let mut txs = Vec::new();
    for (i, sender) in ["y", "z", "w", "v", "u", "t", "s"].iter().enumerate() {
        wallets.push(wallet(sender, 10));
        txs.push(tx(&format!("t{i}"), sender, "x"));
    }
    let evidence = vec![EvidenceTx {
        hash: "t0".to_string(),
        from: "0xy".to_string(),
        to: "0xx".to_string(),
        amount: 25.0,
        timestamp: None,
    }];
    let pattern = fan_in_pattern("x", evidence);

    let vm = compute_view_model(&wallets, &txs, Some(&pattern), None, &Config::default());

    assert_eq!(vm.mode, ViewMode::Pattern);
    assert_eq!(vm.nodes.len(), 7);
    assert!(!vm.nodes.iter().any(|n| n.id == "s"));
    assert_eq!(vm.links.len(), 6);
    assert!(vm.links.iter().all(|l| l.target == "x"));
    assert_eq!(vm.links.iter().filter(|l| l.is_pattern_edge).count(), 1);
    assert!(vm.links[0].is_pattern_edge, "y->x is in the evidence list");
}

#[test]
fn node_focus_caps_neighbors_at_seven() {
    // N has 10 outgoing edges: N plus the first 7 targets in scan order;
    // the resulting direct links are well under the 10-cap.
    let mut wallets = vec![wallet("n", 50)];
    let mut txs = Vec::new();
    for i in 0..10 {
        let other = format!("w{i}");
        wallets.push(wallet(&other, 5));
        txs.push(tx(&format!("t{i}"), "n", &other));
    }
    let vm = compute_view_model(&wallets, &txs, None, Some("n"), &Config::default());

    assert_eq!(vm.mode, ViewMode::NodeFocus);
    assert_eq!(vm.nodes.len(), 8);
    let ids: Vec<&str> = vm.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["n", "w0", "w1", "w2", "w3", "w4", "w5", "w6"]);
    assert_eq!(vm.links.len(), 7);

    let summary = vm.selection.expect("node-focus carries the summary");
    assert_eq!(summary.id, "n");
}

#[test]
fn unresolvable_transaction_endpoints_never_surface() {
    // An edge referencing an unknown hash contributes to no degree and
    // appears in no link list.
    let wallets = vec![wallet("a", 95), wallet("b", 5)];
    let txs = vec![tx("t1", "a", "b"), tx("t2", "a", "ghost"), tx("t3", "ghost", "b")];
    let vm = compute_view_model(&wallets, &txs, None, None, &Config::default());

    assert_eq!(vm.links.len(), 1);
    let a = vm.nodes.iter().find(|n| n.id == "a").unwrap();
    assert_eq!(a.out_degree, 1);
    let b = vm.nodes.iter().find(|n| n.id == "b").unwrap();
    assert_eq!(b.in_degree, 1);
}

#[test]
fn pattern_mode_wins_over_selection() {
    let wallets = vec![wallet("x", 50), wallet("a", 10), wallet("b", 10)];
    let txs = vec![tx("t1", "a", "x"), tx("t2", "a", "b")];
    let pattern = fan_in_pattern("x", Vec::new());

    let with_selection =
        compute_view_model(&wallets, &txs, Some(&pattern), Some("b"), &Config::default());
    let without_selection =
        compute_view_model(&wallets, &txs, Some(&pattern), None, &Config::default());

    assert_eq!(with_selection.mode, ViewMode::Pattern);
    assert_eq!(
        serde_json::to_value(&with_selection).unwrap(),
        serde_json::to_value(&without_selection).unwrap(),
        "an active pattern must make the selection irrelevant"
    );
}

#[test]
fn recomputation_is_idempotent() {
    let wallets = vec![
        wallet("a", 90),
        wallet("b", 75),
        wallet("c", 40),
        wallet("d", 10),
    ];
    let txs = vec![
        tx("t1", "a", "b"),
        tx("t2", "b", "c"),
        tx("t3", "c", "a"),
        tx("t4", "d", "a"),
    ];
    let config = Config::default();

    let first = compute_view_model(&wallets, &txs, None, None, &config);
    let second = compute_view_model(&wallets, &txs, None, None, &config);
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn cap_invariants_hold_across_modes() {
    // Dense graph: 30 wallets in a ring with cross edges, all high risk.
    let mut wallets = Vec::new();
    let mut txs = Vec::new();
    for i in 0..30 {
        wallets.push(wallet(&format!("w{i}"), 80));
    }
    for i in 0..30 {
        let next = format!("w{}", (i + 1) % 30);
        let skip = format!("w{}", (i + 7) % 30);
        txs.push(tx(&format!("r{i}"), &format!("w{i}"), &next));
        txs.push(tx(&format!("s{i}"), &format!("w{i}"), &skip));
    }
    let config = Config::default();

    let overview = compute_view_model(&wallets, &txs, None, None, &config);
    assert!(overview.nodes.len() <= 15);

    let focus = compute_view_model(&wallets, &txs, None, Some("w0"), &config);
    assert!(focus.nodes.len() <= 8);

    let pattern = FocusPattern {
        kind: PatternKind::Mixer,
        wallet_hash: "0xw0".to_string(),
        wallets: Vec::new(),
        transactions: Vec::new(),
        start_time: None,
        end_time: None,
    };
    let explained = compute_view_model(&wallets, &txs, Some(&pattern), None, &config);
    assert!(explained.nodes.len() <= 7);

    // Edge-visibility invariant in every mode.
    for vm in [&overview, &focus, &explained] {
        for link in &vm.links {
            assert!(vm.nodes.iter().any(|n| n.id == link.source));
            assert!(vm.nodes.iter().any(|n| n.id == link.target));
        }
    }
}
