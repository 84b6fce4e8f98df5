use crate::view_model::ViewModel;

/// Records view-model shape to gauges (for dashboard panels). Callers
/// invoke this after `compute_view_model`; the pipeline itself stays
/// side-effect-free.
pub fn record_view_counts(view_model: &ViewModel) {
    metrics::gauge!("explorer_view_nodes_visible").set(view_model.nodes.len() as f64);
    metrics::gauge!("explorer_view_links_visible").set(view_model.links.len() as f64);
    metrics::gauge!("explorer_view_core_nodes")
        .set(view_model.nodes.iter().filter(|n| n.is_core).count() as f64);
    metrics::gauge!("explorer_view_pattern_edges")
        .set(view_model.links.iter().filter(|l| l.is_pattern_edge).count() as f64);
}
