//! Subgraph-selection and annotation engine: turns a full wallet/transaction
//! graph plus the analyst's current focus into a small, bounded, annotated
//! view-model. Pure and idempotent; callers re-run it on every input change.

pub mod graph;
pub mod links;
pub mod roles;
pub mod selection;
pub mod style;
pub mod view_metrics;
pub mod view_model;

pub use selection::ViewMode;
pub use view_model::{compute_view_model, SelectionSummary, ViewModel};
