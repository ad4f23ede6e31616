//! Address hierarchy lookup: state → township → village.
//!
//! [`loader`] reads the XML source, [`Hierarchy`] indexes it, [`selection`] pre-fills a
//! person's recorded address, [`dispatch`] answers drill-down queries and [`HierarchyStore`]
//! caches the loaded hierarchy for the process.

pub mod dispatch;
pub mod index;
pub mod loader;
pub mod selection;
pub mod store;

pub use dispatch::lists_states;
pub use index::Hierarchy;
pub use loader::{District, Locality, Region};
pub use selection::{resolve, Selection, SelectionView};
pub use store::HierarchyStore;
