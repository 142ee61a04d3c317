//! Integer-graph layer: label indexing, SCC decomposition, and
//! elementary-cycle enumeration.

pub mod cycles;
pub mod indexer;
pub mod orchestrator;
pub mod scc;
pub mod types;

pub use cycles::find_simple_cycles;
pub use indexer::LabelIndexer;
pub use orchestrator::{cycles_from_projected_graph, cycles_from_raw_edges};
pub use scc::find_components;
pub use types::{Component, IntEdge, VertexId};
