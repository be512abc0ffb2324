pub mod dataset;
pub mod graph;
pub mod inspect;
pub mod layout;
pub mod model;
pub mod resume;
pub mod scene;
pub mod timeline;
pub mod view;

pub use dataset::{Dataset, IntegrityReport, InvalidEdge};
pub use graph::Graph;
pub use inspect::{describe, spotlight_candidates, Description, Neighbor};
pub use layout::{compute_positions, LayoutCache, Point, Positions};
pub use model::{normalize_kind, Edge, EdgeData, Kind, Node, NodeId, KIND_ORDER};
pub use scene::{assemble, kind_style, Frame, LabelMode, MarkerSymbol, Scene, SceneOptions};
pub use timeline::{month_floor, timeline_stops, LayerSet, ToolFocus, Visibility, VisibleSet};
pub use view::{build_view, FilterState, View};
