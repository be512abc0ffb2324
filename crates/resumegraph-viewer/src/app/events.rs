use bevy::prelude::Event;
use resumegraph_core::NodeId;

#[derive(Event, Debug, Clone)]
pub struct Picked(pub Option<NodeId>);
