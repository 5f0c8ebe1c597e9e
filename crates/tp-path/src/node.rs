//! Raw path nodes as they come out of the path configuration.

use tp_core::{MapId, Vec3};

/// What happens when the platform reaches a node.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeAction {
    /// Pass through.
    #[default]
    Normal,
    /// The platform arrives here instantaneously (map change or jump).
    Teleport,
    /// Dock: the platform decelerates to rest and waits `dwell_secs`.
    Stop,
}

impl NodeAction {
    /// Decode the numeric action flag used by path tables
    /// (`0` normal, `1` teleport, `2` stop).  Unknown codes read as normal.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => NodeAction::Teleport,
            2 => NodeAction::Stop,
            _ => NodeAction::Normal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeAction::Normal   => "normal",
            NodeAction::Teleport => "teleport",
            NodeAction::Stop     => "stop",
        }
    }
}

impl std::fmt::Display for NodeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of an ordered, logically cyclic platform path.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub map:        MapId,
    pub position:   Vec3,
    pub action:     NodeAction,
    /// Wait time at this node, in whole seconds.
    pub dwell_secs: u32,
}

impl PathNode {
    pub fn new(map: MapId, position: Vec3, action: NodeAction, dwell_secs: u32) -> Self {
        Self { map, position, action, dwell_secs }
    }

    #[inline]
    pub fn is_stop(&self) -> bool {
        self.action == NodeAction::Stop
    }
}
