//! Dock arrival cues keyed by platform visual class.

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DockCue {
    /// Lighthouse fog horn.
    ShipHorn,
    ZeppelinHorn,
    /// Generic docking bell; used for any unrecognized class.
    BoatBell,
}

impl DockCue {
    pub fn for_visual_class(visual_class: u32) -> Self {
        match visual_class {
            3015 | 7087 => DockCue::ShipHorn,
            3031        => DockCue::ZeppelinHorn,
            _           => DockCue::BoatBell,
        }
    }

    /// Client sound entry for this cue.
    pub fn sound_id(self) -> u32 {
        match self {
            DockCue::ShipHorn     => 5154,
            DockCue::ZeppelinHorn => 11804,
            DockCue::BoatBell     => 5495,
        }
    }
}
