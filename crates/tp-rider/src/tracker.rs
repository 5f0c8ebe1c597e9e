//! Attach/detach decisions from rider movement reports.

use tp_core::{AttachmentConfig, Location};

use crate::{AttachmentRecord, AttachmentState, MovementReport, PassengerRegistry};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DetachReason {
    /// The rider reported a position farther than the detach radius.
    FarAway,
    /// Linkage stayed missing for longer than the grace window.
    GraceExpired,
    /// The rider reported standing on a different platform.
    Transferred,
}

/// What one report did to a rider's attachment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Transition {
    /// DETACHED → ATTACHED.
    Boarded { world: Location },
    /// ATTACHED → ATTACHED with a fresh offset.
    Refreshed { world: Location },
    /// LOSS_PENDING → ATTACHED.
    Recovered { world: Location },
    /// ATTACHED → LOSS_PENDING.  The rider is still carried on its last
    /// confirmed offset.
    LossPending { world: Location },
    /// LOSS_PENDING, still inside the grace window.
    StillPending { world: Location },
    /// → DETACHED; the record is gone.
    Detached { reason: DetachReason },
    /// No record and no linkage: the report is none of this platform's
    /// business.
    Unattached,
    /// Linkage names a platform nobody knows; nothing changed.
    Ignored,
}

impl Transition {
    /// World placement the host must apply to the rider, if any.
    pub fn world(&self) -> Option<Location> {
        match *self {
            Transition::Boarded { world }
            | Transition::Refreshed { world }
            | Transition::Recovered { world }
            | Transition::LossPending { world }
            | Transition::StillPending { world } => Some(world),
            _ => None,
        }
    }

    /// The rider's coordinate frame changed; consistency checks must be
    /// suppressed briefly.
    pub fn changes_frame(&self) -> bool {
        matches!(self, Transition::Boarded { .. } | Transition::Detached { .. })
    }

    pub fn is_detach(&self) -> bool {
        matches!(self, Transition::Detached { .. })
    }
}

pub struct AttachmentTracker {
    cfg: AttachmentConfig,
}

impl AttachmentTracker {
    pub fn new(cfg: AttachmentConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &AttachmentConfig {
        &self.cfg
    }

    /// Apply `report` to the rider's record in `registry`, where the
    /// registry belongs to the platform currently at `frame`.
    ///
    /// The caller routes the report: any linkage it carries names this
    /// platform.  Order of checks for a rider with a record:
    ///
    /// 1. reported position beyond the detach radius → detach, even with
    ///    linkage present;
    /// 2. pending and the grace window has run out → detach;
    /// 3. linkage present → refresh or recover;
    /// 4. linkage absent → start (or continue) the grace window, placing
    ///    the rider from its last confirmed offset.
    pub fn observe(
        &self,
        registry: &mut PassengerRegistry,
        frame:    &Location,
        report:   &MovementReport,
    ) -> Transition {
        let rider = report.rider;
        let now = report.timestamp;

        let Some(rec) = registry.get_mut(rider) else {
            return match report.linkage {
                Some(link) => {
                    let rec = AttachmentRecord::new(rider, link.offset, link.orientation_hint, now);
                    let world = rec.world_location(frame);
                    registry.insert(rec);
                    log::debug!("{rider} boarded at offset {}", link.offset);
                    Transition::Boarded { world }
                }
                None => Transition::Unattached,
            };
        };

        let radius = self.cfg.detach_radius;
        if report.location.position.distance_sq(frame.position) > radius * radius {
            registry.remove(rider);
            log::debug!("{rider} detached: reported beyond {radius} units");
            return Transition::Detached { reason: DetachReason::FarAway };
        }

        if let AttachmentState::LossPending { since } = rec.state {
            if now.since(since) > self.cfg.loss_grace_ms as u64 {
                registry.remove(rider);
                log::debug!("{rider} detached: linkage missing since {since}");
                return Transition::Detached { reason: DetachReason::GraceExpired };
            }
        }

        match (report.linkage, rec.state) {
            (Some(link), state) => {
                rec.local_offset = link.offset;
                rec.local_orientation_hint = link.orientation_hint;
                rec.last_confirmed = now;
                rec.state = AttachmentState::Attached;
                let world = rec.world_location(frame);
                if matches!(state, AttachmentState::LossPending { .. }) {
                    log::debug!("{rider} recovered linkage");
                    Transition::Recovered { world }
                } else {
                    Transition::Refreshed { world }
                }
            }
            (None, AttachmentState::Attached) => {
                rec.state = AttachmentState::LossPending { since: now };
                log::debug!("{rider} lost linkage at {now}");
                Transition::LossPending { world: rec.world_location(frame) }
            }
            (None, AttachmentState::LossPending { .. }) => {
                Transition::StillPending { world: rec.world_location(frame) }
            }
        }
    }

    /// Remove `rider` from `registry` because it now reports another
    /// platform.
    pub fn transfer_out(&self, registry: &mut PassengerRegistry, report: &MovementReport) -> Transition {
        match registry.remove(report.rider) {
            Some(_) => Transition::Detached { reason: DetachReason::Transferred },
            None => Transition::Unattached,
        }
    }
}
