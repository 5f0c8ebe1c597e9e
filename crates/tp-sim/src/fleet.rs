//! The `Fleet` struct: platform storage, the tick loop, rider routing.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use tp_core::{Location, MapId, Millis, PlatformId, RiderId, TransportConfig, Vec3};
use tp_motion::{MotionEngine, MotionStep};
use tp_path::{DockMatch, PathSource, PathSynthesizer};
use tp_rider::{AttachmentTracker, MovementReport, Transition};

use crate::status::classify;
use crate::{
    CrossMapRelocator, DockCue, DockReport, FleetError, FleetObserver, FleetResult, Platform,
    PlatformDef, TickSummary, TransportWorld,
};

/// All running platforms plus the rider → platform index.
///
/// Create via [`FleetBuilder`][crate::FleetBuilder] or [`Fleet::new`] +
/// [`Fleet::spawn`].
pub struct Fleet {
    config:         TransportConfig,
    synthesizer:    PathSynthesizer,
    tracker:        AttachmentTracker,
    /// Ascending id order doubles as the apply-phase order.
    platforms:      BTreeMap<PlatformId, Platform>,
    /// Which platform holds each rider's record.
    riders:         FxHashMap<RiderId, PlatformId>,
    snapshot_every: u64,
}

impl Fleet {
    /// An empty fleet.  Fails if `config` does not validate.
    pub fn new(config: TransportConfig) -> FleetResult<Self> {
        config.validate()?;
        Ok(Self {
            synthesizer:    PathSynthesizer::new(&config.kinematics),
            tracker:        AttachmentTracker::new(config.attachment.clone()),
            config,
            platforms:      BTreeMap::new(),
            riders:         FxHashMap::default(),
            snapshot_every: 0,
        })
    }

    pub(crate) fn set_snapshot_every(&mut self, ticks: u64) {
        self.snapshot_every = ticks;
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Synthesize `def.path` from `source` and place the platform in the
    /// world on whichever waypoint is current at `now`.
    ///
    /// On error nothing is created and the world is untouched.
    pub fn spawn<S, W>(
        &mut self,
        def:    PlatformDef,
        source: &S,
        world:  &mut W,
        now:    Millis,
    ) -> FleetResult<PlatformId>
    where
        S: PathSource + ?Sized,
        W: TransportWorld + ?Sized,
    {
        let id = def.id;
        if self.platforms.contains_key(&id) {
            return Err(FleetError::DuplicatePlatform(id));
        }
        let schedule = self.synthesizer.resolve(source, def.path)?;
        let platform = Platform::new(def, schedule, now);

        world.set_map(id, platform.map());
        world.set_position(id, platform.location());
        world.add_to_world(id);

        log::info!(
            "spawned {id} '{}' on {}: {} waypoints, period {} ms",
            platform.def.name,
            platform.def.path,
            platform.schedule.len(),
            platform.schedule.period_ms(),
        );
        self.platforms.insert(id, platform);
        Ok(id)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn platform(&self, id: PlatformId) -> Option<&Platform> {
        self.platforms.get(&id)
    }

    /// Platforms in ascending id order.
    pub fn platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.values()
    }

    /// The platform `rider` is currently attached to.
    pub fn platform_of(&self, rider: RiderId) -> Option<PlatformId> {
        self.riders.get(&rider).copied()
    }

    /// World placement of an attached rider, derived from its platform.
    pub fn rider_world_location(&self, rider: RiderId) -> Option<Location> {
        let p = self.platforms.get(self.riders.get(&rider)?)?;
        p.passengers.world_location(rider, &p.state.location)
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Run `ticks` ticks starting at `start`, `tick_interval_ms` apart.
    /// Returns the wall time after the last tick.
    pub fn run<W, O>(&mut self, start: Millis, ticks: u64, world: &mut W, observer: &mut O) -> Millis
    where
        W: TransportWorld + ?Sized,
        O: FleetObserver + ?Sized,
    {
        let step = self.config.tick_interval_ms as u64;
        let mut now = start;
        for i in 0..ticks {
            self.tick(now, world, observer);
            if self.snapshot_every > 0 && i.is_multiple_of(self.snapshot_every) {
                observer.on_snapshot(now, self);
            }
            now = now + step;
        }
        observer.on_run_end(now);
        now
    }

    /// Advance every platform to wall time `now` and apply the results.
    pub fn tick<W, O>(&mut self, now: Millis, world: &mut W, observer: &mut O) -> TickSummary
    where
        W: TransportWorld + ?Sized,
        O: FleetObserver + ?Sized,
    {
        observer.on_tick_start(now);
        let steps = self.motion_phase(now);

        let mut summary = TickSummary {
            wall: now,
            platforms: self.platforms.len(),
            ..TickSummary::default()
        };

        for (id, step) in steps {
            let Some(platform) = self.platforms.get_mut(&id) else {
                continue;
            };

            for &waypoint in &step.docked {
                let class = platform.def.visual_class;
                world.on_docked(id, class, DockCue::for_visual_class(class));
                observer.on_docked(now, id, waypoint);
                summary.docked += 1;
            }

            if let Some(crossing) = step.crossing {
                log::info!(
                    "{id} crossing {} -> {} with {} aboard",
                    crossing.from_map,
                    crossing.to_map,
                    platform.passengers.len(),
                );
                let reloc = CrossMapRelocator::relocate(platform, &crossing, world);
                for rider in &reloc.dropped {
                    self.riders.remove(rider);
                }
                summary.absorb(&reloc);
                observer.on_crossing(now, id, &crossing, &reloc);
            } else if step.moved_in_place() {
                world.set_position(id, platform.state.location);
                summary.moved += 1;
            }
        }

        observer.on_tick_end(&summary);
        summary
    }

    /// Phase ①: pure per-platform motion.  Results in ascending id order.
    fn motion_phase(&mut self, now: Millis) -> Vec<(PlatformId, MotionStep)> {
        #[cfg(not(feature = "parallel"))]
        {
            self.platforms
                .iter_mut()
                .map(|(&id, p)| (id, MotionEngine::tick(&mut p.state, &p.schedule, now)))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.platforms
                .par_iter_mut()
                .map(|(&id, p)| (id, MotionEngine::tick(&mut p.state, &p.schedule, now)))
                .collect()
        }
    }

    // ── Riders ────────────────────────────────────────────────────────────

    /// Apply one rider movement report.
    ///
    /// The report goes to the platform the rider already has a record on;
    /// if its linkage names a different known platform, the record moves
    /// there first.  Linkage naming an unknown platform is ignored.
    pub fn on_movement_report<W>(&mut self, report: &MovementReport, world: &mut W) -> Transition
    where
        W: TransportWorld + ?Sized,
    {
        let rider = report.rider;
        let linked = report.linked_platform();
        if let Some(named) = linked {
            if !self.platforms.contains_key(&named) {
                log::debug!("{rider} reports unknown {named}; ignored");
                return Transition::Ignored;
            }
        }

        let mut current = self.riders.get(&rider).copied();
        if let (Some(cur), Some(named)) = (current, linked) {
            if cur != named {
                if let Some(p) = self.platforms.get_mut(&cur) {
                    self.tracker.transfer_out(&mut p.passengers, report);
                }
                self.riders.remove(&rider);
                log::debug!("{rider} moved from {cur} to {named}");
                current = None;
            }
        }

        let Some(target) = current.or(linked) else {
            return Transition::Unattached;
        };
        let Some(platform) = self.platforms.get_mut(&target) else {
            self.riders.remove(&rider);
            return Transition::Unattached;
        };

        let frame = platform.state.location;
        let transition = self.tracker.observe(&mut platform.passengers, &frame, report);
        match transition {
            Transition::Boarded { .. } => {
                self.riders.insert(rider, target);
            }
            Transition::Detached { .. } => {
                self.riders.remove(&rider);
            }
            _ => {}
        }

        if let Some(at) = transition.world() {
            world.set_rider_position(rider, at);
            world.force_reindex(rider);
        }
        if transition.changes_frame() {
            world.suppress_movement_checks(rider, self.config.attachment.check_suppression_ms);
        }
        transition
    }

    /// Forget a rider that disconnected.  Returns `true` if it was aboard.
    pub fn on_rider_disconnect(&mut self, rider: RiderId) -> bool {
        let Some(pid) = self.riders.remove(&rider) else {
            return false;
        };
        self.platforms
            .get_mut(&pid)
            .is_some_and(|p| p.passengers.remove(rider).is_some())
    }

    /// Where a rider that just finished loading `rider_map` should really
    /// be, if its platform has meanwhile moved to another map.
    pub fn rejoin_location(&self, rider: RiderId, rider_map: MapId) -> Option<(MapId, Location)> {
        let p = self.platforms.get(self.riders.get(&rider)?)?;
        if p.state.map == rider_map {
            return None;
        }
        let at = p.passengers.world_location(rider, &p.state.location)?;
        Some((p.state.map, at))
    }

    // ── Docks ─────────────────────────────────────────────────────────────

    /// Status of the platform whose dock is nearest to `position` on `map`,
    /// optionally restricted to one visual class.
    pub fn dock_status(&self, map: MapId, position: Vec3, visual_class: Option<u32>) -> Option<DockReport> {
        let docks = &self.config.docks;
        let (platform, hit) = self
            .platforms
            .values()
            .filter(|p| visual_class.is_none_or(|c| p.def.visual_class == c))
            .filter_map(|p| {
                p.schedule
                    .find_dock_near(map, position, docks.search_radius)
                    .map(|hit| (p, hit))
            })
            .fold(None::<(&Platform, DockMatch)>, |best, cand| match best {
                Some(b) if b.1.dist_sq <= cand.1.dist_sq => Some(b),
                _ => Some(cand),
            })?;

        let dock_pos = platform.schedule.get(hit.index)?.position();
        let near = platform.state.location.position.distance_sq(dock_pos)
            <= docks.docked_radius * docks.docked_radius;
        let docked = platform.state.map == map && near;
        let (eta_ms, status) = classify(
            docked,
            hit.time_ms,
            platform.state.elapsed_ms,
            platform.schedule.period_ms(),
            docks.arriving_soon_ms,
        );
        Some(DockReport {
            platform: platform.id(),
            name: platform.def.name.clone(),
            dock_ms: hit.time_ms,
            eta_ms,
            status,
        })
    }
}
