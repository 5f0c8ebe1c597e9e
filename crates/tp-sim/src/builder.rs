//! Fluent builder for constructing a [`Fleet`].

use tp_core::{Millis, TransportConfig};
use tp_path::PathSource;

use crate::{Fleet, FleetResult, PlatformDef, TransportWorld};

/// Fluent builder for [`Fleet`].
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                       |
/// |------------------------|-------------------------------|
/// | `.platforms(v)`        | no platforms                  |
/// | `.start_at(ms)`        | `Millis(0)`                   |
/// | `.snapshot_every(n)`   | `0` (no snapshots)            |
///
/// # Example
///
/// ```rust,ignore
/// let mut fleet = FleetBuilder::new(config)
///     .platforms(defs)
///     .snapshot_every(10)
///     .build(&path_table, &mut world)?;
/// ```
pub struct FleetBuilder {
    config:         TransportConfig,
    defs:           Vec<PlatformDef>,
    start:          Millis,
    snapshot_every: u64,
}

impl FleetBuilder {
    pub fn new(config: TransportConfig) -> Self {
        Self {
            config,
            defs:           Vec::new(),
            start:          Millis::ZERO,
            snapshot_every: 0,
        }
    }

    /// Platforms to spawn, in order.
    pub fn platforms(mut self, defs: Vec<PlatformDef>) -> Self {
        self.defs = defs;
        self
    }

    pub fn platform(mut self, def: PlatformDef) -> Self {
        self.defs.push(def);
        self
    }

    /// Wall time the platforms are placed at.
    pub fn start_at(mut self, start: Millis) -> Self {
        self.start = start;
        self
    }

    /// Call [`FleetObserver::on_snapshot`][crate::FleetObserver::on_snapshot]
    /// every `ticks` ticks of [`Fleet::run`].  `0` disables snapshots.
    pub fn snapshot_every(mut self, ticks: u64) -> Self {
        self.snapshot_every = ticks;
        self
    }

    /// Validate the config and spawn every platform.
    ///
    /// A platform that fails to spawn is logged and skipped; only an invalid
    /// config fails the build.
    pub fn build<S, W>(self, source: &S, world: &mut W) -> FleetResult<Fleet>
    where
        S: PathSource + ?Sized,
        W: TransportWorld + ?Sized,
    {
        let mut fleet = Fleet::new(self.config)?;
        fleet.set_snapshot_every(self.snapshot_every);

        for def in self.defs {
            let (id, name) = (def.id, def.name.clone());
            if let Err(e) = fleet.spawn(def, source, world, self.start) {
                log::error!("{id} '{name}' failed creation: {e}");
            }
        }
        Ok(fleet)
    }
}
