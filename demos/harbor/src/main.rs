//! harbor — smallest example for the rust_tp transport engine.
//!
//! A ferry shuttles between two mainland piers while an airship docks on the
//! isles, jumps to the mainland, docks again and jumps back.  Three riders
//! board the airship before departure: one healthy, one dead (resurrected on
//! arrival) and one without access to the mainland (sent to respawn).

mod routes;
mod world;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use tp_core::{Location, Millis, PlatformId, RiderId, TransportConfig, Vec3};
use tp_motion::MapCrossing;
use tp_output::{CsvWriter, FleetOutputObserver, OutputWriter};
use tp_rider::{MovementReport, TransportLinkage};
use tp_sim::{Fleet, FleetBuilder, FleetObserver, RelocationSummary, TickSummary};

use routes::{AIRSHIP, FERRY, ISLE_TOWER, ISLES, MAINLAND, MAINLAND_TOWER, NORTH_PIER, SOUTH_PIER};
use world::HarborWorld;

// ── Constants ─────────────────────────────────────────────────────────────────

const SIM_MINUTES:    u64 = 10;
const SNAPSHOT_EVERY: u64 = 50; // every 5 s of wall time

const HEALTHY: RiderId = RiderId(100);
const GHOST:   RiderId = RiderId(101);
const LOCKED:  RiderId = RiderId(102);

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         FleetOutputObserver<W>,
    ticks:         u64,
    snapshot_rows: usize,
    crossing_rows: usize,
    relocated:     u32,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: FleetOutputObserver<W>) -> Self {
        Self { inner, ticks: 0, snapshot_rows: 0, crossing_rows: 0, relocated: 0 }
    }
}

impl<W: OutputWriter> FleetObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.ticks += 1;
        self.relocated += summary.relocated;
    }

    fn on_crossing(
        &mut self,
        now:      Millis,
        platform: PlatformId,
        crossing: &MapCrossing,
        summary:  &RelocationSummary,
    ) {
        println!(
            "[{now}] {platform}: {} -> {} ({} relocated, {} redirected)",
            crossing.from_map, crossing.to_map, summary.relocated, summary.redirected,
        );
        self.crossing_rows += 1;
        self.inner.on_crossing(now, platform, crossing, summary);
    }

    fn on_snapshot(&mut self, now: Millis, fleet: &Fleet) {
        self.snapshot_rows += fleet.len();
        self.inner.on_snapshot(now, fleet);
    }

    fn on_run_end(&mut self, now: Millis) {
        self.inner.on_run_end(now);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== harbor — rust_tp transport engine ===");
    println!();

    let config = TransportConfig::default();
    let ticks = SIM_MINUTES * 60_000 / config.tick_interval_ms as u64;

    // 1. World and fleet.
    let mut world = HarborWorld::default();
    let mut fleet = FleetBuilder::new(config)
        .platforms(routes::platform_defs())
        .snapshot_every(SNAPSHOT_EVERY)
        .build(&routes::build_paths(), &mut world)?;

    for p in fleet.platforms() {
        println!(
            "{:<8} {} waypoints, {:.1} s round trip",
            p.def.name,
            p.schedule.len(),
            p.schedule.period_ms() as f64 / 1_000.0,
        );
    }
    println!();

    // 2. Riders board the airship at the isle tower.
    world.locked.insert((LOCKED, MAINLAND));
    let deck = fleet
        .platform(AIRSHIP)
        .map(|p| p.location())
        .unwrap_or_default();
    for (i, rider) in [HEALTHY, GHOST, LOCKED].into_iter().enumerate() {
        world.add_rider(rider, ISLES, deck, rider == GHOST);
        let offset = Vec3::new(2.0 * i as f32, 1.0, 3.0);
        let report = MovementReport::aboard(
            rider,
            Millis::ZERO,
            Location::new(deck.local_to_world(offset), deck.orientation),
            TransportLinkage { platform: AIRSHIP, offset, orientation_hint: 0.0 },
        );
        let t = fleet.on_movement_report(&report, &mut world);
        println!("{rider} boards the airship: {t:?}");
    }
    println!();

    // 3. Output.
    std::fs::create_dir_all("output/harbor")?;
    let writer = CsvWriter::new(Path::new("output/harbor"))?;
    let mut obs = CountingObserver::new(FleetOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    let end = fleet.run(Millis::ZERO, ticks, &mut world, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!();
    println!("Ran {} ticks to {end} in {:.3} s", obs.ticks, elapsed.as_secs_f64());
    println!("  platform_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  crossings.csv          : {} rows", obs.crossing_rows);
    println!(
        "  placements {}  dock cues {}  rider transfers {} (total relocated {})  respawns {}",
        world.placements, world.dock_cues, world.transfers, obs.relocated, world.respawns,
    );
    println!();

    // 6. Where is everyone?
    for id in [FERRY, AIRSHIP] {
        if let Some(p) = fleet.platform(id) {
            println!("{:<8} on {} at {}", p.def.name, p.map(), p.location().position);
        }
    }
    println!();

    println!("{:<14} {:<10} {:<12}", "Rider", "Platform", "Map");
    println!("{}", "-".repeat(36));
    for rider in [HEALTHY, GHOST, LOCKED] {
        let platform = fleet
            .platform_of(rider)
            .map_or_else(|| "-".to_owned(), |p| p.to_string());
        let map = world
            .rider_map(rider)
            .map_or_else(|| "-".to_owned(), |m| m.to_string());
        println!("{:<14} {:<10} {:<12}", rider.to_string(), platform, map);
    }
    println!();

    // 7. Ask the dockmasters.
    for (map, at) in [
        (MAINLAND, NORTH_PIER),
        (MAINLAND, SOUTH_PIER),
        (ISLES, ISLE_TOWER),
        (MAINLAND, MAINLAND_TOWER),
    ] {
        match fleet.dock_status(map, at, None) {
            Some(r) => println!("{map} {at}: {r} (next arrival in {} s)", r.eta_secs()),
            None => println!("{map} {at}: no dock here"),
        }
    }

    Ok(())
}
