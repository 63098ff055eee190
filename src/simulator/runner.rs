//! Simulation runner. Drives `FlightSession` exactly like the game loop does,
//! one fixed-length frame at a time.

use super::autopilot::Autopilot;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::flight::{process_tap, process_tick, FlightEvent, FlightSession, GamePhase};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = config.seed.map(|s| s.wrapping_add(run_idx as u64));
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut stats = simulate_single_run(config, &mut rng);
        stats.seed = seed;

        debug!(
            run = run_idx + 1,
            score = stats.score,
            survival_ms = stats.survival_ms,
            crash = ?stats.crash,
            "run finished"
        );
        all_runs.push(stats);
    }

    let report = SimReport::from_runs(all_runs);
    info!(
        runs = report.num_runs,
        avg_score = report.avg_score,
        max_score = report.max_score,
        "simulation complete"
    );
    report
}

/// Play one session until it crashes or hits the tick cap.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let mut session = FlightSession::new(config.flight.clone());
    let pilot = Autopilot::new(config.tap_margin);
    let mut taps = 0u32;
    let mut crash = None;

    for _ in 0..config.max_ticks_per_run {
        if pilot.wants_tap(&session) {
            process_tap(&mut session);
            taps += 1;
        }

        let result = process_tick(&mut session, Some(config.frame_ms), rng);
        for event in &result.events {
            if let FlightEvent::Crashed { cause, .. } = event {
                crash = Some(*cause);
            }
        }

        if session.phase == GamePhase::GameOver {
            break;
        }
    }

    RunStats {
        seed: None,
        score: session.score,
        ticks: session.tick_count,
        survival_ms: session.elapsed_ms,
        taps,
        traversals: session.traversals,
        crash,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_run_respects_tick_cap() {
        let config = SimConfig {
            max_ticks_per_run: 30,
            ..SimConfig::quick(1)
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let stats = simulate_single_run(&config, &mut rng);
        assert!(stats.ticks <= 30);
        assert!(stats.taps >= 1);
    }

    #[test]
    fn test_run_without_pilot_taps_crashes() {
        // A huge margin means the bot only ever taps to start
        let config = SimConfig {
            tap_margin: -10_000.0,
            ..SimConfig::quick(5)
        };
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let stats = simulate_single_run(&config, &mut rng);
        assert_eq!(stats.taps, 1);
        assert!(stats.crash.is_some());
        assert_eq!(stats.score, 0);
    }

    #[test]
    fn test_seeded_simulation_is_deterministic() {
        let config = SimConfig::quick(1234);
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a, b);
        assert_eq!(a.run_stats[3].seed, Some(1237));
    }
}
