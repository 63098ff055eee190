//! Simulation report generation.

use crate::flight::CrashCause;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one simulated session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub seed: Option<u64>,
    pub score: u32,
    pub ticks: u64,
    pub survival_ms: f64,
    pub taps: u32,
    pub traversals: u64,
    /// None when the run hit the tick cap.
    pub crash: Option<CrashCause>,
}

impl RunStats {
    pub fn timed_out(&self) -> bool {
        self.crash.is_none()
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,

    pub avg_score: f64,
    pub max_score: u32,
    pub min_score: u32,
    pub avg_survival_seconds: f64,
    pub avg_taps: f64,

    /// Crash counts keyed by cause name
    pub crash_causes: BTreeMap<String, u32>,

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let denom = num_runs.max(1) as f64;
        let runs_timed_out = runs.iter().filter(|r| r.timed_out()).count() as u32;

        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / denom;
        let max_score = runs.iter().map(|r| r.score).max().unwrap_or(0);
        let min_score = runs.iter().map(|r| r.score).min().unwrap_or(0);
        let avg_survival_seconds =
            runs.iter().map(|r| r.survival_ms / 1000.0).sum::<f64>() / denom;
        let avg_taps = runs.iter().map(|r| r.taps as f64).sum::<f64>() / denom;

        let mut crash_causes = BTreeMap::new();
        for cause in runs.iter().filter_map(|r| r.crash) {
            *crash_causes.entry(format!("{:?}", cause)).or_insert(0) += 1;
        }

        Self {
            num_runs,
            runs_timed_out,
            avg_score,
            max_score,
            min_score,
            avg_survival_seconds,
            avg_taps,
            crash_causes,
            run_stats: runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} hit the tick cap\n\n",
            self.num_runs, self.runs_timed_out
        ));

        report.push_str("── SCORE ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:           {:.2}\n", self.avg_score));
        report.push_str(&format!("  Best / Worst:        {} / {}\n", self.max_score, self.min_score));
        report.push_str(&format!(
            "  Avg Survival:        {:.1}s\n",
            self.avg_survival_seconds
        ));
        report.push_str(&format!("  Avg Taps:            {:.1}\n\n", self.avg_taps));

        report.push_str("── CRASHES ─────────────────────────────────────────────────────\n");
        if self.crash_causes.is_empty() {
            report.push_str("  (none)\n");
        }
        for (cause, count) in &self.crash_causes {
            report.push_str(&format!("  {:<20} {}\n", cause, count));
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u32, crash: Option<CrashCause>) -> RunStats {
        RunStats {
            seed: Some(1),
            score,
            ticks: 100,
            survival_ms: 1600.0,
            taps: 4,
            traversals: score as u64,
            crash,
        }
    }

    #[test]
    fn test_aggregates() {
        let report = SimReport::from_runs(vec![
            run(2, Some(CrashCause::Pipe)),
            run(6, Some(CrashCause::Pipe)),
            run(10, None),
        ]);
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.runs_timed_out, 1);
        assert!((report.avg_score - 6.0).abs() < 1e-12);
        assert_eq!(report.max_score, 10);
        assert_eq!(report.min_score, 2);
        assert!((report.avg_survival_seconds - 1.6).abs() < 1e-12);
        assert_eq!(report.crash_causes.get("Pipe"), Some(&2));
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_score, 0.0);
        assert!(report.to_text().contains("(none)"));
    }

    #[test]
    fn test_json_has_fields() {
        let report = SimReport::from_runs(vec![run(3, Some(CrashCause::Ground))]);
        let value: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(value["max_score"], 3);
        assert_eq!(value["crash_causes"]["Ground"], 1);
        assert_eq!(value["run_stats"][0]["crash"], "Ground");
    }
}
