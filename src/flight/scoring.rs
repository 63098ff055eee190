//! Pipe-pass detection.

use super::obstacles::PipeStep;

/// True when the pipe moved from right of `mark` to at-or-left of it during
/// `step`. Compares sides rather than positions, so a step that jumps clean
/// over the mark still counts.
pub fn crossed(step: PipeStep, mark: f64) -> bool {
    step.previous_x > mark && step.current_x <= mark
}

/// Count one pass. Returns the new score.
pub fn record_pass(score: &mut u32) -> u32 {
    *score = score.saturating_add(1);
    *score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(previous_x: f64, current_x: f64) -> PipeStep {
        PipeStep {
            previous_x,
            current_x,
        }
    }

    #[test]
    fn test_crossing_from_right() {
        assert!(crossed(step(101.0, 99.0), 100.0));
    }

    #[test]
    fn test_landing_exactly_on_mark_counts() {
        assert!(crossed(step(100.5, 100.0), 100.0));
    }

    #[test]
    fn test_starting_on_mark_does_not_count_again() {
        assert!(!crossed(step(100.0, 98.0), 100.0));
    }

    #[test]
    fn test_large_jump_over_mark_counts() {
        assert!(crossed(step(390.0, -250.0), 100.0));
    }

    #[test]
    fn test_no_crossing_on_either_side() {
        assert!(!crossed(step(300.0, 200.0), 100.0));
        assert!(!crossed(step(50.0, 10.0), 100.0));
    }

    #[test]
    fn test_stationary_pipe_never_counts() {
        assert!(!crossed(step(100.0, 100.0), 100.0));
    }

    #[test]
    fn test_record_pass_increments_by_one() {
        let mut score = 4;
        assert_eq!(record_pass(&mut score), 5);
        assert_eq!(score, 5);
    }
}
