//! Bird-versus-world and bird-versus-pipe tests.
//!
//! The bird is a single point at its visual center. Obstacle rectangles are
//! inflated by half the bird's height on the left and top edges and by a
//! third on the bottom edge, which gives a slightly forgiving hitbox.

use super::types::{Bird, CrashCause, PipePair, Point, Rect, Viewport};
use crate::core::constants::{HITBOX_BOTTOM_PAD, HITBOX_NEAR_PAD};

/// Inclusive point-in-padded-rectangle test.
pub fn point_hits_rect(point: Point, rect: &Rect) -> bool {
    point.x >= rect.x - HITBOX_NEAR_PAD
        && point.x <= rect.x + rect.w
        && point.y >= rect.y - HITBOX_NEAR_PAD
        && point.y <= rect.y + rect.h + HITBOX_BOTTOM_PAD
}

/// Ceiling or ground contact, judged on the sprite's top edge.
pub fn world_bounds_hit(bird: &Bird, viewport: &Viewport) -> Option<CrashCause> {
    if bird.y > viewport.ground_line() {
        Some(CrashCause::Ground)
    } else if bird.y < 0.0 {
        Some(CrashCause::Ceiling)
    } else {
        None
    }
}

pub fn pipe_hit(bird: &Bird, pipes: &PipePair, viewport: &Viewport) -> bool {
    let center = bird.center();
    pipes
        .obstacles(viewport)
        .iter()
        .any(|rect| point_hits_rect(center, rect))
}

/// First collision found, world bounds before pipes.
pub fn detect(bird: &Bird, pipes: &PipePair, viewport: &Viewport) -> Option<CrashCause> {
    world_bounds_hit(bird, viewport).or_else(|| {
        if pipe_hit(bird, pipes, viewport) {
            Some(CrashCause::Pipe)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::*;

    fn viewport() -> Viewport {
        Viewport::new(400.0, 850.0)
    }

    fn rect() -> Rect {
        Rect {
            x: 200.0,
            y: 300.0,
            w: PIPE_WIDTH,
            h: PIPE_HEIGHT,
        }
    }

    #[test]
    fn test_left_pad_boundary_is_inclusive() {
        let r = rect();
        let p = Point {
            x: r.x - HITBOX_NEAR_PAD,
            y: 500.0,
        };
        assert!(point_hits_rect(p, &r));
        let just_outside = Point {
            x: r.x - HITBOX_NEAR_PAD - 0.001,
            y: 500.0,
        };
        assert!(!point_hits_rect(just_outside, &r));
    }

    #[test]
    fn test_right_edge_has_no_pad() {
        let r = rect();
        assert!(point_hits_rect(Point { x: r.x + r.w, y: 500.0 }, &r));
        assert!(!point_hits_rect(
            Point {
                x: r.x + r.w + 0.001,
                y: 500.0
            },
            &r
        ));
    }

    #[test]
    fn test_top_pad_is_half_bird_height() {
        let r = rect();
        assert!(point_hits_rect(Point { x: 250.0, y: r.y - 24.0 }, &r));
        assert!(!point_hits_rect(Point { x: 250.0, y: r.y - 24.5 }, &r));
    }

    #[test]
    fn test_bottom_pad_is_third_bird_height() {
        let r = rect();
        let bottom = r.y + r.h;
        assert!(point_hits_rect(Point { x: 250.0, y: bottom + 16.0 }, &r));
        assert!(!point_hits_rect(Point { x: 250.0, y: bottom + 16.5 }, &r));
    }

    #[test]
    fn test_ground_hit() {
        let vp = viewport();
        let bird = Bird {
            y: vp.height - 1.0,
            velocity: 0.0,
            x: vp.bird_x(),
        };
        assert_eq!(world_bounds_hit(&bird, &vp), Some(CrashCause::Ground));
    }

    #[test]
    fn test_ground_line_itself_is_safe() {
        let vp = viewport();
        let bird = Bird {
            y: vp.ground_line(),
            velocity: 0.0,
            x: vp.bird_x(),
        };
        assert_eq!(world_bounds_hit(&bird, &vp), None);
    }

    #[test]
    fn test_ceiling_hit() {
        let vp = viewport();
        let bird = Bird {
            y: -0.1,
            velocity: -500.0,
            x: vp.bird_x(),
        };
        assert_eq!(world_bounds_hit(&bird, &vp), Some(CrashCause::Ceiling));
    }

    #[test]
    fn test_bird_in_gap_is_safe() {
        let vp = viewport();
        let mut pipes = PipePair::new(&vp);
        pipes.x = vp.bird_x();
        let mut bird = Bird::new(&vp);
        // Put the bird's center on the gap center
        bird.y = pipes.gap_center(&vp) - BIRD_HEIGHT / 2.0;
        assert_eq!(detect(&bird, &pipes, &vp), None);
    }

    #[test]
    fn test_bird_inside_top_pipe() {
        let vp = viewport();
        let mut pipes = PipePair::new(&vp);
        pipes.x = vp.bird_x();
        let mut bird = Bird::new(&vp);
        bird.y = 50.0;
        assert_eq!(detect(&bird, &pipes, &vp), Some(CrashCause::Pipe));
    }

    #[test]
    fn test_bird_inside_bottom_pipe() {
        let vp = viewport();
        let mut pipes = PipePair::new(&vp);
        pipes.x = vp.bird_x();
        let mut bird = Bird::new(&vp);
        bird.y = pipes.bottom_y(&vp) + 10.0;
        assert_eq!(detect(&bird, &pipes, &vp), Some(CrashCause::Pipe));
    }

    #[test]
    fn test_pipe_far_right_is_harmless() {
        let vp = viewport();
        let pipes = PipePair::new(&vp);
        let mut bird = Bird::new(&vp);
        bird.y = 10.0;
        assert_eq!(detect(&bird, &pipes, &vp), None);
    }

    #[test]
    fn test_world_bounds_reported_before_pipe() {
        let vp = viewport();
        let mut pipes = PipePair::new(&vp);
        pipes.x = vp.bird_x();
        let mut bird = Bird::new(&vp);
        bird.y = -5.0;
        assert_eq!(detect(&bird, &pipes, &vp), Some(CrashCause::Ceiling));
    }
}
