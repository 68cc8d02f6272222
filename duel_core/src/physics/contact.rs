//! Ball/paddle contact detection.
//!
//! A contact is a directional crossing of a paddle's plane within the
//! paddle's lateral extent. The lateral test is a broad overlap against
//! `half_width + ball_radius`; no swept-circle narrow phase is performed.

use crate::components::{Ball, Side};
use crate::config::ContactParams;
use crate::physics::resolver::{self, CollisionFrame};

/// A paddle's contact plane for one tick.
#[derive(Debug, Clone, Copy)]
pub struct PaddlePlane {
    pub side: Side,
    /// Y coordinate of the contact plane.
    pub plane_y: f64,
    /// Paddle center x at the end of the tick.
    pub center_x: f64,
    /// Lateral paddle velocity over this tick, from [`Paddle::velocity`].
    ///
    /// [`Paddle::velocity`]: crate::components::Paddle::velocity
    pub vel_x: f64,
    /// Effective half-width (skill modifiers already applied).
    pub half_width: f64,
}

/// Directional plane-crossing test.
///
/// A bottom paddle fires when the ball moved from above its plane to on or
/// below it this tick; a top paddle is the mirror. Touching the plane
/// exactly counts as a crossing.
pub fn crossed_plane(side: Side, prev_y: f64, cur_y: f64, plane_y: f64) -> bool {
    match side {
        Side::Bottom => prev_y > plane_y && cur_y <= plane_y,
        Side::Top => prev_y < plane_y && cur_y >= plane_y,
    }
}

/// Broad lateral overlap test against the paddle blade plus ball radius.
pub fn within_lateral_extent(ball_x: f64, plane: &PaddlePlane, ball_radius: f64) -> bool {
    (ball_x - plane.center_x).abs() <= plane.half_width + ball_radius
}

/// Detect a crossing this tick and, if one occurred, resolve the impact.
///
/// On contact the ball's y is clamped exactly onto the plane (so later
/// frames cannot tunnel through), its velocity is mapped into the paddle's
/// contact frame, the impulse resolver runs, and the results are written
/// back in place. Returns whether a contact fired.
pub fn detect_and_resolve(ball: &mut Ball, plane: &PaddlePlane, params: &ContactParams) -> bool {
    if !crossed_plane(plane.side, ball.prev_pos.y, ball.pos.y, plane.plane_y) {
        return false;
    }
    if !within_lateral_extent(ball.pos.x, plane, params.radius) {
        return false;
    }

    let n = plane.side.normal();
    let t = plane.side.tangent();

    let frame = CollisionFrame {
        vn: ball.vel.dot(n),
        vt: ball.vel.dot(t),
        u: plane.vel_x * t.x,
        omega: ball.spin,
    };

    // Only an actual approach is a collision; a ball already separating
    // (e.g. just resolved against this plane) is left alone.
    if frame.vn > 0.0 {
        return false;
    }

    let out = resolver::resolve(&frame, params);

    ball.pos.y = plane.plane_y;
    ball.vel = n * out.vn + t * out.vt;
    ball.spin = out.omega;

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn params() -> ContactParams {
        ContactParams::new(0.9, 0.3, 1.0, 0.02).unwrap()
    }

    fn bottom_plane(center_x: f64) -> PaddlePlane {
        PaddlePlane {
            side: Side::Bottom,
            plane_y: 0.05,
            center_x,
            vel_x: 0.0,
            half_width: 0.08,
        }
    }

    fn ball_crossing_bottom(x: f64) -> Ball {
        let mut ball = Ball::new(DVec2::new(x, 0.04), DVec2::new(0.1, -0.5));
        ball.prev_pos = DVec2::new(x, 0.07);
        ball
    }

    #[test]
    fn test_crossing_requires_direction() {
        assert!(crossed_plane(Side::Bottom, 0.07, 0.04, 0.05));
        assert!(
            !crossed_plane(Side::Bottom, 0.04, 0.07, 0.05),
            "Moving away must not trigger"
        );
        assert!(crossed_plane(Side::Top, 0.93, 0.96, 0.95));
        assert!(!crossed_plane(Side::Top, 0.96, 0.93, 0.95));
    }

    #[test]
    fn test_touching_the_plane_counts() {
        assert!(crossed_plane(Side::Bottom, 0.07, 0.05, 0.05));
        assert!(crossed_plane(Side::Top, 0.93, 0.95, 0.95));
    }

    #[test]
    fn test_lateral_extent_includes_ball_radius() {
        let plane = bottom_plane(0.5);
        assert!(within_lateral_extent(0.5 + 0.08 + 0.019, &plane, 0.02));
        assert!(!within_lateral_extent(0.5 + 0.08 + 0.021, &plane, 0.02));
    }

    #[test]
    fn test_contact_clamps_ball_onto_plane() {
        let mut ball = ball_crossing_bottom(0.5);
        let hit = detect_and_resolve(&mut ball, &bottom_plane(0.5), &params());
        assert!(hit, "Crossing within extent should fire");
        assert_eq!(ball.pos.y, 0.05, "Ball must be clamped exactly onto the plane");
        assert!(ball.vel.y > 0.0, "Ball should rebound away from a bottom paddle");
    }

    #[test]
    fn test_miss_outside_lateral_extent() {
        let mut ball = ball_crossing_bottom(0.8);
        let hit = detect_and_resolve(&mut ball, &bottom_plane(0.5), &params());
        assert!(!hit, "Crossing outside the blade should not fire");
        assert_eq!(ball.vel, DVec2::new(0.1, -0.5), "Missed ball must be untouched");
    }

    #[test]
    fn test_normal_rebound_magnitude() {
        let mut ball = ball_crossing_bottom(0.5);
        detect_and_resolve(&mut ball, &bottom_plane(0.5), &params());
        assert!(
            (ball.vel.y - 0.45).abs() < 1e-9,
            "Bottom rebound should be e*|vy|, got {}",
            ball.vel.y
        );
    }

    #[test]
    fn test_top_paddle_mirrors_bottom() {
        let mut ball = Ball::new(DVec2::new(0.5, 0.96), DVec2::new(0.1, 0.5));
        ball.prev_pos = DVec2::new(0.5, 0.93);
        let plane = PaddlePlane {
            side: Side::Top,
            plane_y: 0.95,
            center_x: 0.5,
            vel_x: 0.0,
            half_width: 0.08,
        };
        let hit = detect_and_resolve(&mut ball, &plane, &params());
        assert!(hit);
        assert_eq!(ball.pos.y, 0.95);
        assert!(ball.vel.y < 0.0, "Ball should rebound away from a top paddle");
        assert!((ball.vel.y + 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_moving_paddle_changes_tangential_velocity() {
        let mut still = ball_crossing_bottom(0.5);
        let mut dragged = ball_crossing_bottom(0.5);

        detect_and_resolve(&mut still, &bottom_plane(0.5), &params());

        let moving = PaddlePlane {
            vel_x: 0.625,
            ..bottom_plane(0.5)
        };
        detect_and_resolve(&mut dragged, &moving, &params());

        assert!(
            (dragged.vel.x - still.vel.x).abs() > 1e-6,
            "A sweeping paddle must alter the tangential outcome"
        );
    }

    #[test]
    fn test_spin_convention_matches_sides() {
        // The frame choice makes the resolver's -R*omega convention hold on
        // both sides, so the same world spin produces mirrored tangential
        // outcomes on opposite paddles.
        let p = ContactParams::new(1.0, 2.0, 1.0, 0.02).unwrap();

        let mut bottom_ball = Ball::new(DVec2::new(0.5, 0.04), DVec2::new(0.0, -0.5));
        bottom_ball.prev_pos = DVec2::new(0.5, 0.07);
        bottom_ball.spin = 40.0;
        detect_and_resolve(&mut bottom_ball, &bottom_plane(0.5), &p);

        let mut top_ball = Ball::new(DVec2::new(0.5, 0.96), DVec2::new(0.0, 0.5));
        top_ball.prev_pos = DVec2::new(0.5, 0.93);
        top_ball.spin = 40.0;
        let top = PaddlePlane {
            side: Side::Top,
            plane_y: 0.95,
            center_x: 0.5,
            vel_x: 0.0,
            half_width: 0.08,
        };
        detect_and_resolve(&mut top_ball, &top, &p);

        assert!(
            (bottom_ball.vel.x + top_ball.vel.x).abs() < 1e-9,
            "Same ccw spin must kick opposite paddles in opposite x directions"
        );
    }

    #[test]
    fn test_separating_ball_is_ignored() {
        // Crossing geometry but velocity already pointing away (can happen
        // after a same-tick resolution): not a collision.
        let mut ball = Ball::new(DVec2::new(0.5, 0.04), DVec2::new(0.1, 0.5));
        ball.prev_pos = DVec2::new(0.5, 0.07);
        let hit = detect_and_resolve(&mut ball, &bottom_plane(0.5), &params());
        assert!(!hit);
    }
}
