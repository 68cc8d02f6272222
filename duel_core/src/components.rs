use glam::DVec2;

/// Which edge of the field a paddle defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Bottom,
    Top,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Bottom => Side::Top,
            Side::Top => Side::Bottom,
        }
    }

    /// Outward contact normal of this side's paddle plane.
    pub fn normal(self) -> DVec2 {
        match self {
            Side::Bottom => DVec2::new(0.0, 1.0),
            Side::Top => DVec2::new(0.0, -1.0),
        }
    }

    /// Tangent axis of the contact frame, chosen as z-hat cross normal so
    /// that spin contributes exactly -R*omega to the contact-point velocity
    /// on both sides.
    pub fn tangent(self) -> DVec2 {
        match self {
            Side::Bottom => DVec2::new(-1.0, 0.0),
            Side::Top => DVec2::new(1.0, 0.0),
        }
    }

    /// True if a ball at this y position is past this side's goal line.
    pub fn goal_crossed(self, y: f64) -> bool {
        match self {
            Side::Bottom => y < 0.0,
            Side::Top => y > 1.0,
        }
    }
}

/// Ball component: a spinning rigid sphere in normalized field coordinates.
///
/// Spin is a scalar angular velocity, counter-clockwise positive.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: DVec2,
    pub prev_pos: DVec2,
    pub vel: DVec2,
    pub spin: f64,
}

impl Ball {
    pub fn new(pos: DVec2, vel: DVec2) -> Self {
        Self {
            pos,
            prev_pos: pos,
            vel,
            spin: 0.0,
        }
    }

    /// Place the ball at center field and serve toward `toward`.
    ///
    /// The lateral direction of the serve alternates by `serve_count` so a
    /// fixed configuration reproduces an identical trajectory.
    pub fn serve(&mut self, speed: f64, angle_rad: f64, toward: Side, serve_count: u32) {
        let lateral = if serve_count % 2 == 0 { 1.0 } else { -1.0 };
        let vertical = match toward {
            Side::Bottom => -1.0,
            Side::Top => 1.0,
        };
        self.pos = DVec2::new(0.5, 0.5);
        self.prev_pos = self.pos;
        self.vel = DVec2::new(
            lateral * angle_rad.sin() * speed,
            vertical * angle_rad.cos() * speed,
        );
        self.spin = 0.0;
    }
}

/// Paddle component. Lateral position only; the contact plane y comes from
/// configuration. `prev_x` is kept so contacts can derive the paddle's
/// instantaneous velocity.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f64,
    pub prev_x: f64,
}

impl Paddle {
    pub fn new(side: Side, x: f64) -> Self {
        Self { side, x, prev_x: x }
    }

    /// Instantaneous lateral velocity over the last step.
    pub fn velocity(&self, dt: f64) -> f64 {
        if dt > 0.0 {
            (self.x - self.prev_x) / dt
        } else {
            0.0
        }
    }
}

/// Remaining lives for one player.
#[derive(Debug, Clone, Copy)]
pub struct Lives {
    pub remaining: u8,
}

impl Lives {
    pub fn new(remaining: u8) -> Self {
        Self { remaining }
    }

    pub fn lose_one(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_out(&self) -> bool {
        self.remaining == 0
    }
}

/// Movement intent for a paddle: -1 = left, 0 = stay, 1 = right.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Bottom.opponent(), Side::Top);
        assert_eq!(Side::Top.opponent(), Side::Bottom);
    }

    #[test]
    fn test_contact_frame_is_right_handed() {
        // tangent = z-hat cross normal on both sides
        for side in [Side::Bottom, Side::Top] {
            let n = side.normal();
            let t = side.tangent();
            assert_eq!(t, DVec2::new(-n.y, n.x), "tangent must be z-hat cross normal");
        }
    }

    #[test]
    fn test_goal_crossed() {
        assert!(Side::Bottom.goal_crossed(-0.01));
        assert!(!Side::Bottom.goal_crossed(0.01));
        assert!(Side::Top.goal_crossed(1.01));
        assert!(!Side::Top.goal_crossed(0.99));
    }

    #[test]
    fn test_serve_alternates_lateral_direction() {
        let mut ball = Ball::new(DVec2::ZERO, DVec2::ZERO);
        ball.serve(0.6, 0.6, Side::Top, 0);
        let first_vx = ball.vel.x;
        ball.serve(0.6, 0.6, Side::Top, 1);
        assert!(
            (ball.vel.x + first_vx).abs() < 1e-12,
            "Consecutive serves should mirror laterally"
        );
    }

    #[test]
    fn test_serve_direction_and_speed() {
        let mut ball = Ball::new(DVec2::ZERO, DVec2::ZERO);
        ball.serve(0.6, 0.6, Side::Bottom, 0);
        assert!(ball.vel.y < 0.0, "Serve toward bottom should move down");
        assert!((ball.vel.length() - 0.6).abs() < 1e-12, "Serve speed should match config");
        assert_eq!(ball.spin, 0.0, "Serve should clear spin");
        assert_eq!(ball.pos, DVec2::new(0.5, 0.5));
    }

    #[test]
    fn test_paddle_velocity_from_displacement() {
        let mut paddle = Paddle::new(Side::Bottom, 0.5);
        paddle.prev_x = 0.4;
        assert!((paddle.velocity(0.1) - 1.0).abs() < 1e-12);
        assert_eq!(paddle.velocity(0.0), 0.0, "Zero dt must not divide");
    }

    #[test]
    fn test_lives_saturate_at_zero() {
        let mut lives = Lives::new(1);
        lives.lose_one();
        assert!(lives.is_out());
        lives.lose_one();
        assert_eq!(lives.remaining, 0, "Lives must not underflow");
    }
}
