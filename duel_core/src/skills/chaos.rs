use glam::DVec2;

use crate::components::Ball;
use crate::config::ChaosParams;
use crate::resources::GameRng;

/// Physics-override skill: while active the ball ignores paddle contacts
/// and normal integration. The owner may steer it with override actions;
/// without steering it re-targets a random direction at a fixed cadence.
/// Scoring stays the usual goal-line crossing, so the owner gambles on the
/// ball veering past the opponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaosBall {
    pub speed: f64,
    pub retarget_secs: f64,
    t_since_retarget: f64,
}

impl ChaosBall {
    pub fn new(params: ChaosParams) -> Self {
        Self {
            speed: params.speed,
            retarget_secs: params.retarget_secs,
            // Saturated so the first drive after activation retargets.
            t_since_retarget: params.retarget_secs,
        }
    }

    /// Drive the ball for one step, replacing the base pipeline.
    ///
    /// `steer` is a world-frame direction from the owner's override action;
    /// a zero or absent direction falls back to the random re-target
    /// cadence.
    pub fn drive(
        &mut self,
        ball: &mut Ball,
        dt: f64,
        radius: f64,
        steer: Option<DVec2>,
        rng: &mut GameRng,
    ) {
        self.t_since_retarget += dt;

        match steer.filter(|dir| *dir != DVec2::ZERO) {
            Some(dir) => {
                self.t_since_retarget = 0.0;
                ball.vel = dir.normalize() * self.speed;
                ball.spin = 0.0;
            }
            None => {
                if self.t_since_retarget >= self.retarget_secs || ball.vel == DVec2::ZERO {
                    self.t_since_retarget = 0.0;
                    let angle = rng.gen_range(0.0, std::f64::consts::TAU);
                    ball.vel = DVec2::new(angle.cos(), angle.sin()) * self.speed;
                    ball.spin = 0.0;
                }
            }
        }

        ball.prev_pos = ball.pos;
        ball.pos += ball.vel * dt;

        // Side walls reflect at the ball's edge, matching the base
        // pipeline; goal lines are left to the scorer.
        if ball.pos.x < radius {
            ball.pos.x = 2.0 * radius - ball.pos.x;
            ball.vel.x = -ball.vel.x;
        } else if ball.pos.x > 1.0 - radius {
            ball.pos.x = 2.0 * (1.0 - radius) - ball.pos.x;
            ball.vel.x = -ball.vel.x;
        }
    }
}
