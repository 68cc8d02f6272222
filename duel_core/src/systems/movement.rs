use hecs::World;

use crate::components::{Ball, Paddle, PaddleIntent};
use crate::config::Config;

/// Apply paddle movement based on intents.
///
/// `prev_x` is always refreshed, even for a held paddle, so a later contact
/// derives the correct (possibly zero) paddle velocity for this step.
pub fn move_paddles(world: &mut World, dt: f64, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.prev_x = paddle.x;
        if intent.dir != 0 {
            let delta = intent.dir as f64 * config.paddle_speed * dt;
            paddle.x = config.clamp_paddle_x(paddle.x + delta);
        }
    }
}

/// Integrate the ball one step, keeping the previous position for the
/// plane-crossing test.
pub fn move_ball(world: &mut World, dt: f64) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.prev_pos = ball.pos;
        ball.pos += ball.vel * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Side;
    use glam::DVec2;

    #[test]
    fn test_paddle_moves_by_intent() {
        let mut world = World::new();
        let config = Config::new();
        world.spawn((Paddle::new(Side::Bottom, 0.5), PaddleIntent { dir: 1 }));

        move_paddles(&mut world, 0.1, &config);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert!((paddle.x - (0.5 + config.paddle_speed * 0.1)).abs() < 1e-12);
            assert_eq!(paddle.prev_x, 0.5, "prev_x holds the pre-step position");
        }
    }

    #[test]
    fn test_paddle_clamped_to_field() {
        let mut world = World::new();
        let config = Config::new();
        world.spawn((Paddle::new(Side::Bottom, 0.99), PaddleIntent { dir: 1 }));

        move_paddles(&mut world, 1.0, &config);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert_eq!(paddle.x, 1.0 - config.paddle_half_width);
        }
    }

    #[test]
    fn test_held_paddle_refreshes_prev_x() {
        let mut world = World::new();
        let config = Config::new();
        let mut paddle = Paddle::new(Side::Bottom, 0.5);
        paddle.prev_x = 0.3; // stale from a previous step
        world.spawn((paddle, PaddleIntent { dir: 0 }));

        move_paddles(&mut world, 0.1, &config);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert_eq!(paddle.prev_x, 0.5, "A held paddle must read as stationary");
        }
    }

    #[test]
    fn test_ball_integration_keeps_prev_pos() {
        let mut world = World::new();
        world.spawn((Ball::new(DVec2::new(0.5, 0.5), DVec2::new(0.1, -0.2)),));

        move_ball(&mut world, 0.5);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.prev_pos, DVec2::new(0.5, 0.5));
            assert!((ball.pos.x - 0.55).abs() < 1e-12);
            assert!((ball.pos.y - 0.4).abs() < 1e-12);
        }
    }
}
