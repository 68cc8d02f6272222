use hecs::World;

use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::physics::contact::{detect_and_resolve, PaddlePlane};
use crate::resources::Events;
use crate::round::RoundState;
use crate::skills::SkillLoadout;

/// Reflect the ball off the side walls of the field.
pub fn check_walls(world: &mut World, config: &Config, events: &mut Events) {
    let radius = config.contact.radius;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x - radius <= 0.0 && ball.vel.x < 0.0 {
            ball.pos.x = radius;
            ball.vel.x = -ball.vel.x;
            events.ball_hit_wall = true;
        } else if ball.pos.x + radius >= 1.0 && ball.vel.x > 0.0 {
            ball.pos.x = 1.0 - radius;
            ball.vel.x = -ball.vel.x;
            events.ball_hit_wall = true;
        }
    }
}

/// Check the ball against both paddle planes and resolve any impact.
///
/// On a bounce the escalation rule may scale the ball's speed up; the
/// scaling multiplies the full velocity so the rebound direction holds.
pub fn check_paddle_contacts(
    world: &mut World,
    config: &Config,
    round: &mut RoundState,
    events: &mut Events,
    dt: f64,
) {
    // Collect contact planes first; widen skills stretch the blade.
    let mut planes: Vec<PaddlePlane> = Vec::with_capacity(2);
    for (_entity, (paddle, loadout)) in world.query::<(&Paddle, &SkillLoadout)>().iter() {
        planes.push(PaddlePlane {
            side: paddle.side,
            plane_y: config.plane_y(paddle.side),
            center_x: paddle.x,
            vel_x: paddle.velocity(dt),
            half_width: config.paddle_half_width * loadout.width_factor(),
        });
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for plane in &planes {
            if detect_and_resolve(ball, plane, &config.contact) {
                events.ball_hit_paddle = true;
                if round.record_bounce(config.speedup.every_bounces) {
                    let speed = ball.vel.length();
                    if speed > 0.0 {
                        let new_speed = (speed * config.speedup.factor).min(config.speedup.max_speed);
                        ball.vel *= new_speed / speed;
                        events.ball_sped_up = true;
                    }
                }
                break;
            }
        }
    }
}
