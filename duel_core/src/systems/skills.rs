use glam::DVec2;
use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::{ActionQueue, GameRng};
use crate::skills::SkillLoadout;
use duel_agent::OverrideAction;

/// Advance every skill clock by real (unscaled) time.
pub fn tick_skill_clocks(world: &mut World, dt: f64) {
    for (_entity, loadout) in world.query_mut::<&mut SkillLoadout>() {
        loadout.update(dt);
    }
}

/// Simulation time scale from active slow-motion skills. With at most one
/// active skill per loadout the strongest (smallest) scale wins if both
/// players somehow slow time at once.
pub fn time_scale(world: &World) -> f64 {
    let mut scale: f64 = 1.0;
    for (_entity, loadout) in world.query::<&SkillLoadout>().iter() {
        scale = scale.min(loadout.time_scale());
    }
    scale
}

/// Map an egocentric override action into world coordinates for one side.
///
/// Forward is the paddle's outward normal (toward the opponent); right is
/// the acting player's own right, which flips with the side they face from.
fn steer_dir(side: Side, action: OverrideAction) -> DVec2 {
    let (lateral, forward) = action.dir();
    side.normal() * forward - side.tangent() * lateral
}

/// If a physics-override skill is active, let it drive the ball for this
/// step and report that the base pipeline must be skipped. The owner's
/// queued override actions steer the ball; the queue's steering lane is
/// drained either way.
pub fn physics_override_step(
    world: &mut World,
    dt: f64,
    config: &Config,
    queue: &mut ActionQueue,
    rng: &mut GameRng,
) -> bool {
    let overrides = std::mem::take(&mut queue.overrides);

    let ball_data = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(e, ball)| (e, *ball))
    };
    let (ball_entity, mut ball) = match ball_data {
        Some(data) => data,
        None => return false,
    };

    let mut driven = false;
    for (_entity, (paddle, loadout)) in world.query_mut::<(&Paddle, &mut SkillLoadout)>() {
        if let Some(chaos) = loadout.physics_override_mut() {
            // Latest steering action from the owning side wins.
            let steer = overrides
                .iter()
                .rev()
                .find(|(side, _)| *side == paddle.side)
                .map(|(side, action)| steer_dir(*side, *action));
            chaos.drive(&mut ball, dt, config.contact.radius, steer, rng);
            driven = true;
            break;
        }
    }

    if driven {
        for (entity, b) in world.query_mut::<&mut Ball>() {
            if entity == ball_entity {
                *b = ball;
                break;
            }
        }
    }
    driven
}
