use hecs::World;

use crate::components::{Ball, Side};
use crate::resources::Events;

/// Check whether the ball crossed a goal line this step.
///
/// A goal line is the field edge behind a paddle; reaching it means the
/// contact detector did not fire on the way through the paddle plane.
pub fn check_goal(world: &mut World, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for side in [Side::Bottom, Side::Top] {
            if side.goal_crossed(ball.pos.y) {
                events.goal_against = Some(side);
                tracing::debug!(?side, "goal conceded");
            }
        }
    }
}
