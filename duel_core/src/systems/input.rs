use hecs::World;

use crate::components::{Paddle, PaddleIntent};
use crate::resources::ActionQueue;

/// Turn queued discrete actions into paddle intents.
///
/// The latest action per side wins within a tick; sides without an action
/// keep a zero intent (the deterministic fallback is pushed by the caller
/// as `Action::Stay`, which maps to the same thing). Override-skill
/// steering actions are left in the queue for the physics-override step.
pub fn ingest_actions(world: &mut World, queue: &mut ActionQueue) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.dir = 0;
        for (side, action) in &queue.actions {
            if *side == paddle.side {
                intent.dir = action.dir();
            }
        }
    }
    queue.actions.clear();
}
