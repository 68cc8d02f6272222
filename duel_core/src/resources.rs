use crate::components::Side;
use duel_agent::{Action, OverrideAction};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f64,  // Delta time for this step
    pub now: f64, // Total elapsed time
}

impl Time {
    pub fn new(dt: f64, now: f64) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.016, now: 0.0 }
    }
}

/// Seeded random number generator; one seed reproduces one match.
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn gen_range(&mut self, min: f64, max: f64) -> f64 {
        use rand::Rng;
        self.0.gen_range(min..max)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Facts recorded during one simulation step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub ball_sped_up: bool,
    pub served: bool,
    /// A goal line was crossed against this side.
    pub goal_against: Option<Side>,
    /// This side lost a life when the freeze ended.
    pub life_lost: Option<Side>,
    /// The match ended with this winner.
    pub match_over: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Queued discrete actions, one per side per tick.
///
/// Paddle actions and override-skill steering actions are separate lanes:
/// the input system drains the former, the physics-override step the
/// latter.
#[derive(Debug, Clone, Default)]
pub struct ActionQueue {
    pub actions: Vec<(Side, Action)>,
    pub overrides: Vec<(Side, OverrideAction)>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, side: Side, action: Action) {
        self.actions.push((side, action));
    }

    pub fn push_override(&mut self, side: Side, action: OverrideAction) {
        self.overrides.push((side, action));
    }

    pub fn clear(&mut self) {
        self.actions.clear();
        self.overrides.clear();
    }
}
