//! Agent boundary for the duel simulation.
//!
//! The simulation treats an opponent controller as an opaque function from
//! an observation vector to a discrete action. A pretrained policy network
//! lives behind the [`Policy`] trait; how its weights are loaded is not this
//! crate's concern. A deterministic scripted policy is provided both as a
//! baseline opponent and as the test stand-in for a real network.

use serde::{Deserialize, Serialize};

/// Number of floats in an observation vector.
pub const OBS_LEN: usize = 8;

/// Fixed-size observation handed to a policy each tick.
///
/// Layout: ball x, ball y, ball vx, ball vy, ball spin, own paddle x,
/// opponent paddle x, side flag (0 = bottom, 1 = top). Positions are in
/// normalized field coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation(pub [f64; OBS_LEN]);

impl Observation {
    pub fn ball_x(&self) -> f64 {
        self.0[0]
    }

    pub fn own_paddle_x(&self) -> f64 {
        self.0[5]
    }
}

/// Discrete paddle action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Left,
    Stay,
    Right,
}

impl Action {
    /// Lateral direction: -1 = left, 0 = stay, 1 = right.
    pub fn dir(self) -> i8 {
        match self {
            Action::Left => -1,
            Action::Stay => 0,
            Action::Right => 1,
        }
    }
}

/// Extended action space used by skills that take over ball movement.
///
/// Directions are egocentric: forward points at the opponent, right is the
/// acting player's own right hand. The simulation maps them into world
/// coordinates per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverrideAction {
    Forward,
    Back,
    Left,
    Right,
    Stay,
}

impl OverrideAction {
    /// Egocentric (lateral, forward) direction; `Stay` is the zero vector.
    pub fn dir(self) -> (f64, f64) {
        match self {
            OverrideAction::Forward => (0.0, 1.0),
            OverrideAction::Back => (0.0, -1.0),
            OverrideAction::Left => (-1.0, 0.0),
            OverrideAction::Right => (1.0, 0.0),
            OverrideAction::Stay => (0.0, 0.0),
        }
    }
}

/// Policy failure at the external boundary.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// The backing model could not produce an action (missing checkpoint,
    /// backend gone, malformed output).
    #[error("policy backend unavailable: {0}")]
    Unavailable(String),
}

/// Opaque observation -> action oracle.
pub trait Policy {
    fn select_action(&mut self, obs: &Observation) -> Result<Action, PolicyError>;
}

/// Select an action, substituting a deterministic fallback on failure.
///
/// A broken policy must never crash the simulation tick; the paddle simply
/// holds position for that tick.
pub fn select_or_fallback(policy: &mut dyn Policy, obs: &Observation) -> Action {
    match policy.select_action(obs) {
        Ok(action) => action,
        Err(err) => {
            tracing::warn!(%err, "policy failed, holding position");
            Action::Stay
        }
    }
}

/// Scripted baseline: chase the ball's x position with a dead zone.
#[derive(Debug, Clone, Copy)]
pub struct TrackingPolicy {
    /// Half-width of the band around the paddle center in which the policy
    /// stays put instead of jittering left/right.
    pub dead_zone: f64,
}

impl TrackingPolicy {
    pub fn new(dead_zone: f64) -> Self {
        Self { dead_zone }
    }
}

impl Default for TrackingPolicy {
    fn default() -> Self {
        Self::new(0.02)
    }
}

impl Policy for TrackingPolicy {
    fn select_action(&mut self, obs: &Observation) -> Result<Action, PolicyError> {
        let delta = obs.ball_x() - obs.own_paddle_x();
        if delta > self.dead_zone {
            Ok(Action::Right)
        } else if delta < -self.dead_zone {
            Ok(Action::Left)
        } else {
            Ok(Action::Stay)
        }
    }
}
