//! Episode and round bookkeeping.
//!
//! `Serving -> InPlay -> RoundOver -> (Serving | MatchOver)`. A goal-line
//! crossing ends the round; a freeze timer runs while the result is shown;
//! when it expires the conceding side loses a life and either the ball is
//! re-served toward them or, at zero lives, the match is over.

use crate::components::Side;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundPhase {
    /// Ball is about to be served (next tick serves it).
    Serving,
    InPlay,
    /// Freeze-frame after a goal; `conceded` is the side that let it past.
    RoundOver { conceded: Side, t_left: f64 },
    MatchOver { winner: Side },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundState {
    pub phase: RoundPhase,
    /// Paddle bounces this round, for the speed-escalation rule.
    pub bounces: u32,
    /// Serves so far, used to alternate the serve direction.
    pub serve_count: u32,
    /// Which side the next serve travels toward; the conceder receives.
    pub serve_toward: Side,
}

impl RoundState {
    pub fn new() -> Self {
        Self {
            phase: RoundPhase::Serving,
            bounces: 0,
            serve_count: 0,
            serve_toward: Side::Top,
        }
    }

    pub fn is_match_over(&self) -> bool {
        matches!(self.phase, RoundPhase::MatchOver { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            RoundPhase::MatchOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// A goal was conceded: freeze the round.
    pub fn goal_conceded(&mut self, conceded: Side, freeze_secs: f64) {
        tracing::debug!(?conceded, "round over");
        self.phase = RoundPhase::RoundOver {
            conceded,
            t_left: freeze_secs,
        };
    }

    /// Advance the freeze timer. Returns the conceding side once the
    /// freeze has just elapsed; the caller decrements lives and chooses
    /// between re-serving and ending the match.
    pub fn tick_freeze(&mut self, dt: f64) -> Option<Side> {
        if let RoundPhase::RoundOver { conceded, t_left } = self.phase {
            let t_left = t_left - dt;
            if t_left <= 0.0 {
                return Some(conceded);
            }
            self.phase = RoundPhase::RoundOver { conceded, t_left };
        }
        None
    }

    /// The conceding side still has lives: go back to serving, toward them.
    pub fn next_round(&mut self, serve_toward: Side) {
        self.phase = RoundPhase::Serving;
        self.bounces = 0;
        self.serve_toward = serve_toward;
    }

    /// Terminal: a side ran out of lives.
    pub fn match_over(&mut self, winner: Side) {
        tracing::debug!(?winner, "match over");
        self.phase = RoundPhase::MatchOver { winner };
    }

    /// The serve happened; play begins.
    pub fn serve_done(&mut self) {
        self.serve_count += 1;
        self.phase = RoundPhase::InPlay;
    }

    /// Record a paddle bounce; returns true when the escalation rule says
    /// the ball should speed up.
    pub fn record_bounce(&mut self, every_bounces: u32) -> bool {
        self.bounces += 1;
        self.bounces % every_bounces == 0
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}
