//! Time-boxed skills layered over the base simulation.
//!
//! Every skill shares one temporal contract: ready -> active for a fixed
//! duration -> cooling down -> ready. What a skill *does* while active is a
//! tagged variant so the tick pipeline can dispatch statically, in
//! particular on whether a skill owns ball integration this tick.

pub mod chaos;
pub mod slowmo;
pub mod widen;

pub use chaos::ChaosBall;
pub use slowmo::SlowMotion;
pub use widen::WidenPaddle;

use crate::config::{SkillSet, SkillTiming};

/// Identity of a skill within a loadout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillKind {
    WidenPaddle,
    SlowMotion,
    ChaosBall,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SkillPhase {
    Ready,
    Active { t_left: f64 },
    Cooldown { t_left: f64 },
}

/// The shared activate/update/deactivate state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillClock {
    duration: f64,
    cooldown: f64,
    phase: SkillPhase,
}

impl SkillClock {
    pub fn new(timing: SkillTiming) -> Self {
        Self {
            duration: timing.duration_secs,
            cooldown: timing.cooldown_secs,
            phase: SkillPhase::Ready,
        }
    }

    /// Start the active window. Returns false (and does nothing) if the
    /// skill is already active or still cooling down.
    pub fn activate(&mut self) -> bool {
        match self.phase {
            SkillPhase::Ready => {
                self.phase = SkillPhase::Active {
                    t_left: self.duration,
                };
                true
            }
            _ => false,
        }
    }

    /// Cut the active window short. Safe to call in any phase; calling it
    /// twice is the same as calling it once.
    pub fn deactivate(&mut self) {
        if let SkillPhase::Active { .. } = self.phase {
            self.phase = SkillPhase::Cooldown {
                t_left: self.cooldown,
            };
        }
    }

    pub fn update(&mut self, dt: f64) {
        match self.phase {
            SkillPhase::Active { t_left } => {
                let t_left = t_left - dt;
                if t_left <= 0.0 {
                    self.phase = SkillPhase::Cooldown {
                        t_left: self.cooldown,
                    };
                } else {
                    self.phase = SkillPhase::Active { t_left };
                }
            }
            SkillPhase::Cooldown { t_left } => {
                let t_left = t_left - dt;
                if t_left <= 0.0 {
                    self.phase = SkillPhase::Ready;
                } else {
                    self.phase = SkillPhase::Cooldown { t_left };
                }
            }
            SkillPhase::Ready => {}
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, SkillPhase::Active { .. })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, SkillPhase::Ready)
    }

    /// Seconds until the skill is usable again; zero when ready.
    pub fn cooldown_seconds(&self) -> f64 {
        match self.phase {
            SkillPhase::Ready => 0.0,
            SkillPhase::Active { t_left } => t_left + self.cooldown,
            SkillPhase::Cooldown { t_left } => t_left,
        }
    }

    /// Normalized availability in [0, 1]: counts 1 -> 0 while active and
    /// 0 -> 1 while cooling down; 1 when ready.
    pub fn energy_ratio(&self) -> f64 {
        match self.phase {
            SkillPhase::Ready => 1.0,
            SkillPhase::Active { t_left } => (t_left / self.duration).clamp(0.0, 1.0),
            SkillPhase::Cooldown { t_left } => {
                if self.cooldown <= 0.0 {
                    1.0
                } else {
                    (1.0 - t_left / self.cooldown).clamp(0.0, 1.0)
                }
            }
        }
    }
}

/// What a skill does while its clock is active.
///
/// `ChaosBall` is the physics-override variant: while active it owns ball
/// integration and scoring outright instead of modifying the base pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkillEffect {
    WidenPaddle(WidenPaddle),
    SlowMotion(SlowMotion),
    ChaosBall(ChaosBall),
}

/// One skill in a player's loadout: an effect plus its clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skill {
    pub kind: SkillKind,
    pub clock: SkillClock,
    pub effect: SkillEffect,
}

impl Skill {
    pub fn activate(&mut self) -> bool {
        self.clock.activate()
    }

    pub fn deactivate(&mut self) {
        self.clock.deactivate()
    }

    pub fn update(&mut self, dt: f64) {
        self.clock.update(dt);
    }

    pub fn is_active(&self) -> bool {
        self.clock.is_active()
    }

    pub fn cooldown_seconds(&self) -> f64 {
        self.clock.cooldown_seconds()
    }

    pub fn energy_ratio(&self) -> f64 {
        self.clock.energy_ratio()
    }

    /// True if this skill, when active, takes over ball integration.
    pub fn overrides_physics(&self) -> bool {
        matches!(self.effect, SkillEffect::ChaosBall(_))
    }
}

/// A player's skills. At most one may be active at a time.
#[derive(Debug, Clone, Default)]
pub struct SkillLoadout {
    pub skills: Vec<Skill>,
}

impl SkillLoadout {
    /// The standard three-skill loadout from configuration.
    pub fn standard(set: &SkillSet) -> Self {
        Self {
            skills: vec![
                Skill {
                    kind: SkillKind::WidenPaddle,
                    clock: SkillClock::new(set.widen.timing),
                    effect: SkillEffect::WidenPaddle(WidenPaddle::new(set.widen)),
                },
                Skill {
                    kind: SkillKind::SlowMotion,
                    clock: SkillClock::new(set.slow_motion.timing),
                    effect: SkillEffect::SlowMotion(SlowMotion::new(set.slow_motion)),
                },
                Skill {
                    kind: SkillKind::ChaosBall,
                    clock: SkillClock::new(set.chaos.timing),
                    effect: SkillEffect::ChaosBall(ChaosBall::new(set.chaos)),
                },
            ],
        }
    }

    pub fn get(&self, kind: SkillKind) -> Option<&Skill> {
        self.skills.iter().find(|s| s.kind == kind)
    }

    pub fn get_mut(&mut self, kind: SkillKind) -> Option<&mut Skill> {
        self.skills.iter_mut().find(|s| s.kind == kind)
    }

    pub fn any_active(&self) -> bool {
        self.skills.iter().any(|s| s.is_active())
    }

    /// Activate a skill; refuses while any other skill in the loadout is
    /// active, or while the skill itself is not ready.
    pub fn activate(&mut self, kind: SkillKind) -> bool {
        if self.any_active() {
            return false;
        }
        match self.get_mut(kind) {
            Some(skill) => skill.activate(),
            None => false,
        }
    }

    pub fn update(&mut self, dt: f64) {
        for skill in &mut self.skills {
            skill.update(dt);
        }
    }

    /// Paddle width multiplier from any active widen skill.
    pub fn width_factor(&self) -> f64 {
        for skill in &self.skills {
            if let SkillEffect::WidenPaddle(widen) = skill.effect {
                if skill.is_active() {
                    return widen.width_factor;
                }
            }
        }
        1.0
    }

    /// Simulation time scale from any active slow-motion skill.
    pub fn time_scale(&self) -> f64 {
        for skill in &self.skills {
            if let SkillEffect::SlowMotion(slowmo) = skill.effect {
                if skill.is_active() {
                    return slowmo.time_scale;
                }
            }
        }
        1.0
    }

    /// The active physics-override effect, if any.
    pub fn physics_override_mut(&mut self) -> Option<&mut ChaosBall> {
        for skill in &mut self.skills {
            if skill.is_active() {
                if let SkillEffect::ChaosBall(ref mut chaos) = skill.effect {
                    return Some(chaos);
                }
            }
        }
        None
    }
}
