use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::params::Params;

/// Configuration rejected at load time.
///
/// Everything here is checked once when a [`Config`] is built or loaded;
/// the physics core assumes validated inputs and never re-checks per tick.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("ball mass must be positive, got {0}")]
    NonPositiveMass(f64),
    #[error("ball radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("restitution must lie in [0, 1], got {0}")]
    RestitutionOutOfRange(f64),
    #[error("friction coefficient must be non-negative, got {0}")]
    NegativeFriction(f64),
    #[error("serve speed must be positive, got {0}")]
    NonPositiveServeSpeed(f64),
    #[error("speed-up interval must be at least one bounce")]
    ZeroSpeedupInterval,
    #[error("match must start with at least one life")]
    ZeroLives,
    #[error("{skill} duration must be positive, got {seconds}")]
    NonPositiveSkillDuration { skill: &'static str, seconds: f64 },
    #[error("{skill} cooldown must be non-negative, got {seconds}")]
    NegativeSkillCooldown { skill: &'static str, seconds: f64 },
}

/// Per-contact physical constants for the ball/paddle pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactParams {
    /// Coefficient of restitution, in [0, 1].
    pub restitution: f64,
    /// Coulomb friction coefficient, non-negative.
    pub friction: f64,
    /// Ball mass, positive.
    pub mass: f64,
    /// Ball radius, positive.
    pub radius: f64,
}

impl ContactParams {
    /// Build a validated parameter set.
    pub fn new(restitution: f64, friction: f64, mass: f64, radius: f64) -> Result<Self, ConfigError> {
        let params = Self {
            restitution,
            friction,
            mass,
            radius,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mass > 0.0) {
            return Err(ConfigError::NonPositiveMass(self.mass));
        }
        if !(self.radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius(self.radius));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::RestitutionOutOfRange(self.restitution));
        }
        if !(self.friction >= 0.0) {
            return Err(ConfigError::NegativeFriction(self.friction));
        }
        Ok(())
    }

    /// Moment of inertia of a uniform solid sphere, (2/5) m R^2.
    pub fn inertia(&self) -> f64 {
        0.4 * self.mass * self.radius * self.radius
    }
}

impl Default for ContactParams {
    fn default() -> Self {
        Self {
            restitution: Params::RESTITUTION,
            friction: Params::FRICTION,
            mass: Params::BALL_MASS,
            radius: Params::BALL_RADIUS,
        }
    }
}

/// Initial serve speed and angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServeParams {
    pub speed: f64,
    /// Lateral tilt from the vertical, radians.
    pub angle_rad: f64,
}

impl Default for ServeParams {
    fn default() -> Self {
        Self {
            speed: Params::SERVE_SPEED,
            angle_rad: Params::SERVE_ANGLE_RAD,
        }
    }
}

/// Escalating-difficulty rule: every `every_bounces` paddle bounces the
/// ball speed is multiplied by `factor`, capped at `max_speed`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedupRule {
    pub every_bounces: u32,
    pub factor: f64,
    pub max_speed: f64,
}

impl Default for SpeedupRule {
    fn default() -> Self {
        Self {
            every_bounces: Params::SPEEDUP_EVERY_BOUNCES,
            factor: Params::SPEEDUP_FACTOR,
            max_speed: Params::BALL_SPEED_MAX,
        }
    }
}

/// Lives and the post-round freeze.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundRules {
    pub lives: u8,
    pub freeze_secs: f64,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            lives: Params::LIVES,
            freeze_secs: Params::FREEZE_SECS,
        }
    }
}

/// Shared temporal settings every skill carries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillTiming {
    pub duration_secs: f64,
    pub cooldown_secs: f64,
}

impl SkillTiming {
    fn validate(&self, skill: &'static str) -> Result<(), ConfigError> {
        if !(self.duration_secs > 0.0) {
            return Err(ConfigError::NonPositiveSkillDuration {
                skill,
                seconds: self.duration_secs,
            });
        }
        if !(self.cooldown_secs >= 0.0) {
            return Err(ConfigError::NegativeSkillCooldown {
                skill,
                seconds: self.cooldown_secs,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidenParams {
    pub timing: SkillTiming,
    pub width_factor: f64,
}

impl Default for WidenParams {
    fn default() -> Self {
        Self {
            timing: SkillTiming {
                duration_secs: Params::WIDEN_DURATION_SECS,
                cooldown_secs: Params::WIDEN_COOLDOWN_SECS,
            },
            width_factor: Params::WIDEN_FACTOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlowMotionParams {
    pub timing: SkillTiming,
    pub time_scale: f64,
}

impl Default for SlowMotionParams {
    fn default() -> Self {
        Self {
            timing: SkillTiming {
                duration_secs: Params::SLOWMO_DURATION_SECS,
                cooldown_secs: Params::SLOWMO_COOLDOWN_SECS,
            },
            time_scale: Params::SLOWMO_TIME_SCALE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChaosParams {
    pub timing: SkillTiming,
    pub speed: f64,
    pub retarget_secs: f64,
}

impl Default for ChaosParams {
    fn default() -> Self {
        Self {
            timing: SkillTiming {
                duration_secs: Params::CHAOS_DURATION_SECS,
                cooldown_secs: Params::CHAOS_COOLDOWN_SECS,
            },
            speed: Params::CHAOS_SPEED,
            retarget_secs: Params::CHAOS_RETARGET_SECS,
        }
    }
}

/// Typed per-skill configuration, defaults enumerated explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SkillSet {
    pub widen: WidenParams,
    pub slow_motion: SlowMotionParams,
    pub chaos: ChaosParams,
}

/// Full simulation configuration.
///
/// Immutable after startup; passed by reference into every system. There is
/// no process-wide mutable configuration state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub paddle_half_width: f64,
    pub paddle_speed: f64,
    pub plane_offset: f64,
    pub contact: ContactParams,
    pub serve: ServeParams,
    pub speedup: SpeedupRule,
    pub round: RoundRules,
    pub skills: SkillSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_half_width: Params::PADDLE_HALF_WIDTH,
            paddle_speed: Params::PADDLE_SPEED,
            plane_offset: Params::PLANE_OFFSET,
            contact: ContactParams::default(),
            serve: ServeParams::default(),
            speedup: SpeedupRule::default(),
            round: RoundRules::default(),
            skills: SkillSet::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate every section once, at load time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.contact.validate()?;
        if !(self.serve.speed > 0.0) {
            return Err(ConfigError::NonPositiveServeSpeed(self.serve.speed));
        }
        if self.speedup.every_bounces == 0 {
            return Err(ConfigError::ZeroSpeedupInterval);
        }
        if self.round.lives == 0 {
            return Err(ConfigError::ZeroLives);
        }
        self.skills.widen.timing.validate("widen")?;
        self.skills.slow_motion.timing.validate("slow_motion")?;
        self.skills.chaos.timing.validate("chaos")?;
        if !(self.skills.chaos.retarget_secs > 0.0) {
            return Err(ConfigError::NonPositiveSkillDuration {
                skill: "chaos retarget",
                seconds: self.skills.chaos.retarget_secs,
            });
        }
        Ok(())
    }

    /// Y coordinate of a paddle's contact plane.
    pub fn plane_y(&self, side: Side) -> f64 {
        match side {
            Side::Bottom => self.plane_offset,
            Side::Top => 1.0 - self.plane_offset,
        }
    }

    /// Clamp a paddle's lateral position to keep the blade on the field.
    pub fn clamp_paddle_x(&self, x: f64) -> f64 {
        x.clamp(self.paddle_half_width, 1.0 - self.paddle_half_width)
    }
}
