/// Default tuning parameters for the duel simulation.
///
/// The playing field is the normalized square [0,1] x [0,1]; paddles sit on
/// horizontal planes near the bottom and top edges and move laterally.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Paddle
    pub const PADDLE_HALF_WIDTH: f64 = 0.08;
    pub const PADDLE_SPEED: f64 = 0.9; // field units per second
    pub const PLANE_OFFSET: f64 = 0.05; // contact plane distance from the edge

    // Ball
    pub const BALL_RADIUS: f64 = 0.02;
    pub const BALL_MASS: f64 = 1.0;
    pub const RESTITUTION: f64 = 0.92;
    pub const FRICTION: f64 = 0.25;

    // Serve
    pub const SERVE_SPEED: f64 = 0.6;
    pub const SERVE_ANGLE_RAD: f64 = 0.6; // lateral tilt from straight up/down

    // Escalation
    pub const SPEEDUP_EVERY_BOUNCES: u32 = 4;
    pub const SPEEDUP_FACTOR: f64 = 1.08;
    pub const BALL_SPEED_MAX: f64 = 1.6;

    // Round
    pub const LIVES: u8 = 3;
    pub const FREEZE_SECS: f64 = 1.0;

    // Skills
    pub const WIDEN_FACTOR: f64 = 1.6;
    pub const WIDEN_DURATION_SECS: f64 = 4.0;
    pub const WIDEN_COOLDOWN_SECS: f64 = 8.0;
    pub const SLOWMO_TIME_SCALE: f64 = 0.5;
    pub const SLOWMO_DURATION_SECS: f64 = 3.0;
    pub const SLOWMO_COOLDOWN_SECS: f64 = 10.0;
    pub const CHAOS_SPEED: f64 = 0.8;
    pub const CHAOS_RETARGET_SECS: f64 = 0.4;
    pub const CHAOS_DURATION_SECS: f64 = 3.0;
    pub const CHAOS_COOLDOWN_SECS: f64 = 12.0;

    // Physics stepping
    pub const FIXED_DT: f64 = 0.0166; // ~60 Hz
    pub const MAX_DT: f64 = 0.1; // Clamp to prevent large jumps
}
