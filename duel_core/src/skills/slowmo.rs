use crate::config::SlowMotionParams;

/// Scales the physics timestep while active. Skill clocks keep running in
/// real time, so slow motion cannot extend its own duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlowMotion {
    pub time_scale: f64,
}

impl SlowMotion {
    pub fn new(params: SlowMotionParams) -> Self {
        Self {
            time_scale: params.time_scale,
        }
    }
}
