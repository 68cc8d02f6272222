use crate::config::WidenParams;

/// Multiplies the owner's effective paddle width while active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidenPaddle {
    pub width_factor: f64,
}

impl WidenPaddle {
    pub fn new(params: WidenParams) -> Self {
        Self {
            width_factor: params.width_factor,
        }
    }
}
