//! Impulse-based collision resolution for a spinning ball on a moving plane.
//!
//! A uniform solid sphere strikes a plane that may itself be translating
//! tangentially (a moving paddle). The normal response follows a restitution
//! law; the tangential response either sticks (friction is enough to bring
//! the contact point to rest relative to the plane) or slips (friction
//! saturates at its Coulomb limit).
//!
//! Conventions:
//! - `vn` is the ball velocity along the outward plane normal; negative
//!   means approaching.
//! - `vt` and `u` (plane velocity) lie along the tangent axis; spin `omega`
//!   is counter-clockwise positive and contributes `-R*omega` to the
//!   contact-point tangential velocity.

use crate::config::ContactParams;

/// Pre-collision kinematics decomposed into the contact frame.
///
/// Ephemeral: built per contact event by the detector, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionFrame {
    /// Ball velocity along the outward normal (negative = approaching).
    pub vn: f64,
    /// Ball velocity along the tangent.
    pub vt: f64,
    /// Plane (paddle) velocity along the tangent.
    pub u: f64,
    /// Ball angular velocity, ccw positive.
    pub omega: f64,
}

/// Which friction regime the contact resolved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRegime {
    /// Friction brought the contact point to rest relative to the plane.
    Stick,
    /// Friction saturated at the Coulomb limit while the contact slid.
    Slip,
}

/// Post-collision kinematics in the same contact frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    pub vn: f64,
    pub vt: f64,
    pub omega: f64,
    pub regime: ContactRegime,
}

/// Sign with the zero tie-break resolved as +1.
///
/// The slip branch needs a deterministic direction when the relative
/// sliding velocity is exactly zero; +1 is the documented convention.
fn sign_or_positive(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Resolve a ball/plane impact.
///
/// Pure and total over validated [`ContactParams`]; callers must have
/// rejected zero mass/radius at configuration load.
pub fn resolve(frame: &CollisionFrame, params: &ContactParams) -> Resolved {
    let e = params.restitution;
    let mu = params.friction;
    let m = params.mass;
    let r = params.radius;
    let inertia = params.inertia();

    // Normal restitution law.
    let vn_out = -e * frame.vn;
    let jn = m * (1.0 + e) * frame.vn.abs();

    // Tangential impulse that would exactly enforce rolling without
    // slipping, for a uniform solid sphere (I = 2/5 m R^2 gives the 2/7).
    let jt_stick = (2.0 * m / 7.0) * (frame.u + r * frame.omega - frame.vt);
    let jt_max = mu * jn;

    let (jt, regime) = if jt_stick.abs() <= jt_max {
        (jt_stick, ContactRegime::Stick)
    } else {
        // Coulomb saturation opposing the pre-impulse sliding direction.
        let vrel = (frame.vt - frame.u) - r * frame.omega;
        (-jt_max * sign_or_positive(vrel), ContactRegime::Slip)
    };

    let vt_out = frame.vt + jt / m;
    let omega_out = frame.omega - (r * jt) / inertia;

    tracing::trace!(
        vn_in = frame.vn,
        vn_out,
        jt,
        ?regime,
        "contact resolved"
    );

    Resolved {
        vn: vn_out,
        vt: vt_out,
        omega: omega_out,
        regime,
    }
}
