//! 3-D vector type and heading (yaw) helpers.
//!
//! Waypoint positions are full 3-D coordinates, but movement happens on the
//! ground plane: the y coordinate of a movement target is always replaced by
//! the agent's own height before steering (see [`Vec3::with_y`]).  Heading
//! is a single yaw angle around the vertical axis, rotated toward the travel
//! direction with a slerp-style ease ([`slerp_yaw`]).

/// A position or direction in 3-D space, single precision.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Copy of `self` with the y coordinate replaced — used to project a
    /// waypoint position onto the agent's ground plane.
    #[inline]
    pub fn with_y(self, y: f32) -> Vec3 {
        Vec3 { y, ..self }
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec3) -> f32 {
        (other - self).length()
    }

    /// Unit vector in the direction of `self`, or `None` for (near-)zero
    /// vectors where a direction is undefined.
    pub fn normalized(self) -> Option<Vec3> {
        let len = self.length();
        if len <= f32::EPSILON {
            None
        } else {
            Some(self * (1.0 / len))
        }
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

// ── Yaw helpers ───────────────────────────────────────────────────────────────

/// Yaw angle (radians) of a ground-plane direction: the rotation around the
/// vertical axis that faces `dir`.  The vertical component is ignored.
#[inline]
pub fn yaw_of(dir: Vec3) -> f32 {
    dir.x.atan2(dir.z)
}

/// Interpolate from `current` toward `target` yaw along the shortest arc by
/// fraction `t` (clamped to `[0, 1]`).
///
/// Callers pass `t = rotation_speed * dt`, which gives the same exponential
/// ease as a per-frame orientation slerp: the turn is fast at first and
/// settles asymptotically onto the travel direction.
pub fn slerp_yaw(current: f32, target: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let delta = wrap_angle(target - current);
    wrap_angle(current + delta * t)
}

/// Wrap an angle into `(-π, π]`.
fn wrap_angle(a: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let mut a = a % TAU;
    if a > PI {
        a -= TAU;
    } else if a <= -PI {
        a += TAU;
    }
    a
}
