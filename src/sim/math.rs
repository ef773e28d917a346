use glam::Vec3;

/// Below this length a vector is treated as zero. Every normalization in the
/// simulation goes through this threshold so no code path divides by zero.
pub const LENGTH_EPSILON: f32 = 1e-9;

/// Point on a circle of `radius` around the origin, in the XY plane.
pub fn point_on_circle(angle: f32, radius: f32) -> Vec3 {
    Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
}

/// `v` scaled to unit length, or `Vec3::ZERO` for degenerate input.
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    let len = v.length();
    if len < LENGTH_EPSILON {
        Vec3::ZERO
    } else {
        v / len
    }
}

/// Orthogonal projection of `a` onto the direction of `b`.
/// Total over all inputs: a degenerate `b` projects to the zero vector.
pub fn project(a: Vec3, b: Vec3) -> Vec3 {
    let b_hat = normalize_or_zero(b);
    b_hat * a.dot(b_hat)
}

/// Reflect `incident` across the plane with unit normal `normal`.
/// `normal` must already be unit length (Wall::new guarantees this).
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * normal.dot(incident) * normal
}
