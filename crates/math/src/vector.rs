use glam::Vec3;

/// A point or a direction in 3D space. No separate type distinguishes the two.
pub type Vector3 = Vec3;

/// Scale `v` to unit length in place.
///
/// A zero vector has no direction; normalizing one yields NaN components.
/// Callers guard against that, this function does not.
pub fn normalize(v: &mut Vector3) {
    let length = (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
    v.x /= length;
    v.y /= length;
    v.z /= length;
}

/// By-value form of [`normalize`].
pub fn normalized(mut v: Vector3) -> Vector3 {
    normalize(&mut v);
    v
}

/// Cross product `a × b`. The result is not normalized.
///
/// Inputs are taken by value so the output can never alias them.
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    Vec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Horizontal vector perpendicular to `dir`, pointing to its right.
///
/// Equal to `cross(dir, Y)` written out: `(-dir.z, 0, dir.x)`. Its length is the
/// length of the horizontal part of `dir`, so it is not unit for tilted directions.
pub fn horizontal_perpendicular(dir: Vector3) -> Vector3 {
    Vec3::new(-dir.z, 0.0, dir.x)
}
