use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};

use crate::vector::{Vector3, cross, normalize};

/// 4×4 transform stored as 16 floats in column-major order.
///
/// Element (column `c`, row `r`) lives at flat index `4 * c + r`, the layout
/// OpenGL-style uniform uploads expect without transposition.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Matrix4(pub [f32; 16]);

impl Matrix4 {
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, // column 0
        0.0, 1.0, 0.0, 0.0, // column 1
        0.0, 0.0, 1.0, 0.0, // column 2
        0.0, 0.0, 0.0, 1.0, // column 3
    ]);

    pub const ZERO: Self = Self([0.0; 16]);

    /// Element at (column, row).
    pub fn get(&self, column: usize, row: usize) -> f32 {
        self.0[4 * column + row]
    }

    /// Overwrite the element at (column, row).
    pub fn set(&mut self, column: usize, row: usize, value: f32) {
        self.0[4 * column + row] = value;
    }

    /// The 16 floats in upload order.
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn to_cols_array(&self) -> [f32; 16] {
        self.0
    }

    /// Column-grouped copy, the shape GPU uniform structs use.
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        let m = &self.0;
        [
            [m[0], m[1], m[2], m[3]],
            [m[4], m[5], m[6], m[7]],
            [m[8], m[9], m[10], m[11]],
            [m[12], m[13], m[14], m[15]],
        ]
    }

    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_cols_array(&self.0)
    }

    /// Apply the transform to a homogeneous column vector.
    pub fn transform_vec4(&self, v: Vec4) -> Vec4 {
        self.to_mat4() * v
    }

    /// True if every element differs from `other` by at most `max_abs_diff`.
    pub fn abs_diff_eq(&self, other: &Self, max_abs_diff: f32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() <= max_abs_diff)
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Matrix4> for Mat4 {
    fn from(m: Matrix4) -> Self {
        m.to_mat4()
    }
}

impl From<Mat4> for Matrix4 {
    fn from(m: Mat4) -> Self {
        Self(m.to_cols_array())
    }
}

/// The 4×4 identity.
pub fn identity() -> Matrix4 {
    Matrix4::IDENTITY
}

/// View-space translation for a camera at `position`.
///
/// Moves the world opposite to the camera: column 3 holds `-position`.
pub fn translation(position: Vector3) -> Matrix4 {
    let mut m = Matrix4::IDENTITY;
    m.set(3, 0, -position.x);
    m.set(3, 1, -position.y);
    m.set(3, 2, -position.z);
    m
}

/// Rotation into camera orientation for a camera looking along `look_dir`.
///
/// Builds the right-handed basis `side = normalize(look_dir × world_up)`,
/// `relative_up = side × look_dir` and stores `side`, `relative_up` and
/// `-look_dir` as rows 0, 1 and 2 of the rotation block. No translation.
///
/// `look_dir` must already be unit length and not parallel to `world_up`;
/// otherwise the basis is silently wrong.
pub fn view(look_dir: Vector3, world_up: Vector3) -> Matrix4 {
    let mut side = cross(look_dir, world_up);
    normalize(&mut side);
    // Unit already: side and look_dir are orthonormal.
    let relative_up = cross(side, look_dir);

    let (s, u, f) = (side.to_array(), relative_up.to_array(), look_dir.to_array());
    let mut m = Matrix4::IDENTITY;
    for column in 0..3 {
        m.set(column, 0, s[column]);
        m.set(column, 1, u[column]);
        m.set(column, 2, -f[column]);
    }
    m
}

/// OpenGL-style perspective projection.
///
/// `fov_x_degrees` is the configured horizontal field of view. The half-angle
/// fed to the cotangent is `fov_x / (2 * aspect)`, so with `aspect = 1` the
/// field of view is the same on both axes. View-space depth `-near` maps to
/// NDC `-1` and `-far` to `+1` after the perspective divide.
///
/// Requires `aspect != 0`, `far > near > 0` and a field of view in `(0, 180)`.
/// Nothing is checked here.
pub fn projection(fov_x_degrees: f32, aspect: f32, near: f32, far: f32) -> Matrix4 {
    let depth = far - near;
    let half_angle = (fov_x_degrees / (2.0 * aspect)).to_radians();
    let cot = 1.0 / half_angle.tan();

    let mut m = Matrix4::IDENTITY;
    m.set(0, 0, cot / aspect);
    m.set(1, 1, cot);
    m.set(2, 2, -(far + near) / depth);
    m.set(2, 3, -1.0);
    m.set(3, 2, -2.0 * near * far / depth);
    m.set(3, 3, 0.0);
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    use crate::vector::normalized;

    const EPS: f32 = 1e-5;

    fn column3(m: &Matrix4, column: usize) -> Vec3 {
        Vec3::new(m.get(column, 0), m.get(column, 1), m.get(column, 2))
    }

    fn row3(m: &Matrix4, row: usize) -> Vec3 {
        Vec3::new(m.get(0, row), m.get(1, row), m.get(2, row))
    }

    #[test]
    fn identity_layout() {
        let m = identity();
        for c in 0..4 {
            for r in 0..4 {
                let expected = if c == r { 1.0 } else { 0.0 };
                assert_eq!(m.get(c, r), expected);
            }
        }
        assert_eq!(m.to_mat4(), Mat4::IDENTITY);
    }

    #[test]
    fn column_major_indexing() {
        let mut m = Matrix4::ZERO;
        m.set(2, 1, 7.0);
        assert_eq!(m.0[9], 7.0);
        assert_eq!(m.to_mat4().col(2).y, 7.0);
        assert_eq!(m.to_cols_array_2d()[2][1], 7.0);
    }

    #[test]
    fn glam_round_trip_preserves_layout() {
        let mat = Mat4::from_cols_array(&[
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
        ]);
        let m = Matrix4::from(mat);
        assert_eq!(m.get(3, 0), 13.0);
        assert_eq!(Mat4::from(m), mat);
    }

    #[test]
    fn translation_negates_position() {
        let m = translation(Vec3::new(-23.0, 37.0, -22.0));
        assert_eq!(m.get(3, 0), 23.0);
        assert_eq!(m.get(3, 1), -37.0);
        assert_eq!(m.get(3, 2), 22.0);
        assert_eq!(m.get(3, 3), 1.0);

        // The camera position lands on the origin.
        let p = m.transform_vec4(Vec4::new(-23.0, 37.0, -22.0, 1.0));
        assert!(p.abs_diff_eq(Vec4::W, EPS));
    }

    #[test]
    fn translation_of_origin_is_identity() {
        assert_eq!(translation(Vec3::ZERO), identity());
    }

    #[test]
    fn view_rows_are_orthonormal() {
        for dir in [
            Vec3::Z,
            -Vec3::X,
            normalized(Vec3::new(0.653162, -0.532276, 0.538574)),
            normalized(Vec3::new(0.1, 0.95, -0.2)),
            normalized(Vec3::new(-3.0, -1.0, 4.0)),
        ] {
            let m = view(dir, Vec3::Y);
            let side = row3(&m, 0);
            let up = row3(&m, 1);
            let back = row3(&m, 2);

            for v in [side, up, back] {
                assert!((v.length() - 1.0).abs() < EPS, "{dir:?}: {v:?}");
            }
            assert!(side.dot(up).abs() < EPS);
            assert!(side.dot(back).abs() < EPS);
            assert!(up.dot(back).abs() < EPS);

            // The upper 3x3 is a rotation, so its columns are orthonormal as well.
            for c in 0..3 {
                assert!((column3(&m, c).length() - 1.0).abs() < EPS);
            }
            assert!(column3(&m, 0).dot(column3(&m, 1)).abs() < EPS);
        }
    }

    #[test]
    fn view_maps_look_dir_to_negative_z() {
        let dir = normalized(Vec3::new(0.653162, -0.532276, 0.538574));
        let m = view(dir, Vec3::Y);
        let v = m.transform_vec4(dir.extend(0.0));
        assert!(v.abs_diff_eq(Vec4::new(0.0, 0.0, -1.0, 0.0), EPS));
    }

    #[test]
    fn view_has_no_translation() {
        let m = view(normalized(Vec3::new(1.0, 0.2, 0.5)), Vec3::Y);
        assert_eq!(m.get(3, 0), 0.0);
        assert_eq!(m.get(3, 1), 0.0);
        assert_eq!(m.get(3, 2), 0.0);
        assert_eq!(m.get(3, 3), 1.0);
        assert_eq!(m.get(0, 3), 0.0);
        assert_eq!(m.get(1, 3), 0.0);
        assert_eq!(m.get(2, 3), 0.0);
    }

    #[test]
    fn view_toward_positive_z_flips_x_and_z() {
        let m = view(Vec3::Z, Vec3::Y);
        let expected = Matrix4::from(Mat4::from_diagonal(Vec4::new(-1.0, 1.0, -1.0, 1.0)));
        assert!(m.abs_diff_eq(&expected, EPS));
    }

    #[test]
    fn view_matches_glam_look_to() {
        for dir in [
            normalized(Vec3::new(0.653162, -0.532276, 0.538574)),
            normalized(Vec3::new(-0.2, 0.3, -1.0)),
        ] {
            let ours = view(dir, Vec3::Y);
            let theirs = Matrix4::from(Mat4::look_to_rh(Vec3::ZERO, dir, Vec3::Y));
            assert!(ours.abs_diff_eq(&theirs, EPS));
        }
    }

    #[test]
    fn projection_layout() {
        let m = projection(90.0, 1.0, 0.5, 100.0);
        assert!((m.get(0, 0) - 1.0).abs() < EPS);
        assert!((m.get(1, 1) - 1.0).abs() < EPS);
        assert!((m.get(2, 2) - (-100.5 / 99.5)).abs() < EPS);
        assert_eq!(m.get(2, 3), -1.0);
        assert!((m.get(3, 2) - (-100.0 / 99.5)).abs() < EPS);
        assert_eq!(m.get(3, 3), 0.0);
        assert_eq!(m.get(0, 3), 0.0);
        assert_eq!(m.get(3, 0), 0.0);
    }

    #[test]
    fn projection_maps_near_and_far_planes() {
        for (fov, aspect, near, far) in [
            (90.0, 1.0, 0.5, 100.0),
            (60.0, 16.0 / 9.0, 0.1, 1000.0),
            (120.0, 4.0 / 3.0, 2.0, 50.0),
        ] {
            let m = projection(fov, aspect, near, far);

            let n = m.transform_vec4(Vec4::new(0.0, 0.0, -near, 1.0));
            assert!((n.z / n.w + 1.0).abs() < 1e-4, "near plane: {n:?}");

            let f = m.transform_vec4(Vec4::new(0.0, 0.0, -far, 1.0));
            assert!((f.z / f.w - 1.0).abs() < 1e-4, "far plane: {f:?}");
        }
    }

    #[test]
    fn projection_matches_glam_perspective_gl() {
        let (fov_x, aspect, near, far) = (90.0_f32, 16.0 / 9.0, 0.5, 1000.0);
        // Same half-angle rule expressed as a vertical field of view.
        let fov_y = (fov_x / aspect).to_radians();
        let ours = projection(fov_x, aspect, near, far);
        let theirs = Matrix4::from(Mat4::perspective_rh_gl(fov_y, aspect, near, far));
        assert!(ours.abs_diff_eq(&theirs, EPS));
    }

    #[test]
    fn projection_is_garbage_for_degenerate_input() {
        // near == far divides by zero; no validation happens here.
        let m = projection(90.0, 1.0, 1.0, 1.0);
        assert!(!m.get(2, 2).is_finite());
    }
}
