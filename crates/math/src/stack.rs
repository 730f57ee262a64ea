use crate::matrix::Matrix4;

/// Fold `next` onto `accumulated`, writing the product into `out`.
///
/// `next` left-multiplies: `out = next × accumulated`, so whatever was folded
/// in earlier is applied to points first. The borrow rules keep `out` distinct
/// from both inputs.
pub fn compose_into(accumulated: &Matrix4, next: &Matrix4, out: &mut Matrix4) {
    let (a, n) = (&accumulated.0, &next.0);
    for column in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for i in 0..4 {
                sum += n[4 * i + row] * a[4 * column + i];
            }
            out.0[4 * column + row] = sum;
        }
    }
}

/// By-value form of [`compose_into`].
pub fn compose(accumulated: &Matrix4, next: &Matrix4) -> Matrix4 {
    let mut out = Matrix4::ZERO;
    compose_into(accumulated, next, &mut out);
    out
}

/// Rolling accumulator for one frame's combined transform.
///
/// Two named slots: `current` holds the product so far, `scratch` receives the
/// next product. After each fold the slots swap, so no multiply ever writes
/// into its own input and no allocation happens per frame.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    current: Matrix4,
    scratch: Matrix4,
    depth: usize,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixStack {
    /// A stack holding the identity.
    pub fn new() -> Self {
        Self {
            current: Matrix4::IDENTITY,
            scratch: Matrix4::ZERO,
            depth: 0,
        }
    }

    /// Back to identity. Called at the start of every frame.
    pub fn reset(&mut self) {
        self.current = Matrix4::IDENTITY;
        self.depth = 0;
    }

    /// Fold `next` into the accumulated transform.
    pub fn push(&mut self, next: &Matrix4) -> &mut Self {
        compose_into(&self.current, next, &mut self.scratch);
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.depth += 1;
        tracing::trace!(depth = self.depth, "folded matrix into stack");
        self
    }

    /// Fold every matrix in order, first one applied to points first.
    pub fn extend<'a>(&mut self, matrices: impl IntoIterator<Item = &'a Matrix4>) -> &mut Self {
        for m in matrices {
            self.push(m);
        }
        self
    }

    /// The combined transform built so far.
    pub fn current(&self) -> &Matrix4 {
        &self.current
    }

    /// Number of folds since the last reset.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Convenience: identity folded with every matrix in order.
    pub fn fold_all<'a>(matrices: impl IntoIterator<Item = &'a Matrix4>) -> Matrix4 {
        let mut stack = Self::new();
        stack.extend(matrices);
        stack.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{identity, projection, translation, view};
    use crate::vector::normalized;
    use glam::{Mat4, Vec3, Vec4};

    const EPS: f32 = 1e-4;

    fn sample_matrices() -> Vec<Matrix4> {
        vec![
            translation(Vec3::new(-23.0, 37.0, -22.0)),
            view(normalized(Vec3::new(0.653162, -0.532276, 0.538574)), Vec3::Y),
            projection(90.0, 16.0 / 9.0, 0.5, 1000.0),
            Matrix4::from(Mat4::from_scale(Vec3::new(2.0, 0.5, -1.0))),
        ]
    }

    #[test]
    fn identity_is_neutral_on_both_sides() {
        for m in sample_matrices() {
            assert_eq!(compose(&identity(), &m), m);
            assert_eq!(compose(&m, &identity()), m);
        }
    }

    #[test]
    fn compose_is_associative() {
        let ms = sample_matrices();
        for a in &ms {
            for b in &ms {
                for c in &ms {
                    let left = compose(&compose(a, b), c);
                    let right = compose(a, &compose(b, c));
                    let scale = left.0.iter().fold(1.0_f32, |acc, v| acc.max(v.abs()));
                    assert!(left.abs_diff_eq(&right, EPS * scale));
                }
            }
        }
    }

    #[test]
    fn next_is_applied_after_accumulated() {
        let accumulated = translation(Vec3::new(-1.0, 0.0, 0.0));
        let next = Matrix4::from(Mat4::from_scale(Vec3::splat(2.0)));
        let combined = compose(&accumulated, &next);

        // Point at x=1: translate by +1 first, then scale.
        let p = combined.transform_vec4(Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert!(p.abs_diff_eq(Vec4::new(4.0, 0.0, 0.0, 1.0), 1e-6));
        assert_eq!(combined.to_mat4(), next.to_mat4() * accumulated.to_mat4());
    }

    #[test]
    fn stack_folds_in_order() {
        let ms = sample_matrices();
        let mut stack = MatrixStack::new();
        stack.push(&ms[0]).push(&ms[1]).push(&ms[2]);

        let expected = ms[2].to_mat4() * ms[1].to_mat4() * ms[0].to_mat4();
        assert!(stack.current().abs_diff_eq(&Matrix4::from(expected), EPS));
        assert_eq!(stack.depth(), 3);
    }

    #[test]
    fn stack_reset_returns_to_identity() {
        let mut stack = MatrixStack::new();
        stack.extend(&sample_matrices());
        assert_ne!(*stack.current(), identity());

        stack.reset();
        assert_eq!(*stack.current(), identity());
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn fold_all_matches_pushes() {
        let ms = sample_matrices();
        let folded = MatrixStack::fold_all(&ms);

        let mut stack = MatrixStack::new();
        for m in &ms {
            stack.push(m);
        }
        assert_eq!(folded, *stack.current());
    }

    #[test]
    fn fold_all_of_nothing_is_identity() {
        assert_eq!(MatrixStack::fold_all(&[] as &[Matrix4]), identity());
    }
}
