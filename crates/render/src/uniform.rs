use bytemuck::{Pod, Zeroable};
use flycam_math::Matrix4;

/// Uniform block the vertex shader reads the combined transform from.
///
/// Shader side: `uniform mat4 matrix_stack;` (GLSL) or
/// `matrix_stack: mat4x4<f32>` (WGSL), 64 bytes, column-major.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TransformUniform {
    pub matrix_stack: [[f32; 4]; 4],
}

// Catch CPU/GPU layout mismatches at compile time
const _: () = assert!(std::mem::size_of::<TransformUniform>() == 64);

impl TransformUniform {
    pub fn from_matrix(transform: &Matrix4) -> Self {
        Self {
            matrix_stack: transform.to_cols_array_2d(),
        }
    }

    /// Raw bytes ready for a buffer write.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<&Matrix4> for TransformUniform {
    fn from(transform: &Matrix4) -> Self {
        Self::from_matrix(transform)
    }
}
