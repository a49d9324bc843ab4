//! Shader-facing uniform values for one media plane.

/// Linear remap of `value` from one range to another, unclamped.
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (value - in_min) / (in_max - in_min) * (out_max - out_min)
}

/// Per-item uniform block, uploaded verbatim each frame.
///
/// `image_size` stays at the neutral `[0, 0]` until the texture decode
/// resolves; the shader falls back to stretched sampling for that case, so an
/// image that never loads keeps rendering the placeholder without error.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MediaUniforms {
    pub plane_size: [f32; 2],
    pub image_size: [f32; 2],
    pub viewport_size: [f32; 2],
    pub position: [f32; 2],
    pub time: f32,
    pub speed: f32,
    pub strength: f32,
    pub reveal: f32,
    pub pointer: [f32; 2],
    pub _pad: [f32; 2],
}

impl Default for MediaUniforms {
    fn default() -> Self {
        Self {
            plane_size: [0.0, 0.0],
            image_size: [0.0, 0.0],
            viewport_size: [0.0, 0.0],
            position: [0.0, 0.0],
            time: 0.0,
            speed: 0.0,
            strength: 0.0,
            reveal: 0.0,
            pointer: [0.5, 0.5],
            _pad: [0.0, 0.0],
        }
    }
}
