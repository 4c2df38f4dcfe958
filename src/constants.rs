use glam::Vec3;

// Shared scene tuning constants used by the assembler, picker and front-ends.

// Region anchors in robot space (fixed for every variant)
pub const HEAD_ANCHOR: [f32; 3] = [0.0, 2.5, 0.0];
pub const TORSO_ANCHOR: [f32; 3] = [0.0, 1.2, 0.0];
pub const LEFT_ARM_ANCHOR: [f32; 3] = [-1.8, 1.5, 0.0];
pub const RIGHT_ARM_ANCHOR: [f32; 3] = [1.8, 1.5, 0.0];
pub const LEFT_LEG_ANCHOR: [f32; 3] = [-0.6, -0.8, 0.0];
pub const RIGHT_LEG_ANCHOR: [f32; 3] = [0.6, -0.8, 0.0];

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.0, 8.0];
pub const CAMERA_FOV_DEGREES: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 300.0;
pub const OMNI_INTENSITY: f32 = 800.0;
pub const OMNI_POSITION: [f32; 3] = [5.0, 5.0, 5.0];

// Picking
pub const PICK_EPSILON: f32 = 1e-4; // surface distance accepted as a hit when sphere tracing
pub const PICK_MAX_STEPS: usize = 128; // sphere tracing step cap per primitive

// Default viewport used by the headless front-end
pub const DEFAULT_VIEWPORT: [f32; 2] = [1170.0, 2532.0];

#[inline]
pub fn vec3(v: [f32; 3]) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}
