//! Primitive solids, surface materials and local transforms.
//!
//! Local frame conventions follow the usual scene-kit layout: capsules and
//! cylinders stand along +Y with `height` measured end to end (caps
//! included), box extents map to X/Y/Z, and a torus lies in the XZ plane
//! around +Y. Every shape is centred on its local origin.

use glam::{Affine3A, EulerRot, Quat, Vec2, Vec3};

use crate::model::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PrimitiveShape {
    Capsule {
        radius: f32,
        height: f32,
    },
    Box {
        width: f32,
        height: f32,
        length: f32,
        corner_radius: f32,
    },
    Cylinder {
        radius: f32,
        height: f32,
    },
    Sphere {
        radius: f32,
    },
    Torus {
        ring_radius: f32,
        pipe_radius: f32,
    },
}

impl PrimitiveShape {
    /// Half extents of the local axis-aligned bounding box.
    pub fn half_extents(&self) -> Vec3 {
        match *self {
            PrimitiveShape::Capsule { radius, height } => {
                Vec3::new(radius, (height * 0.5).max(radius), radius)
            }
            PrimitiveShape::Box {
                width,
                height,
                length,
                ..
            } => Vec3::new(width, height, length) * 0.5,
            PrimitiveShape::Cylinder { radius, height } => Vec3::new(radius, height * 0.5, radius),
            PrimitiveShape::Sphere { radius } => Vec3::splat(radius),
            PrimitiveShape::Torus {
                ring_radius,
                pipe_radius,
            } => {
                let outer = ring_radius + pipe_radius;
                Vec3::new(outer, pipe_radius, outer)
            }
        }
    }

    /// Signed distance from a local-space point to the surface
    /// (negative inside).
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        match *self {
            PrimitiveShape::Sphere { radius } => p.length() - radius,
            PrimitiveShape::Capsule { radius, height } => {
                let half_segment = (height * 0.5 - radius).max(0.0);
                let mut q = p;
                q.y -= p.y.clamp(-half_segment, half_segment);
                q.length() - radius
            }
            PrimitiveShape::Cylinder { radius, height } => {
                let d = Vec2::new(Vec2::new(p.x, p.z).length() - radius, p.y.abs() - height * 0.5);
                d.x.max(d.y).min(0.0) + d.max(Vec2::ZERO).length()
            }
            PrimitiveShape::Box {
                width,
                height,
                length,
                corner_radius,
            } => {
                let half = Vec3::new(width, height, length) * 0.5;
                let c = corner_radius.clamp(0.0, half.min_element());
                let q = p.abs() - (half - Vec3::splat(c));
                q.max(Vec3::ZERO).length() + q.max_element().min(0.0) - c
            }
            PrimitiveShape::Torus {
                ring_radius,
                pipe_radius,
            } => {
                let q = Vec2::new(Vec2::new(p.x, p.z).length() - ring_radius, p.y);
                q.length() - pipe_radius
            }
        }
    }

    /// Same shape with radial dimensions multiplied by `factor`.
    /// Lengths along the shape's main axis are left alone.
    pub fn thickened(self, factor: f32) -> Self {
        match self {
            PrimitiveShape::Capsule { radius, height } => PrimitiveShape::Capsule {
                radius: radius * factor,
                height,
            },
            PrimitiveShape::Box {
                width,
                height,
                length,
                corner_radius,
            } => PrimitiveShape::Box {
                width: width * factor,
                height,
                length: length * factor,
                corner_radius: corner_radius * factor,
            },
            PrimitiveShape::Cylinder { radius, height } => PrimitiveShape::Cylinder {
                radius: radius * factor,
                height,
            },
            PrimitiveShape::Sphere { radius } => PrimitiveShape::Sphere {
                radius: radius * factor,
            },
            PrimitiveShape::Torus {
                ring_radius,
                pipe_radius,
            } => PrimitiveShape::Torus {
                ring_radius: ring_radius * factor,
                pipe_radius: pipe_radius * factor,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emission {
    pub color: Color,
    pub intensity: f32,
}

/// Surface response of a primitive. All numeric fields stay in `[0, 1]`;
/// the builder methods clamp their inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialSpec {
    pub color: Color,
    pub metalness: f32,
    pub roughness: f32,
    pub transparency: f32,
    pub emission: Option<Emission>,
}

impl MaterialSpec {
    pub fn new(color: Color) -> Self {
        Self {
            color: color.clamped(),
            metalness: 0.0,
            roughness: 0.5,
            transparency: 0.0,
            emission: None,
        }
    }

    pub fn metalness(mut self, value: f32) -> Self {
        self.metalness = value.clamp(0.0, 1.0);
        self
    }

    pub fn roughness(mut self, value: f32) -> Self {
        self.roughness = value.clamp(0.0, 1.0);
        self
    }

    pub fn transparency(mut self, value: f32) -> Self {
        self.transparency = value.clamp(0.0, 1.0);
        self
    }

    /// Glow in the given colour; also used as the diffuse colour.
    pub fn glowing(color: Color, intensity: f32) -> Self {
        let mut m = Self::new(color);
        m.emission = Some(Emission {
            color: color.clamped(),
            intensity: intensity.clamp(0.0, 1.0),
        });
        m
    }

    pub fn is_within_unit_range(&self) -> bool {
        let unit = |v: f32| (0.0..=1.0).contains(&v);
        let color_ok = |c: Color| unit(c.r) && unit(c.g) && unit(c.b);
        color_ok(self.color)
            && unit(self.metalness)
            && unit(self.roughness)
            && unit(self.transparency)
            && self
                .emission
                .map_or(true, |e| color_ok(e.color) && unit(e.intensity))
    }
}

/// Position plus Euler rotation (radians, applied X then Y then Z).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            rotation: Vec3::ZERO,
        }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }

    pub fn to_affine(&self) -> Affine3A {
        let q = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Affine3A::from_rotation_translation(q, self.position)
    }
}

/// One catalog entry: a primitive, its material and where it sits inside
/// its region.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeSpec {
    pub name: &'static str,
    pub shape: PrimitiveShape,
    pub material: MaterialSpec,
    pub transform: Transform,
}

impl ShapeSpec {
    pub fn new(
        name: &'static str,
        shape: PrimitiveShape,
        material: MaterialSpec,
        transform: Transform,
    ) -> Self {
        Self {
            name,
            shape,
            material,
            transform,
        }
    }
}
