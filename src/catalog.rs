//! Geometry catalog: which primitives make up each body region.
//!
//! The region decides the shape list and proportions; the variant only
//! decides paint (its palette) and limb girth. The two axes are combined
//! in [`shapes_for`] instead of enumerating every pair.

use std::f32::consts::FRAC_PI_2;

use crate::geometry::{MaterialSpec, PrimitiveShape, ShapeSpec, Transform};
use crate::model::{BodyRegion, Color, Palette, RobotVariant};

/// Ordered primitives for one region of one variant. The first entry is
/// always the region's structural primitive. Never empty.
pub fn shapes_for(variant: RobotVariant, region: BodyRegion) -> Vec<ShapeSpec> {
    let palette = variant.palette();
    let mut shapes = match region {
        BodyRegion::Head => head(&palette),
        BodyRegion::Torso => torso(&palette),
        BodyRegion::LeftArm | BodyRegion::RightArm => arm(&palette),
        BodyRegion::LeftLeg | BodyRegion::RightLeg => leg(&palette),
    };
    if region.is_limb() {
        let girth = variant.girth();
        for spec in &mut shapes {
            spec.shape = spec.shape.thickened(girth);
        }
    }
    debug_assert!(!shapes.is_empty(), "catalog has no shapes for {region:?}");
    shapes
}

fn capsule(radius: f32, height: f32) -> PrimitiveShape {
    PrimitiveShape::Capsule { radius, height }
}

fn cylinder(radius: f32, height: f32) -> PrimitiveShape {
    PrimitiveShape::Cylinder { radius, height }
}

fn sphere(radius: f32) -> PrimitiveShape {
    PrimitiveShape::Sphere { radius }
}

fn rounded_box(width: f32, height: f32, length: f32, corner_radius: f32) -> PrimitiveShape {
    PrimitiveShape::Box {
        width,
        height,
        length,
        corner_radius,
    }
}

fn head(p: &Palette) -> Vec<ShapeSpec> {
    let shell = MaterialSpec::new(p.primary)
        .metalness(0.9)
        .roughness(0.1)
        .transparency(0.2);
    let eye = MaterialSpec::glowing(Color::CYAN, 0.3);
    let antenna = MaterialSpec::new(p.accent).metalness(0.8);
    let beacon = MaterialSpec::glowing(Color::BLUE, 0.5);
    let collar = MaterialSpec::new(p.secondary).metalness(0.8).roughness(0.2);

    vec![
        ShapeSpec::new("head-shell", capsule(0.4, 0.8), shell, Transform::IDENTITY),
        ShapeSpec::new("left-eye", sphere(0.08), eye, Transform::at(-0.15, 0.1, 0.35)),
        ShapeSpec::new("right-eye", sphere(0.08), eye, Transform::at(0.15, 0.1, 0.35)),
        ShapeSpec::new(
            "left-antenna",
            cylinder(0.02, 0.3),
            antenna,
            Transform::at(-0.2, 0.6, 0.0).rotated(0.2, 0.0, 0.0),
        ),
        ShapeSpec::new(
            "right-antenna",
            cylinder(0.02, 0.3),
            antenna,
            Transform::at(0.2, 0.6, 0.0).rotated(-0.2, 0.0, 0.0),
        ),
        ShapeSpec::new("left-beacon", sphere(0.03), beacon, Transform::at(-0.2, 0.75, 0.05)),
        ShapeSpec::new("right-beacon", sphere(0.03), beacon, Transform::at(0.2, 0.75, -0.05)),
        ShapeSpec::new(
            "neck-collar",
            PrimitiveShape::Torus {
                ring_radius: 0.22,
                pipe_radius: 0.04,
            },
            collar,
            Transform::at(0.0, -0.45, 0.0),
        ),
    ]
}

fn torso(p: &Palette) -> Vec<ShapeSpec> {
    let body = MaterialSpec::new(p.secondary)
        .metalness(0.8)
        .roughness(0.15)
        .transparency(0.2);
    let panel = MaterialSpec::new(p.accent).metalness(0.9).roughness(0.1);
    let circuit = MaterialSpec::glowing(Color::CYAN, 0.2);
    let joint = MaterialSpec::new(p.primary).metalness(0.7);

    let mut shapes = vec![
        ShapeSpec::new(
            "torso-body",
            rounded_box(1.2, 1.6, 0.6, 0.1),
            body,
            Transform::IDENTITY,
        ),
        ShapeSpec::new(
            "chest-panel",
            rounded_box(0.8, 0.4, 0.05, 0.02),
            panel,
            Transform::at(0.0, 0.2, 0.325),
        ),
    ];
    for i in 0..3 {
        shapes.push(ShapeSpec::new(
            "circuit-strip",
            rounded_box(0.6, 0.02, 0.01, 0.005),
            circuit,
            Transform::at(0.0, 0.1 - i as f32 * 0.15, 0.35),
        ));
    }
    for (name, x) in [("left-shoulder", -0.75), ("right-shoulder", 0.75)] {
        shapes.push(ShapeSpec::new(
            name,
            cylinder(0.15, 0.3),
            joint,
            Transform::at(x, 0.4, 0.0).rotated(0.0, 0.0, FRAC_PI_2),
        ));
    }
    shapes
}

fn arm(p: &Palette) -> Vec<ShapeSpec> {
    let upper = MaterialSpec::new(p.accent)
        .metalness(0.7)
        .roughness(0.2)
        .transparency(0.25);
    let joint = MaterialSpec::new(p.primary).metalness(0.8);
    let forearm = MaterialSpec::new(p.secondary).metalness(0.6);
    let hand = MaterialSpec::new(p.primary).metalness(0.7);
    let finger = MaterialSpec::new(p.accent);

    let mut shapes = vec![
        ShapeSpec::new("upper-arm", capsule(0.12, 0.8), upper, Transform::at(0.0, 0.3, 0.0)),
        ShapeSpec::new(
            "elbow",
            cylinder(0.15, 0.2),
            joint,
            Transform::at(0.0, -0.1, 0.0).rotated(0.0, 0.0, FRAC_PI_2),
        ),
        ShapeSpec::new("forearm", capsule(0.1, 0.7), forearm, Transform::at(0.0, -0.5, 0.0)),
        ShapeSpec::new(
            "hand",
            rounded_box(0.2, 0.3, 0.15, 0.05),
            hand,
            Transform::at(0.0, -0.85, 0.0),
        ),
    ];
    for i in 0..3 {
        shapes.push(ShapeSpec::new(
            "finger",
            capsule(0.02, 0.15),
            finger,
            Transform::at((i as f32 - 1.0) * 0.06, -1.0, 0.0),
        ));
    }
    shapes
}

fn leg(p: &Palette) -> Vec<ShapeSpec> {
    let thigh = MaterialSpec::new(p.primary).metalness(0.7);
    let knee = MaterialSpec::new(p.accent).metalness(0.8);
    let calf = MaterialSpec::new(p.secondary).metalness(0.6);
    let foot = MaterialSpec::new(p.primary).metalness(0.7);
    let tread = MaterialSpec::new(p.accent);

    let mut shapes = vec![
        ShapeSpec::new("thigh", capsule(0.15, 0.9), thigh, Transform::at(0.0, 0.35, 0.0)),
        ShapeSpec::new(
            "knee",
            cylinder(0.18, 0.25),
            knee,
            Transform::at(0.0, -0.1, 0.0).rotated(0.0, 0.0, FRAC_PI_2),
        ),
        ShapeSpec::new("calf", capsule(0.12, 0.8), calf, Transform::at(0.0, -0.55, 0.0)),
        ShapeSpec::new(
            "foot",
            rounded_box(0.25, 0.1, 0.4, 0.05),
            foot,
            Transform::at(0.0, -0.95, 0.1),
        ),
    ];
    for i in 0..3 {
        shapes.push(ShapeSpec::new(
            "tread",
            rounded_box(0.2, 0.02, 0.05, 0.01),
            tread,
            Transform::at(0.0, -1.0, 0.1 + (i as f32 - 1.0) * 0.1),
        ));
    }
    shapes
}
