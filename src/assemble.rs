//! Scene assembly: catalog shapes become a node tree with one regional
//! sub-root per body region and one tagged structural node per region.

use glam::Vec3;

use crate::camera::CameraParams;
use crate::catalog::shapes_for;
use crate::constants::{
    vec3, AMBIENT_INTENSITY, HEAD_ANCHOR, LEFT_ARM_ANCHOR, LEFT_LEG_ANCHOR, OMNI_INTENSITY,
    OMNI_POSITION, RIGHT_ARM_ANCHOR, RIGHT_LEG_ANCHOR, TORSO_ANCHOR,
};
use crate::geometry::Transform;
use crate::model::{BodyRegion, Color, RobotVariant};
use crate::scene::{Light, RobotScene, SceneBuilder};

/// Where a region's sub-root sits in robot space. Same for every variant.
pub fn region_anchor(region: BodyRegion) -> Vec3 {
    vec3(match region {
        BodyRegion::Head => HEAD_ANCHOR,
        BodyRegion::Torso => TORSO_ANCHOR,
        BodyRegion::LeftArm => LEFT_ARM_ANCHOR,
        BodyRegion::RightArm => RIGHT_ARM_ANCHOR,
        BodyRegion::LeftLeg => LEFT_LEG_ANCHOR,
        BodyRegion::RightLeg => RIGHT_LEG_ANCHOR,
    })
}

pub fn default_lights() -> Vec<Light> {
    vec![
        Light::Ambient {
            color: Color::WHITE,
            intensity: AMBIENT_INTENSITY,
        },
        Light::Omni {
            color: Color::WHITE,
            intensity: OMNI_INTENSITY,
            position: vec3(OMNI_POSITION),
        },
    ]
}

/// Build a fresh scene for `variant`. Every call returns an independent
/// scene with its own registry.
pub fn assemble(variant: RobotVariant) -> RobotScene {
    let mut builder = SceneBuilder::new();
    let robot = builder.add_group(builder.root(), "robot", Transform::IDENTITY);

    for region in BodyRegion::ALL {
        let shapes = shapes_for(variant, region);
        let Some((structural, decorations)) = shapes.split_first() else {
            panic!("catalog returned no shapes for {variant:?} {region:?}");
        };
        let region_root = builder.add_group(
            robot,
            region.key(),
            Transform::from_position(region_anchor(region)),
        );
        let tagged = builder.add_shape(region_root, structural);
        builder.tag(tagged, region);
        for spec in decorations {
            builder.add_shape(region_root, spec);
        }
        log::debug!(
            "[assemble] {} {}: {} primitives",
            variant.key(),
            region.key(),
            shapes.len()
        );
    }

    let scene = builder.finish(variant, CameraParams::default(), default_lights());
    log::info!(
        "[assemble] built {} as scene {:?} ({} nodes)",
        variant.display_name(),
        scene.id(),
        scene.len()
    );
    scene
}
