// Host-side tests for scene assembly and the per-scene part registry.

use std::collections::HashSet;

use humanoid_scene::{
    assemble, default_lights, region_anchor, shapes_for, BodyRegion, CameraParams, Light,
    RobotScene, RobotVariant, SceneBuilder, SceneError, Transform,
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn exactly_one_tagged_node_per_region() {
    for variant in RobotVariant::ALL {
        let scene = assemble(variant);
        let registry = scene.registry();
        assert_eq!(registry.len(), 6, "{variant:?}");
        assert!(registry.is_complete());

        let nodes: HashSet<_> = BodyRegion::ALL
            .iter()
            .map(|&r| registry.node_for(r).expect("region tagged"))
            .collect();
        assert_eq!(nodes.len(), 6, "tagged nodes must be distinct");

        // Scanning every node finds each region exactly once
        let mut seen = Vec::new();
        for (node, _) in scene.nodes() {
            if let Some(region) = registry.resolve(node) {
                seen.push(region);
            }
        }
        assert_eq!(seen, BodyRegion::ALL.to_vec());
    }
}

#[test]
fn tagged_nodes_are_reachable_structural_primitives() {
    let scene = assemble(RobotVariant::Figure);
    for (region, node) in scene.registry().iter() {
        assert!(scene.is_reachable(node), "{region:?} not reachable");
        let geometry = scene.node(node).geometry.expect("tagged node has geometry");
        assert_eq!(
            geometry.shape,
            shapes_for(RobotVariant::Figure, region)[0].shape
        );
        // Tagged node hangs directly off its regional sub-root
        let region_root = scene.parent(node).expect("tagged node has a parent");
        assert_eq!(scene.node(region_root).name, Some(region.key()));
        assert_eq!(scene.region_root(region), Some(region_root));
    }
}

#[test]
fn every_catalog_shape_becomes_a_node() {
    let scene = assemble(RobotVariant::Lingxi);
    let expected: usize = BodyRegion::ALL
        .iter()
        .map(|&r| shapes_for(RobotVariant::Lingxi, r).len())
        .sum();
    assert_eq!(scene.geometry_nodes().count(), expected);
    // root + robot group + six regional sub-roots
    assert_eq!(scene.len(), expected + 8);
    for region in BodyRegion::ALL {
        let root = scene.region_root(region).unwrap();
        assert_eq!(
            scene.children(root).count(),
            shapes_for(RobotVariant::Lingxi, region).len()
        );
    }
}

#[test]
fn anchors_do_not_depend_on_variant() {
    let scenes: Vec<RobotScene> = RobotVariant::ALL.into_iter().map(assemble).collect();
    for region in BodyRegion::ALL {
        for scene in &scenes {
            let root = scene.region_root(region).unwrap();
            let pos = scene.world_position(root);
            assert!(pos.abs_diff_eq(region_anchor(region), 1e-6), "{region:?}: {pos}");
        }
    }
}

#[test]
fn world_transforms_compose_parent_offsets() {
    let scene = assemble(RobotVariant::Optimus);
    let upper_arm = scene.registry().node_for(BodyRegion::RightArm).unwrap();
    let expected = region_anchor(BodyRegion::RightArm) + glam::Vec3::new(0.0, 0.3, 0.0);
    assert!(scene.world_position(upper_arm).abs_diff_eq(expected, 1e-6));
}

#[test]
fn camera_and_lights_match_the_showcase_setup() {
    let scene = assemble(RobotVariant::UnitreeG1);
    assert_eq!(scene.camera(), &CameraParams::default());
    assert_eq!(scene.camera().eye, glam::Vec3::new(0.0, 0.0, 8.0));
    assert!((scene.camera().fovy_radians.to_degrees() - 60.0).abs() < 1e-4);
    assert_eq!(scene.camera().zfar, 100.0);

    let lights = scene.lights();
    assert_eq!(lights.len(), 2);
    assert!(matches!(lights[0], Light::Ambient { .. }));
    assert!(matches!(lights[1], Light::Omni { .. }));
}

#[test]
fn rebuilt_scenes_are_independent() {
    let first = assemble(RobotVariant::Optimus);
    let second = assemble(RobotVariant::Optimus);
    assert_ne!(first.id(), second.id());

    let head_1 = first.registry().node_for(BodyRegion::Head).unwrap();
    let head_2 = second.registry().node_for(BodyRegion::Head).unwrap();
    assert_ne!(head_1, head_2);
    assert_eq!(head_1.index(), head_2.index());

    // The second scene's nodes are unknown to the first registry
    assert_eq!(
        first.registry().try_resolve(head_2),
        Err(SceneError::ForeignNode {
            node: head_2,
            scene: first.id()
        })
    );
    assert_eq!(first.registry().resolve(head_1), Some(BodyRegion::Head));
    assert_eq!(first.registry().len(), 6);
    assert!(!first.contains(head_2));
}

#[test]
#[should_panic(expected = "does not belong to scene")]
fn resolving_a_foreign_node_panics() {
    let first = assemble(RobotVariant::Figure);
    let second = assemble(RobotVariant::Lingxi);
    let torso = second.registry().node_for(BodyRegion::Torso).unwrap();
    first.registry().resolve(torso);
}

#[test]
fn resolve_is_idempotent() {
    let scene = assemble(RobotVariant::Lingxi);
    for (region, node) in scene.registry().iter() {
        let a = scene.registry().resolve(node);
        let b = scene.registry().resolve(node);
        assert_eq!(a, Some(region));
        assert_eq!(a, b);
    }
    // Untagged nodes resolve to nothing, every time
    let root = scene.root();
    assert_eq!(scene.registry().resolve(root), None);
    assert_eq!(scene.registry().resolve(root), None);
}

#[test]
fn scenes_can_cross_threads() {
    assert_send_sync::<RobotScene>();
}

#[test]
#[should_panic(expected = "already tagged")]
fn tagging_a_region_twice_panics() {
    let mut builder = SceneBuilder::new();
    let root = builder.root();
    let a = builder.add_group(root, "a", Transform::IDENTITY);
    let b = builder.add_group(root, "b", Transform::IDENTITY);
    builder.tag(a, BodyRegion::Head);
    builder.tag(b, BodyRegion::Head);
}

#[test]
#[should_panic(expected = "already tagged")]
fn tagging_a_node_twice_panics() {
    let mut builder = SceneBuilder::new();
    let a = builder.add_group(builder.root(), "a", Transform::IDENTITY);
    builder.tag(a, BodyRegion::Head);
    builder.tag(a, BodyRegion::Torso);
}

#[test]
#[should_panic(expected = "used with scene builder")]
fn tagging_a_node_from_another_builder_panics() {
    let mut first = SceneBuilder::new();
    let mut second = SceneBuilder::new();
    let foreign = second.add_group(second.root(), "foreign", Transform::IDENTITY);
    first.tag(foreign, BodyRegion::Head);
}

#[test]
fn builder_id_carries_into_scene_and_registry() {
    let mut builder = SceneBuilder::new();
    let id = builder.id();
    let arm = builder.add_group(builder.root(), "arm", Transform::at(1.0, 0.0, 0.0));
    assert_eq!(arm.scene(), id);
    builder.tag(arm, BodyRegion::LeftArm);

    let scene = builder.finish(RobotVariant::Optimus, CameraParams::default(), default_lights());
    assert_eq!(scene.id(), id);
    assert_eq!(scene.registry().scene(), id);
    assert_eq!(scene.get(arm).and_then(|n| n.name), Some("arm"));
}

#[test]
fn get_returns_none_for_foreign_handles() {
    let first = assemble(RobotVariant::Figure);
    let second = assemble(RobotVariant::Figure);
    let head = second.registry().node_for(BodyRegion::Head).unwrap();
    assert!(second.get(head).is_some());
    assert!(first.get(head).is_none());
    assert_ne!(first.registry().scene(), second.registry().scene());
}
