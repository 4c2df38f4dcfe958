//! Arena-backed scene graph.
//!
//! Nodes live in a flat `Vec` owned by their scene and refer to each other
//! by index, so the tree needs no reference counting. Outside code only
//! ever sees [`NodeHandle`]s, which also carry the id of the owning scene:
//! a handle can never be silently resolved against a different scene.

use std::sync::atomic::{AtomicU64, Ordering};

use glam::{Affine3A, Vec3};
use smallvec::SmallVec;

use crate::camera::CameraParams;
use crate::geometry::{MaterialSpec, PrimitiveShape, ShapeSpec, Transform};
use crate::model::{BodyRegion, Color, RobotVariant};
use crate::registry::PartRegistry;

static NEXT_SCENE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of one built scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(u64);

impl SceneId {
    fn next() -> Self {
        SceneId(NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Opaque identity of a node inside one particular scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    scene: SceneId,
    index: u32,
}

impl NodeHandle {
    pub fn scene(&self) -> SceneId {
        self.scene
    }

    pub fn index(&self) -> usize {
        self.index as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub shape: PrimitiveShape,
    pub material: MaterialSpec,
}

#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: Option<&'static str>,
    pub transform: Transform,
    pub geometry: Option<Geometry>,
    parent: Option<u32>,
    children: SmallVec<[u32; 8]>,
}

impl SceneNode {
    fn new(name: Option<&'static str>, transform: Transform, geometry: Option<Geometry>) -> Self {
        Self {
            name,
            transform,
            geometry,
            parent: None,
            children: SmallVec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Ambient {
        color: Color,
        intensity: f32,
    },
    Omni {
        color: Color,
        intensity: f32,
        position: Vec3,
    },
}

/// Immutable snapshot of one assembled robot: node tree, camera, lights
/// and the registry of selectable parts.
#[derive(Clone, Debug)]
pub struct RobotScene {
    id: SceneId,
    variant: RobotVariant,
    nodes: Vec<SceneNode>,
    world: Vec<Affine3A>,
    camera: CameraParams,
    lights: Vec<Light>,
    registry: PartRegistry,
}

impl RobotScene {
    pub fn id(&self) -> SceneId {
        self.id
    }

    pub fn variant(&self) -> RobotVariant {
        self.variant
    }

    pub fn camera(&self) -> &CameraParams {
        &self.camera
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn registry(&self) -> &PartRegistry {
        &self.registry
    }

    pub fn root(&self) -> NodeHandle {
        self.handle(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: NodeHandle) -> bool {
        node.scene == self.id && node.index() < self.nodes.len()
    }

    /// Panics if `node` was issued by another scene.
    pub fn node(&self, node: NodeHandle) -> &SceneNode {
        &self.nodes[self.index_of(node)]
    }

    pub fn get(&self, node: NodeHandle) -> Option<&SceneNode> {
        self.contains(node).then(|| &self.nodes[node.index()])
    }

    pub fn parent(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.node(node).parent.map(|i| self.handle(i))
    }

    pub fn children(&self, node: NodeHandle) -> impl Iterator<Item = NodeHandle> + '_ {
        self.node(node).children.iter().map(move |&i| self.handle(i))
    }

    /// Local-to-world transform, precomputed at build time.
    pub fn world_transform(&self, node: NodeHandle) -> Affine3A {
        self.world[self.index_of(node)]
    }

    pub fn world_position(&self, node: NodeHandle) -> Vec3 {
        self.world_transform(node).translation.into()
    }

    /// All nodes in arena (creation) order; parents precede children.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeHandle, &SceneNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(move |(i, n)| (self.handle(i as u32), n))
    }

    pub fn geometry_nodes(&self) -> impl Iterator<Item = (NodeHandle, &Geometry)> + '_ {
        self.nodes()
            .filter_map(|(h, n)| n.geometry.as_ref().map(|g| (h, g)))
    }

    /// Walks parent links up to the root.
    pub fn is_reachable(&self, node: NodeHandle) -> bool {
        if !self.contains(node) {
            return false;
        }
        let mut current = node.index;
        for _ in 0..self.nodes.len() {
            match self.nodes[current as usize].parent {
                Some(p) => current = p,
                None => return current == 0,
            }
        }
        false
    }

    /// Regional sub-root that holds a tagged node, if any.
    pub fn region_root(&self, region: BodyRegion) -> Option<NodeHandle> {
        let tagged = self.registry.node_for(region)?;
        self.parent(tagged)
    }

    fn handle(&self, index: u32) -> NodeHandle {
        NodeHandle {
            scene: self.id,
            index,
        }
    }

    fn index_of(&self, node: NodeHandle) -> usize {
        assert_eq!(
            node.scene, self.id,
            "node {node:?} used with scene {:?}",
            self.id
        );
        node.index()
    }
}

/// Incremental construction of a [`RobotScene`]. The assembler uses it for
/// catalog robots; tools and tests can build arbitrary trees with it.
#[derive(Debug)]
pub struct SceneBuilder {
    id: SceneId,
    nodes: Vec<SceneNode>,
    world: Vec<Affine3A>,
    registry: PartRegistry,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBuilder {
    pub fn new() -> Self {
        let id = SceneId::next();
        Self {
            id,
            nodes: vec![SceneNode::new(Some("root"), Transform::IDENTITY, None)],
            world: vec![Affine3A::IDENTITY],
            registry: PartRegistry::new(id),
        }
    }

    pub fn id(&self) -> SceneId {
        self.id
    }

    pub fn root(&self) -> NodeHandle {
        NodeHandle {
            scene: self.id,
            index: 0,
        }
    }

    /// Empty grouping node (a regional sub-root, for instance).
    pub fn add_group(
        &mut self,
        parent: NodeHandle,
        name: &'static str,
        transform: Transform,
    ) -> NodeHandle {
        self.add_node(parent, Some(name), transform, None)
    }

    pub fn add_shape(&mut self, parent: NodeHandle, spec: &ShapeSpec) -> NodeHandle {
        let geometry = Geometry {
            shape: spec.shape,
            material: spec.material,
        };
        self.add_node(parent, Some(spec.name), spec.transform, Some(geometry))
    }

    pub fn add_node(
        &mut self,
        parent: NodeHandle,
        name: Option<&'static str>,
        transform: Transform,
        geometry: Option<Geometry>,
    ) -> NodeHandle {
        let parent_index = self.index_of(parent);
        assert!(self.nodes.len() < u32::MAX as usize, "scene node count exceeds u32");
        let index = self.nodes.len() as u32;
        let mut node = SceneNode::new(name, transform, geometry);
        node.parent = Some(parent_index as u32);
        let world = self.world[parent_index] * transform.to_affine();
        self.nodes.push(node);
        self.world.push(world);
        self.nodes[parent_index].children.push(index);
        NodeHandle {
            scene: self.id,
            index,
        }
    }

    /// Marks `node` as the selectable node of `region`.
    ///
    /// Panics if the region is already tagged, the node already carries a
    /// tag, or the node belongs to another scene.
    pub fn tag(&mut self, node: NodeHandle, region: BodyRegion) {
        self.index_of(node);
        self.registry.tag(node, region);
    }

    pub fn finish(
        self,
        variant: RobotVariant,
        camera: CameraParams,
        lights: Vec<Light>,
    ) -> RobotScene {
        RobotScene {
            id: self.id,
            variant,
            nodes: self.nodes,
            world: self.world,
            camera,
            lights,
            registry: self.registry,
        }
    }

    fn index_of(&self, node: NodeHandle) -> usize {
        assert_eq!(
            node.scene, self.id,
            "node {node:?} used with scene builder {:?}",
            self.id
        );
        assert!(node.index() < self.nodes.len(), "unknown node {node:?}");
        node.index()
    }
}
