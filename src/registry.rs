//! Part registry: which node of a scene stands for which body region.
//!
//! Keyed by node identity, never by node name. One registry belongs to
//! exactly one scene; it is filled while the scene is built and only
//! handed out by shared reference afterwards.

use fnv::FnvHashMap;

use crate::error::SceneError;
use crate::model::BodyRegion;
use crate::scene::{NodeHandle, SceneId};

#[derive(Clone, Debug)]
pub struct PartRegistry {
    scene: SceneId,
    by_node: FnvHashMap<NodeHandle, BodyRegion>,
    by_region: FnvHashMap<BodyRegion, NodeHandle>,
}

impl PartRegistry {
    pub(crate) fn new(scene: SceneId) -> Self {
        Self {
            scene,
            by_node: FnvHashMap::default(),
            by_region: FnvHashMap::default(),
        }
    }

    pub(crate) fn tag(&mut self, node: NodeHandle, region: BodyRegion) {
        assert_eq!(
            node.scene(),
            self.scene,
            "cannot tag {node:?} in registry of scene {:?}",
            self.scene
        );
        if let Some(existing) = self.by_region.get(&region) {
            panic!("{region:?} already tagged on {existing:?}");
        }
        if let Some(existing) = self.by_node.get(&node) {
            panic!("{node:?} already tagged as {existing:?}");
        }
        self.by_node.insert(node, region);
        self.by_region.insert(region, node);
        log::trace!("[registry] tagged {:?} as {}", node, region.key());
    }

    pub fn scene(&self) -> SceneId {
        self.scene
    }

    /// Region tagged on exactly this node. Panics on a handle issued by
    /// another scene; see [`PartRegistry::try_resolve`].
    pub fn resolve(&self, node: NodeHandle) -> Option<BodyRegion> {
        match self.try_resolve(node) {
            Ok(region) => region,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_resolve(&self, node: NodeHandle) -> Result<Option<BodyRegion>, SceneError> {
        if node.scene() != self.scene {
            return Err(SceneError::ForeignNode {
                node,
                scene: self.scene,
            });
        }
        Ok(self.by_node.get(&node).copied())
    }

    pub fn node_for(&self, region: BodyRegion) -> Option<NodeHandle> {
        self.by_region.get(&region).copied()
    }

    pub fn len(&self) -> usize {
        self.by_node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_node.is_empty()
    }

    /// Every region has a tagged node.
    pub fn is_complete(&self) -> bool {
        BodyRegion::ALL
            .iter()
            .all(|r| self.by_region.contains_key(r))
    }

    /// Tagged regions in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyRegion, NodeHandle)> + '_ {
        BodyRegion::ALL
            .into_iter()
            .filter_map(|r| self.node_for(r).map(|n| (r, n)))
    }
}
