//! Tap picking: ray casts against every primitive of a scene, nearest hit
//! wins, and only the exact tagged node of a region counts as a selection.

use glam::{Vec2, Vec3};

use crate::camera::{screen_to_world_ray, world_to_screen, CameraParams, Ray, Viewport};
use crate::constants::{PICK_EPSILON, PICK_MAX_STEPS};
use crate::geometry::PrimitiveShape;
use crate::model::BodyRegion;
use crate::scene::{NodeHandle, RobotScene};
use crate::selection::SelectionEvent;

const PARALLEL_EPSILON: f32 = 1e-6;

/// Nearest intersection of a ray with scene geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub node: NodeHandle,
    /// World-space distance from the ray origin.
    pub distance: f32,
    pub point: Vec3,
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Capsule standing on the Y axis; `half_segment` is the distance from
/// the centre to each cap centre.
pub fn ray_capsule(ray_origin: Vec3, ray_dir: Vec3, half_segment: f32, radius: f32) -> Option<f32> {
    let pa = Vec3::new(0.0, -half_segment, 0.0);
    let pb = Vec3::new(0.0, half_segment, 0.0);
    let ba = pb - pa;
    let oa = ray_origin - pa;
    let baba = ba.dot(ba);
    let bard = ba.dot(ray_dir);
    let baoa = ba.dot(oa);
    let rdoa = ray_dir.dot(oa);
    let oaoa = oa.dot(oa);

    let mut best = None::<f32>;
    let a = baba - bard * bard;
    if a > PARALLEL_EPSILON {
        let b = baba * rdoa - baoa * bard;
        let c = baba * oaoa - baoa * baoa - radius * radius * baba;
        let h = b * b - a * c;
        if h >= 0.0 {
            let t = (-b - h.sqrt()) / a;
            let y = baoa + t * bard;
            if t >= 0.0 && y > 0.0 && y < baba {
                best = Some(t);
            }
        }
    }
    for cap in [pa, pb] {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, cap, radius) {
            best = Some(best.map_or(t, |bt| bt.min(t)));
        }
    }
    best
}

/// Closed cylinder standing on the Y axis.
pub fn ray_cylinder(ray_origin: Vec3, ray_dir: Vec3, radius: f32, half_height: f32) -> Option<f32> {
    let mut best = None::<f32>;
    let mut consider = |t: f32| {
        if t >= 0.0 {
            best = Some(best.map_or(t, |bt: f32| bt.min(t)));
        }
    };

    let a = ray_dir.x * ray_dir.x + ray_dir.z * ray_dir.z;
    if a > PARALLEL_EPSILON {
        let b = ray_origin.x * ray_dir.x + ray_origin.z * ray_dir.z;
        let c = ray_origin.x * ray_origin.x + ray_origin.z * ray_origin.z - radius * radius;
        let disc = b * b - a * c;
        if disc >= 0.0 {
            let t = (-b - disc.sqrt()) / a;
            if (ray_origin.y + t * ray_dir.y).abs() <= half_height {
                consider(t);
            }
        }
    }
    if ray_dir.y.abs() > PARALLEL_EPSILON {
        for cap_y in [-half_height, half_height] {
            let t = (cap_y - ray_origin.y) / ray_dir.y;
            let p = ray_origin + ray_dir * t;
            if p.x * p.x + p.z * p.z <= radius * radius {
                consider(t);
            }
        }
    }
    best
}

/// Slab test against a centred box. Returns the entry and exit parameters.
pub fn ray_aabb(ray_origin: Vec3, ray_dir: Vec3, half_extents: Vec3) -> Option<(f32, f32)> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let o = ray_origin[axis];
        let d = ray_dir[axis];
        let h = half_extents[axis];
        if d.abs() < PARALLEL_EPSILON {
            if o < -h || o > h {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let (t0, t1) = {
            let a = (-h - o) * inv;
            let b = (h - o) * inv;
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        };
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }
    (t_max >= 0.0).then_some((t_min.max(0.0), t_max))
}

/// Sphere tracing of a shape's signed distance between `t_start` and
/// `t_end`. `ray_dir` must be unit length.
fn sphere_trace(
    shape: &PrimitiveShape,
    ray_origin: Vec3,
    ray_dir: Vec3,
    t_start: f32,
    t_end: f32,
) -> Option<f32> {
    let mut t = t_start;
    for _ in 0..PICK_MAX_STEPS {
        let d = shape.signed_distance(ray_origin + ray_dir * t);
        if d < PICK_EPSILON {
            return Some(t);
        }
        t += d;
        if t > t_end {
            break;
        }
    }
    None
}

/// Intersection of a local-space ray (unit direction) with a primitive
/// centred on the local origin.
pub fn intersect_shape(shape: &PrimitiveShape, ray_origin: Vec3, ray_dir: Vec3) -> Option<f32> {
    match *shape {
        PrimitiveShape::Sphere { radius } => ray_sphere(ray_origin, ray_dir, Vec3::ZERO, radius),
        PrimitiveShape::Capsule { radius, height } => {
            ray_capsule(ray_origin, ray_dir, (height * 0.5 - radius).max(0.0), radius)
        }
        PrimitiveShape::Cylinder { radius, height } => {
            ray_cylinder(ray_origin, ray_dir, radius, height * 0.5)
        }
        PrimitiveShape::Box { corner_radius, .. } => {
            let (t0, t1) = ray_aabb(ray_origin, ray_dir, shape.half_extents())?;
            if corner_radius <= PICK_EPSILON {
                Some(t0)
            } else {
                sphere_trace(shape, ray_origin, ray_dir, t0, t1)
            }
        }
        PrimitiveShape::Torus { .. } => {
            let (t0, t1) = ray_aabb(ray_origin, ray_dir, shape.half_extents())?;
            sphere_trace(shape, ray_origin, ray_dir, t0, t1)
        }
    }
}

/// Nearest geometry hit along `ray`, tagged or not. On an exact distance
/// tie the node created first wins.
pub fn pick(scene: &RobotScene, ray: &Ray) -> Option<Hit> {
    let mut best = None::<Hit>;
    for (node, geometry) in scene.geometry_nodes() {
        let inv = scene.world_transform(node).inverse();
        let local_origin = inv.transform_point3(ray.origin);
        let local_dir = inv.transform_vector3(ray.direction);
        let scale = local_dir.length();
        if scale <= f32::EPSILON {
            continue;
        }
        let Some(t_local) = intersect_shape(&geometry.shape, local_origin, local_dir / scale) else {
            continue;
        };
        let distance = t_local / scale;
        match best {
            Some(b) if distance >= b.distance => {}
            _ => {
                best = Some(Hit {
                    node,
                    distance,
                    point: ray.at(distance),
                })
            }
        }
    }
    best
}

/// Resolve a world-space ray to a selection. Misses and hits on untagged
/// geometry give `None`.
pub fn resolve_ray(scene: &RobotScene, ray: &Ray) -> Option<SelectionEvent> {
    let hit = pick(scene, ray)?;
    match scene.registry().resolve(hit.node) {
        Some(region) => {
            log::debug!(
                "[pick] {} hit {} at {:.3}",
                scene.variant().key(),
                region.key(),
                hit.distance
            );
            Some(SelectionEvent::new(region, scene.variant()))
        }
        None => {
            log::debug!(
                "[pick] untagged {} node {:?} at {:.3}",
                scene.node(hit.node).name.unwrap_or("?"),
                hit.node,
                hit.distance
            );
            None
        }
    }
}

/// A point inside the viewport whose tap selects `region`, searched over
/// the face of the region's tagged node (centre first). `None` when every
/// sampled point is off screen or covered by decorations or other parts.
pub fn tap_point_for(
    scene: &RobotScene,
    viewport: &Viewport,
    region: BodyRegion,
) -> Option<Vec2> {
    const FRACTIONS: [f32; 5] = [0.0, 0.5, -0.5, 0.8, -0.8];

    let node = scene.registry().node_for(region)?;
    let shape = scene.node(node).geometry?.shape;
    let half = shape.half_extents();
    let world = scene.world_transform(node);
    let expected = SelectionEvent::new(region, scene.variant());

    for fy in FRACTIONS {
        for fx in FRACTIONS {
            let local = Vec3::new(half.x * fx, half.y * fy, 0.0);
            let Some(point) = world_to_screen(scene.camera(), viewport, world.transform_point3(local))
            else {
                continue;
            };
            if !viewport.contains(point) {
                continue;
            }
            if resolve_tap(scene, viewport, point) == Some(expected) {
                return Some(point);
            }
        }
    }
    None
}

/// Resolve a tap using the scene's own camera.
pub fn resolve_tap(scene: &RobotScene, viewport: &Viewport, point: Vec2) -> Option<SelectionEvent> {
    resolve_tap_with(scene, scene.camera(), viewport, point)
}

/// Resolve a tap seen through `camera`, for surfaces that move the camera
/// away from the scene default. Taps outside the viewport select nothing.
pub fn resolve_tap_with(
    scene: &RobotScene,
    camera: &CameraParams,
    viewport: &Viewport,
    point: Vec2,
) -> Option<SelectionEvent> {
    if !viewport.contains(point) {
        log::debug!("[pick] tap {point} outside {}x{}", viewport.width(), viewport.height());
        return None;
    }
    let ray = screen_to_world_ray(camera, viewport, point);
    resolve_ray(scene, &ray)
}
