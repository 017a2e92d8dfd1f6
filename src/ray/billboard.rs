use glam::{dvec2, dvec3, DVec2, DVec3};

use crate::ray::Ray3;
use crate::world::Billboard;

/// Ray hit on the plane a billboard's canvas spans.
#[derive(Clone, Copy, Debug)]
pub struct BillboardHit {
    pub position: DVec3,
    /// Multiple of `ray.dir` from the origin to the plane; negative for
    /// planes behind the origin.
    pub ray_scale: f64,
    /// Hit offset from the canvas centre in canvas units, X along the
    /// right tangent, Y up.
    pub uv: DVec2,
}

impl BillboardHit {
    /// Whether the hit lands on the canvas itself.
    #[inline]
    pub fn is_inside(&self) -> bool {
        self.uv.x.abs() <= 0.5 && self.uv.y.abs() <= 0.5
    }
}

/// Intersect `ray` with a billboard's canvas plane when the billboard
/// faces `facing` in the ground plane. `None` for rays parallel to the
/// plane.
pub fn ray_billboard_intersection(
    ray: &Ray3,
    billboard: &Billboard,
    facing: DVec2,
) -> Option<BillboardHit> {
    let normal = dvec3(facing.x, facing.y, 0.0);
    let denom = normal.dot(ray.dir);
    if denom == 0.0 {
        return None;
    }

    let anchor = dvec3(billboard.position.x, billboard.position.y, 0.0);
    let ray_scale = normal.dot(anchor - ray.origin) / denom;
    let position = ray.origin + ray.dir * ray_scale;

    // Canvas frame: right tangent in the ground plane, world up, with
    // the centre lifted by the vertical offset.
    let tangent = dvec3(facing.y, -facing.x, 0.0);
    let centre = dvec3(
        billboard.position.x,
        billboard.position.y,
        0.5 + billboard.v_offset,
    );
    let rel = position - centre;
    let uv = dvec2(
        rel.dot(tangent) / billboard.scale.x,
        rel.z / billboard.scale.y,
    );

    Some(BillboardHit {
        position,
        ray_scale,
        uv,
    })
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
