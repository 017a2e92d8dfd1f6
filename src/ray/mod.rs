//! Pure ray-query primitives.
//!
//! The renderer drives its wall pass with [`ray_tilemap_intersection`];
//! the remaining queries exist for callers — picking, line of sight,
//! projectile sweeps — and return plain records.

mod billboard;
mod grid;
mod screen;

use glam::{DVec2, DVec3};

pub use billboard::{ray_billboard_intersection, BillboardHit};
pub use grid::{
    ray_tilemap_ceiling_floor_intersection, ray_tilemap_intersection, Side, SurfaceHit, TilemapHit,
};
pub use screen::screen_point_to_ray;

/// Ray in the ground plane.
#[derive(Clone, Copy, Debug)]
pub struct Ray2 {
    pub origin: DVec2,
    pub dir: DVec2,
}

/// Ray in world space; z runs from the floor (0) up to the ceiling (1).
#[derive(Clone, Copy, Debug)]
pub struct Ray3 {
    pub origin: DVec3,
    pub dir: DVec3,
}
