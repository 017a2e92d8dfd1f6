use glam::{dvec2, dvec3, ivec2, DVec2, DVec3, IVec2};

use crate::ray::{Ray2, Ray3};
use crate::world::Tilemap;

/// Which grid axis a wall hit landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// East/west face: the walk crossed a grid line along X.
    X,
    /// North/south face: the walk crossed a grid line along Y.
    Y,
}

/// Result of walking a ray through the tile grid.
#[derive(Clone, Copy, Debug)]
pub struct TilemapHit {
    /// Grid cell of the wall that stopped the walk.
    pub map_position: IVec2,
    pub side: Side,
    /// World-space point where the ray enters the wall cell.
    pub hit_position: DVec2,
    /// Outward face normal, one of the four axis directions.
    pub normal: DVec2,
    /// Distance from the view plane to the hit, measured perpendicular
    /// to the plane. A world-space distance only when the ray's planar
    /// direction is unit length.
    pub perpendicular_distance: f64,
}

/// Walk `ray` through the grid until it lands in a wall cell
/// (Amanatides–Woo traversal).
///
/// The map's outer border must be solid, otherwise the walk leaves the
/// grid.
pub fn ray_tilemap_intersection(ray: &Ray2, tilemap: &Tilemap) -> TilemapHit {
    let mut map_x = ray.origin.x.floor() as i32;
    let mut map_y = ray.origin.y.floor() as i32;

    // A zero component never wins the side-distance race: its delta is
    // +inf and its step direction defaults to +1.
    let delta_x = (1.0 / ray.dir.x).abs();
    let delta_y = (1.0 / ray.dir.y).abs();

    let (step_x, mut side_x) = if ray.dir.x < 0.0 {
        (-1, (ray.origin.x - map_x as f64) * delta_x)
    } else {
        (1, (map_x as f64 + 1.0 - ray.origin.x) * delta_x)
    };
    let (step_y, mut side_y) = if ray.dir.y < 0.0 {
        (-1, (ray.origin.y - map_y as f64) * delta_y)
    } else {
        (1, (map_y as f64 + 1.0 - ray.origin.y) * delta_y)
    };

    let mut side = Side::X;
    loop {
        if side_x < side_y {
            side_x += delta_x;
            map_x += step_x;
            side = Side::X;
        } else {
            side_y += delta_y;
            map_y += step_y;
            side = Side::Y;
        }
        if tilemap.is_wall(map_x, map_y) {
            break;
        }
    }

    let (normal, perpendicular_distance) = match side {
        Side::X => (
            dvec2(-step_x as f64, 0.0),
            (map_x as f64 - ray.origin.x + (1 - step_x) as f64 * 0.5) / ray.dir.x,
        ),
        Side::Y => (
            dvec2(0.0, -step_y as f64),
            (map_y as f64 - ray.origin.y + (1 - step_y) as f64 * 0.5) / ray.dir.y,
        ),
    };

    TilemapHit {
        map_position: ivec2(map_x, map_y),
        side,
        hit_position: ray.origin + ray.dir * perpendicular_distance,
        normal,
        perpendicular_distance,
    }
}

/// A 3-D hit against a wall face, the floor plane or the ceiling plane.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceHit {
    pub position: DVec3,
    pub normal: DVec3,
    /// Multiple of `ray.dir` from the origin to the hit.
    pub ray_scale: f64,
}

/// Extend the grid walk into 3-D: the world is the tile grid extruded
/// between the floor (z = 0) and ceiling (z = 1) slabs, and whichever
/// surface the ray reaches first wins.
pub fn ray_tilemap_ceiling_floor_intersection(ray: &Ray3, tilemap: &Tilemap) -> SurfaceHit {
    let planar = dvec2(ray.dir.x, ray.dir.y);
    let mut len = planar.length();
    if len == 0.0 {
        len = 1.0; // straight up/down: the slab planes decide alone
    }
    let flat = Ray2 {
        origin: dvec2(ray.origin.x, ray.origin.y),
        dir: planar / len,
    };
    let hit = ray_tilemap_intersection(&flat, tilemap);

    // Height the ray has reached by the time it meets the wall.
    let z = ray.origin.z + ray.dir.z / len * hit.perpendicular_distance;
    let (normal, d) = if z <= 0.0 {
        (DVec3::Z, 0.0)
    } else if z >= 1.0 {
        (-DVec3::Z, 1.0)
    } else {
        let n = dvec3(hit.normal.x, hit.normal.y, 0.0);
        (n, -n.dot(dvec3(hit.hit_position.x, hit.hit_position.y, 0.0)))
    };

    // Analytic plane intersection: n·p + d = 0.
    let ray_scale = -(d + normal.dot(ray.origin)) / normal.dot(ray.dir);

    SurfaceHit {
        position: ray.origin + ray.dir * ray_scale,
        normal,
        ray_scale,
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    /// Bordered map with optional interior wall cells.
    fn walled_map(size: usize, blocks: &[(usize, usize)]) -> Tilemap {
        let mut cells = vec![0u16; size * size];
        for y in 0..size {
            for x in 0..size {
                if x == 0 || y == 0 || x == size - 1 || y == size - 1 {
                    cells[y * size + x] = 1;
                }
            }
        }
        for &(x, y) in blocks {
            cells[y * size + x] = 1;
        }
        Tilemap::new(size, size, cells).unwrap()
    }

    #[test]
    fn axis_aligned_walk_hits_the_east_border() {
        let map = walled_map(6, &[]);
        let ray = Ray2 {
            origin: dvec2(2.5, 2.5),
            dir: dvec2(1.0, 0.0),
        };
        let hit = ray_tilemap_intersection(&ray, &map);
        assert_eq!(hit.map_position, ivec2(5, 2));
        assert_eq!(hit.side, Side::X);
        assert_eq!(hit.normal, dvec2(-1.0, 0.0));
        assert!((hit.hit_position - dvec2(5.0, 2.5)).length() < 1e-12);
        assert!((hit.perpendicular_distance - 2.5).abs() < 1e-12);
    }

    #[test]
    fn diagonal_walk_crosses_both_axes() {
        let map = walled_map(6, &[]);
        let ray = Ray2 {
            origin: dvec2(2.0, 2.0),
            dir: dvec2(1.0, 0.5),
        };
        let hit = ray_tilemap_intersection(&ray, &map);
        assert_eq!(hit.map_position, ivec2(5, 3));
        assert_eq!(hit.side, Side::X);
        assert_eq!(hit.normal, dvec2(-1.0, 0.0));
        assert!((hit.hit_position - dvec2(5.0, 3.5)).length() < 1e-9);
        assert!((hit.perpendicular_distance - 3.0).abs() < 1e-12);
    }

    #[test]
    fn every_direction_terminates_in_a_wall_cell() {
        let map = walled_map(8, &[(3, 3), (5, 2)]);
        for i in 0..64 {
            let angle = i as f64 * std::f64::consts::TAU / 64.0;
            let ray = Ray2 {
                origin: dvec2(1.5 + (i % 5) as f64, 1.5 + (i % 4) as f64),
                dir: dvec2(angle.cos(), angle.sin()),
            };
            let hit = ray_tilemap_intersection(&ray, &map);
            assert!(map.is_wall(hit.map_position.x, hit.map_position.y));
            assert!(hit.perpendicular_distance >= 0.0);
        }
    }

    #[test]
    fn rising_ray_reaches_the_ceiling_before_the_wall() {
        let map = walled_map(6, &[(3, 2)]);
        let ray = Ray3 {
            origin: dvec3(1.5, 4.5, 0.5),
            dir: dvec3(2.0, -1.5, 1.0),
        };
        let hit = ray_tilemap_ceiling_floor_intersection(&ray, &map);
        assert_eq!(hit.normal, dvec3(0.0, 0.0, -1.0));
        assert!((hit.ray_scale - 0.5).abs() < 1e-12);
        assert!((hit.position - dvec3(2.5, 3.75, 1.0)).length() < 1e-12);
    }

    #[test]
    fn falling_ray_lands_on_the_floor() {
        let map = walled_map(6, &[]);
        let ray = Ray3 {
            origin: dvec3(2.5, 2.5, 0.5),
            dir: dvec3(1.0, 0.0, -0.5),
        };
        let hit = ray_tilemap_ceiling_floor_intersection(&ray, &map);
        assert_eq!(hit.normal, DVec3::Z);
        assert!((hit.ray_scale - 1.0).abs() < 1e-12);
        assert!((hit.position - dvec3(3.5, 2.5, 0.0)).length() < 1e-12);
    }

    #[test]
    fn level_ray_stops_on_the_wall_face() {
        let map = walled_map(6, &[]);
        let ray = Ray3 {
            origin: dvec3(2.5, 2.5, 0.5),
            dir: dvec3(1.0, 0.0, 0.1),
        };
        let hit = ray_tilemap_ceiling_floor_intersection(&ray, &map);
        assert_eq!(hit.normal, dvec3(-1.0, 0.0, 0.0));
        assert!((hit.ray_scale - 2.5).abs() < 1e-12);
        assert!((hit.position.x - 5.0).abs() < 1e-12);
        assert!((hit.position.z - 0.75).abs() < 1e-12);
    }

    #[test]
    fn vertical_ray_needs_no_planar_walk() {
        let map = walled_map(6, &[]);
        let up = Ray3 {
            origin: dvec3(2.5, 2.5, 0.25),
            dir: dvec3(0.0, 0.0, 1.0),
        };
        let hit = ray_tilemap_ceiling_floor_intersection(&up, &map);
        assert_eq!(hit.normal, dvec3(0.0, 0.0, -1.0));
        assert!((hit.ray_scale - 0.75).abs() < 1e-12);
    }
}
