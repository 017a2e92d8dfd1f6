use glam::{dvec3, DVec2};

use crate::ray::Ray3;
use crate::world::Camera;

/// Unproject a normalized screen point into a world ray.
///
/// `point` lives in [0,1]² with the origin at the top left. The ray
/// starts at eye height (z = 0.5); its planar part matches the column
/// ray the wall pass shoots at the same horizontal position, so the
/// direction is generally not unit length.
pub fn screen_point_to_ray(point: DVec2, camera: &Camera) -> Ray3 {
    let t = 2.0 * point.x - 1.0;
    let dir = camera.direction() + camera.plane() * t;
    Ray3 {
        origin: dvec3(camera.position().x, camera.position().y, 0.5),
        dir: dvec3(dir.x, dir.y, (1.0 - point.y) - 0.5),
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn unprojects_off_centre_points() {
        let cam = Camera::new(2.0, 3.0, 0.0, 16.0 / 9.0);
        let ray = screen_point_to_ray(dvec2(0.75, 0.25), &cam);

        assert_eq!(ray.origin, dvec3(2.0, 3.0, 0.5));
        let expected = cam.direction() + cam.plane() * 0.5;
        assert!((ray.dir.x - expected.x).abs() < 1e-12);
        assert!((ray.dir.y - expected.y).abs() < 1e-12);
        assert!((ray.dir.z - 0.25).abs() < 1e-12);
    }

    #[test]
    fn screen_centre_looks_straight_ahead() {
        let cam = Camera::new(0.0, 0.0, 1.2, 1.0);
        let ray = screen_point_to_ray(dvec2(0.5, 0.5), &cam);
        assert!((ray.dir.x - cam.direction().x).abs() < 1e-12);
        assert!((ray.dir.y - cam.direction().y).abs() < 1e-12);
        assert_eq!(ray.dir.z, 0.0);
    }

    #[test]
    fn planar_part_stays_in_the_view_span() {
        // For any screen x the planar direction is dir + t·plane with
        // t in [-1, 1]; recover t and check both components agree.
        let cam = Camera::new(1.0, 1.0, 0.77, 1.6);
        for i in 0..=10 {
            let nx = i as f64 / 10.0;
            let ray = screen_point_to_ray(dvec2(nx, 0.3), &cam);
            let planar = dvec2(ray.dir.x, ray.dir.y) - cam.direction();
            let t = planar.dot(cam.plane()) / cam.plane().length_squared();
            assert!((t - (2.0 * nx - 1.0)).abs() < 1e-9);
            assert!((planar - cam.plane() * t).length() < 1e-9);
        }
    }
}
