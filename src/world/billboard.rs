use std::f64::consts::TAU;

use glam::DVec2;

use crate::world::Texture;

/// Flat textured quad standing upright in the world, always drawn
/// facing the camera.
///
/// * The canvas is one world unit square before `scale` stretches it,
///   centred on the half-height line; `v_offset` lifts the centre in
///   world units (positive is up).
/// * `angle` is the direction the sprite itself faces in the ground
///   plane. `textures` holds one view per equal sector of a full turn,
///   view 0 being the front as seen from straight ahead; with four
///   views the order reads front, right, rear, left.
///
/// At least one texture must be supplied.
#[derive(Clone, Debug)]
pub struct Billboard {
    pub position: DVec2,
    pub scale: DVec2,
    pub v_offset: f64,
    pub angle: f64,
    pub textures: Vec<Texture>,
}

impl Billboard {
    /// Unit facing vector of `angle` in the ground plane.
    #[inline]
    pub fn facing(&self) -> DVec2 {
        DVec2::from_angle(self.angle)
    }

    /// Which directional view an observer at `from` sees.
    ///
    /// The full turn is split into `textures.len()` equal sectors
    /// centred on the views, so the selection flips halfway between two
    /// adjacent views.
    pub fn view_index(&self, from: DVec2) -> usize {
        let n = self.textures.len();
        debug_assert!(n > 0);
        let range = TAU / n as f64;
        let to_observer = (from.y - self.position.y).atan2(from.x - self.position.x);
        let bearing = (to_observer - self.angle + range * 0.5).rem_euclid(TAU);
        // bearing can graze TAU through rounding; stay on the last view
        ((bearing / range) as usize).min(n - 1)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;
    use std::f64::consts::PI;

    fn billboard(angle: f64, views: usize) -> Billboard {
        Billboard {
            position: dvec2(4.0, 4.0),
            scale: DVec2::ONE,
            v_offset: 0.0,
            angle,
            textures: vec![Texture::default(); views],
        }
    }

    #[test]
    fn single_view_always_selected() {
        let bb = billboard(1.3, 1);
        assert_eq!(bb.view_index(dvec2(9.0, 2.0)), 0);
        assert_eq!(bb.view_index(dvec2(-3.0, 4.0)), 0);
    }

    #[test]
    fn four_views_walk_front_right_rear_left() {
        // Faces +X; observers a quarter turn apart see consecutive views.
        let bb = billboard(0.0, 4);
        assert_eq!(bb.view_index(dvec2(9.0, 4.0)), 0); // ahead
        assert_eq!(bb.view_index(dvec2(4.0, 9.0)), 1); // quarter turn on
        assert_eq!(bb.view_index(dvec2(-1.0, 4.0)), 2); // behind
        assert_eq!(bb.view_index(dvec2(4.0, -1.0)), 3); // quarter turn back
    }

    #[test]
    fn rotating_by_one_sector_cycles_the_view() {
        let observer = dvec2(9.0, 4.0);
        for n in [2usize, 3, 4, 8] {
            let range = TAU / n as f64;
            let base = billboard(0.4, n).view_index(observer);
            for k in 1..=n {
                let turned = billboard(0.4 + range * k as f64, n).view_index(observer);
                assert_eq!(
                    turned,
                    (base + n - k) % n,
                    "n={n} k={k}: one sector of facing must shift one view"
                );
            }
        }
    }

    #[test]
    fn selection_flips_halfway_between_views() {
        let bb = billboard(0.0, 4);
        // just inside the front sector vs just past its edge
        let eps = 1e-6;
        let inside = dvec2(
            4.0 + (PI / 4.0 - eps).cos(),
            4.0 + (PI / 4.0 - eps).sin(),
        );
        let outside = dvec2(
            4.0 + (PI / 4.0 + eps).cos(),
            4.0 + (PI / 4.0 + eps).sin(),
        );
        assert_eq!(bb.view_index(inside), 0);
        assert_eq!(bb.view_index(outside), 1);
    }
}
