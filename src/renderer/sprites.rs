use glam::dvec3;
use smallvec::SmallVec;

use crate::renderer::{Raycaster, Scene};
use crate::world::{Billboard, Shade};

/// One billboard that survived the view transform.
struct VisBillboard<'a> {
    billboard: &'a Billboard,
    /// Camera-space lateral offset.
    x_cam: f64,
    /// Camera-space depth, tested against the wall depth buffer.
    y_cam: f64,
    dist_sq: f64,
}

impl Raycaster<'_> {
    /// Billboard pass: transform into camera space, painter-sort far to
    /// near, then draw column by column against the wall depth buffer.
    pub(super) fn draw_billboards(&mut self, scene: &Scene) {
        let camera = scene.camera;
        let dir = camera.direction();
        let plane = camera.plane();
        let pos = camera.position();

        // Inverse of the [plane dir] basis; the determinant collapses
        // only if the camera invariants were broken.
        let det = plane.x * dir.y - dir.x * plane.y;
        debug_assert!(det != 0.0);
        let inv_det = 1.0 / det;

        let mut visible: SmallVec<[VisBillboard; 8]> = SmallVec::new();
        for billboard in scene.billboards {
            let delta = billboard.position - pos;
            let x_cam = inv_det * (dir.y * delta.x - dir.x * delta.y);
            let y_cam = inv_det * (-plane.y * delta.x + plane.x * delta.y);
            if y_cam <= 0.0 {
                continue; // behind the view plane
            }
            visible.push(VisBillboard {
                billboard,
                x_cam,
                y_cam,
                dist_sq: delta.length_squared(),
            });
        }

        visible.sort_by(|a, b| b.dist_sq.total_cmp(&a.dist_sq));

        for vis in &visible {
            self.draw_billboard(scene, vis);
        }
    }

    fn draw_billboard(&mut self, scene: &Scene, vis: &VisBillboard) {
        let bb = vis.billboard;
        debug_assert!(!bb.textures.is_empty());
        let tex = &bb.textures[bb.view_index(scene.camera.position())];

        // Screen placement. Float floors plus saturating casts keep the
        // near-zero-depth case finite.
        let span = (self.height_f / vis.y_cam).floor().abs();
        let sprite_w = span * bb.scale.x;
        let sprite_h = span * bb.scale.y;
        if sprite_w <= 0.0 || sprite_h <= 0.0 {
            return;
        }

        let offset_y = (-bb.v_offset / vis.y_cam * self.height_f).floor();
        let screen_x = (self.half_w * (1.0 + vis.x_cam / vis.y_cam)).floor();

        let left = screen_x - sprite_w * 0.5;
        let top = offset_y + (self.height_f - sprite_h) * 0.5;
        if left + sprite_w < 0.0
            || left >= self.width_f
            || top + sprite_h < 0.0
            || top >= self.height_f
        {
            return;
        }

        let x0 = left.floor().max(0.0) as usize;
        let x1 = ((left + sprite_w).floor().min(self.width_f - 1.0)) as usize;
        let y0 = top.floor().max(0.0) as usize;
        let y1 = ((top + sprite_h).floor().min(self.height_f - 1.0)) as usize;

        let normal = (bb.position - scene.camera.position()).normalize_or_zero();
        let shade = Shade::new(
            scene.light,
            scene.fog,
            dvec3(normal.x, normal.y, 0.0),
            vis.y_cam,
        );

        let tex_w = tex.width();
        let tex_h = tex.height();
        for x in x0..=x1 {
            if vis.y_cam >= self.z_buffer[x] {
                continue; // a wall is closer in this column
            }
            let u = (x as f64 - left) / sprite_w;
            let tex_x = ((u * tex_w as f64) as usize).min(tex_w - 1);
            for y in y0..=y1 {
                let v = (y as f64 - top) / sprite_h;
                let tex_y = ((v * tex_h as f64) as usize).min(tex_h - 1);
                let rgba = tex.texel(tex_x, tex_y);
                if rgba[3] > 0 {
                    self.put_pixel(x, y, shade.apply(rgba));
                }
            }
        }
    }
}
