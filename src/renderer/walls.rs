use glam::dvec3;

use crate::ray::{ray_tilemap_intersection, Ray2, Side};
use crate::renderer::{Raycaster, Scene};
use crate::world::{Shade, Texture, Tilemap};

impl Raycaster<'_> {
    /// Wall pass: one grid walk per screen column.
    ///
    /// Every column records its perpendicular wall distance in the depth
    /// buffer whether or not shading is active; the billboard pass
    /// depends on it.
    pub(super) fn draw_walls(&mut self, scene: &Scene, tilemap: &Tilemap, textures: &[Texture]) {
        let camera = scene.camera;
        let dir = camera.direction();
        let plane = camera.plane();
        let fallback = Texture::default();

        for x in 0..self.width {
            let cam_x = 2.0 * x as f64 / self.width_f - 1.0;
            let ray = Ray2 {
                origin: camera.position(),
                dir: dir + plane * cam_x,
            };
            let hit = ray_tilemap_intersection(&ray, tilemap);
            let perp = hit.perpendicular_distance;

            self.z_buffer[x] = perp;

            let code = tilemap.cell(hit.map_position.x, hit.map_position.y);
            let tex = textures.get(code as usize - 1).unwrap_or(&fallback);

            // wall-space U: the free coordinate along the face
            let wall_pos = match hit.side {
                Side::X => hit.hit_position.y,
                Side::Y => hit.hit_position.x,
            };
            let u = wall_pos - wall_pos.floor();
            let mut tex_x = (u * tex.width() as f64) as usize;
            // mirror so the texture reads the same way round while the
            // camera orbits the wall
            let flipped = match hit.side {
                Side::X => ray.dir.x < 0.0,
                Side::Y => ray.dir.y > 0.0,
            };
            if flipped {
                tex_x = tex.width() - 1 - tex_x;
            }

            let line_h = (self.height_f / perp).floor();
            let draw_start = ((self.height_f - line_h) * 0.5).floor().max(0.0);
            let draw_end = ((self.height_f + line_h) * 0.5).floor().min(self.height_f - 1.0);

            // V runs 0→1 over the unclipped column so clipped columns
            // show the matching sub-rectangle
            let v_step = tex.height() as f64 / line_h;
            let mut v_pos = (draw_start - (self.height_f - line_h) * 0.5) * v_step;

            let shade = Shade::new(
                scene.light,
                scene.fog,
                dvec3(hit.normal.x, hit.normal.y, 0.0),
                perp,
            );

            let mut y = draw_start as usize;
            let end = draw_end as usize;
            while y <= end {
                let tex_y = (v_pos as usize).min(tex.height() - 1);
                let rgb = shade.apply(tex.texel(tex_x, tex_y));
                self.put_pixel(x, y, rgb);
                v_pos += v_step;
                y += 1;
            }
        }
    }
}
