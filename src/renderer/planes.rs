use glam::DVec3;

use crate::renderer::{Raycaster, Scene};
use crate::world::Shade;

impl Raycaster<'_> {
    /// Floor/ceiling pass.
    ///
    /// Every screen row in the top half sits at one horizontal distance
    /// from the eye; walking that row interpolates the world position
    /// between the leftmost and rightmost column rays. The ceiling takes
    /// the row itself, the floor its mirror below the horizon, off the
    /// same walk.
    pub(super) fn draw_planes(&mut self, scene: &Scene) {
        let camera = scene.camera;
        let dir = camera.direction();
        let plane = camera.plane();

        let ray0 = dir - plane; // leftmost column
        let ray1 = dir + plane; // rightmost column

        // every row above the horizon, including the middle row of an
        // odd-height frame
        let mut y = 0usize;
        while (y as f64) < self.half_h {
            let row_distance = self.half_h / (self.half_h - y as f64);

            let step = (ray1 - ray0) * (row_distance / self.width_f);
            let mut world = camera.position() + ray0 * row_distance;

            let ceiling = scene
                .ceiling
                .map(|tex| (tex, Shade::new(scene.light, scene.fog, -DVec3::Z, row_distance)));
            let floor = scene
                .floor
                .map(|tex| (tex, Shade::new(scene.light, scene.fog, DVec3::Z, row_distance)));

            for x in 0..self.width {
                // fractional world coordinates; floor keeps negatives
                // wrapped up into [0, 1)
                let u = world.x - world.x.floor();
                let v = world.y - world.y.floor();

                if let Some((tex, shade)) = &ceiling {
                    let tx = ((u * tex.width() as f64) as usize).min(tex.width() - 1);
                    let ty = ((v * tex.height() as f64) as usize).min(tex.height() - 1);
                    self.put_pixel(x, y, shade.apply(tex.texel(tx, ty)));
                }
                if let Some((tex, shade)) = &floor {
                    let tx = ((u * tex.width() as f64) as usize).min(tex.width() - 1);
                    let ty = ((v * tex.height() as f64) as usize).min(tex.height() - 1);
                    let row = self.height - 1 - y;
                    self.put_pixel(x, row, shade.apply(tex.texel(tx, ty)));
                }

                world += step;
            }

            y += 1;
        }
    }
}
