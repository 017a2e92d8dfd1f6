use crate::renderer::{ClearTarget, Scene};
use crate::world::FrameBuffer;

/// Column raycaster writing into a borrowed frame buffer.
///
/// Owns one depth value per screen column (the perpendicular distance
/// of the last wall drawn there) used to occlude billboards. Everything
/// else — map, textures, camera — is read through the [`Scene`] for the
/// duration of one `render` call and must not change underneath it.
pub struct Raycaster<'fb> {
    pub(super) frame: &'fb mut FrameBuffer,
    pub(super) z_buffer: Vec<f64>,

    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) width_f: f64,
    pub(super) height_f: f64,
    pub(super) half_w: f64,
    pub(super) half_h: f64,
}

impl<'fb> Raycaster<'fb> {
    pub fn new(frame: &'fb mut FrameBuffer) -> Self {
        let width = frame.width();
        let height = frame.height();
        Self {
            z_buffer: vec![f64::INFINITY; width],
            width,
            height,
            width_f: width as f64,
            height_f: height as f64,
            half_w: width as f64 * 0.5,
            half_h: height as f64 * 0.5,
            frame,
        }
    }

    /// Reset the chosen targets; an empty set resets both.
    pub fn clear(&mut self, targets: ClearTarget) {
        let targets = if targets.is_empty() {
            ClearTarget::all()
        } else {
            targets
        };
        if targets.contains(ClearTarget::COLOR) {
            self.frame.pixels_mut().fill(0);
        }
        if targets.contains(ClearTarget::DEPTH) {
            self.z_buffer.fill(f64::INFINITY);
        }
    }

    /// Draw one frame: clear, floor/ceiling scanlines, wall columns
    /// (filling the depth buffer), then billboards far to near.
    pub fn render(&mut self, scene: &Scene) {
        self.clear(ClearTarget::all());

        if scene.floor.is_some() || scene.ceiling.is_some() {
            self.draw_planes(scene);
        }
        if let (Some(tilemap), Some(textures)) = (scene.tilemap, scene.textures) {
            self.draw_walls(scene, tilemap, textures);
        }
        if !scene.billboards.is_empty() {
            self.draw_billboards(scene);
        }
    }

    /// Depth of the nearest wall drawn in column `x` this frame.
    #[inline]
    pub fn column_depth(&self, x: usize) -> f64 {
        self.z_buffer[x]
    }

    #[inline]
    pub(super) fn put_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        debug_assert!(x < self.width && y < self.height);
        let i = 4 * (y * self.width + x);
        let px = self.frame.pixels_mut();
        px[i] = rgb[0];
        px[i + 1] = rgb[1];
        px[i + 2] = rgb[2];
        px[i + 3] = 0xFF;
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
