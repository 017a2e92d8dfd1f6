use glam::{dvec2, DVec2};

/// View-point in the tile world.
///
/// * Only **yaw** is simulated; the eye sits at half height between
///   floor (z = 0) and ceiling (z = 1).
/// * Yaw 0 looks along −Y; positive yaw turns in the mathematical
///   sense of the crate's X-right/Y-down ground plane.
/// * `dir` is the unit forward vector. `plane` is the horizontal
///   half-extent of the view: its magnitude is half the aspect ratio,
///   so the column rays of a frame sweep `dir − plane .. dir + plane`.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    position: DVec2,
    yaw: f64,
    aspect: f64,
    dir: DVec2,
    plane: DVec2,
}

impl Camera {
    /// Camera at `(x, y)` facing `yaw`, with the given aspect ratio.
    pub fn new(x: f64, y: f64, yaw: f64, aspect: f64) -> Self {
        let mut cam = Self {
            position: dvec2(x, y),
            yaw,
            aspect,
            dir: DVec2::ZERO,
            plane: DVec2::ZERO,
        };
        cam.rebuild_basis();
        cam
    }

    fn rebuild_basis(&mut self) {
        let rot = DVec2::from_angle(self.yaw);
        self.dir = rot.rotate(dvec2(0.0, -1.0));
        self.plane = rot.rotate(dvec2(self.aspect * 0.5, 0.0));
    }

    /*──────────────────────── accessors ─────────────────────────────*/

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.yaw
    }

    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect
    }

    /// Unit vector pointing where the camera looks on the X-Y plane.
    #[inline]
    pub fn direction(&self) -> DVec2 {
        self.dir
    }

    /// Horizontal half-extent vector; |plane| = aspect / 2.
    #[inline]
    pub fn plane(&self) -> DVec2 {
        self.plane
    }

    /*──────────────────────── mutation ──────────────────────────────*/

    #[inline]
    pub fn set_position(&mut self, position: DVec2) {
        self.position = position;
    }

    /// Rebuilds the view half-extent, preserving the heading.
    pub fn set_aspect_ratio(&mut self, aspect: f64) {
        self.aspect = aspect;
        self.plane = DVec2::from_angle(self.yaw).rotate(dvec2(aspect * 0.5, 0.0));
    }

    /// Incremental turn: rotates the cached basis along with the yaw.
    /// Floating-point drift accumulates over many calls;
    /// [`Camera::rotate_to`] resets the basis exactly.
    pub fn rotate(&mut self, delta: f64) {
        self.yaw += delta;
        let rot = DVec2::from_angle(delta);
        self.dir = rot.rotate(self.dir);
        self.plane = rot.rotate(self.plane);
    }

    /// Set the heading and reconstruct the basis from scratch.
    pub fn rotate_to(&mut self, yaw: f64) {
        self.yaw = yaw;
        self.rebuild_basis();
    }

    /// Translate in view-local axes: `dx` toward the camera's right,
    /// `dy` along the view direction. Collision is the caller's job.
    pub fn move_local(&mut self, dx: f64, dy: f64) {
        let right = -self.dir.perp();
        self.position += right * dx + self.dir * dy;
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
