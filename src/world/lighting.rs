use glam::DVec3;

/// Directional light with an ambient term.
///
/// `direction` is the direction the light travels (not light→surface
/// reversed); channels are linear in [0, 1].
#[derive(Clone, Copy, Debug)]
pub struct Light {
    pub direction: DVec3,
    pub color: DVec3,
    pub ambient: DVec3,
}

/// Linear fog between a near and a far distance, `near < far`.
#[derive(Clone, Copy, Debug)]
pub struct Fog {
    pub near: f64,
    pub far: f64,
    pub color: DVec3,
}

impl Fog {
    /// Surface visibility at `distance`: 1 leaves the surface colour
    /// untouched, 0 is pure fog colour.
    #[inline]
    pub fn factor(&self, distance: f64) -> f64 {
        ((self.far - distance) / (self.far - self.near)).clamp(0.0, 1.0)
    }
}

/// Shading for one surface, precomposed.
///
/// A Lambert-like N·L term plus ambient scales the texel, then the fog
/// colour is blended in by distance. Folding both into `rgb * mul + add`
/// leaves one fused multiply-add per channel in the pixel loops; the
/// saturating `f64 → u8` cast performs the 8-bit clamp.
#[derive(Clone, Copy, Debug)]
pub struct Shade {
    mul: DVec3,
    add: DVec3,
}

impl Shade {
    /// Compose the shade for a surface with the given `normal` at
    /// `distance` from the view plane. Absent light means unit surface
    /// scale; absent fog means no blend.
    pub fn new(light: Option<&Light>, fog: Option<&Fog>, normal: DVec3, distance: f64) -> Self {
        let scale = match light {
            Some(l) => l.color * l.direction.dot(normal).max(0.0) + l.ambient,
            None => DVec3::ONE,
        };
        match fog {
            Some(f) => {
                let t = f.factor(distance);
                Shade {
                    mul: scale * t,
                    add: f.color * ((1.0 - t) * 255.0),
                }
            }
            None => Shade {
                mul: scale,
                add: DVec3::ZERO,
            },
        }
    }

    /// Shade one RGBA texel down to its destination RGB bytes.
    #[inline]
    pub fn apply(&self, rgba: [u8; 4]) -> [u8; 3] {
        [
            (rgba[0] as f64 * self.mul.x + self.add.x) as u8,
            (rgba[1] as f64 * self.mul.y + self.add.y) as u8,
            (rgba[2] as f64 * self.mul.z + self.add.z) as u8,
        ]
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
