//! Frame composition.
//!
//! One [`Raycaster::render`] call runs a fixed pipeline over a borrowed
//! frame buffer:
//!
//! * clear colour and depth,
//! * floor/ceiling scanlines (row-distance walk),
//! * wall columns (grid DDA, filling the per-column depth buffer),
//! * billboards, painter-sorted and depth-tested per column.
//!
//! Every stage is optional except the clear; a [`Scene`] carries
//! whichever ingredients the caller has.

mod planes;
mod raycaster;
mod sprites;
mod walls;

use bitflags::bitflags;

pub use raycaster::Raycaster;

use crate::world::{Billboard, Camera, Fog, Light, Texture, Tilemap};

bitflags! {
    /// Which targets a [`Raycaster::clear`] call resets.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ClearTarget: u8 {
        /// The frame buffer's pixels, to transparent black.
        const COLOR = 0b01;
        /// The per-column depth buffer, to +∞.
        const DEPTH = 0b10;
    }
}

/// Everything one frame reads. The camera is mandatory; each optional
/// ingredient enables its pass (walls need the tilemap and its texture
/// set together).
#[derive(Clone, Copy)]
pub struct Scene<'a> {
    pub camera: &'a Camera,
    pub tilemap: Option<&'a Tilemap>,
    /// Wall textures, indexed by cell code minus one.
    pub textures: Option<&'a [Texture]>,
    pub floor: Option<&'a Texture>,
    pub ceiling: Option<&'a Texture>,
    pub billboards: &'a [Billboard],
    pub light: Option<&'a Light>,
    pub fog: Option<&'a Fog>,
}

impl<'a> Scene<'a> {
    /// A scene with nothing in it but the viewer.
    pub fn new(camera: &'a Camera) -> Self {
        Self {
            camera,
            tilemap: None,
            textures: None,
            floor: None,
            ceiling: None,
            billboards: &[],
            light: None,
            fog: None,
        }
    }
}
