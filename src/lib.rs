//! Software raycasting renderer for 2.5-D tile worlds.
//!
//! * Projects a tile grid into a caller-owned RGBA frame buffer using
//!   per-column DDA traversal, with optional floor/ceiling scanlines,
//!   billboard sprites, a directional light and linear fog.
//! * The ray queries the renderer is built on are exported as pure
//!   functions in [`ray`] so callers can reuse them for picking and
//!   line-of-sight tests.
//! * The crate writes pixels and nothing else: asset decoding,
//!   windowing, input and frame pacing live with the caller.
//!
//! One [`renderer::Raycaster`] renders on one thread; independent
//! instances with disjoint frame buffers are free to run in parallel.

pub mod ray;
pub mod renderer;
pub mod world;

pub use renderer::{ClearTarget, Raycaster, Scene};
pub use world::{
    Billboard, Camera, Fog, FrameBuffer, Light, Texture, TextureError, Tilemap, TilemapError,
};
