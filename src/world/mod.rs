mod billboard;
mod camera;
mod lighting;
mod texture;
mod tilemap;

pub use billboard::Billboard;
pub use camera::Camera;
pub use lighting::{Fog, Light, Shade};
pub use texture::{FrameBuffer, Texture, TextureError};
pub use tilemap::{Tilemap, TilemapError};
