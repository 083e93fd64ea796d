//! Asset loading. One error policy throughout: loaders return `Err` with
//! path context, callers log and carry on with an unpopulated scene.

pub mod model;
pub mod texture;

pub use model::{load_model, LogoModel, LogoPart, MaterialKind, PartKind};
pub use texture::{load_texture, load_texture_pair, GpuTexture, TexturePair};
