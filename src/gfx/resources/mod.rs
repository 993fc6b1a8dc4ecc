pub mod global_bindings;
pub mod texture_resource;

pub use global_bindings::{GlobalBindings, GlobalUBO};
pub use texture_resource::TextureResource;
