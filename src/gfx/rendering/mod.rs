pub mod render_engine;

pub use render_engine::RenderEngine;
