pub mod loader;
pub mod mesh;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use loader::{load_blocks, CubeInstance};
pub use mesh::{DrawMesh, Mesh};
pub use scene::Scene;
