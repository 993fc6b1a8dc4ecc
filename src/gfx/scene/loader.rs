//! Scene loading from `.XYZ` block files
//!
//! The format is intentionally tiny: an integer count `N` followed by `N`
//! whitespace-separated coordinate triples, in any mixture of spaces and
//! newlines. Validation is strict and fails without partial state; trailing
//! data after the last triple is ignored.

use std::fs;
use std::path::Path;

use cgmath::{Matrix4, Vector3};
use log::info;

use crate::error::ViewerError;

/// Expected input extension, matched case-sensitively.
const BLOCK_FILE_EXTENSION: &str = "XYZ";

/// One unit cube placed at a fixed position, parsed from one coordinate triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeInstance {
    pub position: Vector3<f32>,
}

impl CubeInstance {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vector3::new(x, y, z),
        }
    }

    /// Per-instance model matrix: a pure translation to the block position.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
    }
}

/// Loads cube instances from a `.XYZ` file.
///
/// Verifies the path exists, is a regular file and carries the `.XYZ`
/// extension before reading. Returns exactly as many instances as the file's
/// leading count declares, in file order.
pub fn load_blocks(path: &Path) -> Result<Vec<CubeInstance>, ViewerError> {
    if !path.exists() {
        return Err(ViewerError::FileNotFound(path.to_path_buf()));
    }
    if path.is_dir() {
        return Err(ViewerError::NotAFile(path.to_path_buf()));
    }
    if path.extension().and_then(|e| e.to_str()) != Some(BLOCK_FILE_EXTENSION) {
        return Err(ViewerError::WrongExtension(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let mut tokens = contents.split_whitespace();

    let count_token = tokens.next().unwrap_or("");
    let count: usize = count_token
        .parse()
        .map_err(|_| ViewerError::MalformedCount(count_token.to_string()))?;

    let mut blocks = Vec::with_capacity(count);
    for read in 0..count {
        let mut triple = [0.0f32; 3];
        for value in triple.iter_mut() {
            let token = tokens.next().ok_or(ViewerError::UnexpectedEof {
                expected: count,
                found: read,
            })?;
            *value = token
                .parse()
                .map_err(|_| ViewerError::MalformedCoordinate(token.to_string()))?;
        }
        blocks.push(CubeInstance::new(triple[0], triple[1], triple[2]));
    }

    info!("loaded {} blocks from {}", blocks.len(), path.display());
    Ok(blocks)
}
