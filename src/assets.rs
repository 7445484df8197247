//! Asset manifest and path resolution

use crate::entity::{EntityKind, ObstacleKind};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PLAYER_IMAGE: &str = "player.png";
pub const HARMFUL_IMAGES: [&str; 3] = ["doritos.png", "oreo.png", "burger.png"];
pub const BENEFICIAL_IMAGES: [&str; 3] = ["strawberry.png", "lemon.png", "cheese.png"];
pub const FONT_FILE: &str = "font.ttf";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {}", .path.display())]
    Missing { path: PathBuf },
    #[error("failed to load {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },
    #[error("failed to load font: {reason}")]
    Font { reason: String },
    #[error("video subsystem: {0}")]
    Video(String),
}

/// Image file names for an entity kind, one per sprite variant
pub fn images_for(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::Player => &[PLAYER_IMAGE],
        EntityKind::Obstacle(ObstacleKind::Harmful) => &HARMFUL_IMAGES,
        EntityKind::Obstacle(ObstacleKind::Beneficial) => &BENEFICIAL_IMAGES,
    }
}

/// Resolves `relative` against the executable's directory when the file exists there
/// (packaged builds), otherwise against the current working directory.
pub fn resource_path<P: AsRef<Path>>(relative: P) -> PathBuf {
    let relative = relative.as_ref();
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    resolve_in(exe_dir.as_deref(), relative)
}

fn resolve_in(base: Option<&Path>, relative: &Path) -> PathBuf {
    if let Some(base) = base {
        let candidate = base.join(relative);
        if candidate.exists() {
            return candidate;
        }
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(relative))
        .unwrap_or_else(|_| relative.to_path_buf())
}

/// Resolves an asset file, failing if it doesn't exist
pub fn locate(asset_dir: &Path, file: &str) -> Result<PathBuf, AssetError> {
    let path = resource_path(asset_dir.join(file));
    if path.exists() {
        Ok(path)
    } else {
        Err(AssetError::Missing { path })
    }
}
