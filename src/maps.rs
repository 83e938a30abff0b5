//! Named map persistence
//!
//! Maps live as JSON files under one directory, one file per map, holding
//! the raw row-major matrix of block codes — no header, no version field,
//! no metadata. A file either loads as a complete valid level or the load
//! fails whole.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::sim::{Grid, LevelError};

/// Why a map failed to load or save.
#[derive(Debug)]
pub enum MapError {
    Io(io::Error),
    /// The file is not a JSON array of arrays of integers
    Json(serde_json::Error),
    /// The matrix decoded but is not a valid level
    Level(LevelError),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Io(e) => write!(f, "map file i/o failed: {e}"),
            MapError::Json(e) => write!(f, "map file is not a block matrix: {e}"),
            MapError::Level(e) => write!(f, "map is not a valid level: {e}"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::Io(e) => Some(e),
            MapError::Json(e) => Some(e),
            MapError::Level(e) => Some(e),
        }
    }
}

impl From<io::Error> for MapError {
    fn from(e: io::Error) -> Self {
        MapError::Io(e)
    }
}

impl From<serde_json::Error> for MapError {
    fn from(e: serde_json::Error) -> Self {
        MapError::Json(e)
    }
}

impl From<LevelError> for MapError {
    fn from(e: LevelError) -> Self {
        MapError::Level(e)
    }
}

/// A directory of named maps.
#[derive(Debug, Clone)]
pub struct MapStore {
    dir: PathBuf,
}

impl MapStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for a map name.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    /// Load a named map as a validated grid.
    pub fn load(&self, name: &str) -> Result<Grid, MapError> {
        let path = self.path_of(name);
        let text = fs::read_to_string(&path)?;
        let matrix: Vec<Vec<u8>> = serde_json::from_str(&text)?;
        let grid = Grid::from_matrix(&matrix)?;
        log::info!(
            "loaded map {} ({}x{})",
            path.display(),
            grid.rows(),
            grid.cols()
        );
        Ok(grid)
    }

    /// Save a grid under a map name, creating the directory if needed.
    pub fn save(&self, name: &str, grid: &Grid) -> Result<PathBuf, MapError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_of(name);
        let json = serde_json::to_string(&grid.to_matrix())?;
        fs::write(&path, json)?;
        log::info!("saved map {}", path.display());
        Ok(path)
    }

    /// Names of the maps on disk, sorted. A missing directory is just an
    /// empty store.
    pub fn list(&self) -> Result<Vec<String>, MapError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::BlockType;

    fn scratch_store(tag: &str) -> MapStore {
        let dir = std::env::temp_dir().join(format!("angry-cubes-{}-{tag}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        MapStore::new(dir)
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = scratch_store("round-trip");
        let mut grid = Grid::new(2, 3);
        grid.set_block(0, 0, BlockType::Slingshot);
        grid.set_block(1, 2, BlockType::Solid);

        store.save("fortress", &grid).unwrap();
        let loaded = store.load("fortress").unwrap();
        assert_eq!(loaded, grid);

        fs::remove_dir_all(store.dir()).unwrap();
    }

    #[test]
    fn test_list_is_sorted_and_tolerates_missing_dir() {
        let store = scratch_store("list");
        assert!(store.list().unwrap().is_empty());

        let mut grid = Grid::new(1, 1);
        grid.set_block(0, 0, BlockType::Slingshot);
        store.save("beta", &grid).unwrap();
        store.save("alpha", &grid).unwrap();
        assert_eq!(store.list().unwrap(), vec!["alpha", "beta"]);

        fs::remove_dir_all(store.dir()).unwrap();
    }

    #[test]
    fn test_corrupt_file_fails_whole() {
        let store = scratch_store("corrupt");
        fs::create_dir_all(store.dir()).unwrap();
        fs::write(store.path_of("bad"), "[[0,1],[0]]").unwrap();

        match store.load("bad") {
            Err(MapError::Level(LevelError::RaggedRows { .. })) => {}
            other => panic!("expected ragged-rows failure, got {other:?}"),
        }

        fs::write(store.path_of("worse"), "not json").unwrap();
        assert!(matches!(store.load("worse"), Err(MapError::Json(_))));

        fs::remove_dir_all(store.dir()).unwrap();
    }
}
