//! Processor configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use quadtree::{Bounds, Node, QuadTree};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "quadtree.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `quadtree.toml` is read
    /// from the working directory if present, otherwise defaults are used.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
        }
    }

    /// Read `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("No {:?} found, using defaults", path);
            Ok(Self::default())
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.index.validate()?;
        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }
}

/// Shape and extent of the index.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct IndexConfig {
    #[serde(default = "default_min")]
    pub min_x: i32,
    #[serde(default = "default_max")]
    pub max_x: i32,
    #[serde(default = "default_min")]
    pub min_y: i32,
    #[serde(default = "default_max")]
    pub max_y: i32,
    /// Shape of the root node.
    #[serde(default)]
    pub root: RootKind,
}

impl IndexConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.min_x, self.max_x, self.min_y, self.max_y)
    }

    /// Reject inverted boxes.
    pub fn validate(&self) -> anyhow::Result<()> {
        let bounds = self.bounds();
        if !bounds.is_valid() {
            anyhow::bail!("Invalid index bounds {}: min must not exceed max", bounds);
        }
        Ok(())
    }

    /// Build an empty index with the configured root.
    pub fn build(&self) -> QuadTree {
        let bounds = self.bounds();
        let root = match self.root {
            RootKind::Leaf => Node::leaf(bounds),
            RootKind::Internal => Node::internal(bounds),
        };
        QuadTree::with_root(root)
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            min_x: default_min(),
            max_x: default_max(),
            min_y: default_min(),
            max_y: default_max(),
            root: RootKind::default(),
        }
    }
}

fn default_min() -> i32 {
    Bounds::UNIVERSE.min_x
}
fn default_max() -> i32 {
    Bounds::UNIVERSE.max_x
}

/// Root node shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RootKind {
    /// A single capacity-bounded leaf.
    #[default]
    Leaf,
    /// A quadrant router whose children are leaves.
    Internal,
}

/// Output formatting.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Indentation unit repeated once per tree level in dumps.
    #[serde(default = "default_indent")]
    pub indent: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
        }
    }
}

fn default_indent() -> String {
    "\t".to_string()
}
