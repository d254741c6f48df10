//! Single source of truth for the generated project layout.
//!
//! This module defines WHAT the scaffolder creates. It has no I/O, no
//! validation, no business logic. One file shows the entire manifest.
//!
//! The manifest is fixed at compile time and never derived from external
//! input.
//!
//! # Generated Layout (relative to the working directory)
//!
//! ```text
//! ap/
//! ├── requirements.txt
//! ├── main.py
//! ├── data/
//! │   ├── raw/
//! │   ├── processed/
//! │   └── output/
//! ├── src/
//! │   ├── __init__.py
//! │   ├── config.py
//! │   ├── data_processing/
//! │   │   ├── __init__.py
//! │   │   ├── data_processor.py
//! │   │   ├── feature_engineering.py
//! │   │   └── utils.py
//! │   └── clustering/
//! │       ├── __init__.py
//! │       ├── hierarchical_clustering.py
//! │       └── visualization.py
//! └── tests/
//!     └── __init__.py
//! ```

use std::path::PathBuf;

/// Name of the base directory everything is rooted under.
pub const BASE_DIR: &str = "ap";

/// Marker file that makes a directory an importable Python package.
pub const PACKAGE_MARKER: &str = "__init__.py";

/// Directories to create, in order. Intermediate parents are implied.
pub const DIRECTORIES: [&str; 6] = [
    "data/raw",
    "data/processed",
    "data/output",
    "src/data_processing",
    "src/clustering",
    "tests",
];

/// Directories that are importable packages; each gets a [`PACKAGE_MARKER`].
pub const PACKAGE_DIRS: [&str; 4] = ["src", "src/data_processing", "src/clustering", "tests"];

/// Placeholder files to create empty if absent.
pub const FILES: [&str; 8] = [
    "requirements.txt",
    "main.py",
    "src/config.py",
    "src/data_processing/data_processor.py",
    "src/data_processing/feature_engineering.py",
    "src/data_processing/utils.py",
    "src/clustering/hierarchical_clustering.py",
    "src/clustering/visualization.py",
];

/// Base directory resolved against the current working directory: `./ap`
pub fn base_dir() -> PathBuf {
    PathBuf::from(BASE_DIR)
}
