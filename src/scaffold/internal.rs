//! Scaffolder implementation: directory creation and file touch

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;

use crate::layout;

/// Apply the layout manifest under `base`.
///
/// Non-transactional: each entry is created independently and a failure
/// leaves earlier entries in place.
pub fn create_structure(base: &Path) -> Result<()> {
    for dir in layout::DIRECTORIES {
        let path = base.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
    }

    for dir in layout::PACKAGE_DIRS {
        touch(&base.join(dir).join(layout::PACKAGE_MARKER))?;
    }

    for file in layout::FILES {
        touch(&base.join(file))?;
    }

    Ok(())
}

/// Create an empty file if absent; leave an existing file untouched.
///
/// `create(true)` without `truncate` makes "already exists" a success,
/// which also keeps concurrent creators safe against each other.
fn touch(path: &Path) -> Result<()> {
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("Failed to create file {}", path.display()))?;
    Ok(())
}
