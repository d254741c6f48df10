//! Create the `ap/` project skeleton on disk
//!
//! This module follows the dependable-rust pattern:
//! - Public interface (this file): clean API
//! - Internal implementation: all logic in the internal submodule
//!
//! The operation is idempotent: directories that already exist are left
//! alone, and files that already exist are never truncated. Re-running
//! against a complete or partially created skeleton is safe.
//!
//! # Example
//!
//! ```no_run
//! use ap_scaffold::scaffold;
//!
//! // Create ./ap and everything under it
//! scaffold::execute().expect("Failed to create project structure");
//! ```

mod internal;

use anyhow::Result;
use std::path::Path;

/// Create the project skeleton under `./ap`.
///
/// Ensures every directory in the layout manifest exists (creating
/// intermediate parents), drops an empty `__init__.py` into each package
/// directory, and creates each placeholder file empty if absent.
///
/// # Errors
///
/// Returns an error if:
/// - The working directory is not writable
/// - A path component exists as a file where a directory is expected
///   (or vice versa)
/// - The filesystem denies permission
///
/// There is no rollback: a failure partway through leaves whatever was
/// already created in place. Calling again after fixing the cause is the
/// intended recovery.
pub fn execute() -> Result<()> {
    internal::create_structure(&crate::layout::base_dir())
}

/// Create the project skeleton under `root/ap`.
///
/// Same operation as [`execute`], rooted under an explicit parent
/// directory instead of the current working directory.
pub fn execute_at(root: &Path) -> Result<()> {
    internal::create_structure(&root.join(crate::layout::BASE_DIR))
}
