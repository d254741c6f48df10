pub mod layout;
pub mod scaffold;

// Re-export the common entry points
pub use scaffold::{execute, execute_at};
