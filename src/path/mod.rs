// error module
mod error;
// finder module
mod finder;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the path modules.
//─────────────────────────────────────────────────────────────────────────────
pub use error::PathError;
pub use finder::{find_all_paths, Path};
