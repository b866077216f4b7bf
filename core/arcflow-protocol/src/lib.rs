#![no_std] // Keeps the vocabulary usable from embedded/WASM drivers

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod model;

// Re-export core types for convenience
pub use ids::{PosId, RelationId, TransitionId, WordId, WordPosId};
pub use model::*;
