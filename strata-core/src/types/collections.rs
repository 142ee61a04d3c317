//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec optimized for import kinds on one edge (usually <2).
pub type SmallVec2<T> = SmallVec<[T; 2]>;

/// SmallVec optimized for cycle edge sequences (usually <8).
pub type SmallVec8<T> = SmallVec<[T; 8]>;
