//! Commonly used imports
//!
//! Use `use transducers::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Container, Reducible, Step, Transducer, Transformer};

// Reduced signal
pub use crate::{reduced, unreduced};

// Transforms
pub use crate::xform::{
    cat, dedupe, drop_while, filter, keep, map, mapcat, partition, remove, take, take_while,
};

// Composition
pub use crate::compose::{compose, from_fn, Identity};

// Execution
pub use crate::reduce::{iterate, reduce};
pub use crate::transformer::transformer;
pub use crate::{into, seq, to_iter, to_map, to_vec, transduce};
