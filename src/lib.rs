//! # Transducers: Composable, Shape-Independent Transformations
//!
//! Build element-wise transformation pipelines once and run them over any
//! input shape, accumulating into any target shape.
//!
//! ## Core Traits
//!
//! - **[`Transformer<T>`]**: Consumes elements into an accumulator (`init`, `step`, `result`)
//! - **[`Transducer<R>`]**: Wraps a downstream transformer, producing a pipeline stage
//! - **[`Reducible`]**: Inputs that can feed their elements into a transformer
//! - **[`Container`]**: Targets that know how to start empty and append elements
//!
//! ## Key Features
//!
//! - **Composable**: Combine stages with [`compose()`] or [`compose!`]
//! - **Early termination**: A [`Step::Reduced`] from any stage stops the whole run
//! - **Lazy**: [`to_iter`] pulls only as many source elements as output requires
//! - **Dynamic shapes**: The `json` feature runs pipelines over `serde_json::Value`
//!
//! ## Example
//!
//! ```
//! use transducers::{compose, into, iterate, xform::{filter, map, take}};
//!
//! let pipeline = compose!(
//!     map(|x: u32| x * 3),
//!     filter(|x: &u32| x % 2 == 0),
//!     take(3),
//! );
//! assert_eq!(into(Vec::new(), pipeline, iterate(1..=100)), vec![6, 12, 18]);
//! ```
//!
//! ## Common Functions
//!
//! **Transforms** (in [`xform`]):
//! - [`map`](xform::map), [`filter`](xform::filter), [`remove`](xform::remove), [`keep`](xform::keep)
//! - [`dedupe`](xform::dedupe), [`take`](xform::take), [`drop`](xform::drop), [`partition`](xform::partition)
//! - [`cat`](xform::cat), [`mapcat`](xform::mapcat)
//!
//! **Execution:**
//! - [`transduce(input, xform, transformer, init)`](transduce) - Run with an explicit transformer
//! - [`into(target, xform, input)`](into) - Append to an existing collection
//! - [`seq(input, xform)`](seq) - Produce a collection of the input's shape
//! - [`to_vec`], [`to_map`], [`to_iter`] - Fixed targets
//!
//! **One-shot** (in [`eager`]): `eager::map(vec, f)` and friends.

mod compose;
mod container;
mod driver;
mod error;
mod reduce;
mod step;
mod transformer;

pub mod eager;
#[cfg(feature = "json")]
pub mod json;
pub mod lazy;
pub mod prelude;
pub mod xform;

pub use compose::{compose, from_fn, Compose, FromFn, Identity, Transducer};
pub use container::{Append, Container, Reshape};
pub use driver::{into, seq, to_map, to_vec, transduce, transduce_init};
pub use error::{Error, Result};
pub use lazy::{to_iter, LazyTransformer};
pub use reduce::{by_index, iterate, reduce, ByIndex, ByIndexIter, ElementAccess, Pull, Reducible};
pub use step::{reduced, unreduced, Step};
pub use transformer::{transformer, Reducer, Transformer};
