//! Transform constructors
//!
//! Every function here returns a [`Transducer`](crate::Transducer). Apply it to a
//! downstream transformer directly, or hand it to a driver such as
//! [`into`](crate::into) or [`seq`](crate::seq).
//!
//! Stateless: [`map`], [`map_indexed`], [`filter`], [`filter_indexed`], [`remove`],
//! [`remove_indexed`], [`keep`], [`cat`], [`mapcat`].
//!
//! Stateful: [`dedupe`], [`take`], [`take_while`], [`drop`], [`drop_while`],
//! [`partition`].

mod cat;
mod dedupe;
mod drop;
mod filter;
mod keep;
mod map;
mod partition;
mod take;

pub use cat::{cat, mapcat, Cat, CatTransformer, Mapcat};
pub use dedupe::{dedupe, Dedupe, DedupeTransformer};
pub use drop::{drop, drop_while, DropFirst, DropFirstTransformer, DropWhile, DropWhileTransformer};
pub use filter::{
    filter, filter_indexed, remove, remove_indexed, Filter, FilterIndexed,
    FilterIndexedTransformer, FilterTransformer,
};
pub use keep::{keep, Keep, KeepTransformer, Nullable};
pub use map::{map, map_indexed, Map, MapIndexed, MapIndexedTransformer, MapTransformer};
pub use partition::{partition, Partition, PartitionTransformer};
pub use take::{take, take_while, Take, TakeTransformer, TakeWhile, TakeWhileTransformer};
