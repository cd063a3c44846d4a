//! Data-parallel iteration that degrades to plain iterators.
//!
//! Call sites use the `maybe_*` methods from the prelude. With the `multithreaded`
//! feature they resolve to rayon's parallel iterators, without it to the
//! corresponding `std` iterators, so the same code compiles both ways.

#[cfg(feature = "multithreaded")]
mod multi_threaded;
#[cfg(not(feature = "multithreaded"))]
mod single_threaded;

#[cfg(feature = "multithreaded")]
pub use multi_threaded::*;
#[cfg(not(feature = "multithreaded"))]
pub use single_threaded::*;

pub mod prelude {
    #[cfg(feature = "multithreaded")]
    pub use rayon::prelude::*;

    pub use crate::{MaybeParallelExt, MaybeParallelRefExt, MaybeParallelSliceMut};
}
