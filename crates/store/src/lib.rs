//! Concurrent gallery store for the galleria art catalog.
//!
//! [`Gallery`] holds a set of [`Art`](galleria_core::Art) records keyed by
//! their identity (name, kind, artist) and answers queries over the current
//! membership. It is safe for concurrent use by multiple threads without
//! external locking; see the [`Gallery`] docs for the consistency contract.

mod gallery;
mod view;

pub use gallery::Gallery;
pub use view::{AllArt, ArtIter};
