//! # Galleria
//!
//! Concurrent in-memory catalog of artwork records.
//!
//! Galleria stores immutable [`Art`] records in a [`Gallery`] that is safe
//! for concurrent use by multiple threads without external locking. Two
//! records with the same name, kind and artist are the same artwork
//! regardless of creation date or price, and the store deduplicates on that
//! identity.
//!
//! ## Quick Start
//!
//! ```
//! use galleria::prelude::*;
//! use chrono::NaiveDate;
//!
//! let gallery = Gallery::new();
//! let date = NaiveDate::from_ymd_opt(1888, 8, 20).unwrap();
//!
//! gallery.add_art(Art::with_price("Sunflowers", ArtKind::Painting, "van Gogh", date, 1_000_00)?);
//! gallery.add_art(Art::new("The Thinker", ArtKind::Sculpture, "Rodin", date)?);
//!
//! // Queries return fresh collections over current membership.
//! assert_eq!(gallery.artists(), vec!["Rodin".to_string(), "van Gogh".to_string()]);
//! assert_eq!(gallery.art_by_artist("Rodin").len(), 1);
//! assert_eq!(gallery.art_by_price(None, None).len(), 1); // unpriced art is excluded
//!
//! // The all-art view is read-only and safe to iterate under mutation.
//! for art in &gallery.all_art() {
//!     println!("{art}");
//! }
//! # Ok::<(), galleria::Error>(())
//! ```
//!
//! ## Consistency
//!
//! Adds and deletes are linearizable per record; queries and iteration are
//! weakly consistent and may or may not reflect mutations that race them.
//! See [`Gallery`] for the full contract.

#![warn(missing_docs)]

pub mod prelude;

pub use galleria_core::{Art, ArtKind, Error, Result};
pub use galleria_store::{AllArt, ArtIter, Gallery};
