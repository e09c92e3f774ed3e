//! Core value types for the galleria art catalog.
//!
//! This crate defines the leaf types the rest of the system is built on:
//! - [`Art`]: an immutable record describing one piece of art
//! - [`ArtKind`]: the closed set of artwork categories
//! - [`Error`]: the canonical error type for all galleria operations
//!
//! It contains no concurrency; the concurrent store lives in
//! `galleria-store` and only ever references or discards these values.

pub mod art;
pub mod error;

pub use art::{Art, ArtKind};
pub use error::{Error, Result};
