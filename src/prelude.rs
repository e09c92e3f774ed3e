//! Convenience re-exports for the common galleria surface.
//!
//! ```
//! use galleria::prelude::*;
//! ```

pub use crate::{Art, ArtKind, Error, Gallery, Result};
