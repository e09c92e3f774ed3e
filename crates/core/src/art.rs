//! The artwork record and its category enumeration.
//!
//! [`Art`] is an immutable value: every field is set and validated at
//! construction, so a record can never exist in a partially-initialized
//! state. Equality and hashing are deliberately restricted to the identity
//! fields (name, kind, artist); see the [`Art`] docs for the exact contract.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Category of an artwork.
///
/// The set is closed and grows only by adding new variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtKind {
    /// A painting.
    Painting,
    /// A vase.
    Vase,
    /// A tapestry.
    Tapestry,
    /// A sculpture.
    Sculpture,
}

impl fmt::Display for ArtKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtKind::Painting => "painting",
            ArtKind::Vase => "vase",
            ArtKind::Tapestry => "tapestry",
            ArtKind::Sculpture => "sculpture",
        };
        write!(f, "{}", name)
    }
}

/// An immutable record describing one piece of art.
///
/// # Identity
///
/// Two records are the same artwork if and only if `name`, `kind` and
/// `artist` are equal (exact, case-sensitive string comparison). The
/// creation date and asking price participate in neither equality nor
/// hashing, so records differing only in those fields collide in any
/// hash-based container.
///
/// # Example
///
/// ```
/// use galleria_core::{Art, ArtKind};
/// use chrono::NaiveDate;
///
/// let d1 = NaiveDate::from_ymd_opt(1888, 8, 20).unwrap();
/// let d2 = NaiveDate::from_ymd_opt(1889, 1, 15).unwrap();
///
/// let a = Art::with_price("Sunflowers", ArtKind::Painting, "van Gogh", d1, 1_000_00)?;
/// let b = Art::new("Sunflowers", ArtKind::Painting, "van Gogh", d2)?;
///
/// // Date and price do not participate in identity.
/// assert_eq!(a, b);
/// # Ok::<(), galleria_core::Error>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawArt")]
pub struct Art {
    name: String,
    kind: ArtKind,
    artist: String,
    created: NaiveDate,
    price: Option<u32>,
}

impl Art {
    /// Create a record without an asking price.
    ///
    /// Fails with [`Error::InvalidArgument`] if `name` or `artist` is empty.
    pub fn new(
        name: impl Into<String>,
        kind: ArtKind,
        artist: impl Into<String>,
        created: NaiveDate,
    ) -> Result<Self> {
        Self::build(name.into(), kind, artist.into(), created, None)
    }

    /// Create a record with the given asking price in pence.
    ///
    /// Fails with [`Error::InvalidArgument`] if `name` or `artist` is empty.
    pub fn with_price(
        name: impl Into<String>,
        kind: ArtKind,
        artist: impl Into<String>,
        created: NaiveDate,
        price: u32,
    ) -> Result<Self> {
        Self::build(name.into(), kind, artist.into(), created, Some(price))
    }

    fn build(
        name: String,
        kind: ArtKind,
        artist: String,
        created: NaiveDate,
        price: Option<u32>,
    ) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::InvalidArgument("art name must not be empty".into()));
        }
        if artist.is_empty() {
            return Err(Error::InvalidArgument(
                "artist name must not be empty".into(),
            ));
        }
        Ok(Self {
            name,
            kind,
            artist,
            created,
            price,
        })
    }

    /// Artwork name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Artwork category.
    pub fn kind(&self) -> ArtKind {
        self.kind
    }

    /// Artist display name.
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Date the artwork was created.
    pub fn created(&self) -> NaiveDate {
        self.created
    }

    /// Asking price in pence; `None` means not for sale or price unknown.
    pub fn price(&self) -> Option<u32> {
        self.price
    }
}

// Identity is restricted to (name, kind, artist); `created` and `price`
// are excluded from equality and hashing on purpose. Eq and Hash must
// stay consistent: a == b implies hash(a) == hash(b).
impl PartialEq for Art {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind && self.artist == other.artist
    }
}

impl Eq for Art {}

impl Hash for Art {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.kind.hash(state);
        self.artist.hash(state);
    }
}

impl fmt::Display for Art {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) by {}", self.name, self.kind, self.artist)
    }
}

/// Mirror of [`Art`] that routes deserialization through the validating
/// constructor, so invalid records cannot enter through serde either.
#[derive(Deserialize)]
struct RawArt {
    name: String,
    kind: ArtKind,
    artist: String,
    created: NaiveDate,
    #[serde(default)]
    price: Option<u32>,
}

impl TryFrom<RawArt> for Art {
    type Error = Error;

    fn try_from(raw: RawArt) -> Result<Self> {
        Art::build(raw.name, raw.kind, raw.artist, raw.created, raw.price)
    }
}
