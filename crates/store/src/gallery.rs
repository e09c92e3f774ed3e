//! The concurrent gallery store.
//!
//! Membership lives in a `DashMap` keyed by the artwork record itself, so
//! value-based deduplication falls out of the record's identity contract
//! (equality and hashing over name, kind, artist only). The map's internal
//! sharding keeps add, delete and iteration non-blocking relative to each
//! other; no lock is visible to callers.

use chrono::{Local, Months, NaiveDate};
use dashmap::DashMap;
use galleria_core::Art;
use rustc_hash::{FxHashSet, FxHasher};
use std::hash::BuildHasherDefault;
use tracing::debug;

use crate::view::AllArt;

pub(crate) type ArtMap = DashMap<Art, (), BuildHasherDefault<FxHasher>>;

/// A thread-safe art catalog that can be modified and queried from multiple
/// threads.
///
/// # Consistency
///
/// Individual adds and deletes are linearizable per record. Queries observe
/// a weakly consistent snapshot of membership: a mutation racing a query may
/// or may not be reflected in that query's result, but results are never
/// corrupt and never contain a record twice. Every query returns a freshly
/// constructed collection; mutating a result never affects membership.
///
/// # Example
///
/// ```
/// use galleria_store::Gallery;
/// use galleria_core::{Art, ArtKind};
/// use chrono::NaiveDate;
///
/// let gallery = Gallery::new();
/// let date = NaiveDate::from_ymd_opt(1665, 1, 1).unwrap();
///
/// gallery.add_art(Art::with_price("Vase of Flowers", ArtKind::Vase, "de Heem", date, 950_00)?);
/// assert_eq!(gallery.all_art().len(), 1);
/// assert_eq!(gallery.artists(), vec!["de Heem".to_string()]);
/// # Ok::<(), galleria_core::Error>(())
/// ```
pub struct Gallery {
    art: ArtMap,
}

impl Gallery {
    /// Create an empty gallery.
    pub fn new() -> Self {
        Self {
            art: ArtMap::default(),
        }
    }

    /// Create an empty gallery with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            art: ArtMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Add a piece of art.
    ///
    /// No-op when a record with equal identity is already present: the
    /// stored record keeps its creation date and price, and the duplicate is
    /// discarded. Returns `true` if membership grew.
    pub fn add_art(&self, art: Art) -> bool {
        let mut added = false;
        // The entry API inserts only on vacancy, which keeps the first
        // record's date and price on duplicate inserts.
        let entry = self.art.entry(art).or_insert_with(|| {
            added = true;
        });
        if added {
            let art = entry.key();
            debug!(name = %art.name(), artist = %art.artist(), "art added");
        }
        added
    }

    /// Remove the record with matching identity, if present.
    ///
    /// Returns `true` if a record was removed. The record's date and price
    /// play no part in the match.
    pub fn delete_art(&self, art: &Art) -> bool {
        let removed = self.art.remove(art).is_some();
        if removed {
            debug!(name = %art.name(), artist = %art.artist(), "art deleted");
        }
        removed
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Read-only view of the art currently in the gallery.
    ///
    /// The view is safe to iterate while other threads add or delete
    /// records, and cannot be used to mutate membership; see [`AllArt`].
    pub fn all_art(&self) -> AllArt<'_> {
        AllArt::new(&self.art)
    }

    /// Distinct artist names of all currently stored records, sorted
    /// case-insensitively.
    ///
    /// Exact duplicates are collapsed; the returned names keep their
    /// original casing, so artists differing only by case remain distinct
    /// entries ordered adjacently. The relative order of such case variants
    /// is not specified.
    pub fn artists(&self) -> Vec<String> {
        let distinct: FxHashSet<String> = self
            .art
            .iter()
            .map(|entry| entry.key().artist().to_owned())
            .collect();

        let mut artists: Vec<String> = distinct.into_iter().collect();
        artists.sort_by_key(|artist| artist.to_lowercase());
        artists
    }

    /// All art by a specific artist (exact, case-sensitive match).
    pub fn art_by_artist(&self, artist: &str) -> Vec<Art> {
        self.art
            .iter()
            .filter(|entry| entry.key().artist() == artist)
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// All art created within the past year.
    ///
    /// "Now" is re-evaluated from the local clock on every call, so recency
    /// is a shifting predicate, not a stored flag. A record dated exactly
    /// one year ago is excluded.
    pub fn recent_art(&self) -> Vec<Art> {
        let today = Local::now().date_naive();
        // Subtracting months clamps 29 Feb to 28 Feb; MIN is unreachable
        // for any realistic clock.
        let year_ago = today
            .checked_sub_months(Months::new(12))
            .unwrap_or(NaiveDate::MIN);
        self.art_created_after(year_ago)
    }

    /// All art created strictly after the given date.
    pub fn art_created_after(&self, date: NaiveDate) -> Vec<Art> {
        self.art
            .iter()
            .filter(|entry| entry.key().created() > date)
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// All art with an asking price between the given limits (inclusive).
    ///
    /// Missing limits default to `0` and `u32::MAX`. Art with no asking
    /// price is never returned, even when both limits are omitted.
    pub fn art_by_price(&self, from_price: Option<u32>, to_price: Option<u32>) -> Vec<Art> {
        let lower = from_price.unwrap_or(0);
        let upper = to_price.unwrap_or(u32::MAX);

        self.art
            .iter()
            .filter(|entry| {
                entry
                    .key()
                    .price()
                    .map_or(false, |p| p >= lower && p <= upper)
            })
            .map(|entry| entry.key().clone())
            .collect()
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Gallery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gallery")
            .field("art_count", &self.art.len())
            .finish()
    }
}
