//! Read-only view over gallery membership.

use crate::gallery::ArtMap;
use galleria_core::{Art, Error, Result};

/// Read-only view of the art currently in a [`Gallery`](crate::Gallery).
///
/// Creating the view is cheap; `len`, `is_empty` and `contains` read the
/// live store. The view cannot be used to mutate membership: the explicit
/// [`insert`](AllArt::insert) and [`remove`](AllArt::remove) methods exist
/// to make the read-only contract observable and always fail with
/// [`Error::UnsupportedOperation`].
///
/// # Iteration
///
/// [`iter`](AllArt::iter) is weakly consistent: it is safe while other
/// threads add or delete records, yields no record more than once, and
/// makes no promise about whether a mutation made after the pass starts is
/// reflected in it. The pass materializes membership through the underlying
/// map's own weakly consistent iteration at the moment `iter` is called,
/// and holds no lock between `next` calls, so the gallery may be mutated
/// freely mid-iteration from any thread, including the iterating one.
pub struct AllArt<'a> {
    art: &'a ArtMap,
}

impl<'a> AllArt<'a> {
    pub(crate) fn new(art: &'a ArtMap) -> Self {
        Self { art }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.art.len()
    }

    /// Whether the gallery is currently empty.
    pub fn is_empty(&self) -> bool {
        self.art.is_empty()
    }

    /// Whether a record with the same identity is currently stored.
    pub fn contains(&self, art: &Art) -> bool {
        self.art.contains_key(art)
    }

    /// Iterate over the current membership, yielding owned records.
    ///
    /// See the type-level docs for the consistency contract.
    pub fn iter(&self) -> ArtIter {
        // Drain the map's iterator inside this call so its shard guards
        // never outlive it: a guard held across caller code would turn
        // "mutate while iterating" into a same-shard deadlock.
        let buffered: Vec<Art> = self.art.iter().map(|entry| entry.key().clone()).collect();
        ArtIter {
            inner: buffered.into_iter(),
        }
    }

    /// Always fails with [`Error::UnsupportedOperation`]: gallery
    /// membership cannot be modified through this view.
    pub fn insert(&self, _art: Art) -> Result<()> {
        Err(Error::UnsupportedOperation(
            "cannot add art through the read-only all-art view".into(),
        ))
    }

    /// Always fails with [`Error::UnsupportedOperation`]: gallery
    /// membership cannot be modified through this view.
    pub fn remove(&self, _art: &Art) -> Result<()> {
        Err(Error::UnsupportedOperation(
            "cannot delete art through the read-only all-art view".into(),
        ))
    }
}

impl IntoIterator for &AllArt<'_> {
    type Item = Art;
    type IntoIter = ArtIter;

    fn into_iter(self) -> ArtIter {
        self.iter()
    }
}

impl std::fmt::Debug for AllArt<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllArt").field("len", &self.len()).finish()
    }
}

/// Iterator over gallery membership; see [`AllArt::iter`].
pub struct ArtIter {
    inner: std::vec::IntoIter<Art>,
}

impl Iterator for ArtIter {
    type Item = Art;

    fn next(&mut self) -> Option<Art> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
