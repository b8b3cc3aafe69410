//! Visited-URL set shared by every page task.
//!
//! Claiming a URL is a single atomic insert into a `DashSet`. Whoever wins the
//! insert owns the obligation to fetch that URL; every other discoverer gets
//! `false` back and does nothing.

use dashmap::DashSet;

/// Concurrent set of canonical URLs that have been claimed for fetching.
///
/// Grows monotonically: there is no removal API.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: DashSet<String>,
}

impl VisitedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically claim `url`.
    ///
    /// Returns `true` exactly once per distinct URL for the lifetime of the set.
    pub fn try_claim(&self, url: &str) -> bool {
        // Cheap read path first so repeat discoveries don't allocate
        if self.urls.contains(url) {
            return false;
        }
        self.urls.insert(url.to_string())
    }

    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Snapshot of every URL claimed so far.
    ///
    /// Each shard is read-locked only while it is copied, so concurrent
    /// claims proceed while the snapshot is taken.
    #[must_use]
    pub fn list_claimed(&self) -> ClaimedUrls {
        ClaimedUrls(self.urls.iter().map(|entry| entry.key().clone()).collect())
    }
}

/// Point-in-time copy of the claimed URLs. Iterating it does not consume it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimedUrls(Vec<String>);

impl ClaimedUrls {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the snapshot into a lexicographically sorted list.
    #[must_use]
    pub fn sorted(mut self) -> Vec<String> {
        self.0.sort_unstable();
        self.0
    }
}

impl IntoIterator for ClaimedUrls {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
