//! crates/treewalk/src/visited.rs
//! Canonical directories on the active recursion stack.

use rustc_hash::FxHashSet;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

/// Set of canonical directory paths the walker is currently inside.
///
/// A path is present only while a walk rooted at it is running. Entries are
/// added through [`VisitedSet::enter`] and removed when the returned
/// [`VisitGuard`] drops, so sibling subtrees reached through different paths
/// are never mistaken for cycles.
#[derive(Debug, Default)]
pub struct VisitedSet {
    paths: FxHashSet<PathBuf>,
}

impl VisitedSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports whether `path` is on the active stack.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    /// Number of directories on the active stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Reports whether no directory is being walked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Marks `canonical` as entered.
    ///
    /// Returns `None` when the path is already on the stack. The guard
    /// removes the path again when dropped, including during unwinding.
    pub fn enter(&mut self, canonical: &Path) -> Option<VisitGuard<'_>> {
        if !self.paths.insert(canonical.to_path_buf()) {
            return None;
        }
        Some(VisitGuard {
            set: self,
            path: canonical.to_path_buf(),
        })
    }
}

/// Membership of one directory in a [`VisitedSet`].
///
/// Dereferences to the set so nested walks can keep using it.
#[derive(Debug)]
pub struct VisitGuard<'a> {
    set: &'a mut VisitedSet,
    path: PathBuf,
}

impl VisitGuard<'_> {
    /// The canonical path held by this guard.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Deref for VisitGuard<'_> {
    type Target = VisitedSet;

    fn deref(&self) -> &VisitedSet {
        self.set
    }
}

impl DerefMut for VisitGuard<'_> {
    fn deref_mut(&mut self) -> &mut VisitedSet {
        self.set
    }
}

impl Drop for VisitGuard<'_> {
    fn drop(&mut self) {
        self.set.paths.remove(&self.path);
    }
}
