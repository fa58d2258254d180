// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damage summary types returned from commit.

use alloc::vec::Vec;

use crate::element::NodeId;

/// A batched set of changes drained by [`crate::Scene::commit`].
///
/// `Damage` is intentionally coarse: it summarizes which nodes may differ from
/// the host's mirror since the previous commit, sufficient to bound the
/// mirroring work. It is not a minimal edit script; a changed node may appear
/// because any of its markup data (classes, attributes, text, flags, child
/// list) was touched, and hosts are expected to re-read the named nodes.
///
/// Nodes created and removed within the same commit window appear in neither
/// list, and a node listed in `created` or `removed` is never also listed in
/// `changed`. Each list is deduplicated and deterministically ordered.
#[derive(Clone, Debug, Default)]
pub struct Damage {
    /// Nodes inserted since the last commit and still alive.
    pub created: Vec<NodeId>,
    /// Nodes removed since the last commit.
    pub removed: Vec<NodeId>,
    /// Live nodes whose markup data or child list changed.
    pub changed: Vec<NodeId>,
}

impl Damage {
    /// Returns `true` if no changes were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// Total number of damage entries across all three lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.created.len() + self.removed.len() + self.changed.len()
    }
}
