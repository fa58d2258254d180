// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene arena: ordered children, populate helpers, and commit.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::damage::Damage;
use crate::element::{Element, NodeFlags, NodeId};

/// Per-slot storage. The generation survives frees so stale ids can be told
/// apart from reused slots.
#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

#[derive(Debug)]
struct Node {
    element: Element,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
}

#[derive(Debug, Default)]
struct ChangeLog {
    created: Vec<NodeId>,
    removed: Vec<NodeId>,
    changed: Vec<NodeId>,
}

impl ChangeLog {
    fn len(&self) -> usize {
        self.created.len() + self.removed.len() + self.changed.len()
    }
}

/// An arena of markup nodes with ordered child lists.
///
/// The scene is the model a widget renders into and a host mirrors out of.
/// Nodes are addressed by generational [`NodeId`]s; every operation on a stale
/// id is a safe no-op (mutations do nothing, queries return `None`, empty
/// slices, or `false`). Mutations are recorded and drained as coarse
/// [`Damage`] by [`Scene::commit`].
///
/// A scene may hold several detached roots; a root typically models one
/// widget container inside the host's document. Mutating element data
/// directly is not possible from outside the crate; hosts and widgets go
/// through the `set_*` helpers so the change log stays truthful.
pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    log: ChangeLog,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.slots.len();
        let alive = self.slots.iter().filter(|s| s.node.is_some()).count();
        f.debug_struct("Scene")
            .field("total_slots", &total)
            .field("alive", &alive)
            .field("pending_changes", &self.log.len())
            .finish_non_exhaustive()
    }
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            log: ChangeLog::default(),
        }
    }

    /// Inserts a node, appending it to `parent`'s child list.
    ///
    /// With `parent = None` the node becomes a detached root. Inserting under
    /// a stale parent is a caller bug: it debug-asserts, and in release
    /// builds the node is created as a detached root instead.
    pub fn insert(&mut self, parent: Option<NodeId>, element: Element) -> NodeId {
        let id = self.alloc(element);
        self.log.created.push(id);
        if let Some(p) = parent {
            debug_assert!(self.is_alive(p), "insert under a stale parent");
            if self.is_alive(p) {
                if let Some(pn) = self.node_mut(p) {
                    pn.children.push(id);
                }
                if let Some(n) = self.node_mut(id) {
                    n.parent = Some(p);
                }
                self.log.changed.push(p);
            }
        }
        id
    }

    /// Removes the subtree rooted at `id`, detaching it from its parent.
    ///
    /// All ids in the subtree become stale. Removing a stale id or a detached
    /// root is a no-op or valid, respectively.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        let parent = self.node(id).and_then(|n| n.parent);
        if let Some(p) = parent {
            if let Some(pn) = self.node_mut(p) {
                pn.children.retain(|c| *c != id);
            }
            self.log.changed.push(p);
        }
        self.remove_subtree(id);
    }

    /// Removes every child subtree of `id`, keeping the node itself.
    pub fn clear_children(&mut self, id: NodeId) {
        let Some(n) = self.node_mut(id) else { return };
        let children = core::mem::take(&mut n.children);
        if children.is_empty() {
            return;
        }
        for child in children {
            self.remove_subtree(child);
        }
        self.log.changed.push(id);
    }

    /// Sets the text content of `id`.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        let Some(n) = self.node_mut(id) else { return };
        n.element.text = Some(text.into());
        self.log.changed.push(id);
    }

    /// Sets attribute `name` on `id`, replacing any previous value.
    pub fn set_attr(
        &mut self,
        id: NodeId,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<String>,
    ) {
        let Some(n) = self.node_mut(id) else { return };
        n.element.attrs.insert(name.into(), value.into());
        self.log.changed.push(id);
    }

    /// Removes attribute `name` from `id`, if present.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        let Some(n) = self.node_mut(id) else { return };
        if n.element.attrs.remove(name).is_some() {
            self.log.changed.push(id);
        }
    }

    /// Adds a class to `id`, keeping the class list duplicate-free.
    pub fn add_class(&mut self, id: NodeId, class: impl Into<Cow<'static, str>>) {
        let class = class.into();
        let Some(n) = self.node_mut(id) else { return };
        if n.element.has_class(&class) {
            return;
        }
        n.element.classes.push(class);
        self.log.changed.push(id);
    }

    /// Removes a class from `id`, if present.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        let Some(n) = self.node_mut(id) else { return };
        let before = n.element.classes.len();
        n.element.classes.retain(|c| c.as_ref() != class);
        if n.element.classes.len() != before {
            self.log.changed.push(id);
        }
    }

    /// Adds or removes a class depending on `enabled` (the `classList.toggle`
    /// equivalent).
    pub fn set_class_enabled(
        &mut self,
        id: NodeId,
        class: impl Into<Cow<'static, str>>,
        enabled: bool,
    ) {
        let class = class.into();
        if enabled {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class.as_ref());
        }
    }

    /// Replaces the flags of `id`.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        let Some(n) = self.node_mut(id) else { return };
        if n.element.flags == flags {
            return;
        }
        n.element.flags = flags;
        self.log.changed.push(id);
    }

    /// Returns `true` if `id` refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Returns the markup data of `id`.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.node(id).map(|n| &n.element)
    }

    /// Returns the parent of `id`, if it is alive and attached.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Returns the ordered children of `id` (empty for stale ids and leaves).
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Some(n) => n.children.as_slice(),
            None => &[],
        }
    }

    /// Returns the text content of `id`, if any.
    #[must_use]
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.element(id).and_then(|e| e.text.as_deref())
    }

    /// Returns the value of attribute `name` on `id`, if set.
    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.attr(name))
    }

    /// Returns `true` if `id` is alive and carries `class`.
    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_class(class))
    }

    /// Finds the first node carrying `class` in a depth-first (document
    /// order) walk of the subtree rooted at `root`, including `root` itself.
    #[must_use]
    pub fn find_by_class(&self, root: NodeId, class: &str) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = Vec::new();
        stack.push(root);
        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else { continue };
            if node.element.has_class(class) {
                return Some(id);
            }
            // Push in reverse so children are visited in document order.
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    /// Collects every node carrying `class` in the subtree rooted at `root`,
    /// in document order.
    #[must_use]
    pub fn find_all_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = Vec::new();
        stack.push(root);
        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else { continue };
            if node.element.has_class(class) {
                out.push(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    /// Number of live nodes in the subtree rooted at `root`, including the
    /// root itself; `0` for stale ids.
    #[must_use]
    pub fn subtree_len(&self, root: NodeId) -> usize {
        let mut count = 0;
        let mut stack: Vec<NodeId> = Vec::new();
        stack.push(root);
        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else { continue };
            count += 1;
            stack.extend(node.children.iter().copied());
        }
        count
    }

    /// Number of live nodes in the whole scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.node.is_some()).count()
    }

    /// Returns `true` if the scene holds no live nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drains the change log accumulated since the previous commit.
    ///
    /// See [`Damage`] for the coarseness contract. The returned lists are
    /// deduplicated, disjoint, and deterministically ordered.
    pub fn commit(&mut self) -> Damage {
        let log = core::mem::take(&mut self.log);
        let mut created: HashSet<NodeId> = log.created.into_iter().collect();
        let mut removed: HashSet<NodeId> = log.removed.into_iter().collect();

        // Nodes created and removed inside this window were never observable,
        // so they are scrubbed from all three lists, mutations included.
        let ephemeral: HashSet<NodeId> = created.intersection(&removed).copied().collect();
        for id in &ephemeral {
            created.remove(id);
            removed.remove(id);
        }

        let mut changed: HashSet<NodeId> = log.changed.into_iter().collect();
        changed.retain(|id| {
            !created.contains(id) && !removed.contains(id) && !ephemeral.contains(id)
        });

        let mut damage = Damage {
            created: created.into_iter().collect(),
            removed: removed.into_iter().collect(),
            changed: changed.into_iter().collect(),
        };
        damage.created.sort_unstable_by_key(|id| id.sort_key());
        damage.removed.sort_unstable_by_key(|id| id.sort_key());
        damage.changed.sort_unstable_by_key(|id| id.sort_key());
        damage
    }

    fn alloc(&mut self, element: Element) -> NodeId {
        let node = Node {
            element,
            parent: None,
            children: SmallVec::new(),
        };
        match self.free.pop() {
            Some(idx) => {
                let slot = &mut self.slots[idx as usize];
                slot.generation = slot.generation.wrapping_add(1);
                slot.node = Some(node);
                NodeId::new(idx, slot.generation)
            }
            None => {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "scenes stay far below u32::MAX nodes"
                )]
                let idx = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 1,
                    node: Some(node),
                });
                NodeId::new(idx, 1)
            }
        }
    }

    fn remove_subtree(&mut self, root: NodeId) {
        let mut stack: Vec<NodeId> = Vec::new();
        stack.push(root);
        while let Some(id) = stack.pop() {
            let Some(slot) = self.slots.get_mut(id.idx()) else {
                continue;
            };
            if slot.generation != id.generation() {
                continue;
            }
            let Some(node) = slot.node.take() else { continue };
            stack.extend(node.children.iter().copied());
            self.free.push(id.0);
            self.log.removed.push(id);
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.node.as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.node.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with_root() -> (Scene, NodeId) {
        let mut scene = Scene::new();
        let root = scene.insert(None, Element::new("div"));
        (scene, root)
    }

    #[test]
    fn insert_builds_ordered_children() {
        let (mut scene, root) = scene_with_root();
        let a = scene.insert(Some(root), Element::new("p"));
        let b = scene.insert(Some(root), Element::new("p"));
        let c = scene.insert(Some(root), Element::new("p"));
        assert_eq!(scene.children(root), &[a, b, c]);
        assert_eq!(scene.parent(b), Some(root));
    }

    #[test]
    fn generational_ids_do_not_alias() {
        let (mut scene, root) = scene_with_root();
        let old = scene.insert(Some(root), Element::new("p"));
        scene.remove(old);
        assert!(!scene.is_alive(old));

        // The freed slot is reused with a bumped generation.
        let new = scene.insert(Some(root), Element::new("span"));
        assert!(scene.is_alive(new));
        assert_ne!(old, new);

        // The stale id still resolves to nothing.
        assert_eq!(scene.element(old).map(|e| e.tag.as_ref()), None);
        assert_eq!(scene.element(new).map(|e| e.tag.as_ref()), Some("span"));
    }

    #[test]
    fn remove_detaches_and_kills_subtree() {
        let (mut scene, root) = scene_with_root();
        let branch = scene.insert(Some(root), Element::new("div"));
        let leaf = scene.insert(Some(branch), Element::new("p"));
        let sibling = scene.insert(Some(root), Element::new("p"));

        scene.remove(branch);
        assert!(!scene.is_alive(branch));
        assert!(!scene.is_alive(leaf));
        assert!(scene.is_alive(sibling));
        assert_eq!(scene.children(root), &[sibling]);
    }

    #[test]
    fn removing_a_detached_root_is_valid() {
        let mut scene = Scene::new();
        let root = scene.insert(None, Element::new("div"));
        scene.remove(root);
        assert!(!scene.is_alive(root));
        assert!(scene.is_empty());
    }

    #[test]
    fn clear_children_keeps_the_node() {
        let (mut scene, root) = scene_with_root();
        let a = scene.insert(Some(root), Element::new("p"));
        let b = scene.insert(Some(root), Element::new("p"));
        let nested = scene.insert(Some(a), Element::new("span"));

        scene.clear_children(root);
        assert!(scene.is_alive(root));
        assert!(scene.children(root).is_empty());
        assert!(!scene.is_alive(a));
        assert!(!scene.is_alive(b));
        assert!(!scene.is_alive(nested));
    }

    #[test]
    fn clear_children_on_a_leaf_is_a_noop() {
        let (mut scene, root) = scene_with_root();
        let _ = scene.commit();
        scene.clear_children(root);
        assert!(scene.commit().is_empty());
    }

    #[test]
    fn class_toggle_adds_and_removes() {
        let (mut scene, root) = scene_with_root();
        scene.set_class_enabled(root, "active", true);
        assert!(scene.has_class(root, "active"));

        // Enabling again does not duplicate.
        scene.set_class_enabled(root, "active", true);
        assert_eq!(
            scene.element(root).map(|e| e.classes.len()),
            Some(1),
            "toggle-on twice must keep a single class entry"
        );

        scene.set_class_enabled(root, "active", false);
        assert!(!scene.has_class(root, "active"));
    }

    #[test]
    fn attrs_set_get_remove() {
        let (mut scene, root) = scene_with_root();
        scene.set_attr(root, "data-action", "next");
        assert_eq!(scene.attr(root, "data-action"), Some("next"));

        scene.set_attr(root, "data-action", "prev");
        assert_eq!(scene.attr(root, "data-action"), Some("prev"));

        scene.remove_attr(root, "data-action");
        assert_eq!(scene.attr(root, "data-action"), None);
    }

    #[test]
    fn find_by_class_walks_in_document_order() {
        let (mut scene, root) = scene_with_root();
        let first = scene.insert(Some(root), Element::new("div").with_class("dot"));
        let _plain = scene.insert(Some(root), Element::new("div"));
        let second = scene.insert(Some(root), Element::new("div").with_class("dot"));

        assert_eq!(scene.find_by_class(root, "dot"), Some(first));
        assert_eq!(scene.find_all_by_class(root, "dot"), [first, second]);
        assert_eq!(scene.find_by_class(root, "missing"), None);
    }

    #[test]
    fn subtree_len_counts_the_root() {
        let (mut scene, root) = scene_with_root();
        let a = scene.insert(Some(root), Element::new("div"));
        let _b = scene.insert(Some(a), Element::new("p"));
        assert_eq!(scene.subtree_len(root), 3);
        assert_eq!(scene.subtree_len(a), 2);
    }

    #[test]
    fn commit_reports_created_then_changed() {
        let (mut scene, root) = scene_with_root();
        let child = scene.insert(Some(root), Element::new("p"));
        let first = scene.commit();
        assert!(first.created.contains(&root));
        assert!(first.created.contains(&child));
        assert!(first.removed.is_empty());
        // Creation supersedes the child-list change on the root.
        assert!(first.changed.is_empty());

        scene.set_text(child, "hi");
        let second = scene.commit();
        assert!(second.created.is_empty());
        assert_eq!(second.changed, [child]);
    }

    #[test]
    fn commit_drops_ephemeral_nodes() {
        let (mut scene, root) = scene_with_root();
        let _ = scene.commit();

        let ephemeral = scene.insert(Some(root), Element::new("p"));
        scene.set_text(ephemeral, "blink");
        scene.remove(ephemeral);
        let damage = scene.commit();
        assert!(!damage.created.contains(&ephemeral));
        assert!(!damage.removed.contains(&ephemeral));
        // The mutation dies with the node.
        assert!(!damage.changed.contains(&ephemeral));
        // The root's child list still changed.
        assert_eq!(damage.changed, [root]);
    }

    #[test]
    fn commit_lists_are_disjoint_on_remove() {
        let (mut scene, root) = scene_with_root();
        let child = scene.insert(Some(root), Element::new("p"));
        let _ = scene.commit();

        scene.set_text(child, "bye");
        scene.remove(child);
        let damage = scene.commit();
        assert_eq!(damage.removed, [child]);
        assert_eq!(damage.changed, [root]);
        assert!(damage.created.is_empty());
    }

    #[test]
    fn stale_ops_are_noops() {
        let (mut scene, root) = scene_with_root();
        let child = scene.insert(Some(root), Element::new("p"));
        scene.remove(child);
        let _ = scene.commit();

        scene.set_text(child, "ignored");
        scene.set_attr(child, "k", "v");
        scene.add_class(child, "c");
        scene.set_flags(child, NodeFlags::empty());
        scene.clear_children(child);
        scene.remove(child);

        assert!(scene.commit().is_empty());
        assert_eq!(scene.text(child), None);
        assert_eq!(scene.attr(child, "k"), None);
        assert!(!scene.has_class(child, "c"));
        assert!(scene.children(child).is_empty());
        assert_eq!(scene.subtree_len(child), 0);
    }

    #[test]
    fn set_flags_records_a_change() {
        let (mut scene, root) = scene_with_root();
        let _ = scene.commit();

        scene.set_flags(root, NodeFlags::VISIBLE);
        let damage = scene.commit();
        assert_eq!(damage.changed, [root]);

        // Setting identical flags records nothing.
        scene.set_flags(root, NodeFlags::VISIBLE);
        assert!(scene.commit().is_empty());
    }
}
