// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for scene nodes: node identifiers, flags, and markup data.

use alloc::borrow::Cow;
use alloc::string::String;
use hashbrown::HashMap;
use smallvec::SmallVec;

/// Identifier for a node in a [`Scene`](crate::Scene).
///
/// This is a small, copyable handle that stays stable across updates but
/// becomes invalid when the underlying slot is reused. It consists of a slot
/// index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that
///   slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new,
///   distinct `NodeId`.
///
/// ### Liveness
///
/// Use [`Scene::is_alive`](crate::Scene::is_alive) to check whether a `NodeId`
/// still refers to a live node. Stale ids never alias a different live node
/// because the generation must match, and every `Scene` operation treats a
/// stale id as a no-op.
///
/// ### Notes
///
/// - The generation increments on slot reuse and never decreases.
/// - `u32` is ample for practical lifetimes; behavior on generation overflow
///   is unspecified.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }

    pub(crate) const fn sort_key(self) -> (u32, u32) {
        (self.0, self.1)
    }
}

bitflags::bitflags! {
    /// Node flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is visible (the host should mirror and display it).
        const VISIBLE  = 0b0000_0001;
        /// Node is pickable (the host may report it as a hit-test target).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Markup-level data for a node.
///
/// An `Element` is the unit a host mirrors into its real presentation surface:
/// a tag from the host's vocabulary plus the class list, attribute map, and
/// optional text content that styling and tests hook into. It carries no
/// geometry; layout is the host's concern.
#[derive(Clone, Debug)]
pub struct Element {
    /// Tag name in the host's markup vocabulary (for example `"div"`,
    /// `"img"`, `"button"`).
    pub tag: Cow<'static, str>,
    /// Class list, in insertion order. Duplicates are not stored.
    pub classes: SmallVec<[Cow<'static, str>; 4]>,
    /// Attribute map. Keys are typically `'static` hook names.
    pub attrs: HashMap<Cow<'static, str>, String>,
    /// Optional text content.
    pub text: Option<String>,
    /// Visibility and picking flags.
    pub flags: NodeFlags,
}

impl Default for Element {
    fn default() -> Self {
        Self::new("div")
    }
}

impl Element {
    /// Creates an element with the given tag and no classes, attributes, or
    /// text.
    #[must_use]
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            classes: SmallVec::new(),
            attrs: HashMap::new(),
            text: None,
            flags: NodeFlags::default(),
        }
    }

    /// Adds a class, keeping the list duplicate-free.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<Cow<'static, str>>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Sets an attribute, replacing any previous value.
    #[must_use]
    pub fn with_attr(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<String>,
    ) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Replaces the default flags.
    #[must_use]
    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Returns `true` if the class list contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns the value of attribute `name`, if set.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}
