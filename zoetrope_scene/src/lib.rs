// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoetrope_scene --heading-base-level=0

//! Zoetrope Scene: generational scene-tree primitives for markup-level widgets.
//!
//! This crate models the part of a presentation document that a widget owns: a
//! retained tree of markup-level nodes (tag, classes, attributes, text) that a
//! host mirrors into its real surface (a browser DOM, a terminal grid, a test
//! harness). It deliberately knows nothing about layout, painting, or input;
//! those belong to the host.
//!
//! The core pieces are:
//!
//! - [`Scene`]: an arena of nodes with ordered child lists. Construct with
//!   [`Scene::insert`], populate with the `set_*`/class helpers, tear down
//!   with [`Scene::remove`] and [`Scene::clear_children`].
//! - [`NodeId`]: a small, copyable generational handle. Stale handles never
//!   alias a live node; operations on them are safe no-ops.
//! - [`Element`]: per-node markup data. Tag, class list, attribute map,
//!   optional text content, and [`NodeFlags`].
//! - [`Damage`]: the coarse change summary drained by [`Scene::commit`].
//!   Hosts mirror only the nodes the damage names.
//!
//! ## Batched mutation and commit
//!
//! Mutations are recorded as they happen; [`Scene::commit`] drains them into a
//! [`Damage`] value listing created, removed, and changed nodes since the
//! previous commit. The summary is coarse on purpose: it bounds the host's
//! mirroring work without promising a minimal edit script. Nodes that were
//! created and removed inside one commit window are dropped from both lists;
//! the host never observed them.
//!
//! ## Minimal example
//!
//! ```rust
//! use zoetrope_scene::{Element, Scene};
//!
//! let mut scene = Scene::new();
//!
//! // A detached root modelling the widget's container.
//! let container = scene.insert(None, Element::new("div").with_class("gallery"));
//! let caption = scene.insert(Some(container), Element::new("p"));
//! scene.set_text(caption, "hello");
//!
//! assert_eq!(scene.children(container), &[caption]);
//! assert_eq!(scene.text(caption), Some("hello"));
//!
//! let damage = scene.commit();
//! assert!(damage.created.contains(&container));
//!
//! // Stale handles are inert.
//! scene.remove(caption);
//! assert!(!scene.is_alive(caption));
//! scene.set_text(caption, "ignored");
//! assert_eq!(scene.text(caption), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod damage;
mod element;
mod tree;

pub use damage::Damage;
pub use element::{Element, NodeFlags, NodeId};
pub use tree::Scene;
