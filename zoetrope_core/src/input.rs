// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input vocabulary and keyboard scoping.
//!
//! The carousel interprets events the host has already routed; it performs no
//! hit testing and installs no global listeners. Pointer dispatch works off
//! the [`DATA_ACTION`](crate::hooks::DATA_ACTION) attribute, and keyboard
//! routing is explicit: with several carousels in one document, the host uses
//! a [`KeyScope`] to decide which single instance receives arrow keys,
//! typically the hovered or focused one.

/// The navigation keys a carousel understands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// Navigate to the previous slide.
    ArrowLeft,
    /// Navigate to the next slide.
    ArrowRight,
}

/// Navigation intent carried by the `data-action` attribute on arrows and
/// preview regions.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Action {
    /// Go to the previous slide.
    Prev,
    /// Go to the next slide.
    Next,
}

impl Action {
    /// The attribute value this action is rendered as.
    #[must_use]
    pub const fn as_attr_value(self) -> &'static str {
        match self {
            Self::Prev => "prev",
            Self::Next => "next",
        }
    }

    /// Parses an attribute value back into an action.
    #[must_use]
    pub fn from_attr_value(value: &str) -> Option<Self> {
        match value {
            "prev" => Some(Self::Prev),
            "next" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Routes keyboard input to at most one claimant.
///
/// `K` is the host's notion of a carousel identity (an id, an index, a
/// container [`NodeId`](zoetrope_scene::NodeId)). The host claims the scope
/// when an instance becomes the keyboard target (pointer enter, focus) and
/// releases it on the way out. A release by anyone other than the current
/// holder is ignored, so a stale leave event never clobbers a newer claim.
///
/// ```rust
/// use zoetrope_core::KeyScope;
///
/// let mut scope: KeyScope<u32> = KeyScope::new();
/// scope.claim(1);
/// scope.claim(2);
///
/// // Instance 1's leave arrives late; instance 2 keeps the scope.
/// scope.release(1);
/// assert_eq!(scope.target(), Some(2));
///
/// scope.release(2);
/// assert_eq!(scope.target(), None);
/// ```
#[derive(Clone, Debug)]
pub struct KeyScope<K> {
    holder: Option<K>,
}

impl<K> Default for KeyScope<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> KeyScope<K> {
    /// Creates a scope with no keyboard target.
    #[must_use]
    pub const fn new() -> Self {
        Self { holder: None }
    }
}

impl<K: Copy + Eq> KeyScope<K> {
    /// Makes `claimant` the keyboard target, superseding any previous holder.
    pub fn claim(&mut self, claimant: K) {
        self.holder = Some(claimant);
    }

    /// Clears the target if `claimant` is the current holder.
    pub fn release(&mut self, claimant: K) {
        if self.holder == Some(claimant) {
            self.holder = None;
        }
    }

    /// The instance that should receive keyboard input, if any.
    #[must_use]
    pub fn target(&self) -> Option<K> {
        self.holder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_attr_values_round_trip() {
        assert_eq!(Action::from_attr_value("prev"), Some(Action::Prev));
        assert_eq!(Action::from_attr_value("next"), Some(Action::Next));
        assert_eq!(Action::Prev.as_attr_value(), "prev");
        assert_eq!(Action::from_attr_value("bogus"), None);
    }

    #[test]
    fn claim_supersedes_and_release_is_ordered() {
        let mut scope = KeyScope::new();
        assert_eq!(scope.target(), None);

        scope.claim('a');
        scope.claim('b');
        assert_eq!(scope.target(), Some('b'));

        // A stale release from the superseded holder changes nothing.
        scope.release('a');
        assert_eq!(scope.target(), Some('b'));

        scope.release('b');
        assert_eq!(scope.target(), None);

        // Releasing an empty scope is a no-op.
        scope.release('b');
        assert_eq!(scope.target(), None);
    }
}
