// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller state machine.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;
use zoetrope_scene::{Element, NodeId, Scene};

use crate::config::CarouselConfig;
use crate::hooks;
use crate::input::{Action, Key};
use crate::slide::SlideDescriptor;
use crate::template;
use crate::timing::{TimerToken, Timers};
use crate::trace::{CarouselTrace, NavCause, TraceEvent};

/// Error returned when a carousel cannot be mounted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MountError {
    /// The container id does not refer to a live scene node.
    ContainerMissing,
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContainerMissing => f.write_str("carousel container is not a live scene node"),
        }
    }
}

impl core::error::Error for MountError {}

/// Cached handles to the rendered parts, refreshed on every full render.
#[derive(Debug)]
struct Parts {
    container: NodeId,
    main: NodeId,
    track: Option<NodeId>,
    slides: SmallVec<[NodeId; 8]>,
    dots: SmallVec<[NodeId; 8]>,
    prev_preview: Option<NodeId>,
    next_preview: Option<NodeId>,
}

/// A carousel controller bound to one container node.
///
/// The controller owns the slide dataset, the current position, and the
/// auto-play lifecycle. It renders into a host-owned [`Scene`] and schedules
/// against a host-owned [`Timers`] queue, so several carousels can share one
/// document and one clock; both are passed into each operation rather than
/// held. The host delivers routed input through the `on_*` methods:
///
/// - [`on_pointer_down`](Self::on_pointer_down) with the hit node; dispatch
///   walks ancestors for the `data-action` attribute or a dot.
/// - [`on_pointer_enter`](Self::on_pointer_enter) /
///   [`on_pointer_leave`](Self::on_pointer_leave) for the hover pause.
/// - [`on_key`](Self::on_key) with a [`Key`] the host chose to route here
///   (see [`KeyScope`](crate::KeyScope) for routing among instances).
/// - [`on_timer`](Self::on_timer) with each fired [`TimerToken`].
///
/// A container is exclusively owned by its controller between
/// [`mount`](Self::mount) and [`destroy`](Self::destroy); mounting two
/// controllers on one container is a caller contract violation.
///
/// ## Position changes
///
/// Navigation is cyclic: `next` from the last slide wraps to the first and
/// `prev` from the first wraps to the last. Every position change performs
/// only the partial update: the track offset, the active dot, and the two
/// preview regions. The tree is fully rebuilt only on mount and
/// [`update_data`](Self::update_data).
///
/// ## Auto-play
///
/// Auto-play distinguishes *intent* from *ticking*: a hover pause cancels
/// the ticker but keeps the intent, so the matching leave resumes it, while
/// [`stop_auto_play`](Self::stop_auto_play) clears both and a later leave
/// resumes nothing.
pub struct Carousel<T: CarouselTrace = ()> {
    config: CarouselConfig,
    slides: Vec<SlideDescriptor>,
    current: usize,
    auto_play_intent: bool,
    ticker: Option<TimerToken>,
    parts: Parts,
    trace: T,
}

impl<T: CarouselTrace> fmt::Debug for Carousel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("slides", &self.slides.len())
            .field("current", &self.current)
            .field("auto_play_intent", &self.auto_play_intent)
            .field("ticking", &self.ticker.is_some())
            .finish_non_exhaustive()
    }
}

impl Carousel {
    /// Mounts a carousel without a trace sink.
    ///
    /// See [`mount_with_trace`](Self::mount_with_trace).
    pub fn mount(
        scene: &mut Scene,
        timers: &mut Timers,
        container: NodeId,
        slides: Vec<SlideDescriptor>,
        config: CarouselConfig,
    ) -> Result<Self, MountError> {
        Self::mount_with_trace(scene, timers, container, slides, config, ())
    }
}

impl<T: CarouselTrace> Carousel<T> {
    /// Mounts a carousel into `container`, replacing its children with the
    /// rendered tree, and starts auto-play when configured on.
    ///
    /// Fails with [`MountError::ContainerMissing`] if `container` is not a
    /// live node. With an empty dataset only the main region and wrapper are
    /// rendered and all navigation is a no-op until
    /// [`update_data`](Self::update_data) supplies slides.
    pub fn mount_with_trace(
        scene: &mut Scene,
        timers: &mut Timers,
        container: NodeId,
        slides: Vec<SlideDescriptor>,
        config: CarouselConfig,
        trace: T,
    ) -> Result<Self, MountError> {
        if !scene.is_alive(container) {
            return Err(MountError::ContainerMissing);
        }
        let parts = Self::build(scene, container, &slides, &config);
        let mut carousel = Self {
            config,
            slides,
            current: 0,
            auto_play_intent: config.auto_play,
            ticker: None,
            parts,
            trace,
        };
        carousel.trace.event(TraceEvent::Mounted {
            slides: carousel.slides.len(),
        });
        carousel.apply_position(scene);
        if carousel.config.auto_play {
            carousel.start_auto_play(timers);
        }
        Ok(carousel)
    }

    /// The index of the slide currently in view.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of slides in the dataset.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Returns `true` if auto-play intent is set (configured or started,
    /// and not stopped). A hover pause keeps the intent.
    #[must_use]
    pub fn is_auto_playing(&self) -> bool {
        self.auto_play_intent
    }

    /// Returns `true` if an auto-play ticker is currently scheduled.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// The resolved configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The container node this carousel renders into.
    #[must_use]
    pub fn container(&self) -> NodeId {
        self.parts.container
    }

    /// The main region node (track, arrows, and dots live under it).
    #[must_use]
    pub fn main_region(&self) -> NodeId {
        self.parts.main
    }

    /// The track node, absent when the dataset is empty.
    #[must_use]
    pub fn track(&self) -> Option<NodeId> {
        self.parts.track
    }

    /// The per-slide nodes inside the track, in dataset order.
    #[must_use]
    pub fn slide_nodes(&self) -> &[NodeId] {
        &self.parts.slides
    }

    /// The trace sink.
    #[must_use]
    pub fn trace(&self) -> &T {
        &self.trace
    }

    /// Jumps to `index`, clamping out-of-range values to the last slide.
    ///
    /// A no-op on an empty dataset. Has no auto-play side effect: a running
    /// ticker keeps its phase. Jumping to the current index re-renders but
    /// records no position change.
    pub fn go_to(&mut self, scene: &mut Scene, index: usize) {
        let count = self.slides.len();
        if count == 0 {
            return;
        }
        let from = self.current;
        self.current = index.min(count - 1);
        if from != self.current {
            self.trace.event(TraceEvent::PositionChanged {
                from,
                to: self.current,
                cause: NavCause::Jump,
            });
        }
        self.apply_position(scene);
    }

    /// Advances to the next slide, wrapping to the first after the last.
    pub fn next(&mut self, scene: &mut Scene) {
        self.step(scene, true, NavCause::User);
    }

    /// Retreats to the previous slide, wrapping to the last before the first.
    pub fn prev(&mut self, scene: &mut Scene) {
        self.step(scene, false, NavCause::User);
    }

    /// Starts (or restarts) the auto-play ticker and sets the intent flag.
    ///
    /// Any existing ticker is canceled first, so concurrent tickers cannot
    /// leak.
    pub fn start_auto_play(&mut self, timers: &mut Timers) {
        self.cancel_ticker(timers);
        self.ticker = Some(timers.schedule_every(self.config.auto_play_delay));
        self.auto_play_intent = true;
        self.trace.event(TraceEvent::AutoPlayStarted);
    }

    /// Stops the ticker and clears the intent flag.
    ///
    /// After a stop, [`resume_auto_play`](Self::resume_auto_play) does
    /// nothing; only [`start_auto_play`](Self::start_auto_play) (or
    /// [`update_data`](Self::update_data) on an auto-play configuration)
    /// turns auto-play back on. Idempotent.
    pub fn stop_auto_play(&mut self, timers: &mut Timers) {
        let was_on = self.auto_play_intent || self.ticker.is_some();
        self.cancel_ticker(timers);
        self.auto_play_intent = false;
        if was_on {
            self.trace.event(TraceEvent::AutoPlayStopped);
        }
    }

    /// Suppresses the ticker while keeping the intent to resume.
    ///
    /// Only acts when the intent flag is set and a ticker is running; this
    /// is the pointer-enter half of the hover pause.
    pub fn pause_auto_play(&mut self, timers: &mut Timers) {
        if self.auto_play_intent && self.ticker.is_some() {
            self.cancel_ticker(timers);
            self.trace.event(TraceEvent::AutoPlayPaused);
        }
    }

    /// Re-arms the ticker after a pause.
    ///
    /// Only acts when the intent flag is set and no ticker is running, so
    /// resuming an instance configured (or stopped) with auto-play off is a
    /// no-op.
    pub fn resume_auto_play(&mut self, timers: &mut Timers) {
        if self.auto_play_intent && self.ticker.is_none() {
            self.ticker = Some(timers.schedule_every(self.config.auto_play_delay));
            self.trace.event(TraceEvent::AutoPlayResumed);
        }
    }

    /// Delivers a fired timer token.
    ///
    /// Advances one slide iff `token` is the live ticker; stale tokens (from
    /// a canceled or restarted ticker still in flight in the host's event
    /// queue) are ignored.
    pub fn on_timer(&mut self, scene: &mut Scene, token: TimerToken) {
        if self.ticker != Some(token) {
            return;
        }
        self.step(scene, true, NavCause::Timer);
    }

    /// Delivers a pointer press on `target`.
    ///
    /// Walks from `target` up to the container looking for a dot or a
    /// `data-action` attribute; a dot jumps to its index, an action maps to
    /// prev/next. Presses on anything else are ignored.
    pub fn on_pointer_down(&mut self, scene: &mut Scene, target: NodeId) {
        let mut hit_action = None;
        let mut hit_dot = None;
        let mut node = Some(target);
        while let Some(id) = node {
            if hit_dot.is_none() && scene.has_class(id, hooks::DOT) {
                hit_dot = scene
                    .attr(id, hooks::DATA_INDEX)
                    .and_then(|value| value.parse::<usize>().ok());
            }
            if hit_action.is_none() {
                hit_action = scene
                    .attr(id, hooks::DATA_ACTION)
                    .and_then(Action::from_attr_value);
            }
            if hit_action.is_some() || hit_dot.is_some() || id == self.parts.container {
                break;
            }
            node = scene.parent(id);
        }

        if let Some(index) = hit_dot {
            self.go_to(scene, index);
        } else if let Some(action) = hit_action {
            match action {
                Action::Prev => self.step(scene, false, NavCause::User),
                Action::Next => self.step(scene, true, NavCause::User),
            }
        }
    }

    /// Delivers a pointer enter on `target`.
    ///
    /// Pauses auto-play when the target lies within the main region and the
    /// instance is configured for auto-play.
    pub fn on_pointer_enter(&mut self, scene: &Scene, timers: &mut Timers, target: NodeId) {
        if self.config.auto_play && self.is_within_main(scene, target) {
            self.pause_auto_play(timers);
        }
    }

    /// Delivers a pointer leave on `target`; the counterpart of
    /// [`on_pointer_enter`](Self::on_pointer_enter).
    pub fn on_pointer_leave(&mut self, scene: &Scene, timers: &mut Timers, target: NodeId) {
        if self.config.auto_play && self.is_within_main(scene, target) {
            self.resume_auto_play(timers);
        }
    }

    /// Delivers a navigation key the host routed to this instance.
    pub fn on_key(&mut self, scene: &mut Scene, key: Key) {
        match key {
            Key::ArrowLeft => self.step(scene, false, NavCause::User),
            Key::ArrowRight => self.step(scene, true, NavCause::User),
        }
    }

    /// Replaces the dataset wholesale.
    ///
    /// Resets the position to slide 0, rebuilds the rendered tree from
    /// scratch, and restarts auto-play if the configuration says on
    /// (restoring the intent even after a stop). A ticker started manually
    /// on an auto-play-off configuration is left running.
    pub fn update_data(
        &mut self,
        scene: &mut Scene,
        timers: &mut Timers,
        slides: Vec<SlideDescriptor>,
    ) {
        let from = self.current;
        self.slides = slides;
        self.current = 0;
        let parts = Self::build(scene, self.parts.container, &self.slides, &self.config);
        self.parts = parts;

        self.trace.event(TraceEvent::DataReplaced {
            slides: self.slides.len(),
        });
        if from != 0 {
            self.trace.event(TraceEvent::PositionChanged {
                from,
                to: 0,
                cause: NavCause::DataReplaced,
            });
        }
        self.apply_position(scene);
        if self.config.auto_play {
            self.start_auto_play(timers);
        }
    }

    /// Destroys the carousel: cancels the ticker, empties the container, and
    /// consumes the instance. Returns the trace sink.
    ///
    /// The container node itself stays alive and can be remounted. A tick
    /// already in flight in the host's queue is inert afterwards because its
    /// token went stale with the cancellation.
    pub fn destroy(mut self, scene: &mut Scene, timers: &mut Timers) -> T {
        self.cancel_ticker(timers);
        scene.clear_children(self.parts.container);
        self.trace.event(TraceEvent::Destroyed);
        self.trace
    }

    /// Full render: clears the container and rebuilds the whole tree.
    fn build(
        scene: &mut Scene,
        container: NodeId,
        slides: &[SlideDescriptor],
        config: &CarouselConfig,
    ) -> Parts {
        scene.clear_children(container);
        let main = scene.insert(Some(container), Element::new("div").with_class(hooks::MAIN));
        let wrapper = scene.insert(Some(main), Element::new("div").with_class(hooks::WRAPPER));

        let mut parts = Parts {
            container,
            main,
            track: None,
            slides: SmallVec::new(),
            dots: SmallVec::new(),
            prev_preview: None,
            next_preview: None,
        };
        if slides.is_empty() {
            return parts;
        }

        let track = scene.insert(Some(wrapper), Element::new("div").with_class(hooks::TRACK));
        parts.track = Some(track);
        for slide in slides {
            let node = scene.insert(Some(track), Element::new("div").with_class(hooks::SLIDE));
            template::render_slide_content(scene, node, slide);
            parts.slides.push(node);
        }

        if config.show_arrows {
            scene.insert(
                Some(wrapper),
                Element::new("button")
                    .with_class(hooks::BUTTON)
                    .with_class(hooks::PREV)
                    .with_attr(hooks::DATA_ACTION, Action::Prev.as_attr_value())
                    .with_text(hooks::ARROW_PREV),
            );
            scene.insert(
                Some(wrapper),
                Element::new("button")
                    .with_class(hooks::BUTTON)
                    .with_class(hooks::NEXT)
                    .with_attr(hooks::DATA_ACTION, Action::Next.as_attr_value())
                    .with_text(hooks::ARROW_NEXT),
            );
        }

        if config.show_dots {
            let strip = scene.insert(Some(main), Element::new("div").with_class(hooks::DOTS));
            for index in 0..slides.len() {
                let dot = scene.insert(
                    Some(strip),
                    Element::new("div")
                        .with_class(hooks::DOT)
                        .with_attr(hooks::DATA_INDEX, index.to_string()),
                );
                parts.dots.push(dot);
            }
        }

        if config.show_previews {
            parts.prev_preview = Some(scene.insert(
                Some(container),
                Element::new("div")
                    .with_class(hooks::PREVIEW)
                    .with_class(hooks::PREV)
                    .with_attr(hooks::DATA_ACTION, Action::Prev.as_attr_value()),
            ));
            parts.next_preview = Some(scene.insert(
                Some(container),
                Element::new("div")
                    .with_class(hooks::PREVIEW)
                    .with_class(hooks::NEXT)
                    .with_attr(hooks::DATA_ACTION, Action::Next.as_attr_value()),
            ));
        }

        parts
    }

    /// Partial update: track offset, active dot, preview contents.
    fn apply_position(&self, scene: &mut Scene) {
        let Some(track) = self.parts.track else { return };
        scene.set_attr(track, hooks::STYLE, template::track_transform(self.current));
        for (index, dot) in self.parts.dots.iter().enumerate() {
            scene.set_class_enabled(*dot, hooks::ACTIVE, index == self.current);
        }
        self.update_previews(scene);
    }

    fn update_previews(&self, scene: &mut Scene) {
        let (Some(prev), Some(next)) = (self.parts.prev_preview, self.parts.next_preview) else {
            return;
        };
        let count = self.slides.len();
        if count == 0 {
            return;
        }
        let prev_index = (self.current + count - 1) % count;
        let next_index = (self.current + 1) % count;

        scene.clear_children(prev);
        template::render_slide_content(scene, prev, &self.slides[prev_index]);
        scene.clear_children(next);
        template::render_slide_content(scene, next, &self.slides[next_index]);
    }

    fn step(&mut self, scene: &mut Scene, forward: bool, cause: NavCause) {
        let count = self.slides.len();
        if count == 0 {
            return;
        }
        let from = self.current;
        self.current = if forward {
            (from + 1) % count
        } else {
            (from + count - 1) % count
        };
        // A one-slide dataset steps onto itself; that is not a position
        // change, though the render request still goes through.
        if from != self.current {
            self.trace.event(TraceEvent::PositionChanged {
                from,
                to: self.current,
                cause,
            });
        }
        self.apply_position(scene);
    }

    fn is_within_main(&self, scene: &Scene, target: NodeId) -> bool {
        let mut node = Some(target);
        while let Some(id) = node {
            if id == self.parts.main {
                return true;
            }
            if id == self.parts.container {
                return false;
            }
            node = scene.parent(id);
        }
        false
    }

    fn cancel_ticker(&mut self, timers: &mut Timers) {
        if let Some(token) = self.ticker.take() {
            timers.cancel(token);
        }
    }
}
