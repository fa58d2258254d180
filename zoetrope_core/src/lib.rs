// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zoetrope_core --heading-base-level=0

//! Zoetrope: a host-agnostic carousel widget core.
//!
//! This crate implements the behavior of a slideshow widget — slide
//! templating, cyclic navigation, auto-play, previews, dots, and arrows —
//! without owning a presentation surface, a clock, or an input source. It
//! renders into a [`zoetrope_scene::Scene`] the host mirrors, schedules
//! against a [`Timers`] queue the host polls, and reacts to input the host
//! routes in. That keeps the same core testable in a plain unit test and
//! embeddable behind a DOM, a terminal, or a GUI toolkit.
//!
//! The core pieces are:
//!
//! - [`Carousel`]: the controller state machine. Mount it on a container
//!   node, feed it timer and input events, destroy it when done.
//! - [`SlideDescriptor`]: the slide dataset, either plain images or
//!   [`CardContent`] cards (testimonial, product, generic).
//! - [`CarouselConfig`]: auto-play and chrome toggles, with the documented
//!   defaults.
//! - [`Timers`]: a deadline queue over the host's monotonic clock, issuing
//!   generational [`TimerToken`]s.
//! - [`hooks`]: the class and attribute vocabulary of the rendered tree,
//!   shared between renderer, dispatch, and styling.
//! - [`CarouselTrace`]: an observer seam for tests and debugging.
//!
//! ## Rendering model
//!
//! Mounting performs one full render: the whole carousel tree is built under
//! the container. Every later position change is a partial update touching
//! only the track offset attribute, the active dot class, and the two
//! preview regions; the host picks those up from the damage drained by
//! [`zoetrope_scene::Scene::commit`]. Only [`Carousel::update_data`]
//! triggers another full render.
//!
//! ## Host integration
//!
//! ```rust
//! use core::time::Duration;
//! use zoetrope_core::{Carousel, CarouselConfig, ImageSlide, SlideDescriptor, Timers, hooks};
//! use zoetrope_scene::{Element, Scene};
//!
//! let mut scene = Scene::new();
//! let container = scene.insert(None, Element::new("div"));
//! let mut timers = Timers::new();
//!
//! let slides = vec![
//!     SlideDescriptor::from(ImageSlide::new("one.png")),
//!     SlideDescriptor::from(ImageSlide::new("two.png")),
//!     SlideDescriptor::from(ImageSlide::new("three.png")),
//! ];
//! let mut carousel = Carousel::mount(
//!     &mut scene,
//!     &mut timers,
//!     container,
//!     slides,
//!     CarouselConfig::default(),
//! )?;
//!
//! // Each frame the host mirrors `scene.commit()` into its surface, sleeps
//! // until `timers.next_deadline()`, and feeds fired tokens back in.
//! let mut fired = Vec::new();
//! timers.poll(Duration::from_millis(3000), &mut fired);
//! for token in fired {
//!     carousel.on_timer(&mut scene, token);
//! }
//! assert_eq!(carousel.current_index(), 1);
//!
//! // Routed input drives navigation the same way.
//! let dot = scene.find_all_by_class(container, hooks::DOT)[2];
//! carousel.on_pointer_down(&mut scene, dot);
//! assert_eq!(carousel.current_index(), 2);
//! # Ok::<_, zoetrope_core::MountError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
pub mod hooks;
mod input;
mod slide;
mod template;
mod timing;
mod trace;

pub use config::CarouselConfig;
pub use controller::{Carousel, MountError};
pub use input::{Action, Key, KeyScope};
pub use slide::{CardContent, GenericCard, ImageSlide, Product, SlideDescriptor, Testimonial};
pub use template::{render_slide_content, star_glyphs, track_transform};
pub use timing::{TimerToken, Timers};
pub use trace::{CarouselTrace, NavCause, TraceEvent, TraceRecorder};
