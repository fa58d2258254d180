// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide content templating.
//!
//! [`render_slide_content`] is a pure function of a slide descriptor: it
//! appends the content fragment for one slide under a parent node and reads
//! no controller state, so templates are independently testable. The classes
//! and attributes it emits are the [`hooks`] contract.

use alloc::format;
use alloc::string::String;

use zoetrope_scene::{Element, NodeId, Scene};

use crate::hooks;
use crate::slide::{CardContent, GenericCard, ImageSlide, Product, SlideDescriptor, Testimonial};

/// Appends the content fragment for one slide under `parent`.
///
/// Every descriptor variant produces exactly one content root node, which is
/// returned. A [`GenericCard`] with neither field renders a bare placeholder
/// card node rather than failing.
pub fn render_slide_content(scene: &mut Scene, parent: NodeId, slide: &SlideDescriptor) -> NodeId {
    match slide {
        SlideDescriptor::Image(image) => render_image(scene, parent, image),
        SlideDescriptor::Card(CardContent::Testimonial(card)) => {
            render_testimonial(scene, parent, card)
        }
        SlideDescriptor::Card(CardContent::Product(card)) => render_product(scene, parent, card),
        SlideDescriptor::Card(CardContent::Generic(card)) => render_generic(scene, parent, card),
    }
}

fn render_image(scene: &mut Scene, parent: NodeId, image: &ImageSlide) -> NodeId {
    scene.insert(
        Some(parent),
        Element::new("img")
            .with_attr(hooks::SRC, image.src.clone())
            .with_attr(hooks::ALT, image.alt.clone()),
    )
}

fn render_testimonial(scene: &mut Scene, parent: NodeId, card: &Testimonial) -> NodeId {
    let root = scene.insert(
        Some(parent),
        Element::new("div")
            .with_class(hooks::CARD)
            .with_class(hooks::TESTIMONIAL_CARD),
    );
    let content = scene.insert(
        Some(root),
        Element::new("div").with_class(hooks::TESTIMONIAL_CONTENT),
    );
    scene.insert(
        Some(content),
        Element::new("div")
            .with_class(hooks::QUOTE_ICON)
            .with_text(hooks::QUOTE_GLYPH),
    );
    scene.insert(
        Some(content),
        Element::new("img")
            .with_class(hooks::AUTHOR_PHOTO)
            .with_attr(hooks::SRC, card.photo.clone())
            .with_attr(hooks::ALT, card.name.clone()),
    );
    let info = scene.insert(
        Some(content),
        Element::new("div").with_class(hooks::AUTHOR_INFO),
    );
    scene.insert(Some(info), Element::new("h4").with_text(card.name.clone()));
    scene.insert(
        Some(info),
        Element::new("span").with_text(card.title.clone()),
    );
    scene.insert(
        Some(info),
        Element::new("span").with_text(card.company.clone()),
    );
    scene.insert(
        Some(content),
        Element::new("div")
            .with_class(hooks::STAR_RATING)
            .with_text(star_glyphs(card.rating)),
    );
    scene.insert(
        Some(content),
        Element::new("p")
            .with_class(hooks::TESTIMONIAL_TEXT)
            .with_text(card.testimonial.clone()),
    );
    root
}

fn render_product(scene: &mut Scene, parent: NodeId, card: &Product) -> NodeId {
    let root = scene.insert(
        Some(parent),
        Element::new("div")
            .with_class(hooks::CARD)
            .with_class(hooks::PRODUCT_CARD),
    );
    scene.insert(
        Some(root),
        Element::new("img")
            .with_class(hooks::PRODUCT_IMAGE)
            .with_attr(hooks::SRC, card.image.clone())
            .with_attr(hooks::ALT, card.title.clone()),
    );
    let info = scene.insert(
        Some(root),
        Element::new("div").with_class(hooks::PRODUCT_INFO),
    );
    scene.insert(Some(info), Element::new("h3").with_text(card.title.clone()));
    scene.insert(
        Some(info),
        Element::new("p").with_text(card.description.clone()),
    );
    scene.insert(
        Some(info),
        Element::new("div")
            .with_class(hooks::PRODUCT_PRICE)
            .with_text(card.price.clone()),
    );
    root
}

fn render_generic(scene: &mut Scene, parent: NodeId, card: &GenericCard) -> NodeId {
    let root = scene.insert(Some(parent), Element::new("div").with_class(hooks::CARD));
    if let Some(title) = &card.title {
        scene.insert(Some(root), Element::new("h2").with_text(title.clone()));
    }
    if let Some(description) = &card.description {
        scene.insert(Some(root), Element::new("p").with_text(description.clone()));
    }
    root
}

/// Renders a star rating as a five-glyph string.
///
/// `floor(rating)` filled stars, one half star iff the rating has a
/// fractional remainder, then empty stars up to exactly five glyphs.
/// Out-of-range ratings clamp to `[0, 5]`; non-finite ratings render as zero
/// stars.
///
/// ```rust
/// use zoetrope_core::star_glyphs;
///
/// assert_eq!(star_glyphs(5.0), "★★★★★");
/// assert_eq!(star_glyphs(3.5), "★★★⯪☆");
/// assert_eq!(star_glyphs(0.0), "☆☆☆☆☆");
/// ```
#[must_use]
pub fn star_glyphs(rating: f32) -> String {
    let rating = if rating.is_finite() {
        rating.clamp(0.0, 5.0)
    } else {
        0.0
    };
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the rating is clamped to [0, 5]; truncation toward zero is the floor"
    )]
    let full = rating as u32;
    let has_half = (full as f32) < rating;
    let empty = 5 - full - u32::from(has_half);

    let mut out = String::new();
    for _ in 0..full {
        out.push('★');
    }
    if has_half {
        out.push('⯪');
    }
    for _ in 0..empty {
        out.push('☆');
    }
    out
}

/// Formats the track offset for a slide index as a CSS-equivalent
/// `transform` declaration.
///
/// ```rust
/// use zoetrope_core::track_transform;
///
/// assert_eq!(track_transform(0), "transform: translateX(0%)");
/// assert_eq!(track_transform(2), "transform: translateX(-200%)");
/// ```
#[must_use]
pub fn track_transform(index: usize) -> String {
    if index == 0 {
        String::from("transform: translateX(0%)")
    } else {
        format!("transform: translateX(-{}%)", index * 100)
    }
}
