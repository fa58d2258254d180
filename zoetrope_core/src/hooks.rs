// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stable markup contract.
//!
//! Everything the carousel renders is addressable through the class and
//! attribute hooks below, so host styling and tests can target nodes without
//! depending on tree shape. These names are part of the public API; renaming
//! one is a breaking change.

/// Class of the main region wrapping track, arrows, and dots.
pub const MAIN: &str = "carousel-main";
/// Class of the wrapper around the track and arrow buttons.
pub const WRAPPER: &str = "carousel-wrapper";
/// Class of the sliding track holding one node per slide.
pub const TRACK: &str = "carousel-track";
/// Class of a single slide node inside the track.
pub const SLIDE: &str = "carousel-slide";
/// Class shared by both arrow buttons.
pub const BUTTON: &str = "carousel-btn";
/// Class of the dot indicator strip.
pub const DOTS: &str = "carousel-dots";
/// Class of a single dot indicator.
pub const DOT: &str = "dot";
/// Marker class carried by exactly the dot of the current slide.
pub const ACTIVE: &str = "active";
/// Class shared by both adjacent-slide preview regions.
pub const PREVIEW: &str = "carousel-preview";
/// Positional class distinguishing the previous arrow/preview.
pub const PREV: &str = "prev";
/// Positional class distinguishing the next arrow/preview.
pub const NEXT: &str = "next";

/// Class shared by all templated cards.
pub const CARD: &str = "card";
/// Class of a testimonial card.
pub const TESTIMONIAL_CARD: &str = "testimonial-card";
/// Class of the testimonial card's inner content block.
pub const TESTIMONIAL_CONTENT: &str = "testimonial-content";
/// Class of the decorative quote glyph node.
pub const QUOTE_ICON: &str = "quote-icon";
/// Class of the testimonial author's photo.
pub const AUTHOR_PHOTO: &str = "author-photo";
/// Class of the author name/title/company block.
pub const AUTHOR_INFO: &str = "author-info";
/// Class of the star-rating glyph node.
pub const STAR_RATING: &str = "star-rating";
/// Class of the testimonial text paragraph.
pub const TESTIMONIAL_TEXT: &str = "testimonial-text";
/// Class of a product card.
pub const PRODUCT_CARD: &str = "product-card";
/// Class of the product image.
pub const PRODUCT_IMAGE: &str = "product-image";
/// Class of the product title/description/price block.
pub const PRODUCT_INFO: &str = "product-info";
/// Class of the product price node.
pub const PRODUCT_PRICE: &str = "product-price";

/// Attribute carrying navigation intent (`"prev"` or `"next"`) on arrows and
/// preview regions. Interaction dispatch walks from the event target through
/// its ancestors looking for this attribute.
pub const DATA_ACTION: &str = "data-action";
/// Attribute carrying a dot's slide index.
pub const DATA_INDEX: &str = "data-index";
/// Attribute on the track carrying the position offset, as a CSS-equivalent
/// `transform: translateX(..)` declaration.
pub const STYLE: &str = "style";
/// Attribute carrying an image source URL.
pub const SRC: &str = "src";
/// Attribute carrying an image's alternative text.
pub const ALT: &str = "alt";

/// Glyph rendered inside the previous arrow button.
pub const ARROW_PREV: &str = "‹";
/// Glyph rendered inside the next arrow button.
pub const ARROW_NEXT: &str = "›";
/// Glyph rendered inside a testimonial card's quote icon.
pub const QUOTE_GLYPH: &str = "\"";
