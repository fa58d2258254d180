// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slide dataset vocabulary.
//!
//! A carousel renders an ordered sequence of [`SlideDescriptor`]s supplied by
//! the embedding application. A descriptor is either a raw image or a
//! templated content card; the card template vocabulary is itself a closed
//! enum, so an unknown slide type or template is unrepresentable rather than
//! a runtime error.

use alloc::string::String;

/// One dataset entry: a raw image or a templated content card.
#[derive(Clone, Debug, PartialEq)]
pub enum SlideDescriptor {
    /// A plain image slide.
    Image(ImageSlide),
    /// A templated content card.
    Card(CardContent),
}

impl From<ImageSlide> for SlideDescriptor {
    fn from(slide: ImageSlide) -> Self {
        Self::Image(slide)
    }
}

impl From<CardContent> for SlideDescriptor {
    fn from(content: CardContent) -> Self {
        Self::Card(content)
    }
}

impl From<Testimonial> for SlideDescriptor {
    fn from(card: Testimonial) -> Self {
        Self::Card(CardContent::Testimonial(card))
    }
}

impl From<Product> for SlideDescriptor {
    fn from(card: Product) -> Self {
        Self::Card(CardContent::Product(card))
    }
}

impl From<GenericCard> for SlideDescriptor {
    fn from(card: GenericCard) -> Self {
        Self::Card(CardContent::Generic(card))
    }
}

/// A plain image slide.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSlide {
    /// Image source URL.
    pub src: String,
    /// Alternative text. Defaults to the empty string.
    pub alt: String,
}

impl ImageSlide {
    /// Creates an image slide with empty alternative text.
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: String::new(),
        }
    }

    /// Sets the alternative text.
    #[must_use]
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }
}

/// The card template vocabulary.
#[derive(Clone, Debug, PartialEq)]
pub enum CardContent {
    /// A quote with author attribution and a star rating.
    Testimonial(Testimonial),
    /// A product tile with image, copy, and a price string.
    Product(Product),
    /// A free-form card with optional title and description.
    Generic(GenericCard),
}

/// Content of a testimonial card.
#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    /// Author name.
    pub name: String,
    /// Author job title.
    pub title: String,
    /// Author company.
    pub company: String,
    /// Author photo URL.
    pub photo: String,
    /// Star rating, nominally in `[0, 5]`. Out-of-range and non-finite
    /// values are clamped at render time; see
    /// [`star_glyphs`](crate::star_glyphs).
    pub rating: f32,
    /// The testimonial text itself.
    pub testimonial: String,
}

/// Content of a product card.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    /// Product title.
    pub title: String,
    /// Product description.
    pub description: String,
    /// Price as opaque formatted text. Never parsed as a number.
    pub price: String,
    /// Product image URL.
    pub image: String,
}

/// Content of a generic card. Both fields are optional; a card with neither
/// renders as an empty placeholder rather than failing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenericCard {
    /// Optional card title.
    pub title: Option<String>,
    /// Optional card description.
    pub description: Option<String>,
}

impl GenericCard {
    /// Returns `true` if the card has neither a title nor a description.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_alt_defaults_to_empty() {
        let slide = ImageSlide::new("photo.jpg");
        assert_eq!(slide.alt, "");
        let slide = slide.with_alt("A photo");
        assert_eq!(slide.alt, "A photo");
    }

    #[test]
    fn generic_card_emptiness() {
        assert!(GenericCard::default().is_empty());
        let card = GenericCard {
            title: Some(String::from("Welcome")),
            description: None,
        };
        assert!(!card.is_empty());
    }

    #[test]
    fn card_types_convert_into_descriptors() {
        let descriptor: SlideDescriptor = GenericCard::default().into();
        assert_eq!(
            descriptor,
            SlideDescriptor::Card(CardContent::Generic(GenericCard::default()))
        );
    }
}
