// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the Zoetrope demo programs: the three demo datasets
//! and a plain-text tree printer.

use zoetrope_core::{GenericCard, ImageSlide, Product, SlideDescriptor, Testimonial};
use zoetrope_scene::{NodeId, Scene};

/// Four landscape photos for the image-slider demo.
pub fn image_slider_data() -> Vec<SlideDescriptor> {
    vec![
        ImageSlide::new("https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=600&h=400&fit=crop")
            .with_alt("Mountain landscape")
            .into(),
        ImageSlide::new("https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=600&h=400&fit=crop")
            .with_alt("Forest path")
            .into(),
        ImageSlide::new("https://images.unsplash.com/photo-1469474968028-56623f02e42e?w=600&h=400&fit=crop")
            .with_alt("Beach sunset")
            .into(),
        ImageSlide::new("https://images.unsplash.com/photo-1518837695005-2083093ee35b?w=600&h=400&fit=crop")
            .with_alt("Ocean waves")
            .into(),
    ]
}

/// Five customer quotes for the testimonial demo.
pub fn testimonials_data() -> Vec<SlideDescriptor> {
    let entries = [
        (
            "Sarah Johnson",
            "CEO",
            "TechStart",
            "photo-1494790108755-2616b612b5e5",
            5.0,
            "This product completely transformed our workflow. Amazing results!",
        ),
        (
            "Mike Chen",
            "Designer",
            "CreativeStudio",
            "photo-1472099645785-5658abf4ff4e",
            4.5,
            "Outstanding customer service and incredible quality. Highly recommended!",
        ),
        (
            "Emily Rodriguez",
            "Marketing Director",
            "",
            "photo-1438761681033-6461ffad8d80",
            5.0,
            "The best investment we've made for our business. Game changer!",
        ),
        (
            "David Kim",
            "Founder",
            "InnovateLab",
            "photo-1507003211169-0a1dd7228f2d",
            4.0,
            "Exceeded all expectations. The team is professional and results speak for themselves.",
        ),
        (
            "Lisa Thompson",
            "Product Manager",
            "",
            "photo-1544725176-7c40e5a71c5e",
            4.5,
            "Incredible attention to detail and fantastic user experience.",
        ),
    ];
    entries
        .into_iter()
        .map(|(name, title, company, photo, rating, testimonial)| {
            Testimonial {
                name: name.into(),
                title: title.into(),
                company: company.into(),
                photo: format!(
                    "https://images.unsplash.com/{photo}?w=100&h=100&fit=crop&crop=face"
                ),
                rating,
                testimonial: testimonial.into(),
            }
            .into()
        })
        .collect()
}

/// Three products for the showcase demo.
pub fn product_showcase_data() -> Vec<SlideDescriptor> {
    let entries = [
        (
            "Premium Headphones",
            "Wireless noise-cancelling headphones with premium sound quality.",
            "$299.99",
            "photo-1505740420928-5e560c06d30e",
        ),
        (
            "Smart Watch Pro",
            "Advanced fitness tracking with health monitoring features.",
            "$399.99",
            "photo-1523275335684-37898b6baf30",
        ),
        (
            "Laptop Stand",
            "Ergonomic aluminum laptop stand for better posture.",
            "$89.99",
            "photo-1527864550417-7fd91fc51a46",
        ),
    ];
    entries
        .into_iter()
        .map(|(title, description, price, image)| {
            Product {
                title: title.into(),
                description: description.into(),
                price: price.into(),
                image: format!("https://images.unsplash.com/{image}?w=600&h=400&fit=crop"),
            }
            .into()
        })
        .collect()
}

/// A one-slide placeholder dataset exercising the generic card fallback.
pub fn placeholder_data() -> Vec<SlideDescriptor> {
    vec![
        GenericCard {
            title: Some("Coming soon".into()),
            description: Some("New arrivals land here next week.".into()),
        }
        .into(),
    ]
}

/// Prints `root` and its subtree as indented plain-text markup.
pub fn print_tree(scene: &Scene, root: NodeId) {
    print_node(scene, root, 0);
}

fn print_node(scene: &Scene, id: NodeId, depth: usize) {
    let Some(element) = scene.element(id) else {
        return;
    };
    print!("{:width$}{}", "", element.tag, width = depth * 2);
    for class in &element.classes {
        print!(".{class}");
    }
    // Attribute maps iterate in arbitrary order; sort for stable output.
    let mut attrs: Vec<_> = element.attrs.iter().collect();
    attrs.sort();
    for (name, value) in attrs {
        print!(" {name}={value:?}");
    }
    if let Some(text) = &element.text {
        print!(" {text:?}");
    }
    println!();
    for child in scene.children(id) {
        print_node(scene, *child, depth + 1);
    }
}
