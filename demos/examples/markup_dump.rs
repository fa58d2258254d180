// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render each slide template and dump the resulting markup tree.
//!
//! Run:
//! - `cargo run -p zoetrope_demos --example markup_dump`

use zoetrope_core::{Carousel, CarouselConfig, MountError, Timers};
use zoetrope_demos::{
    image_slider_data, placeholder_data, print_tree, product_showcase_data, testimonials_data,
};
use zoetrope_scene::{Element, Scene};

fn main() -> Result<(), MountError> {
    let mut scene = Scene::new();
    let mut timers = Timers::new();
    let manual = CarouselConfig {
        auto_play: false,
        ..CarouselConfig::default()
    };

    for (label, data) in [
        ("image slider", image_slider_data()),
        ("testimonials", testimonials_data()),
        ("product showcase", product_showcase_data()),
        ("placeholder card", placeholder_data()),
    ] {
        let container = scene.insert(None, Element::new("section"));
        let carousel = Carousel::mount(&mut scene, &mut timers, container, data, manual)?;

        println!("== {label} ==");
        print_tree(&scene, container);
        println!();

        carousel.destroy(&mut scene, &mut timers);
        scene.remove(container);
    }
    Ok(())
}
