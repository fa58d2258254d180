// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The three-carousel demo page, driven by a synthetic clock.
//!
//! Mounts an auto-playing image slider (4 s), an auto-playing testimonial
//! deck (5 s), and a manual product showcase, then steps a synthetic clock
//! one second at a time, routing fired timers back into the carousels the
//! way a host event loop would.
//!
//! Run:
//! - `cargo run -p zoetrope_demos --example carousel_page`

use core::time::Duration;

use zoetrope_core::{Carousel, CarouselConfig, MountError, Timers, hooks};
use zoetrope_demos::{image_slider_data, product_showcase_data, testimonials_data};
use zoetrope_scene::{Element, Scene};

fn main() -> Result<(), MountError> {
    let mut scene = Scene::new();
    let mut timers = Timers::new();

    let image_root = scene.insert(None, Element::new("section"));
    let testimonial_root = scene.insert(None, Element::new("section"));
    let product_root = scene.insert(None, Element::new("section"));

    let mut images = Carousel::mount(
        &mut scene,
        &mut timers,
        image_root,
        image_slider_data(),
        CarouselConfig {
            auto_play_delay: Duration::from_millis(4000),
            ..CarouselConfig::default()
        },
    )?;
    let mut testimonials = Carousel::mount(
        &mut scene,
        &mut timers,
        testimonial_root,
        testimonials_data(),
        CarouselConfig {
            auto_play_delay: Duration::from_millis(5000),
            ..CarouselConfig::default()
        },
    )?;
    let mut products = Carousel::mount(
        &mut scene,
        &mut timers,
        product_root,
        product_showcase_data(),
        CarouselConfig {
            auto_play: false,
            ..CarouselConfig::default()
        },
    )?;

    let damage = scene.commit();
    println!(
        "mounted three carousels: {} nodes created\n",
        damage.created.len()
    );

    let mut fired = Vec::new();
    for second in 1..=12_u64 {
        // A real host would sleep until `timers.next_deadline()`; the demo
        // just steps the clock.
        fired.clear();
        timers.poll(Duration::from_secs(second), &mut fired);
        for &token in &fired {
            // Tokens are generational, so each carousel ignores the others'.
            images.on_timer(&mut scene, token);
            testimonials.on_timer(&mut scene, token);
            products.on_timer(&mut scene, token);
        }

        // Hover the testimonial track for seconds 6..9; its ticker pauses
        // while the image slider keeps running.
        if second == 6 {
            let track = testimonials.track().unwrap();
            testimonials.on_pointer_enter(&scene, &mut timers, track);
            println!("t= 6s pointer enters the testimonial deck");
        }
        if second == 9 {
            let track = testimonials.track().unwrap();
            testimonials.on_pointer_leave(&scene, &mut timers, track);
            println!("t= 9s pointer leaves the testimonial deck");
        }

        let damage = scene.commit();
        println!(
            "t={second:>2}s images={} testimonials={} products={} (changed nodes: {})",
            images.current_index(),
            testimonials.current_index(),
            products.current_index(),
            damage.changed.len()
        );
    }

    // Manual navigation: press the product showcase's next arrow, then jump
    // the image slider home via its first dot.
    let next_arrow = scene
        .find_all_by_class(product_root, hooks::BUTTON)
        .into_iter()
        .find(|&button| scene.attr(button, hooks::DATA_ACTION) == Some("next"))
        .unwrap();
    products.on_pointer_down(&mut scene, next_arrow);

    let first_dot = scene.find_by_class(image_root, hooks::DOT).unwrap();
    images.on_pointer_down(&mut scene, first_dot);

    println!(
        "\nafter input: images={} products={}",
        images.current_index(),
        products.current_index()
    );

    images.destroy(&mut scene, &mut timers);
    testimonials.destroy(&mut scene, &mut timers);
    products.destroy(&mut scene, &mut timers);
    Ok(())
}
