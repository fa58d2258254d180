// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use zoetrope_core::{
    Carousel, CarouselConfig, GenericCard, ImageSlide, Product, SlideDescriptor, Testimonial,
    Timers, hooks, star_glyphs,
};
use zoetrope_scene::{Element, NodeId, Scene};

/// Cycles through all four slide templates so a render touches every path.
fn mixed_slides(n: usize) -> Vec<SlideDescriptor> {
    (0..n)
        .map(|i| match i % 4 {
            0 => ImageSlide::new(format!("img-{i}.png"))
                .with_alt(format!("image {i}"))
                .into(),
            1 => Testimonial {
                name: format!("Reviewer {i}"),
                title: "Engineer".into(),
                company: "Example Co".into(),
                photo: format!("face-{i}.png"),
                rating: 3.5,
                testimonial: "Solid, dependable, would mount again.".into(),
            }
            .into(),
            2 => Product {
                title: format!("Gadget {i}"),
                description: "A gadget of unusual quality.".into(),
                price: "$19.99".into(),
                image: format!("gadget-{i}.png"),
            }
            .into(),
            _ => GenericCard {
                title: Some(format!("Card {i}")),
                description: None,
            }
            .into(),
        })
        .collect()
}

fn manual_config() -> CarouselConfig {
    CarouselConfig {
        auto_play: false,
        ..CarouselConfig::default()
    }
}

fn mounted(n: usize) -> (Scene, Timers, Carousel, NodeId) {
    let mut scene = Scene::new();
    let container = scene.insert(None, Element::new("div"));
    let mut timers = Timers::new();
    let carousel = Carousel::mount(
        &mut scene,
        &mut timers,
        container,
        mixed_slides(n),
        manual_config(),
    )
    .expect("container is live");
    let _ = scene.commit();
    (scene, timers, carousel, container)
}

fn bench_carousel(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoetrope_core");

    for &n in &[4_usize, 16, 64] {
        group.bench_function(format!("full_render(n={n})"), |b| {
            b.iter_batched(
                || {
                    let mut scene = Scene::new();
                    let container = scene.insert(None, Element::new("div"));
                    (scene, Timers::new(), mixed_slides(n), container)
                },
                |(mut scene, mut timers, slides, container)| {
                    let carousel = Carousel::mount(
                        &mut scene,
                        &mut timers,
                        container,
                        slides,
                        manual_config(),
                    )
                    .expect("container is live");
                    black_box(scene.commit());
                    black_box(carousel);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("partial_update_next(n={n})"), |b| {
            b.iter_batched(
                || mounted(n),
                |(mut scene, _timers, mut carousel, _)| {
                    carousel.next(&mut scene);
                    black_box(scene.commit());
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("update_data_swap(n={n})"), |b| {
            b.iter_batched(
                || {
                    let (scene, timers, carousel, container) = mounted(n);
                    (scene, timers, carousel, container, mixed_slides(n))
                },
                |(mut scene, mut timers, mut carousel, _, slides)| {
                    carousel.update_data(&mut scene, &mut timers, slides);
                    black_box(scene.commit());
                },
                BatchSize::LargeInput,
            );
        });
    }

    // Worst case for dispatch: a leaf with no action carrier on the path,
    // so the walk runs all the way up to the container.
    group.bench_function("pointer_walk_to_container(n=16)", |b| {
        b.iter_batched(
            || {
                let (scene, timers, carousel, container) = mounted(16);
                let text = scene
                    .find_by_class(container, hooks::TESTIMONIAL_TEXT)
                    .expect("mixed dataset contains a testimonial");
                (scene, timers, carousel, text)
            },
            |(mut scene, _timers, mut carousel, text)| {
                carousel.on_pointer_down(&mut scene, text);
                black_box(carousel.current_index());
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("star_glyph_sweep", |b| {
        b.iter(|| {
            for tenths in 0..=50_u32 {
                let rating = tenths as f32 / 10.0;
                black_box(star_glyphs(black_box(rating)));
            }
        });
    });

    group.bench_function("timer_poll(t=1024)", |b| {
        b.iter_batched(
            || {
                let mut timers = Timers::new();
                for i in 0..1024_u64 {
                    if i % 8 == 0 {
                        timers.schedule_every(Duration::from_millis(100 + i));
                    } else {
                        timers.schedule_in(Duration::from_millis(i));
                    }
                }
                timers
            },
            |mut timers| {
                let mut fired = Vec::new();
                timers.poll(Duration::from_millis(2048), &mut fired);
                black_box(fired);
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_carousel);
criterion_main!(benches);
