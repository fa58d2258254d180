// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use zoetrope_scene::{Element, NodeId, Scene};

/// Builds a tree of `groups` branches with `leaves` children each, the shape
/// a widget full render produces.
fn build_tree(groups: usize, leaves: usize) -> (Scene, NodeId) {
    let mut scene = Scene::new();
    let root = scene.insert(None, Element::new("div").with_class("root"));
    for g in 0..groups {
        let branch = scene.insert(
            Some(root),
            Element::new("div").with_class("branch").with_attr("data-index", g.to_string()),
        );
        for l in 0..leaves {
            scene.insert(
                Some(branch),
                Element::new("span")
                    .with_class("leaf")
                    .with_text(format!("{g}:{l}")),
            );
        }
    }
    (scene, root)
}

fn bench_scene_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoetrope_scene");

    for &(groups, leaves) in &[(16_usize, 16_usize), (64, 64)] {
        let n = groups * leaves + groups + 1;

        group.bench_function(format!("build_and_commit(n={n})"), |b| {
            b.iter(|| {
                let (mut scene, root) = build_tree(groups, leaves);
                black_box(scene.commit());
                black_box(root);
            });
        });

        group.bench_function(format!("class_churn_commit(n={n})"), |b| {
            b.iter_batched(
                || {
                    let (mut scene, root) = build_tree(groups, leaves);
                    let _ = scene.commit();
                    let leaves = scene.find_all_by_class(root, "leaf");
                    (scene, leaves)
                },
                |(mut scene, leaves)| {
                    for (i, leaf) in leaves.iter().enumerate() {
                        scene.set_class_enabled(*leaf, "active", i % 2 == 0);
                    }
                    black_box(scene.commit());
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("find_all_by_class(n={n})"), |b| {
            b.iter_batched(
                || build_tree(groups, leaves),
                |(scene, root)| {
                    black_box(scene.find_all_by_class(root, "leaf"));
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("remove_subtree(n={n})"), |b| {
            b.iter_batched(
                || build_tree(groups, leaves),
                |(mut scene, root)| {
                    scene.remove(root);
                    black_box(scene.commit());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scene_tree);
criterion_main!(benches);
