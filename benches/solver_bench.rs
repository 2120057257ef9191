//! Benchmarks for the frame solver

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use frame2d::prelude::*;

fn create_cantilever_model() -> Model {
    let mut model = Model::new();

    model.add_node(Node::fixed(1, 0.0, 0.0)).unwrap();
    model.add_node(Node::new(2, 10.0, 0.0)).unwrap();
    model.add_member(Member::new(1, 1, 2, 200e9, 0.3, 0.5)).unwrap();
    model.add_nodal_load(NodalLoad::fy(2, -10000.0)).unwrap();

    model
}

fn create_multi_story_frame(stories: usize, bays: usize) -> Model {
    let mut model = Model::new();

    let story_height = 3.5;
    let bay_width = 6.0;
    let e = 200e9;

    // Grid node ids are dense by construction: story-major, 1-based
    let node_id = |story: usize, bay: usize| story * (bays + 1) + bay + 1;

    for story in 0..=stories {
        for bay in 0..=bays {
            let x = bay as f64 * bay_width;
            let y = story as f64 * story_height;
            let node = if story == 0 {
                Node::fixed(node_id(story, bay), x, y)
            } else {
                Node::new(node_id(story, bay), x, y)
            };
            model.add_node(node).unwrap();
        }
    }

    let mut member_id = 0;

    // Columns
    for story in 0..stories {
        for bay in 0..=bays {
            member_id += 1;
            let member = Member::new(
                member_id,
                node_id(story, bay),
                node_id(story + 1, bay),
                e,
                0.4,
                0.4,
            );
            model.add_member(member).unwrap();
        }
    }

    // Beams
    for story in 1..=stories {
        for bay in 0..bays {
            member_id += 1;
            let member = Member::new(
                member_id,
                node_id(story, bay),
                node_id(story, bay + 1),
                e,
                0.3,
                0.6,
            );
            model.add_member(member).unwrap();
        }
    }

    // Wind pressure on the ground-story columns, anchored at the fixed base
    model
        .add_load_type(LoadType::distributed(1, 0.0, story_height, 2000.0, 0.0))
        .unwrap();
    for bay in 0..=bays {
        model.add_member_load(MemberLoad::new(bay + 1, 1)).unwrap();
    }

    // Gravity at every elevated joint
    for story in 1..=stories {
        for bay in 0..=bays {
            model
                .add_nodal_load(NodalLoad::fy(node_id(story, bay), -50000.0))
                .unwrap();
        }
    }

    model
}

fn benchmark_cantilever(c: &mut Criterion) {
    c.bench_function("cantilever_linear", |b| {
        b.iter(|| {
            let mut model = create_cantilever_model();
            let results = model.analyze().unwrap();
            black_box(&results);
        })
    });
}

fn benchmark_small_frame(c: &mut Criterion) {
    c.bench_function("frame_3story_2bay_linear", |b| {
        b.iter(|| {
            let mut model = create_multi_story_frame(3, 2);
            let results = model.analyze().unwrap();
            black_box(&results);
        })
    });
}

fn benchmark_medium_frame(c: &mut Criterion) {
    c.bench_function("frame_10story_5bay_linear", |b| {
        b.iter(|| {
            let mut model = create_multi_story_frame(10, 5);
            let results = model.analyze().unwrap();
            black_box(&results);
        })
    });
}

criterion_group!(
    benches,
    benchmark_cantilever,
    benchmark_small_frame,
    benchmark_medium_frame,
);

criterion_main!(benches);
