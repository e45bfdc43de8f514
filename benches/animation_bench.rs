#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use folio::animation::{CurlInput, EasingFunction, PageCurlAnimator, PageIndexSequencer};
use folio::book::{PageContent, PageGeometry, PageSequence, PhotoBook};
use folio::options::{BookOptions, CurlOptions, Options, SequencerOptions};
use folio::skeleton::{compute_skin, deform, JointChain};
use glam::{Mat4, Vec3};
use web_time::{Duration, Instant};

const DT: f32 = 1.0 / 60.0;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::SineArch;
    c.bench_function("sine_arch_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn curl_update_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("curl_update");
    let opts = CurlOptions::default();

    for segments in [8, 30, 64] {
        let mut chain = JointChain::new(segments, 1.88 / segments as f32);
        let mut animator = PageCurlAnimator::new(false);
        let input = CurlInput {
            opened: true,
            page_number: 3,
            ..CurlInput::default()
        };
        let mut now = Instant::now();

        group.bench_with_input(
            BenchmarkId::from_parameter(segments),
            &segments,
            |b, _| {
                b.iter(|| {
                    now += Duration::from_millis(16);
                    black_box(animator.update(
                        Some(&mut chain),
                        &input,
                        &opts,
                        now,
                        DT,
                    ))
                });
            },
        );
    }
    group.finish();
}

fn sequencer_benchmark(c: &mut Criterion) {
    c.bench_function("sequencer_walk_100", |b| {
        b.iter(|| {
            let mut seq = PageIndexSequencer::new(100, SequencerOptions::default());
            let mut now = Instant::now();
            let _ = seq.set_target(100, now);
            while !seq.is_idle() {
                now += Duration::from_millis(200);
                let _ = seq.tick(now);
            }
            black_box(seq.current())
        });
    });
}

fn skinning_benchmark(c: &mut Criterion) {
    let geo = PageGeometry::new(&BookOptions::default());
    let mut chain = JointChain::new(30, 1.88 / 30.0);
    for (i, joint) in chain.joints_mut().iter_mut().enumerate() {
        joint.bend = 0.02 * i as f32;
    }
    let matrices = chain.skinning_matrices(Mat4::IDENTITY);

    c.bench_function("compute_skin", |b| {
        b.iter(|| black_box(compute_skin(&geo.positions, 1.88 / 30.0, 31)))
    });
    c.bench_function("cpu_deform_page", |b| {
        b.iter(|| {
            black_box(deform(&geo.positions, &geo.normals, &geo.skin, &matrices))
        })
    });
    c.bench_function("joint_positions", |b| {
        b.iter(|| black_box(chain.joint_positions(Mat4::from_translation(Vec3::Z))))
    });
}

fn book_frame_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("book_frame");

    for pages in [10usize, 50, 200] {
        let contents = (0..pages)
            .map(|i| PageContent::new(format!("f{i}"), format!("b{i}")))
            .collect();
        let Ok(sequence) = PageSequence::new(contents) else {
            continue;
        };
        let Ok(mut book) = PhotoBook::new(sequence, Options::default()) else {
            continue;
        };
        let mut now = Instant::now();
        book.set_target_page(pages as i64 / 2, now);

        group.bench_with_input(BenchmarkId::from_parameter(pages), &pages, |b, _| {
            b.iter(|| {
                now += Duration::from_millis(16);
                book.update(now, DT);
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    easing_benchmark,
    curl_update_benchmark,
    sequencer_benchmark,
    skinning_benchmark,
    book_frame_benchmark
);
criterion_main!(benches);
