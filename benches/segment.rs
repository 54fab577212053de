// benches/segment.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pop_scrape::analyze::AreaAnalyzer;
use pop_scrape::ingest::Sample;
use pop_scrape::segment;

// 25 series restarting at the marker year, sampled yearly. A run a few
// times denser than the live page, so timings have headroom.
fn synthetic_run() -> Vec<Sample> {
    let mut out = Vec::new();
    for g in 0..25u64 {
        for (i, year) in (1950..=2022).enumerate() {
            out.push(Sample {
                year,
                population: 1_000_000 + g * 10_000 + i as u64 * 1_000,
            });
        }
    }
    out
}

fn bench_pipeline(c: &mut Criterion) {
    let samples = synthetic_run();

    c.bench_function("segment_25x73", |b| {
        b.iter(|| {
            let (region, continent) = segment::segment(black_box(&samples)).unwrap();
            black_box(region.len() + continent.len())
        })
    });

    c.bench_function("growth_sort_one_year", |b| {
        let (mut region, _) = segment::segment(&samples).unwrap();
        b.iter(|| {
            let rows = AreaAnalyzer::new(black_box(&mut region)).sort_by_growth_rate(2000);
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
