//! This bench measures a single draw over rosters of increasing size.

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};
use secret_friend::{Name, Roster, assign};

fn roster_of(size: usize) -> Roster {
    let mut roster = Roster::new();
    for i in 0..size {
        roster.add(&format!("Friend {i}")).unwrap();
    }
    roster
}

fn draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign");
    for size in [3, 10, 100, 1_000] {
        let roster = roster_of(size);
        let mut rng = StdRng::seed_from_u64(0);
        group.bench_with_input(BenchmarkId::from_parameter(size), roster.list(), |b, names| {
            b.iter(|| assign::<StdRng>(std::hint::black_box::<&[Name]>(names), &mut rng));
        });
    }
    group.finish();
}

criterion_group!(benches, draw);
criterion_main!(benches);
