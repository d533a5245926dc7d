//! Cascade resolution benchmarks across board sizes

#![allow(missing_docs)]

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use jellyfield::engine::session::{ExpansionPolicy, GameSession, SessionConfig};
use rand::{SeedableRng, rngs::StdRng};
use std::hint::black_box;

const BENCH_SEED: u64 = 12345;

fn populated_session(size: usize) -> Option<GameSession> {
    let config = SessionConfig {
        min_match_size: 2,
        expansion: ExpansionPolicy::Seeded(BENCH_SEED),
    };
    let mut session = GameSession::new(size, size, config).ok()?;
    let mut rng = StdRng::seed_from_u64(BENCH_SEED);
    session.populate_random(&mut rng, 4).ok()?;
    Some(session)
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for size in [6_usize, 10, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || populated_session(size),
                |session| {
                    if let Some(mut session) = session {
                        let _ = black_box(session.resolve_existing());
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
