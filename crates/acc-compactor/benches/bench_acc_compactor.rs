use acc_compactor::{adapter, compact, RangeCompactor};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn generate_accessions(count: usize) -> Vec<String> {
    let prefixes = ["ERR", "SRR", "DRR"];
    let mut accessions: Vec<String> = (0..count)
        .map(|i| {
            let prefix = prefixes[i % prefixes.len()];
            // Every fifth value is skipped so the scan sees both runs and gaps.
            let value = i + i / 4;
            format!("{prefix}{value:06}")
        })
        .collect();
    accessions.shuffle(&mut StdRng::seed_from_u64(1));
    accessions
}

fn bench_compact(c: &mut Criterion) {
    for &(name, count) in &[("1k", 1_000), ("10k", 10_000), ("100k", 100_000)] {
        let input = generate_accessions(count);
        c.bench_function(&format!("compact_{name}"), |b| {
            b.iter(|| black_box(compact(black_box(&input))))
        });
    }
}

fn bench_compact_and_render(c: &mut Criterion) {
    let input = generate_accessions(10_000);
    let compactor = RangeCompactor::new();
    c.bench_function("compact_render_10k", |b| {
        b.iter(|| {
            let result = compactor.compact(black_box(&input));
            black_box(adapter::render_text(&result.tokens, adapter::DEFAULT_SEPARATOR))
        })
    });
}

criterion_group!(benches, bench_compact, bench_compact_and_render);
criterion_main!(benches);
