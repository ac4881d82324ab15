use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tally::evaluate;

fn bench_flat_chain(c: &mut Criterion) {
    let source = (0..200).map(|_| "3").collect::<Vec<_>>().join(" + ");
    c.bench_function("flat_addition_chain_200", |b| {
        b.iter(|| evaluate(black_box(&source)))
    });
}

fn bench_mixed_tiers(c: &mut Criterion) {
    let source = "4 + (5 + 2! - 3!) + ((5 * 3) @ 13) * 2 ^ 3 - 7 % 4";
    c.bench_function("mixed_tiers", |b| b.iter(|| evaluate(black_box(source))));
}

fn bench_nested_groups(c: &mut Criterion) {
    let source = format!("{}1 + 2{}", "(".repeat(64), ")".repeat(64));
    c.bench_function("nested_groups_64", |b| {
        b.iter(|| evaluate(black_box(&source)))
    });
}

criterion_group!(
    benches,
    bench_flat_chain,
    bench_mixed_tiers,
    bench_nested_groups
);
criterion_main!(benches);
