use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sha256_hex_short_bench(c: &mut Criterion) {
    let input = "Sommer2026";

    c.bench_function("sha256_hex_10B", |b| {
        b.iter(|| fairdraw_crypto::sha256_hex(black_box(input)))
    });
}

fn sha256_hex_digest_sized_bench(c: &mut Criterion) {
    // A 64-char hex string plus separator and index — the derivation-stage
    // input shape.
    let input = format!("{}-{}", "ab".repeat(32), 7);

    c.bench_function("sha256_hex_66B", |b| {
        b.iter(|| fairdraw_crypto::sha256_hex(black_box(&input)))
    });
}

fn sha256_hex_1kb_bench(c: &mut Criterion) {
    let input = "e".repeat(1024);

    c.bench_function("sha256_hex_1KB", |b| {
        b.iter(|| fairdraw_crypto::sha256_hex(black_box(&input)))
    });
}

fn sha256_multi_bench(c: &mut Criterion) {
    let parts = [
        "02, 18, 24, 33, 41, 45",
        "11, 23, 35, 56, 62, 88",
        "07, 14, 22, 31, 44, 49",
        "01.01.2026",
    ];

    c.bench_function("sha256_hex_multi_4parts", |b| {
        b.iter(|| fairdraw_crypto::sha256_hex_multi(black_box(&parts)))
    });
}

criterion_group!(
    benches,
    sha256_hex_short_bench,
    sha256_hex_digest_sized_bench,
    sha256_hex_1kb_bench,
    sha256_multi_bench,
);
criterion_main!(benches);
