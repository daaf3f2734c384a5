use browserprint::{FingerprintGenerator, FingerprintOptions, GenerateFingerprint};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn unconstrained_bench(c: &mut Criterion) {
    let generator = FingerprintGenerator::new();
    let options = FingerprintOptions::new();

    c.bench_function("generate_unconstrained", |b| {
        b.iter(|| {
            let profile = generator
                .generate(black_box(&options))
                .expect("bench generation");
            black_box(profile);
        });
    });
}

fn constrained_bench(c: &mut Criterion) {
    let generator = FingerprintGenerator::new();
    let options = FingerprintOptions::new()
        .with_locales(["en", "en-US"])
        .with_browsers(["chrome"])
        .with_devices(["desktop"]);

    c.bench_function("generate_chrome_desktop", |b| {
        b.iter(|| {
            let profile = generator
                .generate(black_box(&options))
                .expect("bench generation");
            black_box(profile);
        });
    });
}

fn serialize_bench(c: &mut Criterion) {
    let generator = FingerprintGenerator::with_seed(1);
    let profile = generator
        .generate(&FingerprintOptions::new())
        .expect("bench generation");

    c.bench_function("serialize_fingerprint_json", |b| {
        b.iter(|| {
            let json = serde_json::to_vec(black_box(&profile.fingerprint)).expect("serialize");
            black_box(json);
        });
    });
}

criterion_group!(benches, unconstrained_bench, constrained_bench, serialize_bench);
criterion_main!(benches);
