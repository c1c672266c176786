// ABOUTME: Benchmark suite for the pure hot paths of the send pipeline
// ABOUTME: Measures alphabet validation, message splitting and UDH rendering

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ipx_sms::{encoding, segment, UserDataHeader};

fn sample_message(length: usize) -> String {
    ('a'..='z').cycle().take(length).collect()
}

fn bench_validate_alphabet(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_alphabet");
    for length in [160, 480, 765] {
        let message = sample_message(length);
        group.bench_with_input(BenchmarkId::from_parameter(length), &message, |b, message| {
            b.iter(|| encoding::validate_alphabet(black_box(message)));
        });
    }
    group.finish();
}

fn bench_split_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_message");
    for length in [100, 320, 765] {
        let message = sample_message(length);
        group.bench_with_input(BenchmarkId::from_parameter(length), &message, |b, message| {
            b.iter(|| segment::split_message(black_box(message)));
        });
    }
    group.finish();
}

fn bench_udh_rendering(c: &mut Criterion) {
    let udh = UserDataHeader::new(0xAB, 5).with_sequence(3);
    c.bench_function("udh_to_hex", |b| {
        b.iter(|| black_box(udh).to_hex());
    });
}

criterion_group!(
    benches,
    bench_validate_alphabet,
    bench_split_message,
    bench_udh_rendering
);
criterion_main!(benches);
