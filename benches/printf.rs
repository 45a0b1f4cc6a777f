use criterion::{Criterion, criterion_group, criterion_main};
use nslog::Arg;
use nslog::fmt::sprintf;
use std::hint::black_box;

fn bench_sprintf(c: &mut Criterion) {
    let args = [
        Arg::from("GET"),
        Arg::from("/api/v1/items"),
        Arg::from(200),
        Arg::from(12.5),
    ];

    c.bench_function("sprintf mixed verbs", |b| {
        b.iter(|| sprintf(black_box("%s %s -> %d in %.1fms"), black_box(&args)));
    });

    c.bench_function("sprintf plain text", |b| {
        b.iter(|| sprintf(black_box("no placeholders at all in this message"), &[]));
    });
}

criterion_group!(benches, bench_sprintf);
criterion_main!(benches);
