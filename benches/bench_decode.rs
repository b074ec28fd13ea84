use braillecorrect::{decode, parse_chords};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_decode(c: &mut Criterion) {
    let line = "DK D WQKO DW DQ WQK WQKO DWO DKO DQK DQ DQO DWQ";

    c.bench_function("parse_and_decode", |b| {
        b.iter(|| {
            let chords = parse_chords(black_box(line));
            decode(&chords)
        })
    });

    let chords = parse_chords(line);
    c.bench_function("decode", |b| {
        b.iter(|| decode(black_box(&chords)))
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
