use braillecorrect::{WordCollection, WordIndex};
use criterion::{Criterion, criterion_group, criterion_main};
use std::fs;
use std::hint::black_box;

fn load_words() -> WordCollection {
    // Use a real word list when one is present, otherwise a synthetic one.
    match WordCollection::load("words_100k.txt") {
        Ok(words) => words,
        Err(_) => synthetic_words(20_000),
    }
}

fn synthetic_words(count: usize) -> WordCollection {
    let letters: Vec<char> = ('A'..='Z').collect();
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    (0..count)
        .map(|_| {
            let len = 3 + (next() % 7) as usize;
            (0..len)
                .map(|_| letters[(next() % 26) as usize])
                .collect::<String>()
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let words = load_words();
    let queries: Vec<String> = match fs::read_to_string("benches/queries.txt") {
        Ok(text) => text.lines().map(|l| l.trim().to_uppercase()).collect(),
        Err(_) => ["HELO", "WROLD", "SPELING", "CAT", "BRAILE"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    };

    c.bench_function("build_index", |b| {
        b.iter(|| WordIndex::build(words.clone()))
    });

    let index = WordIndex::build(words);
    for max_distance in [1, 2] {
        c.bench_function(&format!("search_radius_{max_distance}"), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(index.search(black_box(q), max_distance));
                }
            })
        });
    }

    c.bench_function("suggest_many", |b| {
        b.iter(|| index.suggest_many(black_box(&queries), 2))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
