use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use richtext_core::{Paragraph, find_in_runs, replace_all};

/// Builds a paragraph whose text is split into runs at random boundaries.
fn fragmented_paragraph(sentence_count: usize, seed: u64) -> Paragraph {
    let mut text = String::with_capacity(sentence_count * 48);
    for i in 0..sentence_count {
        text.push_str(&format!(
            "sentence {i} of the quick brown fox benchmark corpus. "
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut paragraph = Paragraph::new();
    let mut rest = text.as_str();
    while !rest.is_empty() {
        let take = rng.gen_range(1..=24).min(rest.len());
        paragraph.add_run(&rest[..take]);
        rest = &rest[take..];
    }
    paragraph
}

fn bench_find_in_runs(c: &mut Criterion) {
    let paragraph = fragmented_paragraph(2_000, 7);
    c.bench_function("find_in_runs/2k_sentences", |b| {
        b.iter(|| {
            let matches = find_in_runs(black_box(&paragraph), "fox").unwrap();
            black_box(matches.len());
        })
    });
}

fn bench_replace_all(c: &mut Criterion) {
    c.bench_function("replace_all/2k_sentences", |b| {
        b.iter_batched(
            || fragmented_paragraph(2_000, 7),
            |mut paragraph| {
                let count = replace_all(&mut paragraph, "fox", "badger").unwrap();
                black_box(count);
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_aggregate_text(c: &mut Criterion) {
    let paragraph = fragmented_paragraph(2_000, 7);
    c.bench_function("aggregate_text/2k_sentences", |b| {
        b.iter(|| {
            black_box(paragraph.text().len());
        })
    });
}

criterion_group!(
    benches,
    bench_find_in_runs,
    bench_replace_all,
    bench_aggregate_text
);
criterion_main!(benches);
