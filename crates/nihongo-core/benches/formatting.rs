use criterion::{black_box, criterion_group, criterion_main, Criterion};

use nihongo_core::model::{Comment, Language, Translations, VerbGroup, VocabCollection, VocabEntry};
use nihongo_core::table::VocabTable;

fn generate_vocab(n: usize) -> VocabCollection {
    let entries = (0..n)
        .map(|i| VocabEntry {
            word: format!("言葉{i}"),
            reading: format!("ことば{i}"),
            romanized: format!("kotoba{i}"),
            translations: Translations {
                english: vec![format!("word {i}"), format!("term {i}")],
                german: vec![format!("Wort {i}")],
            },
            group: VerbGroup::Godan,
            comment: if i % 3 == 0 {
                Comment {
                    english: Some("note".into()),
                    german: Some("Notiz".into()),
                }
            } else {
                Comment::default()
            },
        })
        .collect();
    VocabCollection::new(entries).expect("generated vocabulary is valid")
}

fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("vocab_table");

    for n in [10, 100, 1000] {
        let vocab = generate_vocab(n);
        group.bench_function(format!("build+render/{n}"), |b| {
            b.iter(|| VocabTable::build(black_box(&vocab), Language::English).render())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_table);
criterion_main!(benches);
