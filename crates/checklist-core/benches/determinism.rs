use checklist_core::{hash, reshape_str};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn walkthrough_doc(categories: usize, events: usize) -> String {
    let categories: Vec<serde_json::Value> = (0..categories)
        .map(|c| {
            let events: Vec<serde_json::Value> = (0..events)
                .map(|e| serde_json::json!({ "text": format!("Step {} of chapter {}", e, c) }))
                .collect();
            serde_json::json!({ "name": format!("Chapter {}", c), "events": events })
        })
        .collect();
    serde_json::Value::Array(categories).to_string()
}

fn bench_hash(c: &mut Criterion) {
    c.bench_function("hash_short_text", |b| {
        b.iter(|| hash(black_box("Talk to the blacksmith")))
    });
}

fn bench_reshape(c: &mut Criterion) {
    let doc = walkthrough_doc(20, 50);
    c.bench_function("reshape_walkthrough_20x50", |b| {
        b.iter(|| reshape_str(black_box(&doc), "Walkthrough"))
    });
}

criterion_group!(benches, bench_hash, bench_reshape);
criterion_main!(benches);
