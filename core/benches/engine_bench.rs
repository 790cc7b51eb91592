use criterion::{criterion_group, criterion_main, Criterion};
use dupdetect_core::tokenizer::tokenize;
use dupdetect_core::{Corpus, Document, EngineConfig, SimilarityEngine, Thresholds};

fn synthetic_source(seed: usize) -> String {
    (0..200)
        .map(|line| format!("let value_{} = compute_{}(input[{}]) + {};\n", line % 37, (line * seed) % 53, line, seed))
        .collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let text = synthetic_source(7);
    c.bench_function("tokenize_source", |b| b.iter(|| tokenize(&text)));
}

fn bench_report(c: &mut Criterion) {
    let docs = (0..200).map(|i| Document::new(format!("src/file_{i:03}.rs"), synthetic_source(i))).collect();
    let corpus = Corpus::new(docs).expect("corpus has enough documents");
    c.bench_function("report_200_docs", |b| {
        b.iter(|| SimilarityEngine::build(&corpus, &EngineConfig::default()).report(&Thresholds::default()))
    });
}

criterion_group!(benches, bench_tokenize, bench_report);
criterion_main!(benches);
