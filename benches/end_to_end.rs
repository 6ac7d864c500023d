use clap::Parser;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use text_metrics::args::Args;
use text_metrics_domain::compute_metrics;

fn sample_text() -> String {
    let paragraph = "Reading is a wonderful habit. It makes the mind sharp, and it is fun! \
                     Some days are terrible, but a good book helps.\n\n";
    paragraph.repeat(500)
}

fn benchmark_compute_metrics(c: &mut Criterion) {
    let text = sample_text();
    c.bench_function("compute_metrics_large", |b| {
        b.iter(|| black_box(compute_metrics(black_box(&text))));
    });
}

fn benchmark_cli_parsing(c: &mut Criterion) {
    c.bench_function("parse_args_simple", |b| {
        b.iter(|| {
            let args = Args::try_parse_from(black_box(["text_metrics", "-f", "json", "notes.txt"])).unwrap();
            black_box(args);
        })
    });
}

criterion_group!(benches, benchmark_compute_metrics, benchmark_cli_parsing);
criterion_main!(benches);
