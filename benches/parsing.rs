use criterion::{Criterion, criterion_group, criterion_main};
use readart_core::config::ParseConfig;
use readart_core::parser::parse_log_str;
use std::hint::black_box;

fn create_log(lines: usize) -> String {
    let mut log = String::new();
    for i in 0..lines {
        let day = i % 28 + 1;
        let month = i / 28 % 12 + 1;
        log.push_str(&format!("{day}/{month} {}\n", i * 10 + 1));
    }
    log.push_str(&format!("{}\n", lines * 10 + 5));
    log
}

fn benchmark_log_parsing(c: &mut Criterion) {
    let config = ParseConfig::with_reference_year(2024);

    let mut group = c.benchmark_group("log_parsing");

    for lines in [10, 100, 300] {
        let log = create_log(lines);
        group.bench_function(format!("parse_{lines}_lines"), |b| {
            b.iter(|| parse_log_str(black_box(&log), "bench.txt", &config).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_log_parsing);
criterion_main!(benches);
