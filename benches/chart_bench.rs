//! Benchmarks for the sales chart
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use twh_dashboard::chart::{render_page, ChartOptions, ChartStyle, CurrencyFormat, DEFAULT_LIBRARY_URL};
use twh_dashboard::summary::SalesPoint;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn create_sales(count: usize) -> Vec<SalesPoint> {
    (0..count)
        .map(|i| {
            let month = format!("{} {}", MONTHS[i % 12], 2000 + i / 12);
            SalesPoint::new(month, (i as f64 + 1.0) * 1_250_000.0)
        })
        .collect()
}

fn bench_sales_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("sales_area");
    let style = ChartStyle::default();
    let currency = CurrencyFormat::rupiah();

    for size in [12, 120, 1200] {
        let sales = create_sales(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("build_{}", size), |b| {
            b.iter(|| ChartOptions::sales_area(black_box(&sales), &style, &currency))
        });

        let options = ChartOptions::sales_area(&sales, &style, &currency);

        group.bench_function(format!("page_{}", size), |b| {
            b.iter(|| render_page("twh_sales_chart", black_box(&options), DEFAULT_LIBRARY_URL).unwrap())
        });
    }

    group.finish();
}

fn bench_currency(c: &mut Criterion) {
    let mut group = c.benchmark_group("currency");
    let rupiah = CurrencyFormat::rupiah();

    group.bench_function("format_small", |b| b.iter(|| rupiah.format(black_box(1_500.0))));
    group.bench_function("format_large", |b| {
        b.iter(|| rupiah.format(black_box(98_765_432_109.0)))
    });
    group.bench_function("format_negative", |b| {
        b.iter(|| rupiah.format(black_box(-1_500_000.0)))
    });

    group.finish();
}

criterion_group!(benches, bench_sales_area, bench_currency);
criterion_main!(benches);
