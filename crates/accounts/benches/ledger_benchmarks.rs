use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use finledger_accounts::{balance, entries_on, LedgerEntry};
use finledger_core::Amount;

/// Alternating credits and debits spread over consecutive days.
fn build_statement(len: usize) -> Vec<LedgerEntry> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    (0..len)
        .map(|i| {
            let at = start + Duration::hours(i as i64);
            if i % 2 == 0 {
                LedgerEntry::credit(None, Amount::from(100), at)
            } else {
                LedgerEntry::debit(Amount::from(40), at)
            }
        })
        .collect()
}

fn bench_balance(c: &mut Criterion) {
    let mut group = c.benchmark_group("balance");
    for len in [10usize, 1_000, 100_000] {
        let statement = build_statement(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &statement, |b, s| {
            b.iter(|| balance(black_box(s)))
        });
    }
    group.finish();
}

fn bench_entries_on(c: &mut Criterion) {
    let mut group = c.benchmark_group("entries_on");
    let day = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    for len in [10usize, 1_000, 100_000] {
        let statement = build_statement(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &statement, |b, s| {
            b.iter(|| entries_on(black_box(s), black_box(day)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_balance, bench_entries_on);
criterion_main!(benches);
