//! Index lookup vs. linear scan over a large table.
//!
//! Three levels are measured: the raw B+Tree point lookup, the table's
//! `find_by_key` (index hit plus its re-resolution against the row
//! list), and the plain linear scan an unindexed table would do.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use brinedb::{BPlusTree, Column, DataType, Row, Table, TableSchema, Value};

const ROWS: i32 = 100_000;

fn build_table() -> Table {
    let schema = TableSchema::new(
        "bench",
        vec![
            Column::new("id", DataType::Integer),
            Column::new("value", DataType::Text),
        ],
    );
    let mut table = Table::new(schema);
    for i in 0..ROWS {
        table
            .insert(Row::from([
                ("id".to_string(), Value::Integer(i)),
                ("value".to_string(), Value::Text(format!("row_{i}"))),
            ]))
            .unwrap();
    }
    table
}

fn lookup_benchmark(c: &mut Criterion) {
    let table = build_table();
    assert!(table.is_indexed());

    let mut tree = BPlusTree::new();
    for i in 0..ROWS {
        tree.insert(i, format!("row_{i}"));
    }

    let mut rng = StdRng::seed_from_u64(0xB71E);
    let mut group = c.benchmark_group("lookup");

    group.bench_function("btree_find", |b| {
        b.iter(|| {
            let key = rng.gen_range(0..ROWS);
            black_box(tree.find(black_box(&key)));
        })
    });

    group.bench_function("table_find_by_key", |b| {
        b.iter(|| {
            let key = Value::Integer(rng.gen_range(0..ROWS));
            black_box(table.find_by_key(black_box(&key)));
        })
    });

    group.bench_function("table_linear_scan", |b| {
        b.iter(|| {
            let key = Value::Integer(rng.gen_range(0..ROWS));
            let hit = table.rows().iter().find(|row| row.get("id") == Some(&key));
            black_box(hit);
        })
    });

    // Worst case for the scan: the most recently inserted key.
    let last = ROWS - 1;
    let last_value = Value::Integer(last);
    group.bench_function("btree_find_last_key", |b| {
        b.iter(|| black_box(tree.find(black_box(&last))))
    });
    group.bench_function("table_linear_scan_last_key", |b| {
        b.iter(|| {
            let hit = table
                .rows()
                .iter()
                .find(|row| row.get("id") == Some(&last_value));
            black_box(hit);
        })
    });

    group.finish();
}

criterion_group!(benches, lookup_benchmark);
criterion_main!(benches);
