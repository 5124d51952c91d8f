//! 过滤器引擎性能基准测试
//!
//! 测试覆盖：
//! - 各操作符单条求值性能
//! - 值归一化（cast）性能
//! - 发现与合并（load）在不同配置规模下的性能曲线

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use filter_engine::{Filter, FilterConfig, FilterRegistry, FilterValue, Operator};
use serde_json::{json, Value};
use std::hint::black_box;

/// 创建一条已绑定的过滤器
fn bound_filter(field: &str, key: &str, limit: Value) -> Filter {
    let mut filter = Filter::new(field, "bench filter");
    filter.from_obj(key, &limit).unwrap();
    filter
}

/// 创建示例记录
fn sample_record() -> Value {
    json!({
        "score": 42,
        "title": "A Fairly Ordinary Test Title",
        "subreddit": "Funny",
        "created_utc": 1700000000_i64,
        "num_comments": 17,
        "over_18": false
    })
}

/// 各操作符求值基准
fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");
    let record = sample_record();

    let cases = [
        ("equals", bound_filter("subreddit", "subreddit.equals", json!("funny"))),
        ("min", bound_filter("score", "score.min", json!(10))),
        ("max", bound_filter("num_comments", "num_comments.max", json!(100))),
        ("match", bound_filter("title", "title.match", json!("test"))),
    ];

    for (name, filter) in cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                let result = filter.check(black_box(&record));
                black_box(result)
            })
        });
    }

    group.finish();
}

/// 值归一化基准
fn bench_cast(c: &mut Criterion) {
    let mut group = c.benchmark_group("cast");

    let inputs = [
        ("integer", json!(42)),
        ("float", json!(3.9)),
        ("numeric_string", json!("1700000000")),
        ("text", json!("not a number at all")),
    ];

    for (name, input) in inputs {
        group.bench_function(name, |b| {
            b.iter(|| {
                let value = FilterValue::cast(black_box(&input));
                black_box(value)
            })
        });
    }

    group.finish();
}

/// 发现与合并基准（不同配置项数量）
fn bench_discovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("discovery");

    for entry_count in [1usize, 5, 10, 20] {
        let registry = FilterRegistry::with_builtins();
        let config: FilterConfig = Operator::ALL
            .iter()
            .cycle()
            .zip(["score", "title", "created_utc", "num_comments", "author"].iter().cycle())
            .take(entry_count)
            .enumerate()
            .map(|(i, (op, field))| {
                let key = format!("{}{}", field, op.token());
                let value = if *op == Operator::Match {
                    json!(format!("pattern_{}", i))
                } else {
                    json!(i as i64)
                };
                (key, value)
            })
            .collect();

        group.throughput(Throughput::Elements(entry_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(entry_count),
            &config,
            |b, config| {
                b.iter(|| {
                    let filters = registry.load(black_box(config));
                    black_box(filters)
                })
            },
        );
    }

    group.finish();
}

/// 自省模式基准
fn bench_available(c: &mut Criterion) {
    let registry = FilterRegistry::with_builtins();

    c.bench_function("available", |b| {
        b.iter(|| {
            let listed = registry.available();
            black_box(listed)
        })
    });
}

criterion_group!(
    benches,
    bench_operators,
    bench_cast,
    bench_discovery,
    bench_available,
);

criterion_main!(benches);
