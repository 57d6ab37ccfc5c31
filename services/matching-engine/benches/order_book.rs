use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matching_engine::MatchingEngine;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Side;

fn bench_order_submission(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_submission");

    for &num_orders in [100u64, 1000, 10000].iter() {
        group.bench_with_input(
            BenchmarkId::new("non_crossing_orders", num_orders),
            &num_orders,
            |b, &num_orders| {
                b.iter(|| {
                    let mut engine = MatchingEngine::with_capacity(num_orders as usize);
                    for i in 0..num_orders {
                        let (side, price) = if i % 2 == 0 {
                            (Side::Buy, 10000 - i as i64)
                        } else {
                            (Side::Sell, 10100 + i as i64)
                        };
                        black_box(
                            engine
                                .add_limit(
                                    OrderId::new(i),
                                    side,
                                    Price::new(price),
                                    Quantity::new(100),
                                )
                                .unwrap(),
                        );
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_order_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_matching");

    for &depth in [10u64, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("crossing_orders", depth),
            &depth,
            |b, &depth| {
                b.iter_batched(
                    || {
                        let mut engine = MatchingEngine::with_capacity(2 * depth as usize);
                        for i in 0..depth {
                            engine
                                .add_limit(
                                    OrderId::new(i),
                                    Side::Sell,
                                    Price::new(10000 + i as i64),
                                    Quantity::new(100),
                                )
                                .unwrap();
                            engine
                                .add_limit(
                                    OrderId::new(i + depth),
                                    Side::Buy,
                                    Price::new(9999 - i as i64),
                                    Quantity::new(100),
                                )
                                .unwrap();
                        }
                        engine
                    },
                    |mut engine| {
                        // One large order sweeping half the ask side
                        black_box(
                            engine
                                .add_limit(
                                    OrderId::new(depth * 2),
                                    Side::Buy,
                                    Price::new(10000 + depth as i64),
                                    Quantity::new(depth * 50),
                                )
                                .unwrap(),
                        )
                    },
                    criterion::BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

fn bench_order_cancellation(c: &mut Criterion) {
    let mut group = c.benchmark_group("cancellation");

    for &num_orders in [100u64, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("cancel_resting", num_orders),
            &num_orders,
            |b, &num_orders| {
                b.iter_batched(
                    || {
                        let mut engine = MatchingEngine::with_capacity(num_orders as usize);
                        for i in 0..num_orders {
                            engine
                                .add_limit(
                                    OrderId::new(i),
                                    Side::Buy,
                                    Price::new(10000),
                                    Quantity::new(100),
                                )
                                .unwrap();
                        }
                        engine
                    },
                    |mut engine| {
                        // Cancel every other order, including mid-queue members
                        for i in (0..num_orders).step_by(2) {
                            black_box(engine.cancel(OrderId::new(i)));
                        }
                    },
                    criterion::BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

fn bench_market_data_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("market_data");

    let mut engine = MatchingEngine::with_capacity(2000);
    for i in 0..1000u64 {
        engine
            .add_limit(
                OrderId::new(i),
                Side::Sell,
                Price::new(10000 + i as i64),
                Quantity::new(100),
            )
            .unwrap();
        engine
            .add_limit(
                OrderId::new(i + 1000),
                Side::Buy,
                Price::new(9999 - i as i64),
                Quantity::new(100),
            )
            .unwrap();
    }

    group.bench_function("best_bid", |b| b.iter(|| black_box(engine.best_bid())));
    group.bench_function("best_ask", |b| b.iter(|| black_box(engine.best_ask())));
    group.bench_function("spread", |b| b.iter(|| black_box(engine.spread())));
    group.bench_function("bid_volume", |b| {
        b.iter(|| black_box(engine.bid_volume(Price::new(9500))))
    });

    group.finish();
}

fn bench_high_frequency_scenario(c: &mut Criterion) {
    let mut group = c.benchmark_group("hft_scenario");

    group.bench_function("rapid_order_flow", |b| {
        b.iter(|| {
            let mut engine = MatchingEngine::with_capacity(2048);
            let mut next_id = 1u64;

            for _ in 0..100 {
                for i in 0..5 {
                    engine
                        .add_limit(
                            OrderId::new(next_id),
                            Side::Sell,
                            Price::new(10000 + i),
                            Quantity::new(100),
                        )
                        .unwrap();
                    next_id += 1;
                    engine
                        .add_limit(
                            OrderId::new(next_id),
                            Side::Buy,
                            Price::new(9999 - i),
                            Quantity::new(100),
                        )
                        .unwrap();
                    next_id += 1;
                }

                engine
                    .add_limit(
                        OrderId::new(next_id),
                        Side::Buy,
                        Price::new(10002),
                        Quantity::new(300),
                    )
                    .unwrap();
                next_id += 1;

                black_box(engine.best_bid());
                black_box(engine.best_ask());
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_order_submission,
    bench_order_matching,
    bench_order_cancellation,
    bench_market_data_access,
    bench_high_frequency_scenario
);

criterion_main!(benches);
