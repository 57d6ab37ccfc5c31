//! Order book demonstration
//!
//! Builds a small book, crosses the spread, sends a market order, cancels
//! an order, bulk-loads ten thousand orders, and prints the metrics
//! summary.

use std::sync::Arc;

use matching_engine::{EngineMetrics, MatchingEngine};
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Side;
use types::trade::Trade;

fn print_book_state(engine: &MatchingEngine) {
    println!("--- Order Book State ---");
    match engine.best_bid() {
        Some(bid) => println!("Best Bid: ${:.2}", bid.as_i64() as f64 / 100.0),
        None => println!("Best Bid: -"),
    }
    match engine.best_ask() {
        Some(ask) => println!("Best Ask: ${:.2}", ask.as_i64() as f64 / 100.0),
        None => println!("Best Ask: -"),
    }
    if let Some(spread) = engine.spread() {
        println!("Spread: ${:.2}", spread.as_i64() as f64 / 100.0);
    }
    println!("Bid Depth: {} levels", engine.bid_depth());
    println!("Ask Depth: {} levels", engine.ask_depth());
    println!("Total Orders: {}\n", engine.total_live_orders());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Order Book Demo ===\n");

    let mut engine = MatchingEngine::new();

    let metrics = Arc::new(EngineMetrics::new());
    engine.set_metrics_sink(metrics.clone());

    engine.set_trade_callback(|trade: &Trade| {
        println!(
            "TRADE: buy #{} / sell #{}  {} @ ${:.2}",
            trade.buy_order_id,
            trade.sell_order_id,
            trade.quantity,
            trade.price.as_i64() as f64 / 100.0,
        );
    });

    println!("=== Scenario 1: Building the book ===");
    engine
        .add_limit(OrderId::new(1), Side::Buy, Price::new(10000), Quantity::new(100))
        .unwrap();
    engine
        .add_limit(OrderId::new(2), Side::Buy, Price::new(9950), Quantity::new(150))
        .unwrap();
    engine
        .add_limit(OrderId::new(3), Side::Buy, Price::new(9900), Quantity::new(200))
        .unwrap();
    engine
        .add_limit(OrderId::new(4), Side::Sell, Price::new(10050), Quantity::new(100))
        .unwrap();
    engine
        .add_limit(OrderId::new(5), Side::Sell, Price::new(10100), Quantity::new(150))
        .unwrap();
    engine
        .add_limit(OrderId::new(6), Side::Sell, Price::new(10150), Quantity::new(200))
        .unwrap();
    print_book_state(&engine);

    println!("=== Scenario 2: Aggressive buy crosses the spread ===");
    let accepted = engine
        .add_limit(OrderId::new(7), Side::Buy, Price::new(10100), Quantity::new(250))
        .unwrap();
    println!(
        "filled {} of 250, resting: {}\n",
        accepted.filled, accepted.resting
    );
    print_book_state(&engine);

    println!("=== Scenario 3: Market sell ===");
    let filled = engine
        .add_market(OrderId::new(8), Side::Sell, Quantity::new(50))
        .unwrap();
    println!("market order filled: {} shares\n", filled);
    print_book_state(&engine);

    println!("=== Scenario 4: Cancellation ===");
    if engine.cancel(OrderId::new(3)) {
        println!("order 3 cancelled\n");
    }
    print_book_state(&engine);

    println!("=== Scenario 5: Bulk load ===");
    for i in 100u64..10100 {
        if i % 2 == 0 {
            engine
                .add_limit(
                    OrderId::new(i),
                    Side::Buy,
                    Price::new(9500 + (i % 500) as i64),
                    Quantity::new(10),
                )
                .unwrap();
        } else {
            engine
                .add_limit(
                    OrderId::new(i),
                    Side::Sell,
                    Price::new(10500 + (i % 500) as i64),
                    Quantity::new(10),
                )
                .unwrap();
        }
    }
    print_book_state(&engine);

    println!("{}", metrics.summary());

    if let Some(avg_ns) = metrics.avg_add_latency() {
        if avg_ns > 0 {
            println!(
                "Estimated Throughput: {:.0} operations/second",
                1e9 / avg_ns as f64
            );
        }
    }

    println!("\n=== Demo Complete ===");
}
