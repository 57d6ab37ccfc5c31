//! Matching engine core
//!
//! Single-symbol order book with price-time priority matching. One caller
//! thread invokes one operation at a time; the trade callback runs inline
//! on that thread and must not reenter the engine.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace};

use types::errors::OrderError;
use types::ids::OrderId;
use types::numeric::{Nanos, Price, Quantity};
use types::order::{Order, Side};
use types::trade::Trade;

use crate::book::{AskBook, BidBook, OrderArena, OrderHandle, PriceLevel};
use crate::matching::{crosses, make_trade};
use crate::metrics::MetricsSink;

/// Callback invoked synchronously for each executed trade
pub type TradeCallback = Box<dyn FnMut(&Trade)>;

/// Result of submitting a limit order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accepted {
    /// True when an unfilled remainder was installed in the book
    pub resting: bool,
    /// Quantity executed during submission
    pub filled: Quantity,
}

/// Totals for one matching phase
#[derive(Default)]
struct MatchStats {
    trades: u64,
    volume: Quantity,
}

/// Single-symbol limit order book with price-time priority matching
///
/// Not thread-safe; a multi-threaded deployment must wrap the book in an
/// external mutex or shard by symbol.
pub struct MatchingEngine {
    /// Buy-side ladder, highest price first
    bids: BidBook,
    /// Sell-side ladder, lowest price first
    asks: AskBook,
    /// Authoritative owner of every resting order, with id lookup
    arena: OrderArena,
    trade_callback: Option<TradeCallback>,
    metrics: Option<Arc<dyn MetricsSink>>,
    /// Base for monotonic timestamps
    epoch: Instant,
}

impl MatchingEngine {
    /// Create an empty book
    pub fn new() -> Self {
        Self {
            bids: BidBook::new(),
            asks: AskBook::new(),
            arena: OrderArena::new(),
            trade_callback: None,
            metrics: None,
            epoch: Instant::now(),
        }
    }

    /// Create an empty book with preallocated order storage
    pub fn with_capacity(orders: usize) -> Self {
        Self {
            arena: OrderArena::with_capacity(orders),
            ..Self::new()
        }
    }

    /// Install or replace the trade callback
    pub fn set_trade_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&Trade) + 'static,
    {
        self.trade_callback = Some(Box::new(callback));
    }

    /// Remove the trade callback; trades still execute, just unreported
    pub fn clear_trade_callback(&mut self) {
        self.trade_callback = None;
    }

    /// Install or replace the metrics sink
    pub fn set_metrics_sink(&mut self, sink: Arc<dyn MetricsSink>) {
        self.metrics = Some(sink);
    }

    /// Submit a limit order
    ///
    /// Matches against the opposite ladder first; any unfilled remainder
    /// rests at `price`. Rejections commit no state and emit no trades.
    pub fn add_limit(
        &mut self,
        id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Result<Accepted, OrderError> {
        let started = Instant::now();

        if quantity.is_zero() {
            debug!(%id, "limit order rejected: zero quantity");
            return Err(OrderError::InvalidQuantity);
        }
        if !price.is_valid_limit() {
            debug!(%id, %price, "limit order rejected: non-positive price");
            return Err(OrderError::InvalidPrice {
                price: price.as_i64(),
            });
        }
        if self.arena.contains(id) {
            debug!(%id, "limit order rejected: duplicate id");
            return Err(OrderError::DuplicateOrderId { id });
        }

        let mut taker = Order::limit(id, side, price, quantity, self.monotonic_ns());
        self.match_taker(&mut taker);

        let filled = taker.filled_quantity();
        let resting = !taker.is_filled();

        if resting {
            let handle = self.arena.insert(taker);
            let level = match side {
                Side::Buy => self.bids.level_mut(price),
                Side::Sell => self.asks.level_mut(price),
            };
            level.append(handle, &mut self.arena);
        }

        self.record_add(started);
        trace!(%id, ?side, %price, %filled, resting, "limit order accepted");
        Ok(Accepted { resting, filled })
    }

    /// Submit a market order, returning the filled quantity
    ///
    /// Crosses at any price. Market orders never rest: if the opposite
    /// ladder is exhausted, the remainder is silently discarded.
    pub fn add_market(
        &mut self,
        id: OrderId,
        side: Side,
        quantity: Quantity,
    ) -> Result<Quantity, OrderError> {
        let started = Instant::now();

        if quantity.is_zero() {
            debug!(%id, "market order rejected: zero quantity");
            return Err(OrderError::InvalidQuantity);
        }
        if self.arena.contains(id) {
            debug!(%id, "market order rejected: duplicate id");
            return Err(OrderError::DuplicateOrderId { id });
        }

        let mut taker = Order::market(id, side, quantity, self.monotonic_ns());
        self.match_taker(&mut taker);

        let filled = taker.filled_quantity();
        self.record_add(started);
        trace!(%id, ?side, %filled, "market order done");
        Ok(filled)
    }

    /// Cancel a resting order's remainder
    ///
    /// Returns false when the id is not live (never an error).
    pub fn cancel(&mut self, id: OrderId) -> bool {
        let started = Instant::now();

        let Some(handle) = self.arena.lookup(id) else {
            debug!(%id, "cancel ignored: unknown order");
            return false;
        };

        let (side, price) = {
            let order = self.arena.order(handle);
            (order.side, order.price)
        };

        let level = match side {
            Side::Buy => self.bids.get_level_mut(price),
            Side::Sell => self.asks.get_level_mut(price),
        };
        if let Some(level) = level {
            level.unlink(handle, &mut self.arena);
            if level.is_empty() {
                match side {
                    Side::Buy => self.bids.remove_level(price),
                    Side::Sell => self.asks.remove_level(price),
                }
            }
        }
        self.arena.remove(handle);

        if let Some(metrics) = &self.metrics {
            metrics.record_cancel(started.elapsed().as_nanos() as u64);
        }
        debug!(%id, ?side, %price, "order cancelled");
        true
    }

    /// Best bid price (highest live buy)
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    /// Best ask price (lowest live sell)
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_price()
    }

    /// Spread (ask - bid) when both sides exist
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Resting volume at a bid price (zero if no such level)
    pub fn bid_volume(&self, price: Price) -> Quantity {
        self.bids.volume_at(price)
    }

    /// Resting volume at an ask price (zero if no such level)
    pub fn ask_volume(&self, price: Price) -> Quantity {
        self.asks.volume_at(price)
    }

    /// Number of distinct bid price levels
    pub fn bid_depth(&self) -> usize {
        self.bids.depth()
    }

    /// Number of distinct ask price levels
    pub fn ask_depth(&self) -> usize {
        self.asks.depth()
    }

    /// Top N bid levels as (price, volume), best first
    pub fn bid_depth_snapshot(&self, depth: usize) -> Vec<(Price, Quantity)> {
        self.bids.depth_snapshot(depth)
    }

    /// Top N ask levels as (price, volume), best first
    pub fn ask_depth_snapshot(&self, depth: usize) -> Vec<(Price, Quantity)> {
        self.asks.depth_snapshot(depth)
    }

    /// Number of live orders across both sides
    pub fn total_live_orders(&self) -> usize {
        self.arena.len()
    }

    /// Match a taker against the opposite ladder, reporting stats
    fn match_taker(&mut self, taker: &mut Order) {
        let match_started = Instant::now();

        // Split borrows: ladder, arena, and callback are disjoint fields
        let stats = match taker.side {
            Side::Buy => Self::match_against_asks(
                &mut self.asks,
                &mut self.arena,
                &mut self.trade_callback,
                &self.epoch,
                taker,
            ),
            Side::Sell => Self::match_against_bids(
                &mut self.bids,
                &mut self.arena,
                &mut self.trade_callback,
                &self.epoch,
                taker,
            ),
        };

        if stats.trades > 0 {
            if let Some(metrics) = &self.metrics {
                metrics.record_match(
                    match_started.elapsed().as_nanos() as u64,
                    stats.trades,
                    stats.volume.as_u64(),
                );
            }
        }
    }

    /// Match an incoming buy against the ask ladder
    fn match_against_asks(
        asks: &mut AskBook,
        arena: &mut OrderArena,
        callback: &mut Option<TradeCallback>,
        epoch: &Instant,
        taker: &mut Order,
    ) -> MatchStats {
        let mut stats = MatchStats::default();

        while !taker.is_filled() {
            let Some((level_price, level)) = asks.best_level_mut() else {
                break;
            };
            if !crosses(taker.kind, taker.side, taker.price, level_price) {
                break;
            }

            while !taker.is_filled() {
                let Some(maker_handle) = level.front() else {
                    break;
                };
                Self::fill_against_maker(
                    level,
                    arena,
                    callback,
                    epoch,
                    taker,
                    maker_handle,
                    level_price,
                    &mut stats,
                );
            }

            if level.is_empty() {
                asks.remove_level(level_price);
            }
        }

        stats
    }

    /// Match an incoming sell against the bid ladder
    fn match_against_bids(
        bids: &mut BidBook,
        arena: &mut OrderArena,
        callback: &mut Option<TradeCallback>,
        epoch: &Instant,
        taker: &mut Order,
    ) -> MatchStats {
        let mut stats = MatchStats::default();

        while !taker.is_filled() {
            let Some((level_price, level)) = bids.best_level_mut() else {
                break;
            };
            if !crosses(taker.kind, taker.side, taker.price, level_price) {
                break;
            }

            while !taker.is_filled() {
                let Some(maker_handle) = level.front() else {
                    break;
                };
                Self::fill_against_maker(
                    level,
                    arena,
                    callback,
                    epoch,
                    taker,
                    maker_handle,
                    level_price,
                    &mut stats,
                );
            }

            if level.is_empty() {
                bids.remove_level(level_price);
            }
        }

        stats
    }

    /// Execute one fill between the taker and the level's front order
    #[allow(clippy::too_many_arguments)]
    fn fill_against_maker(
        level: &mut PriceLevel,
        arena: &mut OrderArena,
        callback: &mut Option<TradeCallback>,
        epoch: &Instant,
        taker: &mut Order,
        maker_handle: OrderHandle,
        level_price: Price,
        stats: &mut MatchStats,
    ) {
        let (maker_id, maker_remaining) = {
            let maker = arena.order(maker_handle);
            (maker.id, maker.remaining_quantity)
        };

        let trade_qty = taker.remaining_quantity.min(maker_remaining);

        // Trade at the maker's price; emission order is execution order
        let trade = make_trade(
            taker.side,
            taker.id,
            maker_id,
            level_price,
            trade_qty,
            epoch.elapsed().as_nanos() as u64,
        );
        if let Some(cb) = callback.as_mut() {
            cb(&trade);
        }
        trace!(
            buy = %trade.buy_order_id,
            sell = %trade.sell_order_id,
            price = %trade.price,
            quantity = %trade.quantity,
            "trade executed"
        );

        taker.fill(trade_qty);
        let maker = arena.order_mut(maker_handle);
        maker.fill(trade_qty);
        let maker_filled = maker.is_filled();
        level.reduce_volume(trade_qty);

        // Unlink subtracts the remaining quantity, already zero here
        if maker_filled {
            level.unlink(maker_handle, arena);
            arena.remove(maker_handle);
        }

        stats.trades += 1;
        stats.volume += trade_qty;
    }

    fn record_add(&self, started: Instant) {
        if let Some(metrics) = &self.metrics {
            metrics.record_add(started.elapsed().as_nanos() as u64);
        }
    }

    fn monotonic_ns(&self) -> Nanos {
        self.epoch.elapsed().as_nanos() as u64
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}
