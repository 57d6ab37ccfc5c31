//! Price level implementation with FIFO queue
//!
//! A price level contains all resting orders at a specific price point,
//! maintained in strict FIFO order to enforce time priority. The queue is a
//! doubly linked list threaded through arena handles, giving O(1) append,
//! O(1) unlink of a known member, and O(1) aggregate reads. Cancelling a
//! non-head order never scans the queue.

use types::numeric::Quantity;

use super::arena::{OrderArena, OrderHandle};

/// A price level containing orders at a specific price
///
/// Holds head/tail handles into the order arena plus cached aggregates.
/// `total_volume` tracks the sum of remaining quantities continuously:
/// partial fills reduce it via [`PriceLevel::reduce_volume`], not just
/// append/unlink.
#[derive(Debug, Clone, Default)]
pub struct PriceLevel {
    head: Option<OrderHandle>,
    tail: Option<OrderHandle>,
    total_volume: Quantity,
    order_count: usize,
}

impl PriceLevel {
    /// Create a new empty price level
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            total_volume: Quantity::ZERO,
            order_count: 0,
        }
    }

    /// Append an order at the back of the queue (time priority)
    ///
    /// Precondition: the order is not currently in any queue.
    pub fn append(&mut self, handle: OrderHandle, arena: &mut OrderArena) {
        let prev_tail = self.tail;

        {
            let node = arena.node_mut(handle);
            node.prev = prev_tail;
            node.next = None;
        }

        match prev_tail {
            Some(tail) => arena.node_mut(tail).next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);

        self.total_volume += arena.order(handle).remaining_quantity;
        self.order_count += 1;
    }

    /// Unlink a specific order from the queue
    ///
    /// Subtracts the order's current remaining quantity from the cached
    /// volume, so a fully filled order (remaining zero) must have had its
    /// fills accounted through [`PriceLevel::reduce_volume`] already.
    ///
    /// Precondition: the order is in this queue.
    pub fn unlink(&mut self, handle: OrderHandle, arena: &mut OrderArena) {
        let (prev, next, remaining) = {
            let node = arena.node(handle);
            (node.prev, node.next, node.order.remaining_quantity)
        };

        match prev {
            Some(prev) => arena.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => arena.node_mut(next).prev = prev,
            None => self.tail = prev,
        }

        let node = arena.node_mut(handle);
        node.prev = None;
        node.next = None;

        self.total_volume -= remaining;
        self.order_count -= 1;
    }

    /// Reduce the cached volume after a partial or full fill of a member
    pub fn reduce_volume(&mut self, quantity: Quantity) {
        self.total_volume -= quantity;
    }

    /// The first order in the queue (oldest)
    pub fn front(&self) -> Option<OrderHandle> {
        self.head
    }

    /// Check if the price level is empty
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Total resting volume at this price level
    pub fn total_volume(&self) -> Quantity {
        self.total_volume
    }

    /// Number of orders at this level
    pub fn order_count(&self) -> usize {
        self.order_count
    }
}
