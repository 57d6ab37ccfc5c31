//! Order storage arena
//!
//! The arena is the single owner of every live order. Orders are stored in
//! a slab keyed by a stable handle, with an id map on top for O(1)
//! cancellation lookup. Price levels hold handles only; a handle is valid
//! from `insert` until the matching `remove`.

use slab::Slab;
use std::collections::HashMap;
use types::ids::OrderId;
use types::order::Order;

/// Stable handle to an order in the arena
pub type OrderHandle = usize;

/// An order plus its position in a price level's queue
///
/// The prev/next links are the queue linkage; they are `None` while the
/// order is not enqueued.
#[derive(Debug, Clone)]
pub(crate) struct OrderNode {
    pub order: Order,
    pub prev: Option<OrderHandle>,
    pub next: Option<OrderHandle>,
}

/// Slab-backed order storage with id lookup
pub struct OrderArena {
    nodes: Slab<OrderNode>,
    index: HashMap<OrderId, OrderHandle>,
}

impl OrderArena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            index: HashMap::new(),
        }
    }

    /// Create an arena with preallocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Check whether an id names a live order
    pub fn contains(&self, id: OrderId) -> bool {
        self.index.contains_key(&id)
    }

    /// Look up the handle for a live order
    pub fn lookup(&self, id: OrderId) -> Option<OrderHandle> {
        self.index.get(&id).copied()
    }

    /// Take ownership of an order, returning its handle
    ///
    /// Precondition (checked by the engine): `order.id` is not live.
    pub fn insert(&mut self, order: Order) -> OrderHandle {
        let id = order.id;
        let handle = self.nodes.insert(OrderNode {
            order,
            prev: None,
            next: None,
        });
        self.index.insert(id, handle);
        handle
    }

    /// Release an order, freeing its slot and id
    pub fn remove(&mut self, handle: OrderHandle) -> Order {
        let node = self.nodes.remove(handle);
        self.index.remove(&node.order.id);
        node.order
    }

    /// Borrow the order behind a handle
    pub fn order(&self, handle: OrderHandle) -> &Order {
        &self.nodes[handle].order
    }

    /// Mutably borrow the order behind a handle
    pub fn order_mut(&mut self, handle: OrderHandle) -> &mut Order {
        &mut self.nodes[handle].order
    }

    pub(crate) fn node(&self, handle: OrderHandle) -> &OrderNode {
        &self.nodes[handle]
    }

    pub(crate) fn node_mut(&mut self, handle: OrderHandle) -> &mut OrderNode {
        &mut self.nodes[handle]
    }

    /// Number of live orders
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if no orders are live
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl Default for OrderArena {
    fn default() -> Self {
        Self::new()
    }
}
