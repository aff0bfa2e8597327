//! Observable cart store.

use std::fmt;

use tracing::debug;

use crate::cart::{Cart, CartEvent, LineItem};
use crate::catalog::Product;
use crate::config::StoreConfig;
use crate::error::CommerceError;
use crate::ids::{ProductId, SubscriptionId};
use crate::money::{Currency, Money};

type Listener = Box<dyn FnMut(&CartEvent, &Cart)>;

/// Single owner of the session's cart.
///
/// Every mutation goes through the store. After a mutation that changes the
/// cart, each subscriber is called in subscription order with the event and
/// the updated cart, before the mutating call returns. Calls that change
/// nothing (removing an absent product, clearing an empty cart) notify no one.
pub struct CartStore {
    cart: Cart,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl CartStore {
    /// Create a store holding an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            cart: Cart::new(currency),
            listeners: Vec::new(),
            next_subscription: 1,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.currency)
    }

    /// Register a listener; returns the handle needed to unsubscribe.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CartEvent, &Cart) + 'static,
    {
        let id = SubscriptionId::new(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(subscription = %id, "Cart subscriber added");
        id
    }

    /// Remove a listener. Returns false if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() < len_before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Add `quantity` units of `product` to the cart.
    ///
    /// Rejected without touching the cart if `quantity` is below 1, the
    /// product is priced in another currency or has a negative price, or the
    /// line quantity would overflow. Stock is the caller's concern.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Result<(), CommerceError> {
        let event = self.cart.add_item(product, quantity)?;
        self.publish(event);
        Ok(())
    }

    /// Add a single unit of `product`.
    pub fn add_one(&mut self, product: &Product) -> Result<(), CommerceError> {
        self.add_item(product, 1)
    }

    /// Remove a product's line. Returns false if it was not in the cart.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let event = self.cart.remove_item(product_id);
        self.publish_if_changed(event)
    }

    /// Set a line's quantity; anything below 1 removes the line.
    ///
    /// Returns false if the cart did not change.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        let event = self.cart.update_quantity(product_id, quantity);
        self.publish_if_changed(event)
    }

    /// Empty the cart. Returns false if it was already empty.
    pub fn clear(&mut self) -> bool {
        let event = self.cart.clear();
        self.publish_if_changed(event)
    }

    /// Read-only view of the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.cart.get(product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.cart.contains(product_id)
    }

    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.cart.quantity_of(product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Distinct lines, as shown on the navigation badge.
    pub fn line_count(&self) -> usize {
        self.cart.line_count()
    }

    /// Units across all lines.
    pub fn unit_count(&self) -> i64 {
        self.cart.unit_count()
    }

    /// Sum of price times quantity, recomputed on every call.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    fn publish_if_changed(&mut self, event: Option<CartEvent>) -> bool {
        match event {
            Some(event) => {
                self.publish(event);
                true
            }
            None => false,
        }
    }

    fn publish(&mut self, event: CartEvent) {
        debug!(
            event = event.as_str(),
            product_id = ?event.product_id(),
            lines = self.cart.line_count(),
            total = %self.cart.total(),
            "Cart updated"
        );
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event, &self.cart);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn product(id: u64, cents: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {}", id),
            Money::new(cents, Currency::USD),
        )
    }

    fn recorder(store: &mut CartStore) -> (SubscriptionId, Rc<RefCell<Vec<CartEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let id = store.subscribe(move |event, _| sink.borrow_mut().push(*event));
        (id, events)
    }

    #[test]
    fn test_subscriber_sees_updated_state() {
        let mut store = CartStore::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |_, cart| sink.borrow_mut().push((cart.line_count(), cart.total())));

        store.add_item(&product(1, 1000), 2).unwrap();
        store.add_item(&product(2, 500), 1).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![
                (1, Money::new(2000, Currency::USD)),
                (2, Money::new(2500, Currency::USD)),
            ]
        );
    }

    #[test]
    fn test_events_per_operation() {
        let mut store = CartStore::default();
        let (_, events) = recorder(&mut store);

        store.add_one(&product(1, 1000)).unwrap();
        store.update_quantity(ProductId::new(1), 4);
        store.remove_item(ProductId::new(1));
        store.add_one(&product(2, 1000)).unwrap();
        store.clear();

        let kinds: Vec<&str> = events.borrow().iter().map(|e| e.as_str()).collect();
        assert_eq!(
            kinds,
            vec![
                "item_added",
                "quantity_updated",
                "item_removed",
                "item_added",
                "cleared"
            ]
        );
    }

    #[test]
    fn test_no_ops_do_not_notify() {
        let mut store = CartStore::default();
        let (_, events) = recorder(&mut store);

        assert!(!store.remove_item(ProductId::new(1)));
        assert!(!store.update_quantity(ProductId::new(1), 3));
        assert!(!store.clear());
        assert!(store.add_item(&product(1, 1000), 0).is_err());

        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_subscribers_called_in_order() {
        let mut store = CartStore::default();
        let order = Rc::new(RefCell::new(Vec::new()));
        for name in ["nav", "cart-page"] {
            let sink = Rc::clone(&order);
            store.subscribe(move |_, _| sink.borrow_mut().push(name));
        }

        store.add_one(&product(1, 100)).unwrap();
        assert_eq!(*order.borrow(), vec!["nav", "cart-page"]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = CartStore::default();
        let (id, events) = recorder(&mut store);
        let (_, other) = recorder(&mut store);
        assert_eq!(store.subscriber_count(), 2);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add_one(&product(1, 100)).unwrap();

        assert!(events.borrow().is_empty());
        assert_eq!(other.borrow().len(), 1);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_subscription_ids_are_unique() {
        let mut store = CartStore::default();
        let a = store.subscribe(|_, _| {});
        let b = store.subscribe(|_, _| {});
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_config() {
        let config = StoreConfig {
            currency: Currency::EUR,
        };
        let store = CartStore::from_config(&config);
        assert_eq!(store.cart().currency(), Currency::EUR);
        assert_eq!(store.total(), Money::zero(Currency::EUR));
    }

    #[test]
    fn test_debug_hides_listeners() {
        let mut store = CartStore::default();
        store.subscribe(|_, _| {});
        let debug = format!("{:?}", store);
        assert!(debug.contains("subscribers: 1"));
    }
}
