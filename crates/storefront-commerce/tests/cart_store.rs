//! End-to-end cart store scenarios.

use std::cell::RefCell;
use std::rc::Rc;

use storefront_commerce::prelude::*;

fn priced(id: u64, dollars: f64) -> Product {
    Product::new(
        ProductId::new(id),
        format!("Product {}", id),
        Money::from_decimal(dollars, Currency::USD).unwrap(),
    )
    .with_stock(100)
}

fn lines(store: &CartStore) -> Vec<(u64, i64)> {
    store
        .items()
        .iter()
        .map(|item| (item.product_id.get(), item.quantity))
        .collect()
}

#[test]
fn repeated_adds_merge_into_one_line() {
    let mut store = CartStore::default();
    store.add_item(&priced(1, 10.00), 2).unwrap();
    store.add_item(&priced(2, 5.00), 1).unwrap();
    store.add_item(&priced(1, 10.00), 3).unwrap();

    assert_eq!(lines(&store), vec![(1, 5), (2, 1)]);
    assert_eq!(store.total().display(), "$55.00");
    assert_eq!(store.line_count(), 2);
    assert_eq!(store.unit_count(), 6);
}

#[test]
fn update_then_remove_empties_cart() {
    let mut store = CartStore::default();
    store.add_item(&priced(1, 10.00), 2).unwrap();

    assert!(store.update_quantity(ProductId::new(1), 1));
    assert_eq!(store.total().display(), "$10.00");

    assert!(store.remove_item(ProductId::new(1)));
    assert!(store.is_empty());
    assert!(store.total().is_zero());
}

#[test]
fn removal_is_idempotent() {
    let mut store = CartStore::default();
    store.add_item(&priced(1, 10.00), 1).unwrap();
    store.add_item(&priced(2, 5.00), 1).unwrap();

    assert!(store.remove_item(ProductId::new(1)));
    let after_first = lines(&store);
    assert!(!store.remove_item(ProductId::new(1)));

    assert!(!store.contains(ProductId::new(1)));
    assert_eq!(lines(&store), after_first);
}

#[test]
fn total_tracks_every_mutation() {
    let mut store = CartStore::default();
    store.add_item(&priced(1, 59.99), 1).unwrap();
    store.add_item(&priced(2, 24.99), 2).unwrap();
    assert_eq!(store.total().display(), "$109.97");

    store.update_quantity(ProductId::new(1), 3);
    assert_eq!(store.total().display(), "$229.95");

    store.remove_item(ProductId::new(2));
    assert_eq!(store.total().display(), "$179.97");
}

#[test]
fn clear_resets_counts_and_total() {
    let mut store = CartStore::default();
    for id in 1..=4 {
        store.add_item(&priced(id, 19.99), id as i64).unwrap();
    }

    assert!(store.clear());
    assert_eq!(store.line_count(), 0);
    assert_eq!(store.unit_count(), 0);
    assert!(store.total().is_zero());
    assert!(!store.clear());
}

#[test]
fn non_positive_update_removes_line() {
    let mut store = CartStore::default();
    store.add_item(&priced(1, 10.00), 2).unwrap();
    store.add_item(&priced(2, 10.00), 2).unwrap();

    store.update_quantity(ProductId::new(1), 0);
    store.update_quantity(ProductId::new(2), -5);

    assert!(store.items().iter().all(|item| item.quantity >= 1));
    assert!(store.is_empty());
}

#[test]
fn rejected_add_leaves_state_and_subscribers_untouched() {
    let mut store = CartStore::default();
    store.add_item(&priced(1, 10.00), 1).unwrap();

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    store.subscribe(move |event, _| sink.borrow_mut().push(*event));

    let euro = Product::new(ProductId::new(2), "Euro", Money::new(100, Currency::EUR));
    assert!(store.add_item(&euro, 1).is_err());
    assert!(store.add_item(&priced(1, 10.00), 0).is_err());

    assert_eq!(lines(&store), vec![(1, 1)]);
    assert!(events.borrow().is_empty());
}

#[test]
fn overflowing_total_is_rejected_not_saturated() {
    let mut store = CartStore::default();
    store.add_item(&priced(1, 10.00), 2).unwrap();

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    store.subscribe(move |event, _| sink.borrow_mut().push(*event));

    let result = store.add_item(&priced(2, 10.00), i64::MAX / 100);
    assert_eq!(result, Err(CommerceError::Overflow));
    assert!(!store.update_quantity(ProductId::new(1), i64::MAX / 100));

    assert_eq!(lines(&store), vec![(1, 2)]);
    assert_eq!(store.total().display(), "$20.00");
    assert!(events.borrow().is_empty());
}

#[test]
fn badge_subscriber_follows_line_count() {
    let mut store = CartStore::default();
    let badge = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&badge);
    store.subscribe(move |_, cart| sink.borrow_mut().push(cart.line_count()));

    store.add_one(&priced(1, 10.00)).unwrap();
    store.add_one(&priced(1, 10.00)).unwrap();
    store.add_one(&priced(2, 10.00)).unwrap();
    store.remove_item(ProductId::new(1));

    assert_eq!(*badge.borrow(), vec![1, 1, 2, 1]);
}

#[tokio::test]
async fn browse_add_and_check_out() {
    let catalog = MockCatalog::new(CatalogConfig::instant());
    let checkout = Checkout::new(
        PricingConfig::default(),
        CheckoutConfig { processing_ms: 0 },
    );
    let mut store = CartStore::default();

    let lamp = catalog.product(ProductId::new(1)).await.unwrap();
    let shirt = catalog.product(ProductId::new(3)).await.unwrap();
    store.add_item(&lamp, 2).unwrap();
    store.add_one(&shirt).unwrap();

    let summary = checkout.summarize(&store);
    assert_eq!(summary.subtotal.display(), "$144.97");
    assert_eq!(summary.tax.display(), "$14.50");
    assert_eq!(summary.total.display(), "$159.47");

    let confirmation = checkout.place_order(&mut store).await.unwrap();
    assert_eq!(confirmation.summary, summary);
    assert!(store.is_empty());
}
