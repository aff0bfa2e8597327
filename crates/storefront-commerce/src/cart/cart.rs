//! Cart and line item types.

use crate::cart::CartEvent;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::Serialize;

/// Contents of a shopping cart.
///
/// Lines keep insertion order and there is at most one line per product.
/// Totals are never stored; every read recomputes them from the lines.
/// Mutation is reserved to [`CartStore`](crate::cart::CartStore), so outside
/// this crate a `Cart` is a read-only view.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Cart {
    currency: Currency,
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            items: Vec::new(),
        }
    }

    /// Add `quantity` units of `product`.
    ///
    /// Merges into the existing line for the product if there is one.
    /// Stock is not checked here.
    pub(crate) fn add_item(
        &mut self,
        product: &Product,
        quantity: i64,
    ) -> Result<CartEvent, CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }
        if product.price.is_negative() {
            return Err(CommerceError::InvalidPrice(product.price.display()));
        }

        let new_quantity = self
            .quantity_of(product.id)
            .checked_add(quantity)
            .ok_or(CommerceError::Overflow)?;
        let unit_price = self.get(product.id).map_or(product.price, |i| i.unit_price);
        self.checked_total_with(product.id, unit_price, new_quantity)?;

        match self.items.iter_mut().find(|i| i.product_id == product.id) {
            Some(existing) => existing.quantity = new_quantity,
            None => self.items.push(LineItem::from_product(product, quantity)),
        }
        Ok(CartEvent::ItemAdded {
            product_id: product.id,
            added: quantity,
            quantity: new_quantity,
        })
    }

    /// Remove the line for `product_id`, if any.
    pub(crate) fn remove_item(&mut self, product_id: ProductId) -> Option<CartEvent> {
        let position = self.items.iter().position(|i| i.product_id == product_id)?;
        let removed = self.items.remove(position);
        Some(CartEvent::ItemRemoved {
            product_id,
            quantity: removed.quantity,
        })
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity below 1 removes the line. Unknown ids, unchanged
    /// quantities and quantities whose total would overflow leave the cart
    /// as it was.
    pub(crate) fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Option<CartEvent> {
        if quantity < 1 {
            return self.remove_item(product_id);
        }

        let item = self.get(product_id)?;
        if item.quantity == quantity {
            return None;
        }
        self.checked_total_with(product_id, item.unit_price, quantity).ok()?;

        let item = self.items.iter_mut().find(|i| i.product_id == product_id)?;
        let previous = std::mem::replace(&mut item.quantity, quantity);
        Some(CartEvent::QuantityUpdated {
            product_id,
            previous,
            quantity,
        })
    }

    /// Remove every line.
    pub(crate) fn clear(&mut self) -> Option<CartEvent> {
        if self.items.is_empty() {
            return None;
        }
        let lines = self.items.len();
        self.items.clear();
        Some(CartEvent::Cleared { lines })
    }

    /// Currency every line is priced in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Lines in the order their products were first added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Check if the cart has a line for a product.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Quantity of a product in the cart (0 if absent).
    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.get(product_id).map_or(0, |i| i.quantity)
    }

    /// Number of distinct lines. This is what the navigation badge shows.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total number of units across all lines.
    pub fn unit_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of unit price times quantity over all lines.
    ///
    /// Exact in cents. Mutations that would push it past `i64` are rejected,
    /// so the sum always fits.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(self.currency), |acc, i| {
                acc.saturating_add(&i.line_total())
            })
    }

    /// The cart total if `product_id`'s line held `quantity` units at
    /// `unit_price`, or `Overflow` if it would not fit.
    fn checked_total_with(
        &self,
        product_id: ProductId,
        unit_price: Money,
        quantity: i64,
    ) -> Result<Money, CommerceError> {
        let line_total = unit_price
            .try_multiply(quantity)
            .ok_or(CommerceError::Overflow)?;
        self.items
            .iter()
            .filter(|i| i.product_id != product_id)
            .try_fold(line_total, |acc, i| acc.try_add(&i.line_total()))
            .ok_or(CommerceError::Overflow)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

/// A line in the cart: the product fields the cart needs plus a quantity.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price at the time the product was first added.
    pub unit_price: Money,
    /// Product image URL.
    pub image: String,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl LineItem {
    fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.saturating_multiply(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, cents: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {}", id),
            Money::new(cents, Currency::USD),
        )
        .with_stock(10)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::USD);
        assert!(cart.is_empty());
        assert_eq!(cart.line_count(), 0);
        assert_eq!(cart.total(), Money::zero(Currency::USD));
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::default();
        let event = cart.add_item(&product(1, 1000), 2).unwrap();

        assert_eq!(
            event,
            CartEvent::ItemAdded {
                product_id: ProductId::new(1),
                added: 2,
                quantity: 2,
            }
        );
        assert_eq!(cart.unit_count(), 2);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 1000), 1).unwrap();
        let event = cart.add_item(&product(1, 1000), 2).unwrap();

        assert_eq!(event.product_id(), Some(ProductId::new(1)));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(1)), 3);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut cart = Cart::default();
        cart.add_item(&product(3, 100), 1).unwrap();
        cart.add_item(&product(1, 100), 1).unwrap();
        cart.add_item(&product(3, 100), 1).unwrap();

        let ids: Vec<u64> = cart.items().iter().map(|i| i.product_id.get()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_add_ignores_stock() {
        let mut cart = Cart::default();
        let sold_out = product(1, 1000).with_stock(0);
        cart.add_item(&sold_out, 50).unwrap();
        assert_eq!(cart.quantity_of(ProductId::new(1)), 50);
    }

    #[test]
    fn test_invalid_quantity() {
        let mut cart = Cart::default();
        assert_eq!(
            cart.add_item(&product(1, 1000), 0),
            Err(CommerceError::InvalidQuantity(0))
        );
        assert_eq!(
            cart.add_item(&product(1, 1000), -4),
            Err(CommerceError::InvalidQuantity(-4))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_currency_mismatch() {
        let mut cart = Cart::new(Currency::USD);
        let euro = Product::new(ProductId::new(1), "Euro", Money::new(100, Currency::EUR));
        let result = cart.add_item(&euro, 1);
        assert!(matches!(result, Err(CommerceError::CurrencyMismatch { .. })));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut cart = Cart::default();
        let result = cart.add_item(&product(1, -100), 1);
        assert!(matches!(result, Err(CommerceError::InvalidPrice(_))));
    }

    #[test]
    fn test_quantity_overflow_leaves_line_unchanged() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 1), i64::MAX).unwrap();
        assert_eq!(cart.add_item(&product(1, 1), 1), Err(CommerceError::Overflow));
        assert_eq!(cart.quantity_of(ProductId::new(1)), i64::MAX);
    }

    #[test]
    fn test_line_total_overflow_rejected() {
        let mut cart = Cart::default();
        let quantity = i64::MAX / 100;
        assert_eq!(
            cart.add_item(&product(1, 1000), quantity),
            Err(CommerceError::Overflow)
        );
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_cart_total_overflow_rejected() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 1), i64::MAX).unwrap();
        assert_eq!(cart.add_item(&product(2, 1), 1), Err(CommerceError::Overflow));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total().amount_cents, i64::MAX);
    }

    #[test]
    fn test_update_quantity_overflow_is_rejected() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 1000), 1).unwrap();
        cart.add_item(&product(2, 500), 2).unwrap();

        assert_eq!(cart.update_quantity(ProductId::new(1), i64::MAX / 100), None);
        assert_eq!(cart.quantity_of(ProductId::new(1)), 1);
        assert_eq!(cart.total().amount_cents, 2000);

        // Fits on its own, but not next to the other line
        let fits_alone = i64::MAX / 1000;
        assert_eq!(cart.update_quantity(ProductId::new(1), fits_alone), None);
        assert_eq!(cart.total().amount_cents, 2000);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 1000), 2).unwrap();

        assert_eq!(
            cart.remove_item(ProductId::new(1)),
            Some(CartEvent::ItemRemoved {
                product_id: ProductId::new(1),
                quantity: 2,
            })
        );
        assert!(cart.is_empty());
        assert_eq!(cart.remove_item(ProductId::new(1)), None);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 1000), 1).unwrap();

        let event = cart.update_quantity(ProductId::new(1), 5);
        assert_eq!(
            event,
            Some(CartEvent::QuantityUpdated {
                product_id: ProductId::new(1),
                previous: 1,
                quantity: 5,
            })
        );
        assert_eq!(cart.unit_count(), 5);

        assert_eq!(cart.update_quantity(ProductId::new(1), 5), None);
        assert_eq!(cart.update_quantity(ProductId::new(2), 5), None);
    }

    #[test]
    fn test_update_quantity_below_one_removes() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 1000), 3).unwrap();
        cart.add_item(&product(2, 1000), 3).unwrap();

        assert!(matches!(
            cart.update_quantity(ProductId::new(1), 0),
            Some(CartEvent::ItemRemoved { .. })
        ));
        assert!(matches!(
            cart.update_quantity(ProductId::new(2), -5),
            Some(CartEvent::ItemRemoved { .. })
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_recomputed() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 1000), 2).unwrap();
        cart.add_item(&product(2, 2000), 1).unwrap();
        assert_eq!(cart.total().amount_cents, 4000);

        cart.update_quantity(ProductId::new(2), 3);
        assert_eq!(cart.total().amount_cents, 8000);
    }

    #[test]
    fn test_total_is_exact_for_decimal_prices() {
        let mut cart = Cart::default();
        let dime = Product::new(
            ProductId::new(1),
            "Dime",
            Money::from_decimal(0.1, Currency::USD).unwrap(),
        );
        cart.add_item(&dime, 3).unwrap();
        assert_eq!(cart.total().display(), "$0.30");
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::default();
        cart.add_item(&product(1, 1000), 2).unwrap();
        cart.add_item(&product(2, 1000), 2).unwrap();

        assert_eq!(cart.clear(), Some(CartEvent::Cleared { lines: 2 }));
        assert!(cart.is_empty());
        assert_eq!(cart.clear(), None);
    }

    #[test]
    fn test_line_item_snapshot() {
        let mut cart = Cart::default();
        let lamp = product(1, 5999).with_image("lamp.jpg");
        cart.add_item(&lamp, 2).unwrap();

        let line = cart.get(ProductId::new(1)).unwrap();
        assert_eq!(line.name, "Product 1");
        assert_eq!(line.image, "lamp.jpg");
        assert_eq!(line.line_total().display(), "$119.98");
    }
}
