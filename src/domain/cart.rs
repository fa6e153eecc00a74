use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::customer::{Customer, Validate};
use super::errors::DomainError;

#[derive(Debug, Clone)]
pub struct CartItem {
    pub item_id: Uuid,
    pub sku: String,
    pub quantity: i32,
    pub item_value: BigDecimal,
}

/// Cart aggregate: a customer reference plus an ordered list of items.
///
/// Two rules live here: a customer must pass [`Validate`] before it is
/// attached, and an absent item is silently ignored on add. Everything
/// else about an item (sku, quantity, removal) is a concern of the
/// surrounding layers and opaque to the aggregate.
#[derive(Debug, Clone)]
pub struct Cart {
    id: String,
    created_at: DateTime<Utc>,
    customer: Option<Customer>,
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart. The id is assigned by the caller and opaque
    /// to the aggregate.
    pub fn new(id: String) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            customer: None,
            items: Vec::new(),
        }
    }

    /// Attach a customer, replacing any previous one.
    ///
    /// Validation runs before the reference is touched, so a rejected
    /// customer leaves the cart exactly as it was.
    pub fn attach_customer(&mut self, customer: Customer) -> Result<(), DomainError> {
        customer.validate()?;
        self.customer = Some(customer);
        Ok(())
    }

    /// Append an item to the end of the cart.
    ///
    /// `None` is a deliberate no-op, not a missing error path: absent
    /// items are dropped without complaint while invalid customers are
    /// rejected loudly, and that asymmetry is part of the contract.
    pub fn add_item(&mut self, item: Option<CartItem>) {
        if let Some(item) = item {
            self.items.push(item);
        }
    }

    pub fn has_customer(&self) -> bool {
        self.customer.is_some()
    }

    pub fn total_item_count(&self) -> usize {
        self.items.len()
    }

    /// Exact decimal sum of the item values, accumulated in insertion
    /// order starting from zero. An empty cart totals zero.
    pub fn total_value(&self) -> BigDecimal {
        self.items
            .iter()
            .fold(BigDecimal::zero(), |total, item| total + &item.item_value)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn make_item(value: &str) -> CartItem {
        CartItem {
            item_id: Uuid::new_v4(),
            sku: "SKU-1".to_string(),
            quantity: 1,
            item_value: BigDecimal::from_str(value).expect("valid decimal"),
        }
    }

    fn make_customer(id: &str) -> Customer {
        Customer {
            customer_id: id.to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone: "555-0100".to_string(),
        }
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new("cart-1".to_string());
        assert_eq!(cart.total_item_count(), 0);
        assert_eq!(cart.total_value(), BigDecimal::zero());
        assert!(!cart.has_customer());
    }

    #[test]
    fn add_item_appends_in_order() {
        let mut cart = Cart::new("cart-1".to_string());
        let first = make_item("1.00");
        let second = make_item("2.00");
        cart.add_item(Some(first.clone()));
        cart.add_item(Some(second.clone()));

        assert_eq!(cart.total_item_count(), 2);
        assert_eq!(cart.items()[0].item_id, first.item_id);
        assert_eq!(cart.items()[1].item_id, second.item_id);
    }

    #[test]
    fn absent_items_are_silently_ignored() {
        let mut cart = Cart::new("cart-1".to_string());
        cart.add_item(None);
        cart.add_item(Some(make_item("10.50")));
        cart.add_item(None);
        cart.add_item(Some(make_item("5.25")));
        cart.add_item(None);

        assert_eq!(cart.total_item_count(), 2);
        assert_eq!(
            cart.total_value(),
            BigDecimal::from_str("15.75").expect("valid decimal")
        );
    }

    #[test]
    fn duplicate_items_are_allowed() {
        let mut cart = Cart::new("cart-1".to_string());
        let item = make_item("3.00");
        cart.add_item(Some(item.clone()));
        cart.add_item(Some(item));

        assert_eq!(cart.total_item_count(), 2);
        assert_eq!(
            cart.total_value(),
            BigDecimal::from_str("6.00").expect("valid decimal")
        );
    }

    #[test]
    fn total_value_of_empty_cart_is_zero() {
        let cart = Cart::new("cart-1".to_string());
        assert_eq!(cart.total_value(), BigDecimal::zero());
    }

    #[test]
    fn reads_are_idempotent() {
        let mut cart = Cart::new("cart-1".to_string());
        cart.add_item(Some(make_item("9.99")));

        assert_eq!(cart.total_value(), cart.total_value());
        assert_eq!(cart.total_item_count(), cart.total_item_count());
        assert_eq!(cart.has_customer(), cart.has_customer());
    }

    #[test]
    fn attaching_valid_customer_succeeds() {
        let mut cart = Cart::new("cart-1".to_string());
        cart.attach_customer(make_customer("C-1001"))
            .expect("valid customer");

        assert!(cart.has_customer());
        assert_eq!(
            cart.customer().map(|c| c.customer_id.as_str()),
            Some("C-1001")
        );
    }

    #[test]
    fn attaching_invalid_customer_fails_and_leaves_cart_unchanged() {
        let mut cart = Cart::new("cart-1".to_string());
        let err = cart.attach_customer(make_customer("")).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(!cart.has_customer());
    }

    #[test]
    fn failed_attach_keeps_previous_customer() {
        let mut cart = Cart::new("cart-1".to_string());
        cart.attach_customer(make_customer("C-1001"))
            .expect("valid customer");
        cart.attach_customer(make_customer(""))
            .expect_err("invalid customer must be rejected");

        assert_eq!(
            cart.customer().map(|c| c.customer_id.as_str()),
            Some("C-1001")
        );
    }

    #[test]
    fn attach_replaces_existing_customer() {
        let mut cart = Cart::new("cart-1".to_string());
        cart.attach_customer(make_customer("C-1001"))
            .expect("valid customer");
        cart.attach_customer(make_customer("C-2002"))
            .expect("valid customer");

        assert_eq!(
            cart.customer().map(|c| c.customer_id.as_str()),
            Some("C-2002")
        );
    }
}
