use crate::domain::cart::{Cart, CartItem};
use crate::domain::errors::DomainError;
use crate::domain::ports::CartStore;

pub struct CartService<S> {
    store: S,
}

impl<S: CartStore> CartService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_cart(&self, cart: Cart) -> Result<(), DomainError> {
        self.store.put(cart)
    }

    pub fn get_cart(&self, id: &str) -> Result<Option<Cart>, DomainError> {
        self.store.find_by_id(id)
    }

    pub fn add_item(&self, cart_id: &str, item: CartItem) -> Result<(), DomainError> {
        self.store.add_item(cart_id, item)
    }
}
