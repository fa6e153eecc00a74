use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::cart::{Cart, CartItem};
use crate::domain::errors::DomainError;
use crate::domain::ports::CartStore;

/// In-memory cart store keyed by cart id.
///
/// The coarse mutex guarantees at most one mutator per cart at a time,
/// which is all the aggregate asks of its surrounding layer. Nothing
/// survives a restart; persistence is out of scope for this service.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
    carts: Mutex<HashMap<String, Cart>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Cart>>, DomainError> {
        self.carts
            .lock()
            .map_err(|e| DomainError::Internal(format!("cart store lock poisoned: {e}")))
    }
}

impl CartStore for InMemoryCartStore {
    fn put(&self, cart: Cart) -> Result<(), DomainError> {
        let mut carts = self.lock()?;
        carts.insert(cart.id().to_string(), cart);
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Cart>, DomainError> {
        let carts = self.lock()?;
        Ok(carts.get(id).cloned())
    }

    fn add_item(&self, cart_id: &str, item: CartItem) -> Result<(), DomainError> {
        let mut carts = self.lock()?;
        let cart = carts.get_mut(cart_id).ok_or(DomainError::NotFound)?;
        cart.add_item(Some(item));
        Ok(())
    }
}
