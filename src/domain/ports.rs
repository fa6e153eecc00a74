use super::cart::{Cart, CartItem};
use super::errors::DomainError;

pub trait CartStore: Send + Sync + 'static {
    fn put(&self, cart: Cart) -> Result<(), DomainError>;
    fn find_by_id(&self, id: &str) -> Result<Option<Cart>, DomainError>;
    fn add_item(&self, cart_id: &str, item: CartItem) -> Result<(), DomainError>;
}
