use super::errors::DomainError;

/// Capability implemented by any value that must prove it is well formed
/// before the cart aggregate accepts it.
pub trait Validate {
    fn validate(&self) -> Result<(), DomainError>;
}

#[derive(Debug, Clone)]
pub struct Customer {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl Validate for Customer {
    fn validate(&self) -> Result<(), DomainError> {
        if self.customer_id.trim().is_empty() {
            return Err(DomainError::Validation(
                "customer id must not be empty".to_string(),
            ));
        }
        if self.first_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "customer first name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
