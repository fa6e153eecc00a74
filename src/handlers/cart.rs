use std::str::FromStr;

use actix_web::{web, HttpResponse};
use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::cart_service::CartService;
use crate::config::ServiceConfig;
use crate::domain::cart::{Cart, CartItem};
use crate::domain::customer::Customer;
use crate::errors::AppError;
use crate::infrastructure::memory_store::InMemoryCartStore;

type Service = web::Data<CartService<InMemoryCartStore>>;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl From<CustomerDto> for Customer {
    fn from(dto: CustomerDto) -> Self {
        Customer {
            customer_id: dto.customer_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            phone: dto.phone,
        }
    }
}

impl From<&Customer> for CustomerDto {
    fn from(customer: &Customer) -> Self {
        CustomerDto {
            customer_id: customer.customer_id.clone(),
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            phone: customer.phone.clone(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
    pub sku: String,
    pub quantity: i32,
    /// Decimal value as a string to avoid floating-point issues, e.g. "10.50"
    pub item_value: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddCartRequest {
    pub cart_id: String,
    pub customer: Option<CustomerDto>,
    #[serde(default)]
    pub order_items: Vec<CartItemRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub cart_id: String,
    pub item: CartItemRequest,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub item_id: Uuid,
    pub sku: String,
    pub quantity: i32,
    pub item_value: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub cart_id: String,
    pub cart_date: String,
    pub customer: Option<CustomerDto>,
    pub order_items: Vec<CartItemResponse>,
    pub total_items: usize,
    pub total_value: String,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            cart_id: cart.id().to_string(),
            cart_date: cart.created_at().to_rfc3339(),
            customer: cart.customer().map(CustomerDto::from),
            order_items: cart
                .items()
                .iter()
                .map(|item| CartItemResponse {
                    item_id: item.item_id,
                    sku: item.sku.clone(),
                    quantity: item.quantity,
                    item_value: item.item_value.to_string(),
                })
                .collect(),
            total_items: cart.total_item_count(),
            total_value: cart.total_value().to_string(),
        }
    }
}

/// Parse an item request into a domain item, assigning a fresh item id.
///
/// The value must be a well-formed, non-negative decimal; the aggregate
/// itself does not constrain items, so this boundary does.
fn parse_item(req: &CartItemRequest) -> Result<CartItem, AppError> {
    let value = BigDecimal::from_str(&req.item_value).map_err(|e| {
        AppError::Validation(format!("Invalid itemValue '{}': {}", req.item_value, e))
    })?;
    if value < BigDecimal::zero() {
        return Err(AppError::Validation(format!(
            "Invalid itemValue '{}': must not be negative",
            req.item_value
        )));
    }
    Ok(CartItem {
        item_id: Uuid::new_v4(),
        sku: req.sku.clone(),
        quantity: req.quantity,
        item_value: value,
    })
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /{cartId}
///
/// Returns the cart with its items and the derived totals.
#[utoipa::path(
    get,
    path = "/api/v1/cart/{cartId}",
    params(
        ("cartId" = String, Path, description = "Cart id"),
    ),
    responses(
        (status = 200, description = "Get the Cart", body = CartResponse),
        (status = 404, description = "Invalid Cart Reference No."),
        (status = 500, description = "Internal server error"),
    ),
    tag = "cart"
)]
pub async fn get_cart(
    service: Service,
    config: web::Data<ServiceConfig>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let cart_id = path.into_inner();
    log::info!("|{}Service|Get Cart {}", config.service_name, cart_id);

    match service.get_cart(&cart_id)? {
        Some(cart) => Ok(HttpResponse::Ok().json(CartResponse::from(&cart))),
        None => Err(AppError::NotFound),
    }
}

/// POST /add
///
/// Registers a new cart. The cart is built through the aggregate
/// operations, so the customer must pass validation before it is
/// attached and every item value must parse as a non-negative decimal.
#[utoipa::path(
    post,
    path = "/api/v1/cart/add",
    request_body = AddCartRequest,
    responses(
        (status = 201, description = "Cart created successfully"),
        (status = 400, description = "Customer or item validation failed"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "cart"
)]
pub async fn add_cart(
    service: Service,
    config: web::Data<ServiceConfig>,
    body: web::Json<AddCartRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    log::info!("|{}Service|Add Cart {}", config.service_name, body.cart_id);

    let mut cart = Cart::new(body.cart_id);
    if let Some(customer) = body.customer {
        cart.attach_customer(customer.into())?;
    }
    for item in &body.order_items {
        cart.add_item(Some(parse_item(item)?));
    }

    let cart_id = cart.id().to_string();
    service.create_cart(cart)?;

    Ok(HttpResponse::Created().json(json!({ "cartId": cart_id })))
}

/// POST /additem
///
/// Appends one item to an existing cart.
#[utoipa::path(
    post,
    path = "/api/v1/cart/additem",
    request_body = AddItemRequest,
    responses(
        (status = 200, description = "Item added to the Cart"),
        (status = 400, description = "Item validation failed"),
        (status = 404, description = "Unable to add item to the Cart"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "cart"
)]
pub async fn add_item(
    service: Service,
    config: web::Data<ServiceConfig>,
    body: web::Json<AddItemRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    log::info!(
        "|{}Service|Add Item to Cart {}",
        config.service_name,
        body.cart_id
    );

    let item = parse_item(&body.item)?;
    let item_id = item.item_id;
    service.add_item(&body.cart_id, item)?;

    Ok(HttpResponse::Ok().json(json!({ "itemId": item_id })))
}

/// DELETE /delete/{itemId}
///
/// Item removal is not part of the cart aggregate; this endpoint only
/// acknowledges the request with the canned cancellation body.
#[utoipa::path(
    delete,
    path = "/api/v1/cart/delete/{itemId}",
    params(
        ("itemId" = String, Path, description = "Item id"),
    ),
    responses(
        (status = 200, description = "Delete Item from the Cart"),
    ),
    tag = "cart"
)]
pub async fn delete_item(
    config: web::Data<ServiceConfig>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let item_id = path.into_inner();
    log::info!(
        "|{}Service|Delete Item {} from the Cart",
        config.service_name,
        item_id
    );
    Ok(HttpResponse::Ok().body("200:Cancellation-OK"))
}

/// PUT /update/
///
/// Item updates are not part of the cart aggregate; this endpoint only
/// acknowledges the request with the canned update body.
#[utoipa::path(
    put,
    path = "/api/v1/cart/update/",
    request_body = CartItemRequest,
    responses(
        (status = 200, description = "Update the cart"),
    ),
    tag = "cart"
)]
pub async fn update_item(
    config: web::Data<ServiceConfig>,
    _body: web::Json<CartItemRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("|{}Service|Request to Update cart item", config.service_name);
    Ok(HttpResponse::Ok().body("200:Update-OK"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_request(value: &str) -> CartItemRequest {
        CartItemRequest {
            sku: "SKU-1".to_string(),
            quantity: 1,
            item_value: value.to_string(),
        }
    }

    #[test]
    fn parse_item_accepts_decimal_value() {
        let item = parse_item(&item_request("10.50")).expect("parse failed");
        assert_eq!(
            item.item_value,
            BigDecimal::from_str("10.50").expect("valid decimal")
        );
        assert_eq!(item.sku, "SKU-1");
    }

    #[test]
    fn parse_item_rejects_garbage() {
        let err = parse_item(&item_request("ten dollars")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn parse_item_rejects_negative_value() {
        let err = parse_item(&item_request("-1.00")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn parse_item_accepts_zero_value() {
        assert!(parse_item(&item_request("0.00")).is_ok());
    }

    #[test]
    fn cart_response_exposes_derived_totals() {
        let mut cart = Cart::new("cart-1".to_string());
        cart.add_item(Some(parse_item(&item_request("10.50")).expect("parse")));
        cart.add_item(Some(parse_item(&item_request("5.25")).expect("parse")));

        let response = CartResponse::from(&cart);
        assert_eq!(response.cart_id, "cart-1");
        assert_eq!(response.total_items, 2);
        assert_eq!(response.total_value, "15.75");
        assert_eq!(response.order_items.len(), 2);
        assert!(response.customer.is_none());
    }
}
