pub mod cart_service;
