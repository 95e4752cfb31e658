//! Checkout domain types: the cart, the payment catalog, and the states a
//! checkout attempt moves through.

pub mod cart;
pub mod payment_method;
pub mod ports;
pub mod state;
