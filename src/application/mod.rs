//! Application layer driving the checkout screen.
//!
//! This module defines the `CheckoutController`, which owns the screen's
//! observable state, and the `ScreenScope` that runs its delayed work on
//! `tokio` and cancels it when the screen goes away.

pub mod controller;
pub mod observable;
pub mod scope;
