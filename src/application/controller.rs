use super::observable::Observable;
use super::scope::ScreenScope;
use crate::config::CheckoutConfig;
use crate::domain::cart::{CartItem, Money, subtotal_of};
use crate::domain::payment_method::PaymentMethod;
use crate::domain::ports::SharedCartRepository;
use crate::domain::state::{CheckoutState, FailureReason, MessageToken};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

/// State holder for the checkout screen.
///
/// `CheckoutController` owns the selected payment method, the cart subtotal
/// and the checkout state. The rendering layer reads them through getters or
/// subscriptions; only the controller writes them.
///
/// A checkout with a payment method selected completes in the background after
/// the configured processing delay. That work is tied to the controller: once
/// it is closed or dropped, nothing from a pending checkout runs.
pub struct CheckoutController {
    cart: SharedCartRepository,
    config: CheckoutConfig,
    selected_payment_method: Observable<Option<String>>,
    subtotal: Observable<Money>,
    state: Arc<Observable<CheckoutState>>,
    scope: ScreenScope,
}

impl CheckoutController {
    /// Creates a controller for a freshly opened checkout screen.
    ///
    /// # Arguments
    ///
    /// * `cart` - The cart emptied once a checkout succeeds.
    /// * `config` - Screen settings, including the simulated processing delay.
    pub fn new(cart: SharedCartRepository, config: CheckoutConfig) -> Self {
        Self {
            cart,
            config,
            selected_payment_method: Observable::new(None),
            subtotal: Observable::new(Money::ZERO),
            state: Arc::new(Observable::new(CheckoutState::Idle)),
            scope: ScreenScope::new(),
        }
    }

    pub fn payment_methods(&self) -> &'static [PaymentMethod] {
        PaymentMethod::all()
    }

    /// Stores `id` as the chosen payment method.
    ///
    /// Ids missing from the catalog are kept as-is.
    pub fn select_payment_method(&self, id: impl Into<String>) {
        let id = id.into();
        if PaymentMethod::find(&id).is_none() {
            warn!(payment_method = %id, "selected payment method is not in the catalog");
        }
        debug!(payment_method = %id, "payment method selected");
        self.selected_payment_method.set(Some(id));
    }

    /// Replaces the subtotal with the total of `items`.
    pub fn recompute_subtotal(&self, items: &[CartItem]) {
        let subtotal = subtotal_of(items);
        debug!(items = items.len(), %subtotal, "subtotal recomputed");
        self.subtotal.set(subtotal);
    }

    /// Starts a checkout attempt.
    ///
    /// Without a selected payment method the attempt fails immediately and
    /// `on_failure` is called before this returns. Otherwise the state becomes
    /// `Loading` and, after the processing delay, the cart is cleared, the
    /// state becomes `Success` and `on_success` is called.
    pub fn attempt_checkout<S, F>(&mut self, on_success: S, on_failure: F)
    where
        S: FnOnce() + Send + 'static,
        F: FnOnce(MessageToken),
    {
        self.state.set(CheckoutState::Idle);

        let Some(payment_method) = self.selected_payment_method.get() else {
            let reason = FailureReason::NoPaymentMethodSelected;
            info!(%reason, "checkout rejected");
            self.state.set(CheckoutState::Error(reason));
            on_failure(reason.message_token());
            return;
        };

        self.state.set(CheckoutState::Loading);
        info!(%payment_method, subtotal = %self.subtotal.get(), "checkout started");

        let cart = Arc::clone(&self.cart);
        let state = Arc::clone(&self.state);
        let delay = self.config.processing_delay;
        self.scope.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = cart.clear_cart().await {
                warn!(error = %e, "failed to clear cart after checkout");
            }
            state.set(CheckoutState::Success);
            info!(%payment_method, "checkout completed");
            on_success();
        });
    }

    /// Cancels every pending checkout continuation.
    pub fn close(&mut self) {
        self.scope.cancel_all();
    }

    /// Number of checkout attempts still waiting on the processing delay.
    pub fn pending_checkouts(&mut self) -> usize {
        self.scope.pending()
    }

    pub fn selected_payment_method_id(&self) -> Option<String> {
        self.selected_payment_method.get()
    }

    /// The catalog entry for the current selection, if it names one.
    pub fn selected_payment_method(&self) -> Option<&'static PaymentMethod> {
        self.selected_payment_method
            .get()
            .and_then(|id| PaymentMethod::find(&id))
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal.get()
    }

    pub fn state(&self) -> CheckoutState {
        self.state.get()
    }

    pub fn subscribe_selected_payment_method(&self) -> watch::Receiver<Option<String>> {
        self.selected_payment_method.subscribe()
    }

    pub fn subscribe_subtotal(&self) -> watch::Receiver<Money> {
        self.subtotal.subscribe()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<CheckoutState> {
        self.state.subscribe()
    }

    /// Every state write, in order, including repeated values.
    pub fn state_transitions(&self) -> broadcast::Receiver<CheckoutState> {
        self.state.changes()
    }
}
