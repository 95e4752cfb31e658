use rand::Rng;
use rust_decimal::Decimal;
use std::sync::Arc;
use storecheckout::application::controller::CheckoutController;
use storecheckout::config::CheckoutConfig;
use storecheckout::domain::cart::{CartItem, Money, Product};
use storecheckout::infrastructure::in_memory::InMemoryCartRepository;

fn random_cart(rng: &mut impl Rng) -> Vec<CartItem> {
    let len = rng.gen_range(0..20);
    (0..len)
        .map(|i| {
            let quantity = rng.gen_range(1..10);
            if rng.gen_bool(0.1) {
                return CartItem::unloaded(quantity);
            }
            // Prices in cents, up to 500.00
            let price = Decimal::new(rng.gen_range(1..50_000), 2);
            let mut product = Product::new(format!("p{i}"), "Shoe", price);
            if rng.gen_bool(0.5) {
                product = product.with_discount(rng.gen_range(0..=90));
            }
            CartItem::new(product, quantity)
        })
        .collect()
}

fn expected_subtotal(items: &[CartItem]) -> Decimal {
    let mut total = Decimal::ZERO;
    for item in items {
        if let Some(product) = &item.product {
            let discount = Decimal::from(product.discount.unwrap_or(0));
            total += product.price * Decimal::from(item.quantity) * (Decimal::ONE_HUNDRED - discount)
                / Decimal::ONE_HUNDRED;
        }
    }
    total
}

#[test]
fn test_subtotal_matches_formula_for_random_carts() {
    let mut rng = rand::thread_rng();
    let controller = CheckoutController::new(
        Arc::new(InMemoryCartRepository::new()),
        CheckoutConfig::default(),
    );

    for _ in 0..200 {
        let items = random_cart(&mut rng);
        controller.recompute_subtotal(&items);
        assert_eq!(controller.subtotal(), Money::new(expected_subtotal(&items)));

        // Recomputing never accumulates.
        controller.recompute_subtotal(&items);
        assert_eq!(controller.subtotal(), Money::new(expected_subtotal(&items)));
    }

    controller.recompute_subtotal(&[]);
    assert_eq!(controller.subtotal(), Money::ZERO);
}
