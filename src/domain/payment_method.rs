use serde::Serialize;

/// A selectable payment channel.
///
/// `title` and `icon` are resource tokens resolved by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentMethod {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    /// Masked account number shown next to the method.
    pub account: &'static str,
}

/// Every payment method the checkout screen offers, in display order.
pub const PAYMENT_METHODS: [PaymentMethod; 3] = [
    PaymentMethod {
        id: "apple",
        title: "apple_pay",
        icon: "ic_apple",
        account: "8402-5739-2039-5784",
    },
    PaymentMethod {
        id: "master",
        title: "master_card",
        icon: "ic_master_card",
        account: "3323-8202-4748-2009",
    },
    PaymentMethod {
        id: "visa",
        title: "visa",
        icon: "ic_visa",
        account: "7483-02836-4839-283",
    },
];

impl PaymentMethod {
    pub fn all() -> &'static [PaymentMethod] {
        &PAYMENT_METHODS
    }

    pub fn find(id: &str) -> Option<&'static PaymentMethod> {
        PAYMENT_METHODS.iter().find(|method| method.id == id)
    }
}
