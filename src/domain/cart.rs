use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A monetary amount in the shop's single currency.
///
/// Wraps `rust_decimal::Decimal` so line totals and subtotals stay exact.
/// Arithmetic is checked: `None` means the result does not fit in a `Decimal`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);
    pub const MAX: Self = Self(Decimal::MAX);
    pub const MIN: Self = Self(Decimal::MIN);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Reduces the amount by an integer percentage.
    pub fn checked_discounted(self, percent: u32) -> Option<Self> {
        let reduction = self
            .0
            .checked_mul(Decimal::from(percent))?
            .checked_div(Decimal::ONE_HUNDRED)?;
        self.0.checked_sub(reduction).map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    /// Integer percentage taken off the price, if the product is on sale.
    pub discount: Option<u32>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            discount: None,
        }
    }

    pub fn with_discount(mut self, percent: u32) -> Self {
        self.discount = Some(percent);
        self
    }
}

/// One line of the shopper's basket.
///
/// `product` is `None` while the product has not been loaded. Negative
/// quantities are not rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Option<Product>,
    pub quantity: i32,
}

impl CartItem {
    pub fn new(product: Product, quantity: i32) -> Self {
        Self {
            product: Some(product),
            quantity,
        }
    }

    pub fn unloaded(quantity: i32) -> Self {
        Self {
            product: None,
            quantity,
        }
    }

    /// The amount this line adds to the subtotal, or `None` on overflow.
    pub fn checked_line_total(&self) -> Option<Money> {
        match &self.product {
            None => Some(Money::ZERO),
            Some(product) => {
                let raw = Money::new(product.price.checked_mul(Decimal::from(self.quantity))?);
                match product.discount {
                    Some(percent) => raw.checked_discounted(percent),
                    None => Some(raw),
                }
            }
        }
    }
}

/// Sums the line totals of a cart snapshot.
///
/// A total that does not fit in a `Decimal` saturates at `Money::MAX`, or at
/// `Money::MIN` when the overflowing line is negative.
pub fn subtotal_of(items: &[CartItem]) -> Money {
    let mut total = Money::ZERO;
    for item in items {
        match item
            .checked_line_total()
            .and_then(|line| total.checked_add(line))
        {
            Some(next) => total = next,
            None => {
                let negative = item
                    .product
                    .as_ref()
                    .is_some_and(|p| p.price.is_sign_negative() != (item.quantity < 0));
                warn!(quantity = item.quantity, "cart subtotal overflowed, saturating");
                return if negative { Money::MIN } else { Money::MAX };
            }
        }
    }
    total
}
