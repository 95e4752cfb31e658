use crate::domain::cart::{CartItem, Product};
use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of a cart CSV file.
///
/// An empty `product_id` stands for a product that has not been loaded.
#[derive(Debug, Deserialize)]
struct CartRecord {
    product_id: Option<String>,
    name: Option<String>,
    price: Option<Decimal>,
    discount: Option<u32>,
    quantity: i32,
}

impl TryFrom<CartRecord> for CartItem {
    type Error = CheckoutError;

    fn try_from(record: CartRecord) -> Result<Self> {
        let Some(product_id) = record.product_id.filter(|id| !id.is_empty()) else {
            return Ok(CartItem::unloaded(record.quantity));
        };
        let price = record.price.ok_or_else(|| {
            CheckoutError::Validation(format!("product {product_id} has no price"))
        })?;

        let mut product = Product::new(product_id, record.name.unwrap_or_default(), price);
        product.discount = record.discount;
        let item = CartItem::new(product, record.quantity);
        if item.checked_line_total().is_none() {
            return Err(CheckoutError::Validation(format!(
                "line total for product {} does not fit in an amount",
                item.product.as_ref().map_or("", |p| p.id.as_str())
            )));
        }
        Ok(item)
    }
}

/// Reads cart items from a CSV source.
///
/// Expects the header `product_id, name, price, discount, quantity`.
/// Whitespace is trimmed and short records are accepted.
pub struct CartReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CartReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily yields one result per row, so a bad row does not stop the rest.
    pub fn items(self) -> impl Iterator<Item = Result<CartItem>> {
        self.reader
            .into_deserialize::<CartRecord>()
            .map(|result| result.map_err(CheckoutError::from).and_then(CartItem::try_from))
    }
}
