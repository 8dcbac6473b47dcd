//! Cart line item.

use serde::{Deserialize, Serialize};

use crate::domain::Product;
use crate::types::{Money, ProductId};

/// One line of the shopping cart: a product plus a quantity.
///
/// Product fields are copied in when the line is created, so a line item is
/// self-contained. A line always carries a quantity of at least one; the
/// store removes the line instead of keeping a zero-quantity entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Id of the product this line aggregates.
    pub id: ProductId,
    /// Product name at the time the line was created.
    pub name: String,
    /// Unit price in whole pesos.
    pub price: Money,
    /// Product description.
    pub description: String,
    /// Product image path.
    pub image: String,
    /// Units of this product in the cart. Always >= 1.
    pub quantity: u32,
}

impl CartItem {
    /// Create a line item for one unit of the given product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}
