use serde::{Deserialize, Serialize};

/// One line of the shopping cart.
///
/// `name`, `price` and `image` are copied from the product when it is first
/// added, so later catalog changes do not rewrite what is already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub product_id: String,
    /// Always `> 0` while the item is held by a ledger.
    pub quantity: u32,
    pub name: String,
    pub price: f64,
    pub image: String,
}

impl CartLineItem {
    /// Price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
