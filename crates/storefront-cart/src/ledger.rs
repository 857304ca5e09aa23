use std::collections::HashSet;

use storefront_core::{CartLineItem, Product};

/// Every way the cart can change.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add `quantity` units, merging into an existing line for the same product.
    Add { product: Product, quantity: u32 },
    /// Overwrite a line's quantity; `quantity <= 0` removes the line.
    SetQuantity { product_id: String, quantity: i64 },
    Remove { product_id: String },
    /// Adopt `items` in order, e.g. when hydrating from storage. Lines with a
    /// zero quantity are skipped and only the first line per product id is
    /// kept.
    ReplaceAll(Vec<CartLineItem>),
    Clear,
}

/// Line items in insertion order, at most one per product id, each with a
/// positive quantity.
///
/// Every transition is total: removing or updating an absent product is a
/// no-op, never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartLedger {
    items: Vec<CartLineItem>,
}

impl CartLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, product_id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of `price * quantity` across all lines.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Applies `action` and reports whether the contents changed.
    pub fn apply(&mut self, action: CartAction) -> bool {
        match action {
            CartAction::Add { product, quantity } => self.add(&product, quantity),
            CartAction::SetQuantity {
                product_id,
                quantity,
            } => self.set_quantity(&product_id, quantity),
            CartAction::Remove { product_id } => self.remove(&product_id),
            CartAction::ReplaceAll(items) => self.replace_all(items),
            CartAction::Clear => self.clear(),
        }
    }

    /// Adding zero units is a no-op, so a line never starts at quantity 0.
    fn add(&mut self, product: &Product, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return true;
        }
        self.items.push(CartLineItem {
            product_id: product.id.clone(),
            quantity,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        });
        true
    }

    fn set_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    fn remove(&mut self, product_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() != before
    }

    fn replace_all(&mut self, items: Vec<CartLineItem>) -> bool {
        let items = retain_valid_lines(items);
        if self.items == items {
            return false;
        }
        self.items = items;
        true
    }

    fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        true
    }
}

/// Drops zero-quantity lines and every line after the first for a product id,
/// keeping the original order.
pub(crate) fn retain_valid_lines(items: Vec<CartLineItem>) -> Vec<CartLineItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| item.quantity > 0)
        .filter(|item| seen.insert(item.product_id.clone()))
        .collect()
}

#[cfg(test)]
#[path = "ledger_test.rs"]
mod tests;
