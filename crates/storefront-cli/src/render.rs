//! Plain-text rendering for command output.

use std::fmt::Write;

use storefront_cart::CartLedger;
use storefront_catalog::{category_name, ProductListView};
use storefront_core::{Category, PRICE_RANGES, SortOption};

#[must_use]
pub fn render_product_page(view: &ProductListView, categories: &[Category]) -> String {
    let Some(products) = &view.products else {
        return "Loading products...\n".to_string();
    };
    if products.is_empty() {
        if view.total_count > 0 {
            return format!(
                "No products on page {} (last page is {}).\n",
                view.current_page, view.total_pages
            );
        }
        return "No products found.\n".to_string();
    }

    let mut out = String::new();
    for product in products.iter() {
        let category = category_name(categories, &product.category).unwrap_or(&product.category);
        let _ = writeln!(
            out,
            "{:>5}  {:<40}  ${:>9.2}  {}",
            product.id, product.name, product.price, category
        );
    }
    if view.show_pagination {
        let _ = writeln!(
            out,
            "Page {} of {} ({} products)",
            view.current_page, view.total_pages, view.total_count
        );
    } else {
        let _ = writeln!(out, "{} products", view.total_count);
    }
    out
}

#[must_use]
pub fn render_categories(categories: &[Category]) -> String {
    let mut out = String::new();
    for category in categories {
        let _ = writeln!(out, "{:<24}  {}", category.slug, category.name);
    }
    out
}

/// Price brackets and sort orders accepted by `browse`.
#[must_use]
pub fn render_options() -> String {
    let mut out = String::from("Price ranges:\n");
    for range in &PRICE_RANGES {
        let _ = writeln!(out, "  {:<8}  {}", range.id, range.label);
    }
    out.push_str("Sort options:\n");
    for option in SortOption::ALL {
        let _ = writeln!(out, "  {:<10}  {}", option.id(), option.label());
    }
    out
}

#[must_use]
pub fn render_cart(cart: &CartLedger) -> String {
    if cart.is_empty() {
        return "Your cart is empty.\n".to_string();
    }
    let mut out = String::new();
    for item in cart.items() {
        let _ = writeln!(
            out,
            "{:>5}  {:<40}  {:>3} x ${:.2} = ${:.2}",
            item.product_id,
            item.name,
            item.quantity,
            item.price,
            item.line_total()
        );
    }
    let _ = writeln!(
        out,
        "{} items, subtotal ${:.2}",
        cart.total_quantity(),
        cart.subtotal()
    );
    out
}
