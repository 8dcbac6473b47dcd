//! The single source of truth for storefront state.
//!
//! All state changes go through the named mutation methods and all reads for
//! rendering go through the named derived views; nothing outside this module
//! touches the fields directly. Mutations are synchronous, total (they always
//! succeed on well-typed input), and run to completion before anything can
//! observe the state again.

use crate::domain::{CartItem, Order, Product, User, UserPatch};
use crate::types::{Money, ProductId};

/// Application state: catalog, cart, user profile, and order history.
///
/// The catalog is fixed at construction. The cart is an ordered sequence of
/// line items, one per product id, in first-add order. Order history is
/// append-only.
#[derive(Debug, Clone)]
pub struct Store {
    products: Vec<Product>,
    cart: Vec<CartItem>,
    user: User,
    order_history: Vec<Order>,
}

impl Store {
    /// Create a store seeded with the given catalog, an empty cart, an empty
    /// user profile, and no order history.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            cart: Vec::new(),
            user: User::default(),
            order_history: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Add one unit of a product to the cart.
    ///
    /// An existing line for the same id has its quantity incremented;
    /// otherwise a new line with quantity 1 is appended, copying the product
    /// fields.
    pub fn add_to_cart(&mut self, product: &Product) {
        if let Some(item) = self.cart.iter_mut().find(|item| item.id == product.id) {
            item.quantity += 1;
        } else {
            self.cart.push(CartItem::from_product(product));
        }
    }

    /// Remove one unit of a product from the cart.
    ///
    /// The matching line's quantity is decremented; a line that reaches zero
    /// is dropped entirely. An id with no matching line is a silent no-op.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        if let Some(item) = self.cart.iter_mut().find(|item| item.id == product_id) {
            item.quantity = item.quantity.saturating_sub(1);
        }
        self.cart.retain(|item| item.quantity > 0);
    }

    /// Empty the cart unconditionally.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Apply a partial update to the user profile.
    ///
    /// Fields the patch leaves as `None` are preserved unchanged.
    pub fn update_user(&mut self, patch: UserPatch) {
        self.user.apply(patch);
    }

    /// Append an order to the history.
    ///
    /// History preserves insertion order and is never mutated or truncated.
    pub fn add_order(&mut self, order: Order) {
        self.order_history.push(order);
    }

    // -------------------------------------------------------------------------
    // Derived views
    // -------------------------------------------------------------------------

    /// Sum of price times quantity over all cart lines.
    #[must_use]
    pub fn cart_total(&self) -> Money {
        self.cart.iter().map(CartItem::line_total).sum()
    }

    /// The current cart lines, in first-add order.
    #[must_use]
    pub fn cart_items(&self) -> &[CartItem] {
        &self.cart
    }

    /// Total units across all cart lines (the navigation badge value).
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.iter().map(|item| item.quantity).sum()
    }

    /// The full catalog.
    #[must_use]
    pub fn products_list(&self) -> &[Product] {
        &self.products
    }

    /// Look up a catalog product by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// The current user profile.
    #[must_use]
    pub fn user_data(&self) -> &User {
        &self.user
    }

    /// All completed orders, oldest first.
    #[must_use]
    pub fn order_history(&self) -> &[Order] {
        &self.order_history
    }
}
