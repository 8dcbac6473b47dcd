//! Domain records held by the store.
//!
//! These are plain data types; the rules governing how they change live in
//! [`crate::store`].

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::CartItem;
pub use order::Order;
pub use product::Product;
pub use user::{User, UserPatch};
