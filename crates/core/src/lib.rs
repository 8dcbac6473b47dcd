//! Palanca Core - Shared domain types and the storefront state container.
//!
//! This crate provides the types and state logic used by the Palanca
//! storefront:
//!
//! - [`types`] - Newtype wrappers for product ids and peso amounts
//! - [`domain`] - Catalog, cart, user, and order records
//! - [`store`] - The single source of truth holding all application state
//!
//! # Architecture
//!
//! The core crate contains only types and state transitions - no I/O, no
//! HTTP, no async. Every state change goes through a named [`Store`]
//! mutation, and every read for rendering goes through a named derived view,
//! so the web layer never touches the state directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod domain;
pub mod store;
pub mod types;

pub use domain::{CartItem, Order, Product, User, UserPatch};
pub use store::Store;
pub use types::{Money, ProductId};
