//! Catalog product record.

use serde::{Deserialize, Serialize};

use crate::types::{Money, ProductId};

/// A product in the catalog.
///
/// The catalog is seeded once at process start and never mutated afterwards;
/// everything else (cart lines, order lines) copies these fields rather than
/// referencing back into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, immutable catalog id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in whole pesos.
    pub price: Money,
    /// Short description shown on the catalog page.
    pub description: String,
    /// Image path under the static file root. A broken path degrades to the
    /// image's alt text; nothing else depends on the file existing.
    pub image: String,
}
