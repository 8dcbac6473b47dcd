//! Seeded product catalog.
//!
//! The demo shop sells four game controllers. The catalog is fixed at
//! startup and lives in code, like the rest of the startup content.

use palanca_core::{Money, Product, ProductId};

/// The products seeded into the store at startup.
#[must_use]
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "Control PS5".to_owned(),
            price: Money::new(300_000),
            description:
                "Control inalámbrico DualSense con retroalimentación háptica y gatillos adaptativos."
                    .to_owned(),
            image: "/static/images/products/control-ps5.svg".to_owned(),
        },
        Product {
            id: ProductId::new(2),
            name: "Control PS4".to_owned(),
            price: Money::new(250_000),
            description: "Control DualShock 4 con barra de luz y precisión mejorada.".to_owned(),
            image: "/static/images/products/control-ps4.svg".to_owned(),
        },
        Product {
            id: ProductId::new(3),
            name: "Control Xbox Series X".to_owned(),
            price: Money::new(320_000),
            description:
                "Control inalámbrico de Xbox con texturas antideslizantes y mapeo personalizado."
                    .to_owned(),
            image: "/static/images/products/control-xbox-series-x.svg".to_owned(),
        },
        Product {
            id: ProductId::new(4),
            name: "Control Xbox One".to_owned(),
            price: Money::new(270_000),
            description:
                "Control inalámbrico de Xbox One con diseño ergonómico y conexión Bluetooth."
                    .to_owned(),
            image: "/static/images/products/control-xbox-one.svg".to_owned(),
        },
    ]
}
