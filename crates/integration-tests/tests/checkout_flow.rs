//! Integration tests for checkout.
//!
//! A valid payment form snapshots the cart into an order, clears the cart,
//! and redirects home with the success flag; a form with any empty field
//! re-renders with the error notice and leaves the store untouched.

#![allow(clippy::expect_used)]

use axum::http::{StatusCode, header};
use palanca_integration_tests::{body_text, get, post_form, test_app};
use tower::ServiceExt;

const VALID_FORM: &str = "card_name=Ana&card_number=4111111111111111&expiration_date=2026-12&cvv=123";

#[tokio::test]
async fn test_checkout_page_shows_the_cart_total() {
    let app = test_app();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post_form("/cart/add", "product_id=1"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get("/checkout")).await.expect("response");
    let body = body_text(response).await;
    assert!(body.contains("Total: $ 600.000"));
}

#[tokio::test]
async fn test_valid_payment_places_an_order_and_clears_the_cart() {
    let app = test_app();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post_form("/cart/add", "product_id=1"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(post_form("/checkout", VALID_FORM))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .expect("location header"),
        "/?pedido=ok"
    );

    let cart = app.clone().oneshot(get("/cart")).await.expect("response");
    let body = body_text(cart).await;
    assert!(body.contains("El carrito está vacío"));

    let profile = app.oneshot(get("/profile")).await.expect("response");
    let body = body_text(profile).await;
    assert!(body.contains("Pedido 1 ("));
    assert!(body.contains("- Total: $ 600.000"));
    assert!(body.contains("Control PS5 (x2)"));
    assert!(!body.contains("No tienes pedidos registrados."));
}

#[tokio::test]
async fn test_missing_field_rerenders_with_the_error() {
    let app = test_app();

    let added = app
        .clone()
        .oneshot(post_form("/cart/add", "product_id=1"))
        .await
        .expect("response");
    assert_eq!(added.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(post_form(
            "/checkout",
            "card_name=Ana&card_number=4111111111111111&expiration_date=2026-12&cvv=",
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Por favor, completa todos los campos correctamente."));
    // The fields the user did fill come back.
    assert!(body.contains(r#"value="Ana""#));
    assert!(body.contains(r#"value="2026-12""#));

    // Neither the cart nor the order history moved.
    let count = app
        .clone()
        .oneshot(get("/cart/count"))
        .await
        .expect("response");
    assert_eq!(body_text(count).await.trim(), "1");

    let profile = app.oneshot(get("/profile")).await.expect("response");
    let body = body_text(profile).await;
    assert!(body.contains("No tienes pedidos registrados."));
}

#[tokio::test]
async fn test_empty_cart_still_checks_out() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_form("/checkout", VALID_FORM))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let profile = app.oneshot(get("/profile")).await.expect("response");
    let body = body_text(profile).await;
    assert!(body.contains("Pedido 1 ("));
    assert!(body.contains("- Total: $ 0"));
}

#[tokio::test]
async fn test_orders_accumulate_in_placement_order() {
    let app = test_app();

    for product_id in ["product_id=2", "product_id=3"] {
        let added = app
            .clone()
            .oneshot(post_form("/cart/add", product_id))
            .await
            .expect("response");
        assert_eq!(added.status(), StatusCode::OK);

        let placed = app
            .clone()
            .oneshot(post_form("/checkout", VALID_FORM))
            .await
            .expect("response");
        assert_eq!(placed.status(), StatusCode::SEE_OTHER);
    }

    let profile = app.oneshot(get("/profile")).await.expect("response");
    let body = body_text(profile).await;
    assert!(body.contains("Pedido 1 ("));
    assert!(body.contains("Pedido 2 ("));
    assert!(body.contains("- Total: $ 250.000"));
    assert!(body.contains("- Total: $ 320.000"));
    assert!(body.contains("Control PS4 (x1)"));
    assert!(body.contains("Control Xbox Series X (x1)"));
}
