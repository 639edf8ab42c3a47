//! App Router

use salvo::Router;

use crate::{auth, carts, healthcheck, observability, products, reviews, wishlists};

/// Every route served by the API, without documentation or state.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(catalog_router())
        .push(
            Router::with_path("sessions/{session}")
                .push(cart_router())
                .push(wishlist_router()),
        )
        .push(admin_router())
}

fn catalog_router() -> Router {
    Router::with_path("products")
        .get(products::index::handler)
        .push(
            Router::with_path("{product}")
                .get(products::get::handler)
                .push(
                    Router::with_path("reviews")
                        .get(reviews::index::handler)
                        .post(reviews::create::handler),
                ),
        )
}

fn cart_router() -> Router {
    Router::with_path("cart")
        .get(carts::get::handler)
        .delete(carts::clear::handler)
        .push(
            Router::with_path("items")
                .get(carts::items::index::handler)
                .post(carts::items::create::handler)
                .push(
                    Router::with_path("{product}")
                        .put(carts::items::update::handler)
                        .delete(carts::items::delete::handler),
                ),
        )
}

fn wishlist_router() -> Router {
    Router::with_path("wishlist")
        .get(wishlists::get::handler)
        .post(wishlists::create::handler)
        .push(
            Router::with_path("{product}")
                .get(wishlists::check::handler)
                .delete(wishlists::delete::handler),
        )
}

fn admin_router() -> Router {
    Router::with_path("admin")
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("products")
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
}
