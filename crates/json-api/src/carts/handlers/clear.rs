//! Clear Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use atelier_app::sessions::SessionId;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Cart Cleared Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartClearedResponse {
    /// Number of lines removed
    pub removed: u64,
}

/// Clear Cart Handler
///
/// Empties the session's cart. Clearing an empty cart succeeds.
#[endpoint(tags("carts"), summary = "Clear Cart")]
pub(crate) async fn handler(
    session: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartClearedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let session = SessionId::from(session.into_inner());

    let removed = state
        .app
        .carts
        .clear(session)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartClearedResponse { removed }))
}
