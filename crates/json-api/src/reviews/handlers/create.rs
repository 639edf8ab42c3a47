//! Submit Review Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_app::domain::reviews::data::NewReview;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, handlers::ReviewResponse},
    state::State,
};

/// Submit Review Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateReviewRequest {
    pub customer_name: String,

    /// Whole stars, 1 to 5
    pub rating: i64,

    #[serde(default)]
    pub comment: Option<String>,
}

impl From<CreateReviewRequest> for NewReview {
    fn from(request: CreateReviewRequest) -> Self {
        NewReview {
            customer_name: request.customer_name,
            rating: request.rating,
            comment: request.comment,
        }
    }
}

/// Submit Review Handler
///
/// Stores the review and refreshes the product's rating summary.
#[endpoint(
    tags("reviews"),
    summary = "Submit Review",
    responses(
        (status_code = StatusCode::CREATED, description = "Review stored"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "reviews.create",
    skip(product, json, depot, res),
    fields(product_uuid = tracing::field::Empty, rating = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<CreateReviewRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = product.into_inner();
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("product_uuid", tracing::field::display(product));
    span.record("rating", request.rating);

    let review = state
        .app
        .reviews
        .submit_review(product.into(), request.into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    tracing::info!(product_uuid = %product, review_uuid = %review.uuid, "stored review");

    Ok(Json(review.into()))
}
