//! Review Handlers

pub(crate) mod create;
pub(crate) mod index;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atelier_app::domain::reviews::records::ReviewRecord;

/// Review Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewResponse {
    pub uuid: Uuid,
    pub product_uuid: Uuid,
    pub customer_name: String,

    /// Whole stars, 1 to 5
    pub rating: u8,

    pub comment: Option<String>,

    /// The date and time the review was submitted
    pub created_at: String,
}

impl From<ReviewRecord> for ReviewResponse {
    fn from(review: ReviewRecord) -> Self {
        Self {
            uuid: review.uuid.into(),
            product_uuid: review.product_uuid.into(),
            customer_name: review.customer_name,
            rating: review.rating.get(),
            comment: review.comment,
            created_at: review.created_at.to_string(),
        }
    }
}
