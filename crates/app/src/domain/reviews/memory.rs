//! In-memory reviews service.

use async_trait::async_trait;
use jiff::Timestamp;

use crate::{
    domain::{
        products::records::ProductUuid,
        reviews::{
            data::NewReview,
            errors::ReviewsServiceError,
            records::{ReviewRecord, ReviewUuid},
            service::ReviewsService,
        },
    },
    memory::MemoryStore,
};

#[derive(Debug, Clone)]
pub struct MemoryReviewsService {
    store: MemoryStore,
}

impl MemoryReviewsService {
    #[must_use]
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReviewsService for MemoryReviewsService {
    async fn list_reviews(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<ReviewRecord>, ReviewsServiceError> {
        let tables = self.store.read().await;

        let mut reviews: Vec<ReviewRecord> = tables
            .reviews
            .iter()
            .filter(|review| review.product_uuid == product)
            .cloned()
            .collect();

        reviews.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.uuid.cmp(&a.uuid))
        });

        Ok(reviews)
    }

    async fn submit_review(
        &self,
        product: ProductUuid,
        review: NewReview,
    ) -> Result<ReviewRecord, ReviewsServiceError> {
        let review = review.validate()?;

        let mut tables = self.store.write().await;

        if tables.live_product(product).is_none() {
            return Err(ReviewsServiceError::NotFound);
        }

        let created = ReviewRecord {
            uuid: ReviewUuid::new(),
            product_uuid: product,
            customer_name: review.customer_name,
            rating: review.rating,
            comment: review.comment,
            created_at: Timestamp::now(),
        };

        tables.reviews.push(created.clone());

        let (count, sum) = tables
            .reviews
            .iter()
            .filter(|review| review.product_uuid == product)
            .fold((0_u32, 0_u32), |(count, sum), review| {
                (
                    count.saturating_add(1),
                    sum.saturating_add(u32::from(review.rating.get())),
                )
            });

        if let Some(record) = tables.products.get_mut(&product) {
            record.total_reviews = u64::from(count);
            record.average_rating = f64::from(sum) / f64::from(count);
        }

        Ok(created)
    }
}
