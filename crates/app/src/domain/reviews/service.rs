//! Reviews service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        products::records::ProductUuid,
        reviews::{
            data::NewReview,
            errors::ReviewsServiceError,
            records::{ReviewRecord, ReviewUuid},
            repository::PgReviewsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgReviewsService {
    db: Db,
    repository: PgReviewsRepository,
}

impl PgReviewsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgReviewsRepository::new(),
        }
    }
}

#[async_trait]
impl ReviewsService for PgReviewsService {
    async fn list_reviews(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<ReviewRecord>, ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        let reviews = self.repository.list_reviews(&mut tx, product).await?;

        tx.commit().await?;

        Ok(reviews)
    }

    async fn submit_review(
        &self,
        product: ProductUuid,
        review: NewReview,
    ) -> Result<ReviewRecord, ReviewsServiceError> {
        let review = review.validate()?;

        let mut tx = self.db.begin().await?;

        // Serialises concurrent submissions for the same product so the
        // summary always matches the committed review set.
        if !self.repository.lock_product(&mut tx, product).await? {
            return Err(ReviewsServiceError::NotFound);
        }

        let created = self
            .repository
            .create_review(&mut tx, ReviewUuid::new(), product, review)
            .await?;

        self.repository
            .refresh_product_rating(&mut tx, product)
            .await?;

        tx.commit().await?;

        debug!(product = %product, review = %created.uuid, "refreshed product rating");

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// All reviews of a product, newest first.
    async fn list_reviews(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<ReviewRecord>, ReviewsServiceError>;

    /// Store a review and recompute the product's average rating and review
    /// count in the same unit of work.
    async fn submit_review(
        &self,
        product: ProductUuid,
        review: NewReview,
    ) -> Result<ReviewRecord, ReviewsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::{
            carts::{CartsService, data::NewCartItem},
            pricing::enrich_cart,
            products::{ProductsService, data::ProductFields},
            reviews::ReviewValidationError,
        },
        sessions::SessionId,
        test::{
            TestContext, backend_tests,
            helpers::{create_painting, new_review, painting_fields},
        },
    };

    use super::*;

    backend_tests!(
        submit_review_updates_rating_summary,
        submit_review_unknown_product_returns_not_found,
        submit_review_deleted_product_returns_not_found,
        submit_review_rejects_out_of_range_rating,
        submit_review_rejects_empty_customer_name,
        submit_review_stores_blank_comment_as_none,
        list_reviews_newest_first,
        list_reviews_empty_for_unreviewed_product,
        admin_update_keeps_rating_summary,
        storefront_session_scenario,
    );

    async fn submit_review_updates_rating_summary(ctx: TestContext) -> TestResult {
        let product = create_painting(&ctx, "PNT-1", 1_000).await?;

        ctx.reviews
            .submit_review(product.uuid, new_review("Ada", 5))
            .await?;
        ctx.reviews
            .submit_review(product.uuid, new_review("Grace", 4))
            .await?;
        ctx.reviews
            .submit_review(product.uuid, new_review("Edsger", 2))
            .await?;

        let product = ctx.products.get_product(product.uuid).await?;

        assert_eq!(product.total_reviews, 3);
        assert!(
            (product.average_rating - 11.0 / 3.0).abs() < 1e-9,
            "unexpected average {}",
            product.average_rating
        );

        Ok(())
    }

    async fn submit_review_unknown_product_returns_not_found(ctx: TestContext) -> TestResult {
        let product = ProductUuid::new();

        let result = ctx
            .reviews
            .submit_review(product, new_review("Ada", 5))
            .await;

        assert!(
            matches!(result, Err(ReviewsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
        assert!(ctx.reviews.list_reviews(product).await?.is_empty());

        Ok(())
    }

    async fn submit_review_deleted_product_returns_not_found(ctx: TestContext) -> TestResult {
        let product = create_painting(&ctx, "PNT-1", 1_000).await?;

        ctx.products.delete_product(product.uuid).await?;

        let result = ctx
            .reviews
            .submit_review(product.uuid, new_review("Ada", 5))
            .await;

        assert!(
            matches!(result, Err(ReviewsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    async fn submit_review_rejects_out_of_range_rating(ctx: TestContext) -> TestResult {
        let product = create_painting(&ctx, "PNT-1", 1_000).await?;

        for rating in [0, 6] {
            let result = ctx
                .reviews
                .submit_review(product.uuid, new_review("Ada", rating))
                .await;

            assert!(
                matches!(
                    result,
                    Err(ReviewsServiceError::Validation(
                        ReviewValidationError::RatingOutOfRange(_)
                    ))
                ),
                "expected RatingOutOfRange, got {result:?}"
            );
        }

        let product = ctx.products.get_product(product.uuid).await?;

        assert_eq!(product.total_reviews, 0);
        assert!(product.average_rating.abs() < f64::EPSILON);
        assert!(ctx.reviews.list_reviews(product.uuid).await?.is_empty());

        Ok(())
    }

    async fn submit_review_rejects_empty_customer_name(ctx: TestContext) -> TestResult {
        let product = create_painting(&ctx, "PNT-1", 1_000).await?;

        let result = ctx
            .reviews
            .submit_review(product.uuid, new_review("  ", 4))
            .await;

        assert!(
            matches!(
                result,
                Err(ReviewsServiceError::Validation(
                    ReviewValidationError::EmptyCustomerName
                ))
            ),
            "expected EmptyCustomerName, got {result:?}"
        );

        Ok(())
    }

    async fn submit_review_stores_blank_comment_as_none(ctx: TestContext) -> TestResult {
        let product = create_painting(&ctx, "PNT-1", 1_000).await?;

        let review = ctx
            .reviews
            .submit_review(
                product.uuid,
                NewReview {
                    comment: Some("   ".to_string()),
                    ..new_review("Ada", 4)
                },
            )
            .await?;

        assert_eq!(review.comment, None);
        assert_eq!(review.rating.get(), 4);

        Ok(())
    }

    async fn list_reviews_newest_first(ctx: TestContext) -> TestResult {
        let product = create_painting(&ctx, "PNT-1", 1_000).await?;

        let older = ctx
            .reviews
            .submit_review(product.uuid, new_review("Ada", 5))
            .await?;
        let newer = ctx
            .reviews
            .submit_review(product.uuid, new_review("Grace", 3))
            .await?;

        let reviews = ctx.reviews.list_reviews(product.uuid).await?;
        let uuids: Vec<ReviewUuid> = reviews.iter().map(|review| review.uuid).collect();

        assert_eq!(uuids, vec![newer.uuid, older.uuid]);

        Ok(())
    }

    async fn list_reviews_empty_for_unreviewed_product(ctx: TestContext) -> TestResult {
        let product = create_painting(&ctx, "PNT-1", 1_000).await?;

        assert!(ctx.reviews.list_reviews(product.uuid).await?.is_empty());

        Ok(())
    }

    async fn admin_update_keeps_rating_summary(ctx: TestContext) -> TestResult {
        let product = create_painting(&ctx, "PNT-1", 1_000).await?;

        ctx.reviews
            .submit_review(product.uuid, new_review("Ada", 3))
            .await?;

        let updated = ctx
            .products
            .update_product(
                product.uuid,
                ProductFields {
                    price: 1_200,
                    ..painting_fields("PNT-1", 1_000)
                },
            )
            .await?;

        assert_eq!(updated.total_reviews, 1);
        assert!((updated.average_rating - 3.0).abs() < f64::EPSILON);

        Ok(())
    }

    async fn storefront_session_scenario(ctx: TestContext) -> TestResult {
        let session = SessionId::from("abc");
        let product = create_painting(&ctx, "PNT-1", 50).await?;

        let add = |quantity| NewCartItem {
            product_uuid: product.uuid,
            quantity: Some(quantity),
            selected_size: None,
            selected_frame: None,
        };

        ctx.carts.add_item(session.clone(), add(2)).await?;

        let cart = enrich_cart(
            ctx.carts.list_items(session.clone()).await?,
            &ctx.products.get_products(vec![product.uuid]).await?,
        );

        assert_eq!(cart.subtotal, 100);

        ctx.carts.add_item(session.clone(), add(1)).await?;

        let lines = ctx.carts.list_items(session.clone()).await?;

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 3);

        let cart = enrich_cart(
            lines,
            &ctx.products.get_products(vec![product.uuid]).await?,
        );

        assert_eq!(cart.subtotal, 150);

        let removed = ctx
            .carts
            .set_quantity(session.clone(), product.uuid, 0)
            .await?;

        assert!(removed.is_none());
        assert!(ctx.carts.list_items(session).await?.is_empty());

        ctx.reviews
            .submit_review(product.uuid, new_review("Ada", 5))
            .await?;
        ctx.reviews
            .submit_review(product.uuid, new_review("Grace", 3))
            .await?;

        let product = ctx.products.get_product(product.uuid).await?;

        assert_eq!(product.total_reviews, 2);
        assert!((product.average_rating - 4.0).abs() < f64::EPSILON);

        Ok(())
    }
}
