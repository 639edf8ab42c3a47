use atelier_app::domain::{
    pricing::effective_unit_price,
    products::{PgProductsService, ProductsService},
};
use clap::Args;

use super::KindArg;

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Only list products of this kind
    #[arg(long, value_enum)]
    kind: Option<KindArg>,
}

pub(crate) async fn run(args: ListProductsArgs) -> Result<(), String> {
    let db = crate::cli::connect(&args.database_url).await?;
    let service = PgProductsService::new(db);

    let products = service
        .list_products(args.kind.map(Into::into))
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products found");
        return Ok(());
    }

    for product in products {
        println!("product_uuid: {}", product.uuid);
        println!("sku: {}", product.sku);
        println!("kind: {}", product.kind());
        println!("title: {}", product.title);
        println!("price: {}", effective_unit_price(&product));
        println!(
            "rating: {:.1} ({} reviews)",
            product.average_rating, product.total_reviews
        );
        println!();
    }

    Ok(())
}
