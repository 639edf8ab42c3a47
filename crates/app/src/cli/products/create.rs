use atelier_app::domain::products::{
    PgProductsService, ProductsService,
    data::{NewProduct, ProductFields},
    records::{ProductDetails, ProductKind, ProductUuid},
};
use clap::Args;
use uuid::Uuid;

use super::KindArg;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional product UUID; generated when omitted
    #[arg(long)]
    uuid: Option<Uuid>,

    #[arg(long, value_enum)]
    kind: KindArg,

    #[arg(long)]
    sku: String,

    #[arg(long)]
    title: String,

    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    image_url: Option<String>,

    #[arg(long)]
    category: Option<String>,

    /// Base price in minor currency units
    #[arg(long)]
    price: u64,

    /// Sale price in minor currency units
    #[arg(long)]
    sale_price: Option<u64>,

    /// Painting medium
    #[arg(long)]
    medium: Option<String>,

    /// Mark a painting as already sold
    #[arg(long)]
    sold: bool,

    /// Smallest order quantity for a corporate gift
    #[arg(long, default_value_t = 1)]
    min_quantity: u32,

    /// Largest order quantity for a corporate gift
    #[arg(long)]
    max_quantity: Option<u32>,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    let db = crate::cli::connect(&args.database_url).await?;
    let service = PgProductsService::new(db);

    let details = match ProductKind::from(args.kind) {
        ProductKind::Painting => ProductDetails::Painting {
            sold: args.sold,
            medium: args.medium,
        },
        ProductKind::CorporateGift => ProductDetails::CorporateGift {
            min_quantity: args.min_quantity,
            max_quantity: args.max_quantity,
        },
    };

    let product = service
        .create_product(NewProduct {
            uuid: args.uuid.map_or_else(ProductUuid::new, ProductUuid::from_uuid),
            fields: ProductFields {
                sku: args.sku,
                title: args.title,
                description: args.description,
                image_url: args.image_url,
                category: args.category,
                price: args.price,
                sale_price: args.sale_price,
                details,
            },
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("sku: {}", product.sku);
    println!("kind: {}", product.kind());

    Ok(())
}
