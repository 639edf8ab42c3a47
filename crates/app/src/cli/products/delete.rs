use atelier_app::domain::products::{PgProductsService, ProductsService, records::ProductUuid};
use clap::Args;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct DeleteProductArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Product to delete
    #[arg(long)]
    uuid: Uuid,
}

pub(crate) async fn run(args: DeleteProductArgs) -> Result<(), String> {
    let db = crate::cli::connect(&args.database_url).await?;
    let service = PgProductsService::new(db);

    service
        .delete_product(ProductUuid::from_uuid(args.uuid))
        .await
        .map_err(|error| format!("failed to delete product: {error}"))?;

    println!("deleted product: {}", args.uuid);

    Ok(())
}
