use atelier_app::domain::products::records::ProductKind;
use clap::{Args, Subcommand, ValueEnum};

mod create;
mod delete;
mod list;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    Create(create::CreateProductArgs),
    List(list::ListProductsArgs),
    Delete(delete::DeleteProductArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Painting,
    CorporateGift,
}

impl From<KindArg> for ProductKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Painting => Self::Painting,
            KindArg::CorporateGift => Self::CorporateGift,
        }
    }
}

pub(crate) async fn run(command: ProductsCommand) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::Create(args) => create::run(args).await,
        ProductsSubcommand::List(args) => list::run(args).await,
        ProductsSubcommand::Delete(args) => delete::run(args).await,
    }
}
