//! Products

pub mod data;
pub mod errors;
mod memory;
pub mod records;
mod repository;
pub mod service;

pub use errors::{ProductValidationError, ProductsServiceError};
pub use memory::MemoryProductsService;
pub use service::*;
