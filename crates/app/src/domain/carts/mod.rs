//! Carts

pub mod data;
pub mod errors;
mod memory;
pub mod records;
mod repository;
pub mod service;

pub use errors::CartsServiceError;
pub use memory::MemoryCartsService;
pub use service::*;
