//! Wishlists

pub mod errors;
mod memory;
pub mod records;
mod repository;
pub mod service;

pub use errors::WishlistsServiceError;
pub use memory::MemoryWishlistsService;
pub use service::*;
