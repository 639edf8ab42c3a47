//! Reviews

pub mod data;
pub mod errors;
mod memory;
pub mod records;
mod repository;
pub mod service;

pub use errors::{ReviewValidationError, ReviewsServiceError};
pub use memory::MemoryReviewsService;
pub use service::*;
