//! Shared storefront domain and persistence modules.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod memory;
pub mod sessions;

#[cfg(test)]
mod test;

mod uuids;
