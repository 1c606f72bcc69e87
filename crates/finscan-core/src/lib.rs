//! Core types and operations for the finscan seafood lookup tool.
//!
//! This crate is deliberately free of database dependencies. It owns the
//! catalog, the scoring engine, and the persisted collections manager; storage
//! backends plug in through the [`store::StateStore`] trait.

pub mod catalog;
pub mod catch;
pub mod collections;
pub mod error;
pub mod geo;
pub mod memory;
pub mod role;
pub mod scan;
pub mod score;
pub mod seafood;
pub mod store;

mod seed;

pub use catalog::{Catalog, Resolution};
pub use collections::{CollectionKind, Collections};
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use store::StateStore;
