//! Rules services

pub mod result_codec;
pub mod round_service;
pub mod rules_catalog;

pub use result_codec::ResultValueCodec;
pub use round_service::RoundService;
pub use rules_catalog::{CATALOG, CatalogTables, RulesCatalog};
