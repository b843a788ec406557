pub mod database;
pub mod enrichment;
pub mod repositories;
