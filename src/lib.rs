pub mod api;
pub mod args;
pub mod beatmap;
pub mod database;
pub mod error;
pub mod ingestion;
pub mod model;
pub mod performance;
pub mod report;
pub mod utils;
