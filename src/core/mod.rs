pub mod batch;
pub mod config;
pub mod download;
pub mod extensions;
pub mod registry;
pub mod report;
