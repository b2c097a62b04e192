// Library for tests to access modules

pub mod analyzer;
pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod reporter;
pub mod sampler;
pub mod version;
