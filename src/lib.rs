pub mod classifier;
pub mod cli;
pub mod config;
pub mod export;
pub mod mapper;
pub mod model;
pub mod normalizer;
pub mod parser;
pub mod pipeline;
pub mod reconciler;
pub mod source;
pub mod utils;
