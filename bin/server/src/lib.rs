pub mod api;
pub mod cli;
pub mod http;
pub mod model;
pub mod opts;
