pub mod client;
pub mod errors;
pub mod instagram;
pub mod types;
pub mod utils;

pub use client::BoxApi;
