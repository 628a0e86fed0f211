pub mod providers;
pub mod repository;
