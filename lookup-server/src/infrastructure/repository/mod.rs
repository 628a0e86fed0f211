pub mod boxapi_repository;
