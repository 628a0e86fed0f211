pub mod ip_info_service;
pub mod profile_service;
