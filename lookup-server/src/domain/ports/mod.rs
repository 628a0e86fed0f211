pub mod ip_info;
pub mod profile;
