pub mod api_utils;
pub mod components;
pub mod config;
pub mod geolocation;
pub mod ibge;
pub mod icons;
