pub mod geo;
pub mod request_guard;
