//! Geography: coordinates, the Web Mercator tile math used by the map
//! picker, and the IBGE locality DTOs.

pub mod ibge;
pub mod lat_lng;
pub mod mercator;

pub use lat_lng::LatLng;
