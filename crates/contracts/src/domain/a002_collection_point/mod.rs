//! Collection point registration: the form's state machine and the
//! multipart payload posted to `POST /points`.

pub mod form;
pub mod payload;

pub use form::{AddressStage, FormError, PointFormState, RequiredField, UfChange, UNSELECTED};
pub use payload::{MultipartField, IMAGE_FIELD};
