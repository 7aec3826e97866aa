//! Create collection point page
//!
//! - view_model.rs: form state, API commands, city lookup cancellation
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CreatePoint;
pub use view_model::CreatePointViewModel;
