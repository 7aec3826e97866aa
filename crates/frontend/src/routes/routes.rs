use crate::domain::a002_collection_point::ui::create::CreatePoint;
use crate::system::pages::{HomePage, NotFoundPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/create-point") view=CreatePoint />
            </Routes>
        </Router>
    }
}
