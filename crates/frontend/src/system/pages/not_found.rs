use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::header::Header;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div id="page-not-found">
            <Header back_link=true />
            <h1>"Página não encontrada"</h1>
            <A href="/create-point">"Cadastrar um ponto de coleta"</A>
        </div>
    }
}
