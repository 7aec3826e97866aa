use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::config::use_config;
use crate::shared::icons::icon;

/// Page header: Ecoleta logo, an optional title and an optional link back
/// to the home page.
#[component]
pub fn Header(
    /// Title shown next to the logo
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Show the "Voltar para a home" link
    #[prop(optional)]
    back_link: bool,
) -> impl IntoView {
    let config = use_config();

    view! {
        <header class="header">
            <img class="header__logo" src=config.logo_src alt="Ecoleta" />
            {move || title.get().map(|t| view! { <h1 class="header__title">{t}</h1> })}
            {back_link.then(|| view! {
                <A href="/">
                    {icon("arrow-left")}
                    "Voltar para a home"
                </A>
            })}
        </header>
    }
}
