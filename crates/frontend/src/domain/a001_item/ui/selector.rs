use contracts::domain::a001_item::{Item, ItemId};
use leptos::prelude::*;
use thaw::*;

/// Item catalog as a toggle grid
#[component]
pub fn ItemSelector(
    /// Catalog to show
    #[prop(into)]
    items: Signal<Vec<Item>>,
    /// Whether the catalog is still loading
    #[prop(into)]
    loading: Signal<bool>,
    /// Selection lookup
    #[prop(into)]
    is_selected: Callback<ItemId, bool>,
    /// Called with the clicked item's id
    on_toggle: Callback<ItemId>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <Spinner size=SpinnerSize::Small /> }
        >
            <ul class="items-grid">
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item| {
                        let id = item.id;
                        view! {
                            <li
                                class=move || if is_selected.run(id) { "selected" } else { "" }
                                on:click=move |_| on_toggle.run(id)
                            >
                                <img src=item.image_url alt=item.title.clone() />
                                <span>{item.title}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}
