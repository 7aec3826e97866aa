use contracts::domain::a002_collection_point::UNSELECTED;
use leptos::prelude::*;

/// Labelled select whose first option is the unselected sentinel
#[component]
pub fn Select(
    /// Label text
    #[prop(into)]
    label: String,
    /// `id` and `name` of the select
    #[prop(into)]
    name: String,
    /// Text of the sentinel option, e.g. "Selecione uma UF"
    #[prop(into)]
    placeholder: String,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Options; value and label are the same string
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Change event handler
    on_change: Callback<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="field">
            <label for=name.clone()>{label}</label>
            <select
                id=name.clone()
                name=name
                required=required
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value=UNSELECTED>{placeholder}</option>
                <For
                    each=move || options.get()
                    key=|option| option.clone()
                    children=move |option| {
                        let current = option.clone();
                        let is_selected = move || value.with(|v| *v == current);
                        view! {
                            <option value=option.clone() selected=is_selected>
                                {option.clone()}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
