use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement, Url};

use crate::shared::icons::icon;

fn first_image(files: Option<web_sys::FileList>) -> Option<File> {
    let file = files?.get(0)?;
    if file.type_().starts_with("image/") {
        Some(file)
    } else {
        log::warn!("Ignoring non-image file '{}' ({})", file.name(), file.type_());
        None
    }
}

/// Single image picker with drag and drop and a preview
#[component]
pub fn FileDropzone(
    /// Called with the chosen image
    on_file: Callback<File>,
    /// Placeholder text when nothing is chosen
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let preview_url = RwSignal::new(Option::<String>::None);
    let drag_over = RwSignal::new(false);

    let accept = move |file: File| {
        let url = Url::create_object_url_with_blob(&file).ok();
        if let Some(previous) = preview_url.get_untracked() {
            let _ = Url::revoke_object_url(&previous);
        }
        preview_url.set(url);
        on_file.run(file);
    };

    on_cleanup(move || {
        if let Some(url) = preview_url.get_untracked() {
            let _ = Url::revoke_object_url(&url);
        }
    });

    let on_change = move |ev: leptos::ev::Event| {
        let files = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files());
        if let Some(file) = first_image(files) {
            accept(file);
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_over.set(false);
        if let Some(file) = first_image(ev.data_transfer().and_then(|dt| dt.files())) {
            accept(file);
        }
    };

    view! {
        <label
            class=move || if drag_over.get() { "dropzone dropzone--active" } else { "dropzone" }
            on:dragover=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                drag_over.set(true);
            }
            on:dragleave=move |_| drag_over.set(false)
            on:drop=on_drop
        >
            <input type="file" accept="image/*" on:change=on_change />
            {move || match preview_url.get() {
                Some(url) => view! { <img src=url alt="Preview" /> }.into_any(),
                None => view! {
                    <p>
                        {icon("upload")}
                        {placeholder.get().unwrap_or_else(|| "Imagem do estabelecimento".to_string())}
                    </p>
                }.into_any(),
            }}
        </label>
    }
}
