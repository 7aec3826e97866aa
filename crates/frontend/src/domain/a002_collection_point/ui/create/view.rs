use super::view_model::CreatePointViewModel;
use crate::domain::a001_item::ui::ItemSelector;
use crate::layout::header::Header;
use crate::shared::components::file_dropzone::FileDropzone;
use crate::shared::components::map_picker::MapPicker;
use crate::shared::components::ui::{Input, Select};
use crate::shared::config::use_config;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use std::rc::Rc;
use thaw::*;

#[component]
pub fn CreatePoint() -> impl IntoView {
    let vm = CreatePointViewModel::new(use_config());
    vm.init();
    on_cleanup(move || vm.abort_city_request());

    let navigate = use_navigate();
    let on_created: Rc<dyn Fn()> = Rc::new(move || navigate("/", Default::default()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit(on_created.clone());
    };

    view! {
        <div id="page-create-point">
            <Header back_link=true />

            <form on:submit=on_submit>
                <h1>"Cadastro do " <br /> "ponto de coleta"</h1>

                {move || vm.error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <span>{e}</span>
                    </MessageBar>
                })}

                <FileDropzone on_file=Callback::new(move |file| vm.set_file(file)) />

                <fieldset>
                    <legend>
                        <h2>"Dados"</h2>
                    </legend>

                    <Input
                        label="Nome da entidade"
                        name="name"
                        value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                        on_input=Callback::new(move |v| vm.form.update(|f| f.name = v))
                        required=true
                    />

                    <div class="field-group">
                        <Input
                            label="E-mail"
                            name="email"
                            input_type="email"
                            value=Signal::derive(move || vm.form.with(|f| f.email.clone()))
                            on_input=Callback::new(move |v| vm.form.update(|f| f.email = v))
                            required=true
                        />
                        <Input
                            label="Whatsapp"
                            name="whatsapp"
                            input_type="tel"
                            value=Signal::derive(move || vm.form.with(|f| f.whatsapp.clone()))
                            on_input=Callback::new(move |v| vm.form.update(|f| f.whatsapp = v))
                            required=true
                        />
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Endereço"</h2>
                        <span>"Selecione o endereço no mapa"</span>
                    </legend>

                    <MapPicker
                        center=vm.map_center
                        selected=Signal::derive(move || vm.selected_position())
                        on_select=Callback::new(move |position| vm.set_position(position))
                    />

                    <div class="field-group">
                        <Select
                            label="Estado (UF)"
                            name="uf"
                            placeholder="Selecione uma UF"
                            value=Signal::derive(move || vm.form.with(|f| f.selected_uf().to_string()))
                            options=vm.ufs
                            on_change=Callback::new(move |uf| vm.select_uf(uf))
                            required=true
                        />
                        <Select
                            label="Cidade"
                            name="city"
                            placeholder="Selecione uma cidade"
                            value=Signal::derive(move || vm.form.with(|f| f.selected_city().to_string()))
                            options=Signal::derive(move || vm.cities.with(|c| c.names().to_vec()))
                            on_change=Callback::new(move |city| vm.select_city(city))
                            required=true
                        />
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Ítens de coleta"</h2>
                        <span>"Selecione um ou mais ítens abaixo"</span>
                    </legend>

                    <ItemSelector
                        items=vm.items
                        loading=vm.items_loading
                        is_selected=Callback::new(move |id| vm.is_item_selected(id))
                        on_toggle=Callback::new(move |id| vm.toggle_item(id))
                    />
                </fieldset>

                <button type="submit" disabled=move || vm.is_submitting.get()>
                    {move || if vm.is_submitting.get() { "Cadastrando..." } else { "Cadastrar ponto de coleta" }}
                </button>
            </form>
        </div>
    }
}
