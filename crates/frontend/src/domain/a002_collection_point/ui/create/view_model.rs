use contracts::domain::a001_item::{Item, ItemId};
use contracts::domain::a002_collection_point::{PointFormState, UfChange};
use contracts::shared::geo::ibge::CityList;
use contracts::shared::geo::LatLng;
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, File};

use crate::domain::a001_item::api::fetch_items;
use crate::domain::a002_collection_point::api::{build_form_data, create_point};
use crate::shared::api_utils::FetchError;
use crate::shared::config::AppConfig;
use crate::shared::geolocation::current_position;
use crate::shared::ibge::api::{fetch_cities, fetch_ufs};

/// ViewModel of the create-point page.
///
/// Owns the form state; child views get read signals and update callbacks
/// built from its commands.
#[derive(Clone, Copy)]
pub struct CreatePointViewModel {
    pub form: RwSignal<PointFormState<File>, LocalStorage>,
    pub items: RwSignal<Vec<Item>>,
    pub items_loading: RwSignal<bool>,
    pub ufs: RwSignal<Vec<String>>,
    pub cities: RwSignal<CityList>,
    /// Where the map is centered; follows geolocation once it answers
    pub map_center: RwSignal<LatLng>,
    pub error: RwSignal<Option<String>>,
    pub is_submitting: RwSignal<bool>,
    config: StoredValue<AppConfig>,
    city_request: StoredValue<Option<AbortController>, LocalStorage>,
}

impl CreatePointViewModel {
    pub fn new(config: AppConfig) -> Self {
        Self {
            form: RwSignal::new_local(PointFormState::new()),
            items: RwSignal::new(Vec::new()),
            items_loading: RwSignal::new(true),
            ufs: RwSignal::new(Vec::new()),
            cities: RwSignal::new(CityList::new()),
            map_center: RwSignal::new(config.default_center),
            error: RwSignal::new(None),
            is_submitting: RwSignal::new(false),
            config: StoredValue::new(config),
            city_request: StoredValue::new_local(None),
        }
    }

    /// Page mount: catalog, UF list and initial map position
    pub fn init(&self) {
        self.load_items();
        self.load_ufs();
        self.locate();
    }

    fn load_items(&self) {
        let config = self.config.get_value();
        let items = self.items;
        let loading = self.items_loading;
        spawn_local(async move {
            match fetch_items(&config).await {
                Ok(list) => {
                    log::debug!("Loaded {} items", list.len());
                    items.set(list);
                }
                Err(e) => log::warn!("{}", e),
            }
            loading.set(false);
        });
    }

    fn load_ufs(&self) {
        let config = self.config.get_value();
        let ufs = self.ufs;
        spawn_local(async move {
            match fetch_ufs(&config).await {
                Ok(list) => ufs.set(list),
                Err(e) => log::warn!("Failed to fetch UFs: {}", e),
            }
        });
    }

    fn locate(&self) {
        let map_center = self.map_center;
        spawn_local(async move {
            match current_position().await {
                Ok(position) => map_center.set(position),
                Err(e) => log::warn!("{}", e),
            }
        });
    }

    // ------------------------------------------------------------------
    // Address
    // ------------------------------------------------------------------

    pub fn select_uf(&self, uf: String) {
        let change = self
            .form
            .try_update(|f| f.select_uf(&uf))
            .unwrap_or(UfChange::Unchanged);

        match change {
            UfChange::Unchanged => {}
            UfChange::Cleared => {
                self.abort_city_request();
                self.cities.update(|c| c.clear());
            }
            UfChange::FetchCities(uf) => self.load_cities(uf),
        }
    }

    /// Cancel the in-flight lookup and start a new one for `uf`
    fn load_cities(&self, uf: String) {
        self.abort_city_request();

        let controller = AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());
        self.city_request.set_value(controller);

        let Some(ticket) = self.cities.try_update(|c| c.begin(&uf)) else {
            return;
        };
        log::debug!("Fetching cities of {}", uf);

        let config = self.config.get_value();
        let cities = self.cities;
        spawn_local(async move {
            match fetch_cities(&config, &uf, signal.as_ref()).await {
                Ok(names) => {
                    let applied = cities
                        .try_update(|c| c.resolve(ticket, names))
                        .unwrap_or(false);
                    if !applied {
                        log::debug!("Dropping stale city list of {}", uf);
                    }
                }
                Err(FetchError::Aborted) => log::debug!("City lookup of {} aborted", uf),
                Err(FetchError::Failed(e)) => log::warn!("Failed to fetch cities of {}: {}", uf, e),
            }
        });
    }

    pub fn abort_city_request(&self) {
        self.city_request.update_value(|request| {
            if let Some(controller) = request.take() {
                controller.abort();
            }
        });
    }

    pub fn select_city(&self, city: String) {
        self.form.update(|f| {
            f.select_city(&city);
        });
    }

    pub fn selected_position(&self) -> Option<LatLng> {
        self.form.with(|f| f.has_position().then(|| f.position()))
    }

    pub fn set_position(&self, position: LatLng) {
        self.form.update(|f| f.set_position(position));
    }

    // ------------------------------------------------------------------
    // Items and image
    // ------------------------------------------------------------------

    pub fn is_item_selected(&self, id: ItemId) -> bool {
        self.form.with(|f| f.is_item_selected(id))
    }

    pub fn toggle_item(&self, id: ItemId) {
        self.form.update(|f| {
            f.toggle_item(id);
        });
    }

    pub fn set_file(&self, file: File) {
        log::debug!("Image attached: {} ({} bytes)", file.name(), file.size());
        self.form.update(|f| {
            f.set_file(Some(file));
        });
    }

    // ------------------------------------------------------------------
    // Submit
    // ------------------------------------------------------------------

    /// Validate, post the multipart body once and call `on_created` on
    /// success. Failures stay on the page with the form intact.
    pub fn submit(&self, on_created: Rc<dyn Fn()>) {
        if self.is_submitting.get_untracked() {
            return;
        }

        let body = self.form.with_untracked(|f| {
            f.validate().map_err(|e| e.to_string())?;
            build_form_data(&f.multipart_fields())
        });
        let body = match body {
            Ok(body) => body,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        self.error.set(None);
        self.is_submitting.set(true);

        let config = self.config.get_value();
        let error = self.error;
        let is_submitting = self.is_submitting;
        spawn_local(async move {
            match create_point(&config, body).await {
                Ok(()) => {
                    is_submitting.set(false);
                    log::info!("Collection point created");
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("Ponto de coleta criado!");
                    }
                    (on_created)();
                }
                Err(e) => {
                    log::error!("{}", e);
                    error.set(Some(format!("Não foi possível cadastrar o ponto: {}", e)));
                    is_submitting.set(false);
                }
            }
        });
    }
}
