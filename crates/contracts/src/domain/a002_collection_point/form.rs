use crate::domain::a001_item::ItemId;
use crate::shared::geo::LatLng;
use std::collections::BTreeSet;
use thiserror::Error;

/// Value of the UF/city selects when nothing is chosen
pub const UNSELECTED: &str = "0";

/// Where the user is in the address part of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressStage {
    Idle,
    UfChosen,
    CityChosen,
}

/// Outcome of a UF selection, telling the caller what network work follows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UfChange {
    /// Same UF picked again
    Unchanged,
    /// Back to the sentinel: no city lookup
    Cleared,
    /// New UF: its cities have to be fetched
    FetchCities(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
    Whatsapp,
    Uf,
    City,
}

impl RequiredField {
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::Name => "Nome da entidade",
            RequiredField::Email => "E-mail",
            RequiredField::Whatsapp => "Whatsapp",
            RequiredField::Uf => "Estado (UF)",
            RequiredField::City => "Cidade",
        }
    }
}

fn join_labels(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(RequiredField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Preencha os campos obrigatórios: {}", join_labels(.0))]
    MissingFields(Vec<RequiredField>),
}

/// Everything the user entered on the create-point page.
///
/// `F` is the attached image; the browser client uses `web_sys::File`.
/// The state only lives for one page visit.
#[derive(Debug, Clone, PartialEq)]
pub struct PointFormState<F = ()> {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    selected_uf: String,
    selected_city: String,
    selected_position: LatLng,
    position_chosen: bool,
    selected_items: BTreeSet<ItemId>,
    selected_file: Option<F>,
}

impl<F> Default for PointFormState<F> {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            whatsapp: String::new(),
            selected_uf: UNSELECTED.to_string(),
            selected_city: UNSELECTED.to_string(),
            selected_position: LatLng::ORIGIN,
            position_chosen: false,
            selected_items: BTreeSet::new(),
            selected_file: None,
        }
    }
}

fn normalize_choice(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() {
        UNSELECTED
    } else {
        value
    }
}

impl<F> PointFormState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address_stage(&self) -> AddressStage {
        if self.selected_uf == UNSELECTED {
            AddressStage::Idle
        } else if self.selected_city == UNSELECTED {
            AddressStage::UfChosen
        } else {
            AddressStage::CityChosen
        }
    }

    pub fn selected_uf(&self) -> &str {
        &self.selected_uf
    }

    pub fn selected_city(&self) -> &str {
        &self.selected_city
    }

    /// Pick a UF. Any previously chosen city belongs to the old UF and is
    /// reset.
    pub fn select_uf(&mut self, uf: &str) -> UfChange {
        let uf = normalize_choice(uf);
        if uf == self.selected_uf {
            return UfChange::Unchanged;
        }

        self.selected_uf = uf.to_string();
        self.selected_city = UNSELECTED.to_string();

        if uf == UNSELECTED {
            UfChange::Cleared
        } else {
            UfChange::FetchCities(uf.to_string())
        }
    }

    /// Pick a city of the current UF. Ignored while no UF is chosen.
    pub fn select_city(&mut self, city: &str) -> bool {
        if self.address_stage() == AddressStage::Idle {
            return false;
        }
        self.selected_city = normalize_choice(city).to_string();
        true
    }

    pub fn position(&self) -> LatLng {
        self.selected_position
    }

    pub fn has_position(&self) -> bool {
        self.position_chosen
    }

    /// Map click. Leaves the UF/city choice untouched.
    pub fn set_position(&mut self, position: LatLng) {
        self.selected_position = position;
        self.position_chosen = true;
    }

    /// Flip an item's membership; returns whether it is selected afterwards
    pub fn toggle_item(&mut self, id: ItemId) -> bool {
        if self.selected_items.remove(&id) {
            false
        } else {
            self.selected_items.insert(id);
            true
        }
    }

    pub fn is_item_selected(&self, id: ItemId) -> bool {
        self.selected_items.contains(&id)
    }

    pub fn selected_items(&self) -> &BTreeSet<ItemId> {
        &self.selected_items
    }

    pub fn file(&self) -> Option<&F> {
        self.selected_file.as_ref()
    }

    /// Replace the attached image, handing back the previous one
    pub fn set_file(&mut self, file: Option<F>) -> Option<F> {
        std::mem::replace(&mut self.selected_file, file)
    }

    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(RequiredField::Name);
        }
        if self.email.trim().is_empty() {
            missing.push(RequiredField::Email);
        }
        if self.whatsapp.trim().is_empty() {
            missing.push(RequiredField::Whatsapp);
        }
        if self.selected_uf == UNSELECTED {
            missing.push(RequiredField::Uf);
        }
        if self.selected_city == UNSELECTED {
            missing.push(RequiredField::City);
        }
        missing
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let form: PointFormState = PointFormState::new();

        assert_eq!(form.address_stage(), AddressStage::Idle);
        assert_eq!(form.selected_uf(), UNSELECTED);
        assert_eq!(form.selected_city(), UNSELECTED);
        assert_eq!(form.position(), LatLng::ORIGIN);
        assert!(!form.has_position());
        assert!(form.selected_items().is_empty());
        assert!(form.file().is_none());
    }

    #[test]
    fn test_sentinel_uf_never_fetches() {
        let mut form: PointFormState = PointFormState::new();

        assert_eq!(form.select_uf(UNSELECTED), UfChange::Unchanged);
        assert_eq!(form.select_uf("SC"), UfChange::FetchCities("SC".to_string()));
        assert_eq!(form.select_uf(UNSELECTED), UfChange::Cleared);
        assert_eq!(form.select_uf(""), UfChange::Unchanged);
        assert_eq!(form.address_stage(), AddressStage::Idle);
    }

    #[test]
    fn test_same_uf_twice_does_not_refetch() {
        let mut form: PointFormState = PointFormState::new();

        assert_eq!(form.select_uf("RS"), UfChange::FetchCities("RS".to_string()));
        assert_eq!(form.select_uf("RS"), UfChange::Unchanged);
    }

    #[test]
    fn test_select_city_keeps_uf() {
        let mut form: PointFormState = PointFormState::new();

        assert_eq!(form.select_uf("PR"), UfChange::FetchCities("PR".to_string()));
        assert_eq!(form.address_stage(), AddressStage::UfChosen);

        assert!(form.select_city("Londrina"));

        assert_eq!(form.selected_city(), "Londrina");
        assert_eq!(form.selected_uf(), "PR");
        assert_eq!(form.address_stage(), AddressStage::CityChosen);
    }

    #[test]
    fn test_changing_uf_resets_city() {
        let mut form: PointFormState = PointFormState::new();
        form.select_uf("PR");
        form.select_city("Curitiba");

        form.select_uf("SP");

        assert_eq!(form.selected_city(), UNSELECTED);
        assert_eq!(form.address_stage(), AddressStage::UfChosen);
    }

    #[test]
    fn test_city_ignored_without_uf() {
        let mut form: PointFormState = PointFormState::new();

        assert!(!form.select_city("Curitiba"));
        assert_eq!(form.selected_city(), UNSELECTED);
    }

    #[test]
    fn test_city_sentinel_returns_to_uf_chosen() {
        let mut form: PointFormState = PointFormState::new();
        form.select_uf("PR");
        form.select_city("Curitiba");

        form.select_city(UNSELECTED);

        assert_eq!(form.address_stage(), AddressStage::UfChosen);
    }

    #[test]
    fn test_map_click_keeps_address_stage() {
        let mut form: PointFormState = PointFormState::new();
        form.select_uf("PR");
        form.select_city("Foz do Iguaçu");

        form.set_position(LatLng::new(-25.5, -54.5));

        assert!(form.has_position());
        assert_eq!(form.position(), LatLng::new(-25.5, -54.5));
        assert_eq!(form.address_stage(), AddressStage::CityChosen);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let mut form: PointFormState = PointFormState::new();
        form.toggle_item(ItemId(1));
        form.toggle_item(ItemId(4));
        let before = form.selected_items().clone();

        assert!(form.toggle_item(ItemId(2)));
        assert!(!form.toggle_item(ItemId(2)));
        assert_eq!(form.selected_items(), &before);

        assert!(!form.toggle_item(ItemId(4)));
        assert!(form.toggle_item(ItemId(4)));
        assert_eq!(form.selected_items(), &before);
    }

    #[test]
    fn test_set_file_returns_previous() {
        let mut form: PointFormState<&str> = PointFormState::new();

        assert_eq!(form.set_file(Some("a.png")), None);
        assert_eq!(form.set_file(Some("b.png")), Some("a.png"));
        assert_eq!(form.file(), Some(&"b.png"));
        assert_eq!(form.set_file(None), Some("b.png"));
    }

    #[test]
    fn test_validate_lists_missing_fields() {
        let mut form: PointFormState = PointFormState::new();
        form.name = "Colectoria".to_string();
        form.email = "   ".to_string();

        let err = form.validate().unwrap_err();

        assert_eq!(
            err,
            FormError::MissingFields(vec![
                RequiredField::Email,
                RequiredField::Whatsapp,
                RequiredField::Uf,
                RequiredField::City,
            ])
        );
        assert_eq!(
            err.to_string(),
            "Preencha os campos obrigatórios: E-mail, Whatsapp, Estado (UF), Cidade"
        );
    }

    #[test]
    fn test_validate_complete_form() {
        let mut form: PointFormState = PointFormState::new();
        form.name = "Colectoria".to_string();
        form.email = "contato@colectoria.com.br".to_string();
        form.whatsapp = "45999990000".to_string();
        form.select_uf("PR");
        form.select_city("Foz do Iguaçu");

        assert_eq!(form.validate(), Ok(()));
    }
}
