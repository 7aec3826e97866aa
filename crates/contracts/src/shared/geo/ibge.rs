//! IBGE localities API (`/api/v1/localidades`) DTOs.
//!
//! Only the fields the form needs are decoded; the API returns much more
//! (region, micro-region, ...) and serde skips it.

use crate::shared::request_guard::{RequestGeneration, Ticket};
use serde::{Deserialize, Serialize};

/// `GET /estados` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbgeUf {
    pub sigla: String,
}

/// `GET /estados/{uf}/municipios` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbgeCity {
    pub nome: String,
}

/// UF abbreviations, alphabetically
pub fn uf_initials(ufs: Vec<IbgeUf>) -> Vec<String> {
    let mut initials: Vec<String> = ufs.into_iter().map(|uf| uf.sigla).collect();
    initials.sort();
    initials
}

/// City names in API order
pub fn city_names(cities: Vec<IbgeCity>) -> Vec<String> {
    cities.into_iter().map(|city| city.nome).collect()
}

/// City list of the currently selected UF.
///
/// Every lookup takes a ticket from [`CityList::begin`]; a response is only
/// applied while its ticket is still the latest, so a slow answer for a UF
/// the user already moved away from can never overwrite the current list.
#[derive(Debug, Clone, Default)]
pub struct CityList {
    generation: RequestGeneration,
    uf: Option<String>,
    names: Vec<String>,
}

impl CityList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a lookup for `uf`: drops the current list and invalidates any
    /// outstanding ticket.
    pub fn begin(&mut self, uf: &str) -> Ticket {
        self.uf = Some(uf.to_string());
        self.names.clear();
        self.generation.begin()
    }

    /// No UF selected any more
    pub fn clear(&mut self) {
        self.generation.invalidate();
        self.uf = None;
        self.names.clear();
    }

    /// Apply a response. Returns `false` (and changes nothing) when the
    /// ticket is stale.
    pub fn resolve(&mut self, ticket: Ticket, names: Vec<String>) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.names = names;
        true
    }

    pub fn uf(&self) -> Option<&str> {
        self.uf.as_deref()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_pending(&self, ticket: Ticket) -> bool {
        self.generation.is_current(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_uf_decoding_ignores_extra_fields() {
        let json = r#"[
            {"id": 41, "sigla": "PR", "nome": "Paraná", "regiao": {"id": 4, "sigla": "S", "nome": "Sul"}},
            {"id": 35, "sigla": "SP", "nome": "São Paulo", "regiao": {"id": 3, "sigla": "SE", "nome": "Sudeste"}},
            {"id": 12, "sigla": "AC", "nome": "Acre", "regiao": {"id": 1, "sigla": "N", "nome": "Norte"}}
        ]"#;

        let ufs: Vec<IbgeUf> = serde_json::from_str(json).unwrap();

        assert_eq!(uf_initials(ufs), names(&["AC", "PR", "SP"]));
    }

    #[test]
    fn test_city_decoding() {
        let json = r#"[{"id": 4106902, "nome": "Curitiba"}, {"id": 4113700, "nome": "Londrina"}]"#;

        let cities: Vec<IbgeCity> = serde_json::from_str(json).unwrap();

        assert_eq!(city_names(cities), names(&["Curitiba", "Londrina"]));
    }

    #[test]
    fn test_latest_selection_wins() {
        let mut list = CityList::new();

        // user picks B, then A before B's response arrives
        let ticket_b = list.begin("B");
        let ticket_a = list.begin("A");

        // A answers first, B's slow answer arrives afterwards
        assert!(list.resolve(ticket_a, names(&["a-city"])));
        assert!(!list.resolve(ticket_b, names(&["b-city"])));

        assert_eq!(list.uf(), Some("A"));
        assert_eq!(list.names(), names(&["a-city"]).as_slice());
    }

    #[test]
    fn test_stale_response_before_latest() {
        let mut list = CityList::new();

        let ticket_b = list.begin("B");
        let ticket_a = list.begin("A");

        assert!(!list.resolve(ticket_b, names(&["b-city"])));
        assert!(list.names().is_empty());
        assert!(list.resolve(ticket_a, names(&["a-city"])));
        assert_eq!(list.names(), names(&["a-city"]).as_slice());
    }

    #[test]
    fn test_clear_invalidates_outstanding_lookup() {
        let mut list = CityList::new();

        let ticket = list.begin("PR");
        list.clear();

        assert!(!list.resolve(ticket, names(&["Curitiba"])));
        assert!(list.names().is_empty());
        assert_eq!(list.uf(), None);
    }
}
