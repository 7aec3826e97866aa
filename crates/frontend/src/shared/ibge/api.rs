use contracts::shared::geo::ibge::{city_names, uf_initials, IbgeCity, IbgeUf};
use web_sys::AbortSignal;

use crate::shared::api_utils::{get_json, FetchError};
use crate::shared::config::AppConfig;

/// Fetch all UF abbreviations, sorted
pub async fn fetch_ufs(config: &AppConfig) -> Result<Vec<String>, FetchError> {
    let ufs: Vec<IbgeUf> = get_json(&config.ibge_url("estados"), None).await?;
    Ok(uf_initials(ufs))
}

/// Fetch the city names of one UF. Pass the signal of the request's
/// `AbortController` so a newer lookup can cancel this one.
pub async fn fetch_cities(
    config: &AppConfig,
    uf: &str,
    signal: Option<&AbortSignal>,
) -> Result<Vec<String>, FetchError> {
    let path = format!("estados/{}/municipios", urlencoding::encode(uf));
    let cities: Vec<IbgeCity> = get_json(&config.ibge_url(&path), signal).await?;
    Ok(city_names(cities))
}
