use contracts::domain::a002_collection_point::MultipartField;
use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::shared::config::AppConfig;

/// Build the browser `FormData` for `POST /points`
pub fn build_form_data(fields: &[MultipartField<'_, File>]) -> Result<FormData, String> {
    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;

    for field in fields {
        match field {
            MultipartField::Text { name, value } => form_data
                .append_with_str(name, value)
                .map_err(|e| format!("{e:?}"))?,
            MultipartField::File { name, file } => form_data
                .append_with_blob_and_filename(name, file, &file.name())
                .map_err(|e| format!("{e:?}"))?,
        }
    }

    Ok(form_data)
}

/// Create a collection point. The response body is not used.
pub async fn create_point(config: &AppConfig, body: FormData) -> Result<(), String> {
    let response = Request::post(&config.api_url("points"))
        .body(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to create point: HTTP {}",
            response.status()
        ));
    }

    Ok(())
}
