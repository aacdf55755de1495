use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Extension, Query};
use axum::response::Json;

use super::error::ApiError;
use super::params::ParamSpec;
use crate::query;
use crate::store::{DiagnosticRecord, RecordStore};

const EXACT_PARAMS: ParamSpec = ParamSpec {
    required: &["modello", "ECU", "spn"],
    optional: &[],
    exclusive: false,
};

const SPN_FMI_PARAMS: ParamSpec = ParamSpec {
    required: &["spn", "fmi"],
    optional: &["modello"],
    exclusive: false,
};

const SDF_PARAMS: ParamSpec = ParamSpec {
    required: &["modello", "codice-sdf"],
    optional: &[],
    exclusive: false,
};

// The distinct-ids route rejects anything besides its single parameter.
const CENTRALINE_PARAMS: ParamSpec = ParamSpec {
    required: &["modello"],
    optional: &[],
    exclusive: true,
};

/// GET /search/original?modello=&ECU=&spn=
pub async fn handle_search_original(
    Query(raw): Query<HashMap<String, String>>,
    Extension(store): Extension<Arc<RecordStore>>,
) -> Result<Json<Vec<DiagnosticRecord>>, ApiError> {
    let params = EXACT_PARAMS.validate(&raw)?;

    let results = query::search_exact(
        store.records(),
        params.required("modello"),
        params.required("ECU"),
        params.required("spn"),
    );

    if results.is_empty() {
        return Err(ApiError::NotFound(
            "No records found for the original search".to_string(),
        ));
    }
    Ok(Json(results))
}

/// GET /search/spn-fmi?spn=&fmi=[&modello=]
pub async fn handle_search_spn_fmi(
    Query(raw): Query<HashMap<String, String>>,
    Extension(store): Extension<Arc<RecordStore>>,
) -> Result<Json<Vec<DiagnosticRecord>>, ApiError> {
    let params = SPN_FMI_PARAMS.validate(&raw)?;

    let results = query::search_spn_fmi(
        store.records(),
        params.required("spn"),
        params.required("fmi"),
        params.optional("modello"),
    );

    if results.is_empty() {
        return Err(ApiError::NotFound(
            "No records found for the SPN/FMI search".to_string(),
        ));
    }
    Ok(Json(results))
}

/// GET /search/codice-sdf?modello=&codice-sdf=
pub async fn handle_search_codice_sdf(
    Query(raw): Query<HashMap<String, String>>,
    Extension(store): Extension<Arc<RecordStore>>,
) -> Result<Json<Vec<DiagnosticRecord>>, ApiError> {
    let params = SDF_PARAMS.validate(&raw)?;

    let results = query::search_sdf_code(
        store.records(),
        params.required("modello"),
        params.required("codice-sdf"),
    );

    if results.is_empty() {
        return Err(ApiError::NotFound(
            "No records found for the SDF code search".to_string(),
        ));
    }
    Ok(Json(results))
}

/// GET /centraline?modello=
pub async fn handle_centraline(
    Query(raw): Query<HashMap<String, String>>,
    Extension(store): Extension<Arc<RecordStore>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let params = CENTRALINE_PARAMS.validate(&raw)?;

    let ids = query::distinct_controller_ids(store.records(), params.required("modello"));

    if ids.is_empty() {
        return Err(ApiError::NotFound(
            "No controller ids found for the given model".to_string(),
        ));
    }
    Ok(Json(ids))
}

/// Fallback for unmatched routes: JSON 404, never a bare response.
pub async fn handle_not_found() -> ApiError {
    ApiError::NotFound("Endpoint not found".to_string())
}
