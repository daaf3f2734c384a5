use crate::error::{ServerError, ServerResult};
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Raw comma-separated path segments.
#[derive(Debug, Deserialize)]
pub struct ConfigurationPath {
    pub locales: String,
    pub browsers: String,
    pub devices: String,
}

/// Echo of a configuration, one list per segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationEcho {
    pub locales: Vec<String>,
    pub browsers: Vec<String>,
    pub devices: Vec<String>,
}

impl From<ConfigurationPath> for ConfigurationEcho {
    fn from(path: ConfigurationPath) -> Self {
        Self {
            locales: split_list(&path.locales),
            browsers: split_list(&path.browsers),
            devices: split_list(&path.devices),
        }
    }
}

/// Split a segment on `,` without trimming, deduplicating or dropping
/// empty pieces.
pub fn split_list(segment: &str) -> Vec<String> {
    segment.split(',').map(str::to_string).collect()
}

/// Echo the parsed configuration back to the caller.
///
/// `GET /configurations/en-US,de/chrome/desktop` answers
/// `{"locales":["en-US","de"],"browsers":["chrome"],"devices":["desktop"]}`.
/// Values are not validated and nothing is generated.
pub async fn echo_configuration(
    path: Result<Path<ConfigurationPath>, PathRejection>,
) -> ServerResult<Json<ConfigurationEcho>> {
    let Path(path) = path.map_err(|rejection| ServerError::Validation(rejection.body_text()))?;
    Ok(Json(path.into()))
}
