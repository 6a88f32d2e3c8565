use serde::{Deserialize, Serialize};

use crate::draft::Draft;

/// Form payload sent when the post is published.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Submission {
    pub text: String,
    pub aspect_ids: Vec<String>,
    pub services: Vec<String>,
    pub photos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_address: Option<String>,
    /// `"lat, lng"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_coords: Option<String>,
}

impl Submission {
    /// Only completed uploads contribute photos.
    pub fn from_draft(draft: &Draft) -> Self {
        let location = draft.location.as_ref();
        Self {
            text: draft.text.clone(),
            aspect_ids: draft.visibility.form_values(),
            services: draft.services.iter().map(|s| s.to_string()).collect(),
            photos: draft.photo_ids(),
            location_address: location.and_then(|l| l.address.clone()),
            location_coords: location
                .and_then(|l| l.coordinates)
                .map(|c| c.to_string()),
        }
    }
}
