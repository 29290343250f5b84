//! Presentation labels derived from a photo's metadata.
//!
//! Every function here is pure and total: a record with no metadata at all
//! produces empty strings, never an error. A numeric field that is zero (or
//! otherwise not a positive number) counts as "not recorded".

use crate::{config::RemoteConfig, models::photo::PhotoRecord};
use chrono::{Datelike, Utc};

/// Directus asset transformation preset for the full-size view.
const WEB_PRESET: &str = "web";
/// Directus asset transformation preset for gallery thumbnails.
const CARD_PRESET: &str = "card";

/// All labels for one photo, computed once for the page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoLabels {
    pub asset_url: String,
    pub preview_url: String,
    pub camera: String,
    pub lens: String,
    pub focal_length: String,
    pub exposure: String,
    pub aperture: String,
    pub iso: String,
    pub taken_at: String,
}

impl PhotoLabels {
    pub fn for_photo(remote: &RemoteConfig, photo: &PhotoRecord) -> Self {
        Self {
            asset_url: asset_url(remote, photo),
            preview_url: preview_url(remote, photo),
            camera: camera_label(photo),
            lens: lens_label(photo),
            focal_length: focal_length_label(photo),
            exposure: exposure_label(photo),
            aperture: aperture_label(photo),
            iso: iso_label(photo),
            taken_at: timestamp_label(photo),
        }
    }

    /// The exposure facts that are present, in display order.
    pub fn details(&self) -> impl Iterator<Item = &str> {
        [
            &self.camera,
            &self.lens,
            &self.focal_length,
            &self.exposure,
            &self.aperture,
            &self.iso,
        ]
        .into_iter()
        .map(String::as_str)
        .filter(|label| !label.is_empty())
    }
}

/// `"{make} {model}"`, or empty when the make was not recorded.
pub fn camera_label(photo: &PhotoRecord) -> String {
    let camera = &photo.metadata.camera;
    if camera.make.is_empty() {
        return String::new();
    }
    format!("{} {}", camera.make, camera.model)
}

/// `"{lens make} {lens model}"` with NUL bytes stripped.
///
/// Stripping happens after joining, since either half may carry them.
pub fn lens_label(photo: &PhotoRecord) -> String {
    let exposure = &photo.metadata.exposure;
    if exposure.lens_make.is_empty() {
        return String::new();
    }
    format!("{} {}", exposure.lens_make, exposure.lens_model).replace('\0', "")
}

/// `"50mm"`, or `"50mm (75mm FFE)"` when the full-frame equivalent is known.
pub fn focal_length_label(photo: &PhotoRecord) -> String {
    let exposure = &photo.metadata.exposure;
    if !is_recorded(exposure.focal_length_mm) {
        return String::new();
    }

    let focal = decimal(exposure.focal_length_mm);
    if is_recorded(exposure.focal_length_equivalent_mm) {
        return format!(
            "{}mm ({}mm FFE)",
            focal,
            decimal(exposure.focal_length_equivalent_mm)
        );
    }
    format!("{}mm", focal)
}

/// `"2 sec"` for long exposures, `"1/250 sec"` for fractional ones.
///
/// Both forms truncate toward zero.
pub fn exposure_label(photo: &PhotoRecord) -> String {
    let seconds = photo.metadata.exposure.exposure_time_seconds;
    if !is_recorded(seconds) {
        return String::new();
    }

    if seconds >= 1.0 {
        return format!("{} sec", seconds as u64);
    }
    format!("1/{} sec", (1.0 / seconds) as u64)
}

/// `"f/2.8"`.
pub fn aperture_label(photo: &PhotoRecord) -> String {
    let f_number = photo.metadata.exposure.f_number;
    if !is_recorded(f_number) {
        return String::new();
    }
    format!("f/{:.1}", f_number)
}

/// `"ISO 400"`.
pub fn iso_label(photo: &PhotoRecord) -> String {
    match photo.metadata.exposure.iso_speed {
        0 => String::new(),
        iso => format!("ISO {}", iso),
    }
}

/// `"May 1, 2023 2:03 PM"`, in the offset the camera recorded.
pub fn timestamp_label(photo: &PhotoRecord) -> String {
    photo
        .taken_at()
        .map(|ts| ts.format("%B %-d, %Y %-I:%M %p").to_string())
        .unwrap_or_default()
}

/// Full-size image URL.
pub fn asset_url(remote: &RemoteConfig, photo: &PhotoRecord) -> String {
    build_asset_url(remote, &photo.id, WEB_PRESET)
}

/// Thumbnail URL used on the gallery grid.
pub fn preview_url(remote: &RemoteConfig, photo: &PhotoRecord) -> String {
    build_asset_url(remote, &photo.id, CARD_PRESET)
}

/// Current year for the page footer.
pub fn copyright_year() -> String {
    Utc::now().year().to_string()
}

fn build_asset_url(remote: &RemoteConfig, id: &str, preset: &str) -> String {
    let mut url = format!("{}/assets/{}?key={}", remote.host, id, preset);
    if let Some(token) = &remote.token {
        url.push_str("&access_token=");
        url.push_str(token);
    }
    url
}

/// Zero, negative and NaN all mean the camera did not record the value.
fn is_recorded(value: f64) -> bool {
    value > 0.0
}

/// Shortest decimal that round-trips, never in exponent form.
fn decimal(value: f64) -> String {
    format!("{}", value)
}
