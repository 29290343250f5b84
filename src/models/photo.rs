//! A photo as listed by the Directus `/files` endpoint.
//!
//! Directus stores the EXIF extraction under `metadata.ifd0` (camera body)
//! and `metadata.exif` (exposure). Every metadata key is optional on the
//! wire; a missing key or a `null` decodes to the field's "absent" value
//! (empty string, `0`, or `None`).

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Deserializer, de};

/// Unix seconds of `0001-01-01T00:00:00Z`, the unset timestamp some EXIF
/// extractors emit.
const ZERO_INSTANT_SECS: i64 = -62_135_596_800;

/// One catalog entry. Immutable once decoded.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PhotoRecord {
    /// Directus file id; used to build asset URLs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Pixel width, `0` when unknown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub width: u32,

    /// Pixel height, `0` when unknown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub height: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Metadata,
}

impl PhotoRecord {
    /// When the shutter fired, if the camera recorded it.
    pub fn taken_at(&self) -> Option<&DateTime<FixedOffset>> {
        self.metadata.exposure.date_time_original.as_ref()
    }
}

/// Camera and exposure facts extracted from the image file.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    #[serde(rename = "ifd0", default, deserialize_with = "null_as_default")]
    pub camera: CameraInfo,

    #[serde(rename = "exif", default, deserialize_with = "null_as_default")]
    pub exposure: ExposureInfo,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CameraInfo {
    #[serde(rename = "Make", default, deserialize_with = "null_as_default")]
    pub make: String,

    #[serde(rename = "Model", default, deserialize_with = "null_as_default")]
    pub model: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ExposureInfo {
    /// Shutter speed in seconds.
    #[serde(rename = "ExposureTime", default, deserialize_with = "null_as_default")]
    pub exposure_time_seconds: f64,

    #[serde(rename = "FNumber", default, deserialize_with = "null_as_default")]
    pub f_number: f64,

    #[serde(rename = "ISOSpeedRatings", default, deserialize_with = "null_as_default")]
    pub iso_speed: u32,

    #[serde(
        rename = "DateTimeOriginal",
        default,
        deserialize_with = "deserialize_timestamp"
    )]
    pub date_time_original: Option<DateTime<FixedOffset>>,

    #[serde(rename = "FocalLength", default, deserialize_with = "null_as_default")]
    pub focal_length_mm: f64,

    /// 35 mm full-frame equivalent focal length.
    #[serde(
        rename = "FocalLengthIn35mmFilm",
        default,
        deserialize_with = "null_as_default"
    )]
    pub focal_length_equivalent_mm: f64,

    /// May carry NUL bytes from buggy lens firmware.
    #[serde(rename = "LensMake", default, deserialize_with = "null_as_default")]
    pub lens_make: String,

    #[serde(rename = "LensModel", default, deserialize_with = "null_as_default")]
    pub lens_model: String,
}

/// The `{"data": [...]}` envelope Directus wraps list responses in.
#[derive(Deserialize, Debug)]
pub struct FilesEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<PhotoRecord>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let value = match raw.as_deref().map(str::trim) {
        None | Some("") => return Ok(None),
        Some(value) => value,
    };

    match parse_timestamp(value) {
        Some(ts) if is_zero_instant(&ts) => Ok(None),
        Some(ts) => Ok(Some(ts)),
        None => Err(de::Error::custom(format!(
            "invalid DateTimeOriginal `{}`",
            value
        ))),
    }
}

/// Accepts RFC 3339, naive ISO 8601 and raw EXIF (`2023:05:01 14:03:00`)
/// forms. Naive values are taken as UTC.
fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts);
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y:%m:%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc().fixed_offset())
}

fn is_zero_instant(ts: &DateTime<FixedOffset>) -> bool {
    ts.timestamp() == ZERO_INSTANT_SECS && ts.timestamp_subsec_nanos() == 0
}
