//! Raw source record DTOs.
//!
//! These types map directly to the two open-data catalogs. Both catalogs
//! are loosely typed (numbers arrive as strings, fields go missing, image
//! links are sometimes objects and sometimes bare strings), so every field
//! is optional and scalars are read leniently.

use serde::Deserialize;

/// A loosely typed scalar value.
///
/// Anything that is not a string or a number (objects, arrays, booleans)
/// lands in `Other` and is treated as absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Other(serde_json::Value),
}

impl Scalar {
    /// The value as trimmed, non-empty text.
    pub fn text(&self) -> Option<String> {
        match self {
            Scalar::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Scalar::Number(n) => Some(n.to_string()),
            Scalar::Other(_) => None,
        }
    }

    /// The value as text exactly as given, if it is not blank.
    ///
    /// Used for identifiers, which must match the source byte for byte.
    pub fn verbatim(&self) -> Option<String> {
        match self {
            Scalar::Text(s) if s.trim().is_empty() => None,
            Scalar::Text(s) => Some(s.clone()),
            Scalar::Number(n) => Some(n.to_string()),
            Scalar::Other(_) => None,
        }
    }

    /// The value as a float, parsing text if needed.
    pub fn float(&self) -> Option<f64> {
        match self {
            Scalar::Text(s) => s.trim().parse().ok(),
            Scalar::Number(n) => n.as_f64(),
            Scalar::Other(_) => None,
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

/// Read an optional scalar field as text.
pub(crate) fn text(field: &Option<Scalar>) -> Option<String> {
    field.as_ref().and_then(Scalar::text)
}

/// Read an optional identifier field without normalizing it.
pub(crate) fn verbatim(field: &Option<Scalar>) -> Option<String> {
    field.as_ref().and_then(Scalar::verbatim)
}

/// The station catalog: a GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StationCollection {
    #[serde(default)]
    pub features: Vec<StationFeature>,
}

/// One station feature.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StationFeature {
    #[serde(default)]
    pub properties: StationProperties,

    #[serde(default)]
    pub geometry: Option<Geometry>,
}

impl StationFeature {
    /// Latitude and longitude, preferring the GTFS properties and falling
    /// back to the point geometry.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let props = &self.properties;
        let from_props = props
            .gtfs_latitude
            .as_ref()
            .and_then(Scalar::float)
            .zip(props.gtfs_longitude.as_ref().and_then(Scalar::float));

        from_props.or_else(|| self.geometry.as_ref().and_then(Geometry::point))
    }
}

/// Station feature properties.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StationProperties {
    pub station_id: Option<Scalar>,

    /// Display name.
    pub stop_name: Option<Scalar>,

    /// Space-delimited daytime service lines (e.g. `"A C F"`).
    pub daytime_routes: Option<Scalar>,

    /// Borough code (`M`, `Bk`, `Bx`, `Q`, `SI`).
    pub borough: Option<Scalar>,

    pub gtfs_latitude: Option<Scalar>,
    pub gtfs_longitude: Option<Scalar>,
}

/// GeoJSON geometry. Only `Point` carries usable coordinates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub coordinates: serde_json::Value,
}

impl Geometry {
    /// `(latitude, longitude)` of a point geometry.
    ///
    /// GeoJSON orders positions as `[longitude, latitude]`.
    pub fn point(&self) -> Option<(f64, f64)> {
        if self.kind != "Point" {
            return None;
        }
        let position = self.coordinates.as_array()?;
        let longitude = position.first()?.as_f64()?;
        let latitude = position.get(1)?.as_f64()?;
        Some((latitude, longitude))
    }
}

/// One record of the artwork catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArtwork {
    pub id: Option<Scalar>,
    pub station_name: Option<Scalar>,
    pub line: Option<Scalar>,
    pub artist: Option<Scalar>,
    pub art_title: Option<Scalar>,
    pub art_date: Option<Scalar>,
    pub art_material: Option<Scalar>,
    pub art_description: Option<Scalar>,
    pub art_image_link: Option<RawImageLink>,
}

/// An image link, either wrapped in an object or given directly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawImageLink {
    Url(String),
    Object {
        #[serde(default)]
        url: Option<String>,
    },
    Other(serde_json::Value),
}

impl RawImageLink {
    /// The link URL, if any.
    pub fn url(&self) -> Option<String> {
        let url = match self {
            RawImageLink::Url(url) => url,
            RawImageLink::Object { url: Some(url) } => url,
            _ => return None,
        };
        let trimmed = url.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}
