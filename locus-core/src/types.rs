//! Wire types for the upstream geocoder.
//!
//! Field names follow Nominatim's JSON exactly so a response body decodes
//! without any mapping layer.

use serde::{Deserialize, Serialize};

/// A single geocoding result as returned by the Nominatim search API.
///
/// Upstream responses are JSON arrays of this record. Fields missing from
/// a response decode to their default values, matching how lenient the
/// upstream is about optional data (`icon` in particular is often absent).
/// The array order is upstream's ranking and is preserved end to end.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Place {
    /// Nominatim's internal identifier for this result.
    pub place_id: i64,
    /// Data licence string.
    pub licence: String,
    /// OpenStreetMap element type ("node", "way", "relation").
    pub osm_type: String,
    /// OpenStreetMap element identifier.
    pub osm_id: i64,
    /// Bounding box as [south, north, west, east] latitude/longitude strings.
    pub boundingbox: Vec<String>,
    /// Latitude of the result's centroid, as a decimal string.
    pub lat: String,
    /// Longitude of the result's centroid, as a decimal string.
    pub lon: String,
    /// Full human-readable name of the place.
    pub display_name: String,
    /// Top-level OSM class ("boundary", "place", ...).
    pub class: String,
    /// OSM type within the class ("administrative", "city", ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Relative importance ranking in [0, 1].
    pub importance: f64,
    /// URL of an icon representing the place class, when available.
    pub icon: String,
}
