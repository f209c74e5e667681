use crate::anomaly::AnomalyRecord;

pub const CENTER_LATITUDE: f64 = 15.0;
pub const CENTER_LONGITUDE: f64 = 73.0;
pub const ZOOM: u8 = 5;

/// ESRI World Imagery, `{z}/{y}/{x}` addressing.
pub const TILE_URL: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}";
pub const TILE_ATTRIBUTION: &str = "ESRI Satellite";

pub const VIEWPORT_WIDTH: u32 = 1200;
pub const VIEWPORT_HEIGHT: u32 = 500;

const MARKER_COLOR: &str = "red";
const MARKER_ICON: &str = "warning-sign";

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub vessel_id: String,
    pub issue: String,
    pub color: &'static str,
    pub icon: &'static str,
}

impl MapMarker {
    pub fn for_record(record: &AnomalyRecord) -> Self {
        Self {
            latitude: record.latitude,
            longitude: record.longitude,
            vessel_id: record.vessel_id.clone(),
            issue: record.issue.clone(),
            color: MARKER_COLOR,
            icon: MARKER_ICON,
        }
    }

    /// Plain-text popup body, one line per field.
    pub fn popup_text(&self) -> String {
        format!("Vessel ID: {}\nAnomaly: {}", self.vessel_id, self.issue)
    }
}

/// Everything the browser-side map widget needs to draw the satellite view.
#[derive(Debug, Clone)]
pub struct MapView {
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub zoom: u8,
    pub tile_url: &'static str,
    pub attribution: &'static str,
    pub width: u32,
    pub height: u32,
    pub markers: Vec<MapMarker>,
}

impl MapView {
    /// Builds the coastal-region view with one warning marker per record.
    pub fn coastal(records: &[AnomalyRecord]) -> Self {
        Self {
            center_latitude: CENTER_LATITUDE,
            center_longitude: CENTER_LONGITUDE,
            zoom: ZOOM,
            tile_url: TILE_URL,
            attribution: TILE_ATTRIBUTION,
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            markers: records.iter().map(MapMarker::for_record).collect(),
        }
    }
}
