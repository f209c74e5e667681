/// Column headers of the anomaly table, in display order.
pub const TABLE_COLUMNS: [&str; 4] = ["Vessel_ID", "Latitude", "Longitude", "Issue"];

#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyRecord {
    pub vessel_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub issue: String,
}

impl AnomalyRecord {
    fn new(vessel_id: &str, latitude: f64, longitude: f64, issue: &str) -> Self {
        Self {
            vessel_id: vessel_id.to_string(),
            latitude,
            longitude,
            issue: issue.to_string(),
        }
    }
}

/// Sample AIS-derived anomalies shown on the map and in the table.
///
/// The set is fixed; callers get a fresh copy per render.
pub fn sample_anomalies() -> Vec<AnomalyRecord> {
    vec![
        AnomalyRecord::new("V-101", 14.8, 72.5, "Speed Anomaly"),
        AnomalyRecord::new("V-203", 16.2, 74.1, "AIS Spoofing"),
        AnomalyRecord::new("V-411", 12.9, 75.4, "Route Deviation"),
    ]
}
