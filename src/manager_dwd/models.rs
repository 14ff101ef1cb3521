use std::collections::{BTreeMap, HashMap};
use serde::Deserialize;

/// One pollen forecast snapshot as published by DWD.
/// Fields not needed for the report (next_update, region names etc.) are ignored.
#[derive(Deserialize, Debug)]
pub struct PollenForecast {
    pub last_update: String,
    #[serde(default)]
    pub legend: HashMap<String, String>,
    pub content: Vec<Region>,
}

/// Forecast for one sub-region. The inner map goes day key -> load code.
/// BTreeMap keeps keys in lexicographic order, which is the column order
/// of the report table (dayafter_to, today, tomorrow).
#[derive(Deserialize, Debug)]
pub struct Region {
    pub region_id: i64,
    pub partregion_id: i64,
    #[serde(rename = "Pollen")]
    pub pollen: BTreeMap<String, BTreeMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_forecast_and_ignores_unknown_fields() {
        let json = r#"{
            "last_update": "2024-05-01 08:00 Uhr",
            "next_update": "2024-05-02 11:00 Uhr",
            "sender": "Deutscher Wetterdienst",
            "legend": {"id1": "0", "id1_desc": "keine Belastung"},
            "content": [
                {
                    "region_id": 30,
                    "partregion_id": 32,
                    "region_name": "Niedersachsen und Bremen",
                    "Pollen": {
                        "Birke": {"today": "1", "tomorrow": "2", "dayafter_to": "0"}
                    }
                }
            ]
        }"#;

        let forecast: PollenForecast = serde_json::from_str(json).unwrap();

        assert_eq!(forecast.last_update, "2024-05-01 08:00 Uhr");
        assert_eq!(forecast.legend.get("id1_desc").unwrap(), "keine Belastung");
        assert_eq!(forecast.content.len(), 1);

        let region = &forecast.content[0];
        assert_eq!(region.region_id, 30);
        assert_eq!(region.partregion_id, 32);

        let days: Vec<&str> = region.pollen["Birke"].keys().map(|k| k.as_str()).collect();
        assert_eq!(days, vec!["dayafter_to", "today", "tomorrow"]);
    }

    #[test]
    fn missing_legend_defaults_to_empty() {
        let json = r#"{"last_update": "2024-05-01 08:00 Uhr", "content": []}"#;

        let forecast: PollenForecast = serde_json::from_str(json).unwrap();

        assert!(forecast.legend.is_empty());
        assert!(forecast.content.is_empty());
    }
}
