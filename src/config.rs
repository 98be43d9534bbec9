// Hotel configuration
// The category catalog, the customization vocabularies and dashboard settings

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{standard_categories, AccommodationCategory, CategoryCatalog};
use crate::error::{HotelError, Result};

// Sample configuration shipped with the crate
pub const SAMPLE_CONFIG_PATH: &str = "samples/hotel_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HotelConfig {
    pub categories: Vec<AccommodationCategory>,
    // Offered by the UI; the builder doesn't enforce membership
    pub premium_amenities: Vec<String>,
    pub special_request_options: Vec<String>,
    pub check_in_time: String,
    pub check_out_time: String,
    // Raise an alert when this many rooms or fewer are available
    pub low_availability_threshold: usize,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            categories: standard_categories(),
            premium_amenities: strings(&[
                "Vista para o Mar",
                "Varanda Premium",
                "Banheiro Premium",
                "Serviço de Quarto",
                "Frigobar Premium",
                "Smart TV 65\"",
                "Sistema de Som",
                "Roupa de Cama Premium",
            ]),
            special_request_options: strings(&[
                "Check-out Tardio",
                "Check-in Antecipado",
                "Travesseiros Extras",
                "Roupa de Cama Hipoalergênica",
                "Configuração Pet Friendly",
                "Berço para Bebê",
                "Acessível para Cadeirantes",
                "Quarto Silencioso",
            ]),
            check_in_time: "14:00".to_string(),
            check_out_time: "11:00".to_string(),
            low_availability_threshold: 2,
        }
    }
}

impl HotelConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: HotelConfig =
            serde_json::from_str(json).map_err(|e| HotelError::JsonParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            categories = config.categories.len(),
            "hotel configuration loaded"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.id.trim().is_empty() {
                return Err(HotelError::ConfigError(format!(
                    "category '{}' has an empty id",
                    category.name
                )));
            }
            if !seen.insert(category.id.as_str()) {
                return Err(HotelError::ConfigError(format!(
                    "duplicate category id: {}",
                    category.id
                )));
            }
        }
        Ok(())
    }

    pub fn catalog(&self) -> CategoryCatalog {
        CategoryCatalog::new(self.categories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HotelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.catalog(), CategoryCatalog::standard());
        assert_eq!(config.premium_amenities.len(), 8);
        assert_eq!(config.special_request_options.len(), 8);
        assert_eq!(config.check_in_time, "14:00");
        assert_eq!(config.check_out_time, "11:00");
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = HotelConfig::from_json(r#"{ "checkInTime": "15:00" }"#).unwrap();
        assert_eq!(config.check_in_time, "15:00");
        assert_eq!(config.check_out_time, "11:00");
        assert_eq!(config.categories.len(), 6);
    }

    #[test]
    fn test_custom_categories_from_json() {
        let json = r#"{
            "categories": [
                {
                    "id": "loft",
                    "name": "Loft",
                    "description": "Loft com mezanino",
                    "beds": 2,
                    "suites": 1,
                    "garage": true,
                    "basePrice": 300,
                    "maxOccupancy": 3,
                    "amenities": ["WiFi"],
                    "totalUnits": 2
                }
            ]
        }"#;
        let catalog = HotelConfig::from_json(json).unwrap().catalog();
        assert_eq!(catalog.len(), 1);
        let loft = catalog.lookup("loft").unwrap();
        assert_eq!(loft.base_price, 300.0);
        assert_eq!(loft.total_units, 2);
    }

    #[test]
    fn test_duplicate_category_ids_rejected() {
        let mut config = HotelConfig::default();
        let duplicate = config.categories[0].clone();
        config.categories.push(duplicate);
        assert!(matches!(config.validate(), Err(HotelError::ConfigError(_))));
    }

    #[test]
    fn test_empty_category_id_rejected() {
        let mut config = HotelConfig::default();
        config.categories[2].id = "  ".to_string();
        assert!(matches!(config.validate(), Err(HotelError::ConfigError(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = HotelConfig::from_json("{ categories: ");
        assert!(matches!(result, Err(HotelError::JsonParseError(_))));
    }

    #[test]
    fn test_load_sample_config() {
        let config = HotelConfig::load(SAMPLE_CONFIG_PATH);
        assert!(config.is_ok(), "Failed to load sample config: {:?}", config.err());
        let config = config.unwrap();
        assert_eq!(config.low_availability_threshold, 3);
        assert_eq!(config.premium_amenities.len(), 8);

        let catalog = config.catalog();
        let ids: Vec<&str> = catalog.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["couple-simple", "family-plus"]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = HotelConfig::load("does/not/exist.json");
        assert!(matches!(result, Err(HotelError::IoError(_))));
    }
}
