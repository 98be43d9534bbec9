// Accommodation category catalog
// Built once at start-up and handed to the builder and the availability calculator by reference

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HotelError, Result};

// A fixed accommodation tier with its hotel-wide unit inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub beds: u32,
    pub suites: u32,
    pub garage: bool,
    // Price per night
    pub base_price: f64,
    pub max_occupancy: u32,
    pub amenities: Vec<String>,
    pub total_units: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryCatalog {
    categories: Vec<AccommodationCategory>,
}

impl CategoryCatalog {
    pub fn new(categories: Vec<AccommodationCategory>) -> Self {
        Self { categories }
    }

    // The six categories the hotel ships with
    pub fn standard() -> Self {
        Self::new(standard_categories())
    }

    // All categories, in catalog order
    pub fn categories(&self) -> &[AccommodationCategory] {
        &self.categories
    }

    pub fn get(&self, category_id: &str) -> Option<&AccommodationCategory> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    // Like `get`, but an unknown id is an error instead of `None`
    pub fn lookup(&self, category_id: &str) -> Result<&AccommodationCategory> {
        self.get(category_id).ok_or_else(|| {
            debug!(category_id, "category lookup failed");
            HotelError::CategoryNotFound(category_id.to_string())
        })
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn category(
    id: &str,
    name: &str,
    description: &str,
    (beds, suites, garage): (u32, u32, bool),
    base_price: f64,
    max_occupancy: u32,
    amenities: &[&str],
    total_units: u32,
) -> AccommodationCategory {
    AccommodationCategory {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        beds,
        suites,
        garage,
        base_price,
        max_occupancy,
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        total_units,
    }
}

pub fn standard_categories() -> Vec<AccommodationCategory> {
    vec![
        category(
            "couple-simple",
            "Casal Simples",
            "Perfeito para casais que buscam conforto e intimidade",
            (1, 1, false),
            120.0,
            2,
            &["Ar Condicionado", "Banheiro Privativo", "TV", "WiFi"],
            10,
        ),
        category(
            "family-simple",
            "Família Simples",
            "Ideal para famílias pequenas com comodidades básicas",
            (2, 1, false),
            180.0,
            4,
            &["Ar Condicionado", "Banheiro Privativo", "TV", "WiFi", "Frigobar"],
            8,
        ),
        category(
            "family-plus",
            "Família Plus",
            "Acomodação familiar aprimorada com espaço adicional",
            (3, 2, true),
            250.0,
            6,
            &[
                "Ar Condicionado",
                "Banheiro Privativo",
                "TV",
                "WiFi",
                "Frigobar",
                "Varanda",
                "Cozinha",
            ],
            6,
        ),
        category(
            "family-super",
            "Família Super",
            "Suíte familiar premium com amenidades de luxo",
            (4, 3, true),
            350.0,
            8,
            &[
                "Ar Condicionado",
                "Banheiro Privativo",
                "TV",
                "WiFi",
                "Frigobar",
                "Varanda",
                "Cozinha Completa",
                "Sala de Estar",
                "Jacuzzi",
            ],
            4,
        ),
        category(
            "single-simple",
            "Individual Simples",
            "Acomodação confortável para viajantes solo",
            (1, 1, false),
            80.0,
            1,
            &["Ar Condicionado", "Banheiro Privativo", "TV", "WiFi", "Mesa de Trabalho"],
            12,
        ),
        category(
            "single-plus",
            "Individual Plus",
            "Acomodação individual aprimorada com recursos premium",
            (1, 1, true),
            120.0,
            2,
            &[
                "Ar Condicionado",
                "Banheiro Privativo",
                "TV",
                "WiFi",
                "Mesa de Trabalho",
                "Frigobar",
                "Varanda",
            ],
            5,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_standard_catalog_order() {
        let catalog = CategoryCatalog::standard();
        let ids: Vec<&str> = catalog.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "couple-simple",
                "family-simple",
                "family-plus",
                "family-super",
                "single-simple",
                "single-plus"
            ]
        );
        assert_eq!(catalog.len(), 6);
    }

    #[test_case("couple-simple", 120.0, 10; "#1 couple simple")]
    #[test_case("family-super", 350.0, 4; "#2 family super")]
    #[test_case("single-simple", 80.0, 12; "#3 single simple")]
    fn test_lookup_known_category(id: &str, base_price: f64, total_units: u32) {
        let catalog = CategoryCatalog::standard();
        let category = catalog.lookup(id).unwrap();
        assert_eq!(category.base_price, base_price);
        assert_eq!(category.total_units, total_units);
    }

    #[test]
    fn test_lookup_unknown_category() {
        let catalog = CategoryCatalog::standard();
        assert!(catalog.get("does-not-exist").is_none());
        match catalog.lookup("does-not-exist") {
            Err(HotelError::CategoryNotFound(id)) => assert_eq!(id, "does-not-exist"),
            other => panic!("Expected CategoryNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_category_serializes_camel_case() {
        let catalog = CategoryCatalog::standard();
        let json = serde_json::to_value(catalog.lookup("family-plus").unwrap()).unwrap();
        assert_eq!(json["basePrice"], 250.0);
        assert_eq!(json["totalUnits"], 6);
        assert_eq!(json["maxOccupancy"], 6);
        assert_eq!(json["garage"], true);
    }
}
