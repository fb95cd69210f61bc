use crate::models::{DiningHallRecord, HallType, PriceRange};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Catalog has no halls")]
    Empty,

    #[error("Duplicate hall name: {0}")]
    DuplicateName(String),

    #[error("Invalid hall {name}: {reason}")]
    InvalidHall { name: String, reason: String },
}

/// Immutable table of dining halls
///
/// Insertion order is the display order. Built once at startup and shared
/// read-only across requests.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    halls: Vec<DiningHallRecord>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "hall", default)]
    halls: Vec<DiningHallRecord>,
}

impl Catalog {
    /// Build a catalog from arbitrary records, validating each one
    pub fn new(halls: Vec<DiningHallRecord>) -> Result<Self, CatalogError> {
        if halls.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for hall in &halls {
            if !seen.insert(hall.name.as_str()) {
                return Err(CatalogError::DuplicateName(hall.name.clone()));
            }
            if hall.price_range.min > hall.price_range.max {
                return Err(CatalogError::InvalidHall {
                    name: hall.name.clone(),
                    reason: format!(
                        "price minimum {} exceeds maximum {}",
                        hall.price_range.min, hall.price_range.max
                    ),
                });
            }
            if !(0.0..=10.0).contains(&hall.base_score) {
                return Err(CatalogError::InvalidHall {
                    name: hall.name.clone(),
                    reason: format!("base score {} outside [0, 10]", hall.base_score),
                });
            }
        }

        Ok(Self { halls })
    }

    /// Parse a catalog from TOML `[[hall]]` tables
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::new(file.halls)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// The eight north-campus canteens
    pub fn builtin() -> Self {
        Self {
            halls: builtin_halls(),
        }
    }

    pub fn all(&self) -> &[DiningHallRecord] {
        &self.halls
    }

    pub fn len(&self) -> usize {
        self.halls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.halls.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&DiningHallRecord> {
        self.halls.iter().find(|hall| hall.name == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn hall(
    name: &str,
    hall_type: HallType,
    price: (u32, u32),
    base_score: f64,
    location: &str,
    specialty: &str,
    popular_dishes: [&str; 3],
    operating_hours: &str,
    seat_count: u32,
) -> DiningHallRecord {
    DiningHallRecord {
        name: name.to_string(),
        hall_type,
        price_range: PriceRange::new(price.0, price.1),
        base_score,
        location: location.to_string(),
        specialty: specialty.to_string(),
        popular_dishes: popular_dishes.iter().map(|d| d.to_string()).collect(),
        operating_hours: operating_hours.to_string(),
        seat_count,
    }
}

fn builtin_halls() -> Vec<DiningHallRecord> {
    vec![
        hall(
            "North 1 Canteen",
            HallType::MassMarket,
            (8, 12),
            8.5,
            "Beside teaching building A",
            "Cheapest prices, traditional dishes",
            ["Twice-cooked pork set", "Mapo tofu", "Kung pao chicken"],
            "06:30-20:30",
            500,
        ),
        hall(
            "North 2 Canteen",
            HallType::Regional,
            (10, 18),
            9.0,
            "Student activity center, 1F",
            "Sichuan snacks, numbing and spicy",
            ["Yibin burning noodles", "Leshan bobo chicken", "Chongqing noodles"],
            "10:00-21:30",
            400,
        ),
        hall(
            "North 3 Canteen",
            HallType::Halal,
            (12, 20),
            8.3,
            "Next to the international student apartments",
            "Halal food, beef and lamb specialties",
            ["Lanzhou hand-pulled noodles", "Lamb paomo", "Big plate chicken"],
            "07:00-20:00",
            300,
        ),
        hall(
            "North 4 Canteen",
            HallType::FastFood,
            (10, 16),
            7.8,
            "Library, B1",
            "Fast and convenient, easy takeaway",
            ["Burger set", "Braised chicken rice", "Rice with toppings"],
            "06:30-21:00",
            350,
        ),
        hall(
            "North 5 Canteen",
            HallType::Buffet,
            (15, 25),
            9.2,
            "Beside the gymnasium",
            "Wide variety, serve yourself",
            ["Buffet", "Fruit salad", "Mini hotpot"],
            "11:00-20:30",
            450,
        ),
        hall(
            "North 6 Canteen",
            HallType::Staff,
            (15, 30),
            8.8,
            "Administration building, 1F",
            "Quiet, mostly faculty",
            ["Staff set meal", "Balanced meal", "Made-to-order stir fry"],
            "11:00-13:30, 17:00-19:00",
            200,
        ),
        hall(
            "North 7 Canteen",
            HallType::FoodCourt,
            (12, 25),
            8.6,
            "Commercial street, 2F",
            "Flavors from across the country",
            ["Crossing-the-bridge noodles", "Shaxian snacks", "Cantonese roast meats"],
            "10:00-22:00",
            600,
        ),
        hall(
            "North 8 Canteen",
            HallType::LateNight,
            (15, 35),
            9.5,
            "Center of the dormitory area",
            "Long hours, plenty of late-night food",
            ["Xichang brazier barbecue", "Fried chicken burger", "Hotpot maocai"],
            "16:00-23:00",
            500,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.len(), 8);
        let types: HashSet<HallType> = catalog.all().iter().map(|h| h.hall_type).collect();
        assert_eq!(types.len(), 8);
        assert!(Catalog::new(catalog.all().to_vec()).is_ok());
    }

    #[test]
    fn test_builtin_display_order() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.all()[0].hall_type, HallType::MassMarket);
        assert_eq!(catalog.all()[7].hall_type, HallType::LateNight);
        assert_eq!(catalog.get("North 6 Canteen").unwrap().hall_type, HallType::Staff);
        assert!(catalog.get("South 1 Canteen").is_none());
    }

    #[test]
    fn test_from_toml() {
        let source = r#"
            [[hall]]
            name = "Test Hall"
            type = "buffet"
            priceRange = { min = 10, max = 20 }
            baseScore = 7.5
            location = "Block C"
            specialty = "Everything"
            popularDishes = ["Rice"]
            operatingHours = "10:00-20:00"
            seatCount = 120
        "#;

        let catalog = Catalog::from_toml_str(source).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.all()[0].hall_type, HallType::Buffet);
        assert_eq!(catalog.all()[0].price_range, PriceRange::new(10, 20));
    }

    #[test]
    fn test_rejects_bad_catalogs() {
        assert!(matches!(Catalog::new(vec![]), Err(CatalogError::Empty)));
        assert!(matches!(Catalog::from_toml_str(""), Err(CatalogError::Empty)));

        let mut dup = Catalog::builtin().all().to_vec();
        dup.push(dup[0].clone());
        assert!(matches!(Catalog::new(dup), Err(CatalogError::DuplicateName(_))));

        let mut inverted = Catalog::builtin().all()[0].clone();
        inverted.price_range = PriceRange::new(20, 10);
        assert!(matches!(
            Catalog::new(vec![inverted]),
            Err(CatalogError::InvalidHall { .. })
        ));

        let mut overrated = Catalog::builtin().all()[0].clone();
        overrated.base_score = 11.0;
        assert!(matches!(
            Catalog::new(vec![overrated]),
            Err(CatalogError::InvalidHall { .. })
        ));
    }
}
