//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Restaurant entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "direccion", default)]
    pub address: String,
    #[serde(rename = "ciudad", default)]
    pub city: String,
    #[serde(rename = "url_foto", default)]
    pub photo_url: String,
    /// ISO timestamp assigned by the server
    #[serde(rename = "fecha_creacion", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Restaurant {
    /// "address, city" line used by pickers
    pub fn location(&self) -> String {
        format!("{}, {}", self.address, self.city)
    }
}

/// Create / update restaurant payload
///
/// The API takes the same body for both; it requires every field to be
/// non-empty on create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantInput {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "ciudad")]
    pub city: String,
    #[serde(rename = "url_foto")]
    pub photo_url: String,
}

impl From<&Restaurant> for RestaurantInput {
    fn from(r: &Restaurant) -> Self {
        Self {
            name: r.name.clone(),
            description: r.description.clone(),
            address: r.address.clone(),
            city: r.city.clone(),
            photo_url: r.photo_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_api_restaurant() {
        let r: Restaurant = serde_json::from_value(serde_json::json!({
            "id": 7,
            "nombre": "La Tagliatella",
            "descripcion": "Cocina italiana",
            "direccion": "Calle Mayor 1",
            "ciudad": "Madrid",
            "url_foto": "https://example.com/t.jpg",
            "fecha_creacion": "2025-01-01T10:00:00"
        }))
        .unwrap();
        assert_eq!(r.id, 7);
        assert_eq!(r.name, "La Tagliatella");
        assert_eq!(r.location(), "Calle Mayor 1, Madrid");
        assert_eq!(r.created_at.as_deref(), Some("2025-01-01T10:00:00"));
    }

    #[test]
    fn input_uses_wire_names() {
        let input = RestaurantInput {
            name: "Casa Pepe".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["nombre"], "Casa Pepe");
        assert_eq!(json["url_foto"], "");
    }
}
