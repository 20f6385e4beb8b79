//! Room records

use serde::Deserialize;

use super::de;

/// A bookable room as listed by `GET /salas`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Room {
    #[serde(rename = "nombre_sala")]
    pub name: String,
    #[serde(rename = "edificio")]
    pub building: String,
    #[serde(rename = "capacidad")]
    pub capacity: u32,
    #[serde(rename = "tipo_sala")]
    pub category: RoomCategory,
    #[serde(rename = "piso", default, deserialize_with = "de::non_empty")]
    pub floor: Option<String>,
    #[serde(rename = "equipamiento", default, deserialize_with = "de::non_empty")]
    pub equipment: Option<String>,
    #[serde(rename = "direccion", default, deserialize_with = "de::non_empty")]
    pub address: Option<String>,
    #[serde(rename = "departamento", default, deserialize_with = "de::non_empty")]
    pub department: Option<String>,
}

/// Who may book a room.
///
/// Unknown codes are kept verbatim and displayed unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum RoomCategory {
    /// `libre`
    FreeUse,
    /// `posgrado`
    Postgraduate,
    /// `docente`
    Faculty,
    Other(String),
}

impl RoomCategory {
    /// Maps a backend code to a category. Total: unknown codes become `Other`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "libre" => Self::FreeUse,
            "posgrado" => Self::Postgraduate,
            "docente" => Self::Faculty,
            other => Self::Other(other.to_string()),
        }
    }

    /// Display label.
    pub fn label(&self) -> &str {
        match self {
            Self::FreeUse => "Uso Libre",
            Self::Postgraduate => "Posgrado",
            Self::Faculty => "Docente",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for RoomCategory {
    fn from(code: String) -> Self {
        match Self::from_code(&code) {
            Self::Other(_) => Self::Other(code),
            known => known,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert_eq!(RoomCategory::from_code("libre").label(), "Uso Libre");
        assert_eq!(RoomCategory::from_code("posgrado").label(), "Posgrado");
        assert_eq!(RoomCategory::from_code("docente").label(), "Docente");
    }

    #[test]
    fn test_unknown_category_passes_through() {
        for raw in ["laboratorio", "LIBRE", "", "sala de estar"] {
            let category = RoomCategory::from_code(raw);
            assert_eq!(category, RoomCategory::Other(raw.to_string()));
            assert_eq!(category.label(), raw);
        }
    }

    #[test]
    fn test_deserialize_room_with_optional_fields() {
        let room: Room = serde_json::from_value(serde_json::json!({
            "nombre_sala": "Sala 101",
            "edificio": "Central",
            "capacidad": 12,
            "tipo_sala": "posgrado",
            "piso": "",
            "direccion": "8 de Octubre 2738",
            "departamento": null
        }))
        .unwrap();

        assert_eq!(room.name, "Sala 101");
        assert_eq!(room.capacity, 12);
        assert_eq!(room.category, RoomCategory::Postgraduate);
        assert_eq!(room.floor, None);
        assert_eq!(room.equipment, None);
        assert_eq!(room.address.as_deref(), Some("8 de Octubre 2738"));
        assert_eq!(room.department, None);
    }

    #[test]
    fn test_negative_capacity_is_rejected() {
        let result = serde_json::from_value::<Room>(serde_json::json!({
            "nombre_sala": "Sala 1",
            "edificio": "B1",
            "capacidad": -3,
            "tipo_sala": "libre"
        }));
        assert!(result.is_err());
    }
}
