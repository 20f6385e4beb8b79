use super::Cell;
use super::TableRecord;
use crate::model::Room;

impl TableRecord for Room {
    fn headers() -> &'static [&'static str] {
        &[
            "Nombre",
            "Edificio",
            "Capacidad",
            "Tipo",
            "Piso",
            "Equipamiento",
            "Dirección",
            "Departamento",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.name).strong(),
            Cell::text(&self.building),
            Cell::text(format!("{} personas", self.capacity)),
            Cell::text(self.category.label()),
            Cell::optional(self.floor.as_deref(), "N/A"),
            Cell::optional(self.equipment.as_deref(), "Sin equipamiento"),
            Cell::optional(self.address.as_deref(), "-"),
            Cell::optional(self.department.as_deref(), "-"),
        ]
    }
}
