use super::Cell;
use super::TableRecord;
use crate::model::Reservation;
use crate::model::StatusCounts;

impl TableRecord for Reservation {
    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "Sala",
            "Edificio",
            "Fecha",
            "Horario",
            "Estado",
            "Participantes",
            "Cantidad",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.id.to_string()),
            Cell::text(&self.room_name),
            Cell::text(&self.building),
            Cell::text(&self.date),
            Cell::text(format!("{} - {}", self.start_time, self.end_time)),
            Cell::text(self.status.label())
                .strong()
                .colored(self.status.tone().map(|t| t.color())),
            Cell::optional(self.participants.as_deref(), "-"),
            match self.participant_count {
                Some(count) => Cell::text(count.to_string()),
                None => Cell::text("-"),
            },
        ]
    }

    fn preamble(records: &[Self]) -> Option<String> {
        let counts = StatusCounts::tally(records);
        let cards = [
            ("Activas", counts.active),
            ("Canceladas", counts.cancelled),
            ("Finalizadas", counts.completed),
            ("Sin asistencia", counts.no_show),
        ];

        let mut out = String::from("<div class=\"resumen-reservas\">\n");
        for (title, count) in cards {
            out.push_str(&format!(
                "<div class=\"card-resumen\"><h4>{}</h4><p>{}</p></div>\n",
                title, count
            ));
        }
        out.push_str("</div>\n");
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::table;

    fn reservation(id: u64, status: &str) -> Reservation {
        serde_json::from_value(serde_json::json!({
            "id_reserva": id,
            "nombre_sala": "Sala A",
            "edificio": "Central",
            "fecha": "2025-11-20",
            "hora_inicio": "08:00",
            "hora_fin": "09:00",
            "estado": status
        }))
        .unwrap()
    }

    #[test]
    fn test_status_markers() {
        let html = table(&[
            reservation(1, "activa"),
            reservation(2, "cancelada"),
            reservation(3, "finalizada"),
            reservation(4, "Sin_Asistencia"),
        ]);
        assert!(html.contains(r#"<td style="color: green;"><strong>ACTIVA</strong></td>"#));
        assert!(html.contains(r#"<td style="color: red;"><strong>CANCELADA</strong></td>"#));
        assert!(html.contains(r#"<td style="color: blue;"><strong>FINALIZADA</strong></td>"#));
        assert!(html.contains(r#"<td style="color: orange;"><strong>SIN ASISTENCIA</strong></td>"#));
        assert!(!html.contains("Sin_Asistencia"));
    }

    #[test]
    fn test_unknown_status_is_unmarked() {
        let html = table(&[reservation(9, "pendiente")]);
        assert!(html.contains("<td><strong>pendiente</strong></td>"));
    }

    #[test]
    fn test_row_layout_and_summary() {
        let html = table(&[reservation(5, "activa"), reservation(6, "activa")]);
        assert!(html.contains("<td>08:00 - 09:00</td>"));
        assert_eq!(html.matches("<td>-</td>").count(), 4);
        assert!(html.contains("<h4>Activas</h4><p>2</p>"));
        assert!(html.contains("Total de reservas: 2"));
    }
}
