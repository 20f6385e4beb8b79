//! HTML rendering of list states
//!
//! Every function here returns the complete content of an output region:
//! the loading placeholder, the empty-state message, the table with its
//! summary line, or the error block.

mod html;
mod reservations;
mod rooms;

pub use html::Cell;
pub use html::escape_html;

use std::error::Error as StdError;

use crate::error::Error;
use crate::error::TransportError;
use crate::model::ListKind;
use crate::model::ListRecord;

/// A record that can be rendered as one table row.
pub trait TableRecord: ListRecord {
    /// Column headers, in cell order.
    fn headers() -> &'static [&'static str];

    /// The cells of this record's row.
    fn cells(&self) -> Vec<Cell>;

    /// Optional markup placed before the table.
    fn preamble(_records: &[Self]) -> Option<String> {
        None
    }
}

struct Texts {
    noun: &'static str,
    loading: &'static str,
    empty: &'static str,
    total: &'static str,
    error_title: &'static str,
}

fn texts(kind: ListKind) -> Texts {
    match kind {
        ListKind::Rooms => Texts {
            noun: "las salas",
            loading: "Cargando salas...",
            empty: "No hay salas disponibles.",
            total: "Total de salas disponibles",
            error_title: "Error al cargar salas",
        },
        ListKind::Reservations => Texts {
            noun: "las reservas",
            loading: "Cargando reservas...",
            empty: "No hay reservas registradas.",
            total: "Total de reservas",
            error_title: "Error al cargar reservas",
        },
    }
}

/// Placeholder shown while a load is in flight.
pub fn loading(kind: ListKind) -> String {
    format!("<p class=\"mensaje-carga\">{}</p>\n", texts(kind).loading)
}

/// Message shown for a successful load with zero results.
pub fn empty(kind: ListKind) -> String {
    format!("<p class=\"mensaje-vacio\">{}</p>\n", texts(kind).empty)
}

/// The table for `records` followed by the `Total: N` summary line.
pub fn table<R: TableRecord>(records: &[R]) -> String {
    let mut out = String::new();
    if let Some(preamble) = R::preamble(records) {
        out.push_str(&preamble);
    }
    html::write_table(&mut out, R::headers(), records.iter().map(R::cells));
    out.push_str(&format!(
        "<p class=\"total\">{}: {}</p>\n",
        texts(R::KIND).total,
        records.len()
    ));
    out
}

/// Error block for a failed load, with the error detail and a retry button.
pub fn failure(kind: ListKind, base_url: &str, error: &Error) -> String {
    let texts = texts(kind);
    let explanation = match error {
        Error::Transport(TransportError::Status { status, .. }) => format!(
            "El servidor respondió con el estado {} al pedir {}.",
            status, texts.noun
        ),
        Error::Transport(e) if e.is_timeout() => format!(
            "El servidor no respondió a tiempo al pedir {}.",
            texts.noun
        ),
        Error::Protocol(_) => format!(
            "El servidor devolvió una respuesta inválida para {}.",
            texts.noun
        ),
        _ => format!(
            "No se pudo conectar con el servidor para obtener {}.",
            texts.noun
        ),
    };

    format!(
        "<div class=\"mensaje-error\">\n\
         <h3>{title}</h3>\n\
         <p>{explanation}</p>\n\
         <p>Verifica que el backend esté corriendo en <code>{base_url}</code>.</p>\n\
         <p class=\"error-tecnico\"><strong>Error técnico:</strong> {detail}</p>\n\
         <button type=\"button\" data-retry=\"{path}\">Reintentar</button>\n\
         </div>\n",
        title = texts.error_title,
        explanation = explanation,
        base_url = escape_html(base_url),
        detail = escape_html(&error_detail(error)),
        path = kind.path(),
    )
}

/// Flattens an error and its sources into one line, skipping sources whose
/// text is already part of the message.
pub fn error_detail(error: &dyn StdError) -> String {
    let mut detail = error.to_string();
    let mut source = error.source();
    while let Some(err) = source {
        let text = err.to_string();
        if !detail.contains(&text) {
            detail.push_str(": ");
            detail.push_str(&text);
        }
        source = err.source();
    }
    detail
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProtocolError;
    use crate::model::Room;

    fn room(name: &str, category: &str) -> Room {
        serde_json::from_value(serde_json::json!({
            "nombre_sala": name,
            "edificio": "B1",
            "capacidad": 10,
            "tipo_sala": category
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_has_no_table() {
        for kind in ListKind::ALL {
            let html = empty(kind);
            assert!(!html.contains("<table"));
            assert!(!html.contains("mensaje-error"));
        }
        assert!(empty(ListKind::Reservations).contains("No hay reservas registradas."));
    }

    #[test]
    fn test_table_has_one_row_per_record_and_total() {
        let rooms: Vec<_> = (0..4).map(|i| room(&format!("Sala {}", i), "libre")).collect();
        let html = table(&rooms);
        assert_eq!(html.matches("<tr class=\"row\">").count(), 4);
        assert!(html.contains("Total de salas disponibles: 4"));
    }

    #[test]
    fn test_table_escapes_record_text() {
        let html = table(&[room("<b>Sala</b>", "libre")]);
        assert!(html.contains("&lt;b&gt;Sala&lt;/b&gt;"));
        assert!(!html.contains("<b>Sala</b>"));
    }

    #[test]
    fn test_failure_for_status_mentions_code() {
        let error = Error::from(TransportError::status(500, "{}"));
        let html = failure(ListKind::Rooms, "http://localhost:5000/api", &error);
        assert!(html.contains("mensaje-error"));
        assert!(html.contains("500"));
        assert!(html.contains("Reintentar"));
        assert!(!html.contains("No hay salas"));
    }

    #[test]
    fn test_failure_for_protocol_error_includes_reason() {
        let error = Error::from(ProtocolError::unsuccessful(None));
        let html = failure(ListKind::Reservations, "http://localhost:5000/api", &error);
        assert!(html.contains("Error al cargar reservas"));
        assert!(html.contains("backend reported failure"));
        assert!(html.contains("data-retry=\"reservas\""));
    }

    #[test]
    fn test_error_detail_skips_repeated_sources() {
        #[derive(Debug, thiserror::Error)]
        #[error("outer: {0}")]
        struct Outer(#[source] std::io::Error);

        let err = Outer(std::io::Error::other("connection refused"));
        assert_eq!(error_detail(&err), "outer: connection refused");
    }
}
