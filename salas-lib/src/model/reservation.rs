//! Reservation records

use serde::Deserialize;

use super::de;

/// A reservation as listed by `GET /reservas`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "ReservationRow")]
pub struct Reservation {
    pub id: u64,
    pub room_name: String,
    pub building: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: ReservationStatus,
    pub participants: Option<String>,
    pub participant_count: Option<u32>,
}

/// Wire shape of a reservation row.
///
/// The backend names the count `num_participantes`; older pages read
/// `cantidad_participantes`. Rows may carry either or both.
#[derive(Deserialize)]
struct ReservationRow {
    id_reserva: u64,
    nombre_sala: String,
    edificio: String,
    #[serde(deserialize_with = "de::display_text")]
    fecha: String,
    #[serde(deserialize_with = "de::display_text")]
    hora_inicio: String,
    #[serde(deserialize_with = "de::display_text")]
    hora_fin: String,
    estado: ReservationStatus,
    #[serde(default, deserialize_with = "de::non_empty")]
    participantes: Option<String>,
    #[serde(default)]
    cantidad_participantes: Option<u32>,
    #[serde(default)]
    num_participantes: Option<u32>,
}

impl From<ReservationRow> for Reservation {
    fn from(row: ReservationRow) -> Self {
        Self {
            id: row.id_reserva,
            room_name: row.nombre_sala,
            building: row.edificio,
            date: row.fecha,
            start_time: row.hora_inicio,
            end_time: row.hora_fin,
            status: row.estado,
            participants: row.participantes,
            participant_count: row.cantidad_participantes.or(row.num_participantes),
        }
    }
}

/// Lifecycle state of a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ReservationStatus {
    /// `activa`
    Active,
    /// `cancelada`
    Cancelled,
    /// `finalizada`
    Completed,
    /// `sin_asistencia`
    NoShow,
    Other(String),
}

/// Presentation marker attached to a known status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    Positive,
    Negative,
    Neutral,
    Warning,
}

impl StatusTone {
    /// CSS color for the marker.
    pub fn color(self) -> &'static str {
        match self {
            Self::Positive => "green",
            Self::Negative => "red",
            Self::Neutral => "blue",
            Self::Warning => "orange",
        }
    }
}

impl ReservationStatus {
    /// Maps a backend code to a status, ignoring case and surrounding whitespace.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "activa" => Self::Active,
            "cancelada" => Self::Cancelled,
            "finalizada" => Self::Completed,
            "sin_asistencia" => Self::NoShow,
            _ => Self::Other(code.to_string()),
        }
    }

    /// Display label. Unknown statuses are shown exactly as received.
    pub fn label(&self) -> &str {
        match self {
            Self::Active => "ACTIVA",
            Self::Cancelled => "CANCELADA",
            Self::Completed => "FINALIZADA",
            Self::NoShow => "SIN ASISTENCIA",
            Self::Other(raw) => raw,
        }
    }

    /// Marker for known statuses, `None` for unknown ones.
    pub fn tone(&self) -> Option<StatusTone> {
        match self {
            Self::Active => Some(StatusTone::Positive),
            Self::Cancelled => Some(StatusTone::Negative),
            Self::Completed => Some(StatusTone::Neutral),
            Self::NoShow => Some(StatusTone::Warning),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for ReservationStatus {
    fn from(code: String) -> Self {
        match Self::from_code(&code) {
            Self::Other(_) => Self::Other(code),
            known => known,
        }
    }
}

/// Per-status totals shown above the reservation table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub active: usize,
    pub cancelled: usize,
    pub completed: usize,
    pub no_show: usize,
}

impl StatusCounts {
    /// Tallies the known statuses in `reservations`. Unknown ones are not counted.
    pub fn tally(reservations: &[Reservation]) -> Self {
        reservations
            .iter()
            .fold(Self::default(), |mut counts, r| {
                match r.status {
                    ReservationStatus::Active => counts.active += 1,
                    ReservationStatus::Cancelled => counts.cancelled += 1,
                    ReservationStatus::Completed => counts.completed += 1,
                    ReservationStatus::NoShow => counts.no_show += 1,
                    ReservationStatus::Other(_) => {}
                }
                counts
            })
    }
}
