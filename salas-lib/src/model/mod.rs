//! Records returned by the reservation backend

mod de;
mod kind;
mod reservation;
mod room;

pub use kind::*;
pub use reservation::*;
pub use room::*;

use serde::de::DeserializeOwned;

/// A record type served by one of the collection endpoints.
pub trait ListRecord: DeserializeOwned + Send + 'static {
    /// The collection this record belongs to.
    const KIND: ListKind;
}

impl ListRecord for Room {
    const KIND: ListKind = ListKind::Rooms;
}

impl ListRecord for Reservation {
    const KIND: ListKind = ListKind::Reservations;
}
