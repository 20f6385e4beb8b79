//! The list renderer

use std::sync::Arc;

use log::error;
use log::info;

use crate::client::ListClient;
use crate::model::ListKind;
use crate::model::Reservation;
use crate::model::Room;
use crate::render;
use crate::render::TableRecord;
use crate::sink::OutputSink;

/// Which state a render left its region in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// A table with this many rows.
    Table(usize),
    /// The empty-state message.
    Empty,
    /// The error block.
    Failed,
}

impl RenderOutcome {
    /// Returns `true` if the region holds the error block.
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Loads a collection and writes its rendering into the collection's region.
///
/// Each [`render`](ListRenderer::render) call:
///
/// 1. replaces the region with the loading placeholder,
/// 2. issues one GET (no retry),
/// 3. replaces the region with the table, the empty-state message or an
///    error block.
///
/// Failures never escape `render`; they are logged and rendered, and the
/// returned [`RenderOutcome`] only reports which state the region ended in.
/// Calling `render` again is the retry.
///
/// Overlapping calls for the same kind are not sequenced: whichever
/// response arrives last wins the region.
#[derive(Clone)]
pub struct ListRenderer {
    client: ListClient,
    sink: Arc<dyn OutputSink>,
}

impl ListRenderer {
    /// Creates a renderer writing into `sink`.
    pub fn new(client: ListClient, sink: impl OutputSink + 'static) -> Self {
        Self {
            client,
            sink: Arc::new(sink),
        }
    }

    /// Creates a renderer writing into a sink shared with other owners.
    pub fn with_shared_sink(client: ListClient, sink: Arc<dyn OutputSink>) -> Self {
        Self { client, sink }
    }

    /// Loads `kind` and replaces its region with the result.
    pub async fn render(&self, kind: ListKind) -> RenderOutcome {
        match kind {
            ListKind::Rooms => self.render_list::<Room>().await,
            ListKind::Reservations => self.render_list::<Reservation>().await,
        }
    }

    async fn render_list<R: TableRecord>(&self) -> RenderOutcome {
        let kind = R::KIND;
        let region = kind.region();

        self.sink.replace(region, render::loading(kind));

        let (outcome, content) = match self.client.fetch::<R>().await {
            Ok(records) if records.is_empty() => {
                info!("no {} to show", kind);
                (RenderOutcome::Empty, render::empty(kind))
            }
            Ok(records) => {
                info!("rendering {} {}", records.len(), kind);
                (RenderOutcome::Table(records.len()), render::table(&records))
            }
            Err(e) => {
                error!("failed to load {} from {}: {}", kind, self.client.base_url(), e);
                (
                    RenderOutcome::Failed,
                    render::failure(kind, self.client.base_url(), &e),
                )
            }
        };

        self.sink.replace(region, content);
        outcome
    }
}
