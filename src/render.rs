//! Render - how a host turns a [`LoadState`] into something to draw.
//!
//! A host shows one of three things: a loading indicator, the error message,
//! or the list of cells. Drawing a single cell is left to a [`CellRenderer`]
//! the host supplies; [`render`] only does the branching.
//!
//! ```ignore
//! use catalog_loader::render::{render, Section};
//!
//! let section = render(&loader.current_state(), |record: &Record| {
//!     format!("{} {:.2}", record.name_str().unwrap_or(""), record.price_f64().unwrap_or(0.0))
//! });
//! ```

use crate::catalog::Record;
use crate::loader::LoadState;

/// Text a host can show while loading.
pub const LOADING_TEXT: &str = "Loading...";

/// Turns one record into a rendered cell.
pub trait CellRenderer {
    type Cell;

    fn render_cell(&self, record: &Record) -> Self::Cell;
}

impl<F, C> CellRenderer for F
where
    F: Fn(&Record) -> C,
{
    type Cell = C;

    fn render_cell(&self, record: &Record) -> C {
        self(record)
    }
}

/// What the host should draw for a given state.
#[derive(Debug, Clone, PartialEq)]
pub enum Section<C> {
    Loading,
    Error { message: String },
    List { cells: Vec<C> },
}

impl<C> Section<C> {
    pub fn is_list(&self) -> bool {
        matches!(self, Section::List { .. })
    }
}

/// Branch on `state`, rendering one cell per record in order.
pub fn render<R: CellRenderer>(state: &LoadState, renderer: R) -> Section<R::Cell> {
    match state {
        LoadState::Loading => Section::Loading,
        LoadState::Failed { message } => Section::Error {
            message: message.clone(),
        },
        LoadState::Ready { records } => Section::List {
            cells: records.iter().map(|r| renderer.render_cell(r)).collect(),
        },
    }
}
