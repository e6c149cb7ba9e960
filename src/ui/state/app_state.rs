use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::source::SourceFile;
use crate::domain::entities::table::Table;

pub const READY_STATUS: &str = "Ready";

pub struct AppState {
    pub table: Signal<Table>,
    pub source: Signal<Option<SourceFile>>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
    pub drag_active: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            table: use_signal(Table::default),
            source: use_signal(|| None::<SourceFile>),
            busy: use_signal(|| false),
            status: use_signal(|| READY_STATUS.to_string()),
            drag_active: use_signal(|| false),
        }
    }
}
