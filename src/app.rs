use std::sync::Arc;

use anyhow::{anyhow, Result};
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::domain::entities::source::SourceFile;
use crate::domain::entities::table::Table;
use crate::domain::error::IndexError;
use crate::infra::fs::local::LocalFileStore;
use crate::ui::state::app_state::AppState;
use crate::usecase::ports::file_store::FileStore;
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::import_service::{ImportService, ImportedTable};

const DROP_PROMPT_ACTIVE: &str = "Drop the CSV file here ...";
const DROP_PROMPT_IDLE: &str = "Drag 'n' drop a CSV file here, or click to select a file";

const CELL_STYLE: &str = "border: 1px solid #bbb; padding: 4px;";
const HEADER_CELL_STYLE: &str =
    "border: 1px solid #bbb; padding: 6px; background: #f3f3f3; text-align: left; position: sticky; top: 0;";
const INPUT_STYLE: &str = "width: 100%; box-sizing: border-box; border: 1px solid #ddd; padding: 4px;";

fn drop_zone_style(drag_active: bool) -> String {
    let border = if drag_active { "#3b82f6" } else { "#d1d5db" };
    format!(
        "border: 2px dashed {border}; border-radius: 8px; padding: 32px; margin-bottom: 16px; text-align: center; cursor: pointer;"
    )
}

fn import_status(imported: &ImportedTable) -> String {
    if imported.table.is_empty() {
        format!("{} is empty", imported.source.name)
    } else {
        let rows = imported.table.row_count();
        let noun = if rows == 1 { "row" } else { "rows" };
        format!("Imported {rows} {noun} from {}", imported.source.name)
    }
}

/// Swap in a finished import, or keep the current table and source on failure.
/// Returns the status line text.
fn apply_import_result(
    table: &mut Table,
    source: &mut Option<SourceFile>,
    result: Result<ImportedTable>,
) -> String {
    match result {
        Ok(imported) => {
            let message = import_status(&imported);
            let (headers, rows) = imported.table.into_parts();
            table.set_table(headers, rows);
            *source = Some(imported.source);
            message
        }
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "import failed");
            format!("Import failed: {err:#}")
        }
    }
}

/// Claim the single import slot. False while another import is still running.
fn try_begin_import(busy: &mut bool) -> bool {
    if *busy {
        return false;
    }
    *busy = true;
    true
}

fn report_index_error(mut status: Signal<String>, err: IndexError) {
    tracing::error!(%err, "grid addressed a cell outside the table");
    status.set(format!("Internal error: {err}"));
}

#[component]
pub fn App() -> Element {
    let AppState {
        mut table,
        mut source,
        mut busy,
        mut status,
        mut drag_active,
    } = AppState::new();

    let files: Arc<dyn FileStore> = Arc::new(LocalFileStore);
    let import_service = Arc::new(ImportService::new(files.clone()));
    let export_service = Arc::new(ExportService::new(files));

    // The table is only swapped once the whole file has parsed.
    let mut apply_import = move |result: Result<ImportedTable>| {
        let message = apply_import_result(&mut table.write(), &mut source.write(), result);
        status.set(message);
    };

    let snapshot = table.read().clone();
    let has_table = !snapshot.is_empty();
    let headers = snapshot.headers().to_vec();
    let source_label = source().map(|file| file.name).unwrap_or_default();

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 16px; background: #f5f5f5; min-height: 100vh;",

            h1 { style: "font-size: 24px; font-weight: bold; margin-bottom: 16px;", "CSV Editor" }

            div {
                style: "{drop_zone_style(drag_active())}",
                onclick: {
                    let import_service = import_service.clone();
                    move |_| {
                        if busy() {
                            return;
                        }
                        let Some(path) = FileDialog::new()
                            .add_filter("CSV", &["csv"])
                            .add_filter("All files", &["*"])
                            .pick_file()
                        else {
                            return;
                        };
                        if !try_begin_import(&mut busy.write()) {
                            return;
                        }
                        status.set(format!("Importing {}", path.display()));
                        apply_import(import_service.import_path(&path));
                        busy.set(false);
                    }
                },
                ondragover: move |event: DragEvent| {
                    event.prevent_default();
                    drag_active.set(true);
                },
                ondragleave: move |_| drag_active.set(false),
                ondrop: {
                    let import_service = import_service.clone();
                    move |event: DragEvent| {
                        event.prevent_default();
                        drag_active.set(false);
                        let import_service = import_service.clone();
                        let file = event.files().into_iter().next();
                        let claimed = match file {
                            None => {
                                status.set("No file found in drop".to_string());
                                false
                            }
                            Some(_) if !try_begin_import(&mut busy.write()) => {
                                status.set("An import is already running".to_string());
                                false
                            }
                            Some(_) => true,
                        };
                        async move {
                            let Some(file) = file.filter(|_| claimed) else {
                                return;
                            };
                            let name = file.name();
                            status.set(format!("Importing {name}"));
                            let result = match file.read_bytes().await {
                                Ok(bytes) => import_service.import_bytes(&name, &bytes),
                                Err(err) => Err(anyhow!("failed to read {name}: {err}")),
                            };
                            apply_import(result);
                            busy.set(false);
                        }
                    }
                },
                if drag_active() {
                    p { "{DROP_PROMPT_ACTIVE}" }
                } else {
                    p { "{DROP_PROMPT_IDLE}" }
                }
            }

            if has_table {
                if !source_label.is_empty() {
                    p { style: "color: #555; margin-bottom: 8px;", "{source_label}" }
                }

                table { style: "border-collapse: collapse; width: 100%; background: #fff; margin-bottom: 16px;",
                    thead {
                        tr {
                            for header in headers.iter() {
                                th { style: "{HEADER_CELL_STYLE}", "{header}" }
                            }
                            th { style: "{HEADER_CELL_STYLE}", "Actions" }
                        }
                    }
                    tbody {
                        {snapshot.rows().iter().enumerate().map(|(row_idx, row)| {
                            let row = row.clone();
                            rsx!(
                                tr { key: "{row_idx}",
                                    {row.into_iter().enumerate().map(|(col_idx, value)| {
                                        rsx!(
                                            td { style: "{CELL_STYLE}",
                                                input {
                                                    style: "{INPUT_STYLE}",
                                                    value: "{value}",
                                                    oninput: move |event: FormEvent| {
                                                        let edited = table
                                                            .write()
                                                            .edit_cell(row_idx, col_idx, event.value());
                                                        if let Err(err) = edited {
                                                            report_index_error(status, err);
                                                        }
                                                    }
                                                }
                                            }
                                        )
                                    })}
                                    td { style: "{CELL_STYLE}",
                                        button {
                                            style: "background: #dc2626; color: #fff; border: none; padding: 4px 10px; border-radius: 4px;",
                                            disabled: busy(),
                                            onclick: move |_| {
                                                let deleted = table.write().delete_row(row_idx);
                                                match deleted {
                                                    Ok(_) => status.set(format!("Deleted row {}", row_idx + 1)),
                                                    Err(err) => report_index_error(status, err),
                                                }
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            )
                        })}
                    }
                }

                div {
                    style: "display: flex; justify-content: space-between; margin-bottom: 16px;",
                    button {
                        disabled: busy(),
                        onclick: move |_| {
                            let row_idx = table.write().add_row();
                            tracing::debug!(row = row_idx, "added row");
                            status.set(format!("Added row {}", row_idx + 1));
                        },
                        "Add Row"
                    }
                    button {
                        style: "background: #22c55e; color: #fff; font-weight: bold; border: none; padding: 8px 16px; border-radius: 4px;",
                        disabled: busy(),
                        onclick: {
                            let export_service = export_service.clone();
                            move |_| {
                                let current_source = source();
                                let file_name = export_service.file_name(current_source.as_ref());
                                let Some(path) = FileDialog::new()
                                    .set_file_name(&file_name)
                                    .add_filter("CSV", &["csv"])
                                    .save_file()
                                else {
                                    return;
                                };
                                match export_service.export_to_path(&table.read(), &path) {
                                    Ok(_) => status.set(format!("Saved {}", path.display())),
                                    Err(err) => {
                                        tracing::warn!(error = %format!("{err:#}"), "export failed");
                                        status.set(format!("Export failed: {err:#}"));
                                    }
                                }
                            }
                        },
                        "Download CSV"
                    }
                }
            }

            p { style: "color: #333;", "{status}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn loaded() -> (Table, Option<SourceFile>) {
        (
            Table::new(strings(&["name", "age"]), vec![strings(&["Alice", "30"])]),
            Some(SourceFile::new("people.csv")),
        )
    }

    #[test]
    fn import_status_uses_singular_for_one_row() {
        let imported = ImportedTable {
            table: Table::new(strings(&["a"]), vec![strings(&["1"])]),
            source: SourceFile::new("numbers.csv"),
        };

        assert_eq!(import_status(&imported), "Imported 1 row from numbers.csv");
    }

    #[test]
    fn import_status_uses_plural_for_many_rows() {
        let imported = ImportedTable {
            table: Table::new(strings(&["a"]), vec![strings(&["1"]), strings(&["2"])]),
            source: SourceFile::new("numbers.csv"),
        };

        assert_eq!(import_status(&imported), "Imported 2 rows from numbers.csv");
    }

    #[test]
    fn failed_import_keeps_table_and_source() {
        let (mut table, mut source) = loaded();
        let (table_before, source_before) = (table.clone(), source.clone());

        let status = apply_import_result(
            &mut table,
            &mut source,
            Err(anyhow!("failed to parse csv: broken.csv")),
        );

        assert!(status.starts_with("Import failed"), "status: {status}");
        assert_eq!(table, table_before, "table should be untouched");
        assert_eq!(source, source_before, "source should be untouched");
    }

    #[test]
    fn successful_import_replaces_table_and_source() {
        let (mut table, mut source) = loaded();
        let imported = ImportedTable {
            table: Table::new(strings(&["sku"]), vec![strings(&["A1"]), strings(&["B2"])]),
            source: SourceFile::new("stock.csv"),
        };

        let status = apply_import_result(&mut table, &mut source, Ok(imported));

        assert_eq!(status, "Imported 2 rows from stock.csv");
        assert_eq!(table.headers(), strings(&["sku"]).as_slice());
        assert_eq!(
            table.rows(),
            [strings(&["A1"]), strings(&["B2"])].as_slice(),
            "no rows from the previous table should survive"
        );
        assert_eq!(source, Some(SourceFile::new("stock.csv")));
    }

    #[test]
    fn empty_import_clears_grid() {
        let (mut table, mut source) = loaded();
        let imported = ImportedTable {
            table: Table::default(),
            source: SourceFile::new("blank.csv"),
        };

        let status = apply_import_result(&mut table, &mut source, Ok(imported));

        assert_eq!(status, "blank.csv is empty");
        assert!(table.is_empty(), "empty import should leave nothing to render");
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn second_import_is_refused_while_first_runs() {
        let mut busy = false;

        assert!(try_begin_import(&mut busy), "first import should start");
        assert!(!try_begin_import(&mut busy), "overlapping import should be refused");
        assert!(busy, "slot stays claimed until the first import finishes");

        busy = false;
        assert!(try_begin_import(&mut busy), "slot is free again after finishing");
    }

    #[test]
    fn import_status_flags_empty_file() {
        let imported = ImportedTable {
            table: Table::default(),
            source: SourceFile::new("blank.csv"),
        };

        assert_eq!(import_status(&imported), "blank.csv is empty");
    }

    #[test]
    fn drop_zone_highlights_while_dragging() {
        assert!(drop_zone_style(true).contains("#3b82f6"));
        assert!(drop_zone_style(false).contains("#d1d5db"));
    }
}
