use dioxus::prelude::*;

use crate::core::csv::{build_csv, csv_filename};
use crate::core::{Dataset, Selection};
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Done(String),
    Error(String),
}

/// A ready-to-deliver CSV document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub body: String,
}

/// `None` when the selection no longer resolves to any data.
pub fn prepare_export(dataset: &Dataset, selection: &Selection) -> Option<CsvExport> {
    let body = build_csv(dataset, &selection.dashboard, &selection.quarter);
    if body.is_empty() {
        return None;
    }
    Some(CsvExport {
        filename: csv_filename(selection),
        body,
    })
}

#[component]
pub fn ExportButton(selection: Selection) -> Element {
    // Keyed by selection in the page, so a new selection starts from Idle.
    let mut status = use_signal(|| ExportStatus::Idle);

    let on_click = move |_| {
        let dataset = Dataset::builtin();
        let Some(export) = prepare_export(&dataset, &selection) else {
            status.set(ExportStatus::Error(t!("export-empty")));
            return;
        };
        match deliver_csv(&export) {
            Ok(delivery) => {
                tracing::info!(filename = %export.filename, "csv export delivered");
                let message = match delivery {
                    Some(path) => t!("export-done-saved", path = path),
                    None => t!("export-done-download"),
                };
                status.set(ExportStatus::Done(message));
            }
            Err(err) => {
                tracing::warn!(%err, filename = %export.filename, "csv export failed");
                status.set(ExportStatus::Error(t!("export-error", error = err)));
            }
        }
    };

    let feedback = match &*status.read() {
        ExportStatus::Idle => None,
        ExportStatus::Done(message) => Some(("export__status export__status--success", message.clone())),
        ExportStatus::Error(message) => Some(("export__status export__status--error", message.clone())),
    };

    rsx! {
        div { class: "export",
            button {
                r#type: "button",
                id: "downloadCsv",
                class: "button button--primary",
                onclick: on_click,
                {t!("export-button")}
            }
            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", role: "status", "{message}" }
            }
        }
    }
}

/// Web: browser download, returns `None`.
/// Desktop: writes into the exports directory and returns the saved path.
fn deliver_csv(export: &CsvExport) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use crate::core::csv::CSV_MIME;
        use web_sys::{Blob, BlobPropertyBag, Url};

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&export.body));
        let mut options = BlobPropertyBag::new();
        options.type_(CSV_MIME);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|_| "blob construction rejected".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "object URL rejected".to_string())?;

        let clicked = click_download_link(&url, &export.filename);
        Url::revoke_object_url(&url).ok();
        clicked.map(|()| None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let dir = crate::core::storage::data_dir()
            .ok_or("no data directory on this platform")?
            .join("exports");
        write_export(&dir, export).map(Some)
    }
}

/// Attach a hidden `<a download>` for `url`, click it, then detach it.
#[cfg(target_arch = "wasm32")]
fn click_download_link(url: &str, filename: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlAnchorElement;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("no document")?;
    let body = document.body().ok_or("no document body")?;
    let link: HtmlAnchorElement = document
        .create_element("a")
        .ok()
        .and_then(|element| element.dyn_into().ok())
        .ok_or("could not create download link")?;
    link.set_href(url);
    link.set_download(filename);
    link.set_hidden(true);

    body.append_child(&link)
        .map_err(|_| "could not attach download link".to_string())?;
    link.click();
    link.remove();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn write_export(dir: &std::path::Path, export: &CsvExport) -> Result<String, String> {
    std::fs::create_dir_all(dir).map_err(|err| err.to_string())?;
    let path = dir.join(&export.filename);
    std::fs::write(&path, &export.body).map_err(|err| err.to_string())?;
    Ok(path.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_is_named_after_selection() {
        let export = prepare_export(&Dataset::builtin(), &Selection::new("marketing", "Q2")).unwrap();
        assert_eq!(export.filename, "marketing-Q2.csv");
        assert!(export.body.starts_with("Dashboard,Pipeline Acceleration\nQuarter,Q2\n"));
    }

    #[test]
    fn stale_selection_exports_nothing() {
        let data = Dataset::builtin();
        assert_eq!(prepare_export(&data, &Selection::new("revenue", "Q9")), None);
        assert_eq!(prepare_export(&data, &Selection::new("finance", "Q1")), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn desktop_export_lands_in_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("exports");
        let export = prepare_export(&Dataset::builtin(), &Selection::new("revenue", "Q1")).unwrap();

        assert!(export.body.contains("bookings—keep"));

        let path = write_export(&dir, &export).unwrap();
        assert!(path.ends_with("revenue-Q1.csv"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), export.body);
    }
}
