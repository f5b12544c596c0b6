/// CSV and plain-text downloads built in the browser
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Rows that can be written to a CSV export
pub trait CsvExportable {
    /// Literal header line, without the trailing newline
    fn header() -> &'static str;

    /// Raw cell values in header order
    fn to_csv_row(&self) -> Vec<String>;

    /// Columns that are always wrapped in quotes
    fn quoted_columns() -> &'static [usize] {
        &[]
    }
}

/// Renders header and rows, one line each, comma separated.
pub fn build_csv_content<T: CsvExportable>(data: &[T]) -> String {
    let mut csv_content = String::new();
    csv_content.push_str(T::header());
    csv_content.push('\n');

    for item in data {
        let row: Vec<String> = item
            .to_csv_row()
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                if T::quoted_columns().contains(&i) {
                    quote(cell)
                } else {
                    escape_csv_cell(cell)
                }
            })
            .collect();
        csv_content.push_str(&row.join(","));
        csv_content.push('\n');
    }
    csv_content
}

/// Exports rows to a CSV file and starts the download
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("No data to export".to_string());
    }
    // UTF-8 BOM so spreadsheet apps pick the right encoding
    let content = format!("\u{FEFF}{}", build_csv_content(data));
    download_text(&content, filename, "text/csv;charset=utf-8;")
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        quote(cell)
    } else {
        cell.to_string()
    }
}

/// Wraps `content` in a Blob of the given MIME type and downloads it
pub fn download_text(content: &str, filename: &str, mime: &str) -> Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    let blob = Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;
    download_blob(&blob, filename)
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, &'static str);

    impl CsvExportable for Row {
        fn header() -> &'static str {
            "Name,Note"
        }
        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
        fn quoted_columns() -> &'static [usize] {
            &[1]
        }
    }

    #[test]
    fn header_then_rows() {
        let csv = build_csv_content(&[Row("a", "x"), Row("b,c", "say \"hi\"")]);
        assert_eq!(csv, "Name,Note\na,\"x\"\n\"b,c\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn empty_export_has_only_header() {
        assert_eq!(build_csv_content::<Row>(&[]), "Name,Note\n");
    }
}
