use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::{ExportError, Exportable};

/// Every field quoted, rows joined by `\n` without a trailing newline.
pub fn render_csv<T: Exportable>(items: &[T]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(T::CSV_HEADER)?;
    for item in items {
        writer.write_record(item.csv_fields())?;
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    let mut body = String::from_utf8(bytes)?;
    if body.ends_with('\n') {
        body.pop();
    }
    Ok(body)
}
