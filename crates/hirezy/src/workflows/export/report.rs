use chrono::{DateTime, Utc};

use super::Exportable;

pub fn render_report<T: Exportable>(
    title: &str,
    total_label: &str,
    items: &[T],
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&format!(
        "Generated: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("{total_label}: {}\n", items.len()));
    out.push_str(&"=".repeat(40));
    out.push('\n');

    for (index, item) in items.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{}. {}\n", index + 1, item.report_heading()));
        for (label, value) in item.report_details() {
            out.push_str(&format!("   {label}: {value}\n"));
        }
    }

    out
}
