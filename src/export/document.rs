//! HTML document export
//!
//! Generates a self-contained, printable HTML page with the breakdown table.

use super::format::format_sk;
use super::{Report, HEADER, TITLE, YEAR_LABEL};
use chrono::NaiveDate;
use std::io::{self, Write};

const CSS: &str = r#"
        body { font-family: Helvetica, Arial, sans-serif; max-width: 40rem; margin: 2rem auto; color: #1f2937; }
        h1 { font-size: 1.5rem; }
        table { width: 100%; border-collapse: collapse; }
        th, td { padding: 0.4rem 0.6rem; border: 1px solid #d1d5db; }
        th { background: #2563eb; color: #fff; text-align: left; }
        td.value { text-align: right; font-variant-numeric: tabular-nums; }
        tr.net td { font-weight: bold; color: #15803d; }
        footer { margin-top: 1rem; font-size: 0.8rem; color: #6b7280; }
"#;

pub fn write_document<W: Write>(
    report: &Report,
    generated_on: NaiveDate,
    mut writer: W,
) -> io::Result<()> {
    writer.write_all(render(report, generated_on).as_bytes())?;
    writer.flush()
}

/// Render the report as an HTML page
pub fn render(report: &Report, generated_on: NaiveDate) -> String {
    let rows = report.report_rows();
    let last = rows.len().saturating_sub(1);

    let mut body = format!(
        "            <tr><td>{}</td><td class=\"value\">{}</td></tr>\n",
        YEAR_LABEL, report.year
    );
    for (i, row) in rows.iter().enumerate() {
        let class = if i == last { " class=\"net\"" } else { "" };
        body.push_str(&format!(
            "            <tr{}><td>{}</td><td class=\"value\">{}</td></tr>\n",
            class,
            row.label,
            format_sk(row.value)
        ));
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="sk">
<head>
    <meta charset="UTF-8">
    <title>{title} {year}</title>
    <style>{css}    </style>
</head>
<body>
    <h1>{title}</h1>
    <table>
        <thead>
            <tr><th>{item}</th><th>{value}</th></tr>
        </thead>
        <tbody>
{body}        </tbody>
    </table>
    <footer>Vygenerované {generated}</footer>
</body>
</html>
"##,
        title = TITLE,
        year = report.year,
        css = CSS,
        item = HEADER[0],
        value = HEADER[1],
        body = body,
        generated = generated_on.format("%d.%m.%Y"),
    )
}
