//! HTML rendering.
//!
//! Cell text passes through [`Escaping`] before it is spliced into the
//! template. [`Escaping::Raw`] inserts values verbatim, so an inventory value
//! containing markup ends up as markup in the report.

use std::borrow::Cow;

use super::model::{Report, ReportCell};

const TITLE: &str = "Agent Status and Versions Report";

/// How cell text is inserted into the HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escaping {
    /// Insert text verbatim.
    #[default]
    Raw,
    /// Escape `& < > " '`.
    Html,
}

impl Escaping {
    /// Apply this escaping to `text`.
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            Escaping::Raw => Cow::Borrowed(text),
            Escaping::Html => escape_html(text),
        }
    }
}

/// Escape the HTML special characters in `text`.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Render a report as a complete HTML document.
///
/// Output depends only on `report` and `escaping`.
pub fn render_html(report: &Report, escaping: Escaping) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>{TITLE}</title>
        <style>
            body {{ font-family: Arial, sans-serif; margin: 20px; }}
            table {{ width: 100%; border-collapse: collapse; }}
            th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}
            th {{ background-color: #f2f2f2; }}
            .running {{ background-color: #d4edda; }} /* Green background */
            .inactive {{ background-color: #f8d7da; }} /* Red background */
            .version-good {{ background-color: #d4edda; }} /* Green background */
            .version-bad {{ background-color: #f8d7da; }} /* Red background */
        </style>
    </head>
    <body>
        <h1>{TITLE}</h1>
        <table>
            <tr>
                <th>Parameter</th>
                <th>Baseline</th>
    "#
    ));

    for host in &report.hosts {
        html.push_str(&format!("<th>Host: {}</th>", escaping.apply(host)));
    }
    html.push_str("</tr>");

    for row in &report.rows {
        html.push_str(&format!("<tr><td>{}</td>", escaping.apply(&row.parameter)));
        html.push_str(&format!("<td>{}</td>", escaping.apply(&row.baseline)));
        for cell in &row.cells {
            html.push_str(&render_cell(cell, escaping));
        }
        html.push_str("</tr>");
    }

    html.push_str(
        r#"
        </table>
    </body>
    </html>
    "#,
    );

    html
}

fn render_cell(cell: &ReportCell, escaping: Escaping) -> String {
    let value = escaping.apply(&cell.value);
    match cell.class {
        Some(class) => format!("<td class='{}'>{}</td>", class.css_name(), value),
        None => format!("<td>{}</td>", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::classify::CellClass;
    use crate::report::model::ReportRow;

    fn report(value: &str, class: Option<CellClass>) -> Report {
        Report {
            hosts: vec!["host1".into()],
            rows: vec![ReportRow {
                parameter: "agent_version".into(),
                baseline: "2.0".into(),
                cells: vec![ReportCell {
                    value: value.into(),
                    class,
                }],
            }],
        }
    }

    #[test]
    fn renders_header_and_row() {
        let html = render_html(&report("2.5", Some(CellClass::VersionGood)), Escaping::Raw);
        assert!(html.contains("<title>Agent Status and Versions Report</title>"));
        assert!(html.contains("<th>Host: host1</th></tr>"));
        assert!(html.contains(
            "<tr><td>agent_version</td><td>2.0</td><td class='version-good'>2.5</td></tr>"
        ));
        assert!(html.ends_with("</html>\n    "));
    }

    #[test]
    fn neutral_class_renders_empty_attribute() {
        let html = render_html(&report("latest", Some(CellClass::Neutral)), Escaping::Raw);
        assert!(html.contains("<td class=''>latest</td>"));
    }

    #[test]
    fn plain_cell_has_no_class_attribute() {
        let html = render_html(&report("eu-west", None), Escaping::Raw);
        assert!(html.contains("<td>eu-west</td></tr>"));
    }

    #[test]
    fn raw_escaping_keeps_markup() {
        let html = render_html(&report("<b>2.5</b>", None), Escaping::Raw);
        assert!(html.contains("<td><b>2.5</b></td>"));
    }

    #[test]
    fn html_escaping_neutralizes_markup() {
        let html = render_html(&report("<script>'x' & \"y\"</script>", None), Escaping::Html);
        assert!(html.contains(
            "<td>&lt;script&gt;&#39;x&#39; &amp; &quot;y&quot;&lt;/script&gt;</td>"
        ));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn escape_borrows_clean_text() {
        assert!(matches!(escape_html("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn rendering_is_deterministic() {
        let r = report("2.5", Some(CellClass::VersionGood));
        assert_eq!(render_html(&r, Escaping::Raw), render_html(&r, Escaping::Raw));
    }
}
