//! HTML table snippets for mail bodies.
//!
//! Builds a `<style>` block plus `<table>` markup that survives being pasted
//! into an HTML mail body, where external stylesheets are not an option.

/// Colors for the generated table CSS.
///
/// Unset fields fall back to the stock palette when the block is rendered.
/// The struct is plain data passed by value per call, so one render can never
/// leak colors into the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableStyle {
    pub header_bg: Option<String>,
    pub header_fg: Option<String>,
    pub th_border_color: Option<String>,
    pub td_border_color: Option<String>,
}

impl TableStyle {
    fn header_bg(&self) -> &str {
        self.header_bg.as_deref().unwrap_or("#1F77B4")
    }

    fn header_fg(&self) -> &str {
        self.header_fg.as_deref().unwrap_or("#FFFFFF")
    }

    fn th_border_color(&self) -> &str {
        self.th_border_color.as_deref().unwrap_or("#222222")
    }

    fn td_border_color(&self) -> &str {
        self.td_border_color.as_deref().unwrap_or("#222222")
    }
}

const STYLE_TEMPLATE: &str = r#"<style type="text/css">
  table {
    border-collapse:collapse;
    border-spacing:0;
  }
  table td {
    font-family:Arial, sans-serif;
    font-size:14px;
    padding:5px 10px;
    border-style:solid;
    border-width:1px;
    overflow:hidden;
    word-break:normal;
    border-color: @td-border-color@;
    text-align: right;
    width: 100px;
  }
  table th {
    font-family:Arial, Helvetica, sans-serif !important;
    font-size:14px;
    font-weight:bold;
    padding:5px 10px;
    border-style:solid;
    border-width:1px;
    overflow:hidden;
    word-break:normal;
    background-color:@header-bg@;
    color:@header-fg@;
    vertical-align:top;
    border-color: @th-border-color@;
    width: 100px;
  }
</style>"#;

/// Render the inline `<style>` block with the resolved colors.
pub fn style_block(style: &TableStyle) -> String {
    STYLE_TEMPLATE
        .replace("@header-bg@", style.header_bg())
        .replace("@header-fg@", style.header_fg())
        .replace("@th-border-color@", style.th_border_color())
        .replace("@td-border-color@", style.td_border_color())
}

fn row_markup(cells: &[String], tag: &str) -> String {
    let cells: Vec<String> = cells
        .iter()
        .map(|cell| format!("<{tag}>{cell}</{tag}>"))
        .collect();
    format!("<tr>\n{}\n</tr>", cells.join("\n"))
}

/// Render rows of cells as a styled HTML table.
///
/// When `first_is_header` is set, the first row is emitted with `<th>` cells
/// and the rest with `<td>`; otherwise every row is a body row. Cell text is
/// inserted verbatim, so callers rendering untrusted data must escape it
/// first.
pub fn rows_to_table(rows: &[Vec<String>], first_is_header: bool, style: &TableStyle) -> String {
    let mut out = style_block(style);
    out.push_str("<table class=\"tg\">\n");

    let mut body = rows.iter();
    if first_is_header {
        if let Some(header) = body.next() {
            out.push_str(&row_markup(header, "th"));
            out.push('\n');
        }
    }

    let body_rows: Vec<String> = body.map(|row| row_markup(row, "td")).collect();
    out.push_str(&body_rows.join("\n"));
    out.push_str("\n</table>");
    out
}
