//! HTML fragment helpers.

/// Escapes text for use in HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// One table cell: escaped text with optional emphasis and color marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    text: String,
    strong: bool,
    color: Option<&'static str>,
}

impl Cell {
    /// A plain text cell.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            strong: false,
            color: None,
        }
    }

    /// A text cell, or `placeholder` when the value is absent.
    pub fn optional(value: Option<&str>, placeholder: &str) -> Self {
        Self::text(value.unwrap_or(placeholder))
    }

    /// Renders the text in bold.
    pub fn strong(mut self) -> Self {
        self.strong = true;
        self
    }

    /// Colors the cell.
    pub fn colored(mut self, color: Option<&'static str>) -> Self {
        self.color = color;
        self
    }

    pub(crate) fn write_to(&self, out: &mut String) {
        match self.color {
            Some(color) => {
                out.push_str("<td style=\"color: ");
                out.push_str(color);
                out.push_str(";\">");
            }
            None => out.push_str("<td>"),
        }
        let text = escape_html(&self.text);
        if self.strong {
            out.push_str("<strong>");
            out.push_str(&text);
            out.push_str("</strong>");
        } else {
            out.push_str(&text);
        }
        out.push_str("</td>");
    }
}

/// Writes a complete `<table>` with one header row and one `<tr class="row">`
/// per entry of `rows`.
pub(crate) fn write_table(out: &mut String, headers: &[&str], rows: impl Iterator<Item = Vec<Cell>>) {
    out.push_str("<table>\n<thead>\n<tr>");
    for header in headers {
        out.push_str("<th>");
        out.push_str(&escape_html(header));
        out.push_str("</th>");
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for cells in rows {
        out.push_str("<tr class=\"row\">");
        for cell in &cells {
            cell.write_to(out);
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_cell_rendering() {
        let mut out = String::new();
        Cell::text("ACTIVA").strong().colored(Some("green")).write_to(&mut out);
        assert_eq!(out, r#"<td style="color: green;"><strong>ACTIVA</strong></td>"#);

        out.clear();
        Cell::optional(None, "N/A").write_to(&mut out);
        assert_eq!(out, "<td>N/A</td>");
    }

    #[test]
    fn test_table_row_count() {
        let mut out = String::new();
        let rows = (0..3).map(|i| vec![Cell::text(i.to_string())]);
        write_table(&mut out, &["N"], rows);
        assert_eq!(out.matches("<tr class=\"row\">").count(), 3);
        assert!(out.contains("<th>N</th>"));
    }
}
