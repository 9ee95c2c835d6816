const BORDER_WIDTH: usize = 50;

/// Renders a bordered block: border, header, border, rows, border, two blank lines.
pub fn render_block<S: AsRef<str>>(header: &str, rows: &[S]) -> String {
    let border = "*".repeat(BORDER_WIDTH);
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(header);
    out.push('\n');
    out.push_str(&border);
    out.push('\n');
    for row in rows {
        out.push_str(row.as_ref());
        out.push('\n');
    }
    out.push_str(&border);
    out.push_str("\n\n\n");
    out
}

pub fn pretty_print<S: AsRef<str>>(header: &str, rows: &[S]) {
    print!("{}", render_block(header, rows));
}
