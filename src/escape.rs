//! LaTeX escaping for user-supplied text.
//!
//! Every piece of résumé text that lands in the typeset document goes
//! through [`latex_escape`]. The mapping is applied in a single pass over the
//! input, so the backslashes and braces introduced by one substitution are
//! never seen by another.

/// Escapes `input` so it typesets literally inside a LaTeX document.
///
/// | input | output |
/// |-------|--------|
/// | `\` | `\textbackslash{}` |
/// | `& # % _ $` | `\&` `\#` `\%` `\_` `\$` |
/// | `{` `}` | `\{` `\}` |
/// | `^` | `\textasciicircum{}` |
/// | `~` | `\textasciitilde{}` |
/// | `\|` | `\textbar{}` |
/// | newline | ` \\ ` |
///
/// # Examples
///
/// ```rust
/// use cvgen::escape::latex_escape;
///
/// assert_eq!(latex_escape("R&D 100%"), r"R\&D 100\%");
/// assert_eq!(latex_escape(""), "");
/// ```
pub fn latex_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str(r"\textbackslash{}"),
            '&' | '#' | '%' | '_' | '$' | '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            '^' => out.push_str(r"\textasciicircum{}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '|' => out.push_str(r"\textbar{}"),
            '\n' => out.push_str(r" \\ "),
            _ => out.push(ch),
        }
    }
    out
}

/// Escapes an optional field, treating absence as the empty string.
pub fn latex_escape_opt(input: Option<&str>) -> String {
    input.map(latex_escape).unwrap_or_default()
}
