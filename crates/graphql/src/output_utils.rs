pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274c}";

/// Render a list of problems as an indented bullet list, one per line.
pub(crate) fn bullet_list<T: std::fmt::Display>(items: &[T]) -> String {
    items.iter()
        .map(|item| {
            let item = item.to_string().replace('\n', "\n    ");
            format!("  * {item}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
