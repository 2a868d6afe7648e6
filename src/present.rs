//! Result presentation — line-level highlighting of the model's answer.

use console::style;

/// Marks every line whose case-insensitive content contains `deprecated`
/// in red; all other lines, their order, and their content are unchanged.
/// Total on empty input.
#[must_use]
pub fn highlight_deprecated(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.to_lowercase().contains("deprecated") {
                style(line).red().to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::highlight_deprecated;

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(highlight_deprecated(""), "");
    }

    #[test]
    fn plain_lines_pass_through_unchanged() {
        let text = "Rectangle()\n    .frame(width: 100)";
        assert_eq!(highlight_deprecated(text), text);
    }

    #[test]
    fn marked_lines_keep_their_content() {
        let text = "ok line\n.foregroundColor(Color.blue) // Deprecated line\nok again";
        let highlighted = highlight_deprecated(text);
        let lines: Vec<&str> = highlighted.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ok line");
        assert!(lines[1].contains(".foregroundColor(Color.blue) // Deprecated line"));
        assert_eq!(lines[2], "ok again");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let marked = highlight_deprecated("this API is DEPRECATED");
        assert!(marked.contains("this API is DEPRECATED"));
    }
}
