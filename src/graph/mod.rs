pub mod traits;
pub mod labeled;
pub mod sample;

pub use traits::{Edge, Graph, MutableGraph, Weight};
pub use labeled::LabeledGraph;

/// Normalizes free-text input into a node label: surrounding whitespace is
/// dropped and letters are upper-cased.
pub fn normalize_label(input: &str) -> String {
    input.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::normalize_label;

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label(" a "), "A");
        assert_eq!(normalize_label("f"), "F");
        assert_eq!(normalize_label(""), "");
    }
}
