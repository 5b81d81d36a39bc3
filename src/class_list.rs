//! Class-list input handling.
//!
//! The merge entry point accepts either a plain string of classes or an
//! arbitrarily nested list of further class lists (the shape component
//! call sites naturally produce when combining defaults with overrides).
//! Flattening is the first, isolated stage of the pipeline: everything
//! downstream operates on a single space-joined string.

/// A class-list argument: a single string of whitespace-separated class
/// names, or a nested list of further class lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassList {
    Item(String),
    List(Vec<ClassList>),
}

impl ClassList {
    /// Flatten depth-first into one space-joined string.
    pub fn flatten(&self) -> String {
        let mut out = String::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut String) {
        match self {
            ClassList::Item(s) => {
                if s.is_empty() {
                    return;
                }
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(s);
            }
            ClassList::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

impl From<&str> for ClassList {
    fn from(s: &str) -> Self {
        ClassList::Item(s.to_string())
    }
}

impl From<String> for ClassList {
    fn from(s: String) -> Self {
        ClassList::Item(s)
    }
}

impl<T: Into<ClassList>> From<Vec<T>> for ClassList {
    fn from(items: Vec<T>) -> Self {
        ClassList::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassList>, const N: usize> From<[T; N]> for ClassList {
    fn from(items: [T; N]) -> Self {
        ClassList::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for ClassList {
    fn from(items: &[&str]) -> Self {
        ClassList::List(items.iter().map(|s| ClassList::from(*s)).collect())
    }
}

/// `None` contributes nothing, which makes conditional classes ergonomic.
impl<T: Into<ClassList>> From<Option<T>> for ClassList {
    fn from(item: Option<T>) -> Self {
        match item {
            Some(item) => item.into(),
            None => ClassList::List(Vec::new()),
        }
    }
}

impl FromIterator<ClassList> for ClassList {
    fn from_iter<I: IntoIterator<Item = ClassList>>(iter: I) -> Self {
        ClassList::List(iter.into_iter().collect())
    }
}

/// Split a flattened class string into tokens. Any run of whitespace
/// (spaces, tabs, newlines) separates tokens; blank input yields nothing.
pub(crate) fn tokenize(input: &str) -> std::str::SplitWhitespace<'_> {
    input.split_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flattens_nested_lists_depth_first() {
        let list = ClassList::from(vec![
            ClassList::from("p-4"),
            ClassList::from(vec!["flex", "items-center"]),
            ClassList::from(vec![ClassList::from(vec!["mt-2"])]),
        ]);
        assert_eq!(list.flatten(), "p-4 flex items-center mt-2");
    }

    #[test]
    fn skips_empty_items() {
        let list = ClassList::from(vec!["", "p-4", ""]);
        assert_eq!(list.flatten(), "p-4");
    }

    #[test]
    fn option_none_is_empty() {
        let list = ClassList::from(None::<&str>);
        assert_eq!(list.flatten(), "");
        let list = ClassList::from(vec![
            ClassList::from(Some("p-4")),
            ClassList::from(None::<&str>),
        ]);
        assert_eq!(list.flatten(), "p-4");
    }

    #[test]
    fn tokenize_collapses_whitespace() {
        let tokens: Vec<&str> = tokenize("  p-4\tflex\n\nmt-2  ").collect();
        assert_eq!(tokens, vec!["p-4", "flex", "mt-2"]);
        assert_eq!(tokenize("   \t\n").count(), 0);
        assert_eq!(tokenize("").count(), 0);
    }
}
