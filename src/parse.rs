//! Per-token parsing: variant (modifier) extraction, the important marker,
//! postfix modifiers like `text-lg/7`, and modifier canonicalization.

use crate::groups::{GroupId, classify};

/// A parsed class name, reduced to what conflict resolution needs.
#[derive(Debug)]
pub(crate) struct ParsedClass {
    /// Canonicalized modifiers joined with `:`, empty for unmodified classes.
    pub modifiers: String,
    /// Whether the base class carries an important marker (`!`).
    pub has_important: bool,
    /// Whether the base class carries a postfix modifier (`text-lg/7`).
    pub has_postfix: bool,
    /// The class group the base class belongs to.
    pub group: GroupId,
}

/// Parse a single class name into its components.
///
/// Returns `None` for classes that don't belong to any known group,
/// including malformed ones (trailing bare colon, unbalanced brackets).
/// Such classes are always kept verbatim by the resolver.
pub(crate) fn parse_class(class: &str) -> Option<ParsedClass> {
    let mut modifiers: Vec<&str> = Vec::new();
    let mut bracket_depth: u32 = 0;
    let mut paren_depth: u32 = 0;
    let mut base_start = 0;

    // A `:` only separates modifiers at nesting depth 0, so arbitrary
    // variants like `[&[data-open]]:underline` and arbitrary properties
    // like `[color:red]` stay intact.
    for (i, c) in class.bytes().enumerate() {
        match c {
            b':' if bracket_depth == 0 && paren_depth == 0 => {
                modifiers.push(&class[base_start..i]);
                base_start = i + 1;
            }
            b'[' => bracket_depth += 1,
            b']' => bracket_depth = bracket_depth.saturating_sub(1),
            b'(' => paren_depth += 1,
            b')' => paren_depth = paren_depth.saturating_sub(1),
            _ => {}
        }
    }

    let base_with_important = &class[base_start..];

    // Important marker: leading or trailing `!` on the base class.
    let (base_class, has_important) = if let Some(stripped) = base_with_important.strip_prefix('!')
    {
        (stripped, true)
    } else if let Some(stripped) = base_with_important.strip_suffix('!') {
        (stripped, true)
    } else {
        (base_with_important, false)
    };

    if base_class.is_empty() {
        return None;
    }

    // A depth-0 `/` marks a postfix modifier. The base used for group
    // lookup excludes it (`text-lg/7` classifies as `text-lg`), but its
    // presence matters for the font-size/line-height conflict.
    let postfix_pos = find_postfix(base_class);
    let base_for_lookup = match postfix_pos {
        Some(pos) => &base_class[..pos],
        None => base_class,
    };

    let group = classify(base_for_lookup)?;

    let modifiers = if modifiers.is_empty() {
        String::new()
    } else {
        canonicalize_modifiers(&modifiers).join(":")
    };

    Some(ParsedClass {
        modifiers,
        has_important,
        has_postfix: postfix_pos.is_some(),
        group,
    })
}

fn find_postfix(base: &str) -> Option<usize> {
    let mut depth: u32 = 0;
    let mut pos = None;
    for (i, c) in base.bytes().enumerate() {
        match c {
            b'[' | b'(' => depth += 1,
            b']' | b')' => depth = depth.saturating_sub(1),
            b'/' if depth == 0 && i > 0 => pos = Some(i),
            _ => {}
        }
    }
    pos
}

/// Modifiers whose position is significant and must not be reordered.
/// Pseudo-element variants change which element the utility targets, so
/// `before:hover:x` and `hover:before:x` are distinct scopes.
static ORDER_SENSITIVE: &[&str] = &[
    "*",
    "**",
    "after",
    "backdrop",
    "before",
    "details-content",
    "file",
    "first-letter",
    "first-line",
    "marker",
    "placeholder",
    "selection",
];

/// Canonicalize a modifier list for conflict detection.
///
/// Maximal runs of simple modifiers are sorted alphabetically in place;
/// arbitrary variants (starting with `[`) and order-sensitive modifiers
/// act as unmovable boundaries between runs. This gives `hover:focus:x`
/// and `focus:hover:x` the same signature while keeping
/// `hover:[&>*]:x` distinct from `[&>*]:hover:x`.
fn canonicalize_modifiers<'a>(modifiers: &[&'a str]) -> Vec<&'a str> {
    let mut out: Vec<&'a str> = Vec::with_capacity(modifiers.len());
    let mut run: Vec<&'a str> = Vec::new();

    for &modifier in modifiers {
        if modifier.starts_with('[') || ORDER_SENSITIVE.contains(&modifier) {
            run.sort_unstable();
            out.append(&mut run);
            out.push(modifier);
        } else {
            run.push(modifier);
        }
    }

    run.sort_unstable();
    out.append(&mut run);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(class: &str) -> ParsedClass {
        parse_class(class).unwrap_or_else(|| panic!("expected {class} to parse"))
    }

    #[test]
    fn plain_class_has_no_modifiers() {
        let parsed = parse("p-4");
        assert_eq!(parsed.modifiers, "");
        assert!(!parsed.has_important);
        assert!(!parsed.has_postfix);
    }

    #[test]
    fn simple_modifier_runs_are_sorted() {
        assert_eq!(parse("hover:focus:p-4").modifiers, "focus:hover");
        assert_eq!(parse("focus:hover:p-4").modifiers, "focus:hover");
        assert_eq!(parse("md:dark:hover:p-4").modifiers, "dark:hover:md");
    }

    #[test]
    fn arbitrary_variants_are_run_boundaries() {
        assert_eq!(parse("hover:[&>*]:p-4").modifiers, "hover:[&>*]");
        assert_eq!(parse("[&>*]:hover:p-4").modifiers, "[&>*]:hover");
        assert_eq!(
            parse("md:hover:[&>*]:focus:dark:p-4").modifiers,
            "hover:md:[&>*]:dark:focus"
        );
    }

    #[test]
    fn pseudo_element_modifiers_are_run_boundaries() {
        assert_eq!(parse("before:hover:p-4").modifiers, "before:hover");
        assert_eq!(parse("hover:before:p-4").modifiers, "hover:before");
    }

    #[test]
    fn colons_inside_brackets_are_not_separators() {
        let parsed = parse("[&[data-open]]:underline");
        assert_eq!(parsed.modifiers, "[&[data-open]]");
        let parsed = parse("[color:red]");
        assert_eq!(parsed.modifiers, "");
        assert_eq!(parsed.group, GroupId::Property("color".into()));
    }

    #[test]
    fn important_marker_is_detected_in_both_positions() {
        assert!(parse("!p-4").has_important);
        assert!(parse("p-4!").has_important);
        assert!(parse("hover:!p-4").has_important);
        assert!(!parse("p-4").has_important);
    }

    #[test]
    fn postfix_modifier_is_stripped_for_lookup() {
        let parsed = parse("text-lg/7");
        assert!(parsed.has_postfix);
        assert_eq!(parsed.group, GroupId::Known("text-size"));
        let parsed = parse("!text-lg/7");
        assert!(parsed.has_postfix);
        assert!(parsed.has_important);
        assert_eq!(parsed.group, GroupId::Known("text-size"));
    }

    #[test]
    fn slash_inside_brackets_is_not_a_postfix() {
        assert!(!parse("bg-[url(/img.png)]").has_postfix);
    }

    #[test]
    fn malformed_classes_do_not_parse() {
        assert!(parse_class("hover:").is_none());
        assert!(parse_class("!").is_none());
        assert!(parse_class("hover:!").is_none());
    }
}
