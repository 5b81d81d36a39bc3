//! Type inference for arbitrary values.
//!
//! A bracketed value like `bg-[...]` can make the same prefix resolve to
//! different groups depending on whether it looks like a color, a length,
//! or a URL. Inference is deterministic and total: every value gets a
//! classification, and values that fit no category land in a per-prefix
//! group that conflicts with nothing else.

/// What an arbitrary value looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueKind {
    /// A length, percentage, bare number, fraction, or calc-like function.
    Size,
    /// A hex color, color function, color keyword, or variable reference.
    Color,
    /// A `url(...)` or gradient function.
    Url,
    /// Nothing recognizable.
    Other,
}

/// Classify an arbitrary value. Explicit type hints (`length:`, `color:`,
/// `url:`, ...) are authoritative and checked first.
pub(crate) fn infer_kind(value: &str) -> ValueKind {
    for hint in ["length:", "size:", "percentage:", "number:"] {
        if value.starts_with(hint) {
            return ValueKind::Size;
        }
    }
    if value.starts_with("color:") {
        return ValueKind::Color;
    }
    if value.starts_with("url:") || value.starts_with("image:") {
        return ValueKind::Url;
    }

    if is_color(value) {
        ValueKind::Color
    } else if is_url(value) {
        ValueKind::Url
    } else if is_size(value) {
        ValueKind::Size
    } else {
        ValueKind::Other
    }
}

/// Resolve `prefix-[value]` to a group. Returns `None` for prefixes the
/// engine doesn't know, which makes the whole class unknown (always kept).
#[rustfmt::skip]
pub(crate) fn arbitrary_group(prefix: &str, value: &str) -> Option<&'static str> {
    use ValueKind::*;

    let kind = infer_kind(value);
    let group = match prefix {
        // Prefixes whose group depends on the value's type.
        "border" => match kind {
            Size => "border-width",
            Color => "border-color",
            _ => "border-arbitrary",
        },
        "border-t" => border_side(kind, "border-t-color", "border-t-arbitrary"),
        "border-r" => border_side(kind, "border-r-color", "border-r-arbitrary"),
        "border-b" => border_side(kind, "border-b-color", "border-b-arbitrary"),
        "border-l" => border_side(kind, "border-l-color", "border-l-arbitrary"),
        "border-x" => border_side(kind, "border-x-color", "border-x-arbitrary"),
        "border-y" => border_side(kind, "border-y-color", "border-y-arbitrary"),
        "text" => match kind {
            Size => "text-size",
            Color => "text-color",
            _ => "text-arbitrary",
        },
        "bg" => match kind {
            Url => "bg-image",
            Color => "bg-color",
            Size => "bg-size",
            Other => "bg-arbitrary",
        },
        "ring" => match kind {
            Size => "ring-width",
            Color => "ring-color",
            _ => "ring-arbitrary",
        },
        "ring-offset" => match kind {
            Size => "ring-offset",
            Color => "ring-offset-color",
            _ => "ring-offset-arbitrary",
        },
        "outline" => match kind {
            Size => "outline-width",
            Color => "outline-color",
            _ => "outline-arbitrary",
        },
        "decoration" => match kind {
            Size => "text-decoration-thickness",
            Color => "text-decoration-color",
            _ => "decoration-arbitrary",
        },
        "stroke" => match kind {
            Size => "stroke-width",
            Color => "stroke-color",
            _ => "stroke-arbitrary",
        },

        // Spacing and sizing: the value type never changes the group.
        "p" => "padding",
        "pt" => "padding-t", "pr" => "padding-r",
        "pb" => "padding-b", "pl" => "padding-l",
        "px" => "padding-x", "py" => "padding-y",
        "ps" => "padding-s", "pe" => "padding-e",
        "m" => "margin",
        "mt" => "margin-t", "mr" => "margin-r",
        "mb" => "margin-b", "ml" => "margin-l",
        "mx" => "margin-x", "my" => "margin-y",
        "ms" => "margin-s", "me" => "margin-e",
        "w" => "width", "h" => "height", "size" => "size",
        "min-w" => "min-width", "max-w" => "max-width",
        "min-h" => "min-height", "max-h" => "max-height",
        "top" => "top", "right" => "right",
        "bottom" => "bottom", "left" => "left",
        "inset" => "inset", "inset-x" => "inset-x", "inset-y" => "inset-y",
        "start" => "start", "end" => "end",
        "gap" => "gap", "gap-x" => "gap-x", "gap-y" => "gap-y",
        "space-x" => "space-x", "space-y" => "space-y",
        "basis" => "flex-basis",

        // Single-group families.
        "shadow" => "shadow",
        "accent" => "accent", "caret" => "caret", "fill" => "fill",
        "content" => "content",
        "opacity" => "opacity",
        "z" => "z-index",
        "order" => "order",
        "flex" => "flex",
        "grid-cols" => "grid-cols", "grid-rows" => "grid-rows",
        "columns" => "columns",
        "line-clamp" => "line-clamp",
        "cursor" => "cursor",
        "scale" => "scale", "rotate" => "rotate",
        "translate-x" => "translate-x", "translate-y" => "translate-y",
        "skew-x" => "skew-x", "skew-y" => "skew-y",
        "origin" => "origin",
        "leading" => "leading", "tracking" => "tracking",
        "indent" => "indent",
        "aspect" => "aspect",
        "font" => "font",
        "rounded" => "rounded",
        "blur" => "blur", "brightness" => "brightness",
        "contrast" => "contrast", "saturate" => "saturate",
        "duration" => "duration", "delay" => "delay", "ease" => "ease",
        "animate" => "animate",
        "will-change" => "will-change",

        _ => return None,
    };
    Some(group)
}

fn border_side(kind: ValueKind, color: &'static str, other: &'static str) -> &'static str {
    match kind {
        ValueKind::Size => "border-side-width",
        ValueKind::Color => color,
        _ => other,
    }
}

static COLOR_KEYWORDS: &[&str] = &[
    "transparent",
    "currentColor",
    "currentcolor",
    "inherit",
    "initial",
    "unset",
    "black",
    "white",
];

static COLOR_FUNCTIONS: &[&str] = &[
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color",
];

static LENGTH_UNITS: &[&str] = &[
    "px", "em", "rem", "%", "vw", "vh", "vmin", "vmax", "ch", "ex", "cm", "mm", "in", "pt", "pc",
    "svh", "svw", "dvh", "dvw", "lvh", "lvw", "cqw", "cqh", "cqi", "cqb", "cqmin", "cqmax",
];

fn is_color(value: &str) -> bool {
    if let Some(digits) = value.strip_prefix('#') {
        return matches!(digits.len(), 3 | 4 | 6 | 8)
            && digits.bytes().all(|b| b.is_ascii_hexdigit());
    }
    if let Some(name) = function_name(value) {
        if COLOR_FUNCTIONS.iter().any(|f| name.eq_ignore_ascii_case(f)) {
            return true;
        }
    }
    if COLOR_KEYWORDS.contains(&value) {
        return true;
    }
    // In color-accepting contexts a bare variable reference is assumed to
    // be a color; explicit hints override.
    value.starts_with("var(--")
}

fn is_url(value: &str) -> bool {
    match function_name(value) {
        Some(name) => name.eq_ignore_ascii_case("url") || name.ends_with("-gradient"),
        None => false,
    }
}

fn is_size(value: &str) -> bool {
    if let Some((_, rest)) = split_number(value) {
        if rest.is_empty() || LENGTH_UNITS.contains(&rest) {
            return true;
        }
    }
    if let Some(name) = function_name(value) {
        if matches!(name, "calc" | "min" | "max" | "clamp") {
            return true;
        }
    }
    is_fraction(value)
}

/// The name of a leading function call (`rgb(...)` -> `rgb`), tolerating
/// spaces before the opening paren.
fn function_name(value: &str) -> Option<&str> {
    let (name, _) = value.split_once('(')?;
    let name = name.trim_end();
    if name.is_empty()
        || !name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    {
        return None;
    }
    Some(name)
}

/// Split an optionally negative decimal number off the front of a value,
/// returning the remainder. `10px` -> `("10", "px")`.
fn split_number(value: &str) -> Option<(&str, &str)> {
    let body = value.strip_prefix('-').unwrap_or(value);
    let bytes = body.as_bytes();
    let mut end = 0;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot && end > 0 => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if end == 0 || bytes[end - 1] == b'.' {
        return None;
    }
    Some((&body[..end], &body[end..]))
}

fn is_fraction(value: &str) -> bool {
    let Some((num, den)) = value.split_once('/') else {
        return false;
    };
    let part_ok = |part: &str| {
        !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit() || b == b'.')
    };
    part_ok(num) && part_ok(den)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hints_are_authoritative() {
        assert_eq!(infer_kind("length:var(--x)"), ValueKind::Size);
        assert_eq!(infer_kind("color:0"), ValueKind::Color);
        assert_eq!(infer_kind("url:var(--img)"), ValueKind::Url);
        assert_eq!(infer_kind("image:var(--img)"), ValueKind::Url);
        assert_eq!(infer_kind("percentage:30"), ValueKind::Size);
    }

    #[test]
    fn colors_are_recognized() {
        assert_eq!(infer_kind("#fff"), ValueKind::Color);
        assert_eq!(infer_kind("#ff0000"), ValueKind::Color);
        assert_eq!(infer_kind("#ff0000cc"), ValueKind::Color);
        assert_eq!(infer_kind("rgb(0,0,0)"), ValueKind::Color);
        assert_eq!(infer_kind("rgba(0, 0, 0, 0.5)"), ValueKind::Color);
        assert_eq!(infer_kind("hsl(120 50% 50%)"), ValueKind::Color);
        assert_eq!(infer_kind("oklch(0.7 0.1 200)"), ValueKind::Color);
        assert_eq!(infer_kind("transparent"), ValueKind::Color);
        assert_eq!(infer_kind("currentColor"), ValueKind::Color);
        assert_eq!(infer_kind("var(--brand)"), ValueKind::Color);
    }

    #[test]
    fn non_colors_are_rejected() {
        assert_eq!(infer_kind("#ff00"), ValueKind::Color); // 4-digit hex
        assert_eq!(infer_kind("#ff000"), ValueKind::Other); // 5 digits
        assert_eq!(infer_kind("#zzz"), ValueKind::Other);
        assert_eq!(infer_kind("red-ish"), ValueKind::Other);
    }

    #[test]
    fn sizes_are_recognized() {
        assert_eq!(infer_kind("10px"), ValueKind::Size);
        assert_eq!(infer_kind("0.5rem"), ValueKind::Size);
        assert_eq!(infer_kind("-4px"), ValueKind::Size);
        assert_eq!(infer_kind("30%"), ValueKind::Size);
        assert_eq!(infer_kind("12cqmax"), ValueKind::Size);
        assert_eq!(infer_kind("42"), ValueKind::Size);
        assert_eq!(infer_kind("1.5"), ValueKind::Size);
        assert_eq!(infer_kind("1/2"), ValueKind::Size);
        assert_eq!(infer_kind("calc(100% - 1rem)"), ValueKind::Size);
        assert_eq!(infer_kind("clamp(1rem, 2vw, 3rem)"), ValueKind::Size);
    }

    #[test]
    fn unknown_units_are_not_sizes() {
        assert_eq!(infer_kind("10parsecs"), ValueKind::Other);
        assert_eq!(infer_kind("1."), ValueKind::Other);
        assert_eq!(infer_kind("px"), ValueKind::Other);
    }

    #[test]
    fn urls_and_gradients_are_recognized() {
        assert_eq!(infer_kind("url(/hero.png)"), ValueKind::Url);
        assert_eq!(infer_kind("url('x.png')"), ValueKind::Url);
        assert_eq!(
            infer_kind("linear-gradient(to right, red, blue)"),
            ValueKind::Url
        );
        assert_eq!(
            infer_kind("repeating-radial-gradient(red, blue)"),
            ValueKind::Url
        );
    }

    #[test]
    fn bg_prefix_dispatches_on_kind() {
        assert_eq!(arbitrary_group("bg", "url(/x.png)"), Some("bg-image"));
        assert_eq!(arbitrary_group("bg", "#abc"), Some("bg-color"));
        assert_eq!(arbitrary_group("bg", "200px"), Some("bg-size"));
        assert_eq!(arbitrary_group("bg", "mystery"), Some("bg-arbitrary"));
    }

    #[test]
    fn spacing_prefixes_ignore_the_kind() {
        assert_eq!(arbitrary_group("p", "10px"), Some("padding"));
        assert_eq!(arbitrary_group("p", "whatever"), Some("padding"));
        assert_eq!(arbitrary_group("mx", "5%"), Some("margin-x"));
    }

    #[test]
    fn unknown_prefixes_resolve_to_nothing() {
        assert_eq!(arbitrary_group("foo", "10px"), None);
        assert_eq!(arbitrary_group("items", "center"), None);
    }
}
