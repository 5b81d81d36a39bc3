//! Class-group classification.
//!
//! Maps a base utility (variants and important marker already stripped) to
//! the semantic family it belongs to. Lookup order is part of the contract:
//! exact matches first, then arbitrary-value inference, then the ordered
//! pattern table, then arbitrary properties, then the bracket catch-all.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::arbitrary::arbitrary_group;

/// The semantic utility family a base class belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum GroupId {
    /// A named family from the static tables (`"padding"`, `"bg-color"`, ...).
    Known(&'static str),
    /// An arbitrary property `[prop:value]`, keyed by the property name so
    /// `[color:red]` and `[color:blue]` conflict but `[background:blue]`
    /// does not.
    Property(Box<str>),
    /// Bracketed content with no recognizable structure.
    Bracket,
}

/// Classify a base class. `None` means the class is unknown to the engine
/// and must always be kept, conflicting with nothing.
pub(crate) fn classify(base: &str) -> Option<GroupId> {
    if let Some(&group) = EXACT_GROUPS.get(base) {
        return Some(GroupId::Known(group));
    }

    // A single leading `-` marks a negative value and never changes the group.
    let check = base.strip_prefix('-').unwrap_or(base);

    // `prefix-[value]` resolves through type inference: a shared prefix can
    // map to different groups depending on what the value looks like.
    if let Some((prefix, value)) = split_arbitrary_value(check) {
        return arbitrary_group(prefix, value).map(GroupId::Known);
    }

    for rule in PATTERN_RULES {
        if rule.matches(check) {
            return Some(GroupId::Known(rule.group));
        }
    }

    if let Some(property) = arbitrary_property(base) {
        return Some(GroupId::Property(property.into()));
    }

    if base.len() > 2 && base.starts_with('[') && base.ends_with(']') {
        return Some(GroupId::Bracket);
    }

    None
}

/// Split `prefix-[value]` into its parts. The prefix must be lowercase
/// ASCII letters and dashes; the value must be non-empty.
fn split_arbitrary_value(class: &str) -> Option<(&str, &str)> {
    let open = class.find("-[")?;
    let inner = class.strip_suffix(']')?;
    if open + 2 > inner.len() {
        return None;
    }
    let prefix = &class[..open];
    let value = &inner[open + 2..];
    if prefix.is_empty() || value.is_empty() {
        return None;
    }
    if !prefix.bytes().all(|b| b.is_ascii_lowercase() || b == b'-') {
        return None;
    }
    Some((prefix, value))
}

/// Extract the property name from an arbitrary property `[prop:value]`.
fn arbitrary_property(base: &str) -> Option<&str> {
    let inner = base.strip_prefix('[')?.strip_suffix(']')?;
    let (property, value) = inner.split_once(':')?;
    if property.is_empty() || value.is_empty() {
        return None;
    }
    if !property
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return None;
    }
    Some(property)
}

/// Keyword utilities with no value part.
static EXACT_GROUPS: LazyLock<FxHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    EXACT_GROUP_ENTRIES.iter().copied().collect()
});

#[rustfmt::skip]
static EXACT_GROUP_ENTRIES: &[(&str, &str)] = &[
    // Display
    ("block", "display"), ("inline-block", "display"), ("inline", "display"),
    ("flex", "display"), ("inline-flex", "display"), ("table", "display"),
    ("inline-table", "display"), ("table-caption", "display"),
    ("table-cell", "display"), ("table-column", "display"),
    ("table-column-group", "display"), ("table-footer-group", "display"),
    ("table-header-group", "display"), ("table-row-group", "display"),
    ("table-row", "display"), ("flow-root", "display"), ("grid", "display"),
    ("inline-grid", "display"), ("contents", "display"),
    ("list-item", "display"), ("hidden", "display"),
    // Position
    ("static", "position"), ("fixed", "position"), ("absolute", "position"),
    ("relative", "position"), ("sticky", "position"),
    // Visibility
    ("visible", "visibility"), ("invisible", "visibility"),
    ("collapse", "visibility"),
    // Float and clear
    ("float-right", "float"), ("float-left", "float"), ("float-none", "float"),
    ("float-start", "float"), ("float-end", "float"),
    ("clear-left", "clear"), ("clear-right", "clear"), ("clear-both", "clear"),
    ("clear-none", "clear"), ("clear-start", "clear"), ("clear-end", "clear"),
    // Isolation and box
    ("isolate", "isolation"), ("isolation-auto", "isolation"),
    ("box-border", "box-sizing"), ("box-content", "box-sizing"),
    ("box-decoration-slice", "box-decoration"),
    ("box-decoration-clone", "box-decoration"),
    ("container", "container"),
    // Standalone borders, rings, outlines
    ("border", "border-width"),
    ("border-t", "border-side-width"), ("border-r", "border-side-width"),
    ("border-b", "border-side-width"), ("border-l", "border-side-width"),
    ("border-x", "border-side-width"), ("border-y", "border-side-width"),
    ("ring", "ring-width"), ("ring-inset", "ring-inset"),
    ("outline", "outline-width"), ("outline-none", "outline-width"),
    // Corner radius
    ("rounded", "rounded"),
    ("rounded-s", "rounded-s"), ("rounded-e", "rounded-e"),
    ("rounded-t", "rounded-t"), ("rounded-r", "rounded-r"),
    ("rounded-b", "rounded-b"), ("rounded-l", "rounded-l"),
    ("rounded-ss", "rounded-ss"), ("rounded-se", "rounded-se"),
    ("rounded-ee", "rounded-ee"), ("rounded-es", "rounded-es"),
    ("rounded-tl", "rounded-tl"), ("rounded-tr", "rounded-tr"),
    ("rounded-br", "rounded-br"), ("rounded-bl", "rounded-bl"),
    // Typography
    ("italic", "font-style"), ("not-italic", "font-style"),
    ("antialiased", "font-smoothing"),
    ("subpixel-antialiased", "font-smoothing"),
    ("underline", "text-decoration"), ("overline", "text-decoration"),
    ("line-through", "text-decoration"), ("no-underline", "text-decoration"),
    ("uppercase", "text-transform"), ("lowercase", "text-transform"),
    ("capitalize", "text-transform"), ("normal-case", "text-transform"),
    ("truncate", "text-overflow"), ("text-ellipsis", "text-overflow"),
    ("text-clip", "text-overflow"),
    ("sr-only", "sr"), ("not-sr-only", "sr"),
    // Font variant numeric
    ("normal-nums", "fvn-normal"), ("ordinal", "fvn-ordinal"),
    ("slashed-zero", "fvn-slashed-zero"),
    ("lining-nums", "fvn-figure"), ("oldstyle-nums", "fvn-figure"),
    ("proportional-nums", "fvn-spacing"), ("tabular-nums", "fvn-spacing"),
    ("diagonal-fractions", "fvn-fraction"),
    ("stacked-fractions", "fvn-fraction"),
    // Transform
    ("transform", "transform"), ("transform-gpu", "transform"),
    ("transform-none", "transform"),
    // Space-between reversal
    ("space-x-reverse", "space-x-reverse"),
    ("space-y-reverse", "space-y-reverse"),
    ("divide-x-reverse", "divide-x-reverse"),
    ("divide-y-reverse", "divide-y-reverse"),
    // Touch action
    ("touch-auto", "touch"), ("touch-none", "touch"),
    ("touch-manipulation", "touch"),
    ("touch-pan-x", "touch-x"), ("touch-pan-left", "touch-x"),
    ("touch-pan-right", "touch-x"),
    ("touch-pan-y", "touch-y"), ("touch-pan-up", "touch-y"),
    ("touch-pan-down", "touch-y"),
    ("touch-pinch-zoom", "touch-pz"),
    // Background
    ("bg-none", "bg-image"),
    ("bg-repeat", "bg-repeat"), ("bg-no-repeat", "bg-repeat"),
    ("bg-repeat-x", "bg-repeat"), ("bg-repeat-y", "bg-repeat"),
    ("bg-repeat-round", "bg-repeat"), ("bg-repeat-space", "bg-repeat"),
    // Line clamp
    ("line-clamp-none", "line-clamp"),
];

/// How a pattern rule matches a base class.
enum Matcher {
    /// The class starts with the given prefix.
    Prefix(&'static str),
    /// The class is the prefix followed by exactly one of the values.
    ValueIn(&'static str, &'static [&'static str]),
}

struct Rule {
    matcher: Matcher,
    group: &'static str,
}

impl Rule {
    fn matches(&self, class: &str) -> bool {
        match self.matcher {
            Matcher::Prefix(prefix) => class.starts_with(prefix),
            Matcher::ValueIn(prefix, values) => class
                .strip_prefix(prefix)
                .is_some_and(|rest| values.contains(&rest)),
        }
    }
}

const fn prefix(p: &'static str, group: &'static str) -> Rule {
    Rule {
        matcher: Matcher::Prefix(p),
        group,
    }
}

const fn value_in(p: &'static str, values: &'static [&'static str], group: &'static str) -> Rule {
    Rule {
        matcher: Matcher::ValueIn(p, values),
        group,
    }
}

static FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
static BORDER_WIDTHS: &[&str] = &["0", "2", "4", "8"];
static RING_WIDTHS: &[&str] = &["0", "1", "2", "4", "8"];

/// The ordered pattern table. Order is load-bearing: more specific prefixes
/// must precede more general ones (`border-t-` before `border-`), and
/// exact-form width rules must precede the color catch-alls, or they are
/// unreachable.
#[rustfmt::skip]
static PATTERN_RULES: &[Rule] = &[
    // Padding
    prefix("ps-", "padding-s"), prefix("pe-", "padding-e"),
    prefix("pt-", "padding-t"), prefix("pr-", "padding-r"),
    prefix("pb-", "padding-b"), prefix("pl-", "padding-l"),
    prefix("px-", "padding-x"), prefix("py-", "padding-y"),
    prefix("p-", "padding"),
    // Margin
    prefix("ms-", "margin-s"), prefix("me-", "margin-e"),
    prefix("mt-", "margin-t"), prefix("mr-", "margin-r"),
    prefix("mb-", "margin-b"), prefix("ml-", "margin-l"),
    prefix("mx-", "margin-x"), prefix("my-", "margin-y"),
    prefix("m-", "margin"),
    // Sizing
    prefix("min-w-", "min-width"), prefix("max-w-", "max-width"),
    prefix("w-", "width"),
    prefix("min-h-", "min-height"), prefix("max-h-", "max-height"),
    prefix("h-", "height"),
    prefix("size-", "size"),
    // Flex and grid
    prefix("flex-", "flex"), prefix("basis-", "flex-basis"),
    prefix("grow", "flex-grow"), prefix("shrink", "flex-shrink"),
    prefix("order-", "order"),
    prefix("grid-cols-", "grid-cols"), prefix("grid-rows-", "grid-rows"),
    prefix("col-", "grid-col"), prefix("row-", "grid-row"),
    prefix("gap-x-", "gap-x"), prefix("gap-y-", "gap-y"),
    prefix("gap-", "gap"),
    // Typography
    value_in("text-", FONT_SIZES, "text-size"),
    prefix("text-", "text-color"),
    prefix("font-", "font"),
    prefix("leading-", "leading"), prefix("tracking-", "tracking"),
    prefix("indent-", "indent"), prefix("align-", "align"),
    prefix("whitespace-", "whitespace"), prefix("break-", "break"),
    prefix("hyphens-", "hyphens"), prefix("content-", "content"),
    // Borders
    value_in("border-", BORDER_WIDTHS, "border-width"),
    value_in("border-x-", BORDER_WIDTHS, "border-side-width"),
    value_in("border-y-", BORDER_WIDTHS, "border-side-width"),
    value_in("border-t-", BORDER_WIDTHS, "border-side-width"),
    value_in("border-r-", BORDER_WIDTHS, "border-side-width"),
    value_in("border-b-", BORDER_WIDTHS, "border-side-width"),
    value_in("border-l-", BORDER_WIDTHS, "border-side-width"),
    prefix("border-t-", "border-t-color"), prefix("border-r-", "border-r-color"),
    prefix("border-b-", "border-b-color"), prefix("border-l-", "border-l-color"),
    prefix("border-x-", "border-x-color"), prefix("border-y-", "border-y-color"),
    prefix("border-", "border-color"),
    prefix("divide-x-", "divide-x"), prefix("divide-y-", "divide-y"),
    prefix("divide-", "divide-color"),
    // Outline and ring
    value_in("outline-", RING_WIDTHS, "outline-width"),
    prefix("outline-offset-", "outline-offset"),
    prefix("outline-", "outline-color"),
    value_in("ring-", RING_WIDTHS, "ring-width"),
    prefix("ring-offset-", "ring-offset"),
    prefix("ring-", "ring-color"),
    // Corner radius
    prefix("rounded-ss-", "rounded-ss"), prefix("rounded-se-", "rounded-se"),
    prefix("rounded-ee-", "rounded-ee"), prefix("rounded-es-", "rounded-es"),
    prefix("rounded-tl-", "rounded-tl"), prefix("rounded-tr-", "rounded-tr"),
    prefix("rounded-br-", "rounded-br"), prefix("rounded-bl-", "rounded-bl"),
    prefix("rounded-s-", "rounded-s"), prefix("rounded-e-", "rounded-e"),
    prefix("rounded-t-", "rounded-t"), prefix("rounded-r-", "rounded-r"),
    prefix("rounded-b-", "rounded-b"), prefix("rounded-l-", "rounded-l"),
    prefix("rounded", "rounded"),
    // Background
    prefix("bg-gradient-", "bg-gradient"),
    prefix("bg-blend-", "bg-blend"),
    value_in("bg-", &["top", "bottom", "left", "right", "center"], "bg-position"),
    value_in("bg-", &["auto", "cover", "contain"], "bg-size"),
    prefix("bg-", "bg-color"),
    // Effects
    prefix("shadow", "shadow"), prefix("opacity-", "opacity"),
    prefix("mix-blend-", "mix-blend"),
    // Filters
    prefix("blur", "blur"), prefix("brightness-", "brightness"),
    prefix("contrast-", "contrast"), prefix("grayscale", "grayscale"),
    prefix("hue-rotate-", "hue-rotate"), prefix("invert", "invert"),
    prefix("saturate-", "saturate"), prefix("sepia", "sepia"),
    prefix("drop-shadow", "drop-shadow"),
    prefix("backdrop-blur", "backdrop-blur"),
    prefix("backdrop-brightness", "backdrop-brightness"),
    prefix("backdrop-contrast", "backdrop-contrast"),
    prefix("backdrop-grayscale", "backdrop-grayscale"),
    prefix("backdrop-hue-rotate", "backdrop-hue-rotate"),
    prefix("backdrop-invert", "backdrop-invert"),
    prefix("backdrop-opacity", "backdrop-opacity"),
    prefix("backdrop-saturate", "backdrop-saturate"),
    prefix("backdrop-sepia", "backdrop-sepia"),
    // Transforms
    prefix("scale-", "scale"), prefix("rotate-", "rotate"),
    prefix("translate-x-", "translate-x"), prefix("translate-y-", "translate-y"),
    prefix("skew-x-", "skew-x"), prefix("skew-y-", "skew-y"),
    prefix("origin-", "origin"),
    // Interactivity
    prefix("cursor-", "cursor"), prefix("select-", "select"),
    prefix("resize", "resize"), prefix("list-", "list"),
    prefix("appearance-", "appearance"),
    prefix("pointer-events-", "pointer-events"),
    prefix("will-change-", "will-change"),
    prefix("accent-", "accent"), prefix("caret-", "caret"),
    // Layout
    prefix("aspect-", "aspect"), prefix("columns-", "columns"),
    prefix("object-", "object"),
    prefix("overflow-x-", "overflow-x"), prefix("overflow-y-", "overflow-y"),
    prefix("overflow-", "overflow"),
    prefix("overscroll-x-", "overscroll-x"),
    prefix("overscroll-y-", "overscroll-y"),
    prefix("overscroll-", "overscroll"),
    prefix("inset-x-", "inset-x"), prefix("inset-y-", "inset-y"),
    prefix("inset-", "inset"),
    prefix("top-", "top"), prefix("right-", "right"),
    prefix("bottom-", "bottom"), prefix("left-", "left"),
    prefix("start-", "start"), prefix("end-", "end"),
    prefix("z-", "z-index"),
    // Space between
    prefix("space-x-", "space-x"), prefix("space-y-", "space-y"),
    // SVG
    prefix("fill-", "fill"),
    value_in("stroke-", &["0", "1", "2"], "stroke-width"),
    prefix("stroke-", "stroke-color"),
    // Tables
    prefix("table-", "table"), prefix("caption-", "caption"),
    // Line clamp
    prefix("line-clamp-", "line-clamp"),
    // Scroll margin and padding, sides kept distinct
    prefix("scroll-mx-", "scroll-mx"), prefix("scroll-my-", "scroll-my"),
    prefix("scroll-ms-", "scroll-ms"), prefix("scroll-me-", "scroll-me"),
    prefix("scroll-mt-", "scroll-mt"), prefix("scroll-mr-", "scroll-mr"),
    prefix("scroll-mb-", "scroll-mb"), prefix("scroll-ml-", "scroll-ml"),
    prefix("scroll-m-", "scroll-m"),
    prefix("scroll-px-", "scroll-px"), prefix("scroll-py-", "scroll-py"),
    prefix("scroll-ps-", "scroll-ps"), prefix("scroll-pe-", "scroll-pe"),
    prefix("scroll-pt-", "scroll-pt"), prefix("scroll-pr-", "scroll-pr"),
    prefix("scroll-pb-", "scroll-pb"), prefix("scroll-pl-", "scroll-pl"),
    prefix("scroll-p-", "scroll-p"),
    // Scroll snap
    prefix("snap-align-", "snap-align"), prefix("snap-stop-", "snap-stop"),
    prefix("snap-type-", "snap-type"), prefix("snap-", "snap-strictness"),
    // Touch action
    prefix("touch-", "touch"),
    // Gradient stops
    prefix("from-", "gradient-from"), prefix("via-", "gradient-via"),
    prefix("to-", "gradient-to"),
    // Text decoration
    value_in(
        "decoration-",
        &["0", "1", "2", "4", "8", "auto", "from-font"],
        "text-decoration-thickness",
    ),
    prefix("decoration-", "text-decoration-color"),
    // Transitions and animation
    prefix("transition", "transition"), prefix("duration-", "duration"),
    prefix("ease-", "ease"), prefix("delay-", "delay"),
    prefix("animate-", "animate"),
];

/// Groups invalidated by the presence of a given group under the same
/// modifier scope. The relation is deliberately asymmetric: a shorthand
/// suppresses its narrower siblings, but a side utility declared later
/// still wins within its own group. Touch and font-variant-numeric
/// families are bidirectional because their members reset each other.
#[rustfmt::skip]
pub(crate) fn conflicts(group: &str) -> &'static [&'static str] {
    match group {
        "overflow" => &["overflow-x", "overflow-y"],
        "overscroll" => &["overscroll-x", "overscroll-y"],

        "inset" => &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],

        "gap" => &["gap-x", "gap-y"],
        "size" => &["width", "height"],

        "padding" => &[
            "padding-x", "padding-y", "padding-s", "padding-e",
            "padding-t", "padding-r", "padding-b", "padding-l",
        ],
        "padding-x" => &["padding-r", "padding-l"],
        "padding-y" => &["padding-t", "padding-b"],

        "margin" => &[
            "margin-x", "margin-y", "margin-s", "margin-e",
            "margin-t", "margin-r", "margin-b", "margin-l",
        ],
        "margin-x" => &["margin-r", "margin-l"],
        "margin-y" => &["margin-t", "margin-b"],

        "rounded" => &[
            "rounded-s", "rounded-e", "rounded-t", "rounded-r",
            "rounded-b", "rounded-l", "rounded-ss", "rounded-se",
            "rounded-ee", "rounded-es", "rounded-tl", "rounded-tr",
            "rounded-br", "rounded-bl",
        ],
        "rounded-s" => &["rounded-ss", "rounded-es"],
        "rounded-e" => &["rounded-se", "rounded-ee"],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],

        "border-width" => &["border-side-width"],
        "border-color" => &[
            "border-t-color", "border-r-color", "border-b-color",
            "border-l-color", "border-x-color", "border-y-color",
        ],
        "border-x-color" => &["border-r-color", "border-l-color"],
        "border-y-color" => &["border-t-color", "border-b-color"],

        "flex" => &["flex-basis", "flex-grow", "flex-shrink"],

        "scroll-m" => &[
            "scroll-mx", "scroll-my", "scroll-ms", "scroll-me",
            "scroll-mt", "scroll-mr", "scroll-mb", "scroll-ml",
        ],
        "scroll-mx" => &["scroll-mr", "scroll-ml"],
        "scroll-my" => &["scroll-mt", "scroll-mb"],
        "scroll-p" => &[
            "scroll-px", "scroll-py", "scroll-ps", "scroll-pe",
            "scroll-pt", "scroll-pr", "scroll-pb", "scroll-pl",
        ],
        "scroll-px" => &["scroll-pr", "scroll-pl"],
        "scroll-py" => &["scroll-pt", "scroll-pb"],

        "bg-image" => &["bg-color"],
        "bg-color" => &["bg-image"],

        "fvn-normal" => &[
            "fvn-ordinal", "fvn-slashed-zero", "fvn-figure",
            "fvn-spacing", "fvn-fraction",
        ],
        "fvn-ordinal" => &["fvn-normal"],
        "fvn-slashed-zero" => &["fvn-normal"],
        "fvn-figure" => &["fvn-normal"],
        "fvn-spacing" => &["fvn-normal"],
        "fvn-fraction" => &["fvn-normal"],

        "touch" => &["touch-x", "touch-y", "touch-pz"],
        "touch-x" => &["touch"],
        "touch-y" => &["touch"],
        "touch-pz" => &["touch"],

        "line-clamp" => &["display", "overflow"],

        _ => &[],
    }
}
