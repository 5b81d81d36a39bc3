//! Conflict resolution.
//!
//! Classes are walked in reverse declaration order so that the last
//! declaration of a group wins for free: the first class seen per
//! (modifier scope, group) slot is kept, and everything earlier in the
//! same slot, or in a slot the winner's group invalidates, is dropped.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::class_list::tokenize;
use crate::groups::{GroupId, conflicts};
use crate::parse::parse_class;

/// Tracks which (modifier scope, group) slots have been claimed.
#[derive(Default)]
struct SeenGroups {
    by_scope: FxHashMap<(bool, String), FxHashSet<GroupId>>,
}

impl SeenGroups {
    /// Decide whether a class survives, recording its claims if it does.
    /// Must be called in reverse declaration order.
    fn should_keep(&mut self, class: &str) -> bool {
        let Some(parsed) = parse_class(class) else {
            // Unknown classes always survive and claim nothing.
            return true;
        };

        let slot = self
            .by_scope
            .entry((parsed.has_important, parsed.modifiers))
            .or_default();

        if slot.contains(&parsed.group) {
            return false;
        }

        if let GroupId::Known(group) = &parsed.group {
            for &conflicting in conflicts(group) {
                slot.insert(GroupId::Known(conflicting));
            }
            // `text-lg/7` also sets the line height, so it suppresses any
            // earlier `leading-*` in the same scope.
            if parsed.has_postfix && *group == "text-size" {
                slot.insert(GroupId::Known("leading"));
            }
        }
        slot.insert(parsed.group);

        true
    }
}

/// Run the full pipeline over a flattened class string.
pub(crate) fn merge_classes(input: &str) -> String {
    let mut seen = SeenGroups::default();
    let mut kept: Vec<&str> = Vec::new();

    for class in tokenize(input).rev() {
        if seen.should_keep(class) {
            kept.push(class);
        }
    }

    kept.reverse();
    kept.join(" ")
}
