//! Response composition — tool result fragments to one reply.
//!
//! Intent-specific phrasing lives in the tools: each emits a
//! self-contained, user-facing sentence for its own outcome, so the
//! composer needs no per-intent templates. It joins the fragments in
//! execution order with single spaces. A failed step contributes its
//! explanatory fragment in place without disturbing the fragments before
//! it. A fragment identical to the one before it is dropped, so a partial
//! chain never repeats its explanation.

use shopmate_core::tool::ToolResult;
use tracing::debug;

/// Fixed reply for queries the pipeline could not act on at all.
pub const CANNOT_UNDERSTAND: &str =
    "I'm sorry, I couldn't understand your request. Could you rephrase it?";

pub fn compose(results: &[ToolResult]) -> String {
    let mut fragments: Vec<&str> = Vec::with_capacity(results.len());
    for result in results {
        let fragment = result.output.trim();
        if fragment.is_empty() {
            continue;
        }
        if fragments.last() == Some(&fragment) {
            continue;
        }
        fragments.push(fragment);
    }

    if fragments.is_empty() {
        return CANNOT_UNDERSTAND.to_string();
    }

    debug!(fragments = fragments.len(), "composed response");
    fragments.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopmate_core::tool::{ToolResult, ToolStatus};

    #[test]
    fn fragments_join_in_order() {
        let results = vec![
            ToolResult::ok("c1", "I found a skirt."),
            ToolResult::ok("c2", "It ships Monday."),
        ];
        assert_eq!(compose(&results), "I found a skirt. It ships Monday.");
    }

    #[test]
    fn failure_fragment_keeps_prior_successes() {
        let results = vec![
            ToolResult::ok("c1", "I found a skirt."),
            ToolResult::failed("c2", ToolStatus::InvalidCode, "The code is not valid."),
        ];
        assert_eq!(
            compose(&results),
            "I found a skirt. The code is not valid."
        );
    }

    #[test]
    fn consecutive_duplicates_are_dropped() {
        let miss = "I couldn't find any products matching your criteria.";
        let results = vec![
            ToolResult::failed("c1", ToolStatus::NotFound, miss),
            ToolResult::failed("c2", ToolStatus::NotFound, miss),
        ];
        assert_eq!(compose(&results), miss);
    }

    #[test]
    fn empty_results_fall_back() {
        assert_eq!(compose(&[]), CANNOT_UNDERSTAND);
    }

    #[test]
    fn blank_fragments_are_skipped() {
        let results = vec![
            ToolResult::ok("c1", ""),
            ToolResult::ok("c2", "It ships Monday."),
        ];
        assert_eq!(compose(&results), "It ships Monday.");
    }
}
