//! # Action -> Arc Label Derivation
//!
//! Arc actions are named ``<DIRECTION>-ARC(<label>)``; the label is
//! recovered from the name, so the ``action -> label`` table is never
//! persisted.

use std::sync::LazyLock;

use regex::Regex;

/// The label of actions which do not build an arc.
pub const NO_ARC_LABEL: &str = "NONE";

static ARC_ACTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:LEFT|RIGHT)-ARC\((.*)\)").unwrap());

/// Derive the arc label for an action name.
///
/// ## Returns
/// The captured label for ``LEFT-ARC(label)`` / ``RIGHT-ARC(label)``; else [`NO_ARC_LABEL`].
pub fn derive_arc_label(action: &str) -> String {
    match ARC_ACTION_REGEX.captures(action) {
        Some(caps) => caps[1].to_string(),
        None => NO_ARC_LABEL.to_string(),
    }
}
