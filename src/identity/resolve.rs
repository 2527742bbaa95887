//! Identity resolution: maps free-text usernames to backend user ids.
//!
//! A review attributes its content to a specific account, so resolution
//! never guesses between multiple plausible accounts. Every ambiguous
//! state surfaces as data ([`Resolution::NeedsDisambiguation`]) or as a
//! labeled failure, never as a silent default pick.

use crate::model::User;
use crate::ports::directory::UserDirectory;

const NO_USER_FOUND: &str = "no user found with that username";

/// How a candidate set relates to the queried term.
///
/// Exact match: case-insensitive equality of the display name with the
/// trimmed term. Partial match: case-insensitive containment. The
/// directory already substring-filters server-side, so every candidate
/// is a partial match by construction; exact matches are a subset.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Nothing matched.
    NotFound,
    /// Exactly one exact match.
    ExactUnique(User),
    /// Two or more accounts share the exact name.
    ExactDuplicates(Vec<User>),
    /// No exact match and exactly one partial match.
    PartialUnique(User),
    /// No exact match and two or more partial matches.
    PartialAmbiguous(Vec<User>),
}

/// Outcome surfaced to callers of [`resolve`].
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A single unambiguous account; carries its id.
    Resolved(i64),
    /// Two or more candidates the operator must choose between. The
    /// choice itself is caller-side; the resolver is never re-entered
    /// with a picked candidate.
    NeedsDisambiguation(Vec<User>),
    /// Resolution cannot proceed; the message says why.
    Failed(String),
}

/// Classifies a candidate set against the trimmed query term.
///
/// Pure over its inputs; the candidate order is preserved in the
/// multi-match variants.
#[must_use]
pub fn classify(term: &str, candidates: &[User]) -> Classification {
    let needle = term.to_lowercase();

    let mut exact: Vec<User> = candidates
        .iter()
        .filter(|u| u.name.to_lowercase() == needle)
        .cloned()
        .collect();
    if exact.len() >= 2 {
        return Classification::ExactDuplicates(exact);
    }
    if let Some(user) = exact.pop() {
        return Classification::ExactUnique(user);
    }

    // Defensive re-filter; the backend already substring-filtered.
    let mut partial: Vec<User> = candidates
        .iter()
        .filter(|u| u.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    if partial.len() >= 2 {
        return Classification::PartialAmbiguous(partial);
    }
    match partial.pop() {
        Some(user) => Classification::PartialUnique(user),
        None => Classification::NotFound,
    }
}

/// Resolves a free-text username to a backend user id, a disambiguation
/// request, or a labeled failure.
///
/// Makes at most one directory call per invocation and holds no state
/// across calls; given a stable directory, repeated calls yield
/// identical outcomes. Whitespace-only input fails without touching the
/// directory.
///
/// A single partial match with no exact match fails rather than
/// resolving: the operator must re-enter the exact name. Near-matches on
/// an attribution-bearing field are never resolved silently.
pub async fn resolve(directory: &dyn UserDirectory, input: &str) -> Resolution {
    let term = input.trim();
    if term.is_empty() {
        return Resolution::Failed("empty username".to_string());
    }

    let candidates = match directory.search(term).await {
        Ok(candidates) => candidates,
        Err(e) => return Resolution::Failed(format!("user lookup failed: {e}")),
    };
    if candidates.is_empty() {
        return Resolution::Failed(NO_USER_FOUND.to_string());
    }

    match classify(term, &candidates) {
        Classification::ExactUnique(user) => Resolution::Resolved(user.user_id),
        Classification::ExactDuplicates(users) | Classification::PartialAmbiguous(users) => {
            Resolution::NeedsDisambiguation(users)
        }
        Classification::PartialUnique(user) => Resolution::Failed(format!(
            "found one partial match (\"{}\") but no exact match; enter the exact username",
            user.name
        )),
        Classification::NotFound => Resolution::Failed(NO_USER_FOUND.to_string()),
    }
}
