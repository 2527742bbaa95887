//! `hopshare reviews` commands.
//!
//! `reviews add` is the consumer of username resolution and implements
//! the two-phase protocol: phase one resolves the free-text username;
//! when that surfaces multiple candidates, the operator picks one and
//! phase two posts the review with the chosen id. The resolver is never
//! re-entered with the choice.

use crate::auth;
use crate::cli::ReviewsAction;
use crate::commands::joined;
use crate::context::ServiceContext;
use crate::format::format_unix;
use crate::identity::{resolve, Resolution};
use crate::model::{Review, ReviewPayload, User};
use crate::ports::prompt::Prompter;
use crate::validate;

/// Executes a `reviews` action.
///
/// # Errors
///
/// Returns an error when not logged in, for invalid input, an
/// unresolvable username, or a failed backend call.
pub async fn run(ctx: &ServiceContext, action: &ReviewsAction) -> Result<(), String> {
    let (client, stored) = ctx.auth_client()?;
    let author = auth::current_user(&client, &stored.email).await?;

    match action {
        ReviewsAction::List { about } => {
            let reviews = client.list_reviews(author.user_id, !*about).await?;
            println!("{}", render_reviews(&reviews));
        }
        ReviewsAction::Add { rating, passenger, description, user } => {
            validate::review(*rating, user).map_err(joined)?;

            let reviewed_user = match resolve(ctx.directory.as_ref(), user).await {
                Resolution::Resolved(id) => id,
                Resolution::NeedsDisambiguation(candidates) => {
                    pick_candidate(ctx.prompter.as_ref(), &candidates)?
                }
                Resolution::Failed(message) => return Err(message),
            };

            let payload = ReviewPayload {
                rating: *rating,
                user_type: !*passenger,
                description: description.clone(),
                reviewed_user,
            };
            let review = client.create_review(author.user_id, &payload).await?;
            println!("Posted review {}", review.review_id);
        }
        ReviewsAction::Update { id, rating, passenger, description } => {
            validate::review(*rating, "unchanged").map_err(joined)?;

            // The reviewed user is fixed at creation time; editing never
            // re-resolves a username.
            let existing = client.get_review(author.user_id, *id).await?;
            let payload = ReviewPayload {
                rating: *rating,
                user_type: !*passenger,
                description: description.clone(),
                reviewed_user: existing.reviewed_user,
            };
            let review = client.update_review(author.user_id, *id, &payload).await?;
            println!("Updated review {}", review.review_id);
        }
        ReviewsAction::Remove { id } => {
            client.delete_review(author.user_id, *id).await?;
            println!("Deleted review {id}");
        }
    }
    Ok(())
}

/// Presents every candidate and asks the operator for an id.
///
/// The answer must be one of the offered candidates; anything else is
/// an error, never a fallback pick.
fn pick_candidate(prompter: &dyn Prompter, candidates: &[User]) -> Result<i64, String> {
    println!("Several accounts match:");
    println!("{}", render_candidates(candidates));
    let answer = prompter
        .ask("Enter the id of the user to review:")
        .map_err(|e| format!("could not read choice: {e}"))?;
    let id: i64 = answer.parse().map_err(|_| format!("not a valid user id: {answer:?}"))?;
    if candidates.iter().any(|u| u.user_id == id) {
        Ok(id)
    } else {
        Err(format!("user id {id} is not among the matching accounts"))
    }
}

/// Formats disambiguation candidates, one per line.
#[must_use]
fn render_candidates(candidates: &[User]) -> String {
    candidates
        .iter()
        .map(|u| format!("  {:>6}  {}  <{}>", u.user_id, u.name, u.email))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats reviews as a listing.
#[must_use]
fn render_reviews(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return "No reviews found.".to_string();
    }
    let mut lines = Vec::new();
    for review in reviews {
        lines.push(format!(
            "{:>6}  {} {}/5  user {}  {}  {}",
            review.review_id,
            if review.user_type { "driver" } else { "passenger" },
            review.rating,
            review.reviewed_user,
            format_unix(review.timestamp),
            review.description,
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePrompter {
        answer: String,
    }

    impl Prompter for FakePrompter {
        fn ask(&self, _prompt: &str) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self.answer.clone())
        }
    }

    fn user(id: i64, name: &str) -> User {
        User {
            user_id: id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    #[test]
    fn pick_candidate_accepts_an_offered_id() {
        let prompter = FakePrompter { answer: "9".to_string() };
        let candidates = vec![user(3, "Charlie"), user(9, "Charlie")];
        assert_eq!(pick_candidate(&prompter, &candidates), Ok(9));
    }

    #[test]
    fn pick_candidate_rejects_an_unoffered_id() {
        let prompter = FakePrompter { answer: "42".to_string() };
        let candidates = vec![user(3, "Charlie"), user(9, "Charlie")];
        let err = pick_candidate(&prompter, &candidates).unwrap_err();
        assert!(err.contains("42"));
    }

    #[test]
    fn pick_candidate_rejects_non_numeric_answers() {
        let prompter = FakePrompter { answer: "the first one".to_string() };
        let candidates = vec![user(3, "Charlie"), user(9, "Charlie")];
        let err = pick_candidate(&prompter, &candidates).unwrap_err();
        assert!(err.contains("not a valid user id"));
    }

    #[test]
    fn render_candidates_shows_id_name_email() {
        let output = render_candidates(&[user(3, "Charlie"), user(9, "Charlie")]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("3"));
        assert!(lines[0].contains("<charlie@example.com>"));
    }

    #[test]
    fn render_reviews_distinguishes_driver_and_passenger() {
        let review = |user_type| Review {
            review_id: 1,
            rating: 4,
            user_type,
            description: "fine".to_string(),
            reviewed_user: 7,
            timestamp: 1_700_000_000,
        };
        assert!(render_reviews(&[review(true)]).contains("driver 4/5"));
        assert!(render_reviews(&[review(false)]).contains("passenger 4/5"));
    }

    #[test]
    fn render_reviews_empty() {
        assert_eq!(render_reviews(&[]), "No reviews found.");
    }
}
