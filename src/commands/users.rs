//! `hopshare users` commands.

use crate::cli::UsersAction;
use crate::context::ServiceContext;
use crate::model::User;

/// Executes a `users` action.
///
/// # Errors
///
/// Returns an error when the backend call fails.
pub async fn run(ctx: &ServiceContext, action: &UsersAction) -> Result<(), String> {
    let client = ctx.read_client()?;
    match action {
        UsersAction::List { name } => {
            let users = client.list_users(name.as_deref()).await?;
            println!("{}", render_users(&users));
        }
        UsersAction::Show { id } => {
            let user = client.get_user(*id).await?;
            println!("{}", render_users(std::slice::from_ref(&user)));
        }
    }
    Ok(())
}

/// Formats users as an aligned listing.
#[must_use]
fn render_users(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }
    let width = users.iter().map(|u| u.name.len()).max().unwrap_or(0).max(4);
    let mut lines = vec![format!("{:>6}  {:<width$}  EMAIL", "ID", "NAME")];
    for user in users {
        lines.push(format!("{:>6}  {:<width$}  {}", user.user_id, user.name, user.email));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str, email: &str) -> User {
        User { user_id: id, name: name.to_string(), email: email.to_string() }
    }

    #[test]
    fn render_users_aligns_columns() {
        let output = render_users(&[
            user(7, "alice", "alice@example.com"),
            user(123, "Charlie", "charlie@example.com"),
        ]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("NAME"));
        assert!(lines[1].contains("alice@example.com"));
        assert!(lines[2].starts_with("   123"));
    }

    #[test]
    fn render_users_empty() {
        assert_eq!(render_users(&[]), "No users found.");
    }
}
