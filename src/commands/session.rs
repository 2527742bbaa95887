//! `hopshare login` / `hopshare logout` commands.

use crate::auth;
use crate::commands::joined;
use crate::context::ServiceContext;
use crate::ports::credentials::StoredCredentials;
use crate::validate;

/// Executes the `login` command.
///
/// Email and password come from flags or, when omitted, the prompter.
/// Credentials are verified against the backend probe before anything
/// is stored; `remember` persists them, otherwise any stored profile is
/// cleared so a failed "remember" never leaves stale credentials around.
///
/// # Errors
///
/// Returns an error for invalid input, rejected credentials, or a
/// storage failure.
pub async fn login(
    ctx: &ServiceContext,
    email: Option<&str>,
    password: Option<&str>,
    remember: bool,
) -> Result<(), String> {
    let email = match email {
        Some(e) => e.to_string(),
        None => ctx.prompter.ask("Email:").map_err(|e| e.to_string())?,
    };
    let password = match password {
        Some(p) => p.to_string(),
        None => ctx.prompter.ask("Password:").map_err(|e| e.to_string())?,
    };
    validate::login(&email, &password).map_err(joined)?;

    let credentials = StoredCredentials { email, password };
    let client = ctx.client_as(&credentials)?;
    auth::verify_login(&client).await?;

    if remember {
        ctx.credentials
            .save(&credentials)
            .map_err(|e| format!("login verified but storing credentials failed: {e}"))?;
        println!("Logged in as {} (credentials stored)", credentials.email);
    } else {
        ctx.credentials.clear().map_err(|e| e.to_string())?;
        println!("Logged in as {}", credentials.email);
    }
    Ok(())
}

/// Executes the `logout` command.
///
/// # Errors
///
/// Returns an error when the stored profile cannot be removed.
pub fn logout(ctx: &ServiceContext) -> Result<(), String> {
    ctx.credentials.clear().map_err(|e| e.to_string())?;
    println!("Logged out");
    Ok(())
}
