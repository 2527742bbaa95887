//! Command dispatch and handlers.

pub mod cars;
pub mod reports;
pub mod requests;
pub mod reviews;
pub mod routes;
pub mod session;
pub mod users;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// Builds the live context and a current-thread async runtime; every
/// handler runs to completion on it.
///
/// # Errors
///
/// Returns an error string if context construction or the selected
/// command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = ServiceContext::live()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;
    runtime.block_on(dispatch_with_context(command, &ctx))
}

/// Dispatch a command with the given service context.
async fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Login { email, password, remember } => {
            session::login(ctx, email.as_deref(), password.as_deref(), *remember).await
        }
        Command::Logout => session::logout(ctx),
        Command::Users { action } => users::run(ctx, action).await,
        Command::Routes { action } => routes::run(ctx, action).await,
        Command::Requests { action } => requests::run(ctx, action).await,
        Command::Cars { action } => cars::run(ctx, action).await,
        Command::Reviews { action } => reviews::run(ctx, action).await,
        Command::Reports { action } => reports::run(ctx, action).await,
    }
}

/// Joins validator output into a single error string.
fn joined(problems: Vec<String>) -> String {
    problems.join("; ")
}
