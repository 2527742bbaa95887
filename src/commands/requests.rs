//! `hopshare requests` commands.

use crate::cli::{RequestInput, RequestsAction};
use crate::commands::joined;
use crate::context::ServiceContext;
use crate::format::{format_unix, to_unix_seconds};
use crate::model::{RideRequest, RideRequestPayload};
use crate::validate;

/// Executes a `requests` action.
///
/// # Errors
///
/// Returns an error for invalid input or a failed backend call.
pub async fn run(ctx: &ServiceContext, action: &RequestsAction) -> Result<(), String> {
    match action {
        RequestsAction::List => {
            let requests = ctx.read_client()?.list_requests().await?;
            println!("{}", render_requests(&requests));
        }
        RequestsAction::Show { id } => {
            let request = ctx.read_client()?.get_request(*id).await?;
            println!("{}", render_requests(std::slice::from_ref(&request)));
        }
        RequestsAction::Add { input } => {
            let payload = payload_from(input)?;
            let (client, _) = ctx.auth_client()?;
            let request = client.create_request(&payload).await?;
            println!("Created request {}", request.request_id);
        }
        RequestsAction::Update { id, input } => {
            let payload = payload_from(input)?;
            let (client, _) = ctx.auth_client()?;
            let request = client.update_request(*id, &payload).await?;
            println!("Updated request {}", request.request_id);
        }
        RequestsAction::Remove { id } => {
            let (client, _) = ctx.auth_client()?;
            client.delete_request(*id).await?;
            println!("Deleted request {id}");
        }
    }
    Ok(())
}

/// Validates ride request input and converts it to a wire payload.
fn payload_from(input: &RequestInput) -> Result<RideRequestPayload, String> {
    validate::ride_request(&input.start, &input.end).map_err(joined)?;
    let date_and_time = to_unix_seconds(&input.date)
        .ok_or_else(|| format!("invalid date: {:?} (use unix seconds or YYYY-MM-DD HH:MM)", input.date))?;
    Ok(RideRequestPayload {
        start: input.start.clone(),
        end: input.end.clone(),
        date_and_time,
        description: input.description.clone(),
    })
}

/// Formats ride requests as a listing.
#[must_use]
fn render_requests(requests: &[RideRequest]) -> String {
    if requests.is_empty() {
        return "No ride requests found.".to_string();
    }
    let mut lines = Vec::new();
    for request in requests {
        lines.push(format!(
            "{:>6}  {} -> {}  {}{}",
            request.request_id,
            request.start,
            request.end,
            format_unix(request.date_and_time),
            request.description.as_deref().map_or_else(String::new, |d| format!("  # {d}")),
        ));
    }
    lines.join("\n")
}
