//! `hopshare routes` commands.

use crate::cli::{RouteInput, RoutesAction};
use crate::commands::joined;
use crate::context::ServiceContext;
use crate::format::{format_unix, to_unix_seconds};
use crate::model::{Route, RoutePayload};
use crate::validate;

/// Executes a `routes` action.
///
/// # Errors
///
/// Returns an error for invalid input or a failed backend call.
pub async fn run(ctx: &ServiceContext, action: &RoutesAction) -> Result<(), String> {
    match action {
        RoutesAction::List => {
            let routes = ctx.read_client()?.list_routes().await?;
            println!("{}", render_routes(&routes));
        }
        RoutesAction::Show { id } => {
            let route = ctx.read_client()?.get_route(*id).await?;
            println!("{}", render_routes(std::slice::from_ref(&route)));
        }
        RoutesAction::Add { input } => {
            let payload = payload_from(input)?;
            let (client, _) = ctx.auth_client()?;
            let route = client.create_route(&payload).await?;
            println!("Created route {}", route.route_id);
        }
        RoutesAction::Update { id, input } => {
            let payload = payload_from(input)?;
            let (client, _) = ctx.auth_client()?;
            let route = client.update_route(*id, &payload).await?;
            println!("Updated route {}", route.route_id);
        }
        RoutesAction::Remove { id } => {
            let (client, _) = ctx.auth_client()?;
            client.delete_route(*id).await?;
            println!("Deleted route {id}");
        }
    }
    Ok(())
}

/// Validates route input and converts it to a wire payload.
fn payload_from(input: &RouteInput) -> Result<RoutePayload, String> {
    validate::route(&input.start, &input.end, &input.stops, input.occupied_seats)
        .map_err(joined)?;
    let date_and_time = to_unix_seconds(&input.date)
        .ok_or_else(|| format!("invalid date: {:?} (use unix seconds or YYYY-MM-DD HH:MM)", input.date))?;
    Ok(RoutePayload {
        start: input.start.clone(),
        end: input.end.clone(),
        stops: input.stops.clone(),
        date_and_time,
        occupied_seats: input.occupied_seats,
        comment: input.comment.clone(),
    })
}

/// Formats routes as a listing.
#[must_use]
fn render_routes(routes: &[Route]) -> String {
    if routes.is_empty() {
        return "No routes found.".to_string();
    }
    let mut lines = Vec::new();
    for route in routes {
        lines.push(format!(
            "{:>6}  {} -> {} (via {})  {}  {} occupied{}",
            route.route_id,
            route.start,
            route.end,
            route.stops,
            format_unix(route.date_and_time),
            route.occupied_seats,
            route.comment.as_deref().map_or_else(String::new, |c| format!("  # {c}")),
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(date: &str) -> RouteInput {
        RouteInput {
            start: "Graz".to_string(),
            end: "Vienna".to_string(),
            stops: "none".to_string(),
            date: date.to_string(),
            occupied_seats: 2,
            comment: None,
        }
    }

    #[test]
    fn payload_accepts_datetime_and_unix_inputs() {
        let payload = payload_from(&input("2024-06-15 10:30")).unwrap();
        assert_eq!(format_unix(payload.date_and_time), "2024-06-15 10:30");

        let payload = payload_from(&input("1700000000")).unwrap();
        assert_eq!(payload.date_and_time, 1_700_000_000);
    }

    #[test]
    fn payload_rejects_bad_dates() {
        let err = payload_from(&input("next tuesday")).unwrap_err();
        assert!(err.contains("invalid date"));
    }

    #[test]
    fn payload_rejects_invalid_fields_before_parsing_date() {
        let mut bad = input("1700000000");
        bad.start = String::new();
        bad.occupied_seats = -1;
        let err = payload_from(&bad).unwrap_err();
        assert!(err.contains("start is required"));
        assert!(err.contains("occupied seats"));
    }

    #[test]
    fn render_routes_includes_comment_when_present() {
        let route = Route {
            route_id: 4,
            start: "Graz".to_string(),
            end: "Vienna".to_string(),
            stops: "Bruck".to_string(),
            date_and_time: 1_700_000_000,
            occupied_seats: 2,
            comment: Some("no smoking".to_string()),
        };
        let output = render_routes(&[route]);
        assert!(output.contains("Graz -> Vienna"));
        assert!(output.contains("# no smoking"));
    }

    #[test]
    fn render_routes_empty() {
        assert_eq!(render_routes(&[]), "No routes found.");
    }
}
