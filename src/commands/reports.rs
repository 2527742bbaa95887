//! `hopshare reports` commands.

use crate::cli::ReportsAction;
use crate::commands::joined;
use crate::context::ServiceContext;
use crate::format::format_unix;
use crate::model::{Report, ReportPayload};
use crate::validate;

/// Executes a `reports` action.
///
/// # Errors
///
/// Returns an error for invalid input or a failed backend call.
pub async fn run(ctx: &ServiceContext, action: &ReportsAction) -> Result<(), String> {
    match action {
        ReportsAction::List => {
            let reports = ctx.read_client()?.list_reports().await?;
            println!("{}", render_reports(&reports));
        }
        ReportsAction::Show { id } => {
            let report = ctx.read_client()?.get_report(*id).await?;
            println!("{}", render_reports(std::slice::from_ref(&report)));
        }
        ReportsAction::Add { description, reported_user } => {
            validate::report(description).map_err(joined)?;
            let (client, _) = ctx.auth_client()?;
            let payload = ReportPayload {
                description: description.clone(),
                reported_user: *reported_user,
            };
            let report = client.create_report(&payload).await?;
            println!("Filed report {}", report.report_id);
        }
    }
    Ok(())
}

/// Formats reports as a listing.
#[must_use]
fn render_reports(reports: &[Report]) -> String {
    if reports.is_empty() {
        return "No reports found.".to_string();
    }
    let mut lines = Vec::new();
    for report in reports {
        lines.push(format!(
            "{:>6}  user {}  {}  {}",
            report.report_id,
            report.reported_user,
            format_unix(report.timestamp),
            report.description,
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_reports_lists_fields() {
        let report = Report {
            report_id: 2,
            description: "no-show at pickup".to_string(),
            reported_user: 7,
            timestamp: 1_700_000_000,
        };
        let output = render_reports(&[report]);
        assert!(output.contains("user 7"));
        assert!(output.contains("no-show at pickup"));
    }

    #[test]
    fn render_reports_empty() {
        assert_eq!(render_reports(&[]), "No reports found.");
    }
}
