//! Wire-level data model for the HopShare backend.
//!
//! Field names mirror the backend's PascalCase JSON exactly; the backend
//! owns the schema and this client only mirrors the subset it touches.
//! Payload structs carry the fields a user supplies when creating or
//! updating a resource, which is a subset of the full records.

use serde::{Deserialize, Serialize};

/// A backend user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned identifier.
    #[serde(rename = "UserID")]
    pub user_id: i64,
    /// Display name; the field username resolution matches against.
    #[serde(rename = "Name")]
    pub name: String,
    /// Account email address.
    #[serde(rename = "Email")]
    pub email: String,
}

/// An offered carpool route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Backend-assigned identifier.
    #[serde(rename = "RouteID")]
    pub route_id: i64,
    /// Departure location.
    #[serde(rename = "Start")]
    pub start: String,
    /// Destination.
    #[serde(rename = "End")]
    pub end: String,
    /// Intermediate stops, free text.
    #[serde(rename = "Stops")]
    pub stops: String,
    /// Departure time as unix seconds.
    #[serde(rename = "DateAndTime")]
    pub date_and_time: i64,
    /// Seats already taken.
    #[serde(rename = "OccupiedSeats")]
    pub occupied_seats: i64,
    /// Optional free-text comment.
    #[serde(rename = "Comment")]
    pub comment: Option<String>,
}

/// Fields supplied when creating or updating a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePayload {
    /// Departure location.
    #[serde(rename = "Start")]
    pub start: String,
    /// Destination.
    #[serde(rename = "End")]
    pub end: String,
    /// Intermediate stops, free text.
    #[serde(rename = "Stops")]
    pub stops: String,
    /// Departure time as unix seconds.
    #[serde(rename = "DateAndTime")]
    pub date_and_time: i64,
    /// Seats already taken.
    #[serde(rename = "OccupiedSeats")]
    pub occupied_seats: i64,
    /// Optional free-text comment.
    #[serde(rename = "Comment")]
    pub comment: Option<String>,
}

/// A ride request posted by a passenger looking for a lift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideRequest {
    /// Backend-assigned identifier.
    #[serde(rename = "RequestID")]
    pub request_id: i64,
    /// Departure location.
    #[serde(rename = "Start")]
    pub start: String,
    /// Destination.
    #[serde(rename = "End")]
    pub end: String,
    /// Requested time as unix seconds.
    #[serde(rename = "DateAndTime")]
    pub date_and_time: i64,
    /// Optional free-text description.
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

/// Fields supplied when creating or updating a ride request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideRequestPayload {
    /// Departure location.
    #[serde(rename = "Start")]
    pub start: String,
    /// Destination.
    #[serde(rename = "End")]
    pub end: String,
    /// Requested time as unix seconds.
    #[serde(rename = "DateAndTime")]
    pub date_and_time: i64,
    /// Optional free-text description.
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

/// A car registered to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Backend-assigned identifier.
    #[serde(rename = "CarID")]
    pub car_id: i64,
    /// Total passenger seats.
    #[serde(rename = "Seats")]
    pub seats: i64,
    /// Date of last service, free text.
    #[serde(rename = "ServiceDate")]
    pub service_date: String,
    /// Make and model.
    #[serde(rename = "MakeModel")]
    pub make_model: String,
    /// License plate.
    #[serde(rename = "LicensePlate")]
    pub license_plate: String,
}

/// Fields supplied when creating or updating a car.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarPayload {
    /// Total passenger seats.
    #[serde(rename = "Seats")]
    pub seats: i64,
    /// Date of last service, free text.
    #[serde(rename = "ServiceDate")]
    pub service_date: String,
    /// Make and model.
    #[serde(rename = "MakeModel")]
    pub make_model: String,
    /// License plate.
    #[serde(rename = "LicensePlate")]
    pub license_plate: String,
}

/// A review written by one user about another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Backend-assigned identifier.
    #[serde(rename = "ReviewID")]
    pub review_id: i64,
    /// Star rating, 0 through 5.
    #[serde(rename = "Rating")]
    pub rating: i64,
    /// `true` when the reviewed user acted as a driver.
    #[serde(rename = "UserType")]
    pub user_type: bool,
    /// Free-text review body.
    #[serde(rename = "Description")]
    pub description: String,
    /// Identifier of the user the review is about.
    #[serde(rename = "ReviewedUser")]
    pub reviewed_user: i64,
    /// Creation time as unix seconds.
    #[serde(rename = "Timestamp")]
    pub timestamp: i64,
}

/// Fields supplied when creating or updating a review.
///
/// `reviewed_user` is a resolved identifier, never a username; resolution
/// happens before this payload is built (see [`crate::identity`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewPayload {
    /// Star rating, 0 through 5.
    #[serde(rename = "Rating")]
    pub rating: i64,
    /// `true` when the reviewed user acted as a driver.
    #[serde(rename = "UserType")]
    pub user_type: bool,
    /// Free-text review body.
    #[serde(rename = "Description")]
    pub description: String,
    /// Identifier of the user the review is about.
    #[serde(rename = "ReviewedUser")]
    pub reviewed_user: i64,
}

/// A report filed against a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Backend-assigned identifier.
    #[serde(rename = "ReportID")]
    pub report_id: i64,
    /// What happened.
    #[serde(rename = "Description")]
    pub description: String,
    /// Identifier of the reported user.
    #[serde(rename = "ReportedUser")]
    pub reported_user: i64,
    /// Creation time as unix seconds.
    #[serde(rename = "Timestamp")]
    pub timestamp: i64,
}

/// Fields supplied when filing a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPayload {
    /// What happened.
    #[serde(rename = "Description")]
    pub description: String,
    /// Identifier of the reported user.
    #[serde(rename = "ReportedUser")]
    pub reported_user: i64,
}
