//! HTTP client for the HopShare backend API.
//!
//! Credentials are passed in explicitly at construction time; nothing in
//! this module reads ambient authentication state. Mutating requests
//! (POST/PUT/DELETE) attach a Basic Auth header when auth is enabled and
//! credentials are present; GETs never do.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::Config;
use crate::model::{
    Car, CarPayload, Report, ReportPayload, Review, ReviewPayload, RideRequest,
    RideRequestPayload, Route, RoutePayload, User,
};

/// Per-request timeout; the backend answers well inside this.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

/// Basic Auth credentials attached to mutating requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    /// Account email, used as the Basic Auth username.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Standard backend response envelope: `{ success, data, message, error }`.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Whether the backend accepted the request.
    pub success: bool,
    /// Payload, present on success.
    #[serde(default)]
    pub data: Option<T>,
    /// Human-readable detail, usually on failure.
    #[serde(default)]
    pub message: Option<String>,
    /// Machine-readable error code, e.g. `VALIDATION_ERROR`.
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwraps the envelope into its payload.
    ///
    /// # Errors
    ///
    /// Returns the backend's `error`/`message` text when `success` is
    /// false or the payload is missing.
    pub fn into_data(self, status: StatusCode) -> Result<T, String> {
        if self.success {
            self.data.ok_or_else(|| "backend response missing data".to_string())
        } else {
            Err(failure_text(self.error, self.message, status))
        }
    }
}

/// Outcome of the authentication probe request (see [`crate::auth`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    /// HTTP status code of the probe.
    pub status: u16,
    /// Backend error code, when the body parsed as an envelope.
    pub error_code: Option<String>,
    /// Backend message, when the body parsed as an envelope.
    pub message: Option<String>,
}

/// Picks the most specific failure text available.
fn failure_text(error: Option<String>, message: Option<String>, status: StatusCode) -> String {
    error
        .or(message)
        .unwrap_or_else(|| format!("backend error ({})", status.as_u16()))
}

fn is_mutating(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::DELETE | Method::PATCH)
}

/// Typed client over the backend's REST surface.
pub struct ApiClient {
    http: Client,
    base: String,
    basic_auth_enabled: bool,
    auth: Option<BasicAuth>,
}

impl ApiClient {
    /// Creates a client for the configured base URL.
    ///
    /// Pass `None` for read-only use; mutating endpoints reject
    /// unauthenticated requests server-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config, auth: Option<BasicAuth>) -> Result<Self, String> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| format!("failed to build HTTP client: {e}"))?;
        Ok(Self {
            http,
            base: config.api_base.clone(),
            basic_auth_enabled: config.basic_auth_enabled,
            auth,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let attach_auth = self.basic_auth_enabled && is_mutating(&method);
        let mut builder = self.http.request(method, format!("{}{path}", self.base));
        if attach_auth {
            if let Some(auth) = &self.auth {
                builder = builder.basic_auth(&auth.email, Some(&auth.password));
            }
        }
        builder
    }

    async fn execute<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, String> {
        let response = builder.send().await.map_err(|e| format!("network error: {e}"))?;
        let status = response.status();
        let body =
            response.text().await.map_err(|e| format!("failed to read response: {e}"))?;

        if let Ok(envelope) = serde_json::from_str::<Envelope<T>>(&body) {
            return envelope.into_data(status);
        }
        if !status.is_success() {
            return Err(format!("backend error ({})", status.as_u16()));
        }
        serde_json::from_str(&body).map_err(|e| format!("failed to parse response: {e}"))
    }

    /// Executes a request whose success carries no payload (deletes).
    async fn execute_empty(builder: RequestBuilder) -> Result<(), String> {
        let response = builder.send().await.map_err(|e| format!("network error: {e}"))?;
        let status = response.status();
        let body =
            response.text().await.map_err(|e| format!("failed to read response: {e}"))?;

        if let Ok(envelope) = serde_json::from_str::<Envelope<serde_json::Value>>(&body) {
            if !envelope.success {
                return Err(failure_text(envelope.error, envelope.message, status));
            }
            return Ok(());
        }
        if status.is_success() {
            Ok(())
        } else {
            Err(format!("backend error ({})", status.as_u16()))
        }
    }

    /// Sends the authentication probe: an intentionally empty report body.
    ///
    /// The caller classifies the outcome; this method only reports what
    /// the backend said.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be sent or read at all.
    pub async fn probe_auth(&self) -> Result<ProbeResponse, String> {
        let response = self
            .request(Method::POST, "/reports")
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| format!("network error: {e}"))?;
        let status = response.status().as_u16();
        let body =
            response.text().await.map_err(|e| format!("failed to read response: {e}"))?;

        let (error_code, message) =
            serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                .map_or((None, None), |env| (env.error, env.message));

        Ok(ProbeResponse { status, error_code, message })
    }

    // --- Users ---

    /// Lists users; `name` applies the backend's case-insensitive
    /// substring filter on `Name`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn list_users(&self, name: Option<&str>) -> Result<Vec<User>, String> {
        let mut builder = self.request(Method::GET, "/users");
        if let Some(name) = name {
            builder = builder.query(&[("Name", name)]);
        }
        Self::execute(builder).await
    }

    /// Fetches a single user by id.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn get_user(&self, user_id: i64) -> Result<User, String> {
        Self::execute(self.request(Method::GET, &format!("/users/{user_id}"))).await
    }

    // --- Routes ---

    /// Lists all offered routes.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn list_routes(&self) -> Result<Vec<Route>, String> {
        Self::execute(self.request(Method::GET, "/routes")).await
    }

    /// Fetches a single route by id.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn get_route(&self, route_id: i64) -> Result<Route, String> {
        Self::execute(self.request(Method::GET, &format!("/routes/{route_id}"))).await
    }

    /// Creates a route.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn create_route(&self, payload: &RoutePayload) -> Result<Route, String> {
        Self::execute(self.request(Method::POST, "/routes").json(payload)).await
    }

    /// Replaces a route.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn update_route(
        &self,
        route_id: i64,
        payload: &RoutePayload,
    ) -> Result<Route, String> {
        Self::execute(self.request(Method::PUT, &format!("/routes/{route_id}")).json(payload))
            .await
    }

    /// Deletes a route.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn delete_route(&self, route_id: i64) -> Result<(), String> {
        Self::execute_empty(self.request(Method::DELETE, &format!("/routes/{route_id}"))).await
    }

    // --- Ride requests ---

    /// Lists all ride requests.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn list_requests(&self) -> Result<Vec<RideRequest>, String> {
        Self::execute(self.request(Method::GET, "/requests")).await
    }

    /// Fetches a single ride request by id.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn get_request(&self, request_id: i64) -> Result<RideRequest, String> {
        Self::execute(self.request(Method::GET, &format!("/requests/{request_id}"))).await
    }

    /// Creates a ride request.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn create_request(
        &self,
        payload: &RideRequestPayload,
    ) -> Result<RideRequest, String> {
        Self::execute(self.request(Method::POST, "/requests").json(payload)).await
    }

    /// Replaces a ride request.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn update_request(
        &self,
        request_id: i64,
        payload: &RideRequestPayload,
    ) -> Result<RideRequest, String> {
        Self::execute(
            self.request(Method::PUT, &format!("/requests/{request_id}")).json(payload),
        )
        .await
    }

    /// Deletes a ride request.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn delete_request(&self, request_id: i64) -> Result<(), String> {
        Self::execute_empty(self.request(Method::DELETE, &format!("/requests/{request_id}")))
            .await
    }

    // --- Cars (scoped to a user) ---

    /// Lists a user's cars.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn list_cars(&self, user_id: i64) -> Result<Vec<Car>, String> {
        Self::execute(self.request(Method::GET, &format!("/users/{user_id}/cars"))).await
    }

    /// Registers a car for a user.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn create_car(&self, user_id: i64, payload: &CarPayload) -> Result<Car, String> {
        Self::execute(self.request(Method::POST, &format!("/users/{user_id}/cars")).json(payload))
            .await
    }

    /// Replaces a car.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn update_car(
        &self,
        user_id: i64,
        car_id: i64,
        payload: &CarPayload,
    ) -> Result<Car, String> {
        Self::execute(
            self.request(Method::PUT, &format!("/users/{user_id}/cars/{car_id}")).json(payload),
        )
        .await
    }

    /// Deletes a car.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn delete_car(&self, user_id: i64, car_id: i64) -> Result<(), String> {
        Self::execute_empty(
            self.request(Method::DELETE, &format!("/users/{user_id}/cars/{car_id}")),
        )
        .await
    }

    // --- Reviews (scoped to the authoring user) ---

    /// Lists reviews for a user; `mine` selects reviews the user wrote
    /// (`true`) versus reviews about them (`false`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn list_reviews(&self, user_id: i64, mine: bool) -> Result<Vec<Review>, String> {
        Self::execute(
            self.request(Method::GET, &format!("/users/{user_id}/reviews"))
                .query(&[("myReviews", mine)]),
        )
        .await
    }

    /// Fetches a single review.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn get_review(&self, user_id: i64, review_id: i64) -> Result<Review, String> {
        Self::execute(
            self.request(Method::GET, &format!("/users/{user_id}/reviews/{review_id}")),
        )
        .await
    }

    /// Posts a review authored by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn create_review(
        &self,
        user_id: i64,
        payload: &ReviewPayload,
    ) -> Result<Review, String> {
        Self::execute(
            self.request(Method::POST, &format!("/users/{user_id}/reviews")).json(payload),
        )
        .await
    }

    /// Replaces a review.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn update_review(
        &self,
        user_id: i64,
        review_id: i64,
        payload: &ReviewPayload,
    ) -> Result<Review, String> {
        Self::execute(
            self.request(Method::PUT, &format!("/users/{user_id}/reviews/{review_id}"))
                .json(payload),
        )
        .await
    }

    /// Deletes a review.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn delete_review(&self, user_id: i64, review_id: i64) -> Result<(), String> {
        Self::execute_empty(
            self.request(Method::DELETE, &format!("/users/{user_id}/reviews/{review_id}")),
        )
        .await
    }

    // --- Reports ---

    /// Lists all reports.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn list_reports(&self) -> Result<Vec<Report>, String> {
        Self::execute(self.request(Method::GET, "/reports")).await
    }

    /// Fetches a single report by id.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn get_report(&self, report_id: i64) -> Result<Report, String> {
        Self::execute(self.request(Method::GET, &format!("/reports/{report_id}"))).await
    }

    /// Files a report.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a backend error envelope.
    pub async fn create_report(&self, payload: &ReportPayload) -> Result<Report, String> {
        Self::execute(self.request(Method::POST, "/reports").json(payload)).await
    }
}
