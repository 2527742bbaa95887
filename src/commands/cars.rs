//! `hopshare cars` commands, scoped to the logged-in user.

use crate::auth;
use crate::cli::{CarInput, CarsAction};
use crate::commands::joined;
use crate::context::ServiceContext;
use crate::model::{Car, CarPayload};
use crate::validate;

/// Executes a `cars` action.
///
/// Every action needs the logged-in account: cars live under
/// `/users/{id}/cars`, so the handler first resolves the stored email
/// to its user id.
///
/// # Errors
///
/// Returns an error when not logged in, for invalid input, or on a
/// failed backend call.
pub async fn run(ctx: &ServiceContext, action: &CarsAction) -> Result<(), String> {
    let (client, stored) = ctx.auth_client()?;
    let owner = auth::current_user(&client, &stored.email).await?;

    match action {
        CarsAction::List => {
            let cars = client.list_cars(owner.user_id).await?;
            println!("{}", render_cars(&cars));
        }
        CarsAction::Add { input } => {
            let payload = payload_from(input)?;
            let car = client.create_car(owner.user_id, &payload).await?;
            println!("Registered car {}", car.car_id);
        }
        CarsAction::Update { id, input } => {
            let payload = payload_from(input)?;
            let car = client.update_car(owner.user_id, *id, &payload).await?;
            println!("Updated car {}", car.car_id);
        }
        CarsAction::Remove { id } => {
            client.delete_car(owner.user_id, *id).await?;
            println!("Deleted car {id}");
        }
    }
    Ok(())
}

/// Validates car input and converts it to a wire payload.
fn payload_from(input: &CarInput) -> Result<CarPayload, String> {
    validate::car(input.seats, &input.service_date, &input.make_model, &input.license_plate)
        .map_err(joined)?;
    Ok(CarPayload {
        seats: input.seats,
        service_date: input.service_date.clone(),
        make_model: input.make_model.clone(),
        license_plate: input.license_plate.clone(),
    })
}

/// Formats cars as a listing.
#[must_use]
fn render_cars(cars: &[Car]) -> String {
    if cars.is_empty() {
        return "No cars registered.".to_string();
    }
    let mut lines = Vec::new();
    for car in cars {
        lines.push(format!(
            "{:>6}  {}  [{}]  {} seats, serviced {}",
            car.car_id, car.make_model, car.license_plate, car.seats, car.service_date,
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_rejects_invalid_cars() {
        let input = CarInput {
            seats: 0,
            service_date: "2024-01-01".to_string(),
            make_model: String::new(),
            license_plate: "G-123".to_string(),
        };
        let err = payload_from(&input).unwrap_err();
        assert!(err.contains("seats"));
        assert!(err.contains("make & model"));
    }

    #[test]
    fn render_cars_lists_fields() {
        let car = Car {
            car_id: 3,
            seats: 4,
            service_date: "2024-01-01".to_string(),
            make_model: "VW Golf".to_string(),
            license_plate: "G-123".to_string(),
        };
        let output = render_cars(&[car]);
        assert!(output.contains("VW Golf"));
        assert!(output.contains("[G-123]"));
        assert!(output.contains("4 seats"));
    }

    #[test]
    fn render_cars_empty() {
        assert_eq!(render_cars(&[]), "No cars registered.");
    }
}
