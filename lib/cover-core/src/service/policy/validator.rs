use time::macros::format_description;
use time::{Date, OffsetDateTime};

use super::dto::CreatePolicyRequestDTO;
use crate::service::error::ValidationError;

/// Checks the purchase form input before any ledger call and returns the
/// parsed departure date.
pub(crate) fn validate_create_request(
    request: &CreatePolicyRequestDTO,
    now: OffsetDateTime,
) -> Result<Date, ValidationError> {
    if request.airline.trim().is_empty() {
        return Err(ValidationError::AirlineMissing);
    }

    if request.flight_number.trim().is_empty() {
        return Err(ValidationError::FlightNumberMissing);
    }

    let departure_date = Date::parse(
        &request.departure_date,
        format_description!("[year]-[month]-[day]"),
    )
    .map_err(|_| ValidationError::DepartureDateInvalid(request.departure_date.clone()))?;

    if departure_date < now.date() {
        return Err(ValidationError::DepartureDateInPast(departure_date));
    }

    Ok(departure_date)
}
