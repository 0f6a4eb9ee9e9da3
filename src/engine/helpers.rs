use crate::entities::DriverId;
use crate::error::{invalid_data_error, Error};

/// Present and not blank. The value is returned as sent.
pub fn required_text(value: Option<String>, field: &str) -> Result<String, Error> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(invalid_data_error(format!("the {} field is required", field))),
    }
}

/// Blank filters count as absent.
pub fn optional_driver_id(value: Option<String>) -> Result<Option<DriverId>, Error> {
    match value {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => text
            .trim()
            .parse::<DriverId>()
            .map(Some)
            .map_err(|_| invalid_data_error("the driver id filter is invalid")),
    }
}
