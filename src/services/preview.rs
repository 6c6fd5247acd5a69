use thiserror::Error;

use crate::services::aggregation::{CalculationResult, recompute_totals};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PreviewError {
    #[error("location not found in report: {0}")]
    LocationNotFound(String),
    #[error("date {date} not found for location {location}")]
    DateNotFound { location: String, date: String },
    #[error("service index {index} out of range for {location} on {date}")]
    ServiceIndexOutOfRange {
        location: String,
        date: String,
        index: usize,
    },
}

/// Returns a copy of the report with one service line removed and every
/// dependent total re-derived by summation. A date bucket emptied by the
/// removal is dropped, as is a location left without dates.
pub fn remove_service(
    result: &CalculationResult,
    location: &str,
    date: &str,
    service_index: usize,
) -> Result<CalculationResult, PreviewError> {
    let (location_index, date_index) = find_bucket(result, location, date)?;
    let mut updated = result.clone();
    let bucket = &mut updated.locations[location_index].dates[date_index];
    if service_index >= bucket.services.len() {
        return Err(PreviewError::ServiceIndexOutOfRange {
            location: location.to_string(),
            date: date.to_string(),
            index: service_index,
        });
    }
    bucket.services.remove(service_index);
    prune_and_recompute(&mut updated, location_index);
    Ok(updated)
}

/// Returns a copy of the report with one whole date bucket removed and
/// every dependent total re-derived by summation.
pub fn remove_date(
    result: &CalculationResult,
    location: &str,
    date: &str,
) -> Result<CalculationResult, PreviewError> {
    let (location_index, date_index) = find_bucket(result, location, date)?;
    let mut updated = result.clone();
    updated.locations[location_index].dates.remove(date_index);
    prune_and_recompute(&mut updated, location_index);
    Ok(updated)
}

fn find_bucket(
    result: &CalculationResult,
    location: &str,
    date: &str,
) -> Result<(usize, usize), PreviewError> {
    let location_index = result
        .locations
        .iter()
        .position(|entry| entry.location == location)
        .ok_or_else(|| PreviewError::LocationNotFound(location.to_string()))?;
    let date_index = result.locations[location_index]
        .dates
        .iter()
        .position(|bucket| bucket.date == date)
        .ok_or_else(|| PreviewError::DateNotFound {
            location: location.to_string(),
            date: date.to_string(),
        })?;
    Ok((location_index, date_index))
}

fn prune_and_recompute(result: &mut CalculationResult, location_index: usize) {
    result.locations[location_index]
        .dates
        .retain(|bucket| !bucket.services.is_empty());
    if result.locations[location_index].dates.is_empty() {
        result.locations.remove(location_index);
    }
    recompute_totals(result);
}
