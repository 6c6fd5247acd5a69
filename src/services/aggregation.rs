use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::proposal::Proposal;
use crate::domain::service::ServiceResult;
use crate::services::pricing::compute_service_result;

/// Bucket key for events whose date is still unknown.
pub const TBD_DATE: &str = "TBD";

/// Running totals at any level of the breakdown. Every total is always
/// the sum of its children; see [`recompute_totals`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Totals {
    pub appointments: u64,
    pub cost: Decimal,
    pub professional_revenue: Decimal,
}

impl Totals {
    fn add_result(&mut self, result: &ServiceResult) {
        self.appointments += result.appointment_count;
        self.cost += result.service_cost;
        self.professional_revenue += result.professional_revenue;
    }
}

/// One priced service within a date bucket.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceLine {
    pub service: String,
    pub result: ServiceResult,
}

/// All services for one location on one date (or [`TBD_DATE`]).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DateBreakdown {
    pub date: String,
    pub totals: Totals,
    pub services: Vec<ServiceLine>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LocationBreakdown {
    pub location: String,
    pub totals: Totals,
    pub dates: Vec<DateBreakdown>,
}

/// The full derived output of a pricing run: grand totals plus the
/// location -> date -> service breakdown. Never the source of truth;
/// recomputed from the proposal whenever requested.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub client_name: String,
    pub totals: Totals,
    pub net_profit: Decimal,
    pub profit_margin: Decimal,
    pub locations: Vec<LocationBreakdown>,
}

/// Folds every service of every event into per-date, per-location and
/// grand totals. Locations keep input order; date buckets within a
/// location keep first-seen order, with events sharing a date merged
/// into one bucket.
pub fn aggregate(proposal: &Proposal) -> CalculationResult {
    let mut locations = Vec::with_capacity(proposal.locations.len());

    for location in &proposal.locations {
        let mut dates: Vec<DateBreakdown> = Vec::new();
        for event in &location.events {
            let date_key = event
                .date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| TBD_DATE.to_string());
            let bucket_index = match dates.iter().position(|bucket| bucket.date == date_key) {
                Some(index) => index,
                None => {
                    dates.push(DateBreakdown {
                        date: date_key,
                        totals: Totals::default(),
                        services: Vec::new(),
                    });
                    dates.len() - 1
                }
            };
            let bucket = &mut dates[bucket_index];
            for service in &event.services {
                let result = compute_service_result(service);
                bucket.totals.add_result(&result);
                bucket.services.push(ServiceLine {
                    service: service.kind.label().to_string(),
                    result,
                });
            }
        }

        locations.push(LocationBreakdown {
            location: location.name.clone(),
            totals: Totals::default(),
            dates,
        });
    }

    let mut result = CalculationResult {
        client_name: proposal.client_name.clone(),
        totals: Totals::default(),
        net_profit: Decimal::ZERO,
        profit_margin: Decimal::ZERO,
        locations,
    };
    recompute_totals(&mut result);
    result
}

/// Re-derives every total in the breakdown by summation, bottom-up:
/// date buckets from their service lines, locations from their dates,
/// grand totals from the locations. Totals are never decremented in
/// place, so repeated edits cannot drift.
pub fn recompute_totals(result: &mut CalculationResult) {
    for location in &mut result.locations {
        for bucket in &mut location.dates {
            let mut totals = Totals::default();
            for line in &bucket.services {
                totals.add_result(&line.result);
            }
            bucket.totals = totals;
        }
        location.totals = sum_date_totals(&location.dates);
    }

    let mut grand = Totals::default();
    for location in &result.locations {
        grand.appointments += location.totals.appointments;
        grand.cost += location.totals.cost;
        grand.professional_revenue += location.totals.professional_revenue;
    }
    result.net_profit = grand.cost - grand.professional_revenue;
    result.profit_margin = if grand.cost.is_zero() {
        Decimal::ZERO
    } else {
        result.net_profit / grand.cost * Decimal::ONE_HUNDRED
    };
    result.totals = grand;
}

fn sum_date_totals(dates: &[DateBreakdown]) -> Totals {
    let mut totals = Totals::default();
    for bucket in dates {
        totals.appointments += bucket.totals.appointments;
        totals.cost += bucket.totals.cost;
        totals.professional_revenue += bucket.totals.professional_revenue;
    }
    totals
}
