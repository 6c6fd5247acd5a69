use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::proposal::{Event, Location, Proposal};
use crate::domain::service::{PricingTerms, ServiceConfiguration, ServiceKind};

/// An hourly service matching the standard worked example: 4 hours,
/// 20-minute slots, 2 professionals at $50/h, client rate $135/h,
/// $25 early arrival per professional.
pub fn build_hourly_service(kind: ServiceKind) -> ServiceConfiguration {
    ServiceConfiguration {
        kind,
        total_hours: dec!(4),
        appointment_minutes: 20,
        professional_count: 2,
        professional_hourly_rate: dec!(50),
        discount_percent: Decimal::ZERO,
        terms: PricingTerms::Hourly {
            client_hourly_rate: dec!(135),
            early_arrival_fee: dec!(25),
        },
    }
}

/// A headshot session: 5 hours, 12-minute slots, one photographer at
/// $400/h, $40 retouching per photo.
pub fn build_headshot_service() -> ServiceConfiguration {
    ServiceConfiguration {
        kind: ServiceKind::Headshot,
        total_hours: dec!(5),
        appointment_minutes: 12,
        professional_count: 1,
        professional_hourly_rate: dec!(400),
        discount_percent: Decimal::ZERO,
        terms: PricingTerms::Headshot {
            retouching_cost_per_photo: dec!(40),
        },
    }
}

/// A one-hour mindfulness workshop with the given fixed price (or the
/// default workshop price when `None`).
pub fn build_mindfulness_service(fixed_price: Option<Decimal>) -> ServiceConfiguration {
    ServiceConfiguration {
        kind: ServiceKind::Mindfulness,
        total_hours: dec!(1),
        appointment_minutes: 60,
        professional_count: 1,
        professional_hourly_rate: Decimal::ZERO,
        discount_percent: Decimal::ZERO,
        terms: PricingTerms::FixedPrice { fixed_price },
    }
}

pub fn build_proposal_event(
    date: Option<NaiveDate>,
    services: Vec<ServiceConfiguration>,
) -> Event {
    Event { date, services }
}

pub fn build_proposal(locations: Vec<(&str, Vec<Event>)>) -> Proposal {
    Proposal {
        client_name: "Acme Corp".to_string(),
        locations: locations
            .into_iter()
            .map(|(name, events)| Location {
                name: name.to_string(),
                events,
            })
            .collect(),
    }
}
