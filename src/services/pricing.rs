use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use crate::domain::service::{PricingTerms, ServiceConfiguration, ServiceResult};

/// Flat fee assumed for a plain mindfulness workshop when the proposal
/// does not carry an explicit price.
pub const DEFAULT_MINDFULNESS_PRICE: Decimal = dec!(1350);

/// Share of a fixed-price fee paid out to the professional.
pub const MINDFULNESS_REVENUE_SHARE: Decimal = dec!(0.30);

const MINUTES_PER_HOUR: Decimal = dec!(60);

/// Prices one service configuration.
///
/// Pure and infallible: the caller validates the configuration first
/// (in particular `appointment_minutes > 0`, see
/// [`ServiceConfiguration::validate`]). The discount reduces the
/// client-facing cost only; professional revenue is never discounted.
pub fn compute_service_result(service: &ServiceConfiguration) -> ServiceResult {
    let professionals = Decimal::from(service.professional_count);
    let appointments_per_hour =
        MINUTES_PER_HOUR / Decimal::from(service.appointment_minutes) * professionals;
    let appointment_count = (service.total_hours * appointments_per_hour)
        .floor()
        .to_u64()
        .unwrap_or(0);

    let hourly_pay = service.total_hours * professionals * service.professional_hourly_rate;
    let (service_cost, professional_revenue) = match &service.terms {
        PricingTerms::Headshot {
            retouching_cost_per_photo,
        } => {
            let retouching = Decimal::from(appointment_count) * *retouching_cost_per_photo;
            (hourly_pay + retouching, hourly_pay)
        }
        PricingTerms::FixedPrice { fixed_price } => {
            let cost = fixed_price.unwrap_or(DEFAULT_MINDFULNESS_PRICE);
            (cost, cost * MINDFULNESS_REVENUE_SHARE)
        }
        PricingTerms::Hourly {
            client_hourly_rate,
            early_arrival_fee,
        } => {
            let cost = service.total_hours * *client_hourly_rate * professionals;
            let revenue = hourly_pay + *early_arrival_fee * professionals;
            (cost, revenue)
        }
    };

    let service_cost = if service.discount_percent > Decimal::ZERO {
        service_cost * (Decimal::ONE - service.discount_percent / Decimal::ONE_HUNDRED)
    } else {
        service_cost
    };

    ServiceResult {
        appointment_count,
        service_cost,
        professional_revenue,
    }
}
