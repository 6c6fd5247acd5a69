use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every bookable service offering. The YAML spelling is the kebab-case
/// form of the variant name (e.g. `hair-makeup`, `mindfulness-soles`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    Massage,
    Facial,
    Hair,
    Nails,
    Makeup,
    HairMakeup,
    Headshot,
    HeadshotHairMakeup,
    Mindfulness,
    MindfulnessSoles,
    MindfulnessMovement,
    MindfulnessPro,
    MindfulnessCle,
    MindfulnessProReactivity,
}

/// The three pricing formulas. Every `ServiceKind` maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingCategory {
    Hourly,
    Headshot,
    FixedPrice,
}

impl ServiceKind {
    pub fn pricing_category(&self) -> PricingCategory {
        match self {
            ServiceKind::Headshot => PricingCategory::Headshot,
            ServiceKind::Mindfulness
            | ServiceKind::MindfulnessSoles
            | ServiceKind::MindfulnessMovement
            | ServiceKind::MindfulnessPro
            | ServiceKind::MindfulnessCle
            | ServiceKind::MindfulnessProReactivity => PricingCategory::FixedPrice,
            _ => PricingCategory::Hourly,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Massage => "massage",
            ServiceKind::Facial => "facial",
            ServiceKind::Hair => "hair",
            ServiceKind::Nails => "nails",
            ServiceKind::Makeup => "makeup",
            ServiceKind::HairMakeup => "hair-makeup",
            ServiceKind::Headshot => "headshot",
            ServiceKind::HeadshotHairMakeup => "headshot-hair-makeup",
            ServiceKind::Mindfulness => "mindfulness",
            ServiceKind::MindfulnessSoles => "mindfulness-soles",
            ServiceKind::MindfulnessMovement => "mindfulness-movement",
            ServiceKind::MindfulnessPro => "mindfulness-pro",
            ServiceKind::MindfulnessCle => "mindfulness-cle",
            ServiceKind::MindfulnessProReactivity => "mindfulness-pro-reactivity",
        }
    }
}

/// Category-specific pricing inputs. A tagged variant per category keeps a
/// service from carrying stale fields that belong to another category.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PricingTerms {
    Hourly {
        client_hourly_rate: Decimal,
        early_arrival_fee: Decimal,
    },
    Headshot {
        retouching_cost_per_photo: Decimal,
    },
    FixedPrice {
        /// Plain mindfulness may omit this and fall back to the default
        /// workshop price; every other mindfulness variant carries the
        /// price from its preset.
        fixed_price: Option<Decimal>,
    },
}

impl PricingTerms {
    pub fn category(&self) -> PricingCategory {
        match self {
            PricingTerms::Hourly { .. } => PricingCategory::Hourly,
            PricingTerms::Headshot { .. } => PricingCategory::Headshot,
            PricingTerms::FixedPrice { .. } => PricingCategory::FixedPrice,
        }
    }
}

/// One configured service within an event. Built from the proposal YAML
/// and assumed valid by the pricing rule; see [`ServiceConfiguration::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfiguration {
    pub kind: ServiceKind,
    pub total_hours: Decimal,
    pub appointment_minutes: u32,
    pub professional_count: u32,
    pub professional_hourly_rate: Decimal,
    pub discount_percent: Decimal,
    pub terms: PricingTerms,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvalidServiceConfiguration {
    #[error("appointment_minutes must be greater than zero for {0}")]
    ZeroAppointmentMinutes(String),
    #[error("professional_count must be at least 1 for {0}")]
    ZeroProfessionals(String),
    #[error("pricing terms do not match the {0} pricing category")]
    MismatchedTerms(String),
    #[error("discount_percent must be between 0 and 100 for {0}")]
    DiscountOutOfRange(String),
    #[error("negative amount in {0} configuration")]
    NegativeAmount(String),
    #[error("{0} requires an explicit fixed_price")]
    MissingFixedPrice(String),
}

impl ServiceConfiguration {
    pub fn validate(&self) -> Result<(), InvalidServiceConfiguration> {
        let label = self.kind.label().to_string();
        if self.appointment_minutes == 0 {
            return Err(InvalidServiceConfiguration::ZeroAppointmentMinutes(label));
        }
        if self.professional_count == 0 {
            return Err(InvalidServiceConfiguration::ZeroProfessionals(label));
        }
        if self.terms.category() != self.kind.pricing_category() {
            return Err(InvalidServiceConfiguration::MismatchedTerms(label));
        }
        if self.discount_percent < Decimal::ZERO
            || self.discount_percent > Decimal::ONE_HUNDRED
        {
            return Err(InvalidServiceConfiguration::DiscountOutOfRange(label));
        }
        if self.total_hours < Decimal::ZERO || self.professional_hourly_rate < Decimal::ZERO {
            return Err(InvalidServiceConfiguration::NegativeAmount(label));
        }
        match &self.terms {
            PricingTerms::Hourly {
                client_hourly_rate,
                early_arrival_fee,
            } => {
                if *client_hourly_rate < Decimal::ZERO || *early_arrival_fee < Decimal::ZERO {
                    return Err(InvalidServiceConfiguration::NegativeAmount(label));
                }
            }
            PricingTerms::Headshot {
                retouching_cost_per_photo,
            } => {
                if *retouching_cost_per_photo < Decimal::ZERO {
                    return Err(InvalidServiceConfiguration::NegativeAmount(label));
                }
            }
            PricingTerms::FixedPrice { fixed_price } => {
                if fixed_price.is_none() && self.kind != ServiceKind::Mindfulness {
                    return Err(InvalidServiceConfiguration::MissingFixedPrice(label));
                }
                if fixed_price.is_some_and(|price| price < Decimal::ZERO) {
                    return Err(InvalidServiceConfiguration::NegativeAmount(label));
                }
            }
        }
        Ok(())
    }
}

/// Derived per-service output. Never persisted; recomputed on every read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceResult {
    pub appointment_count: u64,
    pub service_cost: Decimal,
    pub professional_revenue: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{build_headshot_service, build_hourly_service};
    use rust_decimal_macros::dec;

    #[test]
    fn every_kind_maps_to_one_category() {
        assert_eq!(
            ServiceKind::Massage.pricing_category(),
            PricingCategory::Hourly
        );
        assert_eq!(
            ServiceKind::HeadshotHairMakeup.pricing_category(),
            PricingCategory::Hourly
        );
        assert_eq!(
            ServiceKind::Headshot.pricing_category(),
            PricingCategory::Headshot
        );
        assert_eq!(
            ServiceKind::MindfulnessProReactivity.pricing_category(),
            PricingCategory::FixedPrice
        );
    }

    #[test]
    fn validate_rejects_zero_appointment_minutes() {
        let mut service = build_hourly_service(ServiceKind::Massage);
        service.appointment_minutes = 0;
        assert_eq!(
            service.validate(),
            Err(InvalidServiceConfiguration::ZeroAppointmentMinutes(
                "massage".to_string()
            ))
        );
    }

    #[test]
    fn validate_rejects_mismatched_terms() {
        let mut service = build_hourly_service(ServiceKind::Massage);
        service.terms = PricingTerms::Headshot {
            retouching_cost_per_photo: dec!(40),
        };
        assert_eq!(
            service.validate(),
            Err(InvalidServiceConfiguration::MismatchedTerms(
                "massage".to_string()
            ))
        );
    }

    #[test]
    fn validate_rejects_discount_above_one_hundred() {
        let mut service = build_hourly_service(ServiceKind::Facial);
        service.discount_percent = dec!(120);
        assert_eq!(
            service.validate(),
            Err(InvalidServiceConfiguration::DiscountOutOfRange(
                "facial".to_string()
            ))
        );
    }

    #[test]
    fn validate_requires_fixed_price_for_mindfulness_variants() {
        let service = ServiceConfiguration {
            kind: ServiceKind::MindfulnessSoles,
            total_hours: dec!(1),
            appointment_minutes: 60,
            professional_count: 1,
            professional_hourly_rate: Decimal::ZERO,
            discount_percent: Decimal::ZERO,
            terms: PricingTerms::FixedPrice { fixed_price: None },
        };
        assert_eq!(
            service.validate(),
            Err(InvalidServiceConfiguration::MissingFixedPrice(
                "mindfulness-soles".to_string()
            ))
        );
    }

    #[test]
    fn validate_accepts_plain_mindfulness_without_fixed_price() {
        let service = ServiceConfiguration {
            kind: ServiceKind::Mindfulness,
            total_hours: dec!(1),
            appointment_minutes: 60,
            professional_count: 1,
            professional_hourly_rate: Decimal::ZERO,
            discount_percent: Decimal::ZERO,
            terms: PricingTerms::FixedPrice { fixed_price: None },
        };
        assert!(service.validate().is_ok());
        assert!(build_headshot_service().validate().is_ok());
    }
}
