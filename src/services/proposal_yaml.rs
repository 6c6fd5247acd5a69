use std::io::{self, Write};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::proposal::{Event, Location, Proposal};
use crate::domain::service::{
    InvalidServiceConfiguration, PricingTerms, ServiceConfiguration, ServiceKind,
};
use crate::services::aggregation::TBD_DATE;

#[derive(Error, Debug)]
pub enum ProposalYamlError {
    #[error("failed to read proposal yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse proposal yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("proposal is missing a client name")]
    MissingClientName,
    #[error("proposal has no locations")]
    NoLocations,
    #[error("location is missing a name")]
    MissingLocationName,
    #[error("invalid date format: {0}")]
    InvalidDate(String),
    #[error("invalid service configuration: {0}")]
    Service(#[from] InvalidServiceConfiguration),
}

#[derive(Serialize, Deserialize)]
struct ProposalRecord {
    client_name: String,
    locations: Vec<LocationRecord>,
}

#[derive(Serialize, Deserialize)]
struct LocationRecord {
    name: String,
    events: Vec<EventRecord>,
}

#[derive(Serialize, Deserialize)]
struct EventRecord {
    /// `YYYY-MM-DD`, or the literal `TBD`. A missing date also means TBD.
    date: Option<String>,
    services: Vec<ServiceRecord>,
}

#[derive(Serialize, Deserialize)]
struct ServiceRecord {
    service: ServiceKind,
    total_hours: Decimal,
    appointment_minutes: u32,
    professional_count: u32,
    professional_hourly_rate: Decimal,
    discount_percent: Option<Decimal>,
    terms: PricingTerms,
}

pub fn load_proposal_from_yaml_file(path: &str) -> Result<Proposal, ProposalYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_proposal_from_yaml_str(&contents)
}

pub fn deserialize_proposal_from_yaml_str(input: &str) -> Result<Proposal, ProposalYamlError> {
    let record: ProposalRecord = serde_yaml::from_str(input)?;
    if record.client_name.trim().is_empty() {
        return Err(ProposalYamlError::MissingClientName);
    }
    if record.locations.is_empty() {
        return Err(ProposalYamlError::NoLocations);
    }

    let mut locations = Vec::with_capacity(record.locations.len());
    for location_record in record.locations {
        if location_record.name.trim().is_empty() {
            return Err(ProposalYamlError::MissingLocationName);
        }
        let mut events = Vec::with_capacity(location_record.events.len());
        for event_record in location_record.events {
            let mut services = Vec::with_capacity(event_record.services.len());
            for service_record in event_record.services {
                let service = service_from_record(service_record);
                service.validate()?;
                services.push(service);
            }
            events.push(Event {
                date: parse_date_opt(event_record.date.as_deref())?,
                services,
            });
        }
        locations.push(Location {
            name: location_record.name,
            events,
        });
    }

    Ok(Proposal {
        client_name: record.client_name,
        locations,
    })
}

pub fn serialize_proposal_to_yaml<W: Write>(
    writer: &mut W,
    proposal: &Proposal,
) -> io::Result<()> {
    let record = ProposalRecord {
        client_name: proposal.client_name.clone(),
        locations: proposal
            .locations
            .iter()
            .map(|location| LocationRecord {
                name: location.name.clone(),
                events: location.events.iter().map(event_to_record).collect(),
            })
            .collect(),
    };

    let yaml = serde_yaml::to_string(&record).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

fn service_from_record(record: ServiceRecord) -> ServiceConfiguration {
    ServiceConfiguration {
        kind: record.service,
        total_hours: record.total_hours,
        appointment_minutes: record.appointment_minutes,
        professional_count: record.professional_count,
        professional_hourly_rate: record.professional_hourly_rate,
        discount_percent: record.discount_percent.unwrap_or(Decimal::ZERO),
        terms: record.terms,
    }
}

fn event_to_record(event: &Event) -> EventRecord {
    EventRecord {
        date: Some(
            event
                .date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| TBD_DATE.to_string()),
        ),
        services: event
            .services
            .iter()
            .map(|service| ServiceRecord {
                service: service.kind,
                total_hours: service.total_hours,
                appointment_minutes: service.appointment_minutes,
                professional_count: service.professional_count,
                professional_hourly_rate: service.professional_hourly_rate,
                discount_percent: Some(service.discount_percent),
                terms: service.terms.clone(),
            })
            .collect(),
    }
}

fn parse_date_opt(value: Option<&str>) -> Result<Option<NaiveDate>, ProposalYamlError> {
    match value {
        None => Ok(None),
        Some(text) if text == TBD_DATE => Ok(None),
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ProposalYamlError::InvalidDate(text.to_string())),
    }
}
