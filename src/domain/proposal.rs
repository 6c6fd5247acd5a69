use chrono::NaiveDate;

use crate::domain::service::ServiceConfiguration;

/// A set of services delivered at one location on one date. `date` is
/// `None` while the date is still to be determined ("TBD").
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub date: Option<NaiveDate>,
    pub services: Vec<ServiceConfiguration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub events: Vec<Event>,
}

/// One proposal-building session: a client and the locations being
/// priced for them. Held only for the duration of a calculation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Proposal {
    pub client_name: String,
    pub locations: Vec<Location>,
}
