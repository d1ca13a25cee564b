use std::sync::Arc;

use crate::{roll::RollBallot, shared::Identifiable, shared::geo::Coordinate};

/// Derived town aggregate. Registered voters are summed once at load and
/// never refreshed; the ranking order is fixed up front.
#[derive(Debug, Default, Clone)]
pub struct Town {
    pub index: u32,
    pub name: Arc<str>,
    pub normalized_name: Arc<str>,
    pub registered_voters: u64,
}

impl Identifiable for Town {
    fn id(&self) -> &str {
        &self.name
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

#[derive(Debug, Default, Clone)]
pub struct Ballot {
    pub index: u32,
    pub id: Arc<str>,
    pub town_idx: u32,
    pub town: Arc<str>,
    pub address: Arc<str>,
    pub normalized_address: Arc<str>,
    pub registered_voters: u32,
    pub coordinate: Coordinate,
}

impl Identifiable for Ballot {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.address
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_address
    }
}

impl From<RollBallot> for Ballot {
    fn from(value: RollBallot) -> Self {
        let address = value.address.unwrap_or_default();
        Self {
            index: 0,
            id: value.ballot_id.into(),
            town_idx: 0,
            town: normalize_town_name(&value.town_name).into(),
            normalized_address: address.to_lowercase().into(),
            address: address.into(),
            registered_voters: value.registered_voters,
            coordinate: Coordinate {
                latitude: value.lat.unwrap_or_default(),
                longitude: value.lng.unwrap_or_default(),
            },
        }
    }
}

/// Roll exports pad some town names with doubled spaces.
pub(crate) fn normalize_town_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}
