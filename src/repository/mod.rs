use std::{collections::HashMap, sync::Arc};

mod models;
pub use models::*;
use tracing::debug;

use crate::{
    allocator::Allocator,
    roll::{self, Roll},
    shared,
};

type NameToIndex = HashMap<Arc<str>, usize>;
type NameToIndexes = HashMap<Arc<str>, Box<[u32]>>;

#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub ballots: Box<[Ballot]>,
    pub towns: Box<[Town]>,

    town_lookup: Arc<NameToIndex>,
    town_to_ballots: Arc<NameToIndexes>,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    /// Streams a roll into the repository. Towns are created in first-sight
    /// order, which is also the tie-break order of the ranking.
    pub fn load_roll(mut self, roll: Roll) -> Result<Self, roll::Error> {
        let mut ballots: Vec<Ballot> = Vec::new();
        let mut towns: Vec<Town> = Vec::new();
        let mut town_lookup: NameToIndex = HashMap::new();
        let mut town_to_ballots: HashMap<Arc<str>, Vec<u32>> = HashMap::new();

        roll.stream_ballots(|(i, record)| {
            let mut value: Ballot = record.into();
            value.index = i as u32;

            let town_idx = match town_lookup.get(&value.town) {
                Some(town_idx) => *town_idx,
                None => {
                    let town_idx = towns.len();
                    towns.push(Town {
                        index: town_idx as u32,
                        name: value.town.clone(),
                        normalized_name: value.town.to_lowercase().into(),
                        registered_voters: 0,
                    });
                    town_lookup.insert(value.town.clone(), town_idx);
                    town_idx
                }
            };
            value.town_idx = town_idx as u32;
            towns[town_idx].registered_voters += u64::from(value.registered_voters);
            town_to_ballots
                .entry(value.town.clone())
                .or_default()
                .push(value.index);
            ballots.push(value);
        })?;

        debug!("Loaded {} ballots across {} towns", ballots.len(), towns.len());

        self.ballots = ballots.into();
        self.towns = towns.into();
        self.town_lookup = town_lookup.into();
        let town_to_ballots: NameToIndexes = town_to_ballots
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();
        self.town_to_ballots = town_to_ballots.into();
        Ok(self)
    }

    /// Get a town with the given name.
    /// If no town is found with the given name None is returned.
    pub fn town_by_name(&self, name: &str) -> Option<&Town> {
        let town_index = self.town_lookup.get(normalize_town_name(name).as_str())?;
        Some(&self.towns[*town_index])
    }

    /// Returns the indices of every ballot in a town, in row order.
    pub fn ballot_indices_by_town(&self, name: &str) -> Option<&[u32]> {
        let indices = self.town_to_ballots.get(name)?;
        Some(indices)
    }

    /// Returns all the ballots in a town with the given name.
    /// If there is no town with the given name None is returned.
    pub fn ballots_by_town(&self, name: &str) -> Option<Vec<&Ballot>> {
        let indices = self.ballot_indices_by_town(&normalize_town_name(name))?;
        Some(
            indices
                .iter()
                .map(|index| &self.ballots[*index as usize])
                .collect(),
        )
    }

    /// Total registered voters across the whole roll.
    pub fn registered_voters(&self) -> u64 {
        self.towns.iter().map(|town| town.registered_voters).sum()
    }

    /// Towns sorted descending by summed registered voters. The sort is
    /// stable, towns with equal sums keep their first-sight order.
    pub fn towns_by_registered_voters(&self) -> Vec<&Town> {
        let mut towns: Vec<&Town> = self.towns.iter().collect();
        towns.sort_by(|a, b| b.registered_voters.cmp(&a.registered_voters));
        towns
    }

    /// Does a fuzzy search on all the towns, comparing their name to the needle.
    pub fn search_towns_by_name<'a>(&'a self, needle: &'a str) -> Vec<&'a Town> {
        shared::search(needle, &self.towns)
    }

    /// Does a fuzzy search on all the ballots, comparing their polling
    /// address to the needle.
    pub fn search_ballots_by_address<'a>(&'a self, needle: &'a str) -> Vec<&'a Ballot> {
        shared::search(needle, &self.ballots)
    }

    pub fn allocator(&'_ self, seats: u32) -> Allocator<'_> {
        Allocator::new(self, seats)
    }
}
