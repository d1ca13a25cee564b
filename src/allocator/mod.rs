mod assignment;
mod state;

pub use assignment::*;
use state::{Direction, Seat};

use crate::{repository::Repository, shared::geo::Coordinate};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Target seat count must be at least one")]
    NoSeats,
    #[error("Voter roll has no ballots")]
    EmptyRoll,
    #[error("Voter roll has no registered voters, quota is undefined")]
    NoRegisteredVoters,
    #[error("No unassigned ballot reachable while seat {0} is under quota")]
    Starved(u32),
}

/// Grows seats one at a time over the ranked towns: seed at a geographic
/// extreme, accrete the nearest unassigned ballot until the quota is met,
/// overflow across the town line once the town runs dry. Strictly
/// sequential, the partition is a function of visit order.
pub struct Allocator<'a> {
    repository: &'a Repository,
    seats: u32,
}

impl<'a> Allocator<'a> {
    pub fn new(repository: &'a Repository, seats: u32) -> Self {
        Self { repository, seats }
    }

    /// Registered voters a single seat should hold. No rounding, a seat
    /// stops growing on the first sum that reaches this.
    pub fn quota(&self) -> Result<f64, self::Error> {
        if self.seats == 0 {
            return Err(self::Error::NoSeats);
        }
        if self.repository.ballots.is_empty() {
            return Err(self::Error::EmptyRoll);
        }
        let registered_voters = self.repository.registered_voters();
        if registered_voters == 0 {
            return Err(self::Error::NoRegisteredVoters);
        }
        Ok(registered_voters as f64 / f64::from(self.seats))
    }

    pub fn solve(self) -> Result<Assignment, self::Error> {
        let quota = self.quota()?;
        let repository = self.repository;
        debug!(
            "Growing seats toward a quota of {quota} registered voters, target {}",
            self.seats
        );

        let mut labels: Vec<Option<u32>> = vec![None; repository.ballots.len()];
        let mut districts: Vec<District> = Vec::with_capacity(self.seats as usize);
        let mut seat = Seat::new(0);

        for town in repository.towns_by_registered_voters() {
            let Some(town_ballots) = repository.ballot_indices_by_town(&town.name) else {
                continue;
            };
            let mut seed_counter: u32 = 0;

            while town_ballots
                .iter()
                .any(|idx| labels[*idx as usize].is_none())
            {
                if seat.registered_voters == 0 {
                    let direction = Direction::from_counter(seed_counter);
                    let Some(seed) = extremal_ballot(repository, town_ballots, &labels, direction)
                    else {
                        // Guarded by the loop condition.
                        break;
                    };
                    labels[seed as usize] = Some(seat.index);
                    seat.absorb(seed, repository);
                    seed_counter += 1;
                    debug!("Seat {} seeded {:?} in {}", seat.index, direction, town.name);
                }

                while (seat.registered_voters as f64) < quota {
                    let Some(centroid) = seat.centroid else {
                        break;
                    };
                    let next = nearest_ballot(
                        repository,
                        &labels,
                        &centroid,
                        town_ballots.iter().copied(),
                    )
                    .or_else(|| {
                        // The town ran dry below quota, overflow into the
                        // nearest unassigned ballot nationwide.
                        nearest_ballot(
                            repository,
                            &labels,
                            &centroid,
                            0..repository.ballots.len() as u32,
                        )
                    });
                    match next {
                        Some(ballot_idx) => {
                            labels[ballot_idx as usize] = Some(seat.index);
                            seat.absorb(ballot_idx, repository);
                        }
                        None => {
                            if labels.iter().any(|label| label.is_none()) {
                                return Err(self::Error::Starved(seat.index));
                            }
                            // Roll exhausted, the final seat stays open
                            // below quota.
                            break;
                        }
                    }
                }

                if (seat.registered_voters as f64) >= quota {
                    let index = seat.index;
                    if let Some(district) = seat.close() {
                        debug!(
                            "Seat {} closed with {} registered voters over {} ballots",
                            district.index,
                            district.registered_voters,
                            district.ballots.len()
                        );
                        districts.push(district);
                    }
                    seat = Seat::new(index + 1);
                }
            }
        }

        // A final under-quota seat is still a produced district.
        if let Some(district) = seat.close() {
            debug!(
                "Seat {} left open with {} registered voters over {} ballots",
                district.index,
                district.registered_voters,
                district.ballots.len()
            );
            districts.push(district);
        }

        let labels: Box<[u32]> = labels.into_iter().flatten().collect();
        debug_assert_eq!(labels.len(), repository.ballots.len());
        Ok(Assignment::new(labels, districts.into(), quota, self.seats))
    }
}

/// The unassigned ballot sitting at a town's geographic extreme. Ties keep
/// the earliest row.
fn extremal_ballot(
    repository: &Repository,
    candidates: &[u32],
    labels: &[Option<u32>],
    direction: Direction,
) -> Option<u32> {
    let mut best: Option<(u32, f64)> = None;
    for idx in candidates.iter().copied() {
        if labels[idx as usize].is_some() {
            continue;
        }
        let coordinate = repository.ballots[idx as usize].coordinate;
        let key = match direction {
            Direction::East => coordinate.longitude,
            Direction::West => -coordinate.longitude,
            Direction::North => coordinate.latitude,
            Direction::South => -coordinate.latitude,
        };
        let replace = match best {
            None => true,
            Some((_, best_key)) => key > best_key,
        };
        if replace {
            best = Some((idx, key));
        }
    }
    best.map(|(idx, _)| idx)
}

/// The unassigned candidate closest to the centroid by squared flat-plane
/// distance. Ties keep the earliest row.
fn nearest_ballot<I>(
    repository: &Repository,
    labels: &[Option<u32>],
    centroid: &Coordinate,
    candidates: I,
) -> Option<u32>
where
    I: IntoIterator<Item = u32>,
{
    let mut best: Option<(u32, f64)> = None;
    for idx in candidates {
        if labels[idx as usize].is_some() {
            continue;
        }
        let distance = repository.ballots[idx as usize]
            .coordinate
            .planar_distance_sq(centroid);
        let replace = match best {
            None => true,
            Some((_, best_distance)) => distance < best_distance,
        };
        if replace {
            best = Some((idx, distance));
        }
    }
    best.map(|(idx, _)| idx)
}
