use crate::{
    allocator::state::Seat,
    repository::Repository,
    shared::geo::{Coordinate, Distance},
};

/// A produced district: a closed seat, or the final seat left open below
/// quota once the roll ran out.
#[derive(Debug, Clone)]
pub struct District {
    pub index: u32,
    pub registered_voters: u64,
    pub centroid: Coordinate,
    /// Ballot indices in the order they joined the district.
    pub ballots: Box<[u32]>,
}

impl District {
    /// Mean distance from the district's ballots to its centroid. A rough
    /// compactness read, nothing more.
    pub fn spread(&self, repository: &Repository) -> Distance {
        let total: f64 = self
            .ballots
            .iter()
            .map(|idx| {
                repository.ballots[*idx as usize]
                    .coordinate
                    .euclidean_distance(&self.centroid)
                    .as_meters()
            })
            .sum();
        Distance::from_meters(total / self.ballots.len() as f64)
    }
}

impl Seat {
    /// Freezes the seat into a district. Returns None for a seat that was
    /// never seeded, which is the only way it can lack a centroid.
    pub(crate) fn close(self) -> Option<District> {
        let centroid = self.centroid?;
        Some(District {
            index: self.index,
            registered_voters: self.registered_voters,
            centroid,
            ballots: self.members.into(),
        })
    }
}

/// The full output of one allocation run: a district label per ballot plus
/// the per-district summaries and the quota they were grown against.
#[derive(Debug, Clone)]
pub struct Assignment {
    labels: Box<[u32]>,
    districts: Box<[District]>,
    quota: f64,
    target: u32,
}

impl Assignment {
    pub(crate) fn new(labels: Box<[u32]>, districts: Box<[District]>, quota: f64, target: u32) -> Self {
        Self {
            labels,
            districts,
            quota,
            target,
        }
    }

    /// Registered voters a single seat was grown toward.
    pub fn quota(&self) -> f64 {
        self.quota
    }

    /// The configured seat count. The produced count is emergent and may
    /// differ, compare against `districts().len()`.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// District label per ballot index, dense from 0.
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    pub fn district_of(&self, ballot_idx: usize) -> u32 {
        self.labels[ballot_idx]
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }
}
