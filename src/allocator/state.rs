use crate::{repository::Repository, shared::geo::Coordinate};

/// Which geographic extreme of a town the next seat seeds from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    East,
    West,
    North,
    South,
}

impl Direction {
    /// Rotates east -> west -> north -> south as a town's seed counter
    /// grows, so successive seats start from the town's extremes instead of
    /// piling up next to the seats already placed.
    pub fn from_counter(counter: u32) -> Self {
        match counter % 4 {
            0 => Direction::East,
            1 => Direction::West,
            2 => Direction::North,
            _ => Direction::South,
        }
    }
}

/// An open seat accumulator. Zero accumulated voters marks it unseeded.
#[derive(Debug, Default, Clone)]
pub(crate) struct Seat {
    pub index: u32,
    pub registered_voters: u64,
    pub centroid: Option<Coordinate>,
    /// Ballot indices in the order they joined the seat.
    pub members: Vec<u32>,
}

impl Seat {
    pub fn new(index: u32) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    /// Adds a ballot, then recomputes the voter sum and centroid from
    /// scratch over every member. Summation runs in join order; keep it
    /// that way, the partition is sensitive to float ordering.
    pub fn absorb(&mut self, ballot_idx: u32, repository: &Repository) {
        self.members.push(ballot_idx);
        let mut registered_voters: u64 = 0;
        let centroid: Coordinate = self
            .members
            .iter()
            .map(|idx| {
                let ballot = &repository.ballots[*idx as usize];
                registered_voters += u64::from(ballot.registered_voters);
                ballot.coordinate
            })
            .sum();
        self.registered_voters = registered_voters;
        self.centroid = Some(centroid);
    }
}
