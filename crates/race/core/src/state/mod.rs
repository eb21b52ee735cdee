//! Per-competitor race state.
//!
//! The reducer owns a [`RaceOutcome`] while folding the event stream and
//! hands it to the report builder once the stream is exhausted.
mod competitor;

use std::collections::BTreeMap;

pub use competitor::{Competitor, CompetitorStatus};

use crate::event::CompetitorId;

/// Final state of every competitor seen in the event stream, keyed by id.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaceOutcome {
    pub competitors: BTreeMap<CompetitorId, Competitor>,
}

impl RaceOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: CompetitorId) -> Option<&Competitor> {
        self.competitors.get(&id)
    }

    /// Returns the competitor, creating it on first reference.
    pub fn entry(&mut self, id: CompetitorId) -> &mut Competitor {
        self.competitors
            .entry(id)
            .or_insert_with(|| Competitor::new(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Competitor> {
        self.competitors.values()
    }

    pub fn len(&self) -> usize {
        self.competitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }
}

impl FromIterator<Competitor> for RaceOutcome {
    fn from_iter<I: IntoIterator<Item = Competitor>>(iter: I) -> Self {
        Self {
            competitors: iter.into_iter().map(|c| (c.id, c)).collect(),
        }
    }
}
