use std::sync::{Mutex, MutexGuard};

use shared::{Candidate, CandidateTally, Ledger, LedgerError, TallyEntry, Vote};
use thiserror::Error;
use tracing::error;

/// Process-wide election state. Candidates and votes share one lock so the
/// existence check in `cast_vote` and the append happen atomically, and a
/// tally always sees a consistent pair of sequences.
#[derive(Debug, Default)]
pub struct ElectionStore {
    ledger: Mutex<Ledger>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Election store lock poisoned")]
    LockPoisoned,
}

impl ElectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ledger(&self) -> Result<MutexGuard<'_, Ledger>, StoreError> {
        self.ledger.lock().map_err(|e| {
            error!("Failed to acquire election store lock: {}", e);
            StoreError::LockPoisoned
        })
    }

    pub fn register_candidate(&self, candidate: Candidate) -> Result<Candidate, StoreError> {
        Ok(self.ledger()?.register_candidate(candidate).clone())
    }

    pub fn candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        Ok(self.ledger()?.candidates()?.to_vec())
    }

    /// Returns the candidate the vote was counted for.
    pub fn cast_vote(&self, vote: Vote) -> Result<Candidate, StoreError> {
        Ok(self.ledger()?.cast_vote(vote)?.clone())
    }

    pub fn results(&self) -> Result<Vec<TallyEntry>, StoreError> {
        Ok(self.ledger()?.results()?)
    }

    pub fn results_by_candidate(&self) -> Result<Vec<CandidateTally>, StoreError> {
        Ok(self.ledger()?.results_by_candidate()?)
    }

    pub fn counts(&self) -> Result<(usize, usize), StoreError> {
        let ledger = self.ledger()?;
        Ok((ledger.candidate_count(), ledger.vote_count()))
    }
}
