use std::collections::HashMap;

use crate::error::{LedgerError, Result};
use crate::models::{Candidate, CandidateId, CandidateTally, TallyEntry, Vote};

/// Candidates and votes in arrival order.
///
/// Lookups are linear scans that stop at the first candidate with a matching
/// id, so a later registration reusing an id is listed but never receives
/// votes.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    candidates: Vec<Candidate>,
    votes: Vec<Vote>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_candidate(&mut self, candidate: Candidate) -> &Candidate {
        self.candidates.push(candidate);
        &self.candidates[self.candidates.len() - 1]
    }

    pub fn candidates(&self) -> Result<&[Candidate]> {
        if self.candidates.is_empty() {
            return Err(LedgerError::NoCandidates);
        }
        Ok(&self.candidates)
    }

    pub fn find_candidate(&self, id: CandidateId) -> Option<&Candidate> {
        self.position_of(id).map(|idx| &self.candidates[idx])
    }

    fn position_of(&self, id: CandidateId) -> Option<usize> {
        self.candidates.iter().position(|c| c.id == id)
    }

    /// Records the vote if its candidate is registered. Repeat voters are accepted.
    pub fn cast_vote(&mut self, vote: Vote) -> Result<&Candidate> {
        let idx = self.position_of(vote.candidate_id)
            .ok_or(LedgerError::CandidateNotFound(vote.candidate_id))?;
        self.votes.push(vote);
        Ok(&self.candidates[idx])
    }

    /// Vote counts per candidate name, in the order each name first received a vote.
    ///
    /// Candidates that share a name share a row.
    pub fn results(&self) -> Result<Vec<TallyEntry>> {
        if self.votes.is_empty() {
            return Err(LedgerError::NoVotes);
        }

        let mut rows: HashMap<&str, usize> = HashMap::new();
        let mut tally: Vec<TallyEntry> = Vec::new();

        for candidate in self.votes.iter().filter_map(|v| self.find_candidate(v.candidate_id)) {
            match rows.get(candidate.name.as_str()) {
                Some(&row) => tally[row].votes += 1,
                None => {
                    rows.insert(&candidate.name, tally.len());
                    tally.push(TallyEntry { candidate: candidate.name.clone(), votes: 1 });
                }
            }
        }

        Ok(tally)
    }

    /// Vote counts per registered candidate, in first-vote order.
    pub fn results_by_candidate(&self) -> Result<Vec<CandidateTally>> {
        if self.votes.is_empty() {
            return Err(LedgerError::NoVotes);
        }

        let mut rows: HashMap<usize, usize> = HashMap::new();
        let mut tally: Vec<CandidateTally> = Vec::new();

        for idx in self.votes.iter().filter_map(|v| self.position_of(v.candidate_id)) {
            match rows.get(&idx) {
                Some(&row) => tally[row].votes += 1,
                None => {
                    rows.insert(idx, tally.len());
                    tally.push(CandidateTally::first_vote(&self.candidates[idx]));
                }
            }
        }

        Ok(tally)
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn vote_count(&self) -> usize {
        self.votes.len()
    }
}
