#[cfg(test)]
mod tests {
    use crate::error::{ErrorResponse, LedgerError};
    use crate::ledger::Ledger;
    use crate::models::{Candidate, CandidateTally, MessageResponse, TallyEntry, Vote};

    fn candidate(id: i64, name: &str, party: &str) -> Candidate {
        Candidate { id, name: name.into(), party: party.into() }
    }

    fn vote(candidate_id: i64, voter_id: i64) -> Vote {
        Vote { candidate_id, voter_id }
    }

    fn ledger(candidates: &[(i64, &str, &str)]) -> Ledger {
        let mut l = Ledger::new();
        candidates.iter().for_each(|&(id, name, party)| {
            l.register_candidate(candidate(id, name, party));
        });
        l
    }

    fn entry(name: &str, votes: u64) -> TallyEntry {
        TallyEntry { candidate: name.into(), votes }
    }

    #[test]
    fn test_empty_ledger() {
        let l = Ledger::new();
        assert!(matches!(l.candidates(), Err(LedgerError::NoCandidates)));
        assert!(matches!(l.results(), Err(LedgerError::NoVotes)));
        assert!(matches!(l.results_by_candidate(), Err(LedgerError::NoVotes)));
        assert_eq!(l.candidate_count(), 0);
        assert_eq!(l.vote_count(), 0);
    }

    #[test]
    fn test_register_then_list() {
        let mut l = Ledger::new();
        let registered = l.register_candidate(candidate(1, "Alice", "X"));
        assert_eq!(registered.name, "Alice");
        assert_eq!(l.candidates().unwrap(), &[candidate(1, "Alice", "X")]);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let l = ledger(&[(3, "Carol", "Z"), (1, "Alice", "X"), (2, "Bob", "Y")]);
        let ids: Vec<_> = l.candidates().unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_duplicate_ids_are_accepted() {
        let l = ledger(&[(1, "Alice", "X"), (1, "Impostor", "Y")]);
        assert_eq!(l.candidates().unwrap().len(), 2);
        assert_eq!(l.find_candidate(1).unwrap().name, "Alice");
    }

    #[test]
    fn test_vote_for_unknown_candidate() {
        let mut l = ledger(&[(1, "Alice", "X")]);
        assert!(matches!(l.cast_vote(vote(99, 10)), Err(LedgerError::CandidateNotFound(99))));
        assert_eq!(l.vote_count(), 0);
        assert!(matches!(l.results(), Err(LedgerError::NoVotes)));
    }

    #[test]
    fn test_vote_increments_tally_by_one() {
        let mut l = ledger(&[(1, "Alice", "X"), (2, "Bob", "Y")]);
        l.cast_vote(vote(1, 10)).unwrap();
        assert_eq!(l.results().unwrap(), vec![entry("Alice", 1)]);

        let voted_for = l.cast_vote(vote(1, 11)).unwrap();
        assert_eq!(voted_for.name, "Alice");
        assert_eq!(l.results().unwrap(), vec![entry("Alice", 2)]);
    }

    #[test]
    fn test_results_in_first_vote_order() {
        let mut l = ledger(&[(1, "Alice", "X"), (2, "Bob", "Y")]);
        [vote(1, 10), vote(1, 11), vote(2, 12)]
            .into_iter()
            .for_each(|v| { l.cast_vote(v).unwrap(); });
        assert_eq!(l.results().unwrap(), vec![entry("Alice", 2), entry("Bob", 1)]);

        let mut l = ledger(&[(1, "Alice", "X"), (2, "Bob", "Y")]);
        [vote(2, 12), vote(1, 10), vote(1, 11)]
            .into_iter()
            .for_each(|v| { l.cast_vote(v).unwrap(); });
        assert_eq!(l.results().unwrap(), vec![entry("Bob", 1), entry("Alice", 2)]);
    }

    #[test]
    fn test_candidates_without_votes_are_omitted() {
        let mut l = ledger(&[(1, "Alice", "X"), (2, "Bob", "Y"), (3, "Carol", "Z")]);
        l.cast_vote(vote(3, 1)).unwrap();
        assert_eq!(l.results().unwrap(), vec![entry("Carol", 1)]);
    }

    #[test]
    fn test_repeat_voter_is_counted_twice() {
        let mut l = ledger(&[(1, "Alice", "X")]);
        l.cast_vote(vote(1, 7)).unwrap();
        l.cast_vote(vote(1, 7)).unwrap();
        assert_eq!(l.vote_count(), 2);
        assert_eq!(l.results().unwrap(), vec![entry("Alice", 2)]);
    }

    #[test]
    fn test_shared_name_merges_tally() {
        let mut l = ledger(&[(1, "Sam", "X"), (2, "Sam", "Y")]);
        l.cast_vote(vote(1, 10)).unwrap();
        l.cast_vote(vote(2, 11)).unwrap();
        assert_eq!(l.results().unwrap(), vec![entry("Sam", 2)]);

        let by_candidate = l.results_by_candidate().unwrap();
        assert_eq!(by_candidate, vec![
            CandidateTally { id: 1, name: "Sam".into(), party: "X".into(), votes: 1 },
            CandidateTally { id: 2, name: "Sam".into(), party: "Y".into(), votes: 1 },
        ]);
    }

    #[test]
    fn test_duplicate_id_votes_go_to_first_registration() {
        let mut l = ledger(&[(1, "Alice", "X"), (1, "Impostor", "Y")]);
        l.cast_vote(vote(1, 10)).unwrap();
        assert_eq!(l.results().unwrap(), vec![entry("Alice", 1)]);
        assert_eq!(l.results_by_candidate().unwrap()[0].party, "X");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            MessageResponse::candidate_registered(&candidate(1, "Alice", "X")).message,
            "Candidate Alice registered successfully!"
        );
        assert_eq!(MessageResponse::vote_submitted().message, "Vote submitted successfully!");
        assert_eq!(
            MessageResponse::welcome().message,
            "Welcome to the Online Election Microservice!"
        );
    }

    #[test]
    fn test_error_details() {
        assert_eq!(LedgerError::NoCandidates.to_string(), "No candidates found");
        assert_eq!(LedgerError::CandidateNotFound(4).to_string(), "Candidate not found");
        assert_eq!(LedgerError::NoVotes.to_string(), "No votes found");
        assert_eq!(
            serde_json::to_value(ErrorResponse::new("No votes found")).unwrap(),
            serde_json::json!({"detail": "No votes found"})
        );
    }

    #[test]
    fn test_wire_format() {
        let v: Vote = serde_json::from_str(r#"{"candidate_id": 1, "voter_id": 10, "extra": true}"#).unwrap();
        assert_eq!(v, vote(1, 10));

        assert!(serde_json::from_str::<Candidate>(r#"{"id": "one", "name": "A", "party": "B"}"#).is_err());
        assert!(serde_json::from_str::<Candidate>(r#"{"id": 1, "name": "A"}"#).is_err());

        let json = serde_json::to_value(entry("Alice", 2)).unwrap();
        assert_eq!(json, serde_json::json!({"candidate": "Alice", "votes": 2}));
    }
}
