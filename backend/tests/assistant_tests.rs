//! Assistant chat log tests
//!
//! The chat page interleaves queries and responses by index, so the two
//! lists must stay the same length no matter what is appended.

use proptest::prelude::*;
use shared::ChatLog;

#[test]
fn new_log_is_empty() {
    let log = ChatLog::default();
    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
}

#[test]
fn append_preserves_arrival_order() {
    let mut log = ChatLog::default();
    log.append("first".into(), "one".into());
    log.append("second".into(), "two".into());
    log.append("third".into(), "three".into());

    assert_eq!(log.queries, vec!["first", "second", "third"]);
    assert_eq!(log.responses, vec!["one", "two", "three"]);
}

#[test]
fn pairs_stay_aligned_by_index() {
    let mut log = ChatLog::default();
    log.append("when should I sow wheat?".into(), "November.".into());
    log.append("and harvest?".into(), "April.".into());

    for i in 0..log.len() {
        assert!(!log.queries[i].is_empty());
        assert!(!log.responses[i].is_empty());
    }
    assert_eq!(log.queries[1], "and harvest?");
    assert_eq!(log.responses[1], "April.");
}

proptest! {
    /// Queries and responses always have equal length after any sequence
    /// of appends.
    #[test]
    fn lists_never_diverge(pairs in proptest::collection::vec((".{0,40}", ".{0,40}"), 0..30)) {
        let mut log = ChatLog::default();
        for (query, response) in &pairs {
            log.append(query.clone(), response.clone());
        }
        prop_assert_eq!(log.queries.len(), log.responses.len());
        prop_assert_eq!(log.len(), pairs.len());
    }
}
