use super::*;

fn row_with(pairs: &[(u8, usize)]) -> TransitionRow {
    let mut unpacked = [None; BYTE_CEILING];
    for &(byte, target) in pairs {
        unpacked[byte as usize] = Some(DfaStateId::new(target));
    }
    TransitionRow::pack(&unpacked)
}

#[test]
fn test_empty_row() {
    let row = TransitionRow::new();
    assert!(row.is_empty());
    assert_eq!(row.step(b'a'), None);
    assert_eq!(row.step(255), None);
    assert_eq!(row.ranges().count(), 0);
}

#[test]
fn test_row_step() {
    let row = row_with(&[(b'a', 1), (b'b', 1), (b'c', 1), (b'z', 2)]);
    assert_eq!(row.step(b'a'), Some(DfaStateId::new(1)));
    assert_eq!(row.step(b'c'), Some(DfaStateId::new(1)));
    assert_eq!(row.step(b'd'), None);
    assert_eq!(row.step(b'z'), Some(DfaStateId::new(2)));
    assert_eq!(row.step(0), None);
}

#[test]
fn test_row_packs_runs() {
    let row = row_with(&[(b'a', 1), (b'b', 1), (b'c', 1), (b'z', 2)]);
    let ranges: Vec<_> = row.ranges().collect();
    assert_eq!(
        ranges,
        vec![
            (b'a', b'c', DfaStateId::new(1)),
            (b'z', b'z', DfaStateId::new(2)),
        ]
    );
}

#[test]
fn test_row_edges_of_alphabet() {
    let row = row_with(&[(1, 4), (255, 5)]);
    assert_eq!(row.step(1), Some(DfaStateId::new(4)));
    assert_eq!(row.step(255), Some(DfaStateId::new(5)));
    let all: Vec<_> = row.iter().collect();
    assert_eq!(
        all,
        vec![(1, DfaStateId::new(4)), (255, DfaStateId::new(5))]
    );
}

#[test]
fn test_row_full_range() {
    let mut unpacked = [None; BYTE_CEILING];
    for slot in unpacked.iter_mut().skip(1) {
        *slot = Some(DfaStateId::new(0));
    }
    let row = TransitionRow::pack(&unpacked);
    assert_eq!(row.iter().count(), 255);
    assert_eq!(row.ranges().count(), 1);
}

#[test]
fn test_row_deserialize_validates_ceilings() {
    let row = row_with(&[(b'a', 1), (b'z', 2)]);
    let json = serde_json::to_string(&row).unwrap();
    let back: TransitionRow = serde_json::from_str(&json).unwrap();
    assert_eq!(back, row);

    for bad in [
        r#"{"ceilings":[0,256],"steps":[1,null]}"#,
        r#"{"ceilings":[97,97,256],"steps":[null,1,null]}"#,
        r#"{"ceilings":[97],"steps":[null]}"#,
        r#"{"ceilings":[256],"steps":[null,null]}"#,
        r#"{"ceilings":[],"steps":[]}"#,
    ] {
        assert!(
            serde_json::from_str::<TransitionRow>(bad).is_err(),
            "{} should be rejected",
            bad
        );
    }
}

/// `a(b|c)*` with a self-loop on state 1.
fn looping_nfa() -> Nfa {
    let mut arena = StateArena::new();
    let s0 = arena.alloc();
    let s1 = arena.alloc();
    arena.push_edge(s0, b'a', s1);
    arena.push_edge(s1, b'b', s1);
    arena.push_edge(s1, b'c', s1);
    Nfa::new(arena, s0, [(s1, 0)])
}

#[test]
fn test_nfa_simulation_with_cycles() {
    let nfa = looping_nfa();
    assert!(nfa.is_match("a"));
    assert!(nfa.is_match("abcbc"));
    assert!(!nfa.is_match(""));
    assert!(!nfa.is_match("ba"));
    assert!(!nfa.is_match("abca"));
}

#[test]
fn test_determinize_cycles() {
    let nfa = looping_nfa();
    let dfa = determinize(&nfa, None).unwrap();
    assert_eq!(dfa.len(), 2);
    let one = DfaStateId::new(1);
    assert_eq!(dfa.next_state(one, b'b'), Some(one));
    assert!(dfa.is_match("abbbc"));
    assert!(!dfa.is_match("abd"));
}

#[test]
fn test_dfa_runner_rejects_without_transition() {
    let dfa = determinize(&looping_nfa(), None).unwrap();
    assert!(!dfa.is_match("x"));
    assert_eq!(dfa.longest_match("abx"), Some(2));
    assert_eq!(dfa.find("xxab"), Some((2, 4)));
}

#[test]
fn test_dfa_next_state_out_of_range() {
    let dfa = determinize(&looping_nfa(), None).unwrap();
    assert_eq!(dfa.next_state(DfaStateId::new(99), b'a'), None);
    assert!(dfa.row(DfaStateId::new(99)).is_none());
}

#[test]
fn test_nfa_accept_tags() {
    let mut arena = StateArena::new();
    let s0 = arena.alloc();
    let s1 = arena.alloc();
    let nfa = Nfa::new(arena, s0, [(s1, 4), (s1, 2)]);
    assert_eq!(nfa.accept_pattern(s1), Some(2));
    assert!(!nfa.is_accept(s0));
    assert_eq!(nfa.accept_states().collect::<Vec<_>>(), vec![s1]);
}
