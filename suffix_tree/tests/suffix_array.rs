use rayon::prelude::*;
use suffix_tree::{BuildError, SuffixTree};

fn is_permutation(sa: &[usize], n: usize) -> bool {
    let mut seen = vec![false; n + 1];
    for &i in sa {
        if i > n || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    seen.into_iter().all(|s| s)
}

#[test]
fn banana() {
    let tree = SuffixTree::new("banana").unwrap();
    assert_eq!(tree.suffix_array(), vec![6, 5, 3, 1, 0, 4, 2]);
}

#[test]
fn repeated_symbol() {
    let tree = SuffixTree::new("aaaa").unwrap();
    assert_eq!(tree.suffix_array(), vec![4, 3, 2, 1, 0]);
}

#[test]
fn single_symbol() {
    let tree = SuffixTree::new("a").unwrap();
    assert_eq!(tree.suffix_array(), vec![1, 0]);
    assert_eq!(tree.leaf_count(), 2);
    assert_eq!(tree.stats().splits, 0);
}

#[test]
fn distinct_symbols_match_plain_sort() {
    let text = "qwertyuiop";
    let mut expected = (0..=text.len()).collect::<Vec<_>>();
    expected.sort_by_key(|&i| &text[i..]);

    let tree = SuffixTree::new(text).unwrap();
    assert_eq!(tree.suffix_array(), expected);
}

#[test]
fn mississippi() {
    let text = "mississippi";
    let tree = SuffixTree::new(text).unwrap();
    let sa = tree.suffix_array();

    assert_eq!(sa, vec![11, 10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]);
    assert!(is_permutation(&sa, text.len()));
    for pair in sa.windows(2) {
        assert!(text[pair[0]..] <= text[pair[1]..]);
    }
}

#[test]
fn suffix_indices_is_lazy_and_complete() {
    let tree = SuffixTree::new("abracadabra").unwrap();
    let mut iter = tree.suffix_indices();
    assert_eq!(iter.next(), Some(11));
    assert_eq!(iter.count(), 11);
}

#[test]
fn invalid_input_is_rejected() {
    assert_eq!(SuffixTree::new("").err(), Some(BuildError::EmptyInput));
    assert_eq!(
        SuffixTree::new("$abc").err(),
        Some(BuildError::ContainsSentinel { position: 0 })
    );
}

#[test]
fn long_run_does_not_overflow_the_stack() {
    let text = "ab".repeat(50_000) + &"a".repeat(50_000);
    let tree = SuffixTree::new(&text).unwrap();
    let sa = tree.suffix_array();
    assert_eq!(sa.len(), text.len() + 1);
    assert!(is_permutation(&sa, text.len()));
}

#[test]
fn concurrent_readers_agree() {
    let tree = SuffixTree::new("the quick brown fox jumps over the lazy dog").unwrap();
    let expected = tree.suffix_array();

    let results = (0..16)
        .into_par_iter()
        .map(|_| tree.suffix_array())
        .collect::<Vec<_>>();
    assert!(results.iter().all(|sa| *sa == expected));

    let patterns: &[&[u8]] = &[b"the", b"o", b"fox", b"cat", b" "];
    let counts = patterns
        .par_iter()
        .map(|p| tree.occurrences(p).len())
        .collect::<Vec<_>>();
    assert_eq!(counts, vec![2, 4, 1, 0, 8]);
}
