use rand::{rngs::StdRng, SeedableRng};
use sortty::algorithms::{random_array, Algorithm};
use sortty::snapshot::Snapshot;

fn frames(algorithm: Algorithm, input: &[u32]) -> Vec<Snapshot<u32>> {
    algorithm.sort(input).collect()
}

fn sorted_copy(input: &[u32]) -> Vec<u32> {
    let mut values = input.to_vec();
    values.sort();
    values
}

fn inputs() -> Vec<Vec<u32>> {
    let mut rng = StdRng::seed_from_u64(7);
    vec![
        vec![],
        vec![42],
        vec![3, 1, 2],
        vec![1, 2, 3, 4, 5],
        vec![5, 4, 3, 2, 1],
        vec![2, 2, 1, 3, 2],
        random_array(&mut rng, 31, 1, 100),
    ]
}

/// The contract every algorithm honors: a "before" frame, a fully sorted
/// final frame covering every index, constant length, in-range indices.
fn check_contract(algorithm: Algorithm, input: &[u32]) {
    let frames = frames(algorithm, input);
    assert!(!frames.is_empty(), "{:?} produced no frames", algorithm);

    let first = &frames[0];
    assert_eq!(first.values, input, "{:?} first frame is not the input", algorithm);
    assert!(first.active.is_empty());
    assert!(first.sorted.is_empty());

    let last = frames.last().unwrap();
    assert_eq!(last.values, sorted_copy(input), "{:?} did not sort", algorithm);
    assert!(last.active.is_empty());
    assert!(
        (0..input.len()).all(|idx| last.sorted.contains(&idx)),
        "{:?} final frame does not mark every index sorted",
        algorithm
    );
    assert_eq!(last.sorted.len(), input.len());

    for frame in &frames {
        assert_eq!(frame.values.len(), input.len());
        for &idx in frame.active.iter().chain(frame.sorted.iter()) {
            assert!(idx < input.len(), "{:?} emitted index {} out of range", algorithm, idx);
        }
    }
}

#[test]
fn all_algorithms_satisfy_the_shared_contract() {
    for algorithm in Algorithm::ALL {
        for input in inputs() {
            check_contract(algorithm, &input);
        }
    }
}

#[test]
fn in_place_algorithms_keep_a_permutation_at_every_frame() {
    // merge sort is excluded: its write steps overwrite the destination
    // while the pending values live in the temporary runs
    let in_place = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
    ];
    for algorithm in in_place {
        for input in inputs() {
            let expected = sorted_copy(&input);
            for frame in algorithm.sort(&input) {
                assert_eq!(sorted_copy(&frame.values), expected);
            }
        }
    }
}

#[test]
fn snapshot_streams_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(99);
    let input = random_array(&mut rng, 20, 1, 100);
    for algorithm in Algorithm::ALL {
        let first: Vec<_> = algorithm.sort(&input).collect();
        let second: Vec<_> = algorithm.sort(&input).collect();
        assert_eq!(first, second);
    }
}

#[test]
fn snapshots_do_not_alias_the_working_array() {
    let mut steps = Algorithm::Bubble.sort(&[3u32, 1, 2]);
    let before = steps.next().unwrap();
    let retained = before.clone();
    while steps.next().is_some() {}
    assert_eq!(before, retained);
    assert_eq!(before.values, [3, 1, 2]);
}

#[test]
fn empty_input_is_a_single_trivial_frame_for_every_algorithm() {
    for algorithm in Algorithm::ALL {
        let frames = frames(algorithm, &[]);
        assert_eq!(frames.len(), 1, "{:?}", algorithm);
        assert!(frames[0].values.is_empty());
        assert!(frames[0].active.is_empty());
        assert!(frames[0].sorted.is_empty());
    }
}

#[test]
fn bubble_early_exits_on_sorted_input() {
    let input: Vec<u32> = (1..=8).collect();
    let frames = frames(Algorithm::Bubble, &input);
    // baseline + one comparison per adjacent pair + final frame
    assert_eq!(frames.len(), input.len() + 1);
}

#[test]
fn bubble_example_three_one_two() {
    let frames = frames(Algorithm::Bubble, &[3, 1, 2]);
    assert_eq!(frames.first().unwrap().values, [3, 1, 2]);
    assert_eq!(frames.last().unwrap().values, [1, 2, 3]);
}

#[test]
fn bubble_swap_frames_follow_comparison_frames() {
    let frames = frames(Algorithm::Bubble, &[2, 1]);
    // baseline, compare {0,1}, swap {0,1}, final
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[1].values, [2, 1]);
    assert!(frames[1].active.contains(&0) && frames[1].active.contains(&1));
    assert_eq!(frames[2].values, [1, 2]);
    assert_eq!(frames[1].active, frames[2].active);
}

#[test]
fn selection_reports_sorted_prefixes_only() {
    let mut rng = StdRng::seed_from_u64(3);
    let input = random_array(&mut rng, 16, 1, 50);
    let frames = frames(Algorithm::Selection, &input);
    let mut max_len = 0;
    for frame in &frames {
        let len = frame.sorted.len();
        assert!(
            (0..len).all(|idx| frame.sorted.contains(&idx)),
            "sorted set is not a prefix"
        );
        assert!(len >= max_len, "sorted prefix shrank");
        max_len = len;
    }
    assert_eq!(max_len, input.len());
}

#[test]
fn selection_scan_frames_highlight_min_and_candidate() {
    let frames = frames(Algorithm::Selection, &[3, 1, 2]);
    // the first scan frame compares the running minimum (0) to candidate 1
    assert!(frames[1].active.contains(&0) && frames[1].active.contains(&1));
    // a new minimum at index 1 gets its own single-index frame
    assert_eq!(frames[2].active.len(), 1);
    assert!(frames[2].active.contains(&1));
}

#[test]
fn insertion_reports_untouched_tail_suffixes() {
    let mut rng = StdRng::seed_from_u64(4);
    let input = random_array(&mut rng, 16, 1, 50);
    let n = input.len();
    for frame in frames(Algorithm::Insertion, &input) {
        let len = frame.sorted.len();
        assert!(
            (n - len..n).all(|idx| frame.sorted.contains(&idx)),
            "sorted set is not a suffix"
        );
    }
}

#[test]
fn insertion_example_with_duplicates() {
    let frames = frames(Algorithm::Insertion, &[2, 2, 1]);
    assert_eq!(frames.last().unwrap().values, [1, 2, 2]);
}

#[test]
fn merge_handles_duplicates() {
    let frames = frames(Algorithm::Merge, &[2, 1, 2, 1, 2]);
    assert_eq!(frames.last().unwrap().values, [1, 1, 2, 2, 2]);
}

#[test]
fn merge_labels_its_write_frames() {
    let frames = frames(Algorithm::Merge, &[4, 3, 2, 1]);
    assert!(frames
        .iter()
        .any(|f| f.label.as_deref() == Some("after write")));
    assert!(frames
        .iter()
        .any(|f| f.label.as_deref().is_some_and(|l| l.starts_with("merging "))));
    // no sorted set is reported while merges are in flight
    for frame in &frames[..frames.len() - 1] {
        assert!(frame.sorted.is_empty());
    }
}

/// Key-only ordering so equal keys stay distinguishable by id.
#[derive(Debug, Clone, Copy)]
struct Tagged {
    key: u32,
    id: u32,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

#[test]
fn merge_is_stable_on_tagged_duplicates() {
    let input: Vec<Tagged> = [(5, 0), (1, 1), (5, 2), (3, 3), (5, 4), (1, 5)]
        .into_iter()
        .map(|(key, id)| Tagged { key, id })
        .collect();

    let last = Algorithm::Merge.sort(&input).last().unwrap();
    assert!(last.values.windows(2).all(|w| w[0].key <= w[1].key));

    let ids_with_key = |key: u32| -> Vec<u32> {
        last.values
            .iter()
            .filter(|t| t.key == key)
            .map(|t| t.id)
            .collect()
    };
    assert_eq!(ids_with_key(1), [1, 5]);
    assert_eq!(ids_with_key(5), [0, 2, 4]);
}

#[test]
fn quick_places_every_pivot_correctly() {
    use rand::seq::SliceRandom;

    let mut rng = StdRng::seed_from_u64(11);
    // distinct values keep the partition bound strict on both sides
    let mut input: Vec<u32> = (1..=24).collect();
    input.shuffle(&mut rng);

    let mut partitions = 0;
    for frame in Algorithm::Quick.sort(&input) {
        if frame.label.as_deref() != Some("pivot placed") {
            continue;
        }
        partitions += 1;
        let p = *frame.active.iter().min().unwrap();
        let pivot = frame.values[p];
        assert!(frame.values[..p].iter().all(|&v| v < pivot));
        assert!(frame.values[p + 1..].iter().all(|&v| v > pivot));
    }
    assert!(partitions > 0);
}

#[test]
fn quick_on_empty_input_emits_one_trivial_frame() {
    let frames = frames(Algorithm::Quick, &[]);
    assert_eq!(frames.len(), 1);
    assert!(frames[0].values.is_empty());
    assert!(frames[0].active.is_empty());
    assert!(frames[0].sorted.is_empty());
}

#[test]
fn quick_labels_comparisons_against_the_pivot() {
    let frames = frames(Algorithm::Quick, &[3, 1, 2]);
    let compare: Vec<_> = frames
        .iter()
        .filter(|f| f.label.as_deref() == Some("compare to pivot"))
        .collect();
    assert!(!compare.is_empty());
    // every comparison frame highlights the scan index and the pivot slot
    for frame in compare {
        assert_eq!(frame.active.len(), 2);
    }
}

#[test]
fn random_array_is_seed_deterministic_and_bounded() {
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    let left = random_array(&mut a, 50, 1, 100);
    let right = random_array(&mut b, 50, 1, 100);
    assert_eq!(left, right);
    assert_eq!(left.len(), 50);
    assert!(left.iter().all(|&v| (1..=100).contains(&v)));
}
