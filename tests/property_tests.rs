use proptest::prelude::*;
use proptest::sample::Index;
use wordle_freq::{
    rank_candidates, score_word, top_words, DuplicatePolicy, Feedback, FrequencyTable, Solver,
    Status, WordStore, SMALL_SET_THRESHOLD, WORD_LENGTH,
};

// A small alphabet keeps overlap between words, and so eliminations, likely.
fn word() -> impl Strategy<Value = String> {
    "[a-f]{5}"
}

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), 0..60)
}

fn status() -> impl Strategy<Value = Status> {
    prop_oneof![Just(Status::Black), Just(Status::Yellow), Just(Status::Green)]
}

fn call() -> impl Strategy<Value = (char, Status, usize)> {
    (letter(), status(), 0..WORD_LENGTH)
}

fn policy() -> impl Strategy<Value = DuplicatePolicy> {
    prop_oneof![Just(DuplicatePolicy::Literal), Just(DuplicatePolicy::Tallied)]
}

fn letter() -> impl Strategy<Value = char> {
    prop::char::range('a', 'f')
}

/// Grade `guess` against `answer` the way the game does: greens first, then
/// yellows from the answer letters not already matched.
fn grade(guess: &str, answer: &str) -> Feedback {
    let guess: Vec<char> = guess.chars().collect();
    let answer: Vec<char> = answer.chars().collect();
    let mut statuses = [Status::Black; WORD_LENGTH];
    let mut unmatched = Vec::new();

    for i in 0..WORD_LENGTH {
        if guess[i] == answer[i] {
            statuses[i] = Status::Green;
        } else {
            unmatched.push(answer[i]);
        }
    }
    for i in 0..WORD_LENGTH {
        if statuses[i] == Status::Green {
            continue;
        }
        if let Some(at) = unmatched.iter().position(|&c| c == guess[i]) {
            statuses[i] = Status::Yellow;
            unmatched.swap_remove(at);
        }
    }
    Feedback(statuses)
}

#[test]
fn grade_marks_surplus_copies_black() {
    assert_eq!(grade("geese", "creep"), Feedback::parse("bygbb").unwrap());
    assert_eq!(grade("speed", "spell"), Feedback::parse("gggbb").unwrap());
    assert_eq!(grade("crane", "crane"), Feedback::ALL_GREEN);
}

fn is_subsequence(sub: &[String], full: &[String]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|w| rest.any(|f| f == w))
}

proptest! {
    #[test]
    fn candidates_stay_an_ordered_subset(
        words in words(),
        calls in prop::collection::vec(call(), 0..10),
    ) {
        let mut store = WordStore::new(words.clone());
        let mut previous = store.candidate_count();
        for (letter, status, position) in calls {
            let count = store.apply_feedback(letter, status, position).unwrap();
            prop_assert!(count <= previous);
            prop_assert!(is_subsequence(store.candidates(), &words));
            previous = count;
        }
    }

    #[test]
    fn black_on_missing_letter_is_noop(words in words(), position in 0..WORD_LENGTH) {
        let mut store = WordStore::new(words.clone());
        store.apply_feedback('z', Status::Black, position).unwrap();
        prop_assert_eq!(store.candidates(), &words[..]);
    }

    #[test]
    fn yellow_guarantees(words in words(), letter in letter(), position in 0..WORD_LENGTH) {
        let mut store = WordStore::new(words);
        store.apply_feedback(letter, Status::Yellow, position).unwrap();
        for w in store.candidates() {
            prop_assert!(w.contains(letter));
            prop_assert_ne!(w.chars().nth(position), Some(letter));
        }
    }

    #[test]
    fn green_guarantees(words in words(), letter in letter(), position in 0..WORD_LENGTH) {
        let mut store = WordStore::new(words.clone());
        store.apply_feedback(letter, Status::Green, position).unwrap();
        let expected: Vec<String> = words
            .into_iter()
            .filter(|w| w.chars().nth(position) == Some(letter))
            .collect();
        prop_assert_eq!(store.candidates(), &expected[..]);
    }

    #[test]
    fn frequencies_sum_to_one(words in prop::collection::vec(word(), 1..60)) {
        let table = FrequencyTable::recompute(&words);
        let total: f64 = table.iter().map(|e| e.frequency).sum();
        prop_assert!((total - 1.0).abs() < 1e-6);
        for entry in table.iter() {
            prop_assert!(entry.frequency > 0.0 && entry.frequency <= 1.0);
        }
    }

    #[test]
    fn recompute_is_deterministic(words in words()) {
        prop_assert_eq!(FrequencyTable::recompute(&words), FrequencyTable::recompute(&words));
    }

    #[test]
    fn score_ignores_letter_order(w in word()) {
        let table = FrequencyTable::recompute(&[w.as_str()]);
        let reversed: String = w.chars().rev().collect();
        prop_assert_eq!(score_word(&w, &table), score_word(&reversed, &table));
    }

    #[test]
    fn ranking_matches_sequential_stable_sort(words in words()) {
        let table = FrequencyTable::recompute(&words);
        let ranked = rank_candidates(&words, &table);

        let mut expected: Vec<(String, f64)> = words
            .iter()
            .map(|w| (w.clone(), score_word(w, &table)))
            .collect();
        expected.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

        let actual: Vec<(String, f64)> = ranked.into_iter().map(|s| (s.word, s.score)).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn small_sets_are_shown_whole(words in words(), limit in 0usize..80) {
        let table = FrequencyTable::recompute(&words);
        let ranked = rank_candidates(&words, &table);
        let top = top_words(&ranked, limit);
        if ranked.len() < SMALL_SET_THRESHOLD {
            prop_assert_eq!(top.len(), ranked.len());
        } else {
            prop_assert_eq!(top.len(), limit.min(ranked.len()));
        }
        prop_assert_eq!(top, &ranked[..top.len()]);
    }

    #[test]
    fn rounds_keep_an_ordered_subset(
        words in prop::collection::vec(word(), 1..60),
        policy in policy(),
        rounds in prop::collection::vec((any::<Index>(), "[byg]{5}"), 0..6),
    ) {
        let mut solver = Solver::new(WordStore::new(words.clone()), policy);
        let mut previous = solver.remaining_count();
        for (pick, row) in rounds {
            let guess = pick.get(&words);
            let summary = solver.apply_guess(guess, Feedback::parse(&row).unwrap()).unwrap();
            prop_assert_eq!(summary.before, previous);
            prop_assert!(summary.after <= summary.before);
            prop_assert!(is_subsequence(solver.candidates(), &words));
            prop_assert_eq!(solver.frequencies(), &FrequencyTable::recompute(solver.candidates()));
            previous = summary.after;
        }
    }

    #[test]
    fn tallied_rounds_never_drop_the_answer(
        words in prop::collection::vec("[a-d]{5}", 1..60),
        answer in any::<Index>(),
        guesses in prop::collection::vec(any::<Index>(), 1..6),
    ) {
        let answer = answer.get(&words).clone();
        let mut solver = Solver::new(WordStore::new(words.clone()), DuplicatePolicy::Tallied);
        for pick in guesses {
            let guess = pick.get(&words);
            solver.apply_guess(guess, grade(guess, &answer)).unwrap();
            prop_assert!(
                solver.candidates().contains(&answer),
                "{} dropped after guessing {}",
                answer,
                guess
            );
        }
    }
}
