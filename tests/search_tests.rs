use mandate::shared::fuzzy;

#[test]
fn fuzzy_empty_vs_empty() {
    assert_eq!(fuzzy::distance("", ""), 0);
}

#[test]
fn fuzzy_empty_vs_nonempty() {
    assert_eq!(fuzzy::distance("", "haifa"), 5);
    assert_eq!(fuzzy::distance("haifa", ""), 5);
}

#[test]
fn fuzzy_single_edits() {
    assert_eq!(fuzzy::distance("haifa", "heifa"), 1);
    assert_eq!(fuzzy::distance("jerusalem", "jerusalm"), 1);
    assert_eq!(fuzzy::distance("ashdod", "asdod"), 1);
}

#[test]
fn fuzzy_completely_different() {
    assert_eq!(fuzzy::distance("afula", "rehovot"), 7);
}

#[test]
fn fuzzy_hebrew() {
    assert_eq!(fuzzy::distance("חיפה", "חיפה"), 0);
    assert_eq!(fuzzy::distance("חיפה", "חיפא"), 1);
}

#[test]
fn score_exact_match() {
    assert_eq!(fuzzy::score("tel aviv", "tel aviv"), 1.0);
}

#[test]
fn score_partial_match() {
    let close = fuzzy::score("tel aviv", "tel avivv");
    let far = fuzzy::score("tel aviv", "beer sheva");
    assert!(close > far);
    assert!(close < 1.0);
}

#[test]
fn score_empty_needle() {
    assert_eq!(fuzzy::score("", "tel aviv"), 0.0);
}
