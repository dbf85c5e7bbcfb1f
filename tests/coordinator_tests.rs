use std::sync::Arc;
use std::time::Duration;

use literaki::{
    DeliveryPolicy, DisplayUpdate, FinderConfig, InputOutcome, Language, SearchCoordinator,
    Status, WordIndex,
};

const TIMEOUT: Duration = Duration::from_secs(10);

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn config() -> FinderConfig {
    FinderConfig::new()
        .with_worker_threads(2)
        .with_language(Language::English)
}

fn coordinator_with(
    config: &FinderConfig,
    db: &[&str],
) -> SearchCoordinator<Vec<DisplayUpdate>> {
    let index = Arc::new(WordIndex::new(words(db)));
    SearchCoordinator::new(config, index, Vec::new()).unwrap()
}

fn statuses(updates: &[DisplayUpdate]) -> Vec<Status> {
    updates.iter().map(|u| u.status).collect()
}

#[test]
fn test_search_found() {
    let mut coordinator = coordinator_with(&config(), &["kot", "tok", "kto", "pies"]);

    let outcome = coordinator.on_input_changed("KOT");
    assert_eq!(outcome, InputOutcome::Dispatched { sequence: 1 });

    // Searching is shown before any work completes.
    assert_eq!(statuses(coordinator.sink()), vec![Status::Searching]);
    assert_eq!(coordinator.sink()[0].words, None);

    assert_eq!(coordinator.wait_for_results(TIMEOUT), 1);
    assert_eq!(coordinator.in_flight(), 0);

    let updates = coordinator.sink();
    assert_eq!(statuses(updates), vec![Status::Searching, Status::Found]);
    let found = &updates[1];
    assert_eq!(found.message, "Here are the matching words:");
    assert_eq!(found.words, Some(words(&["kot", "kto", "tok"])));
    assert_eq!(found.sequence, Some(1));
}

#[test]
fn test_search_matches_uppercase_dictionary_words() {
    let mut coordinator = coordinator_with(&config(), &["Kot", "TOK"]);

    coordinator.on_input_changed("kot");
    coordinator.wait_for_results(TIMEOUT);

    let last = coordinator.sink().last().unwrap();
    assert_eq!(last.status, Status::Found);
    assert_eq!(last.words, Some(words(&["kot", "tok"])));
}

#[test]
fn test_wait_until_idle_delivers_everything() {
    let mut coordinator = coordinator_with(&config(), &["kot", "tok", "pies"]);

    coordinator.on_input_changed("kot");
    coordinator.on_input_changed("sipe");
    coordinator.wait_until_idle();

    assert_eq!(coordinator.in_flight(), 0);
    let last = coordinator.sink().last().unwrap();
    assert_eq!(last.sequence, Some(2));
    assert_eq!(last.words, Some(words(&["pies"])));
}

#[test]
fn test_search_not_found() {
    let mut coordinator = coordinator_with(&config(), &["kot", "tok", "kto", "pies"]);

    coordinator.on_input_changed("xyz");
    coordinator.wait_for_results(TIMEOUT);

    let last = coordinator.sink().last().unwrap();
    assert_eq!(last.status, Status::NotFound);
    assert_eq!(last.message, "No word found.");
    assert_eq!(last.words, Some(Vec::new()));
}

#[test]
fn test_wildcard_search() {
    let mut coordinator = coordinator_with(&config(), &["kot", "kop", "koc"]);

    coordinator.on_input_changed("ko ");
    coordinator.wait_for_results(TIMEOUT);

    let last = coordinator.sink().last().unwrap();
    assert_eq!(last.status, Status::Found);
    assert_eq!(last.words, Some(words(&["koc", "kop", "kot"])));
}

#[test]
fn test_two_wildcards_rejected() {
    let mut coordinator = coordinator_with(&config(), &["kot"]);

    let outcome = coordinator.on_input_changed("a  b");
    assert_eq!(
        outcome,
        InputOutcome::Rejected {
            corrected: "a b".to_string()
        }
    );
    assert_eq!(coordinator.in_flight(), 0);

    let updates = coordinator.sink();
    assert_eq!(statuses(updates), vec![Status::InputWarning]);
    assert_eq!(updates[0].message, "Cannot enter more than one space!");
    assert_eq!(updates[0].words, None);
}

#[test]
fn test_empty_input_clears() {
    let mut coordinator = coordinator_with(&config(), &["kot", "tok", "pies"]);
    coordinator.index().narrow(|w| w == "pies");

    let outcome = coordinator.on_input_changed("123");
    assert_eq!(outcome, InputOutcome::Cleared);
    assert_eq!(coordinator.in_flight(), 0);
    assert_eq!(coordinator.index().len(), 3);

    let updates = coordinator.sink();
    assert_eq!(statuses(updates), vec![Status::Cleared]);
    assert_eq!(updates[0].message, "");
    assert_eq!(updates[0].words, Some(Vec::new()));
}

#[test]
fn test_reset_then_same_search() {
    let mut coordinator = coordinator_with(&config(), &["kot", "tok", "kto", "pies"]);

    coordinator.on_input_changed("kot");
    coordinator.wait_for_results(TIMEOUT);
    let before = coordinator.sink().last().unwrap().words.clone();

    coordinator.on_input_changed("");
    coordinator.on_input_changed("kot");
    coordinator.wait_for_results(TIMEOUT);
    let after = coordinator.sink().last().unwrap().words.clone();

    assert_eq!(before, after);
}

#[test]
fn test_clear_discards_in_flight_results() {
    let mut coordinator = coordinator_with(&config(), &["kot", "tok"]);

    coordinator.on_input_changed("kot");
    coordinator.clear();
    coordinator.wait_for_results(TIMEOUT);

    assert_eq!(coordinator.in_flight(), 0);
    assert_eq!(
        statuses(coordinator.sink()),
        vec![Status::Searching, Status::Cleared]
    );
}

#[test]
fn test_last_writer_wins_delivers_after_clear() {
    let config = config().with_delivery(DeliveryPolicy::LastWriterWins);
    let mut coordinator = coordinator_with(&config, &["kot", "tok"]);

    coordinator.on_input_changed("kot");
    coordinator.clear();
    assert_eq!(coordinator.wait_for_results(TIMEOUT), 1);

    assert_eq!(
        statuses(coordinator.sink()),
        vec![Status::Searching, Status::Cleared, Status::Found]
    );
}

#[test]
fn test_newest_search_is_shown_last() {
    let mut coordinator = coordinator_with(&config(), &["kot", "tok", "pies", "psie"]);

    assert_eq!(
        coordinator.on_input_changed("kot"),
        InputOutcome::Dispatched { sequence: 1 }
    );
    assert_eq!(
        coordinator.on_input_changed("pies"),
        InputOutcome::Dispatched { sequence: 2 }
    );
    coordinator.wait_for_results(TIMEOUT);
    assert_eq!(coordinator.in_flight(), 0);

    let delivered: Vec<_> = coordinator
        .sink()
        .iter()
        .filter(|u| u.status == Status::Found)
        .collect();
    let last = delivered.last().unwrap();
    assert_eq!(last.sequence, Some(2));
    assert_eq!(last.words, Some(words(&["pies", "psie"])));
    // Sequence numbers reach the display in increasing order only.
    assert!(delivered.windows(2).all(|w| w[0].sequence < w[1].sequence));
}

#[test]
fn test_pump_without_work() {
    let mut coordinator = coordinator_with(&config(), &["kot"]);
    assert_eq!(coordinator.pump(), 0);
    assert_eq!(coordinator.wait_for_results(TIMEOUT), 0);
    assert!(coordinator.sink().is_empty());
}

#[test]
fn test_pump_delivers_finished_searches() {
    let mut coordinator = coordinator_with(&config(), &["kot", "tok"]);
    coordinator.on_input_changed("otk");

    let deadline = std::time::Instant::now() + TIMEOUT;
    while coordinator.in_flight() > 0 && std::time::Instant::now() < deadline {
        coordinator.pump();
        std::thread::sleep(Duration::from_millis(5));
    }

    let last = coordinator.sink().last().unwrap();
    assert_eq!(last.words, Some(words(&["kot", "tok"])));
}

#[test]
fn test_polish_messages() {
    let config = config().with_language(Language::Polish);
    let mut coordinator = coordinator_with(&config, &["kot"]);

    coordinator.on_input_changed("kot");
    coordinator.wait_for_results(TIMEOUT);
    coordinator.on_input_changed("ab  ");

    let messages: Vec<_> = coordinator.sink().iter().map(|u| u.message).collect();
    assert_eq!(
        messages,
        vec![
            "Szukam...",
            "Oto pasujące słowa:",
            "Nie można wprowadzać więcej niż jednej spacji!"
        ]
    );
}

#[test]
fn test_closure_sink() {
    let mut seen = Vec::new();
    {
        let index = Arc::new(WordIndex::new(words(&["kot"])));
        let mut coordinator =
            SearchCoordinator::new(&config(), index, |u: DisplayUpdate| seen.push(u.status))
                .unwrap();
        coordinator.on_input_changed("tok");
        coordinator.wait_for_results(TIMEOUT);
    }
    assert_eq!(seen, vec![Status::Searching, Status::Found]);
}
