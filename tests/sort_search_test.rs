use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use roster::{
    exact_match, is_sorted, partial_match, sort_roster, Employee, KeyOrder, NewEmployee, RosterError, RosterSearch,
    RosterStore, SearchMode, SortedRoster,
};

const FIRST: [&str; 6] = ["Amy", "ben", "Carla", "dev", "Erin", "amy"];
const LAST: [&str; 5] = ["Lee", "okoro", "Mendes", "LEE", ""];

fn random_store(rng: &mut StdRng, size: usize) -> RosterStore {
    let mut store = RosterStore::new();
    for _ in 0..size {
        let first = FIRST.choose(rng).copied().unwrap_or_default();
        let last = LAST.choose(rng).copied().unwrap_or_default();
        store.add_employee(NewEmployee::new(first, last));
    }
    store
}

#[test]
fn test_concrete_tie_scenario() {
    let mut store = RosterStore::new();
    let amy = store.add_employee(NewEmployee::new("Amy", "Lee"));
    let ben = store.add_employee(NewEmployee::new("Ben", "Lee"));
    let amy_lower = store.add_employee(NewEmployee::new("amy", "lee"));

    let sorted = sort_roster(store.employees(), KeyOrder::LastThenFirst);
    let ids: Vec<_> = sorted.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![amy, amy_lower, ben]);
}

#[test]
fn test_sort_is_stable_and_ordered() {
    let mut rng = StdRng::seed_from_u64(42);

    for size in [0, 1, 2, 7, 64, 257] {
        let store = random_store(&mut rng, size);
        for order in [KeyOrder::LastThenFirst, KeyOrder::FirstThenLast] {
            let sorted = sort_roster(store.employees(), order);
            assert_eq!(sorted.len(), size);
            assert!(is_sorted(sorted.records(), order));

            // Equal keys keep registration order
            for pair in sorted.records().windows(2) {
                if order.key(pair[0]) == order.key(pair[1]) {
                    assert!(pair[0].id < pair[1].id);
                }
            }
        }
    }
}

#[test]
fn test_sort_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    let store = random_store(&mut rng, 100);

    let once = sort_roster(store.employees(), KeyOrder::LastThenFirst);
    let twice = sort_roster(once.iter(), KeyOrder::LastThenFirst);
    let a: Vec<_> = once.iter().map(|e| e.id).collect();
    let b: Vec<_> = twice.iter().map(|e| e.id).collect();
    assert_eq!(a, b);
}

#[test]
fn test_exact_search_finds_every_record() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut store = RosterStore::new();
    let mut names: Vec<(String, String)> = (0..200)
        .map(|i| (format!("First{}", i), format!("Last{}", rng.gen_range(0..1000) * 1000 + i)))
        .collect();
    names.shuffle(&mut rng);
    for (first, last) in &names {
        store.add_employee(NewEmployee::new(first.clone(), last.clone()));
    }

    let sorted = sort_roster(store.employees(), KeyOrder::LastThenFirst);
    for employee in store.employees() {
        let query = format!("{} {}", employee.first_name.to_uppercase(), employee.last_name);
        assert_eq!(exact_match(&sorted, &query).map(|e| e.id), Some(employee.id));
    }
    assert!(exact_match(&sorted, "Nobody Here").is_none());
}

#[test]
fn test_exact_search_requires_sorted_view() {
    let mut store = RosterStore::new();
    store.add_employee(NewEmployee::new("Zoe", "Zhu"));
    store.add_employee(NewEmployee::new("Amy", "Adams"));

    let unordered = store.employees().iter().collect();
    assert_eq!(
        SortedRoster::from_ordered(unordered, KeyOrder::LastThenFirst).unwrap_err(),
        RosterError::NotSorted(KeyOrder::LastThenFirst)
    );

    let reversed = store.employees().iter().rev().collect();
    let sorted = SortedRoster::from_ordered(reversed, KeyOrder::LastThenFirst).unwrap();
    assert_eq!(exact_match(&sorted, "zoe zhu").map(|e| e.last_name.as_str()), Some("Zhu"));
}

#[test]
fn test_partial_search_matches_substrings() {
    let mut rng = StdRng::seed_from_u64(3);
    let store = random_store(&mut rng, 80);

    let hits = partial_match(store.employees(), "lE");
    for employee in store.employees() {
        let expected = employee.first_name.to_lowercase().contains("le")
            || employee.last_name.to_lowercase().contains("le");
        assert_eq!(hits.iter().any(|h| h.id == employee.id), expected);
    }

    // Results keep input order
    assert!(hits.windows(2).all(|w| w[0].id < w[1].id));
    assert!(partial_match(store.employees(), "   ").is_empty());
}

#[test]
fn test_search_modes_share_one_entry_point() {
    let mut store = RosterStore::new();
    store.add_employee(NewEmployee::new("Amy", "Lee"));
    store.add_employee(NewEmployee::new("Ben", "Lee"));
    store.add_employee(NewEmployee::new("Carla", "Mendes"));

    let sorted = sort_roster(store.employees(), KeyOrder::FirstThenLast);
    let search = RosterSearch::new(&sorted);

    assert_eq!(search.find("Ben Lee").len(), 1);
    assert!(search.find("Lee").is_empty());
    assert_eq!(search.find_with("Lee", SearchMode::Partial).len(), 2);
    assert!(search.find_with("", SearchMode::Partial).is_empty());

    // Partial mode over the registration order, no sort required
    let records: Vec<&Employee> = store.employees().iter().collect();
    let unsorted = RosterSearch::unsorted(&records);
    let hits: Vec<_> = unsorted.find("lee").into_vec().iter().map(|e| e.id).collect();
    assert_eq!(hits, vec![records[0].id, records[1].id]);
}

#[test]
fn test_exact_search_finds_compound_and_single_part_names() {
    let mut store = RosterStore::new();
    let ana = store.add_employee(NewEmployee::new("Ana", "de Souza"));
    let zed = store.add_employee(NewEmployee::new("Zed", ""));
    let cher = store.add_employee(NewEmployee::new("", "Cher"));
    let mary = store.add_employee(NewEmployee::new("Mary  Ann", "Van der Berg"));
    store.add_employee(NewEmployee::new("Ana", "Souza"));

    for order in [KeyOrder::LastThenFirst, KeyOrder::FirstThenLast] {
        let sorted = sort_roster(store.employees(), order);

        // Every stored record is reachable from its own "first last" rendering
        for employee in store.employees() {
            let query = format!("{} {}", employee.first_name, employee.last_name);
            assert_eq!(exact_match(&sorted, &query).map(|e| e.id), Some(employee.id));
        }

        assert_eq!(exact_match(&sorted, "ana DE souza").map(|e| e.id), Some(ana));
        assert_eq!(exact_match(&sorted, "Zed").map(|e| e.id), Some(zed));
        assert_eq!(exact_match(&sorted, "cher").map(|e| e.id), Some(cher));
        assert_eq!(exact_match(&sorted, "mary ann van der berg").map(|e| e.id), Some(mary));
        assert!(exact_match(&sorted, "Ana de").is_none());
    }
}
