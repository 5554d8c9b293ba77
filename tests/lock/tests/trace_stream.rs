//! The event stream is pulled lazily and ends with exactly one terminal event.

use pathfinder_kernel::grid::{Cell, Grid};
use pathfinder_search::{run, Algorithm, SearchPolicy, TraceEvent, TraversalState};

fn is_terminal(event: &TraceEvent) -> bool {
    matches!(event, TraceEvent::PathFound(_) | TraceEvent::Failed(_))
}

#[test]
fn taking_a_prefix_does_not_finish_the_traversal() {
    let grid = Grid::open(20, 20);
    for algorithm in Algorithm::ALL {
        let mut traversal = run(
            algorithm,
            &grid,
            Cell::new(0, 0),
            Cell::new(19, 19),
            &SearchPolicy::default(),
        )
        .unwrap();
        assert_eq!(traversal.state(), TraversalState::Ready, "{algorithm}");
        let prefix: Vec<TraceEvent> = traversal.by_ref().take(3).collect();
        assert_eq!(prefix.len(), 3);
        assert!(!prefix.iter().any(is_terminal), "{algorithm}");
        assert_eq!(traversal.state(), TraversalState::Running, "{algorithm}");
        assert!(traversal.outcome().is_none());
        assert!(traversal.stats().expansions <= 3, "{algorithm}");
    }
}

#[test]
fn exactly_one_terminal_event_then_none() {
    let grid = Grid::from_ascii(&["....", ".##.", "....", "#..."]).unwrap();
    let targets = [Cell::new(3, 3), Cell::new(3, 0), Cell::new(9, 9)];
    for algorithm in Algorithm::ALL {
        for target in targets {
            let mut traversal =
                run(algorithm, &grid, Cell::new(0, 0), target, &SearchPolicy::default()).unwrap();
            let events: Vec<TraceEvent> = traversal.by_ref().collect();
            let terminals = events.iter().filter(|e| is_terminal(e)).count();
            assert_eq!(terminals, 1, "{algorithm} -> {target}");
            assert!(is_terminal(events.last().unwrap()));
            assert!(traversal.state().is_terminal());
            assert_eq!(traversal.next(), None);
            assert_eq!(traversal.next(), None);
            assert_eq!(
                traversal.outcome().map(|o| o.to_event()).as_ref(),
                events.last()
            );
        }
    }
}

#[test]
fn every_expansion_was_discovered_first() {
    let grid = Grid::from_ascii(&[".....", ".#.#.", ".....", "##.#."]).unwrap();
    for algorithm in Algorithm::ALL {
        let traversal = run(
            algorithm,
            &grid,
            Cell::new(0, 0),
            Cell::new(3, 4),
            &SearchPolicy::default(),
        )
        .unwrap();
        let mut seen = std::collections::BTreeSet::new();
        for event in traversal {
            match event {
                TraceEvent::Discovered(cell) => {
                    seen.insert(cell);
                }
                TraceEvent::Expanded(cell) => {
                    assert!(seen.contains(&cell), "{algorithm} expanded {cell} unseen");
                }
                _ => {}
            }
        }
    }
}
