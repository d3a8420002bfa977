use r_storelib::state::State;

use super::*;

fn todo(id: u64, text: &str, completed: bool) -> Todo {
    Todo {
        id,
        text: text.to_string(),
        completed,
    }
}

fn setup(filter: VisibilityFilter) -> State {
    State::new()
        .with(
            TODOS_SLICE,
            vec![
                todo(1, "buy milk", true),
                todo(2, "walk dog", false),
                todo(3, "write docs", false),
            ],
        )
        .with(VISIBILITY_FILTER_SLICE, filter)
}

#[test]
fn test_select_count() {
    let state = State::new().with(COUNTER_SLICE, CounterState { value: 9 });
    assert_eq!(select_count(&state), 9);
    assert_eq!(select_count(&State::new()), 0);
}

#[test]
fn test_visible_todos_show_all() {
    let state = setup(VisibilityFilter::ShowAll);
    let ids: Vec<u64> = visible_todos(&state).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_visible_todos_show_completed() {
    let state = setup(VisibilityFilter::ShowCompleted);
    let ids: Vec<u64> = visible_todos(&state).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn test_visible_todos_show_active() {
    let state = setup(VisibilityFilter::ShowActive);
    let ids: Vec<u64> = visible_todos(&state).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn test_visible_todos_empty() {
    assert!(visible_todos(&State::new()).is_empty());
    assert_eq!(
        select_visibility_filter(&State::new()),
        VisibilityFilter::ShowAll
    );
}

#[test]
fn test_active_todo_count() {
    assert_eq!(active_todo_count(&setup(VisibilityFilter::ShowAll)), 2);
    assert_eq!(active_todo_count(&State::new()), 0);
}

#[test]
fn test_render_visible_todos() {
    let state = setup(VisibilityFilter::ShowAll);
    assert_eq!(
        render_visible_todos(&state),
        "[x] 1: buy milk\n[ ] 2: walk dog\n[ ] 3: write docs"
    );
}
