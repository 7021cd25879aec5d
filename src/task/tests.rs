use super::*;

fn sample() -> Vec<Task> {
    vec![
        Task::new(1, "Buy milk"),
        Task {
            id: 2,
            text: "Walk dog".to_string(),
            completed: true,
        },
        Task::new(3, "Call mom"),
    ]
}

#[test]
fn test_append_to_empty() {
    let mut tasks = Vec::new();
    let id = append(&mut tasks, "Buy milk", 1_700_000_000_000).unwrap().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, id);
    assert_eq!(tasks[0].text, "Buy milk");
    assert!(!tasks[0].completed);
}

#[test]
fn test_append_trims_text() {
    let mut tasks = Vec::new();
    append(&mut tasks, "  Buy milk \n", 10).unwrap();
    assert_eq!(tasks[0].text, "Buy milk");
}

#[test]
fn test_append_whitespace_only_is_noop() {
    let mut tasks = sample();
    assert_eq!(append(&mut tasks, "   ", 10), Ok(None));
    assert_eq!(append(&mut tasks, "", 10), Ok(None));
    assert_eq!(tasks, sample());
}

#[test]
fn test_append_goes_to_end() {
    let mut tasks = sample();
    append(&mut tasks, "Last", 100).unwrap();
    assert_eq!(tasks.last().unwrap().text, "Last");
    assert_eq!(tasks.len(), 4);
}

#[test]
fn test_next_id_uses_clock() {
    assert_eq!(next_id(&[], 42), Ok(42));
    assert_eq!(next_id(&sample(), 500), Ok(500));
}

#[test]
fn test_next_id_same_millisecond_stays_unique() {
    let mut tasks = Vec::new();
    let a = append(&mut tasks, "first", 1000).unwrap().unwrap();
    let b = append(&mut tasks, "second", 1000).unwrap().unwrap();
    let c = append(&mut tasks, "third", 999).unwrap().unwrap();
    assert_eq!(a, 1000);
    assert_eq!(b, 1001);
    assert_eq!(c, 1002);
}

#[test]
fn test_next_id_at_max_is_an_error() {
    let mut tasks = vec![Task::new(i64::MAX, "x")];
    assert_eq!(next_id(&tasks, 1000), Err(IdsExhausted { max: i64::MAX }));
    assert_eq!(append(&mut tasks, "y", 1000), Err(IdsExhausted { max: i64::MAX }));
    assert_eq!(tasks.len(), 1);
}

#[test]
fn test_append_blank_at_max_is_noop() {
    let mut tasks = vec![Task::new(i64::MAX, "x")];
    assert_eq!(append(&mut tasks, "  ", 1000), Ok(None));
}

#[test]
fn test_toggle_twice_restores() {
    let mut tasks = sample();
    assert!(toggle(&mut tasks, 1));
    assert!(tasks[0].completed);
    assert!(toggle(&mut tasks, 1));
    assert!(!tasks[0].completed);
}

#[test]
fn test_toggle_unknown_id() {
    let mut tasks = sample();
    assert!(!toggle(&mut tasks, 99));
    assert_eq!(tasks, sample());
}

#[test]
fn test_replace_text_trims() {
    let mut tasks = sample();
    assert!(replace_text(&mut tasks, 1, "  Buy bread  "));
    assert_eq!(tasks[0].text, "Buy bread");
}

#[test]
fn test_replace_text_blank_keeps_original() {
    let mut tasks = sample();
    assert!(!replace_text(&mut tasks, 1, ""));
    assert!(!replace_text(&mut tasks, 1, "   "));
    assert_eq!(tasks[0].text, "Buy milk");
}

#[test]
fn test_replace_text_unknown_id() {
    let mut tasks = sample();
    assert!(!replace_text(&mut tasks, 7, "anything"));
    assert_eq!(tasks, sample());
}

#[test]
fn test_remove_keeps_order() {
    let mut tasks = sample();
    assert!(remove(&mut tasks, 2));
    let ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_remove_unknown_id() {
    let mut tasks = sample();
    assert!(!remove(&mut tasks, 42));
    assert_eq!(tasks, sample());
}

#[test]
fn test_filter_active_and_completed() {
    let tasks = vec![
        Task::new(1, "open"),
        Task {
            id: 2,
            text: "done".to_string(),
            completed: true,
        },
    ];

    let active = filtered(&tasks, Filter::Active);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, 1);

    let completed = filtered(&tasks, Filter::Completed);
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, 2);

    let all: Vec<i64> = filtered(&tasks, Filter::All).iter().map(|t| t.id).collect();
    assert_eq!(all, vec![1, 2]);
}

#[test]
fn test_filter_parse() {
    assert_eq!(Filter::parse("all"), Some(Filter::All));
    assert_eq!(Filter::parse("ACTIVE"), Some(Filter::Active));
    assert_eq!(Filter::parse(" completed "), Some(Filter::Completed));
    assert_eq!(Filter::parse("done"), None);
}

#[test]
fn test_filter_empty_messages() {
    assert_eq!(Filter::All.empty_message(), "No tasks yet!");
    assert_eq!(Filter::Active.empty_message(), "No active tasks!");
    assert_eq!(Filter::Completed.empty_message(), "No completed tasks!");
}

#[test]
fn test_filter_next_cycles() {
    assert_eq!(Filter::All.next(), Filter::Active);
    assert_eq!(Filter::Active.next(), Filter::Completed);
    assert_eq!(Filter::Completed.next(), Filter::All);
}

#[test]
fn test_counts() {
    let tasks = sample();
    assert_eq!(active_count(&tasks), 2);
    assert_eq!(completed_count(&tasks), 1);
}

#[test]
fn test_task_json_shape() {
    let task = Task::new(5, "Buy milk");
    let json = serde_json::to_string(&task).unwrap();
    assert_eq!(json, r#"{"id":5,"text":"Buy milk","completed":false}"#);
}
