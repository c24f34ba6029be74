use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use taskdeck_core::gateway::{self, GatewayError};
use taskdeck_core::pomodoro::{PomodoroTimer, SESSION_SECONDS, Tick};
use taskdeck_core::store::{SortMode, TaskStore};
use taskdeck_core::view::{self, ListView};

#[test]
fn fetch_render_and_focus_session_flow() {
    // Submitting with an empty title never produces a request.
    assert_eq!(
        gateway::add_task("", "2025-01-01", ""),
        Err(GatewayError::Validation("Enter a title"))
    );

    // A valid add is exactly one POST carrying the submitted fields.
    let add = gateway::add_task("Write report", "2025-01-01", "").expect("valid add");
    assert_eq!(add.path, "/addTask");
    assert_eq!(add.form_body(), "title=Write%20report&due=2025%2D01%2D01&tags=");

    // The follow-up refresh replaces the snapshot wholesale.
    let body = r#"[
        {"id":"1","title":"Write report","due":"2025-01-01","tags":"work","priority":"High","completed":false},
        {"id":"2","title":"Stretch","due":"","tags":"health","priority":"Low","completed":true}
    ]"#;
    let mut store = TaskStore::new();
    store.replace(gateway::parse_tasks(body).expect("parse tasks"));
    assert_eq!(store.len(), 2);

    let today = NaiveDate::from_ymd_opt(2024, 12, 30).expect("valid date");
    let page = view::render(&store, "work", SortMode::Due, today);

    let ListView::Rows { rows, summary } = page.list else {
        panic!("expected one matching row");
    };
    assert_eq!(summary, "1 task(s) — 0 completed");
    assert_eq!(rows[0].title, "Write report");
    assert!(rows[0].due_soon);

    // Chart and picker still see both tasks despite the search.
    assert_eq!((page.chart.high, page.chart.low), (1, 1));
    assert_eq!(page.picker.len(), 2);

    // Run a full focus session against the first task.
    let mut timer = PomodoroTimer::new();
    let start = timer.begin(&page.picker[0].id).expect("start accepted");
    assert_eq!(start.form_body(), "taskId=1");

    let session_id = gateway::parse_session_id("sess-9\n").expect("session id");
    timer.session_started(&page.picker[0].id, &session_id);
    assert_eq!(timer.display(), "25:00");

    let mut stops = 0;
    for _ in 0..SESSION_SECONDS {
        if let Tick::Finished(outcome) = timer.tick() {
            stops += 1;
            assert_eq!(outcome.request.form_body(), "sessionId=sess%2D9");
            assert_eq!(outcome.notice.title, "Pomodoro finished");
        }
    }
    assert_eq!(stops, 1);
    assert!(!timer.is_running());
    assert_eq!(timer.stop(), None);
}
