//! Pure render pass: snapshot + search query + sort mode + today's date in,
//! declarative page description out. The UI layer only binds the result to
//! markup, so everything about what gets displayed is testable here.

use chrono::NaiveDate;
use tracing::debug;

use crate::chart::PriorityChart;
use crate::datetime::{DaysLeft, days_left};
use crate::store::{SortMode, TaskStore};
use crate::task::Task;

pub const EMPTY_MESSAGE: &str = "No tasks yet.";

/// One displayed task with its derived fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub tags: String,
    pub due: String,
    pub priority: String,
    pub completed: bool,
    pub days_left: DaysLeft,
    pub due_soon: bool,
}

/// The list section: placeholder when nothing survives the filter,
/// otherwise the rows plus their summary line.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Empty {
        message: &'static str,
        summary: String,
    },
    Rows {
        rows: Vec<TaskRow>,
        summary: String,
    },
}

impl ListView {
    pub fn summary(&self) -> &str {
        match self {
            ListView::Empty { summary, .. } => summary,
            ListView::Rows { summary, .. } => summary,
        }
    }
}

/// One entry of the Pomodoro task selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub list: ListView,
    pub chart: PriorityChart,
    pub picker: Vec<PickerOption>,
}

/// Build the whole page description. Chart and Pomodoro picker always
/// reflect the full snapshot; search narrows only the list section.
pub fn render(store: &TaskStore, query: &str, sort: SortMode, today: NaiveDate) -> PageView {
    let chart = PriorityChart::from_tasks(store.tasks());
    let picker = store
        .tasks()
        .iter()
        .map(|task| PickerOption {
            id: task.id.clone(),
            label: format!("{} ({})", task.title, task.due),
        })
        .collect();

    let shown = store.visible(query, sort);
    let list = if shown.is_empty() {
        ListView::Empty {
            message: EMPTY_MESSAGE,
            summary: "0 tasks".to_string(),
        }
    } else {
        let total = shown.len();
        let completed = shown.iter().filter(|task| task.completed).count();
        let rows: Vec<TaskRow> = shown.into_iter().map(|task| row(task, today)).collect();
        ListView::Rows {
            rows,
            summary: format!("{total} task(s) — {completed} completed"),
        }
    };

    debug!(
        snapshot = store.len(),
        summary = list.summary(),
        "rendered page view"
    );
    PageView {
        list,
        chart,
        picker,
    }
}

fn row(task: Task, today: NaiveDate) -> TaskRow {
    let days = days_left(&task.due, today);
    TaskRow {
        due_soon: days.is_due_soon(),
        days_left: days,
        id: task.id,
        title: task.title,
        tags: task.tags,
        due: task.due,
        priority: task.priority,
        completed: task.completed,
    }
}
