use tracing::debug;

use crate::task::Task;

/// How the displayed list is ordered. `None` keeps backend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    None,
    Due,
    Title,
}

impl SortMode {
    /// Stable string value for the UI select element.
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::Due => "due",
            SortMode::Title => "title",
        }
    }

    /// Unknown values fall back to `None` rather than erroring; the select
    /// is the only producer and it only emits the three known values.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "due" => SortMode::Due,
            "title" => SortMode::Title,
            _ => SortMode::None,
        }
    }
}

/// The last-fetched snapshot of the backend's task list. No persistence,
/// no incremental merge: a successful fetch replaces everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Full snapshot replacement. Nothing from the previous fetch survives.
    pub fn replace(&mut self, tasks: Vec<Task>) {
        debug!(count = tasks.len(), "replacing task snapshot");
        self.tasks = tasks;
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The list to display: case-insensitive substring filter on title or
    /// tags (empty query is the identity), then a stable sort per mode.
    pub fn visible(&self, query: &str, sort: SortMode) -> Vec<Task> {
        let needle = query.trim().to_lowercase();

        let mut shown: Vec<Task> = if needle.is_empty() {
            self.tasks.clone()
        } else {
            self.tasks
                .iter()
                .filter(|task| {
                    task.title.to_lowercase().contains(&needle)
                        || task.tags.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect()
        };

        match sort {
            SortMode::None => {}
            // Lexicographic on the raw date string; empty sorts first.
            SortMode::Due => shown.sort_by(|a, b| a.due.cmp(&b.due)),
            SortMode::Title => shown.sort_by(|a, b| a.title.cmp(&b.title)),
        }

        debug!(
            total = self.tasks.len(),
            shown = shown.len(),
            sort = sort.as_str(),
            "filter and sort pass"
        );
        shown
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{SortMode, TaskStore};
    use crate::task::Task;

    fn task(id: &str, title: &str, due: &str, tags: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            due: due.to_string(),
            tags: tags.to_string(),
            priority: "Medium".to_string(),
            completed: false,
        }
    }

    fn store() -> TaskStore {
        TaskStore::from_tasks(vec![
            task("1", "Write report", "2025-01-10", "work,writing"),
            task("2", "buy groceries", "", "errands"),
            task("3", "Call dentist", "2025-01-02", "health"),
            task("4", "Review PR", "2025-01-02", "work"),
        ])
    }

    #[test]
    fn empty_query_is_identity() {
        let shown = store().visible("", SortMode::None);
        let ids: Vec<&str> = shown.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn title_substring_retains_task() {
        let shown = store().visible("report", SortMode::None);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "1");
    }

    #[test]
    fn filter_is_case_insensitive_and_matches_tags() {
        let shown = store().visible("WORK", SortMode::None);
        let ids: Vec<&str> = shown.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn no_match_yields_empty_list() {
        assert!(store().visible("zzz-nothing", SortMode::None).is_empty());
    }

    #[test]
    fn due_sort_is_stable_with_empty_first() {
        let shown = store().visible("", SortMode::Due);
        let dues: Vec<&str> = shown.iter().map(|t| t.due.as_str()).collect();
        assert_eq!(dues, vec!["", "2025-01-02", "2025-01-02", "2025-01-10"]);
        // Tasks 3 and 4 share a due date; backend order must be preserved.
        assert_eq!(shown[1].id, "3");
        assert_eq!(shown[2].id, "4");
    }

    #[test]
    fn title_sort_is_case_sensitive_byte_order() {
        let shown = store().visible("", SortMode::Title);
        let ids: Vec<&str> = shown.iter().map(|t| t.id.as_str()).collect();
        // Uppercase titles sort before lowercase ones.
        assert_eq!(ids, vec!["3", "4", "1", "2"]);
    }

    #[test]
    fn replace_is_a_full_snapshot_swap() {
        let mut store = store();
        store.replace(vec![task("9", "Only task", "", "")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].id, "9");
    }

    #[test]
    fn sort_mode_round_trips_through_strings() {
        for mode in [SortMode::None, SortMode::Due, SortMode::Title] {
            assert_eq!(SortMode::parse(mode.as_str()), mode);
        }
        assert_eq!(SortMode::parse("garbage"), SortMode::None);
    }
}
