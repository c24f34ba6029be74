mod pomodoro_panel;
mod priority_chart;
mod summary_line;
mod task_form;
mod task_list;
mod task_list_row;
mod toolbar;

pub use pomodoro_panel::PomodoroPanel;
pub use priority_chart::PriorityChartPanel;
pub use summary_line::SummaryLine;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
pub use toolbar::Toolbar;
