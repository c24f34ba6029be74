use taskdeck_core::task::Priority;
use taskdeck_core::view::TaskRow;
use web_sys::{Event, MouseEvent};
use yew::{Callback, Html, Properties, function_component, html};

use crate::app::confirm;

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
    pub row: TaskRow,
    pub on_toggle: Callback<String>,
    pub on_edit: Callback<TaskRow>,
    pub on_delete: Callback<String>,
}

#[function_component(TaskListRow)]
pub fn task_list_row(props: &TaskListRowProps) -> Html {
    let row = &props.row;

    // Anything that is not High or Medium renders as the low band.
    let class = match Priority::parse(&row.priority) {
        Some(Priority::High) => "task priority-high",
        Some(Priority::Medium) => "task priority-medium",
        _ => "task priority-low",
    };

    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = row.id.clone();
        Callback::from(move |_: Event| on_toggle.emit(id.clone()))
    };

    let on_edit = {
        let on_edit = props.on_edit.clone();
        let row = row.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(row.clone()))
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = row.id.clone();
        Callback::from(move |_: MouseEvent| {
            if confirm("Delete this task?") {
                on_delete.emit(id.clone());
            }
        })
    };

    let left_class = if row.completed {
        "task-left completed"
    } else {
        "task-left"
    };

    html! {
        <div class={class}>
            <div class={left_class}>
                <div>
                    <strong>{ &row.title }</strong>
                    {
                        if row.tags.is_empty() {
                            html! {}
                        } else {
                            html! { <small>{ format!(" · {}", row.tags) }</small> }
                        }
                    }
                </div>
                <div class="meta">
                    { format!("Due: {} • {} day(s) left • Priority: {}", row.due, row.days_left, row.priority) }
                    {
                        if row.due_soon {
                            html! { <span class="badge-soon">{ "Due soon" }</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
            <div class="task-actions">
                <input type="checkbox" checked={row.completed} onchange={on_toggle} />
                <button class="small-btn" onclick={on_edit}>{ "Edit" }</button>
                <button class="delete-btn" onclick={on_delete}>{ "Delete" }</button>
            </div>
        </div>
    }
}
