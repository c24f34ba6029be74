use taskdeck_core::view::{ListView, TaskRow};
use yew::{Callback, Html, Properties, function_component, html};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
    pub view: ListView,
    pub on_toggle: Callback<String>,
    pub on_edit: Callback<TaskRow>,
    pub on_delete: Callback<String>,
}

#[function_component(TaskList)]
pub fn task_list(props: &TaskListProps) -> Html {
    match &props.view {
        ListView::Empty { message, .. } => html! {
            <div class="panel list">
                <p>{ *message }</p>
            </div>
        },
        ListView::Rows { rows, .. } => html! {
            <div class="panel list">
                {
                    for rows.iter().cloned().map(|row| html! {
                        <TaskListRow
                            row={row}
                            on_toggle={props.on_toggle.clone()}
                            on_edit={props.on_edit.clone()}
                            on_delete={props.on_delete.clone()}
                        />
                    })
                }
            </div>
        },
    }
}
