use taskdeck_core::gateway::{self, ApiRequest};
use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use yew::{Callback, Html, Properties, TargetCast, UseStateHandle, function_component, html, use_state};

use crate::app::alert;

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
    /// Receives the validated add-task request; the handler submits it and
    /// refreshes the list.
    pub on_add: Callback<ApiRequest>,
}

#[function_component(TaskForm)]
pub fn task_form(props: &TaskFormProps) -> Html {
    let title = use_state(String::new);
    let due = use_state(String::new);
    let tags = use_state(String::new);

    let onsubmit = {
        let title = title.clone();
        let due = due.clone();
        let tags = tags.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match gateway::add_task(title.as_str(), due.as_str(), tags.as_str()) {
                Ok(request) => {
                    on_add.emit(request);
                    title.set(String::new());
                    due.set(String::new());
                    tags.set(String::new());
                }
                // Empty title: alert locally, nothing was sent.
                Err(error) => alert(&error.to_string()),
            }
        })
    };

    html! {
        <form class="task-form" onsubmit={onsubmit}>
            <input placeholder="Task title" value={(*title).clone()} oninput={bind(title.clone())} />
            <input type="date" value={(*due).clone()} oninput={bind(due.clone())} />
            <input placeholder="tags (comma separated)" value={(*tags).clone()} oninput={bind(tags.clone())} />
            <button type="submit">{ "Add" }</button>
        </form>
    }
}

fn bind(value: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        value.set(input.value());
    })
}
