use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Interval;
use taskdeck_core::datetime::today_local;
use taskdeck_core::gateway::{self, ApiRequest};
use taskdeck_core::pomodoro::{PomodoroTimer, StopOutcome, Tick};
use taskdeck_core::store::{SortMode, TaskStore};
use taskdeck_core::view::{self, TaskRow};
use wasm_bindgen_futures::spawn_local;
use yew::{
    Callback, Html, UseStateHandle, function_component, html, use_effect_with, use_mut_ref,
    use_state,
};

use super::storage::{load_theme_mode, save_theme_mode};
use super::{LOAD_ERROR_MESSAGE, alert, prompt};
use crate::api;
use crate::components::{
    PomodoroPanel, PriorityChartPanel, SummaryLine, TaskForm, TaskList, Toolbar,
};
use crate::notify;

#[function_component(App)]
pub fn app() -> Html {
    let store = use_state(TaskStore::new);
    let search = use_state(String::new);
    let sort = use_state(SortMode::default);
    let theme = use_state(load_theme_mode);
    let load_failed = use_state(|| false);
    let notice = use_state(|| None::<String>);
    let refresh_tick = use_state(|| 0_u64);

    // The timer and its interval handle live outside the render cycle; the
    // display string and running flag are what the markup reacts to.
    let timer = use_mut_ref(PomodoroTimer::new);
    let interval = use_mut_ref(|| None::<Interval>);
    let pom_display = use_state(|| PomodoroTimer::new().display());
    let pom_running = use_state(|| false);

    {
        use_effect_with(*theme, |theme| {
            save_theme_mode(*theme);
            if let Some(body) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.body())
            {
                body.set_class_name(theme.body_class());
            }
            || ()
        });
    }

    {
        let store = store.clone();
        let load_failed = load_failed.clone();
        use_effect_with(*refresh_tick, move |_| {
            spawn_local(async move {
                match api::fetch_tasks().await {
                    Ok(tasks) => {
                        let mut next = (*store).clone();
                        next.replace(tasks);
                        store.set(next);
                        load_failed.set(false);
                    }
                    Err(error) => {
                        // No retry; the user recovers by clicking refresh.
                        tracing::error!(%error, "failed to load tasks");
                        store.set(TaskStore::new());
                        load_failed.set(true);
                    }
                }
            });
            || ()
        });
    }

    let refresh = {
        let refresh_tick = refresh_tick.clone();
        Callback::from(move |_: ()| refresh_tick.set(*refresh_tick + 1))
    };

    // Every mutation is followed by a full list refresh so the view
    // converges on backend state even when the call itself failed.
    let submit_and_refresh = {
        let refresh = refresh.clone();
        let notice = notice.clone();
        Callback::from(move |request: ApiRequest| {
            let refresh = refresh.clone();
            let notice = notice.clone();
            spawn_local(async move {
                if let Err(error) = api::submit(request).await {
                    tracing::error!(%error, "mutation failed");
                    notice.set(Some(format!("Request failed: {error}")));
                }
                refresh.emit(());
            });
        })
    };

    let on_toggle = {
        let submit = submit_and_refresh.clone();
        Callback::from(move |id: String| submit.emit(gateway::toggle_complete(&id)))
    };

    let on_delete = {
        let submit = submit_and_refresh.clone();
        Callback::from(move |id: String| submit.emit(gateway::delete_task(&id)))
    };

    let on_edit = {
        let submit = submit_and_refresh.clone();
        Callback::from(move |row: TaskRow| {
            let Some(title) = prompt("Edit title:", &row.title) else {
                return;
            };
            let Some(due) = prompt("Edit due (YYYY-MM-DD):", &row.due) else {
                return;
            };
            let Some(tags) = prompt("Edit tags (comma separated):", &row.tags) else {
                return;
            };

            match gateway::edit_task(&row.id, &title, &due, &tags) {
                Ok(request) => submit.emit(request),
                Err(error) => alert(&error.to_string()),
            }
        })
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |query: String| search.set(query))
    };

    let on_sort = {
        let sort = sort.clone();
        Callback::from(move |mode: SortMode| sort.set(mode))
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| theme.set((*theme).toggled()))
    };

    let on_pom_start = {
        let timer = timer.clone();
        let interval = interval.clone();
        let pom_display = pom_display.clone();
        let pom_running = pom_running.clone();
        let notice = notice.clone();
        let refresh = refresh.clone();
        Callback::from(move |task_id: String| {
            // Validation happens before any backend call; the Start button
            // is also disabled while a session runs.
            let request = match timer.borrow().begin(&task_id) {
                Ok(request) => request,
                Err(error) => {
                    alert(&error.to_string());
                    return;
                }
            };

            let timer = timer.clone();
            let interval = interval.clone();
            let pom_display = pom_display.clone();
            let pom_running = pom_running.clone();
            let notice = notice.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match api::start_session(request).await {
                    Ok(session_id) => {
                        timer.borrow_mut().session_started(&task_id, &session_id);
                        pom_display.set(timer.borrow().display());
                        pom_running.set(true);

                        let handle = {
                            let timer = timer.clone();
                            let interval = interval.clone();
                            let pom_display = pom_display.clone();
                            let pom_running = pom_running.clone();
                            let notice = notice.clone();
                            let refresh = refresh.clone();
                            Interval::new(1_000, move || {
                                let tick = timer.borrow_mut().tick();
                                match tick {
                                    Tick::Running(_) => {
                                        pom_display.set(timer.borrow().display());
                                    }
                                    Tick::Finished(outcome) => complete_session(
                                        outcome,
                                        &timer,
                                        &interval,
                                        &pom_display,
                                        &pom_running,
                                        &notice,
                                        &refresh,
                                    ),
                                    Tick::Ignored => {}
                                }
                            })
                        };
                        *interval.borrow_mut() = Some(handle);
                    }
                    Err(error) => {
                        tracing::error!(%error, "pomodoro start failed");
                        notice.set(Some(format!("Request failed: {error}")));
                    }
                }
            });
        })
    };

    let on_pom_stop = {
        let timer = timer.clone();
        let interval = interval.clone();
        let pom_display = pom_display.clone();
        let pom_running = pom_running.clone();
        let notice = notice.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: ()| {
            let outcome = timer.borrow_mut().stop();
            // Stop while idle is a no-op.
            if let Some(outcome) = outcome {
                complete_session(
                    outcome,
                    &timer,
                    &interval,
                    &pom_display,
                    &pom_running,
                    &notice,
                    &refresh,
                );
            }
        })
    };

    let dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |_: web_sys::MouseEvent| notice.set(None))
    };

    let page = view::render(&store, search.as_str(), *sort, today_local());

    html! {
        <div class="container">
            <h1>{ "taskdeck" }</h1>
            <Toolbar
                query={(*search).clone()}
                sort={*sort}
                theme={*theme}
                on_search={on_search}
                on_sort={on_sort}
                on_refresh={refresh.clone()}
                on_toggle_theme={on_toggle_theme}
            />
            <TaskForm on_add={submit_and_refresh.clone()} />
            {
                if let Some(message) = (*notice).clone() {
                    html! { <div class="notice" onclick={dismiss_notice}>{ message }</div> }
                } else {
                    html! {}
                }
            }
            {
                if *load_failed {
                    html! { <p class="load-error">{ LOAD_ERROR_MESSAGE }</p> }
                } else {
                    html! {
                        <>
                            <SummaryLine summary={page.list.summary().to_string()} />
                            <TaskList
                                view={page.list.clone()}
                                on_toggle={on_toggle}
                                on_edit={on_edit}
                                on_delete={on_delete}
                            />
                        </>
                    }
                }
            }
            <PriorityChartPanel chart={page.chart} />
            <PomodoroPanel
                options={page.picker}
                display={(*pom_display).clone()}
                running={*pom_running}
                on_start={on_pom_start}
                on_stop={on_pom_stop}
            />
        </div>
    }
}

/// Shared tail of both stop paths (the finishing tick and the Stop button):
/// cancel the cadence, reset the display, then stop the session on the
/// backend, notify the user, and refresh the list.
fn complete_session(
    outcome: StopOutcome,
    timer: &Rc<RefCell<PomodoroTimer>>,
    interval: &Rc<RefCell<Option<Interval>>>,
    pom_display: &UseStateHandle<String>,
    pom_running: &UseStateHandle<bool>,
    notice: &UseStateHandle<Option<String>>,
    refresh: &Callback<()>,
) {
    interval.borrow_mut().take();
    pom_running.set(false);
    pom_display.set(timer.borrow().display());

    let notice = notice.clone();
    let refresh = refresh.clone();
    spawn_local(async move {
        if let Err(error) = api::submit(outcome.request).await {
            tracing::error!(%error, "pomodoro stop failed");
            notice.set(Some(format!("Request failed: {error}")));
        }
        notify::notify(outcome.notice.title, outcome.notice.body);
        refresh.emit(());
    });
}
