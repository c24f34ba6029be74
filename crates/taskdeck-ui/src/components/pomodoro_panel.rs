use taskdeck_core::view::PickerOption;
use web_sys::{Event, HtmlSelectElement, MouseEvent};
use yew::{Callback, Html, Properties, TargetCast, function_component, html, use_state};

#[derive(Properties, PartialEq)]
pub struct PomodoroPanelProps {
    /// Built from the unfiltered snapshot, like the chart.
    pub options: Vec<PickerOption>,
    /// `MM:SS` remaining, straight from the timer.
    pub display: String,
    pub running: bool,
    pub on_start: Callback<String>,
    pub on_stop: Callback<()>,
}

#[function_component(PomodoroPanel)]
pub fn pomodoro_panel(props: &PomodoroPanelProps) -> Html {
    let selected = use_state(String::new);

    // A select defaults to its first entry; mirror that until the user
    // picks explicitly, and fall back when the picked task disappeared
    // from the snapshot.
    let effective = if !selected.is_empty()
        && props.options.iter().any(|option| option.id == *selected)
    {
        (*selected).clone()
    } else {
        props
            .options
            .first()
            .map(|option| option.id.clone())
            .unwrap_or_default()
    };

    let onchange = {
        let selected = selected.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            selected.set(select.value());
        })
    };

    let on_start = {
        let on_start = props.on_start.clone();
        let effective = effective.clone();
        Callback::from(move |_: MouseEvent| on_start.emit(effective.clone()))
    };

    let on_stop = {
        let on_stop = props.on_stop.clone();
        Callback::from(move |_: MouseEvent| on_stop.emit(()))
    };

    html! {
        <div class="panel pomodoro">
            <div class="header">{ "Pomodoro" }</div>
            <select onchange={onchange}>
                {
                    for props.options.iter().map(|option| html! {
                        <option value={option.id.clone()} selected={option.id == effective}>
                            { &option.label }
                        </option>
                    })
                }
            </select>
            <div class="pom-timer">{ &props.display }</div>
            <button disabled={props.running} onclick={on_start}>{ "Start" }</button>
            <button disabled={!props.running} onclick={on_stop}>{ "Stop" }</button>
        </div>
    }
}
