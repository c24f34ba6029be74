use taskdeck_core::gateway;
use taskdeck_core::store::SortMode;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent, MouseEvent};
use yew::{Callback, Html, Properties, TargetCast, function_component, html};

use crate::app::storage::ThemeMode;

#[derive(Properties, PartialEq)]
pub struct ToolbarProps {
    pub query: String,
    pub sort: SortMode,
    pub theme: ThemeMode,
    pub on_search: Callback<String>,
    pub on_sort: Callback<SortMode>,
    pub on_refresh: Callback<()>,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Toolbar)]
pub fn toolbar(props: &ToolbarProps) -> Html {
    let oninput = {
        let on_search = props.on_search.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    let onchange = {
        let on_sort = props.on_sort.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            on_sort.emit(SortMode::parse(&select.value()));
        })
    };

    let on_refresh = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    let on_toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    // The export is a plain navigation so the browser handles the download.
    let on_export = Callback::from(move |_: MouseEvent| {
        let request = gateway::export_csv();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(request.path);
        }
    });

    let theme_label = match props.theme {
        ThemeMode::Day => "Dark mode",
        ThemeMode::Night => "Light mode",
    };

    html! {
        <div class="toolbar">
            <input
                class="search"
                placeholder="Search title or tags"
                value={props.query.clone()}
                oninput={oninput}
            />
            <select onchange={onchange}>
                <option value="none" selected={props.sort == SortMode::None}>{ "Sort: none" }</option>
                <option value="due" selected={props.sort == SortMode::Due}>{ "Sort: due" }</option>
                <option value="title" selected={props.sort == SortMode::Title}>{ "Sort: title" }</option>
            </select>
            <button onclick={on_refresh}>{ "Refresh" }</button>
            <button onclick={on_export}>{ "Export CSV" }</button>
            <button onclick={on_toggle_theme}>{ theme_label }</button>
        </div>
    }
}
