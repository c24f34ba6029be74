use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct SummaryLineProps {
    pub summary: String,
}

#[function_component(SummaryLine)]
pub fn summary_line(props: &SummaryLineProps) -> Html {
    html! {
        <div class="summary">{ &props.summary }</div>
    }
}
