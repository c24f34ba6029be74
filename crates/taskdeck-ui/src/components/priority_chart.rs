use taskdeck_core::chart::PriorityChart;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PriorityChartPanelProps {
    /// Counts over the full snapshot; search never narrows the chart.
    pub chart: PriorityChart,
}

#[function_component(PriorityChartPanel)]
pub fn priority_chart_panel(props: &PriorityChartPanelProps) -> Html {
    html! {
        <div class="panel chart">
            <div class="header">{ "Tasks by priority" }</div>
            {
                for props.chart.bars().into_iter().map(|bar| {
                    let style = format!(
                        "width:{:.1}%;background:{};",
                        bar.fraction * 100.0,
                        bar.color
                    );
                    html! {
                        <div class="chart-row">
                            <span class="chart-label">{ bar.label }</span>
                            <div class="chart-bar" style={style}></div>
                        </div>
                    }
                })
            }
        </div>
    }
}
