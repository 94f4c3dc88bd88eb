use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub xp: u64,
    pub xp_needed: u64,
    pub completed: u32,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let cell_style = "display:flex; align-items:center; gap:6px;"; // icon | label | value
    let label_style = "font-weight:500; opacity:0.8;";
    let value_style = "font-variant-numeric:tabular-nums; font-weight:600;";
    let hearts: String = "❤".repeat(usize::from(props.lives));
    html! {
        <div style="display:flex; flex-wrap:wrap; gap:18px; padding:8px 16px; font-size:14px; border-bottom:1px solid #21262d; background:rgba(13,17,23,0.85);">
            <div style={format!("{} color:#d4af37;", cell_style)}>
                <span style={label_style}>{"Score"}</span>
                <span style={value_style}>{ props.score }</span>
            </div>
            <div style={format!("{} color:#f85149;", cell_style)} title={format!("{} lives", props.lives)}>
                <span style={label_style}>{"Lives"}</span>
                <span style={value_style}>{ if hearts.is_empty() { "-".to_string() } else { hearts } }</span>
            </div>
            <div style={format!("{} color:#58a6ff;", cell_style)}>
                <span style={label_style}>{"Level"}</span>
                <span style={value_style}>{ props.level }</span>
            </div>
            <div style={format!("{} color:#a371f7;", cell_style)}>
                <span style={label_style}>{"XP"}</span>
                <span style={value_style}>{ format!("{} / {}", props.xp, props.xp_needed) }</span>
            </div>
            <div style={format!("{} color:#3fb950;", cell_style)}>
                <span style={label_style}>{"Solved"}</span>
                <span style={value_style}>{ props.completed }</span>
            </div>
        </div>
    }
}
