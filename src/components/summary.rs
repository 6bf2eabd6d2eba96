use yew::prelude::*;

/// One figure on a stats card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatTile {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

/// Headline figures on the dashboard hero card
pub const DASHBOARD_STATS: &[StatTile] = &[
    StatTile {
        icon: "🌍",
        value: "2.4t",
        label: "CO₂ Saved",
    },
    StatTile {
        icon: "🌲",
        value: "142",
        label: "Trees Equivalent",
    },
    StatTile {
        icon: "⚡",
        value: "87%",
        label: "Goal Progress",
    },
];

/// Token efficiency figures on the insights panel
pub const EFFICIENCY_STATS: &[StatTile] = &[
    StatTile {
        icon: "🪙",
        value: "42%",
        label: "Tokens Saved",
    },
    StatTile {
        icon: "🔁",
        value: "67",
        label: "API Calls Optimized",
    },
    StatTile {
        icon: "🍃",
        value: "0.8kg",
        label: "Carbon Reduced",
    },
];

#[derive(Properties, PartialEq)]
pub struct StatGridProps {
    pub tiles: &'static [StatTile],
    #[prop_or_else(|| "stats-row".to_string())]
    pub class: String,
}

#[function_component(StatGrid)]
pub fn stat_grid(props: &StatGridProps) -> Html {
    html! {
        <div class={props.class.clone()}>
            { for props.tiles.iter().map(|tile| html! {
                <div class="stat">
                    <span class="stat-icon">{tile.icon}</span>
                    <div>
                        <span class="stat-value">{tile.value}</span>
                        <span class="stat-label">{tile.label}</span>
                    </div>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_figures() {
        let values: Vec<&str> = DASHBOARD_STATS.iter().map(|tile| tile.value).collect();
        assert_eq!(values, vec!["2.4t", "142", "87%"]);
        assert_eq!(EFFICIENCY_STATS.len(), 3);
    }
}
