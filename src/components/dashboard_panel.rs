use yew::prelude::*;

use crate::components::chart::TrendChart;
use crate::components::status::Status;
use crate::components::summary::{DASHBOARD_STATS, StatGrid};
use crate::hooks::use_session::SessionHandle;
use crate::models::{
    carbon::ActivityInput, profile::ProfileRequest, session::ActionKind, tab::Tab,
};

/// Name used when a profile is generated from the dashboard shortcut
const QUICK_PROFILE_NAME: &str = "User";

#[derive(Properties, PartialEq)]
pub struct DashboardPanelProps {
    pub session: SessionHandle,
}

#[function_component(DashboardPanel)]
pub fn dashboard_panel(props: &DashboardPanelProps) -> Html {
    let session = &props.session;
    let state = &session.state;

    let on_calculate = {
        let select_tab = session.select_tab.clone();
        let calculate_carbon = session.calculate_carbon.clone();
        Callback::from(move |_: MouseEvent| {
            select_tab.emit(Tab::Calculator);
            calculate_carbon.emit(ActivityInput::default());
        })
    };

    let on_profile = {
        let select_tab = session.select_tab.clone();
        let generate_profile = session.generate_profile.clone();
        Callback::from(move |_: MouseEvent| {
            select_tab.emit(Tab::Profile);
            generate_profile.emit(ProfileRequest::named(QUICK_PROFILE_NAME));
        })
    };

    html! {
        <div class="dashboard-grid">
            <div class="card hero-card">
                <span class="card-icon">{"✨"}</span>
                <h2>{"Welcome to Your Sustainability Journey"}</h2>
                <p>{"Track, reduce, and offset your carbon footprint with AI-powered insights"}</p>
                <StatGrid tiles={DASHBOARD_STATS} />
            </div>

            <div class="card action-card">
                <h3>{"Quick Actions"}</h3>
                <div class="action-buttons">
                    <button
                        class="action-btn primary"
                        onclick={on_calculate}
                        disabled={state.is_pending(ActionKind::Carbon)}
                    >
                        {"🧮 Calculate Today's Impact"}
                    </button>
                    <button
                        class="action-btn secondary"
                        onclick={on_profile}
                        disabled={state.is_pending(ActionKind::Profile)}
                    >
                        {"👤 Generate AI Profile"}
                    </button>
                </div>
            </div>

            if let Some(result) = &state.carbon_result {
                <div class="card chart-card">
                    <TrendChart result={result.clone()} />
                </div>
            } else {
                <Status kind={ActionKind::Carbon} status={state.carbon_status.clone()} />
            }
        </div>
    }
}
