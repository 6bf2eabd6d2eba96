use yew::prelude::*;

use crate::components::status::Status;
use crate::hooks::use_session::SessionHandle;
use crate::models::{profile::ProfileRequest, session::ActionKind};
use crate::utils::dom::input_value;

#[derive(Properties, PartialEq)]
pub struct ProfilePanelProps {
    pub session: SessionHandle,
}

#[function_component(ProfilePanel)]
pub fn profile_panel(props: &ProfilePanelProps) -> Html {
    let session = &props.session;
    let state = &session.state;
    let pending = state.is_pending(ActionKind::Profile);

    let name_ref = use_node_ref();
    let goals_ref = use_node_ref();

    let on_generate = {
        let name_ref = name_ref.clone();
        let goals_ref = goals_ref.clone();
        let generate_profile = session.generate_profile.clone();
        Callback::from(move |_: MouseEvent| {
            let name = input_value(&name_ref);
            let goals = input_value(&goals_ref);
            generate_profile.emit(ProfileRequest::from_form(&name, &goals));
        })
    };

    let content = match &state.profile {
        None => html! {
            <div class="profile-form">
                <input
                    ref={name_ref}
                    type="text"
                    placeholder="Enter your name"
                    class="input-field"
                />
                <input
                    ref={goals_ref}
                    type="text"
                    placeholder="Your sustainability goals"
                    class="input-field"
                />
                <button class="generate-btn" onclick={on_generate} disabled={pending}>
                    if pending {
                        <span class="loading">{"Generating..."}</span>
                    } else {
                        {"✨ Generate Extraordinary Profile"}
                    }
                </button>
            </div>
        },
        Some(profile) => html! {
            <div class="profile-result">
                <div class="profile-header">
                    <div class="profile-avatar">{"👤"}</div>
                    <div>
                        <h3>{profile.display_name()}</h3>
                        <span class="impact-badge">{&profile.impact_level}</span>
                    </div>
                </div>

                <div class="score-display">
                    <span class="score-label">{"Extraordinary Score"}</span>
                    <span class="score-value">{profile.score_label()}</span>
                </div>

                <div class="achievements">
                    <h4>{"Achievements Unlocked"}</h4>
                    <div class="achievement-list">
                        { for profile.achievements.iter().map(|achievement| html! {
                            <div class="achievement">{"✔ "}{achievement}</div>
                        }) }
                    </div>
                </div>
            </div>
        },
    };

    html! {
        <div class="profile-container">
            <div class="card profile-card">
                <h2>{"Extraordinary Profile Generator"}</h2>
                <p class="subtitle">{"Powered by Cerebras AI"}</p>
                {content}
                <Status kind={ActionKind::Profile} status={state.profile_status.clone()} />
            </div>

            <div class="card ai-insights-card">
                <h3>{"AI Agent Insights"}</h3>
                <span class="card-icon">{"☁️"}</span>
                <p class="integration-note">
                    {"AI agent responses will appear here once the profile service is connected"}
                </p>
            </div>
        </div>
    }
}
