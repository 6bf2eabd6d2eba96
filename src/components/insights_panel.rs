use yew::prelude::*;

use crate::components::status::Status;
use crate::components::summary::{EFFICIENCY_STATS, StatGrid};
use crate::hooks::use_session::SessionHandle;
use crate::models::session::ActionKind;
use crate::utils::dom::textarea_value;

#[derive(Properties, PartialEq)]
pub struct InsightsPanelProps {
    pub session: SessionHandle,
}

#[function_component(InsightsPanel)]
pub fn insights_panel(props: &InsightsPanelProps) -> Html {
    let session = &props.session;
    let state = &session.state;
    let pending = state.is_pending(ActionKind::Agent);
    let query_ref = use_node_ref();

    let on_submit = {
        let query_ref = query_ref.clone();
        let submit_query = session.submit_query.clone();
        Callback::from(move |_: MouseEvent| {
            submit_query.emit(textarea_value(&query_ref));
        })
    };

    let on_connect = {
        let connect_agent = session.connect_agent.clone();
        Callback::from(move |_: MouseEvent| connect_agent.emit(()))
    };

    html! {
        <div class="insights-container">
            <div class="card ai-card">
                <h2>{"AI-Powered Sustainability Insights"}</h2>
                <p class="subtitle">{"Powered by Cerebras & Fetch.ai"}</p>

                <div class="ai-chat">
                    <textarea
                        ref={query_ref}
                        class="ai-input"
                        placeholder="Ask me anything about reducing your carbon footprint..."
                        rows="4"
                    />
                    <button class="ai-submit-btn" onclick={on_submit} disabled={pending}>
                        {"🧠 Get AI Insights"}
                    </button>

                    if !state.ai_response.is_empty() {
                        <div class="ai-response">
                            <p>{&state.ai_response}</p>
                        </div>
                    }
                </div>
            </div>

            <div class="card fetch-agent-card">
                <h3>{"Fetch.ai Autonomous Agent"}</h3>
                <span class="card-icon">{"⚡"}</span>
                <p class="integration-note">
                    {"The uAgents framework will be integrated here for autonomous actions"}
                </p>
                <button class="connect-agent-btn" onclick={on_connect} disabled={pending}>
                    {"Connect Autonomous Agent"}
                </button>
                <Status kind={ActionKind::Agent} status={state.agent_status.clone()} />
            </div>

            <div class="card efficiency-card">
                <h3>{"Token Efficiency Metrics"}</h3>
                <StatGrid tiles={EFFICIENCY_STATS} class="efficiency-stats" />
            </div>
        </div>
    }
}
