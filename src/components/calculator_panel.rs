use yew::prelude::*;

use crate::components::chart::BreakdownChart;
use crate::components::status::Status;
use crate::hooks::use_session::SessionHandle;
use crate::models::{carbon::ActivityInput, session::ActionKind};
use crate::utils::dom::input_value;

#[derive(Properties, PartialEq)]
pub struct CalculatorPanelProps {
    pub session: SessionHandle,
}

#[function_component(CalculatorPanel)]
pub fn calculator_panel(props: &CalculatorPanelProps) -> Html {
    let session = &props.session;
    let state = &session.state;
    let pending = state.is_pending(ActionKind::Carbon);

    let miles_ref = use_node_ref();
    let flights_ref = use_node_ref();
    let energy_ref = use_node_ref();
    let form_error = use_state(|| None::<String>);

    let on_calculate = {
        let miles_ref = miles_ref.clone();
        let flights_ref = flights_ref.clone();
        let energy_ref = energy_ref.clone();
        let form_error = form_error.clone();
        let calculate_carbon = session.calculate_carbon.clone();
        Callback::from(move |_: MouseEvent| {
            let parsed = ActivityInput::from_form(
                &input_value(&miles_ref),
                &input_value(&flights_ref),
                &input_value(&energy_ref),
            );
            match parsed {
                Ok(input) => {
                    form_error.set(None);
                    calculate_carbon.emit(input);
                }
                Err(e) => {
                    gloo::console::warn!(format!("Rejected calculator input: {e}"));
                    form_error.set(Some(e.to_string()));
                }
            }
        })
    };

    html! {
        <div class="calculator-container">
            <div class="card calculator-card">
                <h2>{"Carbon Footprint Calculator"}</h2>
                <p class="subtitle">{"Track your environmental impact"}</p>

                <div class="calculator-form">
                    <div class="form-section">
                        <h4>{"Transportation"}</h4>
                        <input
                            ref={miles_ref}
                            type="number"
                            min="0"
                            placeholder="Miles driven per week"
                            class="input-field"
                        />
                        <input
                            ref={flights_ref}
                            type="number"
                            min="0"
                            step="1"
                            placeholder="Flights per year"
                            class="input-field"
                        />
                    </div>

                    <div class="form-section">
                        <h4>{"Energy Usage"}</h4>
                        <input
                            ref={energy_ref}
                            type="number"
                            min="0"
                            placeholder="kWh per month"
                            class="input-field"
                        />
                    </div>

                    if let Some(error) = &*form_error {
                        <p class="form-error" role="alert">{error}</p>
                    }

                    <button class="calculate-btn" onclick={on_calculate} disabled={pending}>
                        if pending {
                            <span class="loading">{"Calculating..."}</span>
                        } else {
                            {"🧮 Calculate Impact"}
                        }
                    </button>
                </div>
                <Status kind={ActionKind::Carbon} status={state.carbon_status.clone()} />
            </div>

            if let Some(result) = &state.carbon_result {
                <div class="card results-card">
                    <h3>{"Your Carbon Breakdown"}</h3>
                    <div class="total-emissions">
                        <span class="emissions-value">{result.total_emissions.to_string()}</span>
                        <span class="emissions-unit">{"tons CO₂/year"}</span>
                    </div>

                    <BreakdownChart result={result.clone()} />

                    <div class="recommendations">
                        <h4>{"AI Recommendations"}</h4>
                        { for result.recommendations.iter().map(|rec| html! {
                            <div class="recommendation">{"› "}{rec}</div>
                        }) }
                    </div>
                </div>
            }

            <div class="card integration-card">
                <h3>{"Carbon API Integration"}</h3>
                <span class="card-icon">{"⚠️"}</span>
                <p class="integration-note">
                    {"Results from the carbon estimation API are displayed above"}
                </p>
            </div>
        </div>
    }
}
