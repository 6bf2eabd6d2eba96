use yew::prelude::*;

use planty_dashboard::components::{
    CalculatorPanel, DashboardPanel, InsightsPanel, NavTabs, ProfilePanel,
};
use planty_dashboard::hooks::use_session::use_session;
use planty_dashboard::models::tab::Tab;

#[function_component(App)]
fn app() -> Html {
    let session = use_session();
    let selected = session.state.selected_tab;

    let panel = match selected {
        Tab::Dashboard => html! { <DashboardPanel session={session.clone()} /> },
        Tab::Profile => html! { <ProfilePanel session={session.clone()} /> },
        Tab::Calculator => html! { <CalculatorPanel session={session.clone()} /> },
        Tab::Insights => html! { <InsightsPanel session={session.clone()} /> },
    };

    html! {
        <div class="app">
            <header class="header">
                <div class="header-content">
                    <div class="logo">
                        <span class="logo-icon">{"🌿"}</span>
                        <h1>{"Planty"}</h1>
                        <span class="tagline">{"AI-Powered Sustainability"}</span>
                        if session.state.is_busy() {
                            <div class="spinner header-spinner" aria-label="Working"></div>
                        }
                    </div>
                    <NavTabs selected={selected} on_select={session.select_tab.clone()} />
                </div>
            </header>

            <main class="main-content">
                <section class={classes!("tab-content", selected.code())} id={selected.code()}>
                    {panel}
                </section>
            </main>

            <footer class="footer">
                <p>{"Built with 💚 for HackMIT 2025 | Infosys × Extraordinary × Fetch.ai × Cerebras"}</p>
            </footer>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
