use crate::models::tab::Tab;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavTabsProps {
    pub selected: Tab,
    pub on_select: Callback<Tab>,
}

/// Header navigation, one button per panel
#[function_component(NavTabs)]
pub fn nav_tabs(props: &NavTabsProps) -> Html {
    html! {
        <nav class="nav-tabs" role="tablist">
            {
                Tab::all().iter().map(|tab| {
                    let tab = *tab;
                    let active = tab == props.selected;
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(tab))
                    };
                    html! {
                        <button
                            key={tab.code()}
                            class={classes!("nav-tab", active.then_some("active"))}
                            role="tab"
                            aria-selected={active.to_string()}
                            {onclick}
                        >
                            <span class="nav-icon">{tab.icon()}</span>
                            {tab.label()}
                        </button>
                    }
                }).collect::<Html>()
            }
        </nav>
    }
}
