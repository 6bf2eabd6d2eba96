use crate::models::session::{ActionKind, ActionStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub kind: ActionKind,
    pub status: ActionStatus,
}

/// Inline progress or failure note for one action. Renders nothing when idle.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.status {
        ActionStatus::Idle => html! {},
        ActionStatus::Pending(_) => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{format!("Running {}...", props.kind.label())}</p>
            </div>
        },
        ActionStatus::Failed(msg) => html! {
            <div class="status error" role="alert">
                <p>{format!("❌ {} failed: ", capitalize(props.kind.label()))}{msg}</p>
            </div>
        },
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("carbon calculation"), "Carbon calculation");
        assert_eq!(capitalize(""), "");
    }
}
