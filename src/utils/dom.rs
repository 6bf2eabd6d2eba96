use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::NodeRef;

/// Current value of an `<input>`, empty if the node is not mounted
pub fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Current value of a `<textarea>`, empty if the node is not mounted
pub fn textarea_value(node: &NodeRef) -> String {
    node.cast::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}
