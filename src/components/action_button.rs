use wasm_bindgen::JsValue;
use web_sys::PopStateEvent;
use yew::prelude::*;

use crate::util::cwarn;

#[derive(Properties, PartialEq, Clone)]
pub struct ActionButtonProps {
    /// Client-side destination path; without one the button is inert.
    #[prop_or_default]
    pub to: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// Push `to` onto the session history and announce it like a back/forward step,
/// so any router listening to `popstate` picks it up.
fn navigate(to: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window.history()?.push_state_with_url(&JsValue::NULL, "", Some(to))?;
    let ev = PopStateEvent::new("popstate")?;
    window.dispatch_event(&ev)?;
    Ok(())
}

#[function_component(ActionButton)]
pub fn action_button(props: &ActionButtonProps) -> Html {
    let onclick = {
        let to = props.to.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(to) = &to {
                if let Err(e) = navigate(to) {
                    cwarn(&format!("navigation to {to} failed: {e:?}"));
                }
            }
        })
    };
    html! {
        <button class="markerbutton" style="padding:8px 14px; background-color:#007bff; color:#fff; border:none; border-radius:4px; cursor:pointer;" {onclick}>{ props.children.clone() }</button>
    }
}
