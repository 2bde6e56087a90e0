use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomControlsProps {
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_recenter: Callback<()>,
    pub can_zoom_in: bool,
    pub can_zoom_out: bool,
    /// Hide the recenter button while the view already follows the position.
    pub following: bool,
}

#[function_component(ZoomControls)]
pub fn zoom_controls(props: &ZoomControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(())
        })
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(())
        })
    };
    let rc = {
        let cb = props.on_recenter.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(())
        })
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let button = "width:30px; height:30px; font-size:18px; line-height:28px; background:#fff; border:none; border-bottom:1px solid #ccc; cursor:pointer; padding:0;";
    html! {<div onmousedown={stop} style="position:absolute; left:10px; top:10px; z-index:800; display:flex; flex-direction:column; border:2px solid rgba(0,0,0,0.2); border-radius:4px; overflow:hidden;">
        <button title="Zoom in" onclick={zi} disabled={!props.can_zoom_in} style={button}> {"+"} </button>
        <button title="Zoom out" onclick={zo} disabled={!props.can_zoom_out} style={button}> {"−"} </button>
        if !props.following {
            <button title="Back to my position" onclick={rc} style={button}> {"◎"} </button>
        }
    </div>}
}
