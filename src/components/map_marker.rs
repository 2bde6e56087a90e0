use yew::prelude::*;

use super::marker_popup::MarkerPopup;
use crate::config::GalleryConfig;
use crate::model::{Marker, MarkerIcon, MarkerId};
use crate::util::px;

#[derive(Properties, PartialEq, Clone)]
pub struct MapMarkerProps {
    pub marker: Marker,
    /// Marker position in viewport pixels.
    pub x: f64,
    pub y: f64,
    #[prop_or_default]
    pub icon: MarkerIcon,
    pub gallery: GalleryConfig,
    pub open: bool,
    pub on_toggle: Callback<MarkerId>,
    pub on_close: Callback<()>,
}

#[function_component(MapMarker)]
pub fn map_marker(props: &MapMarkerProps) -> Html {
    let icon = props.icon;
    let toggle = {
        let cb = props.on_toggle.clone();
        let id = props.marker.id;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(id)
        })
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let (sx, sy) = icon.shadow_anchor();
    let shadow_style = format!(
        "position:absolute; left:{}; top:{}; width:{}; height:{}; pointer-events:none; z-index:400;",
        px(props.x - sx),
        px(props.y - sy),
        px(icon.shadow_size.0),
        px(icon.shadow_size.1)
    );
    let icon_style = format!(
        "position:absolute; left:{}; top:{}; width:{}; height:{}; cursor:pointer; z-index:600;",
        px(props.x - icon.icon_anchor.0),
        px(props.y - icon.icon_anchor.1),
        px(icon.icon_size.0),
        px(icon.icon_size.1)
    );
    let title = props.marker.title.clone().unwrap_or_default();

    html! {
        <>
            <img src={icon.shadow_url} alt="" draggable="false" style={shadow_style} />
            <img src={icon.icon_url} alt={title.clone()} {title} draggable="false" style={icon_style} onclick={toggle} onmousedown={stop} />
            if props.open {
                // Popup tip sits on the popup anchor; the body grows upwards from it.
                <div style={format!("position:absolute; left:{}; top:{}; transform:translate(-50%, calc(-100% - 10px)); z-index:700;", px(props.x + icon.popup_anchor.0), px(props.y + icon.popup_anchor.1))}>
                    <MarkerPopup marker={props.marker.clone()} gallery={props.gallery} on_close={props.on_close.clone()} />
                    <div style="position:absolute; left:50%; bottom:-10px; margin-left:-10px; width:0; height:0; border-left:10px solid transparent; border-right:10px solid transparent; border-top:10px solid #fff;"></div>
                </div>
            }
        </>
    }
}
