use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, HtmlElement};
use yew::prelude::*;

use super::map_marker::MapMarker;
use super::tile_layer::TileLayer;
use super::zoom_controls::ZoomControls;
use crate::config::AppConfig;
use crate::model::{MapScene, MarkerId};
use crate::state::{Viewport, ViewportAction};

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    pub scene: UseReducerHandle<MapScene>,
    pub config: Rc<AppConfig>,
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let config = &props.config;
    let container_ref = use_node_ref();
    let viewport = {
        let (zoom, min, max) = (config.zoom, config.min_zoom, config.max_zoom);
        use_reducer(move || Viewport::new(zoom, min, max))
    };
    let size = use_state(|| (800.0_f64, 600.0_f64));
    let open = use_state(|| None::<MarkerId>);

    // Track the container size, re-measuring on window resize.
    {
        let container_ref = container_ref.clone();
        let size = size.clone();
        use_effect_with((), move |_| {
            let measure = move || {
                if let Some(el) = container_ref.cast::<HtmlElement>() {
                    size.set((f64::from(el.client_width()), f64::from(el.client_height())));
                }
            };
            measure();
            let on_resize = Closure::wrap(Box::new(move |_e: Event| measure()) as Box<dyn FnMut(Event)>);
            let window = web_sys::window();
            if let Some(w) = &window {
                let _ = w.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
            }
            move || {
                if let Some(w) = &window {
                    let _ = w.remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
                }
            }
        });
    }

    let retina = web_sys::window()
        .map(|w| w.device_pixel_ratio() > 1.0)
        .unwrap_or(false);
    let (width, height) = *size;
    let followed = props.scene.position;

    let send = |action: ViewportAction| {
        let viewport = viewport.clone();
        Callback::from(move |_: ()| viewport.dispatch(action))
    };

    // Map panning
    let onmousedown = {
        let viewport = viewport.clone();
        Callback::from(move |e: MouseEvent| {
            if e.button() == 0 {
                e.prevent_default();
                viewport.dispatch(ViewportAction::PanStart {
                    x: f64::from(e.client_x()),
                    y: f64::from(e.client_y()),
                });
            }
        })
    };
    let onmousemove = {
        let viewport = viewport.clone();
        Callback::from(move |e: MouseEvent| {
            viewport.dispatch(ViewportAction::PanMove {
                x: f64::from(e.client_x()),
                y: f64::from(e.client_y()),
            });
        })
    };
    let end_pan = send(ViewportAction::PanEnd).reform(|_: MouseEvent| ());
    let ontouchstart = {
        let viewport = viewport.clone();
        Callback::from(move |e: TouchEvent| {
            if e.touches().length() != 1 {
                return;
            }
            if let Some(t0) = e.touches().item(0) {
                viewport.dispatch(ViewportAction::PanStart {
                    x: f64::from(t0.client_x()),
                    y: f64::from(t0.client_y()),
                });
            }
        })
    };
    let ontouchmove = {
        let viewport = viewport.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(t0) = e.touches().item(0) {
                viewport.dispatch(ViewportAction::PanMove {
                    x: f64::from(t0.client_x()),
                    y: f64::from(t0.client_y()),
                });
            }
        })
    };
    let ontouchend = send(ViewportAction::PanEnd).reform(|_: TouchEvent| ());
    let onwheel = {
        let viewport = viewport.clone();
        Callback::from(move |e: WheelEvent| {
            e.prevent_default();
            if e.delta_y() < 0.0 {
                viewport.dispatch(ViewportAction::ZoomIn);
            } else if e.delta_y() > 0.0 {
                viewport.dispatch(ViewportAction::ZoomOut);
            }
        })
    };
    // A plain click on the map closes the popup; the click ending a drag does not.
    let onclick = {
        let open = open.clone();
        let moved = viewport.moved;
        Callback::from(move |_: MouseEvent| {
            if !moved {
                open.set(None);
            }
        })
    };

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |id: MarkerId| {
            open.set(if *open == Some(id) { None } else { Some(id) });
        })
    };
    let on_close = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(None))
    };

    let markers = props.scene.markers().map(|m| {
        let (x, y) = viewport.screen_point(m.position, followed, width, height);
        let key = format!("{:?}", m.id);
        html! {
            <MapMarker key={key} marker={m.clone()} {x} {y}
                gallery={config.gallery}
                open={*open == Some(m.id)}
                on_toggle={on_toggle.clone()}
                on_close={on_close.clone()} />
        }
    });

    let attribution = &config.tiles.attribution;

    html! {
        <div ref={container_ref}
            style={format!("position:relative; height:100vh; width:100%; overflow:hidden; touch-action:none; cursor:{};", if viewport.panning { "grabbing" } else { "grab" })}
            {onmousedown} {onmousemove} onmouseup={end_pan.clone()} onmouseleave={end_pan}
            {ontouchstart} {ontouchmove} ontouchend={ontouchend.clone()} ontouchcancel={ontouchend}
            {onwheel} {onclick}
        >
            <TileLayer tiles={viewport.tiles(followed, width, height)} source={config.tiles.clone()} {retina} />
            { for markers }
            <ZoomControls
                on_zoom_in={send(ViewportAction::ZoomIn)}
                on_zoom_out={send(ViewportAction::ZoomOut)}
                on_recenter={send(ViewportAction::Recenter)}
                can_zoom_in={viewport.zoom < viewport.max_zoom}
                can_zoom_out={viewport.zoom > viewport.min_zoom}
                following={viewport.is_following()} />
            <div style="position:absolute; right:0; bottom:0; z-index:800; background:rgba(255,255,255,0.8); padding:0 5px; font:12px/1.5 sans-serif; color:#333;">
                {"© "}<a href={attribution.url.clone()} target="_blank" rel="noopener">{ attribution.label.clone() }</a>
            </div>
        </div>
    }
}
