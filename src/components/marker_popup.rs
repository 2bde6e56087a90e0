use yew::prelude::*;

use super::action_button::ActionButton;
use crate::config::GalleryConfig;
use crate::model::Marker;
use crate::state::input::{MousePhase, TouchPhase, from_mouse, from_touch};
use crate::state::{Carousel, CarouselAction};
use crate::util::{clog, px};

#[derive(Properties, PartialEq, Clone)]
pub struct MarkerPopupProps {
    pub marker: Marker,
    pub gallery: GalleryConfig,
    pub on_close: Callback<()>,
}

/// Popup body: swipeable gallery, slide dots, title, description and button.
/// Carousel state lives as long as the popup is mounted.
#[function_component(MarkerPopup)]
pub fn marker_popup(props: &MarkerPopupProps) -> Html {
    let marker = &props.marker;
    let gallery = props.gallery;
    let carousel = {
        let count = marker.images.len();
        use_reducer(move || Carousel::new(count, gallery.slide_width))
    };

    // Log committed slide changes.
    {
        let title = marker.title.clone().unwrap_or_default();
        let count = carousel.slide_count;
        let via = match carousel.last_decision {
            Some(decision) => format!("swipe {decision:?}"),
            None => "dot".to_string(),
        };
        use_effect_with(carousel.current_index, move |index| {
            if count > 1 {
                clog(&format!("gallery '{title}': slide {}/{count} ({via})", index + 1));
            }
            || ()
        });
    }

    // Pointer events must not reach the map underneath.
    let stop_mouse = Callback::from(|e: MouseEvent| e.stop_propagation());
    let stop_touch = Callback::from(|e: TouchEvent| e.stop_propagation());
    let stop_wheel = Callback::from(|e: WheelEvent| e.stop_propagation());
    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(())
        })
    };

    let strip = if carousel.is_empty() {
        html! {}
    } else {
        let touch = |phase: TouchPhase| {
            let carousel = carousel.clone();
            Callback::from(move |e: TouchEvent| {
                e.stop_propagation();
                if let Some(input) = from_touch(&e, phase) {
                    carousel.dispatch(input.into());
                }
            })
        };
        let mouse = |phase: MousePhase| {
            let carousel = carousel.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                if phase == MousePhase::Down {
                    e.prevent_default();
                }
                if let Some(input) = from_mouse(&e, phase) {
                    carousel.dispatch(input.into());
                }
            })
        };
        let w = px(gallery.slide_width);
        let h = px(gallery.slide_height);
        let frame_style = format!(
            "overflow:hidden; border-radius:8px; width:{w}; height:{h}; margin:auto; position:relative; touch-action:pan-y; user-select:none; cursor:{};",
            carousel.cursor()
        );
        let strip_style = format!(
            "display:flex; transform:translateX({}); transition:{}; width:{};",
            px(carousel.translate_x()),
            carousel.transition(),
            px(carousel.strip_width())
        );
        let slide_style = format!(
            "width:{w}; height:{h}; object-fit:contain; flex-shrink:0; pointer-events:none;"
        );
        html! {
            <div style={frame_style}
                ontouchstart={touch(TouchPhase::Start)}
                ontouchmove={touch(TouchPhase::Move)}
                ontouchend={touch(TouchPhase::End)}
                ontouchcancel={touch(TouchPhase::Cancel)}
                onmousedown={mouse(MousePhase::Down)}
                onmousemove={mouse(MousePhase::Move)}
                onmouseup={mouse(MousePhase::Up)}
                onmouseleave={mouse(MousePhase::Leave)}
            >
                <div style={strip_style}>
                    { for marker.images.iter().enumerate().map(|(i, src)| html! {
                        <img key={i} src={src.clone()} alt={format!("Slide {}", i + 1)} draggable="false" style={slide_style.clone()} />
                    }) }
                </div>
            </div>
        }
    };

    let dots = (0..carousel.slide_count).map(|i| {
        let onclick = {
            let carousel = carousel.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                carousel.dispatch(CarouselAction::Select(i));
            })
        };
        let color = if carousel.current_index == i { "#333" } else { "#ccc" };
        let style = format!(
            "width:10px; height:10px; border-radius:50%; margin:0 4px; background-color:{color}; cursor:pointer;"
        );
        html! { <div key={i} {style} {onclick}></div> }
    });

    html! {
        <div style={format!("position:relative; min-width:{}; background:#fff; border-radius:12px; padding:13px 19px; box-shadow:0 3px 14px rgba(0,0,0,0.4); font-family:sans-serif; color:#333;", px(gallery.popup_min_width))}
            onmousedown={stop_mouse.clone()}
            onclick={stop_mouse}
            ontouchstart={stop_touch}
            onwheel={stop_wheel}
        >
            <button title="Close" onclick={close} style="position:absolute; top:2px; right:4px; border:none; background:none; font-size:18px; color:#757575; cursor:pointer;">{"×"}</button>
            <div style="text-align:center;">
                { strip }
                <div style="margin-top:8px; display:flex; justify-content:center;">
                    { for dots }
                </div>
                if let Some(title) = &marker.title {
                    <h3 style="margin:10px 0 4px;">{ title.clone() }</h3>
                }
                if let Some(description) = &marker.description {
                    <p style="font-size:0.9rem; margin-bottom:8px;">{ description.clone() }</p>
                }
                if let Some(label) = &marker.button_label {
                    <ActionButton to={marker.link.clone().map(AttrValue::from)}>{ label.clone() }</ActionButton>
                }
            </div>
        </div>
    }
}
