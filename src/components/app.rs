use std::cell::Cell;
use std::rc::Rc;

use super::map_view::MapView;
use crate::config::AppConfig;
use crate::location::{BrowserLocationFeed, LocationError, LocationFeed, LocationSink};
use crate::model::{Coordinate, MapScene, SceneAction};
use crate::util::{clog, cwarn};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| AppConfig::load_embedded());
    let scene = {
        let config = config.clone();
        use_reducer(move || {
            MapScene::new(
                config.default_center,
                config.here_marker(),
                config.poi_markers(),
            )
        })
    };

    // Follow the device position; the watch is released on unmount.
    {
        let scene = scene.clone();
        use_effect_with((), move |_| {
            let sink: LocationSink = {
                let scene = scene.clone();
                let first_fix = Cell::new(true);
                Rc::new(move |ev: Result<Coordinate, LocationError>| match ev {
                    Ok(coord) => {
                        if first_fix.replace(false) {
                            clog(&format!("location: tracking from {:.4}, {:.4}", coord.lat(), coord.lon()));
                        }
                        scene.dispatch(SceneAction::PositionUpdated(coord));
                    }
                    Err(e) => {
                        cwarn(&format!("location unavailable ({e}), staying at last known position"));
                        scene.dispatch(SceneAction::LocationUnavailable(e));
                    }
                })
            };
            let guard = match BrowserLocationFeed.subscribe(sink) {
                Ok(guard) => Some(guard),
                Err(e) => {
                    cwarn(&format!("location unavailable ({e}), using default position"));
                    scene.dispatch(SceneAction::LocationUnavailable(e));
                    None
                }
            };
            move || drop(guard)
        });
    }

    html! {
        <div id="root">
            <MapView scene={scene.clone()} config={config.clone()} />
        </div>
    }
}
