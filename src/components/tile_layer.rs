use yew::prelude::*;

use crate::config::TileSource;
use crate::tiles::{TILE_SIZE, TilePlacement};

#[derive(Properties, PartialEq, Clone)]
pub struct TileLayerProps {
    pub tiles: Vec<TilePlacement>,
    pub source: TileSource,
    /// Request `@2x` tiles on high-density screens.
    pub retina: bool,
}

#[function_component(TileLayer)]
pub fn tile_layer(props: &TileLayerProps) -> Html {
    html! {
        <div style="position:absolute; inset:0; overflow:hidden; background:#f2efe9;">
            { for props.tiles.iter().map(|t| {
                let style = format!(
                    "position:absolute; left:{}px; top:{}px; width:{TILE_SIZE}px; height:{TILE_SIZE}px; user-select:none; pointer-events:none;",
                    t.left, t.top
                );
                html! {
                    <img key={format!("{}/{}/{}", t.z, t.col, t.y)} src={props.source.url(t, props.retina)} alt="" draggable="false" {style} />
                }
            }) }
        </div>
    }
}
