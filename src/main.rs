mod components;
mod config;
mod location;
mod model;
mod state;
mod tiles;
mod util;

fn main() {
    util::install_panic_hook();
    yew::Renderer::<components::app::App>::new().render();
}
