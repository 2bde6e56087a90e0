pub mod action_button;
pub mod app;
pub mod map_marker;
pub mod map_view;
pub mod marker_popup;
pub mod tile_layer;
pub mod zoom_controls;
