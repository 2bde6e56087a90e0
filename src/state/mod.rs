pub mod carousel;
pub mod gesture;
pub mod input;
pub mod viewport;

pub use carousel::{Carousel, CarouselAction};
pub use viewport::{Viewport, ViewportAction};
