pub mod frame;
pub mod grid;
pub mod mapper;
pub mod raster;

pub use frame::Renderer;
pub use grid::{Cell, Grid};
pub use mapper::{AxisScale, Mapper};
pub use raster::{Rasterizer, segment_cells, segment_cells_in};
