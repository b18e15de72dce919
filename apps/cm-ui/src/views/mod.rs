pub mod controls_view;
pub mod detail_view;
pub mod map_view;
pub mod series_view;

pub use controls_view::ControlsView;
pub use detail_view::DetailView;
pub use map_view::MapView;
pub use series_view::SeriesView;
