//! Shared application service layer for carbonmap.
//!
//! This crate provides a unified interface for both CLI and GUI frontends,
//! centralizing configuration, the fetch/resolve/render session, and the
//! render models (map overlay, detail panel, charts).

pub mod charts;
pub mod config;
pub mod detail;
pub mod error;
pub mod map_overlay;
pub mod query;
pub mod session;

// Re-export key types for convenience
pub use charts::{MixBar, SeriesChart, SeriesSample, generation_mix_bars};
pub use config::{AppConfig, MapConfig, load_config, parse_config};
pub use detail::RegionDetail;
pub use error::{AppError, AppResult};
pub use map_overlay::{LegendEntry, MapMarker, MapOverlay, build_overlay, format_intensity, legend};
pub use query::{inspect_point, region_chart, snapshot_at};
pub use session::{
    NOTHING_SELECTED_PROMPT, Notice, NoticeKind, RenderFrame, SNAPSHOT_FAILED_MESSAGE, Session,
    TimeMode, TimeSelection,
};
