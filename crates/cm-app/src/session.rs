//! Interactive session: time selection, fetch, click resolution and render models.
//!
//! A refresh runs `select time -> fetch snapshot -> resolve last click -> frame`.
//! The 24-hour series is only fetched by [`Session::load_time_series`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use cm_api::{ApiError, ApiResult, IntensitySource};
use cm_core::{
    IntensitySnapshot, LatLon, Region, RegionId, historical_window, resolve_click,
    round_to_half_hour, series_window,
};
use tracing::{debug, warn};

use crate::charts::SeriesChart;
use crate::detail::RegionDetail;
use crate::map_overlay::{MapOverlay, build_overlay};

pub const NOTHING_SELECTED_PROMPT: &str =
    "Click on a region marker on the map to see details and time series data.";
pub const SNAPSHOT_FAILED_MESSAGE: &str = "Failed to load regional data. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeMode {
    Live,
    Historical,
}

/// State of the time controls.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSelection {
    pub use_current_time: bool,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl TimeSelection {
    pub fn live(now: DateTime<Utc>) -> Self {
        Self {
            use_current_time: true,
            date: now.date_naive(),
            time: now.time(),
        }
    }

    pub fn historical(at: NaiveDateTime) -> Self {
        Self {
            use_current_time: false,
            date: at.date(),
            time: at.time(),
        }
    }

    pub fn mode(&self) -> TimeMode {
        if self.use_current_time {
            TimeMode::Live
        } else {
            TimeMode::Historical
        }
    }

    /// Selected instant aligned to the half-hour grid.
    pub fn resolve(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let raw = match self.mode() {
            TimeMode::Live => now,
            TimeMode::Historical => NaiveDateTime::new(self.date, self.time).and_utc(),
        };
        round_to_half_hour(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    TransportError,
    EmptyResult,
}

/// User-visible inline message produced by a failed or empty fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy)]
enum FetchContext {
    Current,
    Historical,
    Series,
}

impl FetchContext {
    fn describe(self) -> &'static str {
        match self {
            FetchContext::Current => "current data",
            FetchContext::Historical => "historical data",
            FetchContext::Series => "time series data",
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            FetchContext::Current | FetchContext::Historical => {
                "No regional data available for the selected time."
            }
            FetchContext::Series => "No time series data available for this region.",
        }
    }
}

impl Notice {
    fn from_error(context: FetchContext, err: &ApiError) -> Self {
        if err.is_empty_result() {
            Self {
                kind: NoticeKind::EmptyResult,
                message: context.empty_message().to_string(),
            }
        } else {
            Self {
                kind: NoticeKind::TransportError,
                message: format!("Error fetching {}: {}", context.describe(), err),
            }
        }
    }
}

/// Everything a front end needs to draw one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub selected_time: Option<DateTime<Utc>>,
    pub mode: TimeMode,
    pub overlay: Option<MapOverlay>,
    pub detail: Option<RegionDetail>,
    pub series: Option<SeriesChart>,
    pub notices: Vec<Notice>,
}

pub struct Session {
    selection: TimeSelection,
    map_center: LatLon,
    selected_time: Option<DateTime<Utc>>,
    snapshot: Option<IntensitySnapshot>,
    last_click: Option<LatLon>,
    selected_region_id: Option<RegionId>,
    series: Option<SeriesChart>,
    notices: Vec<Notice>,
}

impl Session {
    pub fn new(selection: TimeSelection, map_center: LatLon) -> Self {
        Self {
            selection,
            map_center,
            selected_time: None,
            snapshot: None,
            last_click: None,
            selected_region_id: None,
            series: None,
            notices: Vec::new(),
        }
    }

    pub fn selection(&self) -> &TimeSelection {
        &self.selection
    }

    /// Store the new control state. Returns `true` only when it selects a
    /// different snapshot: a mode switch, or another half-hour slot while
    /// historical. Live edits and moves within one slot need no fetch.
    pub fn set_selection(&mut self, selection: TimeSelection, now: DateTime<Utc>) -> bool {
        let changed = match (self.selection.mode(), selection.mode()) {
            (TimeMode::Live, TimeMode::Live) => false,
            (TimeMode::Historical, TimeMode::Historical) => {
                self.selection.resolve(now) != selection.resolve(now)
            }
            _ => true,
        };
        self.selection = selection;
        changed
    }

    pub fn selected_time(&self) -> Option<DateTime<Utc>> {
        self.selected_time
    }

    pub fn snapshot(&self) -> Option<&IntensitySnapshot> {
        self.snapshot.as_ref()
    }

    pub fn last_click(&self) -> Option<LatLon> {
        self.last_click
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn series(&self) -> Option<&SeriesChart> {
        self.series.as_ref()
    }

    /// Fetch the snapshot for the current selection and re-resolve the last
    /// click against it. Any loaded series is dropped.
    pub fn refresh(&mut self, source: &dyn IntensitySource, now: DateTime<Utc>) {
        self.notices.clear();
        self.series = None;

        let selected = self.selection.resolve(now);
        self.selected_time = Some(selected);

        let (context, result) = match self.selection.mode() {
            TimeMode::Live => (FetchContext::Current, source.current_regional()),
            TimeMode::Historical => {
                let (from, to) = historical_window(selected);
                (FetchContext::Historical, source.regional_between(from, to))
            }
        };

        self.snapshot = self.report(context, result);
        self.resolve_selection();
    }

    /// Record a map click and resolve it against the current snapshot.
    pub fn click(&mut self, point: LatLon) {
        self.last_click = Some(point);
        let previous = self.selected_region_id;
        self.resolve_selection();
        if self.selected_region_id != previous {
            self.series = None;
        }
    }

    pub fn selected_region(&self) -> Option<&Region> {
        let id = self.selected_region_id?;
        self.snapshot.as_ref()?.region(id)
    }

    /// Fetch the trailing 24 hours for the selected region. The window always
    /// ends at `now`, whatever time the map shows.
    pub fn load_time_series(&mut self, source: &dyn IntensitySource, now: DateTime<Utc>) {
        self.notices.clear();
        self.series = None;

        let Some((region_id, name)) = self
            .selected_region()
            .map(|r| (r.id, r.shortname.clone()))
        else {
            debug!("time series requested with nothing selected");
            return;
        };

        let (from, to) = series_window(now);
        let result = source.region_series(region_id, from, to);
        self.series = self
            .report(FetchContext::Series, result)
            .and_then(|series| SeriesChart::from_series(&series, &name));
    }

    pub fn frame(&self) -> RenderFrame {
        RenderFrame {
            selected_time: self.selected_time,
            mode: self.selection.mode(),
            overlay: self
                .snapshot
                .as_ref()
                .map(|s| build_overlay(s, self.map_center)),
            detail: self.selected_region().map(RegionDetail::from_region),
            series: self.series.clone(),
            notices: self.notices.clone(),
        }
    }

    fn resolve_selection(&mut self) {
        self.selected_region_id = match (&self.snapshot, self.last_click) {
            (Some(snapshot), Some(point)) => resolve_click(point, &snapshot.regions).map(|r| r.id),
            _ => None,
        };
    }

    fn report<T>(&mut self, context: FetchContext, result: ApiResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(error = %err, "fetching {} failed", context.describe());
                self.notices.push(Notice::from_error(context, &err));
                None
            }
        }
    }
}
