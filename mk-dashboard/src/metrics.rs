//! Dashboard chart panels and their data.

use crate::filter_panel::{FilterField, OptionSource};
use log::{debug, warn};
use mk_gateway::{Gateway, GatewayError};
use mk_model::{
    ChartDataError, ChartSeriesBundle, FetchSequence, FetchTicket, FilterSnapshot,
    MetricsPayload, Notice, Notifier, OptionItem, SeriesSource,
};
use serde::Serialize;
use thiserror::Error;

pub const COURSES_PATH: &str = "/Optimize/PhaseIIofEHS/getCouorAll/";

/// The three charts on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricsPanel {
    TrainingOrders,
    CourseCompletion,
    CourseByDepartment,
}

impl MetricsPanel {
    pub const ALL: [MetricsPanel; 3] = [
        MetricsPanel::TrainingOrders,
        MetricsPanel::CourseCompletion,
        MetricsPanel::CourseByDepartment,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::TrainingOrders => "Outbound training orders",
            Self::CourseCompletion => "Course completion",
            Self::CourseByDepartment => "Course completion by department",
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            Self::TrainingOrders => "/Optimize/PhaseIIofEHS/Echart/",
            Self::CourseCompletion => "/Optimize/PhaseIIofEHS/getEchartCouser/",
            Self::CourseByDepartment => "/Optimize/PhaseIIofEHS/getCousorDeptDate/",
        }
    }

    /// Department option list for this panel's filter.
    pub fn departments_path(self) -> &'static str {
        match self {
            Self::TrainingOrders => "/Optimize/PhaseIIofEHS/getDept/",
            Self::CourseCompletion | Self::CourseByDepartment => {
                "/Optimize/PhaseIIofEHS/User/getDept/"
            }
        }
    }

    pub fn option_path(self, source: OptionSource) -> &'static str {
        match source {
            OptionSource::Departments => self.departments_path(),
            OptionSource::Courses => COURSES_PATH,
        }
    }

    pub fn filter_fields(self) -> &'static [FilterField] {
        match self {
            Self::TrainingOrders => &[
                FilterField::TimeRange,
                FilterField::Departments,
                FilterField::Types,
            ],
            Self::CourseCompletion | Self::CourseByDepartment => {
                &[FilterField::Courses, FilterField::Departments]
            }
        }
    }

    /// Option lists the panel's filter fetches on mount.
    pub fn option_sources(self) -> &'static [OptionSource] {
        match self {
            Self::TrainingOrders => &[OptionSource::Departments],
            Self::CourseCompletion | Self::CourseByDepartment => {
                &[OptionSource::Courses, OptionSource::Departments]
            }
        }
    }

    /// `[bar, line]` series names.
    pub fn series_names(self) -> [String; 2] {
        let (bar, line) = match self {
            Self::TrainingOrders => ("Department orders", "Department completion rate"),
            Self::CourseCompletion => ("Department completed", "Department completion rate"),
            Self::CourseByDepartment => ("Courses completed", "Course completion rate"),
        };
        [bar.to_string(), line.to_string()]
    }

    /// Which payload arrays feed the bar and the line.
    pub fn series_sources(self) -> (SeriesSource, SeriesSource) {
        match self {
            Self::TrainingOrders => (SeriesSource::Secondary, SeriesSource::Primary),
            Self::CourseCompletion | Self::CourseByDepartment => {
                (SeriesSource::Primary, SeriesSource::Secondary)
            }
        }
    }

    /// DOM id of the chart container.
    pub fn container_id(self) -> &'static str {
        match self {
            Self::TrainingOrders => "chart-training-orders",
            Self::CourseCompletion => "chart-course-completion",
            Self::CourseByDepartment => "chart-course-by-department",
        }
    }
}

/// First-page body sent before the user has searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InitialPage {
    pub page: u32,
    pub size: u32,
}

/// Body of a metrics request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetricsRequest {
    /// `{"page": 1, "size": 10}`
    Initial(InitialPage),
    /// The filter snapshot, verbatim.
    Filtered(FilterSnapshot),
}

impl MetricsRequest {
    pub fn initial() -> Self {
        Self::Initial(InitialPage { page: 1, size: 10 })
    }
}

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Data(#[from] ChartDataError),
}

impl MetricsError {
    pub fn notice(&self) -> Notice {
        match self {
            Self::Gateway(e) => e.notice(),
            Self::Data(_) => Notice::error("Chart data is inconsistent"),
        }
    }
}

/// Fetch one panel's chart data.
pub async fn fetch_metrics(
    gateway: &Gateway,
    panel: MetricsPanel,
    request: &MetricsRequest,
) -> Result<ChartSeriesBundle, MetricsError> {
    let payload: MetricsPayload = gateway.post(panel.endpoint(), request).await?;
    let (bar, line) = panel.series_sources();
    let bundle = payload.into_bundle(bar, line, panel.series_names())?;
    debug!("{}: {} categories", panel.title(), bundle.len());
    Ok(bundle)
}

/// Fetch an option list for a panel filter.
pub async fn fetch_options(
    gateway: &Gateway,
    panel: MetricsPanel,
    source: OptionSource,
) -> Result<Vec<OptionItem>, GatewayError> {
    gateway.get(panel.option_path(source)).await
}

/// Data state of one chart panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    panel: MetricsPanel,
    sequence: FetchSequence,
    bundle: ChartSeriesBundle,
    loading: bool,
}

impl PanelState {
    pub fn new(panel: MetricsPanel) -> Self {
        Self {
            panel,
            sequence: FetchSequence::new(),
            bundle: ChartSeriesBundle::empty(panel.series_names()),
            loading: false,
        }
    }

    pub fn panel(&self) -> MetricsPanel {
        self.panel
    }

    pub fn issue(&mut self) -> FetchTicket {
        self.loading = true;
        self.sequence.issue()
    }

    /// Apply a fetch result; stale tickets are ignored and return `false`.
    /// A failure keeps the chart as it was and emits one notice.
    pub fn complete<N: Notifier>(
        &mut self,
        ticket: FetchTicket,
        result: Result<ChartSeriesBundle, MetricsError>,
        notifier: &N,
    ) -> bool {
        if !self.sequence.is_current(ticket) {
            debug!("{}: dropping stale fetch #{}", self.panel.title(), ticket.id());
            return false;
        }
        self.loading = false;
        match result {
            Ok(bundle) => self.bundle = bundle,
            Err(err) => {
                warn!("{}: {err}", self.panel.title());
                notifier.notify(err.notice());
            }
        }
        true
    }

    pub fn bundle(&self) -> &ChartSeriesBundle {
        &self.bundle
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
