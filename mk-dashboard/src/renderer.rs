//! Chart instance lifecycle.
//!
//! [`ChartRenderer`] owns exactly one chart instance per container. Data
//! changes replace the whole option on that instance; nothing ever creates a
//! second one. The browser side of the instance is behind [`ChartSurface`].

use crate::option::chart_option;
use log::{debug, warn};
use mk_model::ChartSeriesBundle;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("chart is not mounted")]
    NotMounted,

    #[error("chart was disposed")]
    Disposed,

    #[error("chart library error: {0}")]
    Surface(String),
}

/// One chart instance bound to a container element.
pub trait ChartSurface {
    /// Create the instance.
    fn init(&mut self) -> Result<(), RenderError>;

    /// Replace the current option entirely (no merge).
    fn set_option(&mut self, option: &Value) -> Result<(), RenderError>;

    fn resize(&mut self);

    fn dispose(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Idle,
    Mounted,
    Disposed,
}

pub struct ChartRenderer<S: ChartSurface> {
    surface: S,
    state: Lifecycle,
    renders: u32,
}

impl<S: ChartSurface> ChartRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: Lifecycle::Idle,
            renders: 0,
        }
    }

    /// Create the chart instance. Mounting twice is a no-op.
    pub fn mount(&mut self) -> Result<(), RenderError> {
        match self.state {
            Lifecycle::Idle => {
                self.surface.init()?;
                self.state = Lifecycle::Mounted;
                debug!("chart mounted");
                Ok(())
            }
            Lifecycle::Mounted => Ok(()),
            Lifecycle::Disposed => Err(RenderError::Disposed),
        }
    }

    /// Rebuild the option from `bundle` and replace the previous one.
    pub fn render(&mut self, bundle: &ChartSeriesBundle) -> Result<(), RenderError> {
        match self.state {
            Lifecycle::Mounted => {}
            Lifecycle::Idle => return Err(RenderError::NotMounted),
            Lifecycle::Disposed => return Err(RenderError::Disposed),
        }
        let option = chart_option(bundle);
        self.surface.set_option(&option).inspect_err(|e| {
            warn!("chart render failed: {e}");
        })?;
        self.renders += 1;
        Ok(())
    }

    /// Reflow to the container size; ignored unless mounted.
    pub fn resize(&mut self) {
        if self.state == Lifecycle::Mounted {
            self.surface.resize();
        }
    }

    /// Dispose the instance. Later calls do nothing.
    pub fn unmount(&mut self) {
        if self.state == Lifecycle::Mounted {
            self.surface.dispose();
            debug!("chart disposed after {} renders", self.renders);
        }
        self.state = Lifecycle::Disposed;
    }

    pub fn is_mounted(&self) -> bool {
        self.state == Lifecycle::Mounted
    }

    /// Number of successful renders since mount.
    pub fn render_count(&self) -> u32 {
        self.renders
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeSurface {
        instances: u32,
        options: Vec<Value>,
        resizes: u32,
        disposed: u32,
        fail_next: bool,
    }

    impl ChartSurface for FakeSurface {
        fn init(&mut self) -> Result<(), RenderError> {
            self.instances += 1;
            Ok(())
        }

        fn set_option(&mut self, option: &Value) -> Result<(), RenderError> {
            if std::mem::take(&mut self.fail_next) {
                return Err(RenderError::Surface("boom".into()));
            }
            self.options.push(option.clone());
            Ok(())
        }

        fn resize(&mut self) {
            self.resizes += 1;
        }

        fn dispose(&mut self) {
            self.disposed += 1;
        }
    }

    fn bundle(bar: Vec<f64>) -> ChartSeriesBundle {
        let categories = (0..bar.len()).map(|i| format!("C{i}")).collect();
        let line = bar.iter().map(|v| v / 100.0).collect();
        ChartSeriesBundle::new(categories, bar, line, ["Bar".into(), "Line".into()]).unwrap()
    }

    #[test]
    fn data_change_reuses_the_single_instance() {
        let mut renderer = ChartRenderer::new(FakeSurface::default());
        renderer.mount().unwrap();
        renderer.mount().unwrap();

        renderer.render(&bundle(vec![1.0, 2.0])).unwrap();
        renderer.render(&bundle(vec![5.0, 6.0])).unwrap();

        let surface = renderer.surface();
        assert_eq!(surface.instances, 1);
        assert_eq!(surface.options.len(), 2);
        assert_eq!(surface.options[1]["series"][0]["data"], serde_json::json!([5.0, 6.0]));
        assert_eq!(renderer.render_count(), 2);
    }

    #[test]
    fn render_before_mount_is_rejected() {
        let mut renderer = ChartRenderer::new(FakeSurface::default());
        assert_eq!(
            renderer.render(&bundle(vec![1.0])),
            Err(RenderError::NotMounted)
        );
        assert!(renderer.surface().options.is_empty());
    }

    #[test]
    fn unmount_disposes_once_and_blocks_further_use() {
        let mut renderer = ChartRenderer::new(FakeSurface::default());
        renderer.mount().unwrap();
        renderer.resize();
        renderer.unmount();
        renderer.unmount();
        renderer.resize();

        assert_eq!(renderer.surface().disposed, 1);
        assert_eq!(renderer.surface().resizes, 1);
        assert!(!renderer.is_mounted());
        assert_eq!(renderer.mount(), Err(RenderError::Disposed));
        assert_eq!(renderer.render(&bundle(vec![1.0])), Err(RenderError::Disposed));
    }

    #[test]
    fn failed_render_is_not_retried() {
        let mut renderer = ChartRenderer::new(FakeSurface {
            fail_next: true,
            ..Default::default()
        });
        renderer.mount().unwrap();
        assert!(renderer.render(&bundle(vec![1.0])).is_err());
        assert!(renderer.surface().options.is_empty());
        assert_eq!(renderer.render_count(), 0);

        renderer.render(&bundle(vec![2.0])).unwrap();
        assert_eq!(renderer.surface().options.len(), 1);
    }

    #[test]
    fn unmount_without_mount_skips_dispose() {
        let mut renderer = ChartRenderer::new(FakeSurface::default());
        renderer.unmount();
        assert_eq!(renderer.surface().disposed, 0);
    }
}
