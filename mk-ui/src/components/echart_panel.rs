//! One ECharts chart bound to a reactive series bundle.
//!
//! The chart instance is created when the component mounts, re-rendered
//! whenever `bundle` changes, resized with the window and disposed on
//! unmount. The [`ChartRenderer`] is shared with the resize callback through
//! `Rc<RefCell<_>>` because that callback runs outside the Dioxus runtime.

use crate::components::ChartContainer;
use crate::js_bridge::{EchartsSurface, ResizeListener};
use dioxus::prelude::*;
use log::warn;
use mk_dashboard::ChartRenderer;
use mk_model::ChartSeriesBundle;
use std::cell::RefCell;
use std::rc::Rc;

type SharedRenderer = Rc<RefCell<ChartRenderer<EchartsSurface>>>;

#[derive(Props, Clone, PartialEq)]
pub struct EchartPanelProps {
    pub container_id: String,
    pub bundle: Memo<ChartSeriesBundle>,
    #[props(default = false)]
    pub loading: bool,
    #[props(default = 380)]
    pub height: u32,
}

#[component]
pub fn EchartPanel(props: EchartPanelProps) -> Element {
    let bundle = props.bundle;
    let container_id = props.container_id.clone();

    let renderer: SharedRenderer = use_hook(|| {
        let mut renderer = ChartRenderer::new(EchartsSurface::new(&container_id));
        if let Err(e) = renderer.mount() {
            warn!("{container_id}: {e}");
        }
        Rc::new(RefCell::new(renderer))
    });

    let listener = use_hook({
        let renderer = renderer.clone();
        move || {
            let on_resize = renderer.clone();
            Rc::new(RefCell::new(ResizeListener::new(move || {
                on_resize.borrow_mut().resize()
            })))
        }
    });

    use_effect({
        let renderer = renderer.clone();
        move || {
            let bundle = bundle.read();
            // failures are already logged by the renderer
            let _ = renderer.borrow_mut().render(&bundle);
        }
    });

    use_drop({
        let renderer = renderer.clone();
        move || {
            listener.borrow_mut().take();
            renderer.borrow_mut().unmount();
        }
    });

    let empty = bundle.read().is_empty();

    rsx! {
        ChartContainer {
            id: props.container_id.clone(),
            loading: props.loading,
            empty: empty,
            height: props.height,
        }
    }
}
