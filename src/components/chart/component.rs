use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::ChartState;
use crate::config::{ChartSize, use_config};
use crate::data::Dataset;
use crate::view_state::{ViewMode, ViewState};

#[derive(Clone, Debug, PartialEq)]
struct Tooltip {
	lines: Vec<(String, String)>,
	x: f64,
	y: f64,
}

/// Canvas showing either the bubble clusters or the stacked bars.
///
/// A change of `view.generation` rebuilds the chart from `dataset`; a
/// change of the branch filter alone restyles the current chart.
#[component]
pub fn ChartCanvas(
	dataset: Arc<Dataset>,
	#[prop(into)] view: Signal<ViewState>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let config = use_config();
	let size = ChartSize {
		width: width.unwrap_or(config.chart.width),
		height: height.unwrap_or(config.chart.height),
		..config.chart
	};

	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<ChartState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let alive = Arc::new(AtomicBool::new(true));
	let tooltip = RwSignal::new(None::<Tooltip>);

	let alive_cleanup = alive.clone();
	on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

	let generation = Memo::new(move |_| view.with(|v| v.generation));
	let branch_filter = Memo::new(move |_| view.with(|v| v.branch_filter.clone()));

	let state_rebuild = state.clone();
	Effect::new(move |_| {
		let generation = generation.get();
		let v = view.get_untracked();
		debug!("rebuild #{generation} in {:?} mode", v.mode);
		let next = match v.mode {
			ViewMode::Cluster => {
				ChartState::cluster(&dataset, v.type_filter, v.branch_filter, size, &config.cluster)
			}
			ViewMode::Stacked => {
				ChartState::stacked(&dataset, v.branch_filter, size, config.stacked_top_n)
			}
		};
		*state_rebuild.borrow_mut() = Some(next);
		tooltip.set(None);
	});

	let state_filter = state.clone();
	Effect::new(move |_| {
		let filter = branch_filter.get();
		if let Some(ref mut s) = *state_filter.borrow_mut() {
			s.set_filter(filter);
		}
	});

	let (state_init, animate_init) = (state.clone(), animate.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(size.width as u32);
		canvas.set_height(size.height as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			error!("canvas 2d context unavailable");
			return;
		};

		let (state_anim, animate_inner, alive) =
			(state_init.clone(), animate_init.clone(), alive.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !alive.load(Ordering::Relaxed) {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = window().request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window().request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.hover = s.target_at(x, y);
			tooltip.set(s.hover.map(|target| Tooltip {
				lines: s.tooltip(target),
				x: ev.page_x() as f64 + 10.0,
				y: ev.page_y() as f64 - 28.0,
			}));
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.hover = None;
		}
		tooltip.set(None);
	};

	view! {
		<div id="chart-area">
			<canvas
				node_ref=canvas_ref
				class="chart-canvas"
				on:mousemove=on_mousemove
				on:mouseleave=on_mouseleave
				style="display: block;"
			/>
			<div
				id="tooltip"
				class="tooltip"
				style=move || {
					tooltip.with(|t| match t {
						Some(t) => format!(
							"position: absolute; pointer-events: none; opacity: 1; left: {}px; top: {}px;",
							t.x, t.y
						),
						None => "position: absolute; pointer-events: none; opacity: 0;".to_string(),
					})
				}
			>
				{move || {
					tooltip
						.get()
						.map(|t| {
							t.lines
								.into_iter()
								.map(|(label, value)| {
									view! {
										<div>
											<strong>{label}":"</strong>
											" "
											{value}
										</div>
									}
								})
								.collect_view()
						})
				}}
			</div>
		</div>
	}
}
