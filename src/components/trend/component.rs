use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::scene::{HEIGHT, Metric, TrendScene, WIDTH};
use crate::data::{AnnualPoint, format_thousands};

/// Static line chart of one metric per year, redrawn on hover only.
#[component]
pub fn TrendChart(
	points: Vec<AnnualPoint>,
	metric: Metric,
	/// Shared tooltip element signal, so both charts use one tooltip.
	tooltip: RwSignal<Option<(String, f64, f64)>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let scene = Rc::new(TrendScene::new(points, metric));
	let hovered: Rc<Cell<Option<usize>>> = Rc::new(Cell::new(None));

	let context = move || {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		canvas
			.get_context("2d")
			.ok()
			.flatten()?
			.dyn_into::<CanvasRenderingContext2d>()
			.ok()
	};

	let scene_init = scene.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(WIDTH as u32);
		canvas.set_height(HEIGHT as u32);
		if let Some(ctx) = context() {
			render::render(&scene_init, None, &ctx);
		}
	});

	let (scene_mm, hovered_mm) = (scene.clone(), hovered.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let hit = scene_mm.point_at(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		if hit != hovered_mm.get() {
			hovered_mm.set(hit);
			if let Some(ctx) = context() {
				render::render(&scene_mm, hit, &ctx);
			}
		}
		tooltip.set(hit.map(|i| {
			let p = &scene_mm.points[i];
			(
				format!(
					"Year: {} | {}: {}",
					p.year,
					metric.label(),
					format_thousands(metric.value(p))
				),
				ev.page_x() as f64 + 12.0,
				ev.page_y() as f64 - 20.0,
			)
		}));
	};

	let on_mouseleave = move |_: MouseEvent| {
		if hovered.take().is_some() {
			if let Some(ctx) = context() {
				render::render(&scene, None, &ctx);
			}
		}
		tooltip.set(None);
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="trend-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block;"
		/>
	}
}
