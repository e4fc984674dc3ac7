use web_sys::CanvasRenderingContext2d;

use super::state::{ChartState, HoverTarget, Scene};
use crate::components::{cluster, stacked};

pub fn render(state: &ChartState, ctx: &CanvasRenderingContext2d) {
	let size = &state.size;
	ctx.set_fill_style_str("#ffffff");
	ctx.fill_rect(0.0, 0.0, size.width, size.height);
	ctx.save();
	let _ = ctx.translate(size.margin.left, size.margin.top);
	match &state.scene {
		Scene::Cluster(layout) => {
			let hovered = match state.hover {
				Some(HoverTarget::Bubble(i)) => Some(i),
				_ => None,
			};
			cluster::render::render(layout, &state.filter, state.highlight_t, hovered, ctx);
		}
		Scene::Stacked(scene) => {
			stacked::render::render(scene, &state.filter, state.highlight_t, ctx);
		}
	}
	ctx.restore();
}
