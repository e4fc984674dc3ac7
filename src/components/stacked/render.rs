use web_sys::CanvasRenderingContext2d;

use super::scene::StackedScene;
use crate::components::cluster::highlight::DIMMED_OPACITY;
use crate::data::{CardholderType, Year, format_thousands};
use crate::view_state::BranchFilter;

pub fn render(
	scene: &StackedScene,
	filter: &BranchFilter,
	highlight_t: f64,
	ctx: &CanvasRenderingContext2d,
) {
	draw_y_axis(scene, ctx);
	let bar_width = scene.bar_width();

	for (i, stack) in scene.stacks.iter().enumerate() {
		let alpha = if filter.matches(&stack.branch_code) {
			1.0
		} else {
			1.0 - (1.0 - DIMMED_OPACITY) * highlight_t
		};
		ctx.set_global_alpha(alpha);
		for bar in &stack.bars {
			let Some(x) = scene.bar_x(i, bar.year) else {
				continue;
			};
			for band in bar.bands.iter().filter(|b| b.height() > 0) {
				let (top, bottom) = (scene.y.apply(band.y1 as f64), scene.y.apply(band.y0 as f64));
				ctx.set_fill_style_str(band.cardholder_type.color());
				ctx.fill_rect(x, top, bar_width, bottom - top);
			}
			if bar.year == Year::Y2023 {
				ctx.set_stroke_style_str("#333");
				ctx.set_line_width(1.0);
				let top = scene.y.apply(bar.sums.total() as f64);
				ctx.stroke_rect(x, top, bar_width, scene.height - top);
			}
		}
		ctx.set_global_alpha(1.0);

		if let Some(left) = scene.x.position(&stack.branch_code) {
			ctx.set_fill_style_str("#333");
			ctx.set_font("12px sans-serif");
			ctx.set_text_align("center");
			let _ = ctx.fill_text(
				&stack.branch_code,
				left + scene.x.bandwidth() / 2.0,
				scene.height + 16.0,
			);
			ctx.set_text_align("start");
		}
	}

	draw_legend(scene.width, ctx);
}

fn draw_y_axis(scene: &StackedScene, ctx: &CanvasRenderingContext2d) {
	ctx.set_font("11px sans-serif");
	for tick in scene.y.ticks(10) {
		let y = scene.y.apply(tick);
		ctx.set_stroke_style_str("#e5e5e5");
		ctx.set_line_width(1.0);
		ctx.begin_path();
		ctx.move_to(0.0, y);
		ctx.line_to(scene.width, y);
		ctx.stroke();
		ctx.set_fill_style_str("#666");
		let _ = ctx.fill_text(&format_thousands(tick), 2.0, y - 3.0);
	}
}

fn draw_legend(width: f64, ctx: &CanvasRenderingContext2d) {
	ctx.set_font("12px sans-serif");
	for (i, ty) in CardholderType::ALL.iter().rev().enumerate() {
		let (x, y) = (width - 150.0, i as f64 * 25.0);
		ctx.set_fill_style_str(ty.color());
		ctx.fill_rect(x - 6.0, y - 6.0, 12.0, 12.0);
		ctx.set_fill_style_str("#333");
		let _ = ctx.fill_text(ty.as_str(), x + 15.0, y + 4.0);
	}
}
