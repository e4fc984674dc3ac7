use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scene::{HEIGHT, MARGIN, POINT_RADIUS, TrendScene, WIDTH};
use crate::data::format_thousands;

pub fn render(scene: &TrendScene, hovered: Option<usize>, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#ffffff");
	ctx.fill_rect(0.0, 0.0, WIDTH, HEIGHT);
	draw_axes(scene, ctx);

	let positions = scene.positions();
	ctx.set_stroke_style_str("#777");
	ctx.set_line_width(2.0);
	ctx.begin_path();
	for (i, &(x, y)) in positions.iter().enumerate() {
		if i == 0 {
			ctx.move_to(x, y);
		} else {
			ctx.line_to(x, y);
		}
	}
	ctx.stroke();

	for (i, &(x, y)) in positions.iter().enumerate() {
		ctx.begin_path();
		let radius = if hovered == Some(i) {
			POINT_RADIUS + 2.0
		} else {
			POINT_RADIUS
		};
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str("#4da3ff");
		ctx.fill();
	}
}

fn draw_axes(scene: &TrendScene, ctx: &CanvasRenderingContext2d) {
	let (x0, x1) = (MARGIN, WIDTH - MARGIN);
	let (y0, y1) = (HEIGHT - MARGIN, MARGIN);
	ctx.set_stroke_style_str("#000");
	ctx.set_line_width(1.0);
	ctx.begin_path();
	ctx.move_to(x0, y0);
	ctx.line_to(x1, y0);
	ctx.move_to(x0, y0);
	ctx.line_to(x0, y1);
	ctx.stroke();

	ctx.set_fill_style_str("#000");
	ctx.set_font("10px sans-serif");
	ctx.set_text_align("center");
	for year in scene.year_ticks() {
		let x = scene.x.apply(year as f64);
		ctx.begin_path();
		ctx.move_to(x, y0);
		ctx.line_to(x, y0 + 6.0);
		ctx.stroke();
		let _ = ctx.fill_text(&year.to_string(), x, y0 + 18.0);
	}

	ctx.set_text_align("end");
	for tick in scene.y.ticks(10) {
		let y = scene.y.apply(tick);
		ctx.begin_path();
		ctx.move_to(x0 - 6.0, y);
		ctx.line_to(x0, y);
		ctx.stroke();
		let _ = ctx.fill_text(&format_thousands(tick), x0 - 9.0, y + 3.0);
	}

	ctx.set_font("12px sans-serif");
	ctx.set_text_align("center");
	let _ = ctx.fill_text("Year", WIDTH / 2.0, HEIGHT - 10.0);
	ctx.save();
	let _ = ctx.translate(10.0, HEIGHT / 2.0);
	let _ = ctx.rotate(-PI / 2.0);
	let _ = ctx.fill_text(scene.metric.label(), 0.0, 0.0);
	ctx.restore();
	ctx.set_text_align("start");
}
