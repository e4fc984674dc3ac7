use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::highlight::{annotation, node_style};
use super::layout::{Bubble, ClusterLayout, anchor_x};
use super::types::ClusterNode;
use crate::data::{CardholderType, Year};
use crate::view_state::BranchFilter;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// Draws the bubbles, year labels, legend and change annotation in the
/// already translated inner chart area.
pub fn render(
	layout: &ClusterLayout,
	filter: &BranchFilter,
	highlight_t: f64,
	hovered: Option<usize>,
	ctx: &CanvasRenderingContext2d,
) {
	draw_year_labels(layout, ctx);
	let t = ease_out_cubic(highlight_t);

	for (i, bubble) in layout.bubbles.iter().enumerate() {
		let style = node_style(filter, bubble.node.branch_code());
		let alpha = 1.0 - (1.0 - style.opacity) * t;
		ctx.set_global_alpha(alpha);
		fill_bubble(bubble, ctx);

		ctx.begin_path();
		let _ = ctx.arc(bubble.x, bubble.y, bubble.radius, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(match bubble.node.year() {
			Year::Y2023 => "#000",
			Year::Y2022 => "#fff",
		});
		ctx.set_line_width(style.stroke_width);
		ctx.stroke();

		if hovered == Some(i) {
			ctx.begin_path();
			let _ = ctx.arc(bubble.x, bubble.y, bubble.radius + 2.0, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str("rgba(0, 0, 0, 0.6)");
			ctx.set_line_width(1.0);
			ctx.stroke();
		}
	}
	ctx.set_global_alpha(1.0);

	draw_legend(layout.width, ctx);

	if let Some(note) = annotation(filter, &layout.bubbles) {
		ctx.set_fill_style_str(note.color());
		ctx.set_font("bold 14px sans-serif");
		ctx.set_text_align("center");
		let _ = ctx.fill_text(&note.label(), note.x, note.y - 6.0);
		ctx.set_text_align("start");
	}
}

fn fill_bubble(bubble: &Bubble, ctx: &CanvasRenderingContext2d) {
	let (x, y, r) = (bubble.x, bubble.y, bubble.radius);
	match &bubble.node {
		ClusterNode::Raw(record) => {
			ctx.begin_path();
			let _ = ctx.arc(x, y, r, 0.0, 2.0 * PI);
			ctx.set_fill_style_str(record.cardholder_type.color());
			ctx.fill();
		}
		ClusterNode::Aggregate(agg) if agg.total == 0 => {
			ctx.begin_path();
			let _ = ctx.arc(x, y, r, 0.0, 2.0 * PI);
			ctx.set_fill_style_str("#bab0ac");
			ctx.fill();
		}
		ClusterNode::Aggregate(agg) => {
			// pie slices clockwise from 12 o'clock
			let mut start = -PI / 2.0;
			for part in &agg.types {
				let sweep = 2.0 * PI * part.value as f64 / agg.total as f64;
				ctx.begin_path();
				ctx.move_to(x, y);
				let _ = ctx.arc(x, y, r, start, start + sweep);
				ctx.close_path();
				ctx.set_fill_style_str(part.cardholder_type.color());
				ctx.fill();
				start += sweep;
			}
		}
	}
}

fn draw_year_labels(layout: &ClusterLayout, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#555");
	ctx.set_font("13px sans-serif");
	ctx.set_text_align("center");
	for year in Year::ALL {
		let _ = ctx.fill_text(year.as_str(), anchor_x(year, layout.width), -14.0);
	}
	ctx.set_text_align("start");
}

fn draw_legend(width: f64, ctx: &CanvasRenderingContext2d) {
	ctx.set_font("12px sans-serif");
	for (i, ty) in CardholderType::ALL.iter().enumerate() {
		let (x, y) = (width - 150.0, i as f64 * 25.0);
		ctx.begin_path();
		let _ = ctx.arc(x, y, 6.0, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(ty.color());
		ctx.fill();
		ctx.set_fill_style_str("#333");
		let _ = ctx.fill_text(ty.as_str(), x + 15.0, y + 4.0);
	}
}
