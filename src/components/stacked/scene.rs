use super::aggregate::{BranchStack, max_bar, top_branches};
use crate::components::scale::{BandScale, LinearScale};
use crate::data::{CardholderType, CirculationRecord, Year};

const BAND_PADDING: f64 = 0.2;
const BAR_GAP: f64 = 2.0;

/// A hovered bar segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarHit {
	pub stack: usize,
	pub year: Year,
	pub cardholder_type: Option<CardholderType>,
}

/// Positioned stacked bars of the top branches.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedScene {
	pub stacks: Vec<BranchStack>,
	pub x: BandScale,
	pub y: LinearScale,
	pub width: f64,
	pub height: f64,
}

impl StackedScene {
	pub fn new<'a>(
		records: impl IntoIterator<Item = &'a CirculationRecord>,
		top_n: usize,
		width: f64,
		height: f64,
	) -> Self {
		let stacks = top_branches(records, top_n);
		let x = BandScale::new(
			stacks.iter().map(|s| s.branch_code.clone()).collect(),
			(0.0, width),
			BAND_PADDING,
		);
		let y = LinearScale::new((0.0, max_bar(&stacks).max(1) as f64), (height, 0.0)).nice(10);
		Self {
			stacks,
			x,
			y,
			width,
			height,
		}
	}

	pub fn bar_width(&self) -> f64 {
		(self.x.bandwidth() / Year::ALL.len() as f64 - BAR_GAP).max(1.0)
	}

	/// Left edge of the bar of `year` within the group of `stack`.
	pub fn bar_x(&self, stack: usize, year: Year) -> Option<f64> {
		let left = self.x.position(&self.stacks.get(stack)?.branch_code)?;
		Some(left + year.index() as f64 * (self.bar_width() + BAR_GAP))
	}

	pub fn hit(&self, px: f64, py: f64) -> Option<BarHit> {
		let code = self.x.key_at(px)?;
		let stack = self.stacks.iter().position(|s| s.branch_code == code)?;
		let year = Year::ALL.into_iter().find(|&year| {
			self.bar_x(stack, year)
				.is_some_and(|x| px >= x && px <= x + self.bar_width())
		})?;
		let value = self.y.invert(py);
		let bar = &self.stacks[stack].bars[year.index()];
		let cardholder_type = bar
			.bands
			.iter()
			.find(|b| b.height() > 0 && value >= b.y0 as f64 && value <= b.y1 as f64)
			.map(|b| b.cardholder_type);
		Some(BarHit {
			stack,
			year,
			cardholder_type,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(code: &str, year: Year, ty: CardholderType, circulation: u64) -> CirculationRecord {
		CirculationRecord {
			branch_code: code.into(),
			year,
			cardholder_type: ty,
			circulation,
		}
	}

	#[test]
	fn hit_finds_band_under_cursor() {
		let records = vec![
			record("AB", Year::Y2022, CardholderType::Child, 600),
			record("AB", Year::Y2022, CardholderType::Adult, 400),
			record("AB", Year::Y2023, CardholderType::Teen, 200),
		];
		let scene = StackedScene::new(&records, 10, 120.0, 100.0);
		assert_eq!(scene.y.domain, (0.0, 1000.0));

		let x = scene.bar_x(0, Year::Y2022).unwrap() + 1.0;
		// child band spans 0..600, i.e. pixels 100..40
		let hit = scene.hit(x, 70.0).unwrap();
		assert_eq!(hit.year, Year::Y2022);
		assert_eq!(hit.cardholder_type, Some(CardholderType::Child));
		assert_eq!(
			scene.hit(x, 20.0).unwrap().cardholder_type,
			Some(CardholderType::Adult)
		);

		let x23 = scene.bar_x(0, Year::Y2023).unwrap() + 1.0;
		assert_eq!(scene.hit(x23, 90.0).unwrap().year, Year::Y2023);
		assert_eq!(scene.hit(x23, 10.0).unwrap().cardholder_type, None);
	}
}
