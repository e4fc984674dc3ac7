use crate::components::scale::LinearScale;
use crate::data::AnnualPoint;

pub const WIDTH: f64 = 550.0;
pub const HEIGHT: f64 = 320.0;
pub const MARGIN: f64 = 70.0;
pub const POINT_RADIUS: f64 = 6.0;

/// Which series of an [`AnnualPoint`] a chart plots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
	Visits,
	Registrations,
}

impl Metric {
	pub fn label(self) -> &'static str {
		match self {
			Self::Visits => "Visits",
			Self::Registrations => "Registrations",
		}
	}

	pub fn value(self, p: &AnnualPoint) -> f64 {
		match self {
			Self::Visits => p.visits,
			Self::Registrations => p.registrations,
		}
	}
}

/// Year-on-x line chart of one metric.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendScene {
	pub metric: Metric,
	pub points: Vec<AnnualPoint>,
	pub x: LinearScale,
	pub y: LinearScale,
}

impl TrendScene {
	pub fn new(points: Vec<AnnualPoint>, metric: Metric) -> Self {
		let (min_year, max_year) = points.iter().fold((f64::MAX, f64::MIN), |(lo, hi), p| {
			(lo.min(p.year as f64), hi.max(p.year as f64))
		});
		let x_domain = if points.is_empty() {
			(0.0, 1.0)
		} else {
			(min_year, max_year)
		};
		let max_value = points.iter().map(|p| metric.value(p)).fold(0.0, f64::max);
		Self {
			metric,
			x: LinearScale::new(x_domain, (MARGIN, WIDTH - MARGIN)).nice(10),
			y: LinearScale::new((0.0, max_value.max(1.0)), (HEIGHT - MARGIN, MARGIN)).nice(10),
			points,
		}
	}

	/// Pixel position of every point, in data order.
	pub fn positions(&self) -> Vec<(f64, f64)> {
		self.points
			.iter()
			.map(|p| (self.x.apply(p.year as f64), self.y.apply(self.metric.value(p))))
			.collect()
	}

	/// Integer year ticks.
	pub fn year_ticks(&self) -> Vec<i32> {
		let mut years: Vec<i32> = self
			.x
			.ticks(10)
			.into_iter()
			.filter(|t| t.fract() == 0.0)
			.map(|t| t as i32)
			.collect();
		years.dedup();
		years
	}

	pub fn point_at(&self, px: f64, py: f64) -> Option<usize> {
		self.positions().iter().position(|&(x, y)| {
			(x - px).powi(2) + (y - py).powi(2) <= (POINT_RADIUS + 2.0).powi(2)
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn points() -> Vec<AnnualPoint> {
		(2019..=2023)
			.map(|year| AnnualPoint {
				year,
				registrations: 100.0 * (year - 2018) as f64,
				visits: 1_000.0,
			})
			.collect()
	}

	#[test]
	fn scales_cover_the_data() {
		let scene = TrendScene::new(points(), Metric::Registrations);
		assert_eq!(scene.y.domain, (0.0, 500.0));
		assert_eq!(scene.year_ticks(), vec![2019, 2020, 2021, 2022, 2023]);
		let pos = scene.positions();
		assert_eq!(pos[0].0, MARGIN);
		assert_eq!(pos[4].0, WIDTH - MARGIN);
		assert_eq!(pos[4].1, MARGIN);
	}

	#[test]
	fn hover_finds_point() {
		let scene = TrendScene::new(points(), Metric::Visits);
		let (x, y) = scene.positions()[2];
		assert_eq!(scene.point_at(x + 3.0, y - 3.0), Some(2));
		assert_eq!(scene.point_at(0.0, 0.0), None);
	}

	#[test]
	fn empty_series_does_not_panic() {
		let scene = TrendScene::new(Vec::new(), Metric::Visits);
		assert!(scene.positions().is_empty());
		assert_eq!(scene.point_at(10.0, 10.0), None);
	}
}
