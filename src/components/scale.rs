//! Small d3-style scales shared by the charts.

/// Linear mapping from a numeric domain to a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
	pub domain: (f64, f64),
	pub range: (f64, f64),
}

impl LinearScale {
	pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
		Self { domain, range }
	}

	pub fn apply(&self, v: f64) -> f64 {
		let (d0, d1) = self.domain;
		let (r0, r1) = self.range;
		if d1 == d0 {
			return (r0 + r1) / 2.0;
		}
		r0 + (v - d0) / (d1 - d0) * (r1 - r0)
	}

	/// Inverse of [`apply`](Self::apply).
	pub fn invert(&self, px: f64) -> f64 {
		let (d0, d1) = self.domain;
		let (r0, r1) = self.range;
		if r1 == r0 {
			return d0;
		}
		d0 + (px - r0) / (r1 - r0) * (d1 - d0)
	}

	/// Extends the domain outward to round tick values.
	pub fn nice(mut self, count: usize) -> Self {
		let (mut start, mut stop) = self.domain;
		for _ in 0..10 {
			let step = tick_increment(start, stop, count);
			if step <= 0.0 || !step.is_finite() {
				break;
			}
			let (s, e) = ((start / step).floor() * step, (stop / step).ceil() * step);
			if s == start && e == stop {
				break;
			}
			(start, stop) = (s, e);
		}
		self.domain = (start, stop);
		self
	}

	/// Roughly `count` evenly spaced round values inside the domain.
	pub fn ticks(&self, count: usize) -> Vec<f64> {
		let (start, stop) = self.domain;
		let step = tick_increment(start, stop, count);
		if step <= 0.0 || !step.is_finite() {
			return vec![start];
		}
		let (first, last) = ((start / step).ceil() as i64, (stop / step).floor() as i64);
		(first..=last).map(|i| i as f64 * step).collect()
	}
}

fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
	let raw = (stop - start) / count.max(1) as f64;
	if raw <= 0.0 {
		return 0.0;
	}
	let power = raw.log10().floor();
	let error = raw / 10f64.powf(power);
	let factor = if error >= 50f64.sqrt() {
		10.0
	} else if error >= 10f64.sqrt() {
		5.0
	} else if error >= 2f64.sqrt() {
		2.0
	} else {
		1.0
	};
	factor * 10f64.powf(power)
}

/// Square-root scale: output area, not radius, is proportional to input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SqrtScale {
	max: f64,
	range: (f64, f64),
}

impl SqrtScale {
	/// Domain is always `[0, max]`.
	pub fn new(max: f64, range: (f64, f64)) -> Self {
		Self { max, range }
	}

	pub fn apply(&self, v: f64) -> f64 {
		let (r0, r1) = self.range;
		if self.max <= 0.0 {
			return r0;
		}
		r0 + (v.max(0.0).sqrt() / self.max.sqrt()) * (r1 - r0)
	}
}

/// Categorical axis dividing a range into equal bands.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
	domain: Vec<String>,
	range: (f64, f64),
	padding: f64,
}

impl BandScale {
	pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
		Self {
			domain,
			range,
			padding,
		}
	}

	fn step(&self) -> f64 {
		let n = self.domain.len() as f64;
		let (r0, r1) = self.range;
		(r1 - r0) / (n + self.padding).max(1.0)
	}

	pub fn bandwidth(&self) -> f64 {
		self.step() * (1.0 - self.padding)
	}

	/// Left edge of the band for `key`.
	pub fn position(&self, key: &str) -> Option<f64> {
		let i = self.domain.iter().position(|k| k == key)?;
		Some(self.range.0 + self.step() * (self.padding + i as f64))
	}

	/// Key of the band containing `px`.
	pub fn key_at(&self, px: f64) -> Option<&str> {
		self.domain.iter().map(String::as_str).find(|k| {
			self.position(k)
				.is_some_and(|x| px >= x && px <= x + self.bandwidth())
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sqrt_scale_is_area_proportional() {
		let s = SqrtScale::new(400.0, (4.0, 20.0));
		assert_eq!(s.apply(0.0), 4.0);
		assert_eq!(s.apply(400.0), 20.0);
		assert_eq!(s.apply(100.0), 12.0);
		assert_eq!(SqrtScale::new(0.0, (4.0, 20.0)).apply(10.0), 4.0);
	}

	#[test]
	fn linear_nice_and_ticks() {
		let s = LinearScale::new((0.0, 9_731.0), (450.0, 0.0)).nice(10);
		assert_eq!(s.domain, (0.0, 10_000.0));
		assert_eq!(s.ticks(10).len(), 11);
		assert_eq!(s.apply(5_000.0), 225.0);
		assert_eq!(s.invert(225.0), 5_000.0);
	}

	#[test]
	fn year_ticks_are_integers() {
		let s = LinearScale::new((2019.0, 2023.0), (0.0, 100.0)).nice(5);
		assert_eq!(s.ticks(5), vec![2019.0, 2020.0, 2021.0, 2022.0, 2023.0]);
	}

	#[test]
	fn band_positions() {
		let b = BandScale::new(vec!["A".into(), "B".into()], (0.0, 100.0), 0.0);
		assert_eq!(b.position("B"), Some(50.0));
		assert_eq!(b.bandwidth(), 50.0);
		assert_eq!(b.key_at(75.0), Some("B"));
		assert_eq!(b.position("C"), None);
	}
}
