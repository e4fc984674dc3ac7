use super::parse::AnnualCount;
use super::types::AnnualPoint;

/// Joins the registrations and visits of `branch` by year. Years with no
/// visit count are dropped; the registration order is kept.
pub fn merge_annual(
	registrations: &[AnnualCount],
	visits: &[AnnualCount],
	branch: &str,
) -> Vec<AnnualPoint> {
	registrations
		.iter()
		.filter(|r| r.branch_code == branch)
		.filter_map(|r| {
			visits
				.iter()
				.find(|v| v.branch_code == branch && v.year == r.year)
				.map(|v| AnnualPoint {
					year: r.year,
					registrations: r.value,
					visits: v.value,
				})
		})
		.collect()
}

/// Pearson correlation between registrations and visits.
///
/// `None` for fewer than two points or when either series is constant.
pub fn correlation(points: &[AnnualPoint]) -> Option<f64> {
	if points.len() < 2 {
		return None;
	}
	let n = points.len() as f64;
	let mean_reg = points.iter().map(|p| p.registrations).sum::<f64>() / n;
	let mean_vis = points.iter().map(|p| p.visits).sum::<f64>() / n;

	let (mut cov, mut var_reg, mut var_vis) = (0.0, 0.0, 0.0);
	for p in points {
		let (dr, dv) = (p.registrations - mean_reg, p.visits - mean_vis);
		cov += dr * dv;
		var_reg += dr * dr;
		var_vis += dv * dv;
	}
	let denom = (var_reg * var_vis).sqrt();
	(denom > 0.0).then(|| cov / denom)
}

/// Sentence summarising the correlation for the branch page.
pub fn correlation_text(correlation: Option<f64>) -> String {
	let Some(r) = correlation else {
		return "Not enough data to analyze trends.".to_string();
	};
	let rounded = format!("{r:.2}");
	let mut text = format!("The correlation between new library cards and visits is {rounded}. ");
	if rounded.parse::<f64>().unwrap_or(r) >= 0.0 {
		text.push_str(
			"which suggest this is a positive relationship - when registrations increase, visits also tend to increase.",
		);
	} else {
		text.push_str(
			"which suggest this is a negative relationship - when registrations increase, visits tend to decrease.",
		);
	}
	text
}

pub fn totals_text(points: &[AnnualPoint]) -> String {
	let visits: f64 = points.iter().map(|p| p.visits).sum();
	let regs: f64 = points.iter().map(|p| p.registrations).sum();
	format!(
		"Total Visits: {} | Total New Cards: {}",
		format_thousands(visits),
		format_thousands(regs)
	)
}

/// Formats a count with comma thousands separators, rounding to an integer.
pub fn format_thousands(value: f64) -> String {
	let rounded = value.round();
	let digits = format!("{}", rounded.abs() as u64);
	let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
	if rounded < 0.0 {
		out.push('-');
	}
	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(c);
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	fn count(code: &str, year: i32, value: f64) -> AnnualCount {
		AnnualCount {
			branch_code: code.into(),
			year,
			value,
		}
	}

	#[test]
	fn merge_keeps_years_with_visits() {
		let regs = [
			count("AB", 2019, 10.0),
			count("AB", 2020, 20.0),
			count("BB", 2019, 99.0),
		];
		let visits = [count("AB", 2019, 100.0), count("BB", 2020, 1.0)];
		let merged = merge_annual(&regs, &visits, "AB");
		assert_eq!(
			merged,
			vec![AnnualPoint {
				year: 2019,
				registrations: 10.0,
				visits: 100.0
			}]
		);
	}

	#[test]
	fn correlation_of_linear_series_is_one() {
		let points: Vec<AnnualPoint> = (0..4)
			.map(|i| AnnualPoint {
				year: 2019 + i,
				registrations: i as f64,
				visits: 10.0 * i as f64 + 3.0,
			})
			.collect();
		let r = correlation(&points).unwrap();
		assert!((r - 1.0).abs() < 1e-9);
		assert!(correlation_text(Some(r)).contains("is 1.00. which suggest this is a positive"));
	}

	#[test]
	fn degenerate_correlation_is_none() {
		let flat = [
			AnnualPoint {
				year: 2019,
				registrations: 5.0,
				visits: 1.0,
			},
			AnnualPoint {
				year: 2020,
				registrations: 5.0,
				visits: 2.0,
			},
		];
		assert_eq!(correlation(&flat), None);
		assert_eq!(correlation(&flat[..1]), None);
		assert_eq!(correlation_text(None), "Not enough data to analyze trends.");
		assert!(correlation_text(Some(-0.5)).contains("negative relationship"));
	}

	#[test]
	fn thousands_separators() {
		assert_eq!(format_thousands(0.0), "0");
		assert_eq!(format_thousands(999.0), "999");
		assert_eq!(format_thousands(1234567.0), "1,234,567");
		assert_eq!(format_thousands(-4500.4), "-4,500");
	}
}
