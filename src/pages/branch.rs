use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;
use log::warn;

use crate::components::trend::{Metric, TrendChart};
use crate::config::use_config;
use crate::data::{
	AnnualPoint, BranchDirectory, DataError, correlation, correlation_text, load_branch_directory,
	load_branch_trend, totals_text,
};

/// Detail page of one branch, selected by the `branch` query parameter.
#[component]
pub fn BranchPage() -> impl IntoView {
	let config = use_config();
	let query = use_query_map();
	let code = Memo::new(move |_| query.with(|q| q.get("branch")).unwrap_or_default());

	let directory = RwSignal::new(None::<BranchDirectory>);
	let trend = RwSignal::new(None::<Result<Vec<AnnualPoint>, DataError>>);
	let tooltip = RwSignal::new(None::<(String, f64, f64)>);

	let sources = config.sources.clone();
	Effect::new(move |_| {
		let branch = code.get();
		let sources = sources.clone();
		trend.set(None);
		spawn_local(async move {
			match load_branch_directory(&sources).await {
				Ok(dir) => directory.set(Some(dir)),
				// names fall back to the raw code
				Err(e) => warn!("branch names unavailable: {e}"),
			}
			trend.set(Some(load_branch_trend(&sources, &branch).await));
		});
	});

	let name = move || {
		let code = code.get();
		directory.with(|d| {
			d.as_ref()
				.and_then(|d| d.name(&code))
				.map(str::to_string)
				.unwrap_or(code.clone())
		})
	};

	view! {
		<Title text=move || format!("Branch: {}", name()) />
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="branch-page">
				<h1 id="title">{move || format!("Branch: {}", name())}</h1>
				<h2 id="branch-name">{name}</h2>
				<a href="/">"Back to dashboard"</a>
				{move || {
					trend
						.get()
						.map(|result| {
							result
								.map(|points| {
									view! {
										<p id="correlation-text">{correlation_text(correlation(&points))}</p>
										<p id="totals-text">{totals_text(&points)}</p>
										<div id="chart-visits">
											<TrendChart points=points.clone() metric=Metric::Visits tooltip=tooltip />
										</div>
										<div id="chart-registrations">
											<TrendChart points=points metric=Metric::Registrations tooltip=tooltip />
										</div>
									}
								})
						})
				}}
				<div
					id="scatter-tooltip"
					class="tooltip"
					style=move || {
						tooltip.with(|t| match t {
							Some((_, x, y)) => format!(
								"position: absolute; pointer-events: none; opacity: 1; left: {x}px; top: {y}px;"
							),
							None => "position: absolute; pointer-events: none; opacity: 0;".to_string(),
						})
					}
				>
					{move || tooltip.with(|t| t.as_ref().map(|(text, _, _)| text.clone()))}
				</div>
			</div>
		</ErrorBoundary>
	}
}
