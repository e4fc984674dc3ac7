use std::sync::Arc;

use leptos::ev::{Event, MouseEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error};

use crate::components::chart::ChartCanvas;
use crate::components::postal::{PostalLookup, branch_name};
use crate::config::use_config;
use crate::data::{DataError, Dataset, load_dataset};
use crate::view_state::{ALL, BranchFilter, TypeFilter, ViewState};

/// Dashboard page: selectors, the chart area and the postal lookup.
#[component]
pub fn Home() -> impl IntoView {
	let config = use_config();
	let loaded = RwSignal::new(None::<Result<Arc<Dataset>, DataError>>);
	let view_state = RwSignal::new(ViewState::default());

	let sources = config.sources.clone();
	spawn_local(async move {
		let result = load_dataset(&sources).await.map(Arc::new);
		if let Err(e) = &result {
			error!("{e}");
		}
		loaded.set(Some(result));
	});

	// controls stay inert until the data is in
	let disabled = move || !loaded.with(|l| matches!(l, Some(Ok(_))));
	let dataset = move || loaded.with(|l| l.as_ref().and_then(|r| r.as_ref().ok()).cloned());

	let on_type = move |ev: Event| {
		let filter = TypeFilter::from_value(&event_target_value(&ev));
		let redraw = view_state.try_update(|s| s.select_type(filter));
		debug!("type select: {redraw:?}");
	};
	let on_branch = move |ev: Event| {
		let filter = BranchFilter::from_value(&event_target_value(&ev));
		let redraw = view_state.try_update(|s| s.select_branches(filter));
		debug!("branch select: {redraw:?}");
	};
	let on_toggle = move |_: MouseEvent| {
		let redraw = view_state.try_update(|s| s.toggle_mode());
		debug!("toggle view: {redraw:?}");
	};
	let on_postal = move |codes: Vec<String>| {
		view_state.update(|s| {
			s.select_branches(BranchFilter::from_codes(&codes));
		});
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
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
			<div class="dashboard">
				<h1>"Library Circulation by Cardholder Type"</h1>
				<div class="controls">
					<label for="type-select">"Cardholder type "</label>
					<select
						id="type-select"
						disabled=disabled
						prop:value=move || view_state.with(|s| s.type_filter.value())
						on:change=on_type
					>
						<option value=ALL>{ALL}</option>
						{move || {
							dataset()
								.map(|ds| {
									ds.types
										.iter()
										.map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
										.collect_view()
								})
						}}
					</select>

					<label for="branch-select">" Branch "</label>
					<select
						id="branch-select"
						disabled=disabled
						prop:value=move || view_state.with(|s| s.branch_filter.value().to_string())
						on:change=on_branch
					>
						<option value=ALL>{ALL}</option>
						{move || {
							dataset()
								.map(|ds| {
									ds.branches
										.iter()
										.map(|code| {
											let label = match branch_name(code) {
												Some(name) => format!("{code} ({name})"),
												None => code.clone(),
											};
											view! { <option value=code.clone()>{label}</option> }
										})
										.collect_view()
								})
						}}
					</select>

					<button id="toggle-view" disabled=disabled on:click=on_toggle>
						{move || view_state.with(|s| s.mode.toggle_label())}
					</button>
				</div>

				{move || {
					loaded
						.get()
						.map(|result| result.map(|ds| view! { <ChartCanvas dataset=ds view=view_state /> }))
				}}
				<Show when=move || loaded.with(Option::is_none)>
					<p class="loading">"Loading circulation data..."</p>
				</Show>

				<PostalLookup on_search=on_postal />
			</div>
		</ErrorBoundary>
	}
}
