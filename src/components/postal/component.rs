use leptos::prelude::*;
use log::{info, warn};

use super::lookup::{PostalSearch, branch_link, branch_names_for_postal, duplicate_prefixes};

/// Postal code search box. Reports the matched branch codes (empty when
/// nothing matched) through `on_search`.
#[component]
pub fn PostalLookup(#[prop(into)] on_search: Callback<Vec<String>>) -> impl IntoView {
	for prefix in duplicate_prefixes() {
		warn!("postal prefix {prefix} is declared more than once; merging its branches");
	}

	let (input, set_input) = signal(String::new());
	let result = RwSignal::new(None::<PostalSearch>);

	let search = move || {
		let postal = input.get_untracked();
		let postal = postal.trim();
		let outcome = PostalSearch::run(postal);
		info!(
			"postal search {postal:?}: {:?} {:?}",
			outcome.codes(),
			branch_names_for_postal(postal)
		);
		on_search.run(outcome.codes());
		result.set(Some(outcome));
	};

	view! {
		<div class="postal-lookup">
			<input
				id="postal-input"
				type="text"
				placeholder="Postal code, e.g. M5V 3L9"
				prop:value=input
				on:input=move |ev| set_input.set(event_target_value(&ev))
				on:keydown=move |ev| {
					if ev.key() == "Enter" {
						search();
					}
				}
			/>
			<button id="postal-search" on:click=move |_| search()>
				"Find branch"
			</button>
			<div id="branch-result">
				{move || match result.get() {
					None => ().into_any(),
					Some(PostalSearch::NoMatch) => PostalSearch::NO_MATCH_TEXT.into_any(),
					Some(PostalSearch::Found(found)) => {
						view! {
							"Closest Branches: "
							{found
								.into_iter()
								.map(|(code, label)| {
									view! {
										<a
											href=branch_link(&code)
											style="margin-right: 8px; cursor: pointer; color: #007bff; text-decoration: underline;"
										>
											{label}
										</a>
									}
								})
								.collect_view()}
						}
							.into_any()
					}
				}}
			</div>
		</div>
	}
}
