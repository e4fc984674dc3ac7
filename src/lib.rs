//! Library branch circulation dashboard: Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
pub mod config;
mod data;
mod pages;
mod view_state;

// Top-Level pages
use crate::config::DashboardConfig;
use crate::pages::branch::BranchPage;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the dashboard, the branch pages and handles 404's
#[component]
pub fn App(
	/// Overrides the default data sources, chart size and layout parameters.
	#[prop(optional)]
	config: Option<DashboardConfig>,
) -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(config.unwrap_or_default());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Library Circulation Dashboard" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/index.html") view=Home />
				<Route path=path!("/branch.html") view=BranchPage />
			</Routes>
		</Router>
	}
}
