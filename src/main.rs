use leptos::prelude::*;
use library_circulation::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(|| view! { <App /> })
}
