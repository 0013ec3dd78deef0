//! Root navigator component.
//!
//! Owns the single view container and renders exactly one view at a time.

use leptos::prelude::*;

use hublens_core::ViewState;

use super::{DirectoryView, FilePreview, SearchView};
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/navigator/navigator.module.css");

/// Renders whichever of the three views the current state names.
///
/// Navigation swaps the rendered child by producing a new [`ViewState`],
/// never by mutating mounted markup in place, so two overlapping navigation
/// actions cannot interleave their output.
#[component]
pub fn Navigator() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::container>
            {move || match ctx.view.get() {
                ViewState::Search => view! { <SearchView /> }.into_any(),
                ViewState::Directory { owner, repo, path } => {
                    view! { <DirectoryView owner=owner repo=repo path=path /> }.into_any()
                }
                ViewState::File { owner, repo, path } => {
                    view! { <FilePreview owner=owner repo=repo path=path /> }.into_any()
                }
            }}
        </div>
    }
}
