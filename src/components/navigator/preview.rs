//! File preview view.
//!
//! Fetches the content record, decodes the base64 payload, and renders the
//! first [`PREVIEW_MAX_CHARS`] characters in a fixed-width block. Payloads
//! that do not decode to UTF-8 get a binary notice instead of a preview.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use hublens_core::{truncate_preview, ContentError, ViewState, PREVIEW_MAX_CHARS};

use crate::api;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::BACK_BEHAVIOR;

stylance::import_crate_style!(css, "src/components/navigator/preview.module.css");

/// Text preview of a single file, with a back action to the parent
/// directory (repository root when the file sits at the top level).
#[component]
pub fn FilePreview(owner: String, repo: String, path: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let file_name = path
        .rsplit('/')
        .next()
        .unwrap_or(path.as_str())
        .to_string();
    let current = ViewState::File {
        owner: owner.clone(),
        repo: repo.clone(),
        path: path.clone(),
    };

    let handle_back = move |_: ev::MouseEvent| {
        ctx.navigate(current.back(BACK_BEHAVIOR));
    };

    let content = LocalResource::new(move || {
        let owner = owner.clone();
        let repo = repo.clone();
        let path = path.clone();
        async move { api::fetch_file(&owner, &repo, &path).await }
    });

    view! {
        <section class=css::preview>
            <header class=css::header>
                <button class=css::backButton on:click=handle_back>
                    <Icon icon=ic::CHEVRON_LEFT />
                    "Back"
                </button>
                <h2 class=css::fileName>{file_name}</h2>
            </header>

            <Suspense fallback=move || {
                view! { <div class=css::loading>"Loading..."</div> }
            }>
                {move || {
                    content.get().map(|result| match result {
                        Ok(file) => match file.decoded_text() {
                            Ok(text) => {
                                let preview =
                                    truncate_preview(&text, PREVIEW_MAX_CHARS).to_string();
                                view! { <pre class=css::contentBlock>{preview}</pre> }.into_any()
                            }
                            Err(ContentError::Binary) => view! {
                                <div class=css::binaryNotice>
                                    <p>"Binary file - no preview available"</p>
                                </div>
                            }
                            .into_any(),
                            Err(err) => view! {
                                <div class=css::error role="alert">
                                    <p>"Failed to decode file: " {err.to_string()}</p>
                                </div>
                            }
                            .into_any(),
                        },
                        Err(err) => view! {
                            <div class=css::error role="alert">
                                <p>"Failed to load file: " {err.to_string()}</p>
                            </div>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
        </section>
    }
}
