//! Directory listing view.
//!
//! Rows appear in the order the API returned them; no sorting happens here.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use hublens_core::{display_location, BackBehavior, TreeEntry, ViewState};

use crate::api;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::BACK_BEHAVIOR;

stylance::import_crate_style!(css, "src/components/navigator/directory.module.css");

/// Directory view: back action, location heading, one row per entry.
#[component]
pub fn DirectoryView(owner: String, repo: String, path: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let heading = display_location(&owner, &repo, &path);
    let current = ViewState::Directory {
        owner: owner.clone(),
        repo: repo.clone(),
        path: path.clone(),
    };

    let back_label = match BACK_BEHAVIOR {
        BackBehavior::SearchOnly => "Back to search",
        BackBehavior::Parent => "Back",
    };
    let back_target = current.clone();
    let handle_back = move |_: ev::MouseEvent| {
        ctx.navigate(back_target.back(BACK_BEHAVIOR));
    };

    let entries = LocalResource::new(move || {
        let owner = owner.clone();
        let repo = repo.clone();
        let path = path.clone();
        async move { api::list_directory(&owner, &repo, &path).await }
    });

    view! {
        <section class=css::directory>
            <header class=css::header>
                <button class=css::backButton on:click=handle_back>
                    <Icon icon=ic::CHEVRON_LEFT />
                    {back_label}
                </button>
                <h2 class=css::heading>{heading}</h2>
            </header>

            <Suspense fallback=move || {
                view! { <div class=css::loading>"Loading..."</div> }
            }>
                {move || {
                    let current = current.clone();
                    entries.get().map(|result| match result {
                        Ok(list) => {
                            let current = current.clone();
                            view! {
                                <div class=css::list role="list">
                                    <For
                                        each=move || list.clone()
                                        key=|entry| entry.path.clone()
                                        children=move |entry| {
                                            view! {
                                                <EntryRow entry=entry current=current.clone() />
                                            }
                                        }
                                    />
                                </div>
                            }
                            .into_any()
                        }
                        Err(err) => view! {
                            <div class=css::error role="alert">
                                <p>"Failed to load directory: " {err.to_string()}</p>
                            </div>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>
        </section>
    }
}

/// One listing row with a folder/file glyph.
#[component]
fn EntryRow(entry: TreeEntry, current: ViewState) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_dir = entry.is_dir();
    let icon = if is_dir { ic::FOLDER } else { ic::FILE };
    let name = entry.name.clone();
    let aria_label = if is_dir {
        format!("Folder: {}", name)
    } else {
        format!("File: {}", name)
    };

    let handle_click = move |_: ev::MouseEvent| {
        if let Some(next) = current.enter(&entry) {
            ctx.navigate(next);
        }
    };

    let name_class = if is_dir {
        format!("{} {}", css::rowName, css::rowNameDir)
    } else {
        css::rowName.to_string()
    };

    view! {
        <div
            class=css::row
            on:click=handle_click
            role="listitem"
            tabindex="0"
            aria-label=aria_label
        >
            <span class=css::rowIcon aria-hidden="true">
                <Icon icon=icon />
            </span>
            <span class=name_class>{name}</span>
        </div>
    }
}
