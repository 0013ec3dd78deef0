//! Search view: keyword input plus result grid.
//!
//! The result grid shows one card per repository; an empty result set shows
//! the empty-state placeholder instead, and a failed request shows an error
//! banner rather than leaving the previous view on screen.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use hublens_core::{RepositorySummary, SearchQuery, ViewState};

use crate::api;
use crate::app::{AppContext, SearchStatus};
use crate::components::icons as ic;
use crate::config::{APP_NAME, DEFAULT_QUERY};
use crate::utils::format::{description_or_fallback, format_count};

stylance::import_crate_style!(css, "src/components/navigator/search.module.css");

/// Issue a search for the current query text and publish the outcome.
///
/// An empty or whitespace-only input falls back to the default query.
fn run_search(ctx: AppContext) {
    let text = ctx.query.get_untracked();
    let trimmed = text.trim();
    let query = SearchQuery::new(if trimmed.is_empty() {
        DEFAULT_QUERY
    } else {
        trimmed
    });

    ctx.status.set(SearchStatus::Pending);
    spawn_local(async move {
        match api::search_repositories(&query).await {
            Ok(items) => {
                ctx.results.set(items);
                ctx.status.set(SearchStatus::Loaded);
            }
            Err(err) => {
                web_sys::console::error_1(&format!("search failed: {}", err).into());
                ctx.status.set(SearchStatus::Failed(err));
            }
        }
    });
}

/// Search view component: bar on top, results below.
#[component]
pub fn SearchView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // First visit: issue the default search once.
    Effect::new(move || {
        if ctx.status.get_untracked() == SearchStatus::Idle {
            run_search(ctx);
        }
    });

    view! {
        <section class=css::search>
            <SearchBar />
            <SearchResults />
        </section>
    }
}

/// Keyword input with a search button; Enter submits too.
#[component]
fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        ctx.query.set(input.value());
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            run_search(ctx);
        }
    };

    view! {
        <div class=css::searchBar>
            <span class=css::brand>{APP_NAME}</span>
            <input
                class=css::searchInput
                type="text"
                placeholder="Search repositories..."
                prop:value=move || ctx.query.get()
                node_ref=input_ref
                on:input=handle_input
                on:keydown=handle_keydown
                aria-label="Search repositories"
            />
            <button
                class=css::searchButton
                on:click=move |_: ev::MouseEvent| run_search(ctx)
                title="Search"
            >
                <Icon icon=ic::SEARCH />
                "Search"
            </button>
        </div>
    }
}

/// Loading, error, or grid depending on the request lifecycle.
#[component]
fn SearchResults() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        {move || match ctx.status.get() {
            SearchStatus::Idle | SearchStatus::Pending => {
                view! { <div class=css::loading>"Searching..."</div> }.into_any()
            }
            SearchStatus::Failed(err) => view! {
                <div class=css::errorBanner role="alert">
                    <p>"Search failed: " {err.to_string()}</p>
                </div>
            }
            .into_any(),
            SearchStatus::Loaded => view! { <ResultsGrid /> }.into_any(),
        }}
    }
}

/// One card per result; the empty-state placeholder when there are none.
#[component]
fn ResultsGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_empty = Signal::derive(move || ctx.results.get().is_empty());

    view! {
        <Show when=move || is_empty.get()>
            <div class=css::emptyState>
                <p>"No repositories found"</p>
                <p class=css::emptyHint>"Try a different keyword"</p>
            </div>
        </Show>
        <div class=css::grid>
            <For
                each=move || ctx.results.get()
                key=|repo| repo.full_name.clone()
                children=move |repo| view! { <RepoCard repo=repo /> }
            />
        </div>
    }
}

/// A single repository card with an Explore action.
#[component]
fn RepoCard(repo: RepositorySummary) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let owner = repo.owner.login.clone();
    let name = repo.name.clone();
    let description = description_or_fallback(repo.description.as_deref());
    let meta = format!(
        "\u{2b50} {} | \u{1f374} {}",
        format_count(repo.stargazers_count),
        format_count(repo.forks_count),
    );

    let handle_explore = move |_: ev::MouseEvent| {
        ctx.navigate(ViewState::repository(owner.clone(), name.clone()));
    };

    view! {
        <div class=css::card>
            <div class=css::cardTitle>{repo.full_name.clone()}</div>
            <div class=css::cardDesc>{description}</div>
            <div class=css::cardMeta>{meta}</div>
            <button class=css::exploreButton on:click=handle_explore>
                "Explore"
            </button>
        </div>
    }
}
