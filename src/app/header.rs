use leptos::{either::Either, ev::MouseEvent, prelude::*};

use crate::toggle::{MenuToggle, ThemeToggle, NAV_LINKS};

#[component]
pub fn Header(theme: RwSignal<ThemeToggle>, menu: RwSignal<MenuToggle>) -> impl IntoView {
    let toggle_theme = move |_: MouseEvent| {
        theme.update(ThemeToggle::toggle);
        log::debug!("dark mode: {}", theme.with_untracked(ThemeToggle::is_dark));
    };
    let toggle_menu = move |_: MouseEvent| {
        menu.update(MenuToggle::toggle);
        log::debug!("menu open: {}", menu.with_untracked(MenuToggle::is_open));
    };
    let bar_class = move || menu.with(MenuToggle::bar_class);

    view! {
        <header class="header">
            <h1 class="logo">"My Portfolio"</h1>
            <nav class=move || menu.with(MenuToggle::nav_class)>
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <a href=href on:click=move |_| menu.update(|m| m.select(href))>
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
                <button
                    class="dark-mode-toggle"
                    on:click=toggle_theme
                    aria-label="Toggle dark mode"
                >
                    {move || {
                        if theme.with(ThemeToggle::is_dark) {
                            Either::Left(view! { <span class="icon icon-sun">"☀"</span> })
                        } else {
                            Either::Right(view! { <span class="icon icon-moon">"☾"</span> })
                        }
                    }}
                </button>
            </nav>
            <button class="hamburger" on:click=toggle_menu aria-label="Toggle menu">
                <div class=bar_class></div>
                <div class=bar_class></div>
                <div class=bar_class></div>
            </button>
        </header>
    }
}
