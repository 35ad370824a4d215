mod header;
mod projects;
mod scroll_reveal;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::toggle::{MenuToggle, ThemeToggle};

use header::Header;
use projects::ProjectsSection;
use scroll_reveal::use_scroll_reveal;
use sections::{AboutSection, ContactSection, Footer, HeroSection};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text="My Portfolio" />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The whole page. State is local to each mounted instance.
#[component]
pub fn Portfolio() -> impl IntoView {
    let theme = RwSignal::new(ThemeToggle::default());
    let menu = RwSignal::new(MenuToggle::default());
    let reveal = use_scroll_reveal();

    view! {
        <div class=move || theme.with(ThemeToggle::root_class)>
            <Header theme menu />
            <HeroSection reveal />
            <AboutSection reveal />
            <ProjectsSection reveal />
            <ContactSection reveal />
            <Footer />
        </div>
    }
}
