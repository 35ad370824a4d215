use leptos::prelude::*;

use crate::{
    catalog::{projects, Project},
    reveal::{RevealSet, RevealTarget},
};

#[component]
pub fn ProjectsSection(reveal: RwSignal<RevealSet>) -> impl IntoView {
    let target = RevealTarget::Projects;
    view! {
        <section
            id="projects"
            class=move || reveal.with(|r| r.class_for(target, "section projects"))
            data-reveal=target.to_string()
        >
            <h3>"Projects"</h3>
            <ProjectGrid reveal />
        </section>
    }
}

/// One card per catalog entry, in catalog order.
#[component]
pub fn ProjectGrid(reveal: RwSignal<RevealSet>) -> impl IntoView {
    view! {
        <div class="project-grid">
            {projects()
                .iter()
                .map(|project| view! { <ProjectCard project=*project reveal /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(project: Project, reveal: RwSignal<RevealSet>) -> impl IntoView {
    let target = RevealTarget::ProjectCard(project.id);
    view! {
        <div
            class=move || reveal.with(|r| r.class_for(target, "project-card"))
            data-reveal=target.to_string()
        >
            <img class="project-image" src=project.image_src() alt=project.title />
            <div class="project-info">
                <h4>{project.title}</h4>
                <p>{project.description}</p>
                <div class="project-links">
                    <a href=project.link target="_blank" rel="noopener noreferrer">
                        "View Project"
                    </a>
                    <a href=project.github target="_blank" rel="noopener noreferrer">
                        "Github"
                    </a>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render_grid(reveal: RevealSet) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let reveal = RwSignal::new(reveal);
            view! { <ProjectGrid reveal /> }.to_html()
        })
    }

    #[test]
    fn test_grid_renders_in_catalog_order() {
        let html = render_grid(RevealSet::new());
        let positions = projects()
            .iter()
            .map(|p| {
                let key = format!("data-reveal=\"project-{}\"", p.id);
                html.find(&key)
                    .unwrap_or_else(|| panic!("card {} not rendered", p.id))
            })
            .collect::<Vec<_>>();

        assert_eq!(positions.len(), 4);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_card_links_and_image() {
        let html = render_grid(RevealSet::new());
        for project in projects() {
            assert!(html.contains(&format!("href=\"{}\"", project.link)));
            assert!(html.contains(&format!("href=\"{}\"", project.github)));
            assert!(html.contains(&format!("src=\"{}\"", project.image_src())));
        }
        assert_eq!(html.matches("target=\"_blank\"").count(), 8);
    }

    #[test]
    fn test_revealed_cards_are_active() {
        let mut set = RevealSet::new();
        set.observe([(RevealTarget::ProjectCard(2), 0.0)], 800.0);
        let html = render_grid(set);

        assert_eq!(html.matches("scroll-reveal active").count(), 1);
        assert_eq!(html.matches("scroll-reveal").count(), 4);
    }
}
