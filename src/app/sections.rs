use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::reveal::{RevealSet, RevealTarget};

#[component]
pub fn HeroSection(reveal: RwSignal<RevealSet>) -> impl IntoView {
    let target = RevealTarget::Hero;
    view! {
        <section
            class=move || reveal.with(|r| r.class_for(target, "hero"))
            data-reveal=target.to_string()
        >
            <div class="hero-content">
                <h2>"Hi, I'm " <span class="highlight">"Donovan Delport"</span></h2>
                <p>
                    "I'm a front-end developer passionate about creating beautiful, user-friendly websites using HTML, CSS, and JavaScript."
                </p>
                <a href="#projects" class="btn">
                    "View My Work"
                </a>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection(reveal: RwSignal<RevealSet>) -> impl IntoView {
    let target = RevealTarget::About;
    view! {
        <section
            id="about"
            class=move || reveal.with(|r| r.class_for(target, "section"))
            data-reveal=target.to_string()
        >
            <h3>"About Me"</h3>
            <p>
                "I started learning web development to bring creative ideas to life on the internet. I focus on building clean, responsive, and accessible websites. Currently, I'm exploring React and improving my skills one project at a time."
            </p>
        </section>
    }
}

#[component]
pub fn ContactSection(reveal: RwSignal<RevealSet>) -> impl IntoView {
    let target = RevealTarget::Contact;
    view! {
        <section
            id="contact"
            class=move || reveal.with(|r| r.class_for(target, "section contact"))
            data-reveal=target.to_string()
        >
            <h3>"Contact Me"</h3>
            <p>"Let's connect! You can reach me via email or through my social media profiles."</p>
            <div class="social-links">
                <a
                    href="https://github.com"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="GitHub"
                >
                    <span class="social-icon" aria-hidden="true">"</>"</span>
                    <span class="social-label">"GitHub"</span>
                </a>
                <a
                    href="https://linkedin.com"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="LinkedIn"
                >
                    <span class="social-icon" aria-hidden="true">"in"</span>
                    <span class="social-label">"LinkedIn"</span>
                </a>
                <a href="mailto:example@email.com" aria-label="Email">
                    <span class="social-icon" aria-hidden="true">"✉"</span>
                    <span class="social-label">"Email"</span>
                </a>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();
    view! {
        <footer class="footer">
            {format!("© {year} Donovan Delport. All rights reserved.")}
        </footer>
    }
}
