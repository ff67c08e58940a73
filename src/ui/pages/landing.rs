//! Landing page component
//!
//! The single marketing page the site behaviors are built around:
//! - Loading overlay and reading-progress bar
//! - Fixed navbar with mobile toggler and in-page links
//! - Hero section with typing title, particles, floating shapes and counters
//! - Services, pricing and about cards
//! - Contact form posting to the configured endpoint
//! - Footer with stats counters and newsletter sign-up

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use super::styles::PAGE_CSS;
use crate::core::SiteConfig;
use crate::ui::SiteEffects;

/// Hero heading, kept free of inline markup so the typing effect ends on the full title
pub const HERO_TITLE: &str = "Build Your Future Online";

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let site_name = config.site_name.clone();

    view! {
        <SeoMeta site_name=site_name.clone() />
        <style inner_html=PAGE_CSS></style>

        <Loader site_name=site_name.clone() />
        <div id="scrollProgress"></div>

        <Navbar site_name=site_name.clone() />

        <main>
            <HeroSection />
            <ServicesSection />
            <PricingSection />
            <AboutSection />
            <ContactSection endpoint=config.contact_endpoint />
        </main>

        <Footer site_name=site_name />

        <button class="back-to-top" aria-label="Back to top">
            <i class="bi bi-arrow-up"></i>
        </button>

        <script src="https://unpkg.com/aos@2.3.4/dist/aos.js"></script>
        <SiteEffects />
    }
}

#[component]
fn SeoMeta(site_name: String) -> impl IntoView {
    let title = format!("{} - Digital Solutions That Grow Your Business", site_name);

    view! {
        <Title text=title />
        <Meta name="description" content="Web development, design and digital strategy for growing businesses." />
        <Link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css" />
        <Link rel="stylesheet" href="https://unpkg.com/aos@2.3.4/dist/aos.css" />
    }
}

/// Full-screen overlay shown until the page has loaded
#[component]
fn Loader(site_name: String) -> impl IntoView {
    view! {
        <div id="loader">
            <div class="loader-content">
                <div class="loader-logo">{site_name}</div>
                <div class="loader-spinner"></div>
            </div>
        </div>
    }
}

#[component]
fn Navbar(site_name: String) -> impl IntoView {
    view! {
        <nav class="navbar">
            <a class="navbar-brand" href="#home">{site_name}</a>
            <button
                class="navbar-toggler"
                type="button"
                aria-controls="navbarNav"
                aria-expanded="false"
                aria-label="Toggle navigation"
            >
                <i class="bi bi-list"></i>
            </button>
            <div class="navbar-collapse" id="navbarNav">
                <ul class="navbar-nav">
                    <li><a class="nav-link active" href="#home">"Home"</a></li>
                    <li><a class="nav-link" href="#services">"Services"</a></li>
                    <li><a class="nav-link" href="#pricing">"Pricing"</a></li>
                    <li><a class="nav-link" href="#about">"About"</a></li>
                    <li><a class="nav-link" href="#contact">"Contact"</a></li>
                </ul>
            </div>
            <div id="headerScrollBar"></div>
        </nav>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section id="home" class="hero-section">
            <div class="hero-particles">
                <div class="floating-element"></div>
                <div class="floating-element"></div>
                <div class="floating-element"></div>
            </div>

            <div class="hero-content">
                <h1 class="hero-title">{HERO_TITLE}</h1>
                <p class="hero-subtitle">
                    "We design and develop fast, accessible websites that turn visitors into customers."
                </p>
                <a href="#contact" class="btn">"Get Started"</a>

                <div class="hero-stats">
                    <HeroStat target=150 label="Projects Delivered" />
                    <HeroStat target=80 label="Happy Clients" />
                    <HeroStat target=12 label="Years of Experience" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn HeroStat(target: u32, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat-item">
            <div class="stat-number" data-target=target.to_string()>"0"</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

#[component]
fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services">
            <h2 class="section-title" data-aos="fade-up">"Our Services"</h2>
            <div class="card-grid">
                <ServiceCard
                    icon="bi-code-slash"
                    title="Web Development"
                    description="Responsive sites and web apps built on modern, maintainable stacks."
                />
                <ServiceCard
                    icon="bi-palette"
                    title="UI/UX Design"
                    description="Interfaces that are clear, consistent and pleasant to use."
                />
                <ServiceCard
                    icon="bi-graph-up-arrow"
                    title="Digital Marketing"
                    description="Search, content and analytics to bring the right people to your door."
                />
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="service-card">
            <i class=format!("bi {}", icon)></i>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

#[component]
fn PricingSection() -> impl IntoView {
    view! {
        <section id="pricing">
            <h2 class="section-title" data-aos="fade-up">"Pricing"</h2>
            <div class="card-grid">
                <PricingCard
                    name="Starter"
                    price="$499"
                    features=vec!["Single landing page", "Mobile friendly", "Contact form"]
                />
                <PricingCard
                    name="Business"
                    price="$1,499"
                    features=vec!["Up to 10 pages", "CMS integration", "Basic SEO"]
                />
                <PricingCard
                    name="Enterprise"
                    price="Custom"
                    features=vec!["Custom web application", "Dedicated support", "Performance audits"]
                />
            </div>
        </section>
    }
}

#[component]
fn PricingCard(name: &'static str, price: &'static str, features: Vec<&'static str>) -> impl IntoView {
    view! {
        <div class="pricing-card">
            <h3>{name}</h3>
            <div class="price">{price}</div>
            <ul>
                {features
                    .into_iter()
                    .map(|feature| view! { <li>{feature}</li> })
                    .collect_view()}
            </ul>
            <a href="#contact" class="btn">"Choose Plan"</a>
        </div>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about">
            <h2 class="section-title" data-aos="fade-up">"Why Choose Us"</h2>
            <div class="card-grid">
                <div class="feature-item">
                    <h4>"Fast Delivery"</h4>
                    <p>"Most projects go live within four weeks."</p>
                </div>
                <div class="feature-item">
                    <h4>"Transparent Process"</h4>
                    <p>"Weekly updates and a shared roadmap from day one."</p>
                </div>
                <div class="feature-item">
                    <h4>"Ongoing Support"</h4>
                    <p>"We stay around after launch to keep things running."</p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactSection(endpoint: String) -> impl IntoView {
    view! {
        <section id="contact">
            <h2 class="section-title" data-aos="fade-up">"Get In Touch"</h2>
            <form class="contact-form" action=endpoint method="post" novalidate=true>
                <div>
                    <input type="text" class="form-control" name="name" placeholder="Your Name" required=true />
                    <div class="invalid-feedback"></div>
                </div>
                <div>
                    <input type="email" class="form-control" name="email" placeholder="Your Email" required=true />
                    <div class="invalid-feedback"></div>
                </div>
                <div>
                    <input type="text" class="form-control" name="subject" placeholder="Subject" />
                    <div class="invalid-feedback"></div>
                </div>
                <div>
                    <textarea class="form-control" name="message" rows="5" placeholder="Your Message" required=true minlength="10"></textarea>
                    <div class="invalid-feedback"></div>
                </div>
                <button type="submit" class="btn">"Send Message"</button>
            </form>
        </section>
    }
}

#[component]
fn Footer(site_name: String) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-stats">
                <div class="stat-item">
                    <div class="stat-number" data-target="20">"0"</div>
                    <div class="stat-label">"Team Members"</div>
                </div>
                <div class="stat-item">
                    <div class="stat-number" data-target="98">"0"</div>
                    <div class="stat-label">"Client Satisfaction"</div>
                </div>
            </div>

            <form class="newsletter-form" novalidate=true>
                <input type="email" class="form-control" placeholder="Your email address" />
                <button type="submit" class="btn" aria-label="Subscribe">
                    <i class="bi bi-send"></i>
                </button>
            </form>

            <p class="copyright">{format!("© 2025 {}. All rights reserved.", site_name)}</p>
        </footer>
    }
}
