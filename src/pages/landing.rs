use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::counter::StatItem;
use crate::components::faq::{FaqEntry, FaqList};
use crate::components::reveal::Reveal;

const SERVICES: [(&str, &str); 4] = [
    ("Manned Guarding", "Licensed, uniformed officers on site around the clock for offices, retail and residential blocks."),
    ("Mobile Patrols", "Randomised vehicle patrols with logged check-ins and instant incident reports."),
    ("Event Security", "Crowd management, access control and VIP protection for events of any size."),
    ("CCTV Monitoring", "Remote 24/7 monitoring from our control room with rapid dispatch on alarm."),
];

const STATS: [(&str, &str); 4] = [
    ("2500", "Properties Protected"),
    ("15", "Minute Average Response"),
    ("98", "Client Satisfaction"),
    ("350", "Trained Officers"),
];

const TESTIMONIALS: [(&str, &str); 3] = [
    ("Since Pro-Tect took over our site, break-ins have stopped completely.", "Facilities Manager, Harbourside Retail Park"),
    ("Professional, punctual and discreet. Our guests never noticed them, and that's the point.", "Director, Northgate Events"),
    ("Their control room called us before we even knew the alarm had gone off.", "Owner, Kestrel Logistics"),
];

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "Are your officers licensed?",
            "Every officer holds a current SIA licence and completes our in-house training before their first shift.",
        ),
        FaqEntry::new(
            "How quickly can you start?",
            "Most contracts start within 48 hours of a site survey. Emergency cover can be arranged the same day.",
        ),
        FaqEntry::new(
            "Do you offer short-term contracts?",
            "Yes. We cover single events, weekend shifts and temporary site security as well as long-term agreements.",
        ),
        FaqEntry::new(
            "What happens when an alarm is triggered?",
            "Our control room verifies the alarm on camera, dispatches the nearest patrol and keeps you updated by phone.",
        ),
        FaqEntry::new(
            "Are you insured?",
            "We carry public liability, employer's liability and professional indemnity cover. Certificates are available on request.",
        ),
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <main class="landing-page">
            <section id="home" class="hero">
                <div class="hero-content">
                    <Reveal>
                        <h1>{"Security you never have to think about"}</h1>
                        <p class="hero-subtitle">
                            {"Guarding, patrols and monitoring for businesses that want to focus on business."}
                        </p>
                    </Reveal>
                    <div class="hero-cta-group">
                        <a href="#contact" class="btn btn-primary">{"Get a Free Quote"}</a>
                        <a href="#services" class="btn btn-secondary">{"Our Services"}</a>
                    </div>
                </div>
            </section>

            <section id="services" class="services">
                <h2>{"What We Do"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(i, (title, body))| {
                        let animation = if i % 2 == 0 { "slide-in-left" } else { "slide-in-right" };
                        html! {
                            <Reveal animation={animation} class="service-card">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </Reveal>
                        }
                    }) }
                </div>
            </section>

            <section id="stats" class="stats">
                <div class="stats-grid">
                    { for STATS.iter().map(|(target, label)| html! {
                        <StatItem target={*target} label={*label} />
                    }) }
                </div>
            </section>

            <section id="testimonials" class="testimonials">
                <h2>{"What Our Clients Say"}</h2>
                <div class="testimonials-wrapper">
                    { for TESTIMONIALS.iter().map(|(quote, author)| html! {
                        <Reveal class="testimonial-card">
                            <blockquote>{*quote}</blockquote>
                            <cite>{*author}</cite>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="faq" class="faq">
                <h2>{"Frequently Asked Questions"}</h2>
                <FaqList entries={faq_entries()} />
            </section>

            <section id="contact" class="contact">
                <Reveal>
                    <h2>{"Request a Quote"}</h2>
                    <p>{"Tell us about your site and we'll get back to you within 24 hours."}</p>
                </Reveal>
                <ContactForm services={SERVICES.iter().map(|(title, _)| *title).collect::<Vec<_>>()} />
            </section>

            <footer class="footer">
                <p>{"© Pro-Tect Services. All rights reserved."}</p>
                <a href="#home">{"Back to top"}</a>
            </footer>
        </main>
    }
}
