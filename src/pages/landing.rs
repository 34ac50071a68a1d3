use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;

use crate::components::background::AnimatedBackground;
use crate::components::cards::{FeatureCard, ServiceCard};
use crate::components::icon::{Icon, IconSvg};
use crate::components::reveal::Reveal;
use crate::components::typewriter_text::TypewriterText;
use crate::content::{CallToAction, ClosingCta, Features, Hero, PageContent, Section, SectionHeading, Services};
use crate::dom;
use crate::motion::{self, SPARKLES};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<PageContent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = &props.content;

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    @keyframes riseIn {
                        from { opacity: 0; transform: translateY(28px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes blink {
                        0%, 100% { opacity: 0; }
                        50% { opacity: 1; }
                    }
                    @keyframes pulseDot {
                        0%, 100% { transform: scale(1); }
                        50% { transform: scale(1.5); }
                    }
                    @keyframes breathe {
                        0%, 100% { transform: scale(1); }
                        50% { transform: scale(1.02); }
                    }
                    @keyframes glow {
                        0%, 100% { opacity: 0.8; }
                        50% { opacity: 1; }
                    }
                    @keyframes sparkle {
                        0%, 100% { transform: scale(0); opacity: 0; }
                        50% { transform: scale(1); opacity: 1; }
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(40px);
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out, box-shadow 0.5s;
                    }
                    .reveal.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .hero {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 3rem 1.5rem;
                        text-align: center;
                    }
                    .hero .stagger {
                        opacity: 0;
                        animation: riseIn 0.9s ease-out forwards;
                    }
                    .hero h1 {
                        font-size: 4.5rem;
                        font-weight: 700;
                    }
                    .hero-lead {
                        display: block;
                    }
                    .typewriter {
                        display: inline-block;
                        min-height: 5rem;
                        background: linear-gradient(to right, #2563eb, #9333ea, #db2777);
                        background-clip: text;
                        color: transparent;
                    }
                    .typewriter-cursor {
                        display: inline-block;
                        margin-left: 0.25rem;
                        color: #9333ea;
                        animation: blink 0.8s infinite;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #475569;
                        line-height: 1.7;
                        max-width: 42rem;
                        margin: 1.5rem auto;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .cta-button {
                        position: relative;
                        overflow: hidden;
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1rem 2rem;
                        border-radius: 1rem;
                        font-weight: 600;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: transform 0.3s, box-shadow 0.3s;
                    }
                    .cta-button > * {
                        position: relative;
                        z-index: 1;
                    }
                    .cta-button:hover {
                        transform: translateY(-2px) scale(1.05);
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.12);
                    }
                    .cta-button:active {
                        transform: scale(0.98);
                    }
                    .cta-button .icon:last-child {
                        transition: transform 0.3s;
                    }
                    .cta-button:hover .icon:last-child {
                        transform: translateX(4px);
                    }
                    .cta-primary {
                        color: #fff;
                        background: linear-gradient(to right, #2563eb, #9333ea);
                    }
                    .cta-secondary {
                        color: #334155;
                        background: rgba(255, 255, 255, 0.8);
                        border: 1px solid rgba(255, 255, 255, 0.5);
                    }
                    .shine::before {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: rgba(255, 255, 255, 0.2);
                        transform: skewX(-12deg) translateX(-110%);
                        transition: transform 0.7s;
                    }
                    .shine:hover::before,
                    .service-card:hover .shine::before {
                        transform: skewX(-12deg) translateX(110%);
                    }
                    .service-card,
                    .feature-card {
                        position: relative;
                        overflow: hidden;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: rgba(255, 255, 255, 0.6);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                    }
                    .service-card.visible:hover {
                        transform: translateY(-8px) scale(1.02);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.12);
                    }
                    .feature-card.visible:hover {
                        transform: translateY(-5px);
                    }
                    .card-glow {
                        position: absolute;
                        top: -1rem;
                        right: -1rem;
                        width: 6rem;
                        height: 6rem;
                        border-radius: 9999px;
                        background: rgba(59, 130, 246, 0.1);
                        filter: blur(24px);
                    }
                    .service-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 4rem;
                        height: 4rem;
                        margin-bottom: 1.5rem;
                        border-radius: 1rem;
                        color: #fff;
                        background: linear-gradient(to bottom right, #3b82f6, #9333ea);
                    }
                    .service-icon .icon {
                        width: 2rem;
                        height: 2rem;
                    }
                    .spin-on-hover {
                        transition: transform 0.5s;
                    }
                    .spin-on-hover:hover {
                        transform: rotate(360deg);
                    }
                    .service-description {
                        color: #475569;
                        line-height: 1.6;
                    }
                    .service-features {
                        list-style: none;
                        padding: 0;
                        margin: 1.5rem 0;
                    }
                    .service-features li {
                        display: flex;
                        align-items: center;
                        margin-bottom: 0.75rem;
                        font-size: 0.875rem;
                        color: #334155;
                        transition: transform 0.2s;
                    }
                    .service-features li:hover {
                        transform: translateX(5px);
                    }
                    .pulse-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        margin-right: 0.75rem;
                        border-radius: 9999px;
                        background: #3b82f6;
                        animation: pulseDot 2s infinite;
                    }
                    .service-footer {
                        border-top: 1px solid #e2e8f0;
                        padding-top: 1.5rem;
                    }
                    .service-price {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .service-button {
                        position: relative;
                        overflow: hidden;
                        width: 100%;
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        color: #fff;
                        font-weight: 600;
                        background: linear-gradient(to right, #2563eb, #9333ea);
                    }
                    .feature-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        margin-bottom: 1rem;
                        border-radius: 0.75rem;
                    }
                    .accent-blue { background: #dbeafe; color: #2563eb; }
                    .accent-purple { background: #f3e8ff; color: #9333ea; }
                    .accent-pink { background: #fce7f3; color: #db2777; }
                    .closing-panel {
                        position: relative;
                        overflow: hidden;
                        padding: 3rem;
                        border-radius: 1.5rem;
                        color: #fff;
                        background: linear-gradient(to right, #2563eb, #9333ea);
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    }
                    .closing-panel h2 {
                        font-size: 2.25rem;
                        margin-bottom: 1rem;
                        animation: breathe 3s infinite;
                    }
                    .closing-panel p {
                        font-size: 1.25rem;
                        color: #dbeafe;
                        margin-bottom: 2rem;
                        animation: glow 2s infinite;
                    }
                    .closing-panel .cta-button {
                        color: #2563eb;
                        background: #fff;
                    }
                    .sparkle {
                        position: absolute;
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: #fde047;
                        animation: sparkle 2s infinite;
                    }
                    .site-footer {
                        position: relative;
                        z-index: 10;
                        padding: 2rem 1.5rem;
                        text-align: center;
                        color: #475569;
                        animation: glow 4s infinite;
                    }
                    @media (max-width: 900px) {
                        .hero h1 {
                            font-size: 3rem;
                        }
                    }
                "#}
            </style>
            <AnimatedBackground />
            <HeroSection hero={content.hero.clone()} />
            <ServicesSection services={content.services.clone()} />
            <FeaturesSection features={content.features.clone()} />
            <ClosingSection cta={content.cta.clone()} />
            <Footer owner={content.footer_owner.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    hero: Hero,
}

#[function_component(HeroSection)]
fn hero_section(props: &HeroProps) -> Html {
    let hero = &props.hero;
    let stagger = |i: usize| format!("animation-delay: {}ms;", motion::stagger_ms(i, 200, 160));

    html! {
        <header class="hero">
            <h1>
                <span class="hero-lead stagger" style={stagger(0)}>{ &hero.lead }</span>
                <span class="stagger" style={stagger(1)}>
                    <TypewriterText phrases={hero.phrases.clone()} timing={hero.timing} />
                </span>
            </h1>
            <p class="hero-subtitle stagger" style={stagger(2)}>{ &hero.subtitle }</p>
            <div class="hero-actions stagger" style={stagger(3)}>
                <CtaButton cta={hero.primary.clone()} class="cta-primary" />
                <CtaButton cta={hero.secondary.clone()} class="cta-secondary" />
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct CtaButtonProps {
    cta: CallToAction,
    class: Classes,
}

#[function_component(CtaButton)]
fn cta_button(props: &CtaButtonProps) -> Html {
    let target = props.cta.target;
    let onclick = Callback::from(move |_: MouseEvent| dom::scroll_to_section(target));

    html! {
        <button class={classes!("cta-button", "shine", props.class.clone())} onclick={onclick}>
            <IconSvg icon={props.cta.icon} />
            <span>{ &props.cta.label }</span>
            <IconSvg icon={props.cta.trailing} />
        </button>
    }
}

fn heading(heading: &SectionHeading) -> Html {
    html! {
        <Reveal class="section-heading">
            <h2>{ &heading.heading }{" "}<span class="gradient-text">{ &heading.highlight }</span></h2>
            <p>{ &heading.intro }</p>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct ServicesProps {
    services: Services,
}

#[function_component(ServicesSection)]
fn services_section(props: &ServicesProps) -> Html {
    html! {
        <main id={Section::Work.id()} class="section section-wide">
            { heading(&props.services.heading) }
            <div class="card-grid">
                { for props.services.cards.iter().enumerate().map(|(index, service)| html! {
                    <ServiceCard service={service.clone()} index={index} />
                }) }
            </div>
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct FeaturesProps {
    features: Features,
}

#[function_component(FeaturesSection)]
fn features_section(props: &FeaturesProps) -> Html {
    html! {
        <section id={Section::About.id()} class="section section-wide">
            { heading(&props.features.heading) }
            <div class="card-grid">
                { for props.features.cards.iter().enumerate().map(|(index, feature)| html! {
                    <FeatureCard feature={feature.clone()} index={index} />
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ClosingProps {
    cta: ClosingCta,
}

#[function_component(ClosingSection)]
fn closing_section(props: &ClosingProps) -> Html {
    html! {
        <section id={Section::Contact.id()} class="section section-narrow">
            <Reveal class="closing-panel">
                { for (0..SPARKLES).map(|i| {
                    let (top, left, delay) = motion::sparkle(i);
                    html! {
                        <div
                            class="sparkle"
                            style={format!("top: {top}%; left: {left}%; animation-delay: {delay}ms;")}
                        ></div>
                    }
                }) }
                <h2>{ &props.cta.title }</h2>
                <p>{ &props.cta.body }</p>
                <button class="cta-button shine">
                    <span>{ &props.cta.button }</span>
                    <IconSvg icon={Icon::ArrowRight} />
                </button>
            </Reveal>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    owner: String,
}

#[function_component(Footer)]
fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <p>{ format!("© {} {}. All rights reserved.", year, props.owner) }</p>
        </footer>
    }
}

/// Shown instead of the page when the bundled copy is unusable.
#[function_component(ContentUnavailable)]
pub fn content_unavailable() -> Html {
    html! {
        <div class="section section-narrow">
            <h1>{"PortfolioCraft"}</h1>
            <p>{"This page could not be loaded. Please try again later."}</p>
        </div>
    }
}
