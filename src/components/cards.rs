use yew::prelude::*;

use crate::components::icon::IconSvg;
use crate::components::reveal::Reveal;
use crate::content::{Feature, Service};
use crate::motion;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
    pub index: usize,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;

    html! {
        <Reveal tag="article" class="service-card" delay_ms={motion::stagger_ms(props.index, 0, 200)}>
            <div class="card-glow"></div>
            <div class="service-icon spin-on-hover">
                <IconSvg icon={service.icon} />
            </div>
            <h3>{ &service.title }</h3>
            <p class="service-description">{ &service.description }</p>
            <ul class="service-features">
                { for service.features.iter().enumerate().map(|(i, feature)| html! {
                    <li>
                        <span
                            class="pulse-dot"
                            style={format!("animation-delay: {}ms;", motion::stagger_ms(i, 0, 300))}
                        ></span>
                        { feature }
                    </li>
                }) }
            </ul>
            <div class="service-footer">
                <div class="service-price">{ &service.price }</div>
                <button class="service-button shine">
                    <span>{"Get This Template"}</span>
                </button>
            </div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
    pub index: usize,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let feature = &props.feature;

    html! {
        <Reveal class="feature-card" delay_ms={motion::stagger_ms(props.index, 0, 100)}>
            <div class="card-glow"></div>
            <div class={classes!("feature-icon", "spin-on-hover", feature.accent.class())}>
                <IconSvg icon={feature.icon} />
            </div>
            <h3>{ &feature.title }</h3>
            <p>{ &feature.description }</p>
        </Reveal>
    }
}
