use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Document-wide base styles. Keyframe animations live next to the markup
/// that uses them.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            html {
                scroll-behavior: smooth;
            }
            body {
                margin: 0;
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                color: #0f172a;
                background: linear-gradient(135deg, #f8fafc, #ffffff, #eff6ff);
                min-height: 100vh;
                overflow-x: hidden;
            }
            button {
                font: inherit;
                cursor: pointer;
                border: none;
                background: none;
            }
            h1, h2, h3 {
                margin: 0;
                line-height: 1.15;
            }
            .gradient-text {
                background: linear-gradient(to right, #2563eb, #9333ea);
                background-clip: text;
                color: transparent;
            }
            .section {
                position: relative;
                z-index: 10;
                margin: 0 auto;
                padding: 4rem 1.5rem;
            }
            .section-wide {
                max-width: 80rem;
            }
            .section-narrow {
                max-width: 56rem;
                text-align: center;
            }
            .section-heading {
                text-align: center;
                margin-bottom: 3rem;
            }
            .section-heading h2 {
                font-size: 2.5rem;
                margin-bottom: 1rem;
            }
            .section-heading p {
                font-size: 1.25rem;
                color: #475569;
                max-width: 42rem;
                margin: 0 auto;
            }
            .card-grid {
                display: grid;
                grid-template-columns: repeat(3, minmax(0, 1fr));
                gap: 2rem;
            }
            .icon {
                width: 1.25rem;
                height: 1.25rem;
            }
            @media (max-width: 900px) {
                .card-grid {
                    grid-template-columns: 1fr;
                }
                .section-heading h2 {
                    font-size: 2rem;
                }
            }
        "#)} />
    }
}
