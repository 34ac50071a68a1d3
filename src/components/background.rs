use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::motion::{self, BLOBS, DOTS};

/// Fixed decorative layer behind the page: blurred blobs drifting with the
/// pointer plus a few floating dots.
#[function_component(AnimatedBackground)]
pub fn animated_background() -> Html {
    let pointer = use_state(|| (0.0_f64, 0.0_f64));

    {
        let pointer = pointer.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            pointer.set((f64::from(e.client_x()), f64::from(e.client_y())));
        });
    }

    html! {
        <div class="animated-background" aria-hidden="true">
            <style>
                {r#"
                    .animated-background {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        overflow: hidden;
                    }
                    @keyframes floatY {
                        0%, 100% { translate: 0 0; }
                        50% { translate: 0 -15px; }
                    }
                    .blob {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(64px);
                        animation: floatY ease-in-out infinite;
                        transition: transform 0.2s linear;
                    }
                    .blob-blue {
                        top: 6rem; left: 3rem; width: 18rem; height: 18rem;
                        background: linear-gradient(to right, rgba(191, 219, 254, 0.3), rgba(233, 213, 255, 0.3));
                    }
                    .blob-pink {
                        top: 33%; right: 4rem; width: 24rem; height: 24rem;
                        background: linear-gradient(to right, rgba(251, 207, 232, 0.2), rgba(254, 240, 138, 0.2));
                    }
                    .blob-green {
                        bottom: 6rem; left: 33%; width: 20rem; height: 20rem;
                        border-radius: 1.5rem;
                        background: linear-gradient(to right, rgba(187, 247, 208, 0.25), rgba(191, 219, 254, 0.25));
                    }
                    .dot {
                        position: absolute;
                        border-radius: 9999px;
                        animation: floatY ease-in-out infinite;
                    }
                    .dot-blue { top: 25%; left: 25%; width: 1.5rem; height: 1.5rem; background: rgba(96, 165, 250, 0.3); }
                    .dot-purple { top: 66%; left: 20%; width: 1rem; height: 1rem; background: rgba(192, 132, 252, 0.3); }
                    .dot-pink { top: 33%; right: 25%; width: 1.25rem; height: 1.25rem; background: rgba(244, 114, 182, 0.3); }
                "#}
            </style>
            { for BLOBS.iter().map(|blob| {
                let style = format!(
                    "{} animation-duration: {}s; animation-delay: {}s;",
                    motion::translate(motion::parallax(*pointer, blob.parallax)),
                    blob.float_secs,
                    blob.delay_secs,
                );
                html! { <div class={blob.class} style={style}></div> }
            }) }
            { for DOTS.iter().map(|(class, secs, delay)| html! {
                <div class={*class} style={format!("animation-duration: {secs}s; animation-delay: {delay}s;")}></div>
            }) }
        </div>
    }
}
