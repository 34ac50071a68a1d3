use yew::prelude::*;

use crate::typewriter::cycler::{PhraseList, Timing};
use crate::typewriter::hook::use_typewriter;

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub phrases: PhraseList,
    #[prop_or_default]
    pub timing: Timing,
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let shown = use_typewriter(&props.phrases, props.timing);
    // Screen readers get the whole rotation instead of single letters.
    let label = props.phrases.iter().collect::<Vec<_>>().join(", ");

    html! {
        <span class="typewriter" aria-label={label}>
            <span aria-hidden="true">{ shown }</span>
            <span class="typewriter-cursor" aria-hidden="true">{"|"}</span>
        </span>
    }
}
