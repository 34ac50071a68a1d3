use yew::prelude::*;

use super::cycler::{PhraseList, Timing};
use super::driver::Typewriter;
use super::scheduler::BrowserScheduler;

/// Text currently shown by a typewriter cycling through `phrases`.
///
/// The driver lives for as long as the component stays mounted with the same
/// phrases and timing; unmounting drops it and with it the pending timer.
#[hook]
pub fn use_typewriter(phrases: &PhraseList, timing: Timing) -> AttrValue {
    let text = use_state(|| AttrValue::Static(""));

    {
        let setter = text.setter();
        use_effect_with_deps(
            move |(phrases, timing)| {
                let typewriter = Typewriter::start(phrases.clone(), *timing, BrowserScheduler, move |shown| {
                    setter.set(AttrValue::from(shown.to_owned()));
                });
                move || drop(typewriter)
            },
            (phrases.clone(), timing),
        );
    }

    (*text).clone()
}
