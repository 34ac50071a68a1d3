use serde::Deserialize;
use yew::prelude::*;

/// Line icons used across the page, drawn as 24x24 stroked SVG paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ChevronRight,
    Palette,
    Code,
    ArrowRight,
    Layout,
    Smartphone,
    Briefcase,
    Globe,
    Sparkles,
}

impl Icon {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::ChevronRight => &["m9 18 6-6-6-6"],
            Icon::Palette => &[
                "M12 22a10 10 0 1 1 10-10c0 2.2-1.8 3-4 3h-1.5a1.5 1.5 0 0 0-1 2.6 1.5 1.5 0 0 1-1.1 2.4c-.8 1.2-1.3 2-2.4 2z",
                "M13.5 6.5h.01",
                "M17.5 10.5h.01",
                "M8.5 7.5h.01",
                "M6.5 12.5h.01",
            ],
            Icon::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
            Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Icon::Layout => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M3 9h18",
                "M9 21V9",
            ],
            Icon::Smartphone => &[
                "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M12 18h.01",
            ],
            Icon::Briefcase => &[
                "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2z",
                "M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
            ],
            Icon::Globe => &[
                "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Icon::Sparkles => &[
                "M12 3l1.9 5.8L20 11l-6.1 2.2L12 19l-1.9-5.8L4 11l6.1-2.2z",
                "M5 3v4",
                "M3 5h4",
            ],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconSvg)]
pub fn icon_svg(props: &IconProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_case_names_deserialize() {
        let icons: Vec<Icon> = serde_json::from_str(r#"["chevron-right", "arrow-right", "smartphone"]"#).unwrap();
        assert_eq!(icons, vec![Icon::ChevronRight, Icon::ArrowRight, Icon::Smartphone]);
    }

    #[test]
    fn every_icon_has_a_path() {
        let all = [
            Icon::ChevronRight,
            Icon::Palette,
            Icon::Code,
            Icon::ArrowRight,
            Icon::Layout,
            Icon::Smartphone,
            Icon::Briefcase,
            Icon::Globe,
            Icon::Sparkles,
        ];
        for icon in all {
            assert!(!icon.paths().is_empty(), "{icon:?}");
            assert!(icon.paths().iter().all(|d| d.starts_with(['M', 'm'])));
        }
    }
}
