use serde::Deserialize;

use crate::components::icon::Icon;
use crate::error::ContentError;
use crate::typewriter::cycler::{PhraseList, Timing};

const EMBEDDED: &str = include_str!("../assets/content.json");

/// Page sections reachable from the navigation and call-to-action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Work,
    About,
    Contact,
}

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Section::Work => "work",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Purple,
    Pink,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Purple => "accent-purple",
            Accent::Pink => "accent-pink",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: Section,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub icon: Icon,
    pub trailing: Icon,
    pub target: Section,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hero {
    pub lead: String,
    pub phrases: PhraseList,
    #[serde(default)]
    pub timing: Timing,
    pub subtitle: String,
    pub primary: CallToAction,
    pub secondary: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub price: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionHeading {
    pub heading: String,
    pub highlight: String,
    pub intro: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Services {
    #[serde(flatten)]
    pub heading: SectionHeading,
    pub cards: Vec<Service>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Features {
    #[serde(flatten)]
    pub heading: SectionHeading,
    pub cards: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClosingCta {
    pub title: String,
    pub body: String,
    pub button: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageContent {
    pub brand: String,
    pub nav: Vec<NavLink>,
    pub hero: Hero,
    pub services: Services,
    pub features: Features,
    pub cta: ClosingCta,
    pub footer_owner: String,
}

impl PageContent {
    /// Copy bundled into the binary at build time.
    pub fn load() -> Result<Self, ContentError> {
        Self::parse(EMBEDDED)
    }

    pub fn parse(source: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_loads() {
        let content = PageContent::load().unwrap();
        assert_eq!(content.brand, "PortfolioCraft");
        assert_eq!(content.hero.phrases.len(), 4);
        assert_eq!(&content.hero.phrases[0], "Professional Portfolio");
        assert_eq!(content.hero.timing, Timing::default());
        assert_eq!(content.services.cards.len(), 3);
        assert_eq!(content.features.cards.len(), 3);
        assert_eq!(
            content.nav.iter().map(|l| l.target).collect::<Vec<_>>(),
            vec![Section::Work, Section::About, Section::Contact]
        );
    }

    fn with_hero(hero_overrides: &str) -> String {
        let mut doc: serde_json::Value = serde_json::from_str(EMBEDDED).unwrap();
        let overrides: serde_json::Value = serde_json::from_str(hero_overrides).unwrap();
        for (key, value) in overrides.as_object().unwrap() {
            doc["hero"][key] = value.clone();
        }
        doc.to_string()
    }

    #[test]
    fn empty_phrase_list_is_invalid_configuration() {
        let err = PageContent::parse(&with_hero(r#"{"phrases": []}"#)).unwrap_err();
        assert!(err.to_string().contains("at least one phrase"), "{err}");
    }

    #[test]
    fn empty_phrase_is_rejected() {
        let err = PageContent::parse(&with_hero(r#"{"phrases": ["Site", ""]}"#)).unwrap_err();
        assert!(err.to_string().contains("index 1 is empty"), "{err}");
    }

    #[test]
    fn zero_deleting_interval_is_rejected() {
        let err = PageContent::parse(&with_hero(r#"{"timing": {"deleting_ms": 0}}"#)).unwrap_err();
        assert!(err.to_string().contains("deleting interval"), "{err}");
    }

    #[test]
    fn partial_timing_keeps_defaults() {
        let content = PageContent::parse(&with_hero(r#"{"timing": {"pause_ms": 2500}}"#)).unwrap();
        assert_eq!(content.hero.timing, Timing::new(150, 75, 2500).unwrap());
    }

    #[test]
    fn unknown_icon_fails_to_parse() {
        let source = EMBEDDED.replacen("\"palette\"", "\"unicorn\"", 1);
        assert!(matches!(PageContent::parse(&source), Err(ContentError::Parse(_))));
    }

    #[test]
    fn section_ids_match_anchors() {
        assert_eq!(Section::Work.id(), "work");
        assert_eq!(Section::About.id(), "about");
        assert_eq!(Section::Contact.id(), "contact");
    }
}
