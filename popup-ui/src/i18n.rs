//! Translation lookup injected by the host page

use dioxus::prelude::*;
use std::rc::Rc;

type Lookup = dyn Fn(&str, &[String]) -> String;

/// Resolves a message name plus substitutions to display text.
///
/// Provided through context. Without a provider, message names are shown
/// as-is.
#[derive(Clone)]
pub struct Translator {
    lookup: Rc<Lookup>,
}

impl Translator {
    pub fn new(lookup: impl Fn(&str, &[String]) -> String + 'static) -> Self {
        Self {
            lookup: Rc::new(lookup),
        }
    }

    pub fn t(&self, key: &str) -> String {
        (self.lookup)(key, &[])
    }

    pub fn t_with(&self, key: &str, substitution: impl Into<String>) -> String {
        (self.lookup)(key, &[substitution.into()])
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(|key, _| key.to_string())
    }
}

impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.lookup, &other.lookup)
    }
}

pub fn use_translator() -> Translator {
    try_use_context::<Translator>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shows_message_name() {
        let t = Translator::default();
        assert_eq!(t.t("infoLove"), "infoLove");
        assert_eq!(t.t_with("infoYourScrobbles", "3"), "infoYourScrobbles");
    }

    #[test]
    fn test_substitutions_reach_lookup() {
        let t = Translator::new(|key, subs| format!("{key}:{}", subs.join(",")));
        assert_eq!(t.t_with("infoViewTrackPage", "Xtal"), "infoViewTrackPage:Xtal");
    }
}
