use bitflags::bitflags;
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const THEME: &str = "theme";
pub const NAVIGATION: &str = "navigation";
pub const CONTACT: &str = "contact";
pub const SCROLL_TOP: &str = "scroll_top";
pub const REVEAL: &str = "reveal";
pub const COUNTER: &str = "counter";

bitflags! {
    /// The set of page controllers that should be mounted.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ControllerSet: u32 {
        const THEME = 1 << 0;
        const NAVIGATION = 1 << 1;
        const CONTACT = 1 << 2;
        const SCROLL_TOP = 1 << 3;
        const REVEAL = 1 << 4;
        const COUNTER = 1 << 5;

        const ALL = Self::THEME.bits()
            | Self::NAVIGATION.bits()
            | Self::CONTACT.bits()
            | Self::SCROLL_TOP.bits()
            | Self::REVEAL.bits()
            | Self::COUNTER.bits();
    }
}

impl Default for ControllerSet {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<&str> for ControllerSet {
    fn from(s: &str) -> Self {
        match s.trim() {
            THEME => Self::THEME,
            NAVIGATION => Self::NAVIGATION,
            CONTACT => Self::CONTACT,
            SCROLL_TOP | "scroll-top" => Self::SCROLL_TOP,
            REVEAL => Self::REVEAL,
            COUNTER => Self::COUNTER,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl ControllerSet {
    /// Canonical names of the controllers in this set, in declaration order.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        [
            (Self::THEME, THEME),
            (Self::NAVIGATION, NAVIGATION),
            (Self::CONTACT, CONTACT),
            (Self::SCROLL_TOP, SCROLL_TOP),
            (Self::REVEAL, REVEAL),
            (Self::COUNTER, COUNTER),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
        .collect()
    }
}

impl Serialize for ControllerSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.names())
    }
}

/// Accepts either a list of names (`["theme", "counter"]`) or a single name (`"all"`).
impl<'de> Deserialize<'de> for ControllerSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SetVisitor;

        impl<'de> Visitor<'de> for SetVisitor {
            type Value = ControllerSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a controller name or a list of controller names")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ControllerSet::from(v))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut set = ControllerSet::empty();
                while let Some(name) = seq.next_element::<String>()? {
                    set |= ControllerSet::from(name.as_str());
                }
                Ok(set)
            }
        }

        deserializer.deserialize_any(SetVisitor)
    }
}
