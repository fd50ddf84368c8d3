use serde::{Serialize, Serializer};
use std::fmt;

/// The step of the address workflow a request asks for, parsed from the
/// `action` form or query value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Action {
    /// Nothing chosen yet: the "use an existing address or enter a new one"
    /// step. Unknown wire values land here too.
    #[default]
    Unselected,
    Manual,
    Postcode,
    PostcodeLookup,
    PostcodeSelect,
    Reuse,
    ReuseSelect,
    Skip,
}

impl Action {
    /// Parses a wire value. Never fails.
    pub fn parse(value: &str) -> Self {
        use Action::*;
        match value {
            "manual" => Manual,
            "postcode" => Postcode,
            "postcode-lookup" => PostcodeLookup,
            "postcode-select" => PostcodeSelect,
            "reuse" => Reuse,
            "reuse-select" => ReuseSelect,
            "skip" => Skip,
            _ => Unselected,
        }
    }

    pub fn as_str(&self) -> &'static str {
        use Action::*;
        match *self {
            Unselected => "",
            Manual => "manual",
            Postcode => "postcode",
            PostcodeLookup => "postcode-lookup",
            PostcodeSelect => "postcode-select",
            Reuse => "reuse",
            ReuseSelect => "reuse-select",
            Skip => "skip",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
