use enum_binding::enum_kind;
use serde::Serialize;

enum_kind! {
    /// Operators a backend filter can use.
    #[derive(Serialize)]
    pub enum Operator {
        /// Exact match.
        #[serde(rename = "=")]
        Equal => "EQUAL",
        /// Match against a list.
        #[serde(rename = "in")]
        In => "IN",
        /// Similarity match.
        #[serde(rename = "fuzzy")]
        Fuzzy => "FUZZY",
    }
}

impl Operator {
    /// Symbol used in backend definitions.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::In => "in",
            Self::Fuzzy => "fuzzy",
        }
    }
}
