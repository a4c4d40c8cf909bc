use enum_binding::{EnumKind, ResolveError, enum_kind, resolver};
use serde::Serialize;

enum_kind! {
    /// Position of the captured finger. Also addressable by its numeric code,
    /// which is what goes over the wire (`"1"` for the right thumb).
    #[derive(Serialize)]
    pub enum FingerPosition {
        #[serde(rename = "1")]
        RightThumb => "RIGHT_THUMB" = 1,
        #[serde(rename = "2")]
        RightIndex => "RIGHT_INDEX" = 2,
        #[serde(rename = "3")]
        RightMiddle => "RIGHT_MIDDLE" = 3,
        #[serde(rename = "4")]
        RightRing => "RIGHT_RING" = 4,
        #[serde(rename = "5")]
        RightPinky => "RIGHT_PINKY" = 5,
        #[serde(rename = "6")]
        LeftThumb => "LEFT_THUMB" = 6,
        #[serde(rename = "7")]
        LeftIndex => "LEFT_INDEX" = 7,
        #[serde(rename = "8")]
        LeftMiddle => "LEFT_MIDDLE" = 8,
        #[serde(rename = "9")]
        LeftRing => "LEFT_RING" = 9,
        #[serde(rename = "10")]
        LeftPinky => "LEFT_PINKY" = 10,
    }
}

impl FingerPosition {
    /// Look a position up by code, failing with the same error the resolver
    /// reports for unknown positions.
    pub fn try_from_code(code: i32) -> Result<Self, ResolveError> {
        Self::from_code(code).ok_or_else(|| resolver().unmatched::<Self>(&code.to_string()))
    }

    #[must_use]
    pub fn as_code(self) -> i32 {
        // Every position carries a code.
        self.code().unwrap_or_default()
    }
}

enum_kind! {
    /// Type of submitted fingerprint data.
    #[derive(Serialize, Default)]
    #[serde(rename_all = "lowercase")]
    pub enum DataType {
        #[default]
        Image => "IMAGE",
        Template => "TEMPLATE",
    }
}

enum_kind! {
    /// Type of bio data, e.g. fingerprint.
    #[derive(Serialize)]
    #[serde(rename_all = "lowercase")]
    pub enum BioType {
        Fingerprint => "FINGERPRINT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_code() {
        assert_eq!(FingerPosition::try_from_code(1), Ok(FingerPosition::RightThumb));
        assert_eq!(FingerPosition::try_from_code(10), Ok(FingerPosition::LeftPinky));
        assert!(matches!(
            FingerPosition::try_from_code(11),
            Err(ResolveError::InvalidFingerPosition { .. })
        ));
        assert!(FingerPosition::try_from_code(0).is_err());
    }

    #[test]
    fn test_codes_round_trip() {
        for position in FingerPosition::VARIANTS {
            assert_eq!(FingerPosition::try_from_code(position.as_code()), Ok(*position));
        }
    }

    #[test]
    fn test_different_codes_give_different_positions() {
        assert_ne!(
            FingerPosition::try_from_code(1),
            FingerPosition::try_from_code(2)
        );
    }

    #[test]
    fn test_wire_form_is_code() {
        assert_eq!(
            serde_json::to_string(&FingerPosition::RightThumb).unwrap(),
            r#""1""#
        );
        assert_eq!(
            serde_json::to_string(&FingerPosition::LeftPinky).unwrap(),
            r#""10""#
        );
        assert_eq!(serde_json::to_string(&DataType::Template).unwrap(), r#""template""#);
        assert_eq!(serde_json::to_string(&BioType::Fingerprint).unwrap(), r#""fingerprint""#);
    }

    #[test]
    fn test_display_is_canonical_name() {
        assert_eq!(FingerPosition::LeftIndex.to_string(), "LEFT_INDEX");
        assert_eq!(DataType::Image.to_string(), "IMAGE");
    }

    #[test]
    fn test_default_data_type() {
        assert_eq!(DataType::default(), DataType::Image);
    }
}
