use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Time-to-live in whole seconds. Always greater than zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TtlSecs(u64);

impl TtlSecs {
    pub fn from_secs(secs: u64) -> Result<Self> {
        if secs == 0 {
            return Err(Error::Configuration(
                "ttl must be a positive number of seconds, got 0".to_string(),
            ));
        }
        Ok(Self(secs))
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl fmt::Display for TtlSecs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Accepts the textual form of an integer, e.g. `"60"`, `" 60 "` or `"+60"`.
impl FromStr for TtlSecs {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.starts_with('-') {
            return Err(Error::Configuration(format!(
                "ttl must be positive, got {raw:?}"
            )));
        }
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Configuration(format!(
                "ttl {raw:?} is not an integer"
            )));
        }
        let secs = digits.parse::<u64>().map_err(|e| {
            Error::Configuration(format!("ttl {raw:?} is out of range: {e}"))
        })?;
        Self::from_secs(secs)
    }
}

impl TryFrom<&str> for TtlSecs {
    type Error = Error;

    fn try_from(raw: &str) -> Result<Self> {
        raw.parse()
    }
}

impl TryFrom<String> for TtlSecs {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self> {
        raw.parse()
    }
}

impl TryFrom<&String> for TtlSecs {
    type Error = Error;

    fn try_from(raw: &String) -> Result<Self> {
        raw.parse()
    }
}

impl TryFrom<u64> for TtlSecs {
    type Error = Error;

    fn try_from(secs: u64) -> Result<Self> {
        Self::from_secs(secs)
    }
}

impl TryFrom<u32> for TtlSecs {
    type Error = Error;

    fn try_from(secs: u32) -> Result<Self> {
        Self::from_secs(u64::from(secs))
    }
}

impl TryFrom<i64> for TtlSecs {
    type Error = Error;

    fn try_from(secs: i64) -> Result<Self> {
        let secs = u64::try_from(secs).map_err(|_| {
            Error::Configuration(format!("ttl must be positive, got {secs}"))
        })?;
        Self::from_secs(secs)
    }
}

impl TryFrom<i32> for TtlSecs {
    type Error = Error;

    fn try_from(secs: i32) -> Result<Self> {
        Self::try_from(i64::from(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_and_integer_forms_agree() {
        let from_str = TtlSecs::try_from("60").unwrap();
        let from_int = TtlSecs::try_from(60u64).unwrap();
        assert_eq!(from_str, from_int);
        assert_eq!(from_str.as_duration(), Duration::from_secs(60));
    }

    #[test]
    fn test_whitespace_and_sign_accepted() {
        assert_eq!(TtlSecs::try_from(" 45\n").unwrap().as_secs(), 45);
        assert_eq!(TtlSecs::try_from("+45").unwrap().as_secs(), 45);
    }

    #[test]
    fn test_non_numeric_rejected() {
        for raw in ["abc", "", "+", "++5", "+-5", "60s", "1.5", "0x10"] {
            let result = TtlSecs::try_from(raw);
            assert!(
                matches!(result, Err(Error::Configuration(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        assert!(matches!(TtlSecs::try_from(0u64), Err(Error::Configuration(_))));
        assert!(matches!(TtlSecs::try_from(-5i64), Err(Error::Configuration(_))));
        assert!(matches!(TtlSecs::try_from("0"), Err(Error::Configuration(_))));
        assert!(matches!(TtlSecs::try_from("-1"), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_full_u64_range_agrees_with_integer() {
        let from_str = TtlSecs::try_from(u64::MAX.to_string()).unwrap();
        let from_int = TtlSecs::try_from(u64::MAX).unwrap();
        assert_eq!(from_str, from_int);
        assert_eq!(
            TtlSecs::try_from("9223372036854775808").unwrap().as_secs(),
            9_223_372_036_854_775_808
        );
    }

    #[test]
    fn test_overflow_and_sign_messages() {
        let Err(Error::Configuration(msg)) = TtlSecs::try_from("18446744073709551616") else {
            panic!("overflow should be rejected");
        };
        assert!(msg.contains("out of range"), "{msg}");

        let Err(Error::Configuration(msg)) = TtlSecs::try_from(" -3") else {
            panic!("negative should be rejected");
        };
        assert!(msg.contains("must be positive"), "{msg}");
    }

    #[test]
    fn test_display() {
        assert_eq!(TtlSecs::from_secs(90).unwrap().to_string(), "90s");
    }
}
