//! Film value objects.
//!
//! Each type wraps exactly one primitive and validates it on construction.

use filmcat_core::{DomainError, DomainResult, ValueObject, non_blank};

/// Film identifier, assigned by the repository.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilmId(i64);

impl FilmId {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::invalid_argument(
                "film_id",
                format!("must be positive (got {value})"),
            ));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl ValueObject for FilmId {
    type Raw = i64;

    fn value(&self) -> &i64 {
        &self.0
    }
}

impl core::fmt::Display for FilmId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for FilmId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

macro_rules! impl_text_value_object {
    ($t:ident, $field:literal) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                non_blank($field, value).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ValueObject for $t {
            type Raw = String;

            fn value(&self) -> &String {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

/// Film title. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilmTitle(String);

/// Free-text synopsis. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilmDescription(String);

impl_text_value_object!(FilmTitle, "title");
impl_text_value_object!(FilmDescription, "description");

/// Year of first release.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilmReleaseYear(i32);

impl FilmReleaseYear {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl ValueObject for FilmReleaseYear {
    type Raw = i32;

    fn value(&self) -> &i32 {
        &self.0
    }
}

impl core::fmt::Display for FilmReleaseYear {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i32> for FilmReleaseYear {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn film_id_rejects_zero_and_negative() {
        assert!(FilmId::new(0).is_err());
        assert!(FilmId::new(-7).is_err());
        assert_eq!(FilmId::new(42).unwrap().get(), 42);
    }

    #[test]
    fn title_rejects_blank() {
        let err = FilmTitle::new("   ").unwrap_err();
        assert_eq!(err.field(), "title");
    }

    #[test]
    fn description_rejects_empty() {
        let err = FilmDescription::new("").unwrap_err();
        assert_eq!(err.field(), "description");
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(FilmTitle::new("Heat").unwrap(), FilmTitle::new("Heat").unwrap());
        assert_ne!(FilmTitle::new("Heat").unwrap(), FilmTitle::new("heat").unwrap());
        assert_eq!(FilmReleaseYear::new(1995), FilmReleaseYear::from(1995));
    }

    #[test]
    fn display_is_the_wrapped_value() {
        assert_eq!(FilmTitle::new("Alien").unwrap().to_string(), "Alien");
        assert_eq!(FilmId::new(9).unwrap().to_string(), "9");
        assert_eq!(FilmReleaseYear::new(1979).to_string(), "1979");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any string with a visible character is accepted verbatim.
            #[test]
            fn non_blank_text_is_accepted(s in "[ ]{0,3}[A-Za-z0-9][A-Za-z0-9 ]{0,60}") {
                let title = FilmTitle::new(s.clone()).unwrap();
                prop_assert_eq!(title.as_str(), s.as_str());

                let description = FilmDescription::new(s.clone()).unwrap();
                prop_assert_eq!(description.value(), &s);
            }

            /// Property: whitespace-only strings are always rejected.
            #[test]
            fn blank_text_is_rejected(s in "[ \t\n\r]{0,20}") {
                let title_is_invalid = matches!(
                    FilmTitle::new(s.clone()),
                    Err(DomainError::InvalidArgument { .. })
                );
                prop_assert!(title_is_invalid);
                prop_assert!(FilmDescription::new(s).is_err());
            }

            /// Property: every positive id round-trips through the wrapper.
            #[test]
            fn positive_ids_are_accepted(v in 1i64..i64::MAX) {
                prop_assert_eq!(FilmId::new(v).unwrap().get(), v);
            }
        }
    }
}
