//! Serde helpers for enums that config files spell in any case

/// Deserialize a fieldless enum from any casing of its config spelling.
///
/// `"Suite"`, `"suite"` and `"SUITE"` all select the same variant. Unknown
/// spellings report the accepted ones.
///
/// ```ignore
/// impl_case_insensitive_deserialize!(
///     FileKind,
///     Suite => "suite",
///     Resource => "resource"
/// );
/// ```
#[macro_export]
macro_rules! impl_case_insensitive_deserialize {
    ($enum_type:ty, $($variant:ident => $spelling:literal),+ $(,)?) => {
        impl<'de> serde::Deserialize<'de> for $enum_type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                const SPELLINGS: &[&str] = &[$($spelling),+];
                let raw = String::deserialize(deserializer)?;
                $(
                    if raw.eq_ignore_ascii_case($spelling) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(serde::de::Error::custom(format!(
                    "unknown variant '{raw}', expected one of: {}",
                    SPELLINGS.join(", ")
                )))
            }
        }
    };
}
