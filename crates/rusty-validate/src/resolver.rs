//! Custom message lookup in a record's field metadata

use rusty_validate_core::Record;
use tracing::trace;

/// Value of `annotation` on the field `field_name` of `R`.
///
/// Fields promoted from `#[embed]`ded records are found too. Returns `""`
/// when the field has no such annotation or `R` has no field by that name,
/// including element names such as `tags[0]`.
///
/// Only the leaf name is looked at, so a nested field sharing its name with
/// a field of `R` resolves to the message declared on `R`'s field.
pub fn resolve<R: Record + ?Sized>(annotation: &str, field_name: &str) -> &'static str {
    match R::field_meta(field_name) {
        Some(meta) => meta.annotation(annotation).unwrap_or(""),
        None => {
            trace!(record = R::NAME, field = field_name, "no field metadata for custom message");
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusty_validate_core::{FieldMeta, Kind, CUSTOM_MESSAGE};

    struct Profile;

    impl Record for Profile {
        const NAME: &'static str = "Profile";

        fn fields() -> &'static [FieldMeta] {
            const FIELDS: &[FieldMeta] = &[
                FieldMeta {
                    name: "nickname",
                    kind: Kind::String,
                    rules: &["required"],
                    annotations: &[(CUSTOM_MESSAGE, "Pick a nickname")],
                },
                FieldMeta {
                    name: "bio",
                    kind: Kind::String,
                    rules: &["max_length(10)"],
                    annotations: &[],
                },
            ];
            FIELDS
        }
    }

    #[test]
    fn test_annotated_field() {
        assert_eq!(resolve::<Profile>(CUSTOM_MESSAGE, "nickname"), "Pick a nickname");
    }

    #[test]
    fn test_misses_are_empty() {
        assert_eq!(resolve::<Profile>(CUSTOM_MESSAGE, "bio"), "");
        assert_eq!(resolve::<Profile>(CUSTOM_MESSAGE, "avatar"), "");
        assert_eq!(resolve::<Profile>(CUSTOM_MESSAGE, "nickname[0]"), "");
        assert_eq!(resolve::<Profile>("hint", "nickname"), "");
    }
}
