// rusty-validate procedural macros

use proc_macro::TokenStream;

use syn::{parse_macro_input, DeriveInput};

mod attrs;
mod validation;

/// Derive macro for rule evaluation and field metadata
///
/// Generates the `Rules` implementation that checks each field's rule
/// attributes and the `Record` implementation exposing a static field table
/// with every field's rules and annotations.
///
/// # Example
///
/// ```ignore
/// use rusty_validate::Validate;
///
/// #[derive(Validate)]
/// struct User {
///     #[required]
///     #[custom_message = "First Name is required!"]
///     first_name: String,
///
///     #[range(0, 130)]
///     #[custom_message = "Age must be between 0 and 130!"]
///     age: i32,
///
///     #[required]
///     #[email]
///     email: String,
/// }
/// ```
///
/// Rules of one field run in declaration order and stop at the first
/// failure. `None` values only fail `required` and `depends_on`.
///
/// # Available Rules
///
/// **Presence:**
/// - `#[required]` - Non-empty string/collection, non-zero number, `Some`, `true`
/// - `#[depends_on("field", "value")]` - Required when another field equals value
///
/// **Numeric:**
/// - `#[min(n)]` / `#[max(n)]` - Inclusive bounds
/// - `#[range(min, max)]` - Inclusive range
///
/// **Length (characters for strings, items for collections):**
/// - `#[min_length(n)]`, `#[max_length(n)]`, `#[length(min, max)]`
/// - `#[min_items(n)]`, `#[max_items(n)]`
/// - `#[unique]` - All items must be unique
///
/// **Format:**
/// - `#[email]`, `#[url]`, `#[regex("pattern")]`
/// - `#[no_public_domains]`, `#[blocked_domains("a.com", "b.com")]`
/// - `#[password("basic" | "medium" | "strong")]`
///
/// **String Matching:**
/// - `#[contains("text")]`, `#[not_contains("text")]`
/// - `#[starts_with("prefix")]`, `#[ends_with("suffix")]`
/// - `#[equals("value")]`, `#[not_equals("value")]`, `#[equals_field("other")]`
/// - `#[enum_variant("a", "b")]` - Must be one of the listed values
///
/// **Custom:**
/// - `#[custom(path::to::check)]` - `fn(&T) -> bool`, reported under the function name
///
/// **Nesting:**
/// - `#[dive]` - Check a nested record (`T`, `Option<T>`, `Vec<T>`, slices)
/// - `#[embed]` - Like `dive`, and the nested record's fields are found
///   through this record's metadata lookup
///
/// A field holding another record is not validated unless it carries
/// `#[dive]` or `#[embed]`; its own rules are left unchecked.
///
/// **Annotations:**
/// - `#[custom_message = "text"]` - Message shown instead of the diagnostic
/// - `#[label("Name")]` - Friendly field name, reported when labels are enabled
#[proc_macro_derive(
    Validate,
    attributes(
        required,
        depends_on,
        min,
        max,
        range,
        min_length,
        max_length,
        length,
        min_items,
        max_items,
        unique,
        email,
        url,
        regex,
        no_public_domains,
        blocked_domains,
        password,
        contains,
        not_contains,
        starts_with,
        ends_with,
        equals,
        not_equals,
        equals_field,
        enum_variant,
        custom,
        dive,
        embed,
        custom_message,
        label
    )
)]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    validation::impl_validate(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
