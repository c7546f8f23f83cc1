// Field attribute parsing for #[derive(Validate)]

use syn::parse::ParseStream;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ExprLit, ExprUnary, Ident, Lit, LitStr, Meta, Token, UnOp};

/// A numeric rule argument, kept with its source spelling for diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    pub value: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationAttr {
    // Presence
    Required,
    DependsOn(Ident, String),

    // Numeric
    Min(Number),
    Max(Number),
    Range(Number, Number),

    // Length
    MinLength(usize),
    MaxLength(usize),
    Length(usize, usize),
    MinItems(usize),
    MaxItems(usize),
    Unique,

    // Format
    Email,
    Url,
    Regex(String),
    NoPublicDomains,
    BlockedDomains(Vec<String>),
    Password(String),

    // String matching
    Contains(String),
    NotContains(String),
    StartsWith(String),
    EndsWith(String),
    Equals(String),
    NotEquals(String),
    EqualsField(Ident),
    EnumVariant(Vec<String>),

    Custom(syn::Path),

    // Nesting
    Dive,
    Embed,

    // Annotations
    CustomMessage(String),
    Label(String),
}

impl ValidationAttr {
    /// Whether this attribute is a rule the engine evaluates
    pub fn is_rule(&self) -> bool {
        !matches!(
            self,
            ValidationAttr::Dive
                | ValidationAttr::Embed
                | ValidationAttr::CustomMessage(_)
                | ValidationAttr::Label(_)
        )
    }

    /// Rule name and parameter text reported in violations
    pub fn tag_and_param(&self) -> (String, String) {
        let (tag, param) = match self {
            ValidationAttr::Required => ("required", String::new()),
            ValidationAttr::DependsOn(field, value) => ("depends_on", format!("{} {}", field, value)),
            ValidationAttr::Min(n) => ("min", n.text.clone()),
            ValidationAttr::Max(n) => ("max", n.text.clone()),
            ValidationAttr::Range(min, max) => ("range", format!("{},{}", min.text, max.text)),
            ValidationAttr::MinLength(n) => ("min_length", n.to_string()),
            ValidationAttr::MaxLength(n) => ("max_length", n.to_string()),
            ValidationAttr::Length(min, max) => ("length", format!("{},{}", min, max)),
            ValidationAttr::MinItems(n) => ("min_items", n.to_string()),
            ValidationAttr::MaxItems(n) => ("max_items", n.to_string()),
            ValidationAttr::Unique => ("unique", String::new()),
            ValidationAttr::Email => ("email", String::new()),
            ValidationAttr::Url => ("url", String::new()),
            ValidationAttr::Regex(pattern) => ("regex", pattern.clone()),
            ValidationAttr::NoPublicDomains => ("no_public_domains", String::new()),
            ValidationAttr::BlockedDomains(domains) => ("blocked_domains", domains.join(" ")),
            ValidationAttr::Password(tier) => ("password", tier.clone()),
            ValidationAttr::Contains(s) => ("contains", s.clone()),
            ValidationAttr::NotContains(s) => ("not_contains", s.clone()),
            ValidationAttr::StartsWith(s) => ("starts_with", s.clone()),
            ValidationAttr::EndsWith(s) => ("ends_with", s.clone()),
            ValidationAttr::Equals(s) => ("equals", s.clone()),
            ValidationAttr::NotEquals(s) => ("not_equals", s.clone()),
            ValidationAttr::EqualsField(field) => ("equals_field", field.to_string()),
            ValidationAttr::EnumVariant(values) => ("enum_variant", values.join(" ")),
            ValidationAttr::Custom(path) => return (path_name(path), String::new()),
            ValidationAttr::Dive => ("dive", String::new()),
            ValidationAttr::Embed => ("embed", String::new()),
            ValidationAttr::CustomMessage(_) => ("custom_message", String::new()),
            ValidationAttr::Label(_) => ("label", String::new()),
        };
        (tag.to_string(), param)
    }

    /// Rule expression stored in the field metadata table
    pub fn describe(&self) -> Option<String> {
        let quoted = |values: &[String]| {
            values
                .iter()
                .map(|v| format!("{:?}", v))
                .collect::<Vec<_>>()
                .join(", ")
        };

        let text = match self {
            ValidationAttr::CustomMessage(_) | ValidationAttr::Label(_) => return None,
            ValidationAttr::Required
            | ValidationAttr::Unique
            | ValidationAttr::Email
            | ValidationAttr::Url
            | ValidationAttr::NoPublicDomains
            | ValidationAttr::Dive
            | ValidationAttr::Embed => self.tag_and_param().0,
            ValidationAttr::DependsOn(field, value) => {
                format!("depends_on({:?}, {:?})", field.to_string(), value)
            }
            ValidationAttr::Min(n) => format!("min({})", n.text),
            ValidationAttr::Max(n) => format!("max({})", n.text),
            ValidationAttr::Range(min, max) => format!("range({}, {})", min.text, max.text),
            ValidationAttr::Length(min, max) => format!("length({}, {})", min, max),
            ValidationAttr::MinLength(n)
            | ValidationAttr::MaxLength(n)
            | ValidationAttr::MinItems(n)
            | ValidationAttr::MaxItems(n) => format!("{}({})", self.tag_and_param().0, n),
            ValidationAttr::BlockedDomains(values) | ValidationAttr::EnumVariant(values) => {
                format!("{}({})", self.tag_and_param().0, quoted(values))
            }
            ValidationAttr::Regex(s)
            | ValidationAttr::Password(s)
            | ValidationAttr::Contains(s)
            | ValidationAttr::NotContains(s)
            | ValidationAttr::StartsWith(s)
            | ValidationAttr::EndsWith(s)
            | ValidationAttr::Equals(s)
            | ValidationAttr::NotEquals(s) => format!("{}({:?})", self.tag_and_param().0, s),
            ValidationAttr::EqualsField(field) => format!("equals_field({:?})", field.to_string()),
            ValidationAttr::Custom(path) => format!("custom({})", path_name(path)),
        };
        Some(text)
    }
}

/// Last segment of a function path, used as the rule name of `custom`
pub fn path_name(path: &syn::Path) -> String {
    path.segments
        .last()
        .map(|segment| segment.ident.to_string())
        .unwrap_or_default()
}

/// Parse validation attributes from a field, in declaration order
pub fn extract_validation_attrs(attrs: &[Attribute]) -> syn::Result<Vec<ValidationAttr>> {
    let mut validations = Vec::new();

    for attr in attrs {
        let attr_name = attr.path().get_ident().map(|ident| ident.to_string());

        let validation = match attr_name.as_deref() {
            Some("required") => flag(attr, ValidationAttr::Required)?,
            Some("depends_on") => {
                let params = string_list(attr)?;
                if params.len() != 2 {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "depends_on expects a field name and a value",
                    ));
                }
                let field = params[0].parse::<Ident>()?;
                ValidationAttr::DependsOn(field, params[1].value())
            }
            Some("min") => ValidationAttr::Min(number_arg(attr)?),
            Some("max") => ValidationAttr::Max(number_arg(attr)?),
            Some("range") => {
                let (min, max) = number_pair(attr)?;
                ValidationAttr::Range(min, max)
            }
            Some("min_length") => ValidationAttr::MinLength(usize_arg(attr)?),
            Some("max_length") => ValidationAttr::MaxLength(usize_arg(attr)?),
            Some("length") => {
                let (min, max) = number_pair(attr)?;
                ValidationAttr::Length(as_usize(attr, &min)?, as_usize(attr, &max)?)
            }
            Some("min_items") => ValidationAttr::MinItems(usize_arg(attr)?),
            Some("max_items") => ValidationAttr::MaxItems(usize_arg(attr)?),
            Some("unique") => flag(attr, ValidationAttr::Unique)?,
            Some("email") => flag(attr, ValidationAttr::Email)?,
            Some("url") => flag(attr, ValidationAttr::Url)?,
            Some("regex") => ValidationAttr::Regex(string_arg(attr)?),
            Some("no_public_domains") => flag(attr, ValidationAttr::NoPublicDomains)?,
            Some("blocked_domains") => {
                let domains = string_values(attr)?;
                if domains.is_empty() {
                    return Err(syn::Error::new_spanned(attr, "blocked_domains needs at least one domain"));
                }
                ValidationAttr::BlockedDomains(domains)
            }
            Some("password") => ValidationAttr::Password(string_arg(attr)?),
            Some("contains") => ValidationAttr::Contains(string_arg(attr)?),
            Some("not_contains") => ValidationAttr::NotContains(string_arg(attr)?),
            Some("starts_with") => ValidationAttr::StartsWith(string_arg(attr)?),
            Some("ends_with") => ValidationAttr::EndsWith(string_arg(attr)?),
            Some("equals") => ValidationAttr::Equals(string_arg(attr)?),
            Some("not_equals") => ValidationAttr::NotEquals(string_arg(attr)?),
            Some("equals_field") => ValidationAttr::EqualsField(ident_arg(attr)?),
            Some("enum_variant") => {
                let variants = string_values(attr)?;
                if variants.is_empty() {
                    return Err(syn::Error::new_spanned(attr, "enum_variant needs at least one value"));
                }
                ValidationAttr::EnumVariant(variants)
            }
            Some("custom") => ValidationAttr::Custom(path_arg(attr)?),
            Some("dive") => flag(attr, ValidationAttr::Dive)?,
            Some("embed") => flag(attr, ValidationAttr::Embed)?,
            Some("custom_message") => ValidationAttr::CustomMessage(string_arg(attr)?),
            Some("label") => ValidationAttr::Label(string_arg(attr)?),
            _ => continue,
        };

        validations.push(validation);
    }

    Ok(validations)
}

fn flag(attr: &Attribute, validation: ValidationAttr) -> syn::Result<ValidationAttr> {
    attr.meta.require_path_only()?;
    Ok(validation)
}

/// Accepts both `#[name = "value"]` and `#[name("value")]`
fn string_arg(attr: &Attribute) -> syn::Result<String> {
    match &attr.meta {
        Meta::NameValue(name_value) => match &name_value.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(s), ..
            }) => Ok(s.value()),
            other => Err(syn::Error::new_spanned(other, "expected a string literal")),
        },
        Meta::List(_) => Ok(attr.parse_args::<LitStr>()?.value()),
        Meta::Path(path) => Err(syn::Error::new_spanned(path, "expected a string argument")),
    }
}

fn string_list(attr: &Attribute) -> syn::Result<Vec<LitStr>> {
    let list = attr.parse_args_with(Punctuated::<LitStr, Token![,]>::parse_terminated)?;
    Ok(list.into_iter().collect())
}

fn string_values(attr: &Attribute) -> syn::Result<Vec<String>> {
    Ok(string_list(attr)?.iter().map(LitStr::value).collect())
}

/// Field reference written either as `other` or `"other"`
fn ident_arg(attr: &Attribute) -> syn::Result<Ident> {
    if let Meta::NameValue(_) = attr.meta {
        let value = string_arg(attr)?;
        return syn::parse_str::<Ident>(&value)
            .map_err(|_| syn::Error::new_spanned(attr, format!("`{}` is not a field name", value)));
    }

    attr.parse_args_with(|input: ParseStream| {
        if input.peek(LitStr) {
            input.parse::<LitStr>()?.parse::<Ident>()
        } else {
            input.parse::<Ident>()
        }
    })
}

/// Function reference written either as `path::to::check` or `"check"`
fn path_arg(attr: &Attribute) -> syn::Result<syn::Path> {
    if let Meta::NameValue(_) = attr.meta {
        let value = string_arg(attr)?;
        return syn::parse_str::<syn::Path>(&value);
    }

    attr.parse_args_with(|input: ParseStream| {
        if input.peek(LitStr) {
            input.parse::<LitStr>()?.parse::<syn::Path>()
        } else {
            input.parse::<syn::Path>()
        }
    })
}

fn number_arg(attr: &Attribute) -> syn::Result<Number> {
    number(&attr.parse_args::<Expr>()?)
}

fn number_pair(attr: &Attribute) -> syn::Result<(Number, Number)> {
    let args = attr.parse_args_with(Punctuated::<Expr, Token![,]>::parse_terminated)?;
    let numbers = args.iter().map(number).collect::<syn::Result<Vec<_>>>()?;

    match numbers.as_slice() {
        [min, max] => {
            if min.value > max.value {
                return Err(syn::Error::new_spanned(attr, "minimum is greater than maximum"));
            }
            Ok((min.clone(), max.clone()))
        }
        _ => Err(syn::Error::new_spanned(attr, "expected two arguments: min, max")),
    }
}

fn usize_arg(attr: &Attribute) -> syn::Result<usize> {
    let n = number_arg(attr)?;
    as_usize(attr, &n)
}

fn as_usize(attr: &Attribute, n: &Number) -> syn::Result<usize> {
    n.text
        .parse::<usize>()
        .map_err(|_| syn::Error::new_spanned(attr, "expected a non-negative integer"))
}

fn number(expr: &Expr) -> syn::Result<Number> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(i), ..
        }) => Ok(Number {
            value: i.base10_parse::<f64>()?,
            text: i.base10_digits().to_string(),
        }),
        Expr::Lit(ExprLit {
            lit: Lit::Float(f), ..
        }) => Ok(Number {
            value: f.base10_parse::<f64>()?,
            text: f.base10_digits().to_string(),
        }),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr,
            ..
        }) => {
            let n = number(expr)?;
            Ok(Number {
                value: -n.value,
                text: format!("-{}", n.text),
            })
        }
        other => Err(syn::Error::new_spanned(other, "expected a numeric literal")),
    }
}
