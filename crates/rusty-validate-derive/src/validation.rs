// Code generation for #[derive(Validate)]

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, Ident, Type};

use crate::attrs::{extract_validation_attrs, Number, ValidationAttr};

/// How a `dive`/`embed` field reaches its nested record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DiveShape {
    Direct,
    Optional,
    Elements,
}

struct FieldSpec<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    validations: Vec<ValidationAttr>,
}

impl FieldSpec<'_> {
    fn annotation(&self, wanted: fn(&ValidationAttr) -> Option<&String>) -> Option<&String> {
        self.validations.iter().find_map(wanted)
    }

    fn custom_message(&self) -> Option<&String> {
        self.annotation(|v| match v {
            ValidationAttr::CustomMessage(msg) => Some(msg),
            _ => None,
        })
    }

    fn label(&self) -> Option<&String> {
        self.annotation(|v| match v {
            ValidationAttr::Label(label) => Some(label),
            _ => None,
        })
    }

    fn has(&self, wanted: &ValidationAttr) -> bool {
        self.validations.iter().any(|v| v == wanted)
    }
}

/// Generate `Record` and `Rules` implementations for a struct
pub fn impl_validate(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let name_str = name.to_string();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Validate only supports structs with named fields",
                ))
            }
        },
        _ => return Err(syn::Error::new_spanned(name, "Validate only supports structs")),
    };

    let specs = fields
        .iter()
        .map(field_spec)
        .collect::<syn::Result<Vec<_>>>()?;

    check_field_references(&specs)?;

    let metas: Vec<TokenStream> = specs.iter().map(field_meta).collect();
    let checks = specs
        .iter()
        .map(field_checks)
        .collect::<syn::Result<Vec<_>>>()?;

    let embedded: Vec<&Type> = specs
        .iter()
        .filter(|spec| spec.has(&ValidationAttr::Embed))
        .map(|spec| spec.ty)
        .collect();

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::rusty_validate::Record for #name #ty_generics #where_clause {
            const NAME: &'static str = #name_str;

            fn fields() -> &'static [::rusty_validate::FieldMeta] {
                const FIELDS: &[::rusty_validate::FieldMeta] = &[#(#metas),*];
                FIELDS
            }

            fn field_meta(name: &str) -> ::core::option::Option<&'static ::rusty_validate::FieldMeta> {
                static INDEX: ::rusty_validate::__private::Lazy<
                    ::std::collections::HashMap<&'static str, &'static ::rusty_validate::FieldMeta>,
                > = ::rusty_validate::__private::Lazy::new(|| {
                    const FIELDS: &[::rusty_validate::FieldMeta] = &[#(#metas),*];
                    ::rusty_validate::FieldMeta::index(FIELDS)
                });

                INDEX.get(name).copied()
                    #(.or_else(|| <#embedded as ::rusty_validate::Record>::field_meta(name)))*
            }
        }

        impl #impl_generics ::rusty_validate::Rules for #name #ty_generics #where_clause {
            #[allow(unused_labels, clippy::nonminimal_bool)]
            fn check_rules(
                &self,
                __ctx: &::rusty_validate::Context,
                __scope: &mut ::rusty_validate::Scope<'_>,
            ) -> ::core::result::Result<(), ::rusty_validate::EngineError> {
                #(#checks)*
                ::core::result::Result::Ok(())
            }
        }
    })
}

fn field_spec(field: &Field) -> syn::Result<FieldSpec<'_>> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "Validate only supports named fields"))?;
    let validations = extract_validation_attrs(&field.attrs)?;

    let spec = FieldSpec {
        ident,
        ty: &field.ty,
        validations,
    };

    if spec.has(&ValidationAttr::Embed) && dive_shape(spec.ty) != DiveShape::Direct {
        return Err(syn::Error::new_spanned(
            &field.ty,
            "embed only supports a record stored directly in the field",
        ));
    }

    Ok(spec)
}

/// `equals_field` and `depends_on` must name a field of the same struct
fn check_field_references(specs: &[FieldSpec<'_>]) -> syn::Result<()> {
    for spec in specs {
        for validation in &spec.validations {
            let referenced = match validation {
                ValidationAttr::EqualsField(other) | ValidationAttr::DependsOn(other, _) => other,
                _ => continue,
            };

            if !specs.iter().any(|s| s.ident == referenced) {
                return Err(syn::Error::new_spanned(
                    referenced,
                    format!("unknown field `{}`", referenced),
                ));
            }
        }
    }
    Ok(())
}

fn field_meta(spec: &FieldSpec<'_>) -> TokenStream {
    let name = spec.ident.to_string();
    let kind = kind_of(spec.ty);
    let rules: Vec<String> = spec
        .validations
        .iter()
        .filter_map(ValidationAttr::describe)
        .collect();

    let mut annotations = Vec::new();
    if let Some(message) = spec.custom_message() {
        annotations.push(quote! { (::rusty_validate::CUSTOM_MESSAGE, #message) });
    }
    if let Some(label) = spec.label() {
        annotations.push(quote! { (::rusty_validate::LABEL, #label) });
    }

    quote! {
        ::rusty_validate::FieldMeta {
            name: #name,
            kind: #kind,
            rules: &[#(#rules),*],
            annotations: &[#(#annotations),*],
        }
    }
}

fn field_checks(spec: &FieldSpec<'_>) -> syn::Result<TokenStream> {
    let dives = spec.has(&ValidationAttr::Dive) || spec.has(&ValidationAttr::Embed);
    let rules: Vec<&ValidationAttr> = spec.validations.iter().filter(|v| v.is_rule()).collect();

    if rules.is_empty() && !dives {
        return Ok(TokenStream::new());
    }

    let field = spec.ident;
    let name = field.to_string();
    let kind = kind_of(spec.ty);
    let label = match spec.label() {
        Some(label) => quote! { ::core::option::Option::Some(#label) },
        None => quote! { ::core::option::Option::None },
    };

    let rule_checks = rules
        .iter()
        .map(|validation| rule_check(field, validation))
        .collect::<Vec<_>>();

    let dive = if dives {
        match dive_shape(spec.ty) {
            DiveShape::Direct => quote! {
                __scope.dive(__ctx, &__field, &self.#field)?;
            },
            DiveShape::Optional => quote! {
                if let ::core::option::Option::Some(__value) = &self.#field {
                    __scope.dive(__ctx, &__field, __value)?;
                }
            },
            DiveShape::Elements => quote! {
                for (__index, __value) in self.#field.iter().enumerate() {
                    __scope.dive_index(__ctx, &__field, __index, __value)?;
                }
            },
        }
    } else {
        TokenStream::new()
    };

    Ok(quote! {
        __ctx.check()?;
        '__rules: {
            let __field = ::rusty_validate::FieldRef::new(#name, #label, #kind);
            #(#rule_checks)*
            #dive
        }
    })
}

/// Check for one rule; reports and leaves the field's block on failure
fn rule_check(field: &Ident, validation: &ValidationAttr) -> TokenStream {
    let (tag, param) = validation.tag_and_param();
    let value = quote! { &self.#field };

    let passes = match validation {
        ValidationAttr::Required => quote! { ::rusty_validate::rules::required(#value) },
        ValidationAttr::DependsOn(other, expected) => quote! {
            ::rusty_validate::rules::depends_on(#value, &self.#other, #expected)
        },
        ValidationAttr::Min(n) => {
            let min = numeric_bound(n);
            quote! { ::rusty_validate::rules::min(#value, #min) }
        }
        ValidationAttr::Max(n) => {
            let max = numeric_bound(n);
            quote! { ::rusty_validate::rules::max(#value, #max) }
        }
        ValidationAttr::Range(min, max) => {
            let (min, max) = (numeric_bound(min), numeric_bound(max));
            quote! { ::rusty_validate::rules::range(#value, #min, #max) }
        }
        ValidationAttr::MinLength(n) => quote! { ::rusty_validate::rules::min_length(#value, #n) },
        ValidationAttr::MaxLength(n) => quote! { ::rusty_validate::rules::max_length(#value, #n) },
        ValidationAttr::Length(min, max) => {
            quote! { ::rusty_validate::rules::length(#value, #min, #max) }
        }
        ValidationAttr::MinItems(n) => quote! { ::rusty_validate::rules::min_items(#value, #n) },
        ValidationAttr::MaxItems(n) => quote! { ::rusty_validate::rules::max_items(#value, #n) },
        ValidationAttr::Unique => quote! { ::rusty_validate::rules::unique(#value) },
        ValidationAttr::Email => quote! { ::rusty_validate::rules::email(#value) },
        ValidationAttr::Url => quote! { ::rusty_validate::rules::url(#value) },
        ValidationAttr::NoPublicDomains => {
            quote! { ::rusty_validate::rules::no_public_domains(#value) }
        }
        ValidationAttr::BlockedDomains(domains) => quote! {
            ::rusty_validate::rules::blocked_domains(#value, &[#(#domains),*])
        },
        ValidationAttr::Contains(s) => quote! { ::rusty_validate::rules::contains(#value, #s) },
        ValidationAttr::NotContains(s) => {
            quote! { ::rusty_validate::rules::not_contains(#value, #s) }
        }
        ValidationAttr::StartsWith(s) => quote! { ::rusty_validate::rules::starts_with(#value, #s) },
        ValidationAttr::EndsWith(s) => quote! { ::rusty_validate::rules::ends_with(#value, #s) },
        ValidationAttr::Equals(s) => quote! { ::rusty_validate::rules::equals(#value, #s) },
        ValidationAttr::NotEquals(s) => quote! { ::rusty_validate::rules::not_equals(#value, #s) },
        ValidationAttr::EqualsField(other) => quote! { self.#field == self.#other },
        ValidationAttr::EnumVariant(values) => quote! {
            ::rusty_validate::rules::enum_variant(#value, &[#(#values),*])
        },
        ValidationAttr::Custom(path) => quote! { #path(#value) },
        ValidationAttr::Regex(pattern) => {
            return fallible_check(quote! { ::rusty_validate::rules::regex(#value, #pattern) }, &tag, &param)
        }
        ValidationAttr::Password(tier) => {
            return fallible_check(quote! { ::rusty_validate::rules::password(#value, #tier) }, &tag, &param)
        }
        ValidationAttr::Dive
        | ValidationAttr::Embed
        | ValidationAttr::CustomMessage(_)
        | ValidationAttr::Label(_) => return TokenStream::new(),
    };

    quote! {
        if !(#passes) {
            __scope.report(&__field, #tag, #param);
            break '__rules;
        }
    }
}

/// Integer literals stay integers so large bounds compare exactly
fn numeric_bound(n: &Number) -> TokenStream {
    match n.text.parse::<i128>() {
        Ok(int) => quote! { ::rusty_validate::Numeric::Int(#int) },
        Err(_) => {
            let float = n.value;
            quote! { ::rusty_validate::Numeric::Float(#float) }
        }
    }
}

/// Rules that may reject their own declaration at runtime
fn fallible_check(verdict: TokenStream, tag: &str, param: &str) -> TokenStream {
    quote! {
        match #verdict {
            ::core::result::Result::Ok(true) => {}
            ::core::result::Result::Ok(false) => {
                __scope.report(&__field, #tag, #param);
                break '__rules;
            }
            ::core::result::Result::Err(__reason) => {
                return ::core::result::Result::Err(__scope.invalid_rule(&__field, #tag, __reason));
            }
        }
    }
}

/// Last path segment of a type, looking through references
fn type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        Type::Reference(reference) => type_name(&reference.elem),
        Type::Group(group) => type_name(&group.elem),
        Type::Paren(paren) => type_name(&paren.elem),
        _ => None,
    }
}

fn dive_shape(ty: &Type) -> DiveShape {
    match ty {
        Type::Slice(_) | Type::Array(_) => DiveShape::Elements,
        Type::Reference(reference) => dive_shape(&reference.elem),
        _ => match type_name(ty).as_deref() {
            Some("Option") => DiveShape::Optional,
            Some("Vec" | "VecDeque") => DiveShape::Elements,
            _ => DiveShape::Direct,
        },
    }
}

fn kind_of(ty: &Type) -> TokenStream {
    let kind = match ty {
        Type::Slice(_) | Type::Array(_) => "Slice",
        Type::Reference(reference) => return kind_of(&reference.elem),
        _ => match type_name(ty).as_deref() {
            Some("String" | "str" | "Cow") => "String",
            Some("i8" | "i16" | "i32" | "i64" | "i128" | "isize") => "Int",
            Some("u8" | "u16" | "u32" | "u64" | "u128" | "usize") => "Uint",
            Some("f32" | "f64") => "Float",
            Some("bool") => "Bool",
            Some("Option") => "Option",
            Some("Vec" | "VecDeque" | "HashSet" | "BTreeSet") => "Slice",
            Some("HashMap" | "BTreeMap") => "Map",
            _ => "Struct",
        },
    };
    let kind = Ident::new(kind, proc_macro2::Span::call_site());
    quote! { ::rusty_validate::Kind::#kind }
}
