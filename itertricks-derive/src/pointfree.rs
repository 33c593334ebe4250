//! Implementation of the `#[pointfree]` attribute macro.
//!
//! The attribute is placed on a direct-form sequence operator, that is a
//! function whose first argument is the sequence and whose remaining
//! arguments are configuration. It keeps the function untouched and emits a
//! companion that takes only the configuration and returns a reusable closure
//! awaiting the sequence.
//!
//! # Generated Code Structure
//!
//! For
//!
//! ```text
//! pub fn take<S>(source: S, count: usize) -> Take<S::IntoIter>
//! where
//!     S: IntoIterator,
//! { ... }
//! ```
//!
//! the macro generates
//!
//! ```text
//! pub fn take_with<S>(count: usize) -> impl Fn(S) -> Take<S::IntoIter> + Clone
//! where
//!     S: IntoIterator,
//!     usize: ::core::clone::Clone,
//! {
//!     move |__itertricks_source: S| take(__itertricks_source, ::core::clone::Clone::clone(&count))
//! }
//! ```
//!
//! The configuration is captured by value and cloned on every application,
//! so the companion can be applied any number of times. Building the closure
//! never runs the operator.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{FnArg, Ident, ItemFn, Pat, ReturnType, Type, parse_quote};

/// Options accepted inside `#[pointfree(...)]`.
#[derive(Default)]
pub struct PointfreeOptions {
    /// Overrides the companion name (defaults to `<name>_with`).
    pub name: Option<Ident>,
}

pub fn pointfree_impl(attribute: TokenStream, item: TokenStream) -> TokenStream {
    let options = match parse_options(attribute) {
        Ok(options) => options,
        Err(error) => return error.to_compile_error().into(),
    };
    let function: ItemFn = match syn::parse(item) {
        Ok(function) => function,
        Err(error) => return error.to_compile_error().into(),
    };

    let companion = expand(&options, &function).unwrap_or_else(|error| error.to_compile_error());

    TokenStream::from(quote! {
        #function
        #companion
    })
}

fn parse_options(attribute: TokenStream) -> syn::Result<PointfreeOptions> {
    let mut options = PointfreeOptions::default();
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("name") {
            options.name = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported pointfree option, expected `name = ident`"))
        }
    });
    syn::parse::Parser::parse(parser, attribute)?;
    Ok(options)
}

/// Builds the pointfree companion for `function`.
pub fn expand(options: &PointfreeOptions, function: &ItemFn) -> syn::Result<TokenStream2> {
    let signature = &function.sig;

    if let Some(asyncness) = &signature.asyncness {
        return Err(syn::Error::new(
            asyncness.span(),
            "#[pointfree] cannot be applied to async functions",
        ));
    }

    let mut inputs = signature.inputs.iter();
    let source_type = match inputs.next() {
        Some(FnArg::Typed(source)) => &source.ty,
        Some(FnArg::Receiver(receiver)) => {
            return Err(syn::Error::new(
                receiver.span(),
                "#[pointfree] requires a free function whose first argument is the sequence",
            ));
        }
        None => {
            return Err(syn::Error::new(
                signature.span(),
                "#[pointfree] requires a sequence argument followed by configuration arguments",
            ));
        }
    };

    let mut config_identifiers: Vec<Ident> = Vec::new();
    let mut config_types: Vec<&Type> = Vec::new();
    for argument in inputs {
        match argument {
            FnArg::Typed(typed) => match typed.pat.as_ref() {
                Pat::Ident(pattern) => {
                    config_identifiers.push(pattern.ident.clone());
                    config_types.push(&typed.ty);
                }
                other => {
                    return Err(syn::Error::new(
                        other.span(),
                        "#[pointfree] configuration arguments must be plain identifiers",
                    ));
                }
            },
            FnArg::Receiver(receiver) => {
                return Err(syn::Error::new(receiver.span(), "unexpected receiver"));
            }
        }
    }

    if config_identifiers.is_empty() {
        return Err(syn::Error::new(
            signature.ident.span(),
            "#[pointfree] requires at least one configuration argument after the sequence",
        ));
    }

    let output_type = match &signature.output {
        ReturnType::Type(_, output) => output,
        ReturnType::Default => {
            return Err(syn::Error::new(
                signature.span(),
                "#[pointfree] requires the operator to return a value",
            ));
        }
    };

    let original = &signature.ident;
    let companion = options
        .name
        .clone()
        .unwrap_or_else(|| format_ident!("{}_with", original));

    let mut generics = signature.generics.clone();
    {
        let where_clause = generics.make_where_clause();
        for config_type in &config_types {
            where_clause
                .predicates
                .push(parse_quote!(#config_type: ::core::clone::Clone));
        }
    }
    let where_clause = &generics.where_clause;

    let visibility = &function.vis;
    let source_identifier = format_ident!("__itertricks_source");
    let documentation = format!(
        "Pointfree form of [`{original}`]: captures the configuration and returns a \
         reusable function awaiting the sequence."
    );

    Ok(quote! {
        #[doc = #documentation]
        #[inline]
        #[must_use]
        #visibility fn #companion #generics (
            #(#config_identifiers: #config_types),*
        ) -> impl Fn(#source_type) -> #output_type + Clone
        #where_clause
        {
            move |#source_identifier: #source_type| {
                #original(
                    #source_identifier,
                    #(::core::clone::Clone::clone(&#config_identifiers)),*
                )
            }
        }
    })
}
