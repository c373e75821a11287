//! Reading the `#[error(...)]` attribute and writing out the `ErrorKind` methods.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Attribute,
    Data,
    DeriveInput,
    Expr,
    Fields,
    Ident,
    Result,
};

/// The expressions given to each tag of the `error` attribute.
#[derive(Debug, Default)]
pub struct Tags {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
    pub category: Option<Expr>,
}

impl Tags {
    /// Finds the `error` attribute among `attrs` and reads its tags.
    fn from_attrs(name: &Ident, attrs: &[Attribute]) -> Result<Self> {
        let attr = attrs
            .iter()
            .find(|attr| attr.path().is_ident("error"))
            .ok_or_else(|| syn::Error::new_spanned(name, "missing `#[error(...)]` attribute"))?;

        let mut tags = Self::default();
        attr.parse_nested_meta(|meta| {
            let slot = if meta.path.is_ident("message") {
                &mut tags.message
            } else if meta.path.is_ident("labels") {
                &mut tags.labels
            } else if meta.path.is_ident("help") {
                &mut tags.help
            } else if meta.path.is_ident("category") {
                &mut tags.category
            } else {
                return Err(meta.error("unknown tag, expected one of `message`, `labels`, `help` or `category`"));
            };

            if slot.is_some() {
                return Err(meta.error("tag given more than once"));
            }
            *slot = Some(meta.value()?.parse()?);
            Ok(())
        })?;

        if tags.message.is_none() {
            return Err(syn::Error::new_spanned(name, "the `error` attribute requires a `message` tag"));
        }
        Ok(tags)
    }
}

/// A struct deriving `ErrorKind`.
#[derive(Debug)]
pub struct Target {
    pub name: Ident,
    pub fields: Fields,
    pub tags: Tags,
}

impl Parse for Target {
    fn parse(input: ParseStream) -> Result<Self> {
        let input = input.parse::<DeriveInput>()?;
        let Data::Struct(data) = input.data else {
            return Err(syn::Error::new_spanned(&input.ident, "`ErrorKind` can only be derived for structs"));
        };

        let tags = Tags::from_attrs(&input.ident, &input.attrs)?;
        Ok(Self { name: input.ident, fields: data.fields, tags })
    }
}

impl Target {
    /// Brings the named fields of `self` into scope for the tag expressions.
    fn bind_fields(&self) -> TokenStream2 {
        let name = &self.name;
        match &self.fields {
            Fields::Named(named) => {
                let idents = named.named.iter().filter_map(|field| field.ident.as_ref());
                quote! { let #name { #(#idents),* } = self; }
            },
            Fields::Unnamed(_) => quote_spanned! { name.span() =>
                compile_error!("`ErrorKind` cannot be derived for tuple structs");
            },
            Fields::Unit => TokenStream2::new(),
        }
    }

    /// One method of the trait, with the fields bound around `body`.
    fn method(&self, name: &str, output: TokenStream2, body: TokenStream2) -> TokenStream2 {
        let name = format_ident!("{}", name);
        let bindings = self.bind_fields();
        quote! {
            #[allow(unused_variables)]
            fn #name(&self) -> #output {
                #bindings
                #body
            }
        }
    }
}

impl ToTokens for Target {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let Tags { message, labels, help, category } = &self.tags;

        if let Some(message) = message {
            tokens.extend(self.method("message", quote!(String), quote! { (#message).to_string() }));
        }
        if let Some(labels) = labels {
            tokens.extend(self.method(
                "labels",
                quote!(Vec<String>),
                quote! { (#labels).into_iter().map(|label| label.to_string()).collect() },
            ));
        }
        if let Some(help) = help {
            tokens.extend(self.method("help", quote!(Option<String>), quote! { Some((#help).to_string()) }));
        }

        let category = category
            .as_ref()
            .map(ToTokens::to_token_stream)
            .unwrap_or_else(|| quote!(sym_error::Category::Input));
        tokens.extend(self.method("category", quote!(sym_error::Category), category));
    }
}
