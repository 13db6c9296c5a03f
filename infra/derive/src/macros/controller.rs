use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::parse::Parser;
use syn::{Error, Fields, ItemStruct, Lit, LitStr, Meta};

pub fn expand_controller(args: TokenStream, input: ItemStruct) -> TokenStream {
    if !input.generics.params.is_empty() {
        return Error::new_spanned(
            &input.generics,
            "controller handles cannot be generic; keep ports behind trait objects",
        )
        .to_compile_error();
    }
    if !matches!(input.fields, Fields::Named(_)) {
        return Error::new_spanned(&input.ident, "controller requires a struct with named fields")
            .to_compile_error();
    }

    let handle_ident = &input.ident;
    let vis = &input.vis;
    let fields = &input.fields;
    let attrs = &input.attrs;
    let state_ident = format_ident!("{handle_ident}State");

    let name = match parse_name(args) {
        Ok(Some(name)) => name,
        Ok(None) => LitStr::new(&snake_case(&handle_ident.to_string()), handle_ident.span()),
        Err(err) => return err,
    };

    quote! {
        #(#attrs)*
        #[derive(Debug)]
        #vis struct #state_ident #fields

        #[derive(Debug, Clone)]
        #vis struct #handle_ident {
            inner: ::std::rc::Rc<::std::cell::RefCell<#state_ident>>,
        }

        impl #handle_ident {
            pub const NAME: &'static str = #name;

            #[must_use]
            pub fn new(state: #state_ident) -> Self {
                Self { inner: ::std::rc::Rc::new(::std::cell::RefCell::new(state)) }
            }

            pub fn with<R>(&self, f: impl FnOnce(&#state_ident) -> R) -> R {
                f(&self.inner.borrow())
            }

            pub fn with_mut<R>(&self, f: impl FnOnce(&mut #state_ident) -> R) -> R {
                f(&mut self.inner.borrow_mut())
            }
        }

        impl ::folio_kernel::domain::registry::Controller for #handle_ident {
            fn name(&self) -> &'static str {
                Self::NAME
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    }
}

fn parse_name(args: TokenStream) -> Result<Option<LitStr>, TokenStream> {
    let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
    let metas = parser.parse2(args).map_err(|err| err.to_compile_error())?;

    let mut name = None;
    for meta in metas {
        let Meta::NameValue(name_value) = meta else {
            return Err(Error::new_spanned(meta, "Expected `name = \"...\"`").to_compile_error());
        };
        if !name_value.path.is_ident("name") {
            return Err(Error::new_spanned(name_value.path, "Only `name = \"...\"` is supported")
                .to_compile_error());
        }
        if name.is_some() {
            return Err(Error::new_spanned(name_value, "Duplicate `name = \"...\"` argument")
                .to_compile_error());
        }
        let syn::Expr::Lit(expr_lit) = &name_value.value else {
            return Err(Error::new_spanned(&name_value.value, "name must be a string literal")
                .to_compile_error());
        };
        let Lit::Str(lit) = &expr_lit.lit else {
            return Err(Error::new_spanned(&name_value.value, "name must be a string literal")
                .to_compile_error());
        };
        name = Some(lit.clone());
    }

    Ok(name)
}

fn snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, ch) in ident.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
