use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{ItemStruct, LitStr};

pub fn expand_component(args: TokenStream, input: ItemStruct) -> TokenStream {
    let kind = match parse_kind(args) {
        Ok(kind) => kind.unwrap_or_else(|| input.ident.to_string()),
        Err(err) => return err.to_compile_error(),
    };

    let handle_ident = &input.ident;
    let vis = &input.vis;
    let fields = &input.fields;
    let attrs = &input.attrs;
    let inner_ident = format_ident!("{handle_ident}Inner");
    let semi = matches!(fields, syn::Fields::Unnamed(_) | syn::Fields::Unit).then(|| quote!(;));

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone)]
        #vis struct #inner_ident #fields #semi

        #[derive(Debug, Clone)]
        #vis struct #handle_ident {
            inner: std::sync::Arc<#inner_ident>,
        }

        impl #handle_ident {
            pub fn new(inner: #inner_ident) -> Self {
                Self { inner: std::sync::Arc::new(inner) }
            }
        }

        impl std::ops::Deref for #handle_ident {
            type Target = #inner_ident;
            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl From<#inner_ident> for #handle_ident {
            fn from(inner: #inner_ident) -> Self {
                Self::new(inner)
            }
        }

        impl ::aiexec_kernel::domain::component::Component for #handle_ident {
            fn kind(&self) -> &'static str {
                #kind
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }

        impl From<#handle_ident> for ::aiexec_kernel::domain::component::ComponentRef {
            fn from(handle: #handle_ident) -> Self {
                Self::new(handle)
            }
        }
    }
}

/// Accepts either nothing or `kind = "..."`.
fn parse_kind(args: TokenStream) -> syn::Result<Option<String>> {
    if args.is_empty() {
        return Ok(None);
    }

    let mut kind = None;
    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("kind") {
            let value: LitStr = meta.value()?.parse()?;
            kind = Some(value.value());
            Ok(())
        } else {
            Err(meta.error("unsupported component argument, expected `kind = \"...\"`"))
        }
    });
    syn::parse::Parser::parse2(parser, args)?;

    Ok(kind)
}
