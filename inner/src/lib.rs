#![crate_type = "proc-macro"]
use syn::{self, parse, parse_macro_input, spanned::Spanned, ItemFn};

use proc_macro::TokenStream;
use quote::{self, ToTokens};

mod kw {
    syn::custom_keyword!(Fallible);
}

#[derive(Default, Clone, Debug, PartialEq)]
struct MemoOptions {
    fallible: bool,
}

#[derive(Clone)]
enum MemoOption {
    Fallible,
}

// To extend option parsing, add functionality here.
impl parse::Parse for MemoOption {
    fn parse(input: parse::ParseStream) -> syn::Result<Self> {
        let la = input.lookahead1();
        if la.peek(kw::Fallible) {
            input.parse::<kw::Fallible>()?;
            return Ok(MemoOption::Fallible);
        }
        Err(la.error())
    }
}

impl parse::Parse for MemoOptions {
    fn parse(input: parse::ParseStream) -> syn::Result<Self> {
        let f: syn::punctuated::Punctuated<MemoOption, syn::Token![,]> =
            input.parse_terminated(MemoOption::parse)?;
        let mut opts = Self::default();

        for opt in f {
            match opt {
                MemoOption::Fallible => opts.fallible = true,
            }
        }
        Ok(opts)
    }
}

/**
 * memoize is an attribute generating a memoized companion of a (simple enough) function.
 *
 * The annotated function is left untouched. Next to it, a function named `{fn}_memoized` is
 * generated with the same visibility and arguments, plus a trailing `&mut` reference to a cache.
 * The cache is anything implementing `bigoh::MemoStore<(Args), Return>` and is owned by the
 * caller, so its lifetime (and sharing, see `bigoh::SharedCache`) is the caller's decision. No
 * static storage is involved.
 *
 * Arguments must be owned, `Clone` values; the return value must be `Clone`. Methods and generic
 * functions cannot be memoized.
 *
 * ```ignore
 * use bigoh::memoize;
 * use std::collections::HashMap;
 *
 * #[memoize]
 * fn hello(arg: String, arg2: usize) -> bool {
 *      arg.len()%2 == arg2
 * }
 *
 * let mut cache = HashMap::new();
 * // `hello` is only called once.
 * assert!(! hello_memoized("World".to_string(), 0, &mut cache));
 * assert!(! hello_memoized("World".to_string(), 0, &mut cache));
 * assert_eq!(cache.len(), 1);
 * ```
 *
 * `#[memoize(Fallible)]` is meant for functions returning `Result<T, E>`. The cache then stores
 * `T`: only successful results are memoized, errors are handed back to the caller and the next
 * call with the same arguments tries again.
 *
 * Every lookup logs a `trace` record (through `bigoh::log`) telling whether it hit or missed.
 */
#[proc_macro_attribute]
pub fn memoize(attr: TokenStream, item: TokenStream) -> TokenStream {
    let func = parse_macro_input!(item as ItemFn);
    let sig = &func.sig;

    let fn_ident = &sig.ident;
    let fn_name = fn_ident.to_string();
    let memo_ident = syn::Ident::new(&format!("{}_memoized", fn_name), sig.span());

    // Extracted from the function signature.
    let input_types: Vec<Box<syn::Type>>;
    let input_names: Vec<syn::Ident>;
    let return_type;

    match check_signature(sig) {
        Ok((t, n)) => {
            input_types = t;
            input_names = n;
        }
        Err(e) => return e.to_compile_error().into(),
    }

    let input_tuple_type = quote::quote! { (#(#input_types),*) };
    match &sig.output {
        syn::ReturnType::Default => return_type = quote::quote! { () },
        syn::ReturnType::Type(_, ty) => return_type = ty.to_token_stream(),
    }

    // Parse options from macro attributes
    let options: MemoOptions = match syn::parse(attr) {
        Ok(o) => o,
        Err(e) => return e.to_compile_error().into(),
    };

    // The type held by the cache, and how a hit or a fresh value leaves the wrapper.
    let (value_type, propagate, wrap_return) = if options.fallible {
        match ok_type(&sig.output) {
            Some(t) => (
                t.to_token_stream(),
                quote::quote! { ? },
                quote::quote! { ::core::result::Result::Ok(ATTR_MEMOIZE_RETURN__) },
            ),
            None => {
                return syn::Error::new(
                    sig.output.span(),
                    "Fallible requires a function returning Result<T, E>!",
                )
                .to_compile_error()
                .into()
            }
        }
    } else {
        (
            return_type.clone(),
            quote::quote! {},
            quote::quote! { ATTR_MEMOIZE_RETURN__ },
        )
    };

    let syntax_names_tuple_cloned = quote::quote! { (#(#input_names.clone()),*) };
    let vis = &func.vis;
    let doc = format!(
        "Memoized [`{0}`]: answers from the cache when the arguments were seen before, otherwise \
         calls `{0}` and stores its result.",
        fn_name
    );

    let memoizer = quote::quote! {
        #[doc = #doc]
        #[allow(unused_parens, non_snake_case, non_camel_case_types, clippy::clone_on_copy)]
        #vis fn #memo_ident<ATTR_MEMOIZE_STORE__>(
            #(#input_names: #input_types,)*
            ATTR_MEMOIZE_CACHE__: &mut ATTR_MEMOIZE_STORE__,
        ) -> #return_type
        where
            ATTR_MEMOIZE_STORE__: ::bigoh::MemoStore<#input_tuple_type, #value_type>,
        {
            let ATTR_MEMOIZE_KEY__ = #syntax_names_tuple_cloned;
            if let Some(ATTR_MEMOIZE_RETURN__) = ATTR_MEMOIZE_CACHE__.lookup(&ATTR_MEMOIZE_KEY__) {
                ::bigoh::log::trace!("{}: cache hit", #fn_name);
                return #wrap_return;
            }
            ::bigoh::log::trace!("{}: cache miss", #fn_name);

            let ATTR_MEMOIZE_RETURN__ = #fn_ident(#(#input_names),*) #propagate;
            ATTR_MEMOIZE_CACHE__.store(ATTR_MEMOIZE_KEY__, ATTR_MEMOIZE_RETURN__.clone());

            #wrap_return
        }
    };

    quote::quote! {
        #func

        #memoizer
    }
    .into()
}

fn check_signature(
    sig: &syn::Signature,
) -> Result<(Vec<Box<syn::Type>>, Vec<syn::Ident>), syn::Error> {
    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new(
            sig.generics.span(),
            "Cannot memoize generic functions!",
        ));
    }
    if sig.inputs.is_empty() {
        return Ok((vec![], vec![]));
    }
    if let syn::FnArg::Receiver(_) = sig.inputs[0] {
        return Err(syn::Error::new(sig.span(), "Cannot memoize methods!"));
    }

    let mut types = vec![];
    let mut names = vec![];
    for a in &sig.inputs {
        if let syn::FnArg::Typed(ref arg) = a {
            if let syn::Type::Reference(_) = &*arg.ty {
                return Err(syn::Error::new(
                    arg.ty.span(),
                    "Cannot memoize borrowed arguments, the cache needs owned keys!",
                ));
            }
            types.push(arg.ty.clone());

            if let syn::Pat::Ident(patident) = &*arg.pat {
                names.push(patident.ident.clone());
            } else {
                return Err(syn::Error::new(
                    sig.span(),
                    "Cannot memoize arbitrary patterns!",
                ));
            }
        }
    }
    Ok((types, names))
}

/// The `T` of a `Result<T, E>` (or `Result<T>` alias) return type.
fn ok_type(output: &syn::ReturnType) -> Option<&syn::Type> {
    let ty = match output {
        syn::ReturnType::Default => return None,
        syn::ReturnType::Type(_, ty) => ty,
    };
    if let syn::Type::Path(tp) = &**ty {
        let last = tp.path.segments.last()?;
        if last.ident != "Result" {
            return None;
        }
        if let syn::PathArguments::AngleBracketed(args) = &last.arguments {
            if let Some(syn::GenericArgument::Type(t)) = args.args.first() {
                return Some(t);
            }
        }
    }
    None
}
