//! Exhibit Macros
//!
//! Procedural macros that register examples in the link-time registry.
//!
//! ## Macros
//!
//! - `#[exhibit::target]` - Register every associated function of an impl block
//! - `#[exhibit::example]` - Register a free function as a member of a target
//!
//! Inside either, `#[label("...")]` (or `#[label = "..."]`) attaches the
//! text shown in the run header instead of the function name.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, ImplItem, ItemFn, ItemImpl, ReturnType, Signature, Type, parse_macro_input};

// ============================================================================
// Attribute Parsing Helpers
// ============================================================================

mod attr {
    use syn::meta::ParseNestedMeta;

    /// Get the attribute name as a string
    pub fn name(meta: &ParseNestedMeta) -> String {
        meta.path
            .get_ident()
            .map(|i| i.to_string())
            .unwrap_or_default()
    }

    /// Parse a string literal attribute: `attr = "value"`
    pub fn string(meta: &ParseNestedMeta) -> syn::Result<String> {
        let value: syn::LitStr = meta.value()?.parse()?;
        Ok(value.value())
    }

    /// Create an unknown attribute error
    pub fn unknown(meta: &ParseNestedMeta, name: &str) -> syn::Error {
        meta.error(format!("unknown attribute: {}", name))
    }
}

/// Remove every `#[label]` attribute from `attrs` and return its text.
fn take_label(attrs: &mut Vec<Attribute>) -> syn::Result<Option<String>> {
    let mut label: Option<String> = None;
    let mut kept = Vec::with_capacity(attrs.len());

    for attr in attrs.drain(..) {
        if !attr.path().is_ident("label") {
            kept.push(attr);
            continue;
        }
        if label.is_some() {
            return Err(syn::Error::new_spanned(
                &attr,
                "Exhibit: a member takes at most one #[label]",
            ));
        }
        let text: syn::LitStr = match &attr.meta {
            syn::Meta::List(_) => attr.parse_args()?,
            syn::Meta::NameValue(nv) => match &nv.value {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(s),
                    ..
                }) => s.clone(),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "Exhibit: #[label] expects a string literal",
                    ));
                }
            },
            syn::Meta::Path(_) => {
                return Err(syn::Error::new_spanned(
                    &attr,
                    "Exhibit: expected #[label(\"...\")] or #[label = \"...\"]",
                ));
            }
        };
        label = Some(text.value());
    }

    *attrs = kept;
    Ok(label)
}

/// `#[label]` only applies to functions.
fn reject_label(attrs: &[Attribute]) -> syn::Result<()> {
    match attrs.iter().find(|a| a.path().is_ident("label")) {
        Some(attr) => Err(syn::Error::new_spanned(
            attr,
            "Exhibit: #[label] can only be placed on a function",
        )),
        None => Ok(()),
    }
}

fn label_tokens(label: Option<String>) -> TokenStream2 {
    match label {
        Some(l) => quote! { Some(#l) },
        None => quote! { None },
    }
}

/// Why a signature cannot be called as `f()`, if it cannot.
fn unreachable_reason(sig: &Signature) -> Option<String> {
    if sig.receiver().is_some() {
        return Some("takes `self`".to_string());
    }
    match sig.inputs.len() {
        0 => {}
        1 => return Some("takes 1 parameter".to_string()),
        n => return Some(format!("takes {} parameters", n)),
    }
    if sig.asyncness.is_some() {
        return Some("is async".to_string());
    }
    if sig.unsafety.is_some() {
        return Some("is unsafe".to_string());
    }
    if sig.generics.type_params().next().is_some() || sig.generics.const_params().next().is_some()
    {
        return Some("is generic".to_string());
    }
    None
}

/// Closure coercible to `ExampleFn` that calls `path()` and normalizes its
/// return value.
///
/// The conversion is chosen by trait dispatch on the concrete return type,
/// so aliased and macro-generated `Result` types still report `Err`.
fn call_wrapper(path: TokenStream2, output: &ReturnType) -> TokenStream2 {
    let body = match output {
        ReturnType::Type(_, ty) if matches!(ty.as_ref(), Type::Never(_)) => quote! { #path() },
        _ => quote! {
            #[allow(unused_imports)]
            use ::exhibit::internal::{DiscardReturn as _, ResultReturn as _};
            (::exhibit::internal::ReturnValue(#path())).into_outcome()
        },
    };

    quote! {
        || -> ::core::result::Result<(), ::exhibit::BoxError> { #body }
    }
}

fn type_name(ty: &Type) -> syn::Result<String> {
    match ty {
        Type::Path(p) => p
            .path
            .segments
            .last()
            .map(|s| s.ident.to_string())
            .ok_or_else(|| syn::Error::new_spanned(ty, "Exhibit: empty type path")),
        _ => Err(syn::Error::new_spanned(
            ty,
            "Exhibit: target must be a named type",
        )),
    }
}

/// Register an impl block as a target type
///
/// Every associated function becomes a member, in declaration order.
/// Functions that cannot be called with zero arguments are still
/// registered; running them reports a diagnostic.
///
/// # Example
///
/// ```ignore
/// struct Basics;
///
/// #[exhibit::target]
/// impl Basics {
///     pub fn main() {
///         exhibit::run_type::<Basics>().unwrap();
///     }
///
///     #[label("Say Hello")]
///     pub fn greet() {
///         println!("hello");
///     }
/// }
///
/// // Register under a different name
/// #[exhibit::target(name = "streams::Basics")]
/// impl Basics { ... }
/// ```
#[proc_macro_attribute]
pub fn target(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = TokenStream2::from(args);
    let block = parse_macro_input!(item as ItemImpl);

    target_impl(args, block)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn target_impl(args: TokenStream2, mut block: ItemImpl) -> Result<TokenStream2, syn::Error> {
    let mut name: Option<String> = None;

    let parser = syn::meta::parser(|meta| {
        let attr_name = attr::name(&meta);
        match attr_name.as_str() {
            "name" => name = Some(attr::string(&meta)?),
            _ => return Err(attr::unknown(&meta, &attr_name)),
        }
        Ok(())
    });
    syn::parse::Parser::parse2(parser, args)?;

    if let Some((_, path, _)) = &block.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "Exhibit: #[exhibit::target] expects an inherent impl block",
        ));
    }
    if !block.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &block.generics,
            "Exhibit: generic impl blocks cannot be targets",
        ));
    }

    let self_ty = block.self_ty.clone();
    let ty_name = type_name(&self_ty)?;
    let name = name.unwrap_or_else(|| ty_name.clone());

    let mut members = Vec::new();
    for item in &mut block.items {
        let method = match item {
            ImplItem::Fn(method) => method,
            ImplItem::Const(c) => {
                reject_label(&c.attrs)?;
                continue;
            }
            ImplItem::Type(t) => {
                reject_label(&t.attrs)?;
                continue;
            }
            ImplItem::Macro(m) => {
                reject_label(&m.attrs)?;
                continue;
            }
            _ => continue,
        };

        let label = label_tokens(take_label(&mut method.attrs)?);
        let ident = &method.sig.ident;
        let member_name = ident.to_string();

        let entry = match unreachable_reason(&method.sig) {
            Some(reason) => quote! { ::exhibit::Entry::Unreachable(#reason) },
            None => {
                let wrapper = call_wrapper(quote! { <#self_ty>::#ident }, &method.sig.output);
                quote! { ::exhibit::Entry::Call(#wrapper) }
            }
        };

        members.push(quote! {
            ::exhibit::MemberDef {
                name: #member_name,
                label: #label,
                entry: #entry,
            }
        });
    }

    Ok(quote! {
        #block

        impl ::exhibit::Target for #self_ty {
            const NAME: &'static str = #name;
            const PATH: &'static str = concat!(module_path!(), "::", #ty_name);
        }

        ::exhibit::internal::inventory::submit! {
            ::exhibit::TargetDef {
                name: #name,
                path: concat!(module_path!(), "::", #ty_name),
                members: &[#(#members),*],
                file: file!(),
                line: line!(),
                module_path: module_path!(),
            }
        }
    })
}

/// Register a free function as an example
///
/// Without `target`, the function joins the target named after its
/// enclosing module.
///
/// # Example
///
/// ```ignore
/// #[exhibit::example(target = "Reduce", label = "Sum with fold")]
/// fn fold_sum() {
///     println!("{}", (1..=4).fold(0, |a, b| a + b));
/// }
///
/// mod grouping {
///     // member of target "grouping"
///     #[exhibit::example]
///     #[label("Group by length")]
///     fn by_length() { ... }
/// }
/// ```
#[proc_macro_attribute]
pub fn example(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = TokenStream2::from(args);
    let func = parse_macro_input!(item as ItemFn);

    example_impl(args, func)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn example_impl(args: TokenStream2, mut func: ItemFn) -> Result<TokenStream2, syn::Error> {
    let mut target: Option<String> = None;
    let mut label: Option<String> = None;

    let parser = syn::meta::parser(|meta| {
        let name = attr::name(&meta);
        match name.as_str() {
            "target" => target = Some(attr::string(&meta)?),
            "label" => label = Some(attr::string(&meta)?),
            _ => return Err(attr::unknown(&meta, &name)),
        }
        Ok(())
    });
    syn::parse::Parser::parse2(parser, args)?;

    if let Some(attr_label) = take_label(&mut func.attrs)? {
        if label.is_some() {
            return Err(syn::Error::new_spanned(
                &func.sig.ident,
                "Exhibit: label given both as an argument and as #[label]",
            ));
        }
        label = Some(attr_label);
    }

    if let Some(reason) = unreachable_reason(&func.sig) {
        return Err(syn::Error::new_spanned(
            &func.sig,
            format!(
                "Exhibit: an example must be callable with no arguments, but this function {}",
                reason
            ),
        ));
    }

    let ident = &func.sig.ident;
    let member_name = ident.to_string();
    let label = label_tokens(label);
    let target = match target {
        Some(t) => quote! { Some(#t) },
        None => quote! { None },
    };
    let wrapper = call_wrapper(quote! { #ident }, &func.sig.output);

    Ok(quote! {
        #func

        ::exhibit::internal::inventory::submit! {
            ::exhibit::ExampleDef {
                target: #target,
                member: ::exhibit::MemberDef {
                    name: #member_name,
                    label: #label,
                    entry: ::exhibit::Entry::Call(#wrapper),
                },
                file: file!(),
                line: line!(),
                module_path: module_path!(),
            }
        }
    })
}
