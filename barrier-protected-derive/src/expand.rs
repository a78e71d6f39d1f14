use proc_macro2::{Span, TokenStream};
use quote::{quote, ToTokens};
use syn::Item;

use crate::declaration::DeclarationNode;
use crate::error::GenerationError;
use crate::validate::validate;
use crate::{gen_accessors, gen_peers};

const ATTRIBUTE: &str = "barrier_protected";

/// What an expansion knows about the attribute that triggered it.
pub struct ExpansionContext {
    attribute: String,
    span: Span,
}

impl ExpansionContext {
    /// Context for `#[<name>]`, anchored at the macro call site (the attribute).
    pub fn for_attribute(name: &str) -> Self {
        Self {
            attribute: format!("#[{}]", name),
            span: Span::call_site(),
        }
    }

    /// Attribute text as the user wrote it, used in rejection messages.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Turn a generation error into a diagnostic anchored at the attribute.
    pub fn diagnostic(&self, err: &GenerationError) -> syn::Error {
        syn::Error::new(self.span, err.description())
    }
}

/// Peer declarations for an annotated static: the queue, then the backing cell.
pub fn expand_peers<D>(
    declaration: &D,
    context: &ExpansionContext,
) -> Result<Vec<TokenStream>, GenerationError>
where
    D: DeclarationNode + ?Sized,
{
    let accepted = validate(declaration, context)?;
    let peers = gen_peers::generate(&accepted);
    Ok(vec![peers.sync_handle, peers.backing_field])
}

/// The accessor block replacing the annotated static, as a single fragment.
pub fn expand_accessors<D>(
    declaration: &D,
    context: &ExpansionContext,
) -> Result<Vec<TokenStream>, GenerationError>
where
    D: DeclarationNode + ?Sized,
{
    let accepted = validate(declaration, context)?;
    Ok(vec![gen_accessors::generate(&accepted).into_token_stream()])
}

/// Drive both entry points for one annotated item and splice the result.
///
/// Each entry point validates on its own, so a rejected item reports one
/// diagnostic per entry point. The item is passed through untouched on
/// failure so later errors are not cascaded from a missing declaration.
pub fn barrier_protected(attr: TokenStream, item: Item) -> TokenStream {
    if !attr.is_empty() {
        let err = syn::Error::new_spanned(
            &attr,
            "barrier_protected takes no arguments. Usage: #[barrier_protected]",
        )
        .to_compile_error();
        return quote! {
            #item
            #err
        };
    }

    let context = ExpansionContext::for_attribute(ATTRIBUTE);
    let accessors = expand_accessors(&item, &context);
    let peers = expand_peers(&item, &context);

    match (accessors, peers) {
        (Ok(accessors), Ok(peers)) => quote! {
            #(#accessors)*
            #(#peers)*
        },
        (accessors, peers) => {
            let errors = [accessors.err(), peers.err()]
                .iter()
                .flatten()
                .map(|err| context.diagnostic(err))
                .reduce(|mut all, next| {
                    all.combine(next);
                    all
                })
                .map(|all| all.to_compile_error());
            quote! {
                #item
                #errors
            }
        }
    }
}
