use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::visit_mut::{self, VisitMut};
use syn::{Ident, Lifetime, ParenthesizedGenericArguments, Type, TypeBareFn, TypeReference};

use crate::gen_peers::{backing_ident, queue_ident};
use crate::validate::Accepted;

/// Replacement for the original static: a unit struct carrying the original
/// name, attributes and visibility, with `get`/`set` methods routed through
/// the queue.
pub struct AccessorBlock {
    pub name: Ident,
    pub property: TokenStream,
    pub getter: TokenStream,
    pub setter: TokenStream,
}

/// Pins elided and `'_` lifetimes to `'static`.
///
/// Inside a `static` an elided lifetime already means `'static`; in a method
/// signature it would become a fresh lifetime instead.
struct StaticLifetimes;

impl VisitMut for StaticLifetimes {
    fn visit_type_reference_mut(&mut self, reference: &mut TypeReference) {
        if reference.lifetime.is_none() {
            reference.lifetime = Some(Lifetime::new("'static", reference.and_token.span()));
        }
        visit_mut::visit_type_reference_mut(self, reference);
    }

    fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
        if lifetime.ident == "_" {
            *lifetime = Lifetime::new("'static", lifetime.ident.span());
        }
    }

    // Lifetimes in `fn(&T)` and `Fn(&T)` are higher-ranked, not elided.
    fn visit_type_bare_fn_mut(&mut self, _: &mut TypeBareFn) {}

    fn visit_parenthesized_generic_arguments_mut(
        &mut self,
        _: &mut ParenthesizedGenericArguments,
    ) {
    }
}

/// The property type as it must be spelled outside the `static` item.
pub fn signature_type(ty: &Type) -> Type {
    let mut ty = ty.clone();
    StaticLifetimes.visit_type_mut(&mut ty);
    ty
}

pub fn generate(accepted: &Accepted) -> AccessorBlock {
    let vis = &accepted.vis;
    let attrs = &accepted.attrs;
    let name = &accepted.name;
    let ty = signature_type(&accepted.ty);
    let queue = queue_ident(name);
    let backing = backing_ident(name);

    let name_str = name.unraw().to_string();
    let get_doc = format!(
        "Read `{}` under shared access. Any number of readers may hold it at once.",
        name_str
    );
    let set_doc = format!(
        "Replace `{}` under barrier access. Waits for every reader and writer to finish first.",
        name_str
    );

    let property = quote! {
        #(#attrs)*
        #[allow(non_camel_case_types)]
        #vis struct #name;
    };

    let getter = quote! {
        #[doc = #get_doc]
        #vis fn get(&self) -> #ty {
            #queue.sync(&#backing, |value| ::core::clone::Clone::clone(value))
        }
    };

    let setter = quote! {
        #[doc = #set_doc]
        #vis fn set(&self, new_value: #ty) {
            #queue.sync_barrier(&#backing, |value| *value = new_value);
        }
    };

    AccessorBlock {
        name: name.clone(),
        property,
        getter,
        setter,
    }
}

/// Renders the whole block as one fragment, property first.
impl ToTokens for AccessorBlock {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let name = &self.name;
        let getter = &self.getter;
        let setter = &self.setter;
        self.property.to_tokens(tokens);
        tokens.extend(quote! {
            impl #name {
                #getter
                #setter
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::ExpansionContext;
    use crate::validate::validate;
    use syn::{parse_quote, Item};

    fn accept(item: Item) -> Accepted {
        validate(&item, &ExpansionContext::for_attribute("barrier_protected"))
            .expect("declaration should be accepted")
    }

    #[test]
    fn getter_reads_under_shared_access() {
        let block = generate(&accept(parse_quote! { static foo: i64 = 0; }));
        let expected = quote! {
            #[doc = "Read `foo` under shared access. Any number of readers may hold it at once."]
            fn get(&self) -> i64 {
                fooQueue.sync(&_foo, |value| ::core::clone::Clone::clone(value))
            }
        };
        assert_eq!(block.getter.to_string(), expected.to_string());
    }

    #[test]
    fn setter_writes_under_barrier() {
        let block = generate(&accept(parse_quote! { static foo: i64 = 0; }));
        let expected = quote! {
            #[doc = "Replace `foo` under barrier access. Waits for every reader and writer to finish first."]
            fn set(&self, new_value: i64) {
                fooQueue.sync_barrier(&_foo, |value| *value = new_value);
            }
        };
        assert_eq!(block.setter.to_string(), expected.to_string());
    }

    #[test]
    fn property_keeps_attributes_and_visibility() {
        let block = generate(&accept(parse_quote! {
            #[allow(dead_code)]
            pub static HITS: u64 = 0;
        }));
        let expected = quote! {
            #[allow(dead_code)]
            #[allow(non_camel_case_types)]
            pub struct HITS;
        };
        assert_eq!(block.property.to_string(), expected.to_string());

        let getter = block.getter.to_string();
        assert!(getter.contains("pub fn get (& self) -> u64"), "{getter}");
        let setter = block.setter.to_string();
        assert!(setter.contains("pub fn set (& self , new_value : u64)"), "{setter}");
    }

    #[test]
    fn elided_lifetimes_become_static_in_signatures() {
        let block = generate(&accept(parse_quote! {
            static GREETING: Option<&str> = None;
        }));
        let getter = block.getter.to_string();
        assert!(getter.contains("-> Option < & 'static str >"), "{getter}");
        let setter = block.setter.to_string();
        assert!(
            setter.contains("new_value : Option < & 'static str >"),
            "{setter}"
        );
    }

    #[test]
    fn signature_type_rewrites_only_elided_lifetimes() {
        let cases: [(Type, &str); 4] = [
            (parse_quote!(&[u8]), "& 'static [u8]"),
            (parse_quote!(Cow<'_, str>), "Cow < 'static , str >"),
            (parse_quote!(&'static str), "& 'static str"),
            (parse_quote!(fn(&str) -> &str), "fn (& str) -> & str"),
        ];
        for (ty, expected) in cases {
            assert_eq!(signature_type(&ty).to_token_stream().to_string(), expected);
        }

        let boxed: Type = parse_quote!(Box<dyn Fn(&str) -> usize + Send + Sync>);
        assert_eq!(
            signature_type(&boxed).to_token_stream().to_string(),
            boxed.to_token_stream().to_string()
        );
    }

    #[test]
    fn rendered_block_holds_property_then_impl() {
        let block = generate(&accept(parse_quote! { static foo: i64 = 0; }));
        let property = block.property.to_string();
        let rendered = block.to_token_stream().to_string();

        assert!(rendered.starts_with(&property));
        assert!(rendered.contains("impl foo {"));
        let get_at = rendered.find("fn get").expect("getter present");
        let set_at = rendered.find("fn set").expect("setter present");
        assert!(get_at < set_at);
    }
}
