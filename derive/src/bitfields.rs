use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, Field, Fields, Ident, LitInt, LitStr, Result, Type,
    ext::IdentExt,
    parse::{Parse, ParseStream},
};

pub(crate) fn expand_bitfields(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            "`Bitfields` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new_spanned(
            input,
            "`Bitfields` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .map(Result::transpose)
        .flatten() // Skip fields without an attribute.
        .collect::<Result<Vec<_>>>()?;

    let descriptors = fields.iter().map(|field| {
        let name = LitStr::new(&field.name.unraw().to_string(), field.name.span());
        let tag = LitStr::new(field.bits.base10_digits(), field.bits.span());

        quote! { ::bitunpack::avec::Field::new(#name, #tag) }
    });

    let cases = fields.iter().enumerate().map(|(index, field)| {
        let name = &field.name;

        let assignment = match field.primitive {
            Primitive::Bool => quote! { self.#name = value != 0 },
            Primitive::Int(ref ty) => quote! { self.#name = value as #ty },
        };

        quote! { #index => { #assignment } }
    });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::bitunpack::avec::Bitfields for #name #ty_generics #where_clause {
            fn fields(&self) -> &[::bitunpack::avec::Field<'_>] {
                const FIELDS: &[::bitunpack::avec::Field<'static>] = &[#(#descriptors),*];
                FIELDS
            }

            fn set_field(&mut self, index: usize, value: u64) {
                match index {
                    #(#cases)*
                    _ => {}
                };
            }
        }

        impl #impl_generics ::bitunpack::avec::Destination for #name #ty_generics #where_clause {
            fn slot(&mut self) -> ::bitunpack::avec::Slot<'_> {
                ::bitunpack::avec::Slot::Bits(self)
            }
        }
    };

    Ok(expanded.into())
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    bits: LitInt,
    primitive: Primitive,
}

#[derive(Debug)]
enum Primitive {
    Bool,
    Int(Ident),
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let name = field.ident.clone().unwrap();

        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("bits")) else {
            return Ok(None);
        };

        let BitsAttribute { bits } = attr.meta.require_list()?.parse_args()?;

        let width = bits.base10_parse::<u32>()?;
        if width == 0 {
            Err(Error::new_spanned(
                &bits,
                "Bit width must be a positive integer.",
            ))?
        }

        let Type::Path(path) = &field.ty else {
            Err(Error::new_spanned(
                &field.ty,
                "Field must have type `bool`, `u8`, `u16`, `u32` or `u64`.",
            ))?
        };

        let Some(ident) = path.path.get_ident() else {
            Err(Error::new_spanned(
                &path.path,
                "Field must have type `bool`, `u8`, `u16`, `u32` or `u64`.",
            ))?
        };

        let (primitive, capacity) = match ident.to_string().as_str() {
            "bool" => (Primitive::Bool, 1),
            "u8" => (Primitive::Int(ident.clone()), 8),
            "u16" => (Primitive::Int(ident.clone()), 16),
            "u32" => (Primitive::Int(ident.clone()), 32),
            "u64" => (Primitive::Int(ident.clone()), 64),
            _ => Err(Error::new_spanned(
                ident,
                "Field must have type `bool`, `u8`, `u16`, `u32` or `u64`.",
            ))?,
        };

        if width > capacity {
            Err(Error::new_spanned(
                &bits,
                format!("Bit width exceeds the {capacity} bits of `{ident}`."),
            ))?
        }

        Ok(Some(Self {
            name,
            bits,
            primitive,
        }))
    }
}

#[derive(Debug)]
struct BitsAttribute {
    bits: LitInt,
}

impl Parse for BitsAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let bits = input.parse::<LitInt>()?;
        Ok(Self { bits })
    }
}
