use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod bitfields;

#[proc_macro_derive(Bitfields, attributes(bits))]
pub fn derive_bitfields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match bitfields::expand_bitfields(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}
