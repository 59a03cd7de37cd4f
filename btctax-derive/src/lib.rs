use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr};

/// Derive macro that turns labelled amount fields into report rows.
///
/// Every field annotated with `#[report(label = "...")]` becomes one row, in
/// declaration order. Fields without the attribute are left out of the rows.
///
/// Generates a `report_rows(&self) -> Vec<ReportRow>` method. `ReportRow`
/// must be in scope where the derive is used.
#[proc_macro_derive(ReportRows, attributes(report))]
pub fn derive_report_rows(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => panic!("ReportRows only supports structs with named fields"),
        },
        _ => panic!("ReportRows only supports structs"),
    };

    let rows: Vec<_> = fields
        .iter()
        .filter_map(|field| {
            let ident = field.ident.as_ref()?;
            get_report_label(&field.attrs).map(|label| (ident, label))
        })
        .collect();

    let entries = rows.iter().map(|(ident, label)| {
        quote! {
            ReportRow {
                label: #label,
                value: self.#ident,
            }
        }
    });

    let expanded = quote! {
        impl #name {
            pub fn report_rows(&self) -> Vec<ReportRow> {
                vec![
                    #(#entries),*
                ]
            }
        }
    };

    TokenStream::from(expanded)
}

fn get_report_label(attrs: &[syn::Attribute]) -> Option<String> {
    let mut label = None;
    for attr in attrs {
        if !attr.path().is_ident("report") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("label") {
                let lit: LitStr = meta.value()?.parse()?;
                label = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("expected `label = \"...\"`"))
            }
        })
        .unwrap_or_else(|err| panic!("invalid #[report] attribute: {err}"));
    }
    label
}
