use proc_macro::TokenStream;
use quote::quote;
use syn::{parse::Parser, parse_macro_input, Data, DataStruct, DeriveInput, Fields, Meta};

/// 生成 Record trait 的实现
///
/// 按字段声明顺序投影出 (列名, 值)，供 `make_insert_query_with_record` 使用。
///
/// 字段属性 `#[column(...)]`：
/// - `name = "..."`：列名；为空或为 `"-"` 时使用小写的字段名
/// - `omit_empty`：文本字段为空字符串时不参与投影
///
/// 字段类型需要实现 `strikeql::ToSqlValue`。列表、映射等复合类型会被投影，
/// 但在生成 INSERT 时被省略。
///
/// 使用示例：
/// ```ignore
/// #[derive(Record)]
/// struct BasketPlayer {
///     id: i64,
///     #[column(name = "points_per_game")]
///     ppg: f32,
///     #[column(omit_empty)]
///     surname: String,
///     nicknames: Vec<String>,
/// }
/// ```
///
/// 只支持具名字段的结构体，`column` 中出现未知的键会编译失败，
/// 见 `strikeql::Record` 文档中的示例。
#[proc_macro_derive(Record, attributes(column))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // 获取字段列表（必须是具名字段的结构体）
    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => &fields.named,
        _ => {
            return syn::Error::new_spanned(
                name,
                "Record derive only supports structs with named fields",
            )
            .to_compile_error()
            .into();
        }
    };

    let mut projections = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let attrs = match parse_column_attrs(&field.attrs) {
            Ok(attrs) => attrs,
            Err(err) => return err.to_compile_error().into(),
        };

        let column = column_name(field_ident, attrs.name.as_deref());
        let column_lit = syn::LitStr::new(&column, proc_macro2::Span::call_site());
        let push = quote! {
            fields.push(::strikeql::record::ProjectedField::new(
                #column_lit,
                ::strikeql::value::ToSqlValue::to_sql_value(&self.#field_ident),
            ));
        };

        if attrs.omit_empty {
            projections.push(quote! {
                if !::strikeql::value::ToSqlValue::is_empty_text(&self.#field_ident) {
                    #push
                }
            });
        } else {
            projections.push(push);
        }
    }

    let capacity = fields.len();
    let expanded = quote! {
        impl #impl_generics ::strikeql::record::Record for #name #ty_generics #where_clause {
            fn project(&self) -> ::std::vec::Vec<::strikeql::record::ProjectedField> {
                #[allow(unused_mut)]
                let mut fields = ::std::vec::Vec::with_capacity(#capacity);
                #(#projections)*
                fields
            }
        }
    };

    TokenStream::from(expanded)
}

/// `#[column(...)]` 解析结果
#[derive(Default)]
struct ColumnAttrs {
    name: Option<String>,
    omit_empty: bool,
}

fn parse_column_attrs(attrs: &[syn::Attribute]) -> syn::Result<ColumnAttrs> {
    let mut parsed = ColumnAttrs::default();
    for attr in attrs {
        if !attr.path().is_ident("column") {
            continue;
        }
        let list = attr.meta.require_list()?;
        let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
        for meta in parser.parse2(list.tokens.clone())? {
            match meta {
                Meta::NameValue(nv) if nv.path.is_ident("name") => {
                    if let syn::Expr::Lit(syn::ExprLit {
                        lit: syn::Lit::Str(s),
                        ..
                    }) = &nv.value
                    {
                        parsed.name = Some(s.value());
                    } else {
                        return Err(syn::Error::new_spanned(
                            &nv.value,
                            "column name must be a string literal",
                        ));
                    }
                }
                Meta::Path(path) if path.is_ident("omit_empty") => {
                    parsed.omit_empty = true;
                }
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "unknown column attribute, expected `name = \"...\"` or `omit_empty`",
                    ));
                }
            }
        }
    }
    Ok(parsed)
}

/// 列名：别名非空且不为 `"-"` 时使用别名，否则使用小写的字段名
fn column_name(ident: &syn::Ident, alias: Option<&str>) -> String {
    match alias.map(str::trim) {
        Some(alias) if !alias.is_empty() && alias != "-" => alias.to_string(),
        _ => ident
            .to_string()
            .trim_start_matches("r#")
            .to_lowercase(),
    }
}
