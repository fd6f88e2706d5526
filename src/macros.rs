/// Implement [`Record`](crate::Record) for a struct from a list of its fields.
///
/// Each field may carry a binding tag; the first comma-delimited segment of the
/// tag becomes the external name. Untagged fields bind under their identifier.
///
/// ```rust
/// use sql_binding::bind_record;
///
/// #[derive(Default)]
/// struct Person {
///     name: String,
///     age: i64,
/// }
///
/// bind_record!(Person {
///     name => "name,omitempty",
///     age,
/// });
/// ```
#[macro_export]
macro_rules! bind_record {
    (@tag) => {
        ::core::option::Option::None
    };
    (@tag $tag:literal) => {
        ::core::option::Option::Some($tag)
    };
    ($record:ident { $($field:ident $(=> $tag:literal)?),* $(,)? }) => {
        impl $crate::Record for $record {
            fn fields() -> &'static [$crate::FieldDef] {
                const FIELDS: &[$crate::FieldDef] = &[
                    $($crate::FieldDef::new(
                        stringify!($field),
                        $crate::bind_record!(@tag $($tag)?),
                    )),*
                ];
                FIELDS
            }

            fn field_value(&self, ident: &str) -> ::core::option::Option<$crate::RowValues> {
                match ident {
                    $(stringify!($field) => ::core::option::Option::Some(
                        $crate::BindField::to_value(&self.$field),
                    ),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_slot(
                &mut self,
                ident: &str,
            ) -> ::core::option::Option<$crate::Destination<'_>> {
                match ident {
                    $(stringify!($field) => ::core::option::Option::Some(
                        $crate::BindField::destination(&mut self.$field),
                    ),)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };
}
