//! Typed records and the macro that declares them.

use crate::error::{Diagnostic, DiagnosticKind};
use crate::reader::FieldReader;
use crate::span::Located;
use retorno_core::{Layout, Line, RecordKind};
use serde::Serialize;
use std::fmt;

/// A fixed-width record type with a static layout.
///
/// Implementations are generated by [`cnab_record!`](crate::cnab_record).
pub trait Record: Sized + Clone + fmt::Debug + PartialEq + Serialize + Send + Sync {
    /// Which record kind this type decodes.
    const KIND: RecordKind;
    /// Field table, fillers included.
    const LAYOUT: Layout;

    /// Read every data field from `reader`.
    fn read(reader: &mut FieldReader<'_, '_>) -> Self;
}

/// Decode one line as record `R`.
///
/// Width problems and field failures are appended to `diagnostics`. The
/// record is always produced; it is marked invalid if anything failed.
pub fn decode_record<R: Record>(line: Line<'_>, diagnostics: &mut Vec<Diagnostic>) -> Located<R> {
    let mut valid = true;
    if !line.is_full_width() {
        diagnostics.push(Diagnostic::new(
            DiagnosticKind::line_length(line.width()),
            line.number(),
        ));
        valid = false;
    }

    let mut reader = FieldReader::new(line, diagnostics);
    let value = R::read(&mut reader);
    let valid = valid && reader.is_valid();
    Located::new(value, line.number(), valid)
}

/// Declare a record struct from its field table.
///
/// Each data field is written `name: kind(offset, length)` with a 0-based
/// offset, where `kind` is one of `text`, `integer`, `date` or
/// `amount(offset, length, scale)`. Fillers are listed separately; they are
/// never read but count towards the layout.
///
/// The generated layout is checked at compile time to tile all 400 columns
/// with no gap or overlap. The invoking crate must depend on `serde`.
///
/// ```
/// use retorno_parser::{cnab_record, Record};
///
/// cnab_record! {
///     /// A two-field record.
///     pub struct Tiny: Detail, "tiny" {
///         /// Record type.
///         tipo_registro: text(0, 1),
///         /// Amount.
///         valor: amount(1, 13, 2),
///     }
///     fillers {
///         brancos: (14, 386),
///     }
/// }
///
/// assert_eq!(Tiny::LAYOUT.fields.len(), 3);
/// ```
#[macro_export]
macro_rules! cnab_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $kind:ident, $layout_name:literal {
            $(
                $(#[$field_meta:meta])*
                $field:ident :
                    $decoder:ident ( $offset:literal, $length:literal $(, $scale:literal)? ),
            )*
        }
        fillers {
            $( $filler:ident : ( $filler_offset:literal, $filler_length:literal ), )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, ::serde::Serialize)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $crate::cnab_field_type!($decoder),
            )*
        }

        impl $name {
            /// Field table of this record, fillers included.
            pub const FIELDS: &'static [$crate::__private::FieldSpec] = &[
                $(
                    $crate::__private::FieldSpec::$decoder(
                        stringify!($field), $offset, $length $(, $scale)?
                    ),
                )*
                $(
                    $crate::__private::FieldSpec::filler(
                        stringify!($filler), $filler_offset, $filler_length
                    ),
                )*
            ];
        }

        impl $crate::Record for $name {
            const KIND: $crate::__private::RecordKind = $crate::__private::RecordKind::$kind;
            const LAYOUT: $crate::__private::Layout =
                $crate::__private::Layout::new($layout_name, Self::FIELDS);

            fn read(reader: &mut $crate::FieldReader<'_, '_>) -> Self {
                Self {
                    $(
                        $field: reader.$decoder(&$crate::__private::FieldSpec::$decoder(
                            stringify!($field), $offset, $length $(, $scale)?
                        )),
                    )*
                }
            }
        }

        const _: () = assert!(
            <$name as $crate::Record>::LAYOUT.tiles($crate::__private::LINE_WIDTH),
            concat!(stringify!($name), " layout does not tile the line")
        );
    };
}

/// Map a field decoder name to the Rust type it produces.
#[doc(hidden)]
#[macro_export]
macro_rules! cnab_field_type {
    (text) => { ::std::string::String };
    (integer) => { ::core::option::Option<u64> };
    (amount) => { ::core::option::Option<$crate::__private::Decimal> };
    (date) => { ::core::option::Option<$crate::__private::NaiveDate> };
}
