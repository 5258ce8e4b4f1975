//! NULL Sentinel Tests
//!
//! Every column type has exactly one NULL encoding; these tests pin each one.

use crate::common::*;

fn null_bytes(column_type: ColumnType) -> Vec<u8> {
    let mut builder = builder_for(&[column_type]);
    builder.add_null().unwrap();
    assert!(builder.is_complete());
    builder.row().unwrap().to_vec()
}

#[test]
fn null_tinyint() {
    assert_eq!(null_bytes(ColumnType::TinyInt), vec![0x80]);
}

#[test]
fn null_smallint() {
    assert_eq!(null_bytes(ColumnType::SmallInt), vec![0x80, 0x00]);
}

#[test]
fn null_integer() {
    assert_eq!(null_bytes(ColumnType::Integer), vec![0x80, 0, 0, 0]);
}

#[test]
fn null_bigint() {
    assert_eq!(null_bytes(ColumnType::BigInt), vec![0x80, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn null_float() {
    assert_eq!(
        null_bytes(ColumnType::Float),
        vec![0xFF, 0xEF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
    );
}

#[test]
fn null_string_is_four_bytes() {
    assert_eq!(null_bytes(ColumnType::String), vec![0xFF, 0xFF, 0xFF, 0xFF]);
}

#[test]
fn null_varbinary_is_four_bytes() {
    assert_eq!(null_bytes(ColumnType::VarBinary), vec![0xFF, 0xFF, 0xFF, 0xFF]);
}

#[test]
fn nulls_decode_as_null_for_every_type() {
    let schema = Schema::new(ColumnType::ALL);
    let mut builder = RowBuilder::new(schema.clone());
    while !builder.is_complete() {
        builder.add_null().unwrap();
    }
    let decoded = decode_row(&schema, builder.row().unwrap());
    assert!(decoded.iter().all(Value::is_null));
    assert_eq!(builder.encoded_len(), schema.fixed_width_total());
}

#[test]
fn null_value_dispatches_to_add_null() {
    let row = encode(
        &[ColumnType::BigInt, ColumnType::String],
        &[Value::Null, Value::from(None::<String>)],
    );
    assert_eq!(row.len(), 12);
    assert_eq!(&row[..8], &i64::MIN.to_be_bytes());
    assert_eq!(&row[8..], &[0xFF; 4]);
}
