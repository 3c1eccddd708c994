use rungs_core::symbol::parse_sequence;
use rungs_core::symbol::record::{encode_record, encode_records, RawRecord};
use rungs_core::{Parity, RungsError, Side, Symbol};

#[test]
fn encodes_attribute_fields() {
    let r = RawRecord::from_fields("LEFT", 3, "EVEN");
    let s = encode_record(0, &r).unwrap();
    assert_eq!(s.side(), Side::Left);
    assert_eq!(s.line_count(), 3);
    assert_eq!(s.parity(), Parity::Even);
    assert_eq!(s.canonical(), "L3E");
}

#[test]
fn accepts_native_and_short_forms() {
    let a = encode_record(0, &RawRecord::from_fields("우", 4, "홀")).unwrap();
    let b = encode_record(0, &RawRecord::from_fields("r", 4, "odd")).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "R4O");

    let c = encode_record(0, &RawRecord::from_result("좌3짝")).unwrap();
    assert_eq!(c, "L3E".parse::<Symbol>().unwrap());
}

#[test]
fn line_count_is_open() {
    let s = encode_record(0, &RawRecord::from_fields("LEFT", 12, "ODD")).unwrap();
    assert_eq!(s.canonical(), "L12O");
    assert_eq!("L12O".parse::<Symbol>().unwrap(), s);
}

#[test]
fn rejects_out_of_enumeration_fields() {
    let bad_side = encode_record(7, &RawRecord::from_fields("UP", 3, "ODD")).unwrap_err();
    match bad_side {
        RungsError::InvalidRecord { index, field, value } => {
            assert_eq!(index, 7);
            assert_eq!(field, "start_point");
            assert_eq!(value, "UP");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let zero = encode_record(0, &RawRecord::from_fields("LEFT", 0, "ODD")).unwrap_err();
    assert!(matches!(zero, RungsError::InvalidRecord { field: "line_count", .. }));

    let neg = encode_record(0, &RawRecord::from_fields("LEFT", -3, "ODD")).unwrap_err();
    assert!(matches!(neg, RungsError::InvalidRecord { field: "line_count", .. }));

    let parity = encode_record(0, &RawRecord::from_fields("LEFT", 3, "MAYBE")).unwrap_err();
    assert!(matches!(parity, RungsError::InvalidRecord { field: "odd_even", .. }));

    let empty = encode_record(0, &RawRecord::default()).unwrap_err();
    assert!(matches!(empty, RungsError::InvalidRecord { field: "result", .. }));
}

#[test]
fn batch_is_fail_fast() {
    let records = vec![
        RawRecord::from_fields("LEFT", 3, "ODD"),
        RawRecord::from_fields("RIGHT", 4, "EVEN"),
        RawRecord::from_result("X9Z"),
        RawRecord::from_fields("LEFT", 3, "ODD"),
    ];
    let err = encode_records(&records).unwrap_err();
    assert!(matches!(err, RungsError::InvalidRecord { index: 2, field: "result", .. }));
}

#[test]
fn symbol_serializes_as_canonical_string() {
    let s: Symbol = "R3O".parse().unwrap();
    assert_eq!(serde_json::to_string(&s).unwrap(), "\"R3O\"");
    let back: Symbol = serde_json::from_str("\"R3O\"").unwrap();
    assert_eq!(back, s);
    assert!(serde_json::from_str::<Symbol>("\"R0O\"").is_err());
}

#[test]
fn parse_sequence_accepts_commas_and_spaces() {
    let v = parse_sequence("L3O, R3E L4E").unwrap();
    assert_eq!(v.len(), 3);
    assert!(parse_sequence("L3O,QQ").is_err());
}
