use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use firedoc::{decode_value, encode_value, TaggedValue, Value};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap().fixed_offset()
}

#[test]
fn utc_timestamp_formats_with_trailing_z() {
    let ts = utc(2024, 5, 1, 12, 34, 56);
    let tagged = encode_value(&Value::Timestamp(ts)).unwrap();
    assert_eq!(
        tagged,
        TaggedValue::TimestampValue("2024-05-01T12:34:56.000000Z".to_string())
    );
}

#[test]
fn utc_timestamp_roundtrips_to_the_same_instant() -> Result<(), Box<dyn std::error::Error>> {
    let ts = utc(2024, 5, 1, 12, 34, 56);
    let tagged = encode_value(&Value::Timestamp(ts)).unwrap();
    match decode_value(&tagged)? {
        Value::Timestamp(back) => assert_eq!(back, ts),
        other => panic!("unexpected value: {other:?}"),
    }
    Ok(())
}

// The lossy case is contractual: a non-UTC offset is discarded and the
// local reading gets relabelled UTC, shifting the instant.
#[test]
fn non_utc_offset_is_mislabelled_as_utc() -> Result<(), Box<dyn std::error::Error>> {
    let plus_five = FixedOffset::east_opt(5 * 3600).unwrap();
    let ts = plus_five.with_ymd_and_hms(2024, 5, 1, 17, 34, 56).unwrap();

    let tagged = encode_value(&Value::Timestamp(ts)).unwrap();
    assert_eq!(
        tagged,
        TaggedValue::TimestampValue("2024-05-01T17:34:56.000000Z".to_string())
    );

    match decode_value(&tagged)? {
        Value::Timestamp(back) => {
            assert_ne!(back, ts);
            // Shifted by exactly the discarded offset.
            assert_eq!(back - ts, chrono::Duration::hours(5));
        }
        other => panic!("unexpected value: {other:?}"),
    }
    Ok(())
}

#[test]
fn subsecond_precision_is_microseconds() {
    use chrono::Timelike;
    let ts = Utc
        .with_ymd_and_hms(2024, 5, 1, 0, 0, 1)
        .unwrap()
        .with_nanosecond(123_456_000)
        .unwrap()
        .fixed_offset();
    let tagged = encode_value(&Value::Timestamp(ts)).unwrap();
    assert_eq!(
        tagged,
        TaggedValue::TimestampValue("2024-05-01T00:00:01.123456Z".to_string())
    );
}
