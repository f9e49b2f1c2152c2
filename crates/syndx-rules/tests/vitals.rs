use syndx_rules::vitals::{
    VitalSign, parse_blood_pressure, parse_heart_rate, parse_temperature, validate_ranges,
};

#[test]
fn temperature_parsing_fails_soft() {
    assert_eq!(parse_temperature(" 37.5 "), Some(37.5));
    assert_eq!(parse_temperature("38"), Some(38.0));
    assert_eq!(parse_temperature("hot"), None);
    assert_eq!(parse_temperature(""), None);
    assert_eq!(parse_temperature("NaN"), None);
    assert_eq!(parse_temperature("inf"), None);
    assert_eq!(parse_heart_rate("80"), Some(80.0));
}

#[test]
fn blood_pressure_requires_both_parts() {
    assert_eq!(parse_blood_pressure("120/80"), (Some(120), Some(80)));
    assert_eq!(parse_blood_pressure("  118 / 76 "), (Some(118), Some(76)));
    assert_eq!(parse_blood_pressure("120"), (None, None));
    assert_eq!(parse_blood_pressure("120/"), (None, None));
    assert_eq!(parse_blood_pressure("/80"), (None, None));
    assert_eq!(parse_blood_pressure("120/80/60"), (None, None));
    assert_eq!(parse_blood_pressure("12a/80"), (None, None));
    assert_eq!(parse_blood_pressure("-120/80"), (None, None));
    assert_eq!(parse_blood_pressure("99999/80"), (None, None));
}

#[test]
fn in_range_vitals_produce_no_warnings() {
    assert!(validate_ranges(Some(37.0), Some(80.0), Some(120), Some(80)).is_empty());
    assert!(validate_ranges(None, None, None, None).is_empty());
    assert!(validate_ranges(Some(35.0), Some(180.0), Some(250), Some(40)).is_empty());
}

#[test]
fn out_of_range_vitals_are_flagged_in_order() {
    let warnings = validate_ranges(Some(43.0), Some(30.0), Some(55), Some(160));
    let vitals: Vec<VitalSign> = warnings.iter().map(|w| w.vital).collect();
    assert_eq!(
        vitals,
        vec![
            VitalSign::Temperature,
            VitalSign::HeartRate,
            VitalSign::SystolicBp,
            VitalSign::DiastolicBp,
        ]
    );
    assert_eq!(warnings[0].message, "Temperature outside normal range (35-42°C)");
    assert_eq!(warnings[2].value, 55.0);
}
