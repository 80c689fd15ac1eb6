//! Tests for the metadata row and header derivation

use super::METADATA_100M;
use crate::Error;
use crate::app::models::{Gender, Season};
use crate::app::services::result_parser::ResultMetadata;
use csv::StringRecord;

fn record(line: &str) -> StringRecord {
    StringRecord::from(line.split(',').collect::<Vec<_>>())
}

#[test]
fn test_from_record() {
    let metadata = ResultMetadata::from_record(&record(METADATA_100M)).unwrap();
    assert_eq!(metadata.event_code, "014");
    assert_eq!(metadata.event_name, "Women 100 Meters");
    assert_eq!(metadata.round_name, "Finals");
    assert_eq!(metadata.meet_name, "Big Ten Outdoor Championships");
    assert_eq!(metadata.meet_year, "2025");
    assert_eq!(metadata.location.as_deref(), Some("Columbus OH"));
}

#[test]
fn test_location_is_optional() {
    let metadata =
        ResultMetadata::from_record(&record("1,1,Men 200 M,Prelims,Scheduled,,,,Meet,Apr 5,2025"))
            .unwrap();
    assert!(metadata.location.is_none());
}

#[test]
fn test_short_row_names_parsed_fields() {
    let err = ResultMetadata::from_record(&record("014,1,Women 100 Meters,Finals")).unwrap_err();
    match err {
        Error::Validation { message } => {
            assert!(message.contains("4 field(s)"));
            assert!(message.contains("event_code=\"014\""));
            assert!(message.contains("round_name=\"Finals\""));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_header_normalization() {
    let metadata = ResultMetadata::from_record(&record(METADATA_100M)).unwrap();
    let header = metadata.to_header(None).unwrap();

    assert_eq!(header.event_num, "14");
    assert_eq!(header.event_name, "100 Meters");
    assert_eq!(header.gender, Gender::Women);
    assert_eq!(header.event_round.as_deref(), Some("final"));
    assert_eq!(header.event_status.as_deref(), Some("scored"));
    assert_eq!(header.meet_name.as_deref(), Some("Big Ten Outdoor Championships"));
    assert_eq!(header.meet_year.as_deref(), Some("2025"));
    assert_eq!(header.meet_season, Some(Season::Outdoor));
}

#[test]
fn test_status_in_progress() {
    let metadata = ResultMetadata::from_record(&record(
        "2,1,Men Mile,Final,In Progress,,,,Winter Open,Feb 1 2025,2025",
    ))
    .unwrap();
    let header = metadata.to_header(None).unwrap();
    assert_eq!(header.event_status.as_deref(), Some("in-progress"));
    assert_eq!(header.meet_season, Some(Season::Indoor));
}

#[test]
fn test_headerless_multi_event_gender_from_season() {
    let metadata = ResultMetadata::from_record(&record(
        "30,1,Heptathlon,Final,Official,,,,SEC Indoor Championships,Feb 2025,2025",
    ))
    .unwrap();
    assert_eq!(metadata.to_header(None).unwrap().gender, Gender::Men);

    let metadata = ResultMetadata::from_record(&record(
        "30,1,Heptathlon,Final,Official,,,,SEC Championships,,2025",
    ))
    .unwrap();
    assert_eq!(
        metadata.to_header(Some(Season::Outdoor)).unwrap().gender,
        Gender::Women
    );
}

#[test]
fn test_indoor_decathlon_gender_is_undetermined() {
    let metadata = ResultMetadata::from_record(&record(
        "30,1,Decathlon,Final,Official,,,,Big Indoor Invite,Jan 2025,2025",
    ))
    .unwrap();

    match metadata.to_header(None).unwrap_err() {
        Error::GenderUndetermined { event_name, season } => {
            assert_eq!(event_name, "Decathlon");
            assert_eq!(season, "indoor");
        }
        other => panic!("expected undetermined gender, got {:?}", other),
    }
}

#[test]
fn test_non_multi_event_without_gender_is_unknown() {
    let metadata = ResultMetadata::from_record(&record(
        "40,1,Mixed 4x400 Relay,Final,Scored,,,,Open,May 2025,2025",
    ))
    .unwrap();
    assert_eq!(metadata.to_header(None).unwrap().gender, Gender::Unknown);
}
