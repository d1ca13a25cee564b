use mandate::roll::{Roll, RollBallot};

fn record(town: &str, id: &str, lat: Option<f64>, lng: Option<f64>) -> RollBallot {
    RollBallot {
        town_name: town.into(),
        ballot_id: id.into(),
        address: None,
        registered_voters: 100,
        lat,
        lng,
        district: None,
    }
}

#[test]
fn stream_csv_test() {
    let csv_path = format!("{}/tests/data/ballots.csv", env!("CARGO_MANIFEST_DIR"));
    let roll = Roll::new().from_csv(csv_path.into());

    let mut ballots: Vec<(usize, RollBallot)> = Vec::new();
    roll.stream_ballots(|entry| ballots.push(entry)).unwrap();

    // The fixture holds 6 rows, one of them without a latitude.
    assert_eq!(ballots.len(), 5);
    for (i, (index, _)) in ballots.iter().enumerate() {
        assert_eq!(i, *index);
    }

    let (_, first) = &ballots[0];
    assert_eq!(first.town_name, "תל אביב - יפו");
    assert_eq!(first.ballot_id, "1.0");
    assert_eq!(first.registered_voters, 550);
    assert_eq!(first.lat, Some(32.0680));
    assert_eq!(first.lng, Some(34.7720));
    assert_eq!(first.district, None);

    for (_, ballot) in ballots.iter() {
        if !ballot.has_coordinate() {
            panic!("ballot {} leaked through without a coordinate", ballot.ballot_id);
        }
    }
}

#[test]
fn stream_records_filter_test() {
    let records = vec![
        record("א", "1", Some(32.0), Some(34.0)),
        record("א", "2", None, Some(34.0)),
        record("א", "3", Some(f64::NAN), Some(34.0)),
        record("א", "4", Some(32.1), Some(34.1)),
    ];
    let roll = Roll::new().from_records(records);

    let mut ballots: Vec<(usize, RollBallot)> = Vec::new();
    roll.stream_ballots(|entry| ballots.push(entry)).unwrap();

    assert_eq!(ballots.len(), 2);
    assert_eq!(ballots[0].0, 0);
    assert_eq!(ballots[0].1.ballot_id, "1");
    assert_eq!(ballots[1].0, 1);
    assert_eq!(ballots[1].1.ballot_id, "4");
}

#[test]
fn stream_empty_storage_test() {
    let roll = Roll::new();
    let mut count = 0;
    roll.stream_ballots(|_| count += 1).unwrap();
    assert_eq!(count, 0);
}

#[test]
fn stream_missing_file_test() {
    let roll = Roll::new().from_csv("does_not_exist.csv".into());
    let result = roll.stream_ballots(|_| {});
    assert!(result.is_err());
}
