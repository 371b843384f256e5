use super::*;

fn sample_logs() -> SnapshotLogs {
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
    SnapshotLogs {
        fine_grained: vec![
            Snapshot::new(now - Duration::minutes(1), DEFAULT_GUILD_ID, 99, 20),
            Snapshot::new(now, DEFAULT_GUILD_ID, 100, 21),
        ],
        daily: vec![Snapshot::new(
            now - Duration::days(3),
            DEFAULT_GUILD_ID,
            90,
            18,
        )],
    }
}

/// Tests that saved logs load back unchanged.
///
/// Expected: loaded logs equal the saved logs
#[test]
fn saved_logs_load_back_equal() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let store = SnapshotStore::new(test.data_file());
    let logs = sample_logs();

    store.save(&logs).unwrap();

    assert_eq!(store.load(), logs);

    Ok(())
}

/// Tests saving what was loaded from a fresh start.
///
/// Expected: file written with two empty logs
#[test]
fn saving_fresh_state_writes_empty_logs() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let store = SnapshotStore::new(test.data_file());

    store.save(&store.load()).unwrap();

    let json = test.read_json()?;
    assert_eq!(json["fine_grained"], serde_json::json!([]));
    assert_eq!(json["daily"], serde_json::json!([]));
    assert!(store.load().is_empty());

    Ok(())
}

/// Tests the on-disk format of a saved snapshot.
///
/// Expected: ISO-8601 timestamp, integer counts, `YYYY-MM-DD` date and hour
#[test]
fn writes_persisted_format() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let store = SnapshotStore::new(test.data_file());

    store.save(&sample_logs()).unwrap();

    let json = test.read_json()?;
    let latest = &json["fine_grained"][1];
    assert_eq!(latest["timestamp"], "2026-10-16T12:00:00Z");
    assert_eq!(latest["guild_id"], DEFAULT_GUILD_ID);
    assert_eq!(latest["total_members"], 100);
    assert_eq!(latest["online_members"], 21);
    assert_eq!(latest["date"], "2026-10-16");
    assert_eq!(latest["hour"], 12);
    assert_eq!(json["daily"][0]["date"], "2026-10-13");

    Ok(())
}

/// Tests that saving replaces previous contents, including corrupt ones.
///
/// Expected: the file holds only the newly saved logs
#[test]
fn overwrites_existing_file() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_raw_contents("definitely not json")
        .build()?;
    let store = SnapshotStore::new(test.data_file());
    let logs = sample_logs();

    store.save(&logs).unwrap();

    assert_eq!(store.load(), logs);

    Ok(())
}

/// Tests that missing parent directories are created.
///
/// Expected: Ok with the file created in the nested directory
#[test]
fn creates_parent_directories() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let path = test.path().join("state").join("nested").join("growth_data.json");
    let store = SnapshotStore::new(&path);

    store.save(&sample_logs()).unwrap();

    assert!(path.exists());
    assert_eq!(store.load(), sample_logs());

    Ok(())
}

/// Tests that a write failure is reported to the caller.
///
/// Uses a regular file where a parent directory is expected so the directory
/// cannot be created.
///
/// Expected: Err(AppError::IoErr)
#[test]
fn reports_write_failure() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let blocker = test.path().join("blocker");
    std::fs::write(&blocker, "")?;
    let store = SnapshotStore::new(blocker.join("growth_data.json"));

    let result = store.save(&sample_logs());

    assert!(matches!(
        result,
        Err(crate::server::error::AppError::IoErr(_))
    ));

    Ok(())
}
