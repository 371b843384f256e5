use super::*;

/// Tests recording the very first snapshot.
///
/// Verifies that the snapshot lands in both logs and is persisted.
///
/// Expected: one fine-grained and one daily entry, on disk as well as in memory
#[test]
fn first_snapshot_goes_to_both_logs_and_disk() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let mut tracker = open_tracker(&test);

    tracker
        .record_snapshot_at(now(), DEFAULT_GUILD_ID, 120, 30)
        .unwrap();

    assert_eq!(tracker.logs().fine_grained.len(), 1);
    assert_eq!(tracker.logs().daily.len(), 1);

    let reloaded = SnapshotStore::new(test.data_file()).load();
    assert_eq!(&reloaded, tracker.logs());
    assert_eq!(reloaded.fine_grained[0].total_members, 120);
    assert_eq!(reloaded.fine_grained[0].online_members, 30);

    Ok(())
}

/// Tests recording twice on the same calendar date.
///
/// Expected: two fine-grained entries, one daily entry
#[test]
fn same_date_adds_one_daily_entry() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let mut tracker = open_tracker(&test);

    tracker
        .record_snapshot_at(now(), DEFAULT_GUILD_ID, 120, 30)
        .unwrap();
    tracker
        .record_snapshot_at(now() + Duration::hours(6), DEFAULT_GUILD_ID, 125, 31)
        .unwrap();

    assert_eq!(tracker.logs().fine_grained.len(), 2);
    assert_eq!(tracker.logs().daily.len(), 1);
    assert_eq!(tracker.logs().daily[0].total_members, 120);

    Ok(())
}

/// Tests recording on consecutive dates.
///
/// Expected: one daily entry per date
#[test]
fn new_date_adds_daily_entry() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let mut tracker = open_tracker(&test);

    tracker
        .record_snapshot_at(now(), DEFAULT_GUILD_ID, 120, 30)
        .unwrap();
    tracker
        .record_snapshot_at(now() + Duration::days(1), DEFAULT_GUILD_ID, 121, 30)
        .unwrap();

    assert_eq!(tracker.logs().daily.len(), 2);

    Ok(())
}

/// Tests that the daily entry for a date is tracked per guild.
///
/// Expected: one daily entry for each guild on the same date
#[test]
fn daily_dedup_is_per_guild() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let mut tracker = open_tracker(&test);

    tracker
        .record_snapshot_at(now(), DEFAULT_GUILD_ID, 120, 30)
        .unwrap();
    tracker
        .record_snapshot_at(now(), OTHER_GUILD_ID, 15, 2)
        .unwrap();
    tracker
        .record_snapshot_at(now() + Duration::minutes(1), OTHER_GUILD_ID, 16, 2)
        .unwrap();

    assert_eq!(tracker.logs().fine_grained.len(), 3);
    assert_eq!(tracker.logs().daily.len(), 2);

    Ok(())
}

/// Tests fine-grained retention.
///
/// Verifies that entries older than 7 days are dropped when a new snapshot is
/// recorded, while younger entries survive.
///
/// Expected: only the 6-day-old entry and the new one remain
#[test]
fn prunes_fine_grained_older_than_seven_days() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_fine_grained(
            SnapshotFactory::new()
                .timestamp(now() - Duration::days(8))
                .total_members(1),
        )
        .with_fine_grained(
            SnapshotFactory::new()
                .timestamp(now() - Duration::days(7))
                .total_members(2),
        )
        .with_fine_grained(
            SnapshotFactory::new()
                .timestamp(now() - Duration::days(6))
                .total_members(3),
        )
        .build()?;
    let mut tracker = open_tracker(&test);

    tracker
        .record_snapshot_at(now(), DEFAULT_GUILD_ID, 4, 1)
        .unwrap();

    let totals: Vec<u64> = tracker
        .logs()
        .fine_grained
        .iter()
        .map(|s| s.total_members)
        .collect();
    assert_eq!(totals, vec![3, 4]);

    let cutoff = now() - Duration::days(7);
    let reloaded = SnapshotStore::new(test.data_file()).load();
    assert!(reloaded.fine_grained.iter().all(|s| s.timestamp > cutoff));

    Ok(())
}

/// Tests daily retention when a new date is inserted.
///
/// Expected: entries older than 30 days are dropped
#[test]
fn prunes_daily_older_than_thirty_days() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_daily(
            SnapshotFactory::new()
                .timestamp(now() - Duration::days(31))
                .total_members(1),
        )
        .with_daily(
            SnapshotFactory::new()
                .timestamp(now() - Duration::days(10))
                .total_members(2),
        )
        .build()?;
    let mut tracker = open_tracker(&test);

    tracker
        .record_snapshot_at(now(), DEFAULT_GUILD_ID, 3, 1)
        .unwrap();

    let totals: Vec<u64> = tracker
        .logs()
        .daily
        .iter()
        .map(|s| s.total_members)
        .collect();
    assert_eq!(totals, vec![2, 3]);

    Ok(())
}

/// Tests that the daily log is left untouched when today already has an entry.
///
/// Expected: daily log unchanged, fine-grained log still appended
#[test]
fn daily_log_untouched_when_date_already_recorded() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_daily(
            SnapshotFactory::new()
                .timestamp(now() - Duration::days(31))
                .total_members(1),
        )
        .with_daily(
            SnapshotFactory::new()
                .timestamp(now() - Duration::hours(2))
                .total_members(2),
        )
        .build()?;
    let mut tracker = open_tracker(&test);

    tracker
        .record_snapshot_at(now(), DEFAULT_GUILD_ID, 3, 1)
        .unwrap();

    assert_eq!(tracker.logs().daily.len(), 2);
    assert_eq!(tracker.logs().fine_grained.len(), 1);

    Ok(())
}

/// Tests that a persistence failure is surfaced without losing the snapshot.
///
/// Expected: Err from record_snapshot, snapshot still held in memory
#[test]
fn save_failure_is_returned_and_snapshot_kept() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let blocker = test.path().join("blocker");
    std::fs::write(&blocker, "")?;
    let mut tracker = GrowthTracker::open(SnapshotStore::new(blocker.join("growth_data.json")));

    let result = tracker.record_snapshot_at(now(), DEFAULT_GUILD_ID, 120, 30);

    assert!(result.is_err());
    assert_eq!(tracker.logs().fine_grained.len(), 1);
    assert_eq!(tracker.latest_snapshot().unwrap().total_members, 120);

    Ok(())
}

/// Tests recording against the wall clock.
///
/// Expected: Ok with the snapshot available as the latest snapshot
#[test]
fn record_snapshot_uses_current_time() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let mut tracker = open_tracker(&test);
    let before = Utc::now() - Duration::seconds(1);

    tracker.record_snapshot(DEFAULT_GUILD_ID, 50, 5).unwrap();

    let latest = tracker.latest_snapshot().unwrap();
    assert_eq!(latest.guild_id, DEFAULT_GUILD_ID);
    assert!(latest.timestamp >= before);

    Ok(())
}
