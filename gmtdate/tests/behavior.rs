//! Runtime behavior of the generated accessors: caching policies, legacy
//! migration, round-trips under lossy conversions, and setter side effects.

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Datelike, Duration, NaiveDate};
use gmtdate::gmt_backed;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Static policy: the cache survives a conversion whose output changes.
// ---------------------------------------------------------------------------

static REMINDER_SHIFT: AtomicI64 = AtomicI64::new(1);

#[gmt_backed]
#[derive(Default)]
struct Reminder {
    #[local_date]
    due_local_date: Option<NaiveDate>,
}

impl Reminder {
    fn gmt_date(local: NaiveDate, _with_time: bool, _is_due_date: bool) -> NaiveDate {
        local
    }
    // Deliberately not the inverse: simulates a conversion whose output can
    // drift between calls.
    fn local_date(gmt: NaiveDate, _with_time: bool, _is_due_date: bool) -> NaiveDate {
        gmt + Duration::days(REMINDER_SHIFT.load(Ordering::SeqCst))
    }
}

#[test]
fn static_policy_serves_the_cache_until_the_next_write() {
    REMINDER_SHIFT.store(1, Ordering::SeqCst);
    let mut r = Reminder::default();
    let d0 = day(2026, 3, 10);

    r.set_due_local_date(Some(d0));
    assert_eq!(r.due_local_date(), Some(d0 + Duration::days(1)));

    // The conversion output changes, the cached value must not.
    REMINDER_SHIFT.store(5, Ordering::SeqCst);
    assert_eq!(r.due_local_date(), Some(d0 + Duration::days(1)));

    // Only a write invalidates.
    r.set_due_local_date(Some(d0));
    assert_eq!(r.due_local_date(), Some(d0 + Duration::days(5)));
}

// Own struct and shift so the parallel test runner cannot race this state
// with the other Reminder tests.
static ALARM_SHIFT: AtomicI64 = AtomicI64::new(2);

#[gmt_backed]
#[derive(Default)]
struct Alarm {
    #[local_date]
    ring_local_date: Option<NaiveDate>,
}

impl Alarm {
    fn gmt_date(local: NaiveDate, _with_time: bool, _is_due_date: bool) -> NaiveDate {
        local
    }
    fn local_date(gmt: NaiveDate, _with_time: bool, _is_due_date: bool) -> NaiveDate {
        gmt + Duration::days(ALARM_SHIFT.load(Ordering::SeqCst))
    }
}

#[test]
fn static_policy_fills_an_empty_cache_once() {
    let mut a = Alarm::default();
    let d0 = day(2026, 3, 10);

    // GMT populated, cache unset: the first read computes, later reads serve
    // the memo.
    a.ring_gmt_date = Some(d0);
    assert_eq!(a.ring_local_date(), Some(d0 + Duration::days(2)));
    ALARM_SHIFT.store(7, Ordering::SeqCst);
    assert_eq!(a.ring_local_date(), Some(d0 + Duration::days(2)));
}

#[test]
fn unset_property_reads_none() {
    let mut r = Reminder::default();
    assert_eq!(r.due_local_date(), None);
}

// ---------------------------------------------------------------------------
// Dynamic policy: every read reflects the flag's current value.
// ---------------------------------------------------------------------------

#[gmt_backed]
#[derive(Default)]
struct Event {
    #[local_date(with_time_property = all_day)]
    start_local_date: Option<NaiveDate>,
    all_day: bool,
}

impl Event {
    fn gmt_date(local: NaiveDate, with_time: bool, _is_due_date: bool) -> NaiveDate {
        if with_time {
            local
        } else {
            local + Duration::days(1)
        }
    }
    fn local_date(gmt: NaiveDate, with_time: bool, _is_due_date: bool) -> NaiveDate {
        if with_time {
            gmt
        } else {
            gmt - Duration::days(1)
        }
    }
}

#[test]
fn dynamic_policy_recomputes_from_the_current_flag() {
    let mut e = Event::default();
    let d0 = day(2026, 6, 1);

    e.set_start_local_date(Some(d0));
    assert_eq!(e.start_local_date(), Some(d0));

    // Reads bracketing the flag change see different results, each computed
    // with the flag's value at the time of that read.
    e.all_day = true;
    assert_eq!(e.start_local_date(), Some(d0 + Duration::days(1)));
    e.all_day = false;
    assert_eq!(e.start_local_date(), Some(d0));
}

#[test]
fn dynamic_policy_clears_cache_when_gmt_unset() {
    let mut e = Event::default();
    e._start_local_date = Some(day(2026, 6, 1));
    assert_eq!(e.start_local_date(), None);
    assert!(e._start_local_date.is_none());
}

// ---------------------------------------------------------------------------
// Lossy conversions: set-then-get is idempotent under the conversions, not
// necessarily equal to the input. `is_due_date = false` must reach both.
// ---------------------------------------------------------------------------

#[gmt_backed]
#[derive(Default)]
struct Deadline {
    #[local_date(is_due_date = false)]
    finish_local_date: Option<NaiveDate>,
}

impl Deadline {
    fn gmt_date(local: NaiveDate, _with_time: bool, is_due_date: bool) -> NaiveDate {
        assert!(!is_due_date);
        // lossy: everything lands on the first of the month
        local.with_day(1).unwrap()
    }
    fn local_date(gmt: NaiveDate, _with_time: bool, is_due_date: bool) -> NaiveDate {
        assert!(!is_due_date);
        gmt + Duration::days(2)
    }
}

#[test]
fn set_then_get_reflects_the_lossy_gmt_value() {
    let mut dl = Deadline::default();
    let v = day(2026, 5, 20);

    dl.set_finish_local_date(Some(v));
    let expected = Deadline::local_date(Deadline::gmt_date(v, false, false), false, false);
    assert_eq!(dl.finish_local_date(), Some(expected));
    assert_ne!(dl.finish_local_date(), Some(v));

    dl.set_finish_local_date(None);
    assert_eq!(dl.finish_local_date(), None);
}

// ---------------------------------------------------------------------------
// Legacy migration and setter side effects.
// ---------------------------------------------------------------------------

#[gmt_backed]
#[derive(Default)]
struct Todo {
    #[local_date(legacy_property_name = legacy_due_date, setter_side_effects = self.writes += 1)]
    due_local_date: Option<NaiveDate>,
    writes: u32,
}

impl Todo {
    fn gmt_date(local: NaiveDate, _with_time: bool, _is_due_date: bool) -> NaiveDate {
        local
    }
    fn local_date(gmt: NaiveDate, _with_time: bool, _is_due_date: bool) -> NaiveDate {
        gmt
    }
}

#[test]
fn legacy_value_migrates_exactly_once() {
    let mut t = Todo::default();
    let d0 = day(2025, 12, 24);
    t.legacy_due_date = Some(d0);

    // First read routes the legacy value through the setter (one write) and
    // clears the legacy field.
    assert_eq!(t.due_local_date(), Some(d0));
    assert!(t.legacy_due_date.is_none());
    assert!(t.due_gmt_date.is_some());
    assert_eq!(t.writes, 1);

    // Second read: nothing left to migrate, no further writes.
    assert_eq!(t.due_local_date(), Some(d0));
    assert_eq!(t.writes, 1);
}

#[test]
fn side_effects_run_on_every_write() {
    let mut t = Todo::default();
    t.set_due_local_date(Some(day(2026, 1, 2)));
    t.set_due_local_date(None);
    assert_eq!(t.writes, 2);
}

#[gmt_backed]
#[derive(Default)]
struct Note {
    #[local_date(setter_side_effects = self.observed = self._remind_local_date)]
    remind_local_date: Option<NaiveDate>,
    observed: Option<NaiveDate>,
}

impl Note {
    fn gmt_date(local: NaiveDate, _with_time: bool, _is_due_date: bool) -> NaiveDate {
        local
    }
    fn local_date(gmt: NaiveDate, _with_time: bool, _is_due_date: bool) -> NaiveDate {
        gmt + Duration::days(1)
    }
}

#[test]
fn side_effects_observe_the_refreshed_cache() {
    let mut n = Note::default();
    let d0 = day(2026, 7, 4);
    n.set_remind_local_date(Some(d0));
    assert_eq!(n.observed, Some(d0 + Duration::days(1)));
    let current = n.remind_local_date();
    assert_eq!(n.observed, current);
}

// ---------------------------------------------------------------------------
// Declaration-level shape and the forwarding alias accessor.
// ---------------------------------------------------------------------------

#[gmt_backed(property(base_name = start, ty = NaiveDate, include_legacy_computed_property = true))]
#[derive(Default)]
struct Trip {}

impl Trip {
    fn gmt_date(local: NaiveDate, _with_time: bool, _is_due_date: bool) -> NaiveDate {
        local
    }
    fn local_date(gmt: NaiveDate, _with_time: bool, _is_due_date: bool) -> NaiveDate {
        gmt
    }
}

#[test]
fn alias_accessor_forwards_both_ways() {
    let mut trip = Trip::default();
    let d0 = day(2026, 8, 24);
    let d1 = day(2026, 9, 1);

    trip.set_start_date(Some(d0));
    assert_eq!(trip.start_local_date(), Some(d0));

    trip.set_start_local_date(Some(d1));
    assert_eq!(trip.start_date(), Some(d1));
}

// ---------------------------------------------------------------------------
// Name derivation on real fields: `_local` and bare identifiers.
// ---------------------------------------------------------------------------

#[gmt_backed]
#[derive(Default)]
struct Shipment {
    #[local_date]
    ship_local: Option<NaiveDate>,
    #[local_date]
    eta: Option<NaiveDate>,
}

impl Shipment {
    fn gmt_date(local: NaiveDate, _with_time: bool, _is_due_date: bool) -> NaiveDate {
        local
    }
    fn local_date(gmt: NaiveDate, _with_time: bool, _is_due_date: bool) -> NaiveDate {
        gmt
    }
}

#[test]
fn derived_accessor_names_follow_the_rule_table() {
    let mut s = Shipment::default();
    let d0 = day(2026, 2, 2);
    s.set_ship_local_date(Some(d0));
    assert_eq!(s.ship_local_date(), Some(d0));
    s.set_eta_date(Some(d0));
    assert_eq!(s.eta_date(), Some(d0));
}
