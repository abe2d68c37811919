use chrono::{Duration, NaiveDate};
use gmtdate::gmt_backed;

// A task keeps its deadline in GMT and serves a locally-converted, cached
// view of it through the generated accessors.
#[gmt_backed(property(base_name = completed, ty = NaiveDate))]
#[derive(Default)]
struct Task {
    #[local_date(with_time_property = all_day, setter_side_effects = self.dirty = true)]
    due_local_date: Option<NaiveDate>,
    all_day: bool,
    dirty: bool,
}

impl Task {
    // Stand-in conversions: a real host would do timezone math here.
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

fn main() {
    let mut task = Task::default();
    let due = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();

    task.set_due_local_date(Some(due));
    println!("due (all_day = false): {:?}", task.due_local_date());

    task.all_day = true;
    println!("due (all_day = true):  {:?}", task.due_local_date());
    println!("dirty after write:     {}", task.dirty);

    task.set_completed_local_date(Some(due));
    println!("completed:             {:?}", task.completed_local_date());
}
