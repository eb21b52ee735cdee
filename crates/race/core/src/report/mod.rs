//! Results table.
//!
//! [`ReportBuilder`] turns a [`RaceOutcome`] into ranked [`ReportRow`]s. Line
//! format:
//!
//! ```text
//! <total|[Status]> <id> [{<lap>, <speed>}, ...] {<penalty>, <speed>} <hits>/<shots>
//! ```
//!
//! Speeds are meters per second with three decimals; missing cells render as
//! `{,}`.

mod row;

pub use row::{ReportRow, RowStatus};

use row::{EMPTY_CELL, timed_cell};

use crate::clock::Clock;
use crate::config::RaceConfig;
use crate::state::{Competitor, CompetitorStatus, RaceOutcome};

/// Consumer of a finished report, e.g. the persisted results table.
pub trait ReportSink {
    type Error;

    fn write_report(&mut self, report: &Report) -> Result<(), Self::Error>;
}

/// Ranked results table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(ToString::to_string).collect()
    }

    pub fn write_to<S: ReportSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.write_report(self)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub struct ReportBuilder<'a> {
    config: &'a RaceConfig,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(config: &'a RaceConfig) -> Self {
        Self { config }
    }

    /// Builds and ranks one row per competitor.
    ///
    /// Finished rows come first by ascending total, then `NotFinished`, then
    /// `NotStarted`. Ties fall back to the competitor id.
    pub fn build(&self, outcome: &RaceOutcome) -> Report {
        let mut rows: Vec<ReportRow> = outcome.iter().map(|c| self.row(c)).collect();
        rows.sort_by_key(ReportRow::sort_key);
        Report { rows }
    }

    pub fn row(&self, competitor: &Competitor) -> ReportRow {
        let status = match competitor.status(self.config.laps) {
            CompetitorStatus::NotStarted => RowStatus::NotStarted,
            CompetitorStatus::NotFinished => RowStatus::NotFinished,
            CompetitorStatus::Racing | CompetitorStatus::Finished => RowStatus::Finished,
        };

        let offset = competitor.start_offset_millis();
        let delta_start = Clock::from_signed_millis(offset);

        let (total, total_str) = if status.is_finished() {
            let elapsed = competitor.laps_total() + competitor.penalty_time;
            let total = Clock::from_signed_millis(offset + elapsed.as_millis() as i64);
            (total, total.format())
        } else {
            (Clock::ZERO, String::new())
        };

        ReportRow {
            status,
            id: competitor.id,
            delta_start,
            total,
            total_str,
            lap_str: self.lap_cells(competitor, status, delta_start),
            pen_str: self.penalty_cell(competitor),
            hits_shots: format!("{}/{}", competitor.hits, competitor.scored_shots()),
        }
    }

    /// One cell per configured lap.
    ///
    /// For a `NotFinished` competitor the last recorded lap, and for a
    /// `NotStarted` competitor every recorded lap, shows the start delay
    /// instead of the recorded time.
    fn lap_cells(&self, competitor: &Competitor, status: RowStatus, delta_start: Clock) -> String {
        let recorded = competitor.lap_times.len();
        let cells: Vec<String> = (0..self.config.laps as usize)
            .map(|i| match competitor.lap_times.get(i) {
                Some(&lap) => {
                    let shown = match status {
                        RowStatus::NotStarted => delta_start,
                        RowStatus::NotFinished if i + 1 == recorded => delta_start,
                        _ => lap,
                    };
                    timed_cell(shown, speed(self.config.lap_len, shown))
                }
                None => EMPTY_CELL.to_owned(),
            })
            .collect();
        format!("[{}]", cells.join(", "))
    }

    fn penalty_cell(&self, competitor: &Competitor) -> String {
        if competitor.penalty_count > 0 && !competitor.penalty_time.is_zero() {
            let distance = self.config.penalty_len * competitor.penalty_count;
            timed_cell(
                competitor.penalty_time,
                speed(distance, competitor.penalty_time),
            )
        } else {
            EMPTY_CELL.to_owned()
        }
    }
}

fn speed(meters: u32, time: Clock) -> f64 {
    f64::from(meters) / time.as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{NullSink, reduce};
    use crate::event::{CompetitorId, EventKind, RaceEvent};

    fn clock(text: &str) -> Clock {
        Clock::parse(text).unwrap()
    }

    fn config() -> RaceConfig {
        RaceConfig::new(2, 1000, 100)
            .with_firing_lines(1)
            .with_start(clock("00:00:00.000"), clock("00:00:30.000"))
    }

    fn finisher() -> Competitor {
        Competitor {
            scheduled_at: clock("00:00:00.000"),
            actual_start: clock("00:00:10.000"),
            started: true,
            laps_done: 2,
            lap_times: vec![clock("00:00:30.000"), clock("00:00:40.000")],
            penalty_count: 1,
            penalty_time: clock("00:00:20.000"),
            hits: 4,
            ..Competitor::new(CompetitorId(1))
        }
    }

    fn late_starter() -> Competitor {
        Competitor {
            scheduled_at: clock("00:00:05.000"),
            actual_start: clock("00:00:12.000"),
            not_started: true,
            ..Competitor::new(CompetitorId(2))
        }
    }

    fn quitter() -> Competitor {
        Competitor {
            scheduled_at: clock("00:00:00.000"),
            actual_start: clock("00:00:10.000"),
            started: true,
            laps_done: 1,
            lap_times: vec![clock("00:00:25.000")],
            not_finished: true,
            hits: 2,
            ..Competitor::new(CompetitorId(3))
        }
    }

    #[test]
    fn renders_ranked_table() {
        let outcome: RaceOutcome = [late_starter(), quitter(), finisher()]
            .into_iter()
            .collect();
        let cfg = config();

        let report = ReportBuilder::new(&cfg).build(&outcome);

        assert_eq!(
            report.lines(),
            vec![
                "00:01:40.000 1 [{00:00:30.000, 33.333}, {00:00:40.000, 25.000}] {00:00:20.000, 5.000} 4/5",
                "[NotFinished] 3 [{00:00:10.000, 100.000}, {,}] {,} 2/2",
                "[NotStarted] 2 [{,}, {,}] {,} 0/0",
            ]
        );
    }

    #[test]
    fn reduced_laps_show_start_delay_for_statused_rows() {
        let cfg = RaceConfig::new(2, 100, 10)
            .with_start(Clock::ZERO, clock("00:00:10.000"));
        let event = |at: &str, kind: u32, id: u32| {
            RaceEvent::new(clock(at), EventKind::from_code(kind), CompetitorId(id))
        };
        let events = vec![
            // late start, then two laps
            event("00:00:00.000", 2, 1).with_extra("00:00:00.000"),
            event("00:00:15.000", 4, 1),
            event("00:01:00.000", 10, 1),
            event("00:02:00.000", 10, 1),
            // on time, abandons, lap still reported
            event("00:00:00.000", 2, 2).with_extra("00:00:00.000"),
            event("00:00:05.000", 4, 2),
            event("00:00:50.000", 11, 2).with_extra("broken ski"),
            event("00:01:00.000", 10, 2),
            // never shows up
            event("00:00:00.000", 2, 3).with_extra("00:01:00.000"),
        ];

        let outcome = reduce(&cfg, events, &mut NullSink).unwrap();
        let report = ReportBuilder::new(&cfg).build(&outcome);

        assert_eq!(
            report.lines(),
            vec![
                "[NotFinished] 2 [{00:00:05.000, 20.000}, {,}] {,} 0/0",
                "[NotStarted] 1 [{00:00:15.000, 6.667}, {00:00:15.000, 6.667}] {,} 0/0",
                "[NotStarted] 3 [{,}, {,}] {,} 0/0",
            ]
        );
    }

    #[test]
    fn finished_precedes_not_finished() {
        let cfg = config();
        let a = finisher();
        let b = Competitor {
            id: CompetitorId(0),
            ..quitter()
        };
        let outcome: RaceOutcome = [b, a].into_iter().collect();

        let report = ReportBuilder::new(&cfg).build(&outcome);

        assert_eq!(report.rows[0].total, clock("00:01:40.000"));
        assert_eq!(report.rows[0].id, CompetitorId(1));
        assert_eq!(report.rows[1].status, RowStatus::NotFinished);
    }

    #[test]
    fn finishers_rank_by_total_then_id() {
        let cfg = config();
        let slow = Competitor {
            lap_times: vec![clock("00:01:00.000"), clock("00:01:00.000")],
            ..finisher()
        };
        let tied = Competitor {
            id: CompetitorId(4),
            ..finisher()
        };
        let fast = Competitor {
            id: CompetitorId(9),
            penalty_count: 0,
            penalty_time: Clock::ZERO,
            ..finisher()
        };
        let outcome: RaceOutcome = [slow, tied, fast].into_iter().collect();

        let ids: Vec<u32> = ReportBuilder::new(&cfg)
            .build(&outcome)
            .rows
            .iter()
            .map(|row| row.id.0)
            .collect();

        assert_eq!(ids, vec![9, 4, 1]);
    }

    #[test]
    fn statused_ties_order_by_id() {
        let cfg = config();
        let outcome: RaceOutcome = [5, 3, 8]
            .into_iter()
            .map(|id| Competitor {
                id: CompetitorId(id),
                ..late_starter()
            })
            .collect();

        let ids: Vec<u32> = ReportBuilder::new(&cfg)
            .build(&outcome)
            .rows
            .iter()
            .map(|row| row.id.0)
            .collect();

        assert_eq!(ids, vec![3, 5, 8]);
    }

    #[test]
    fn penalty_cell_needs_entries_and_time() {
        let cfg = config();
        let entries_without_time = Competitor {
            penalty_count: 2,
            penalty_time: Clock::ZERO,
            ..finisher()
        };

        let row = ReportBuilder::new(&cfg).row(&entries_without_time);

        assert_eq!(row.pen_str, "{,}");
        assert_eq!(row.hits_shots, "4/6");
    }

    #[test]
    fn penalty_speed_scales_with_entries() {
        let cfg = config();
        let two_loops = Competitor {
            penalty_count: 2,
            penalty_time: clock("00:00:40.000"),
            ..finisher()
        };

        let row = ReportBuilder::new(&cfg).row(&two_loops);

        assert_eq!(row.pen_str, "{00:00:40.000, 5.000}");
    }

    #[test]
    fn on_course_competitor_is_ranked_with_finishers() {
        let cfg = config();
        let on_course = Competitor {
            laps_done: 1,
            lap_times: vec![clock("00:00:30.000")],
            penalty_count: 0,
            penalty_time: Clock::ZERO,
            ..finisher()
        };

        let row = ReportBuilder::new(&cfg).row(&on_course);

        assert_eq!(
            row.to_string(),
            "00:00:40.000 1 [{00:00:30.000, 33.333}, {,}] {,} 4/4"
        );
    }
}
