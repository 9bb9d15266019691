// Sample data
// Seed week shown when the app starts; items live in memory only

use chrono::{Duration, NaiveDate};

use crate::models::block::{BlockState, Commitment, Defense, Persistence, Provenance, Risk};
use crate::models::item::{ItemKind, TimeRangedItem};
use crate::utils::time::week_dates;

const BLUE: &str = "#0f62fe";
const PURPLE: &str = "#8a3ffc";
const TEAL: &str = "#009d9a";
const GREEN: &str = "#24a148";
const RED: &str = "#fa4d56";
const ORANGE: &str = "#ff832b";
const GRAY: &str = "#8d8d8d";

struct Seed {
    id: &'static str,
    title: &'static str,
    day: i64,
    start: f64,
    duration: f64,
    color: &'static str,
    kind: ItemKind,
    fixed: bool,
    completed: bool,
    all_day: bool,
}

const fn seed(
    id: &'static str,
    title: &'static str,
    day: i64,
    start: f64,
    duration: f64,
    color: &'static str,
    fixed: bool,
) -> Seed {
    Seed {
        id,
        title,
        day,
        start,
        duration,
        color,
        kind: if fixed { ItemKind::Meeting } else { ItemKind::Task },
        fixed,
        completed: false,
        all_day: false,
    }
}

const fn done(mut s: Seed) -> Seed {
    s.completed = true;
    s
}

const fn all_day(mut s: Seed) -> Seed {
    s.all_day = true;
    s.kind = ItemKind::Event;
    s
}

// `day` is an offset from the first day of a Sunday-first week
const SEEDS: &[Seed] = &[
    all_day(seed("1", "Morning Routine", 0, 0.0, 0.0, GRAY, true)),
    all_day(seed("2", "Paris Vlog Revision Period", 2, 0.0, 0.0, BLUE, true)),
    seed("3", "Holiday Open House", 0, 10.0, 2.0, ORANGE, true),
    seed("4", "Add Deel to Site", 1, 10.0, 0.5, BLUE, false),
    seed("5", "Webhook Integration", 1, 10.5, 1.0, BLUE, true),
    seed("6", "Fix Mobile Sticky Links", 1, 11.5, 0.5, RED, false),
    seed("7", "Hackathon Demo Day", 1, 12.0, 2.0, PURPLE, true),
    seed("8", "Add Screenshots", 2, 10.0, 1.0, BLUE, false),
    seed("9", "DoTF Meeting", 4, 10.0, 0.5, BLUE, true),
    seed("10", "Triage Emails", 2, 11.5, 1.0, GREEN, false),
    seed("11", "Blocking Time", 1, 13.0, 1.5, TEAL, true),
    seed("12", "Confirming Meeting", 1, 14.5, 0.5, BLUE, false),
    seed("13", "API Planning", 1, 15.0, 0.5, RED, true),
    seed("14", "Superhuman Setup", 2, 14.0, 0.5, BLUE, false),
    seed("15", "Create Documentation", 2, 14.5, 0.75, GREEN, true),
    seed("16", "Re-Add Features", 5, 10.0, 0.5, BLUE, false),
    seed("17", "Add Screenshots Part 2", 2, 16.0, 1.0, BLUE, false),
    seed("18", "Search Console Review", 1, 17.5, 0.5, GREEN, true),
    done(seed("19", "Morning Standup", 1, 9.0, 0.25, BLUE, false)),
    done(seed("20", "Review PRs", 1, 9.25, 0.5, PURPLE, false)),
    done(seed("21", "Coffee Break", 1, 11.0, 0.25, GRAY, false)),
    done(seed("22", "Lunch", 1, 12.0, 0.5, GRAY, true)),
    done(seed("23", "Email Responses", 0, 13.0, 0.75, BLUE, false)),
    done(seed("24", "Design Review", 2, 9.0, 1.0, PURPLE, true)),
    done(seed("25", "Code Cleanup", 2, 13.0, 0.5, GREEN, false)),
];

fn block_for(seed: &Seed) -> BlockState {
    match seed.id {
        "4" => BlockState {
            commitment: Commitment::AiDraft,
            provenance: Some(Provenance::Ai),
            ..BlockState::default()
        },
        "6" => BlockState {
            risk: Risk::Breach,
            ..BlockState::default()
        },
        "10" => BlockState {
            commitment: Commitment::Tentative,
            provenance: Some(Provenance::Email),
            ..BlockState::default()
        },
        "11" => BlockState {
            defense: Defense::Defended,
            ..BlockState::default()
        },
        "12" => BlockState {
            commitment: Commitment::Changed,
            persistence: Persistence::SyncPending,
            ..BlockState::default()
        },
        "14" => BlockState {
            persistence: Persistence::SyncError,
            ..BlockState::default()
        },
        "17" => BlockState {
            risk: Risk::Watch,
            provenance: Some(Provenance::Slack),
            ..BlockState::default()
        },
        _ if seed.completed => BlockState::with_commitment(Commitment::Completed),
        _ => BlockState::default(),
    }
}

/// Items for the week containing `anchor`
pub fn sample_week(anchor: NaiveDate) -> Vec<TimeRangedItem> {
    let week_start = week_dates(anchor, 0)[0];

    SEEDS
        .iter()
        .map(|seed| TimeRangedItem {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            date: week_start + Duration::days(seed.day),
            start_hour: seed.start,
            duration: seed.duration,
            color: Some(seed.color.to_string()),
            kind: seed.kind,
            calendar: if seed.color == GRAY || seed.color == GREEN {
                "personal".to_string()
            } else {
                "work".to_string()
            },
            is_fixed: seed.fixed,
            completed: seed.completed,
            all_day: seed.all_day,
            block: block_for(seed),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_are_unique() {
        let anchor = NaiveDate::from_ymd_opt(2023, 12, 18).unwrap();
        let items = sample_week(anchor);
        let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_sample_lands_in_anchor_week() {
        let anchor = NaiveDate::from_ymd_opt(2023, 12, 18).unwrap();
        let week = week_dates(anchor, 0);
        assert!(sample_week(anchor)
            .iter()
            .all(|item| week.contains(&item.date)));
    }
}
