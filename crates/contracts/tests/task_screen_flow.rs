use chrono::{NaiveDate, NaiveDateTime};
use contracts::system::tasks::filter::filter_tasks;
use contracts::system::tasks::{
    FormField, SaveOutcome, ScreenConfig, StatusFilter, Task, TaskFilter, TaskId, TaskScreen,
    TaskStatus,
};

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(8, 15, 0))
        .expect("valid timestamp")
}

fn task(id: usize, handler: &str, date: &str, status: TaskStatus) -> Task {
    Task {
        id: TaskId::new(id.to_string()),
        job_handler: handler.to_string(),
        description: format!("task {id}"),
        cron: "0 0/5 * * * ?".to_string(),
        create_time: format!("{date} 10:00:00"),
        status,
    }
}

/// 25 tasks spread over Dec 2023 - Feb 2024 with mixed handlers and states
fn fixture() -> Vec<Task> {
    let handlers = ["dataSyncJob", "dailyBackupJob", "emailNotifyJob", "cleanTempJob", "reportGenJob"];
    let dates = ["2023-12-30", "2024-01-01", "2024-01-15", "2024-01-31", "2024-02-01"];
    (0..25)
        .map(|i| {
            let status = if i % 2 == 0 { TaskStatus::Running } else { TaskStatus::Stopped };
            task(i + 1, handlers[i % 5], dates[(i / 5) % 5], status)
        })
        .collect()
}

fn ids(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|t| t.id.to_string()).collect()
}

#[test]
fn twenty_five_tasks_paginate_into_three_pages() {
    let mut screen = TaskScreen::new(ScreenConfig::default(), fixture());

    let first_page = ids(&screen.visible_tasks());
    let expected: Vec<String> = (1..=10).map(|i| i.to_string()).collect();
    assert_eq!(first_page, expected);
    assert_eq!(screen.total_pages(), 3);

    assert!(screen.go_to_page(3));
    assert!(!screen.go_to_page(4));
    assert_eq!(screen.page_state().current_page, 3);
    assert_eq!(screen.visible_tasks().len(), 5);
}

#[test]
fn date_range_query_returns_january_only() {
    let mut screen = TaskScreen::new(ScreenConfig::default(), fixture());
    screen.set_page_size(50);
    {
        let draft = screen.draft_filter_mut();
        draft.date_start = "2024-01-01".to_string();
        draft.date_end = "2024-01-31".to_string();
    }
    screen.submit_query();

    let visible = screen.visible_tasks();
    assert_eq!(visible.len(), 15);
    assert!(visible
        .iter()
        .all(|t| ("2024-01-01"..="2024-01-31").contains(&t.create_date())));
}

#[test]
fn filtered_pages_hold_exactly_the_matching_records_in_order() {
    let tasks = fixture();
    let filters = [
        TaskFilter::default(),
        TaskFilter {
            job_handler: "JOB".to_string(),
            status: StatusFilter::Running,
            ..Default::default()
        },
        TaskFilter {
            job_handler: "backup".to_string(),
            date_start: "2024-01-15".to_string(),
            ..Default::default()
        },
        TaskFilter {
            date_end: "2023-12-31".to_string(),
            status: StatusFilter::Stopped,
            ..Default::default()
        },
    ];

    for filter in filters {
        let mut screen = TaskScreen::new(ScreenConfig::default(), tasks.clone());
        screen.set_page_size(5);
        *screen.draft_filter_mut() = filter.clone();
        screen.submit_query();

        let mut collected = Vec::new();
        for page in 1..=screen.total_pages().max(1) {
            screen.go_to_page(page);
            collected.extend(ids(&screen.visible_tasks()));
        }

        let expected: Vec<String> = tasks
            .iter()
            .filter(|t| filter.matches(t))
            .map(|t| t.id.to_string())
            .collect();
        assert_eq!(collected, expected, "filter {filter:?}");
        assert_eq!(ids(&filter_tasks(&tasks, &filter)), expected);
    }
}

#[test]
fn empty_result_has_zero_pages_and_page_one() {
    let mut screen = TaskScreen::new(ScreenConfig::default(), fixture());
    screen.draft_filter_mut().job_handler = "no-such-handler".to_string();
    screen.submit_query();

    assert_eq!(screen.total_pages(), 0);
    assert!(screen.visible_tasks().is_empty());
    assert_eq!(screen.page_state().current_page, 1);
    assert!(!screen.go_to_page(1));
    let summary = screen.page_summary();
    assert_eq!((summary.first, summary.last, summary.total), (0, 0, 0));
}

#[test]
fn create_with_every_field_invalid_changes_nothing() {
    let mut screen = TaskScreen::new(ScreenConfig::default(), fixture());
    screen.open_create();
    screen.set_draft_field(FormField::Cron, "not-a-cron".to_string());

    let err = screen.save(at(2024, 3, 1)).expect_err("invalid draft");
    let errors = err.field_errors().expect("validation errors");
    assert!(errors.contains_key(&FormField::JobHandler));
    assert!(errors.contains_key(&FormField::Description));
    assert!(errors.contains_key(&FormField::Cron));
    assert_eq!(screen.store().tasks(), fixture().as_slice());
}

#[test]
fn create_accepts_quartz_style_cron_and_prepends() {
    let mut screen = TaskScreen::new(ScreenConfig::default(), fixture());
    screen.open_create();
    screen.set_draft_field(FormField::JobHandler, "reportGenJob".to_string());
    screen.set_draft_field(FormField::Description, "nightly report".to_string());
    screen.set_draft_field(FormField::Cron, "0 0 12 * * ?".to_string());

    let outcome = screen.save(at(2024, 3, 1)).expect("valid draft");
    let SaveOutcome::Created(id) = outcome else {
        panic!("expected creation, got {outcome:?}");
    };
    assert_eq!(id.as_str(), "26");
    let created = &screen.store().tasks()[0];
    assert_eq!(created.id, id);
    assert_eq!(created.status, TaskStatus::Stopped);
    assert_eq!(created.create_time, "2024-03-01 08:15:00");
    assert_eq!(screen.store().len(), 26);
}

#[test]
fn update_never_touches_id_or_create_time() {
    let mut screen = TaskScreen::new(ScreenConfig::default(), fixture());
    let original = screen.store().tasks()[7].clone();

    screen.open_edit(&original.id);
    screen.set_draft_field(FormField::JobHandler, "cleanTempJob".to_string());
    screen.set_draft_field(FormField::Cron, "@weekly".to_string());
    screen.save(at(2030, 1, 1)).expect("valid draft");

    let updated = screen.store().get(&original.id).expect("still stored");
    assert_eq!(updated.create_time, original.create_time);
    assert_eq!(updated.job_handler, "cleanTempJob");
    assert_eq!(screen.store().tasks()[7].id, original.id);
}

#[test]
fn toggling_twice_restores_run_state() {
    let mut screen = TaskScreen::new(ScreenConfig::default(), fixture());
    let id = TaskId::new("2");
    let before = screen.store().get(&id).map(|t| t.status);
    screen.toggle_status(&id);
    screen.toggle_status(&id);
    assert_eq!(screen.store().get(&id).map(|t| t.status), before);
    assert_eq!(screen.notifications().len(), 2);
}

#[test]
fn confirmed_delete_of_unknown_id_is_silent() {
    let mut screen = TaskScreen::new(ScreenConfig::default(), fixture());
    screen.request_delete(TaskId::new("999"));
    assert!(screen.confirm_delete().is_none());
    assert_eq!(screen.store().len(), 25);
    assert!(screen.notifications().is_empty());
    assert!(screen.pending_delete().is_none());
}

#[test]
fn current_page_stays_in_bounds_across_mutations() {
    let mut screen = TaskScreen::new(ScreenConfig::default(), fixture());
    screen.go_to_page(3);

    let check = |screen: &TaskScreen| {
        let page = screen.page_state().current_page;
        assert!(page >= 1 && page <= screen.total_pages().max(1));
    };

    while let Some(id) = screen.store().tasks().first().map(|t| t.id.clone()) {
        screen.request_delete(id);
        screen.confirm_delete();
        check(&screen);
    }
    assert_eq!(screen.page_state().current_page, 1);

    screen.set_page_size(5);
    check(&screen);
}
