use super::*;

use std::time::{Duration, Instant};

fn wait_for(runner: &mut TaskRunner) -> AppEvent {
    let start = Instant::now();
    loop {
        if let Some(ev) = runner.poll() {
            return ev;
        }
        assert!(
            start.elapsed() < Duration::from_secs(10),
            "task did not complete"
        );
        thread::sleep(Duration::from_millis(10));
    }
}

fn missing_gh() -> (tempfile::TempDir, IssueTitleFetcher) {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = IssueTitleFetcher::with_program(dir.path().join("gh"));
    (dir, fetcher)
}

#[test]
fn completion_is_delivered_as_event() {
    let (_dir, fetcher) = missing_gh();
    let mut runner = TaskRunner::with_fetcher(fetcher);
    assert!(runner.poll().is_none());

    runner.dispatch(Command::FetchTitle("o/r#1".to_string()));
    assert!(runner.busy());

    match wait_for(&mut runner) {
        AppEvent::TitleFetched(Err(msg)) => assert!(msg.contains("command not found"), "{}", msg),
        other => panic!("unexpected event {:?}", other),
    }
    assert!(!runner.busy());
}

#[test]
fn second_command_is_dropped_while_busy() {
    let (_dir, fetcher) = missing_gh();
    let mut runner = TaskRunner::with_fetcher(fetcher);
    runner.dispatch(Command::FetchTitle("1".to_string()));
    runner.dispatch(Command::Discover("http://127.0.0.1:9/formResponse".to_string()));

    assert!(matches!(wait_for(&mut runner), AppEvent::TitleFetched(_)));
    assert!(!runner.busy());
    assert!(runner.poll().is_none());
}

#[test]
fn quit_is_not_dispatched() {
    let mut runner = TaskRunner::default();
    runner.dispatch(Command::Quit);
    assert!(!runner.busy());
}
