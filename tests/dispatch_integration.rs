// SPDX-License-Identifier: MPL-2.0
//! Driving a session from worker threads.

use iced::Size;
use iced_hud::{
    Config, DispatchError, Error, Hud, LoadingRequest, Priority, StaticEnvironment, StatusRequest,
    TaskId,
};
use std::thread;
use std::time::{Duration, Instant};

fn hud() -> Hud {
    let config = Config {
        animated: false,
        ..Config::default()
    };
    Hud::new(config, StaticEnvironment::new(Size::new(390.0, 844.0)))
}

/// Ticks `hud` until every worker has finished, then joins them.
fn pump<T>(hud: &mut Hud, workers: Vec<thread::JoinHandle<T>>) -> Vec<T> {
    let deadline = Instant::now() + Duration::from_secs(10);
    while !workers.iter().all(thread::JoinHandle::is_finished) {
        assert!(Instant::now() < deadline, "workers did not finish");
        hud.tick(Instant::now());
        thread::yield_now();
    }
    workers
        .into_iter()
        .map(|worker| worker.join().expect("worker panicked"))
        .collect()
}

#[test]
fn calls_from_workers_complete_synchronously() {
    let mut hud = hud();
    let dispatcher = hud.dispatcher();

    let worker = thread::spawn(move || {
        let id = dispatcher.show_loading(LoadingRequest::new(0.25))?;
        // The state change is visible as soon as the call returns.
        let current = dispatcher.run_sync(|hud| hud.current().map(|task| task.id()))?;
        assert_eq!(current, Some(id));
        dispatcher.hide(Some(id))?;
        Ok::<TaskId, Error>(id)
    });

    let results = pump(&mut hud, vec![worker]);
    assert!(results[0].is_ok());
    assert!(hud.is_quiescent());
}

#[test]
fn sequence_requests_from_several_workers_are_all_kept() {
    let mut hud = hud();
    let workers = (0..4)
        .map(|_| {
            let dispatcher = hud.dispatcher();
            thread::spawn(move || {
                dispatcher.show(
                    StatusRequest::default()
                        .priority(Priority::Sequence)
                        .duration(Duration::ZERO),
                )
            })
        })
        .collect();

    let ids: Vec<TaskId> = pump(&mut hud, workers)
        .into_iter()
        .map(|result| result.expect("shown"))
        .collect();

    assert_eq!(ids.len(), 4);
    assert!(hud.current().is_some());
    assert_eq!(hud.queued().count(), 3);
}

#[test]
fn ui_thread_calls_are_rejected() {
    let mut hud = hud();
    let dispatcher = hud.dispatcher();
    assert_eq!(
        dispatcher.hide(None),
        Err(Error::Dispatch(DispatchError::OnUiThread))
    );
}
