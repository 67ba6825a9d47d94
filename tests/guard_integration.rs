//! Integration tests exercising guards the way calling code uses them

use std::error::Error;

use breakwater::prelude::*;

/// A toy job queue with argument and state preconditions on its surface.
struct JobQueue {
    running: bool,
    jobs: Vec<String>,
}

impl JobQueue {
    fn new() -> Self {
        JobQueue {
            running: false,
            jobs: Vec::new(),
        }
    }

    fn start(&mut self) -> Result<(), OperationError> {
        operation::forbids(self.running, Some("queue already started"))?;
        self.running = true;
        Ok(())
    }

    fn enqueue(&mut self, name: Option<&str>) -> Result<(), ArgumentError> {
        let name = argument::not_null_or_empty(name, Some("name"), None)?;
        self.jobs.push(name.to_string());
        Ok(())
    }

    fn enqueue_batch<I>(&mut self, names: Option<I>) -> Result<usize, ArgumentError>
    where
        I: IntoIterator<Item = String>,
    {
        // Read-once source: keep the snapshot, not the iterator.
        let names = argument::not_null_or_empty_iter(names, Some("names"), None)?;
        let count = names.len();
        self.jobs.extend(names);
        Ok(count)
    }

    fn drain(&mut self) -> Result<Vec<String>, OperationError> {
        operation::requires(self.running, Some("queue not started"))?;
        Ok(std::mem::take(&mut self.jobs))
    }
}

#[test]
fn argument_guards_reject_at_the_boundary() {
    let mut queue = JobQueue::new();

    let err = queue.enqueue(None).unwrap_err();
    assert_eq!(err.kind(), ArgumentErrorKind::Missing);
    assert_eq!(err.parameter(), Some("name"));

    let err = queue.enqueue(Some("")).unwrap_err();
    assert_eq!(err.kind(), ArgumentErrorKind::Empty);
    assert_eq!(err.parameter(), Some("name"));

    assert!(queue.enqueue(Some("build")).is_ok());
    assert_eq!(queue.jobs, vec!["build"]);
}

#[test]
fn batch_enqueue_materializes_lazy_sources_once() {
    let mut queue = JobQueue::new();

    let lazy = (0..3).map(|i| format!("job-{}", i));
    assert_eq!(queue.enqueue_batch(Some(lazy)).unwrap(), 3);
    assert_eq!(queue.jobs, vec!["job-0", "job-1", "job-2"]);

    let err = queue
        .enqueue_batch(Some(Vec::<String>::new()))
        .unwrap_err();
    assert_eq!(err.kind(), ArgumentErrorKind::Empty);
    assert_eq!(err.parameter(), Some("names"));
}

#[test]
fn state_guards_gate_the_operation_not_an_argument() {
    let mut queue = JobQueue::new();

    let err = queue.drain().unwrap_err();
    assert_eq!(err.message(), Some("queue not started"));

    queue.start().unwrap();
    let err = queue.start().unwrap_err();
    assert_eq!(err.message(), Some("queue already started"));

    queue.enqueue(Some("deploy")).unwrap();
    assert_eq!(queue.drain().unwrap(), vec!["deploy"]);
    assert!(queue.drain().unwrap().is_empty());
}

#[test]
fn failures_work_as_plain_error_values() {
    fn fallible() -> Result<(), Box<dyn Error>> {
        argument::requires(false, Some("rejected"), Some("input"))?;
        Ok(())
    }

    let err = fallible().unwrap_err();
    assert_eq!(err.to_string(), "rejected (parameter 'input')");
}

#[test]
fn root_causes_chain_through_source() {
    fn parse_port(raw: &str) -> Result<u16, ArgumentError> {
        raw.parse::<u16>()
            .map_err(|e| ArgumentError::invalid(Some("port"), Some("not a port number")).with_source(e))
    }

    let err = parse_port("harbor").unwrap_err();
    assert_eq!(err.to_string(), "not a port number (parameter 'port')");
    assert!(err.source().is_some());
}
