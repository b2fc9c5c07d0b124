use std::borrow::Cow;

use cause_tree::traits::{Causes, Diagnostic};
use cause_tree::{format_detailed, format_root_causes, format_simple};

/// Application error tree that never goes through `ErrorNode`.
enum PipelineError {
    Stage { name: &'static str, source: Box<PipelineError> },
    Parallel(Vec<PipelineError>),
    Io { path: &'static str, backtrace: Option<&'static str> },
}

impl Diagnostic for PipelineError {
    fn kind(&self) -> Cow<'_, str> {
        Cow::Borrowed(match self {
            PipelineError::Stage { .. } => "Stage",
            PipelineError::Parallel(_) => "Parallel",
            PipelineError::Io { .. } => "Io",
        })
    }

    fn message(&self) -> Cow<'_, str> {
        match self {
            PipelineError::Stage { name, .. } => Cow::Owned(format!("stage `{name}` failed")),
            PipelineError::Parallel(errors) => Cow::Owned(format!("{} branches failed", errors.len())),
            PipelineError::Io { path, .. } => Cow::Owned(format!("cannot read {path}")),
        }
    }

    fn trace(&self) -> Option<&str> {
        match self {
            PipelineError::Io { backtrace, .. } => *backtrace,
            _ => None,
        }
    }

    fn causes(&self) -> Causes<'_> {
        match self {
            PipelineError::Stage { source, .. } => Causes::Single(&**source),
            PipelineError::Parallel(errors) => Causes::aggregate(errors.iter().map(|e| e as &dyn Diagnostic)),
            PipelineError::Io { .. } => Causes::None,
        }
    }
}

fn sample() -> PipelineError {
    PipelineError::Stage {
        name: "ingest",
        source: Box::new(PipelineError::Parallel(vec![
            PipelineError::Io { path: "a.csv", backtrace: Some("at open(a.csv)\nat ingest()") },
            PipelineError::Io { path: "b.csv", backtrace: None },
        ])),
    }
}

#[test]
fn custom_diagnostic_renders_detailed() {
    assert_eq!(
        format_detailed(&sample()),
        "[Stage] stage `ingest` failed\
         \n\n   CAUSED BY: [Parallel] 2 branches failed\
         \n\n      CAUSE #1: [ROOT] [Io] cannot read a.csv\n      at open(a.csv)\n      at ingest()\
         \n\n      CAUSE #2: [ROOT] [Io] cannot read b.csv"
    );
}

#[test]
fn custom_diagnostic_renders_simple_and_root_causes() {
    let error = sample();

    assert_eq!(
        format_simple(&error),
        "[Stage] stage `ingest` failed\
         \n   CAUSED BY: [Parallel] 2 branches failed\
         \n      CAUSE #1: [ROOT] [Io] cannot read a.csv\
         \n      CAUSE #2: [ROOT] [Io] cannot read b.csv"
    );
    assert_eq!(format_root_causes(&error), "cannot read a.csv cannot read b.csv");
}

#[test]
fn trait_objects_and_boxes_are_diagnostics() {
    let boxed: Box<dyn Diagnostic> = Box::new(sample());

    assert_eq!(format_root_causes(&boxed), "cannot read a.csv cannot read b.csv");
    assert_eq!(format_root_causes(&*boxed), "cannot read a.csv cannot read b.csv");
}

#[test]
fn causes_helpers() {
    let error = sample();
    let PipelineError::Stage { source, .. } = &error else { unreachable!() };

    assert!(!error.causes().is_aggregate());
    assert_eq!(error.causes().len(), 1);

    let parallel = source.causes();
    assert!(parallel.is_aggregate());
    assert!(!parallel.is_terminal());
    assert_eq!(parallel.len(), 2);

    assert!(Causes::None.is_terminal());
    assert!(Causes::aggregate(std::iter::empty::<&dyn Diagnostic>()).is_terminal());
    assert!(Causes::aggregate(std::iter::empty::<&dyn Diagnostic>()).is_empty());
    assert!(!parallel.is_root_cause());
    assert!(Causes::None.is_root_cause());
    assert!(!error.causes().is_root_cause());
}

#[test]
fn loader_causes_are_aggregate_and_root() {
    let error = sample();
    let PipelineError::Stage { source, .. } = &error else { unreachable!() };
    let PipelineError::Parallel(members) = &**source else { unreachable!() };

    let loader = Causes::loader(members.iter().map(|e| e as &dyn Diagnostic));
    assert!(loader.is_aggregate());
    assert!(loader.is_root_cause());
    assert!(!loader.is_terminal());
    assert_eq!(loader.len(), 2);
    assert!(format!("{loader:?}").starts_with("Loader("));
}
