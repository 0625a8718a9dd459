//! Shared shell module for standalone binary targets.
//!
//! Provides logger setup and the demo scenario the `dynscene-demo` binary
//! prints: a few bags built from constant properties, watched through their
//! `property_changed` events while they are edited, cloned and merged.

use std::cell::RefCell;
use std::fmt;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;

use crate::config::LogConfig;
use crate::core::event::ListenerId;
use crate::entities::{
    AttributeBag, BagSnapshot, PolygonGraphics, PolylineGraphics, PropertyChanged, PropertyHandle,
};

/// One degree in radians, the usual polygon sampling granularity
const DEFAULT_GRANULARITY: f64 = std::f64::consts::PI / 180.0;

/// Initialize logging for standalone binaries
///
/// Logs to stderr, or to `log_file` when given.
pub fn init_logger(config: &LogConfig, log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&config.filter).format_timestamp_millis();

    if let Some(path) = log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create log file: {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder
        .try_init()
        .context("Logger already initialized")?;
    Ok(())
}

/// A committed slot change as seen by a listener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    pub bag: String,
    pub property: &'static str,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

impl ChangeRecord {
    fn new(bag: &str, args: &PropertyChanged) -> Self {
        Self {
            bag: bag.to_string(),
            property: args.property_name,
            old_value: args.old_value.as_ref().map(|h| format!("{:?}", h)),
            new_value: args.new_value.as_ref().map(|h| format!("{:?}", h)),
        }
    }
}

/// Collects changes from every bag it watches, in raise order.
#[derive(Debug, Clone, Default)]
pub struct ChangeLog {
    records: Rc<RefCell<Vec<ChangeRecord>>>,
}

impl ChangeLog {
    /// Subscribe to `bag` under `label`.
    pub fn watch<B: AttributeBag>(&self, label: &str, bag: &B) -> ListenerId {
        let records = Rc::clone(&self.records);
        let label = label.to_string();
        bag.property_changed().subscribe(move |_, args: &PropertyChanged| {
            info!("{}.{} changed", label, args.property_name);
            records.borrow_mut().push(ChangeRecord::new(&label, args));
        })
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    pub fn records(&self) -> Vec<ChangeRecord> {
        self.records.borrow().clone()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LabeledSnapshot {
    pub label: String,
    #[serde(flatten)]
    pub snapshot: BagSnapshot,
}

/// Everything the demo observed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DemoReport {
    pub changes: Vec<ChangeRecord>,
    pub bags: Vec<LabeledSnapshot>,
    pub errors: Vec<String>,
}

impl DemoReport {
    fn push_bag<B: AttributeBag>(&mut self, label: &str, bag: &B) {
        self.bags.push(LabeledSnapshot {
            label: label.to_string(),
            snapshot: bag.snapshot(),
        });
    }

    pub fn changes_for(&self, bag: &str) -> Vec<&ChangeRecord> {
        self.changes.iter().filter(|c| c.bag == bag).collect()
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Changes ({}):", self.changes.len())?;
        for c in &self.changes {
            writeln!(
                f,
                "  {}.{}: {} -> {}",
                c.bag,
                c.property,
                c.old_value.as_deref().unwrap_or("<unset>"),
                c.new_value.as_deref().unwrap_or("<unset>"),
            )?;
        }
        for bag in &self.bags {
            write!(f, "\n[{}] {}", bag.label, bag.snapshot)?;
        }
        if !self.errors.is_empty() {
            writeln!(f, "\nErrors:")?;
            for e in &self.errors {
                writeln!(f, "  {}", e)?;
            }
        }
        Ok(())
    }
}

/// Run the demo scenario and collect what happened.
pub fn run_demo() -> Result<DemoReport> {
    let log = ChangeLog::default();
    let mut report = DemoReport::default();

    // Defaults every polygon falls back to (unwatched)
    let mut defaults = PolygonGraphics::new();
    defaults.set_height(PropertyHandle::constant(0.0_f64));
    defaults.set_granularity(PropertyHandle::constant(DEFAULT_GRANULARITY));
    defaults.set_fill(PropertyHandle::constant(true));
    defaults.set_outline(PropertyHandle::constant(true));
    defaults.set_outline_color(PropertyHandle::constant([0.0_f32, 0.0, 0.0, 1.0]));

    let mut polygon = PolygonGraphics::new();
    log.watch("polygon", &polygon);
    polygon.set_show(PropertyHandle::constant(true));
    polygon.set_material(PropertyHandle::constant("red"));
    polygon.set_height(PropertyHandle::constant(250.0_f64));

    // Same handle again: suppressed. Equal value, new handle: announced.
    let material = polygon.material().cloned();
    polygon.set_material(material);
    polygon.set_material(PropertyHandle::constant("red"));

    info!("Merging polygon defaults");
    polygon
        .merge(Some(&defaults))
        .context("Failed to merge polygon defaults")?;
    // Nothing left to fill
    polygon
        .merge(Some(&defaults))
        .context("Failed to re-merge polygon defaults")?;

    if let Err(err) = polygon.merge(None) {
        warn!("merge without source rejected: {}", err);
        report.errors.push(err.to_string());
    }

    let mut extruded = polygon.clone();
    log.watch("extruded", &extruded);
    extruded.set_extruded_height(PropertyHandle::constant(500.0_f64));

    let mut line_defaults = PolylineGraphics::new();
    line_defaults.set_show(PropertyHandle::constant(true));
    line_defaults.set_width(PropertyHandle::constant(1.0_f32));
    line_defaults.set_follow_surface(PropertyHandle::constant(true));

    let mut polyline = PolylineGraphics::new();
    log.watch("polyline", &polyline);
    polyline.set_width(PropertyHandle::constant(3.0_f32));
    let filled = polyline.merge_from(&line_defaults);
    info!("Polyline merge filled {} slot(s)", filled);

    report.changes = log.records();
    report.push_bag("defaults", &defaults);
    report.push_bag("polygon", &polygon);
    report.push_bag("extruded", &extruded);
    report.push_bag("polyline", &polyline);
    Ok(report)
}
