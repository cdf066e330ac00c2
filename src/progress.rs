use std::fmt::Display;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use console::{StyledObject, Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{TICK_INTERVAL, WALK_FRAMES};
use crate::utils::string::counted;

/// Shape of the bar shown for a stage
#[derive(Clone, Copy)]
enum StageBar {
    /// Unknown length: the directory walk
    Walk,
    /// One tick per module: parsing
    Modules(u64),
}

impl StageBar {
    fn create(self) -> ProgressBar {
        match self {
            Self::Walk => ProgressBar::new_spinner(),
            Self::Modules(len) => ProgressBar::new(len),
        }
    }

    fn style(self) -> ProgressStyle {
        let (base, template) = match self {
            Self::Walk => (ProgressStyle::default_spinner(), "{spinner:.green} {wide_msg}"),
            Self::Modules(_) => (
                ProgressStyle::default_bar(),
                "{msg:>18} {bar:32.green/white} {pos:>5}/{len} [{elapsed}]",
            ),
        };
        let style = base.template(template).expect("stage templates are valid");

        match self {
            Self::Walk => style.tick_strings(WALK_FRAMES),
            Self::Modules(_) => style.progress_chars("=> "),
        }
    }
}

/// Interactive stderr feedback for a check run
///
/// Only created when stderr is a terminal; every stage takes it as an
/// `Option` so non-interactive runs stay quiet.
pub struct ProgressReporter {
    term: Term,
    bars: MultiProgress,
    active: Option<ProgressBar>,
    files_seen: AtomicUsize,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            bars: MultiProgress::new(),
            active: None,
            files_seen: AtomicUsize::new(0),
        }
    }

    /// Replace the active bar with a fresh one for the next stage
    fn begin_stage(&mut self, shape: StageBar, message: &str) -> ProgressBar {
        self.end_stage();
        let bar = self.bars.add(shape.create());
        bar.set_style(shape.style());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(TICK_INTERVAL);
        self.active = Some(bar.clone());
        bar
    }

    fn end_stage(&mut self) {
        if let Some(bar) = self.active.take() {
            bar.finish_and_clear();
        }
    }

    fn status(&self, mark: StyledObject<&str>, text: impl Display) {
        let _ = self.term.clear_line();
        eprintln!("{mark} {text}");
    }

    pub fn start_discovery(&mut self) {
        self.files_seen.store(0, Ordering::Relaxed);
        self.begin_stage(StageBar::Walk, "Walking the project tree");
    }

    pub fn found_file(&self, path: &Path) {
        let seen = self.files_seen.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(bar) = &self.active {
            bar.set_message(format!("{seen} .py files, latest {}", path.display()));
        }
    }

    pub fn finish_discovery(&mut self, count: usize) {
        self.end_stage();
        if count == 0 {
            self.status(style("✗").red(), "No Python modules under the root");
        } else {
            self.status(
                style("✓").green(),
                format_args!("Registered {}", style(counted(count, "module")).bold()),
            );
        }
    }

    /// Bar that the parser pool advances once per module
    pub fn start_parsing(&mut self, total_modules: usize) -> ProgressBar {
        self.begin_stage(StageBar::Modules(total_modules as u64), "Reading imports")
    }

    pub fn finish_parsing(&mut self, parse_errors: usize) {
        self.end_stage();
        if parse_errors == 0 {
            self.status(style("✓").green(), "Imports extracted from every module");
        } else {
            self.status(
                style("⚠").yellow(),
                format_args!(
                    "Imports extracted; {} could not be parsed",
                    style(counted(parse_errors, "file")).red()
                ),
            );
        }
    }

    pub fn start_cycle_detection(&mut self) {
        self.status(style("↻").cyan(), "Searching the import graph for cycles");
    }

    pub fn finish_cycle_detection(&self, cycles_found: usize) {
        if cycles_found == 0 {
            self.status(style("✓").green().bold(), "Import graph is acyclic");
        } else {
            self.status(
                style("⚠").yellow().bold(),
                format_args!(
                    "{} in the import graph",
                    style(counted(cycles_found, "cycle")).red().bold()
                ),
            );
        }
    }
}
