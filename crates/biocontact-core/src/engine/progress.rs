/// Events emitted while a contact map is computed.
///
/// The workflow runs three phases in order: residue centers (one step per
/// residue), the distance map (one step per row) and thresholding. A closing
/// [`Progress::Message`] summarizes the contact count.
#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    /// Begins a counted task inside the current phase.
    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    /// Free-form status line for the user.
    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards progress events to an optional callback.
///
/// Reporting is a no-op without a callback, so library callers that do not
/// care about progress pay nothing for it.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Runs `f` as a named phase, bracketing it with start and finish events.
    pub fn phase<T>(&self, name: &'static str, f: impl FnOnce() -> T) -> T {
        self.report(Progress::PhaseStart { name });
        let out = f();
        self.report(Progress::PhaseFinish);
        out
    }
}
