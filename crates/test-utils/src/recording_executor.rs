use std::io::Write;
use std::sync::{Arc, Mutex};

use shackles::action::{Action, CallArgs};
use shackles::errors::ShacklesError;
use shackles::exec::Executor;
use shackles::exec::backend::ExecuteFuture;

/// A fake executor that:
/// - resolves the action like the real executors do
/// - records the resolved command instead of running it
/// - returns a fixed status.
#[derive(Clone, Default)]
pub struct RecordingExecutor {
    executed: Arc<Mutex<Vec<Vec<String>>>>,
    status: i32,
}

impl RecordingExecutor {
    pub fn new(status: i32) -> Self {
        Self {
            executed: Arc::default(),
            status,
        }
    }

    /// Resolved commands recorded so far, in call order.
    pub fn executed(&self) -> Vec<Vec<String>> {
        self.executed.lock().unwrap().clone()
    }
}

impl Executor for RecordingExecutor {
    fn execute<'a>(
        &'a self,
        action: &'a Action,
        args: &'a CallArgs,
        _out: &'a mut (dyn Write + Send),
    ) -> ExecuteFuture<'a> {
        Box::pin(async move {
            let exe = action.resolve(args)?;
            self.executed.lock().unwrap().push(exe);
            Ok::<_, ShacklesError>(self.status)
        })
    }
}
