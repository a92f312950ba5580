use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};

use tracing::{info, warn};

use crate::catalog::Selection;
use crate::config::TerminalConfig;
use crate::error::{Error, Result};
use crate::exec::LaunchPlan;


/// Resolve `name` against `PATH`. Names containing a path separator are
/// checked directly.
pub fn lookup(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|source| Error::NotFound {
        name: name.to_string(),
        source,
    })
}

/// A started child process.
///
/// The child is reaped by a background thread whether or not the handle is
/// kept; dropping the handle just discards the exit status.
#[derive(Debug)]
pub struct LaunchHandle {
    program: String,
    pid: u32,
    exited: Option<ExitStatus>,
    status: async_channel::Receiver<ExitStatus>,
}

impl LaunchHandle {
    /// Program the child was started from.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// OS process id of the child.
    pub const fn pid(&self) -> u32 {
        self.pid
    }

    /// Exit status if the child has already exited, without blocking.
    pub fn try_status(&mut self) -> Option<ExitStatus> {
        if self.exited.is_none() {
            self.exited = self.status.try_recv().ok();
        }
        self.exited
    }

    /// Block until the child exits. `None` if its status could not be
    /// collected.
    pub fn wait(mut self) -> Option<ExitStatus> {
        if self.exited.is_none() {
            self.exited = self.status.recv_blocking().ok();
        }
        self.exited
    }
}

/// Start `plan` and return as soon as the process is running.
pub fn launch(plan: &LaunchPlan) -> Result<LaunchHandle> {
    let mut cmd = Command::new(&plan.program);
    cmd.args(&plan.args);
    if let Some(dir) = &plan.working_dir {
        cmd.current_dir(dir);
    }
    info!(command = %plan, "launching");
    spawn(cmd, &plan.program)
}

/// Look `name` up on `PATH` and start it with no arguments.
pub fn launch_program(name: &str) -> Result<LaunchHandle> {
    let program = lookup(name)?;
    info!(program = %program.display(), "launching");
    spawn(Command::new(&program), name)
}

/// Start whatever the picker's answer resolved to.
///
/// Catalog entries are expanded and wrapped in `terminal` when needed; free
/// text is looked up on `PATH` and run bare. `Ok(None)` means nothing was
/// selected.
pub fn launch_selection(
    selection: &Selection<'_>,
    terminal: &TerminalConfig,
) -> Result<Option<LaunchHandle>> {
    match *selection {
        Selection::Entry(entry) => {
            let plan = LaunchPlan::from_entry(entry, terminal)?;
            launch(&plan).map(Some)
        }
        Selection::Program(name) => launch_program(name).map(Some),
        Selection::Nothing => Ok(None),
    }
}

fn spawn(mut cmd: Command, program: &str) -> Result<LaunchHandle> {
    let child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| Error::Spawn {
            program: program.to_string(),
            source,
        })?;

    Ok(LaunchHandle {
        program: program.to_string(),
        pid: child.id(),
        exited: None,
        status: reap(child, program.to_string()),
    })
}

/// Wait for `child` on a detached thread so it never lingers as a zombie.
fn reap(mut child: Child, program: String) -> async_channel::Receiver<ExitStatus> {
    let (tx, rx) = async_channel::bounded(1);
    std::thread::spawn(move || match child.wait() {
        Ok(status) => {
            // Nobody may be listening any more; that is fine.
            let _ = tx.try_send(status);
        }
        Err(e) => warn!(%program, "failed to wait for child: {e}"),
    });
    rx
}
