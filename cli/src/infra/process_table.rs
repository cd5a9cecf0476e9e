//! Process table infrastructure: implements `ProcessTable` with `sysinfo`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use sysinfo::{Pid, ProcessRefreshKind, ProcessStatus, ProcessesToUpdate, System, UpdateKind};

use crate::application::ports::ProcessTable;
use crate::domain::{ProcessFault, RunningProcess};

/// Production `ProcessTable` backed by a `sysinfo::System` snapshot.
///
/// `pids()` refreshes the whole table; `inspect()` reads from that snapshot;
/// `kill()` re-checks the single process before signalling it.
pub struct SysinfoProcessTable {
    system: Mutex<System>,
}

impl SysinfoProcessTable {
    #[must_use]
    pub fn new() -> Self {
        Self {
            system: Mutex::new(System::new()),
        }
    }

    fn system(&self) -> MutexGuard<'_, System> {
        self.system.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SysinfoProcessTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTable for SysinfoProcessTable {
    fn pids(&self) -> Vec<u32> {
        let mut system = self.system();
        system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_cmd(UpdateKind::Always),
        );
        let mut pids: Vec<u32> = system
            .processes()
            .iter()
            .filter(|(_, process)| process.thread_kind().is_none())
            .map(|(pid, _)| pid.as_u32())
            .collect();
        pids.sort_unstable();
        pids
    }

    fn inspect(&self, pid: u32) -> Result<RunningProcess, ProcessFault> {
        let system = self.system();
        let process = system.process(Pid::from_u32(pid)).ok_or(ProcessFault::Gone)?;
        if matches!(process.status(), ProcessStatus::Zombie) {
            return Err(ProcessFault::Zombie);
        }
        let argv: Vec<String> = process
            .cmd()
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();
        Ok(RunningProcess::new(pid, &argv))
    }

    fn kill(&self, pid: u32) -> Result<(), ProcessFault> {
        let mut system = self.system();
        let target = Pid::from_u32(pid);
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[target]),
            true,
            ProcessRefreshKind::nothing(),
        );
        let process = system.process(target).ok_or(ProcessFault::Gone)?;
        if matches!(process.status(), ProcessStatus::Zombie) {
            return Err(ProcessFault::Zombie);
        }
        if process.kill() {
            Ok(())
        } else {
            Err(ProcessFault::Denied)
        }
    }
}
