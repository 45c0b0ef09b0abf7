use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::{Read, Write};
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(10);
/// How long to keep draining output after a timed-out hook is killed
const DRAIN_GRACE: Duration = Duration::from_millis(200);

/// Everything needed to launch one external program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    /// Complete environment for the child; nothing is inherited beyond this
    pub env: BTreeMap<OsString, OsString>,
    pub current_dir: Option<PathBuf>,
    pub stdin: Option<String>,
    pub timeout: Option<Duration>,
}

/// How a finished program ended, with its captured output.
///
/// Output is decoded as UTF-8; invalid sequences become U+FFFD and are
/// reported with a warning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// None when the process did not exit on its own
    pub exit_code: Option<i32>,
    pub signal: Option<i32>,
    pub timed_out: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Capability to run an external command to completion
pub trait CommandRunner {
    fn run(&self, spec: &CommandSpec) -> std::io::Result<CommandOutput>;
}

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> std::io::Result<CommandOutput> {
        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .env_clear()
            .envs(&spec.env)
            .stdin(if spec.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Own process group, so a timeout can take down the whole hook tree
            .process_group(0);
        if let Some(ref dir) = spec.current_dir {
            command.current_dir(dir);
        }

        let mut child = command.spawn()?;
        tracing::debug!(pid = child.id(), program = %spec.program.display(), "spawned hook");

        let stdin_writer = match (child.stdin.take(), spec.stdin.clone()) {
            (Some(mut pipe), Some(input)) => Some(thread::spawn(move || {
                // A hook may exit without reading stdin; a broken pipe is fine
                let _ = pipe.write_all(input.as_bytes());
            })),
            _ => None,
        };
        let stdout_reader = child.stdout.take().map(OutputReader::spawn);
        let stderr_reader = child.stderr.take().map(OutputReader::spawn);

        let (status, timed_out) = wait(&mut child, spec.timeout)?;

        // A killed hook may leave descendants outside its group holding the
        // pipes open; only wait for them up to the grace deadline
        let drain_deadline = timed_out.then(|| Instant::now() + DRAIN_GRACE);
        if let Some(handle) = stdin_writer {
            if !timed_out {
                let _ = handle.join();
            }
        }
        let stdout = collect("stdout", stdout_reader, drain_deadline);
        let stderr = collect("stderr", stderr_reader, drain_deadline);

        Ok(CommandOutput {
            exit_code: status.code(),
            signal: status.signal(),
            timed_out,
            stdout,
            stderr,
        })
    }
}

fn wait(child: &mut Child, timeout: Option<Duration>) -> std::io::Result<(ExitStatus, bool)> {
    let Some(timeout) = timeout else {
        return Ok((child.wait()?, false));
    };

    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok((status, false));
        }
        if Instant::now() >= deadline {
            tracing::warn!(pid = child.id(), ?timeout, "hook timed out, killing it");
            kill_group(child);
            return Ok((child.wait()?, true));
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn kill_group(child: &mut Child) {
    let pgid = child.id() as libc::pid_t;
    // Negative pid addresses the process group created at spawn
    if unsafe { libc::kill(-pgid, libc::SIGKILL) } != 0 {
        let _ = child.kill();
    }
}

/// Reads one pipe on its own thread into a shared buffer
struct OutputReader {
    buf: Arc<Mutex<Vec<u8>>>,
    done: Receiver<()>,
}

impl OutputReader {
    fn spawn<R: Read + Send + 'static>(mut pipe: R) -> Self {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let (tx, done) = mpsc::channel();
        let shared = Arc::clone(&buf);
        thread::spawn(move || {
            let mut chunk = [0u8; 8192];
            loop {
                match pipe.read(&mut chunk) {
                    Ok(0) => break,
                    Ok(n) => match shared.lock() {
                        Ok(mut buf) => buf.extend_from_slice(&chunk[..n]),
                        Err(_) => break,
                    },
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                    Err(_) => break,
                }
            }
            let _ = tx.send(());
        });
        Self { buf, done }
    }

    /// Wait for EOF, or until `deadline`, and take what has been read
    fn finish(self, deadline: Option<Instant>) -> (Vec<u8>, bool) {
        let complete = match deadline {
            None => self.done.recv().is_ok(),
            Some(deadline) => self
                .done
                .recv_timeout(deadline.saturating_duration_since(Instant::now()))
                .is_ok(),
        };
        let bytes = match self.buf.lock() {
            Ok(mut buf) => std::mem::take(&mut *buf),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        };
        (bytes, complete)
    }
}

fn collect(stream: &str, reader: Option<OutputReader>, deadline: Option<Instant>) -> String {
    let Some(reader) = reader else {
        return String::new();
    };
    let (bytes, complete) = reader.finish(deadline);
    if !complete {
        tracing::warn!(
            stream,
            "output still open after hook was killed, keeping partial output"
        );
    }
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(stream, "hook output is not valid UTF-8, replacing invalid bytes");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}
