use std::collections::BTreeMap;
use std::ffi::OsString;
use std::os::unix::fs::PermissionsExt;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use tempfile::{TempDir, TempPath};

use crate::error::HookTestError;
use crate::hook::{self, HookInput};
use crate::runner::CommandSpec;

pub const TEST_USER_NAME: &str = "Test User";
pub const TEST_USER_EMAIL: &str = "test@example.com";

/// Make sure the hook script exists and can be executed.
///
/// A script without execute permission is made executable (0755)
/// instead of being rejected.
pub fn prepare_script(script: &Path) -> Result<(), HookTestError> {
    let metadata = match std::fs::metadata(script) {
        Ok(metadata) if metadata.is_file() => metadata,
        Ok(_) => return Err(HookTestError::ScriptNotFound(script.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(HookTestError::ScriptNotFound(script.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };

    let mut perms = metadata.permissions();
    if perms.mode() & 0o111 == 0 {
        tracing::debug!(
            script = %script.display(),
            mode = %format!("{:o}", perms.mode()),
            "granting execute permission"
        );
        perms.set_mode(0o755);
        std::fs::set_permissions(script, perms)?;
    }
    Ok(())
}

/// Calling process environment with git's repository and identity variables on top
pub fn base_env(git_dir: &Path) -> BTreeMap<OsString, OsString> {
    let mut env: BTreeMap<OsString, OsString> = std::env::vars_os().collect();
    let overlay = [
        ("GIT_DIR", git_dir.as_os_str().to_os_string()),
        ("GIT_INDEX_FILE", git_dir.join("index").into_os_string()),
        ("GIT_AUTHOR_NAME", TEST_USER_NAME.into()),
        ("GIT_AUTHOR_EMAIL", TEST_USER_EMAIL.into()),
        ("GIT_COMMITTER_NAME", TEST_USER_NAME.into()),
        ("GIT_COMMITTER_EMAIL", TEST_USER_EMAIL.into()),
    ];
    for (key, value) in overlay {
        env.insert(key.into(), value);
    }
    env
}

/// Scratch artifact owned by a context; removed from disk when dropped
#[derive(Debug)]
enum Scratch {
    None,
    Dir(TempDir),
    File(TempPath),
}

/// Environment, arguments, stdin and working directory for one hook run.
///
/// Holds the scratch directory or message file alive until dropped.
#[derive(Debug)]
pub struct ExecutionContext {
    pub env: BTreeMap<OsString, OsString>,
    pub args: Vec<OsString>,
    pub stdin: Option<String>,
    pub current_dir: Option<PathBuf>,
    scratch: Scratch,
}

impl ExecutionContext {
    pub fn build(input: &HookInput, git_dir: &Path) -> Result<Self, HookTestError> {
        let mut context = Self {
            env: base_env(git_dir),
            args: Vec::new(),
            stdin: None,
            current_dir: None,
            scratch: Scratch::None,
        };

        match input {
            HookInput::PreCommit { staged_files } => {
                let dir = stage_files(staged_files)?;
                context.current_dir = Some(dir.path().to_path_buf());
                context.scratch = Scratch::Dir(dir);
            }
            HookInput::CommitMsg { message } => {
                let path = write_message(message)?;
                context.args.push(path.as_os_str().to_os_string());
                context.scratch = Scratch::File(path);
            }
            HookInput::PrePush {
                remote_name,
                remote_url,
            } => {
                context.args.push(remote_name.into());
                context.args.push(remote_url.into());
                context.stdin = Some(hook::push_ref_line());
            }
            HookInput::PrepareCommitMsg | HookInput::PostCommit | HookInput::PreRebase => {}
        }

        Ok(context)
    }

    /// Scratch directory or message file backing this context, if any
    pub fn scratch_path(&self) -> Option<&Path> {
        match &self.scratch {
            Scratch::None => None,
            Scratch::Dir(dir) => Some(dir.path()),
            Scratch::File(path) => Some(&**path),
        }
    }

    pub fn command_spec(&self, script: &Path, timeout: Option<Duration>) -> CommandSpec {
        CommandSpec {
            program: script.to_path_buf(),
            args: self.args.clone(),
            env: self.env.clone(),
            current_dir: self.current_dir.clone(),
            stdin: self.stdin.clone(),
            timeout,
        }
    }
}

fn stage_files(staged_files: &[String]) -> Result<TempDir, HookTestError> {
    let dir = tempfile::Builder::new().prefix("hook-test-").tempdir()?;
    tracing::debug!(dir = %dir.path().display(), count = staged_files.len(), "staging files");

    for file in staged_files {
        let relative = Path::new(file);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(HookTestError::InvalidStagedPath(file.clone()));
        }

        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, format!("# Sample content for {}\n", file))?;
    }

    Ok(dir)
}

fn write_message(message: &str) -> Result<TempPath, HookTestError> {
    let file = tempfile::Builder::new()
        .prefix("COMMIT_EDITMSG-")
        .suffix(".txt")
        .tempfile()?;
    std::fs::write(file.path(), message)?;
    Ok(file.into_temp_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git_dir() -> PathBuf {
        PathBuf::from("/repo/.git")
    }

    #[test]
    fn test_prepare_script_missing() {
        let result = prepare_script(Path::new("/nonexistent/hook.sh"));
        assert!(matches!(result, Err(HookTestError::ScriptNotFound(_))));
    }

    #[test]
    fn test_prepare_script_directory_is_not_a_script() {
        let dir = tempfile::tempdir().unwrap();
        let result = prepare_script(dir.path());
        assert!(matches!(result, Err(HookTestError::ScriptNotFound(_))));
    }

    #[test]
    fn test_prepare_script_grants_execute() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("hook");
        std::fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o644)).unwrap();

        prepare_script(&script).unwrap();

        let mode = std::fs::metadata(&script).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn test_prepare_script_leaves_executable_alone() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("hook");
        std::fs::write(&script, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o711)).unwrap();

        prepare_script(&script).unwrap();

        let mode = std::fs::metadata(&script).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o711);
    }

    #[test]
    fn test_base_env_overlays_git_variables() {
        let env = base_env(&git_dir());
        let get = |k: &str| env.get(&OsString::from(k)).cloned().unwrap();
        assert_eq!(get("GIT_DIR"), OsString::from("/repo/.git"));
        assert_eq!(get("GIT_INDEX_FILE"), OsString::from("/repo/.git/index"));
        assert_eq!(get("GIT_AUTHOR_NAME"), OsString::from("Test User"));
        assert_eq!(get("GIT_AUTHOR_EMAIL"), OsString::from("test@example.com"));
        assert_eq!(get("GIT_COMMITTER_NAME"), OsString::from("Test User"));
        assert_eq!(get("GIT_COMMITTER_EMAIL"), OsString::from("test@example.com"));
    }

    #[test]
    fn test_base_env_keeps_process_environment() {
        let env = base_env(&git_dir());
        if let Some(path) = std::env::var_os("PATH") {
            assert_eq!(env.get(&OsString::from("PATH")), Some(&path));
        }
    }

    #[test]
    fn test_pre_commit_stages_files_then_cleans_up() {
        let input = HookInput::pre_commit(["a/b.txt", "c.md"]);
        let context = ExecutionContext::build(&input, &git_dir()).unwrap();

        let scratch = context.scratch_path().unwrap().to_path_buf();
        assert_eq!(context.current_dir.as_deref(), Some(scratch.as_path()));
        let nested = std::fs::read_to_string(scratch.join("a/b.txt")).unwrap();
        assert_eq!(nested, "# Sample content for a/b.txt\n");
        let top = std::fs::read_to_string(scratch.join("c.md")).unwrap();
        assert_eq!(top, "# Sample content for c.md\n");
        assert!(context.args.is_empty());
        assert!(context.stdin.is_none());

        drop(context);
        assert!(!scratch.exists());
    }

    #[test]
    fn test_pre_commit_empty_file_list() {
        let input = HookInput::pre_commit(Vec::<String>::new());
        let context = ExecutionContext::build(&input, &git_dir()).unwrap();
        let scratch = context.scratch_path().unwrap();
        assert_eq!(std::fs::read_dir(scratch).unwrap().count(), 0);
    }

    #[test]
    fn test_pre_commit_rejects_escaping_paths() {
        for bad in ["../outside.txt", "/etc/passwd", "a/../../b"] {
            let input = HookInput::pre_commit([bad]);
            let result = ExecutionContext::build(&input, &git_dir());
            assert!(
                matches!(result, Err(HookTestError::InvalidStagedPath(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_commit_msg_writes_message_file_argument() {
        let input = HookInput::commit_msg("feat: x");
        let context = ExecutionContext::build(&input, &git_dir()).unwrap();

        assert_eq!(context.args.len(), 1);
        let path = PathBuf::from(&context.args[0]);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "feat: x");
        assert!(context.current_dir.is_none());

        drop(context);
        assert!(!path.exists());
    }

    #[test]
    fn test_pre_push_args_and_stdin() {
        let input = HookInput::pre_push("origin", "https://example.com/r.git");
        let context = ExecutionContext::build(&input, &git_dir()).unwrap();

        assert_eq!(
            context.args,
            vec![
                OsString::from("origin"),
                OsString::from("https://example.com/r.git")
            ]
        );
        assert_eq!(
            context.stdin.as_deref(),
            Some("refs/heads/main abc123 refs/heads/main def456\n")
        );
        assert!(context.scratch_path().is_none());
    }

    #[test]
    fn test_generic_has_no_payload() {
        for input in [
            HookInput::PrepareCommitMsg,
            HookInput::PostCommit,
            HookInput::PreRebase,
        ] {
            let context = ExecutionContext::build(&input, &git_dir()).unwrap();
            assert!(context.args.is_empty());
            assert!(context.stdin.is_none());
            assert!(context.current_dir.is_none());
            assert!(context.scratch_path().is_none());
        }
    }

    #[test]
    fn test_command_spec_carries_context() {
        let input = HookInput::pre_push("up", "git@host:r.git");
        let context = ExecutionContext::build(&input, &git_dir()).unwrap();
        let spec =
            context.command_spec(Path::new("/hooks/pre-push"), Some(Duration::from_secs(3)));

        assert_eq!(spec.program, PathBuf::from("/hooks/pre-push"));
        assert_eq!(spec.args, context.args);
        assert_eq!(spec.stdin, context.stdin);
        assert_eq!(spec.timeout, Some(Duration::from_secs(3)));
        assert_eq!(
            spec.env.get(&OsString::from("GIT_DIR")),
            Some(&OsString::from("/repo/.git"))
        );
    }
}
