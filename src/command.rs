//! Running the system utilities that drive detection is built on.

use tracing::debug;

use crate::error::Failure;

/// Something that can run an external command and hand back its stdout.
///
/// Detection only ever talks to the system through this trait, which makes it possible to feed
/// the parsers with recorded output.
pub trait CommandRunner {
    /// Run `program` with `args` and return everything it wrote to stdout.
    ///
    /// Implementations must fail if the command could not be started, did not exit successfully
    /// or wrote anything to stderr.
    fn run(
        &self,
        program: &str,
        args: &[&str],
    ) -> impl Future<Output = Result<String, Failure>> + Send;
}

/// Runs commands as child processes of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<String, Failure> {
        let command = command_line(program, args);
        debug!("Running {command}");

        let output = tokio::process::Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| Failure::Spawn {
                command: command.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(Failure::Exit {
                command,
                code: output.status.code(),
                stderr,
            });
        }

        // Warnings count as failures too
        if !output.stderr.is_empty() {
            return Err(Failure::Stderr { command, stderr });
        }

        debug!("`{command}` wrote {} bytes", output.stdout.len());

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

pub(crate) fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
