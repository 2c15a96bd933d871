use super::template::{SCRIPT_HEADER, ScriptTemplate};
use crate::error::DispatchError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Component, PathBuf};
use tracing::debug;

/// A job script that has been fully written and closed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScript {
    /// 1-based job number
    pub index: usize,
    pub path: PathBuf,
    /// Header plus one line per input file
    pub line_count: usize,
}

impl GeneratedScript {
    /// Number of input files the script scans
    pub fn file_count(&self) -> usize {
        self.line_count - 1
    }

    /// Path as handed to the submission command
    ///
    /// Relative paths get a leading `./` so the wrapper can execute them
    /// directly.
    pub fn submission_path(&self) -> String {
        let first = self.path.components().next();
        match first {
            Some(Component::RootDir) | Some(Component::CurDir) | Some(Component::ParentDir) => {
                self.path.to_string_lossy().into_owned()
            }
            _ => format!("./{}", self.path.display()),
        }
    }
}

struct OpenScript {
    index: usize,
    path: PathBuf,
    out: BufWriter<File>,
    lines: usize,
}

/// Writes job scripts one at a time into the run directory
///
/// At most one script is open. Lines go to the open script until it is
/// closed; opening a new one closes the previous script first.
pub struct ScriptWriter {
    run_dir: PathBuf,
    prefix: String,
    template: ScriptTemplate,
    current: Option<OpenScript>,
}

impl ScriptWriter {
    pub fn new(
        run_dir: impl Into<PathBuf>,
        prefix: impl Into<String>,
        template: ScriptTemplate,
    ) -> Self {
        Self {
            run_dir: run_dir.into(),
            prefix: prefix.into(),
            template,
            current: None,
        }
    }

    /// Path of the script for job `index`
    pub fn script_path(&self, index: usize) -> PathBuf {
        self.run_dir.join(format!("{}{}.sh", self.prefix, index))
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Start the script for job `index`
    ///
    /// Returns the previously open script if one had to be closed.
    pub fn open_new(&mut self, index: usize) -> Result<Option<GeneratedScript>, DispatchError> {
        let previous = if self.current.is_some() {
            Some(self.close()?)
        } else {
            None
        };

        fs::create_dir_all(&self.run_dir).map_err(|source| DispatchError::CreateRunDir {
            dir: self.run_dir.clone(),
            source,
        })?;

        let path = self.script_path(index);
        let write_err = |source: std::io::Error| DispatchError::WriteScript {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(write_err)?;
        make_executable(&file).map_err(write_err)?;

        let mut out = BufWriter::new(file);
        writeln!(out, "{}", SCRIPT_HEADER).map_err(write_err)?;

        debug!(job = index, path = %path.display(), "opened job script");
        self.current = Some(OpenScript {
            index,
            path,
            out,
            lines: 1,
        });

        Ok(previous)
    }

    /// Add the scan line for `file` to the open script
    pub fn append_line(&mut self, file: &str) -> Result<(), DispatchError> {
        let open = self.current.as_mut().ok_or(DispatchError::NoOpenScript)?;
        let line = self.template.command_line(file, open.index);

        writeln!(open.out, "{}", line).map_err(|source| DispatchError::WriteScript {
            path: open.path.clone(),
            source,
        })?;
        open.lines += 1;
        Ok(())
    }

    /// Flush and close the open script
    pub fn close(&mut self) -> Result<GeneratedScript, DispatchError> {
        let open = self.current.take().ok_or(DispatchError::NoOpenScript)?;
        let OpenScript {
            index,
            path,
            out,
            lines,
        } = open;

        let file = out.into_inner().map_err(|e| DispatchError::WriteScript {
            path: path.clone(),
            source: e.into_error(),
        })?;
        file.sync_all().map_err(|source| DispatchError::WriteScript {
            path: path.clone(),
            source,
        })?;

        debug!(job = index, lines, "closed job script");
        Ok(GeneratedScript {
            index,
            path,
            line_count: lines,
        })
    }
}

#[cfg(unix)]
fn make_executable(file: &File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = file.metadata()?.permissions();
    perms.set_mode(perms.mode() | 0o100);
    file.set_permissions(perms)
}

#[cfg(not(unix))]
fn make_executable(_file: &File) -> std::io::Result<()> {
    Ok(())
}
