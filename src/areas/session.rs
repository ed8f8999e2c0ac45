use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Entry point for every command: knows where passages are read from and
/// where rendered output goes.
pub struct Session {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
}

impl Session {
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path.canonicalize()?;

        Ok(Session {
            writer: RefCell::new(writer),
            workspace: Workspace::new(path.into_boxed_path()),
        })
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub(crate) fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
