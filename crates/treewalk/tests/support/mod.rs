//! In-memory filesystem for scripted walker scenarios.
//!
//! Paths are absolute Unix-style strings. Every primitive can be made to fail
//! or panic for a given path, and calls are counted per operation.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};
use treewalk::{DirEntry, ErrorCode, FileKind, FsError, FsResult, WalkerFs};

const MAX_SYMLINK_HOPS: usize = 40;

/// Filesystem primitive, used to target failures and count calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Exists,
    Canonicalize,
    ReadDir,
    ReadLink,
    SymlinkMetadata,
    Metadata,
    CheckReadable,
}

#[derive(Clone, Debug)]
enum Node {
    Dir(Vec<FsResult<DirEntry>>),
    File { readable: bool },
    Symlink(PathBuf),
    Other,
}

impl Node {
    const fn kind(&self) -> FileKind {
        match self {
            Self::Dir(_) => FileKind::Directory,
            Self::File { .. } => FileKind::File,
            Self::Symlink(_) => FileKind::Symlink,
            Self::Other => FileKind::Other,
        }
    }
}

#[derive(Debug)]
pub struct MemoryFs {
    nodes: HashMap<PathBuf, Node>,
    failures: HashMap<(Op, PathBuf), FsError>,
    panics: HashSet<(Op, PathBuf)>,
    calls: RefCell<HashMap<Op, usize>>,
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFs {
    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(PathBuf::from("/"), Node::Dir(Vec::new()));
        Self {
            nodes,
            failures: HashMap::new(),
            panics: HashSet::new(),
            calls: RefCell::new(HashMap::new()),
        }
    }

    pub fn dir(&mut self, path: &str) -> &mut Self {
        self.insert(Path::new(path), Node::Dir(Vec::new()), None)
    }

    pub fn file(&mut self, path: &str) -> &mut Self {
        self.insert(Path::new(path), Node::File { readable: true }, None)
    }

    pub fn unreadable_file(&mut self, path: &str) -> &mut Self {
        self.insert(Path::new(path), Node::File { readable: false }, None)
    }

    pub fn symlink(&mut self, path: &str, target: &str) -> &mut Self {
        self.insert(Path::new(path), Node::Symlink(PathBuf::from(target)), None)
    }

    /// Adds a symlink whose listing entry reports `kind` instead of
    /// [`FileKind::Symlink`], as filesystems without `d_type` support may.
    pub fn symlink_listed_as(&mut self, path: &str, target: &str, kind: FileKind) -> &mut Self {
        self.insert(
            Path::new(path),
            Node::Symlink(PathBuf::from(target)),
            Some(kind),
        )
    }

    pub fn other(&mut self, path: &str) -> &mut Self {
        self.insert(Path::new(path), Node::Other, None)
    }

    /// Appends a listing entry with no backing node.
    pub fn raw_entry(&mut self, dir: &str, name: &str, kind: FileKind) -> &mut Self {
        self.push_entry(Path::new(dir), Ok(DirEntry::new(name, kind)))
    }

    /// Appends a listing entry that fails to read.
    pub fn entry_error(&mut self, dir: &str, error: FsError) -> &mut Self {
        self.push_entry(Path::new(dir), Err(error))
    }

    pub fn fail(&mut self, op: Op, path: &str, error: FsError) -> &mut Self {
        self.failures.insert((op, PathBuf::from(path)), error);
        self
    }

    pub fn panic_on(&mut self, op: Op, path: &str) -> &mut Self {
        self.panics.insert((op, PathBuf::from(path)));
        self
    }

    pub fn calls(&self, op: Op) -> usize {
        self.calls.borrow().get(&op).copied().unwrap_or(0)
    }

    fn insert(&mut self, path: &Path, node: Node, listed_as: Option<FileKind>) -> &mut Self {
        if matches!(node, Node::Dir(_)) && self.nodes.contains_key(path) {
            return self;
        }
        let parent = path.parent().expect("absolute path with a parent");
        if !self.nodes.contains_key(parent) {
            self.insert(parent, Node::Dir(Vec::new()), None);
        }
        let name = path.file_name().expect("path with a file name");
        let kind = listed_as.unwrap_or_else(|| node.kind());
        self.nodes.insert(path.to_path_buf(), node);
        self.push_entry(parent, Ok(DirEntry::new(name, kind)))
    }

    fn push_entry(&mut self, dir: &Path, entry: FsResult<DirEntry>) -> &mut Self {
        match self.nodes.get_mut(dir) {
            Some(Node::Dir(entries)) => entries.push(entry),
            _ => panic!("{} is not a directory", dir.display()),
        }
        self
    }

    fn enter(&self, op: Op, path: &Path) -> FsResult<()> {
        *self.calls.borrow_mut().entry(op).or_default() += 1;
        if self.panics.contains(&(op, path.to_path_buf())) {
            panic!("injected panic in {op:?} for {}", path.display());
        }
        match self.failures.get(&(op, path.to_path_buf())) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn resolve(&self, path: &Path, follow_last: bool) -> FsResult<PathBuf> {
        let mut current = PathBuf::from("/");
        let mut pending = components(path);
        let mut hops = 0;

        while let Some(name) = pending.pop() {
            if name == ".." {
                current.pop();
                continue;
            }
            let candidate = current.join(&name);
            match self.nodes.get(&candidate) {
                Some(Node::Symlink(target)) if follow_last || !pending.is_empty() => {
                    hops += 1;
                    if hops > MAX_SYMLINK_HOPS {
                        return Err(error(ErrorCode::TooManySymlinks, "Too many levels of symbolic links"));
                    }
                    if target.is_absolute() {
                        current = PathBuf::from("/");
                    }
                    pending.extend(components(target));
                }
                Some(Node::Dir(_)) => current = candidate,
                Some(_) if pending.is_empty() => current = candidate,
                Some(_) => return Err(error(ErrorCode::NotADirectory, "Not a directory")),
                None => return Err(error(ErrorCode::NotFound, "No such file or directory")),
            }
        }
        Ok(current)
    }

    fn node(&self, path: &Path, follow_last: bool) -> FsResult<(PathBuf, &Node)> {
        let resolved = self.resolve(path, follow_last)?;
        let node = self
            .nodes
            .get(&resolved)
            .ok_or_else(|| error(ErrorCode::NotFound, "No such file or directory"))?;
        Ok((resolved, node))
    }
}

fn error(code: ErrorCode, message: &str) -> FsError {
    FsError::new(code, message)
}

/// Components in reverse order, ready to be popped.
fn components(path: &Path) -> Vec<OsString> {
    let mut names: Vec<OsString> = path
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_os_string()),
            Component::ParentDir => Some(OsString::from("..")),
            Component::RootDir | Component::CurDir | Component::Prefix(_) => None,
        })
        .collect();
    names.reverse();
    names
}

impl WalkerFs for MemoryFs {
    fn exists(&self, path: &Path) -> FsResult<bool> {
        self.enter(Op::Exists, path)?;
        match self.resolve(path, true) {
            Ok(_) => Ok(true),
            Err(error) if error.code() == Some(&ErrorCode::NotFound) => Ok(false),
            Err(error) => Err(error),
        }
    }

    fn canonicalize(&self, path: &Path) -> FsResult<PathBuf> {
        self.enter(Op::Canonicalize, path)?;
        self.resolve(path, true)
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<FsResult<DirEntry>>> {
        self.enter(Op::ReadDir, path)?;
        match self.node(path, true)? {
            (_, Node::Dir(entries)) => Ok(entries.clone()),
            _ => Err(error(ErrorCode::NotADirectory, "Not a directory")),
        }
    }

    fn read_link(&self, path: &Path) -> FsResult<PathBuf> {
        self.enter(Op::ReadLink, path)?;
        match self.node(path, false)? {
            (_, Node::Symlink(target)) => Ok(target.clone()),
            _ => Err(error(ErrorCode::from_name("EINVAL"), "Invalid argument")),
        }
    }

    fn symlink_metadata(&self, path: &Path) -> FsResult<FileKind> {
        self.enter(Op::SymlinkMetadata, path)?;
        Ok(self.node(path, false)?.1.kind())
    }

    fn metadata(&self, path: &Path) -> FsResult<FileKind> {
        self.enter(Op::Metadata, path)?;
        Ok(self.node(path, true)?.1.kind())
    }

    fn check_readable(&self, path: &Path) -> FsResult<()> {
        self.enter(Op::CheckReadable, path)?;
        match self.node(path, true)? {
            (_, Node::File { readable: false }) => {
                Err(error(ErrorCode::PermissionDenied, "Permission denied"))
            }
            _ => Ok(()),
        }
    }
}

/// Warning messages recorded on this thread since the last drain.
pub fn warnings() -> Vec<String> {
    logging::drain_events()
        .into_iter()
        .filter(logging::DiagnosticEvent::is_warning)
        .map(|event| event.message().to_owned())
        .collect()
}

pub fn paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}
