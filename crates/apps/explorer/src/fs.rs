//! In-memory mock filesystem browsed by the explorer window.

use desktop_app_contract::LaunchData;
use thiserror::Error;

const NEW_FOLDER_NAME: &str = "New Folder";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Drive,
    Folder,
    File,
}

impl EntryKind {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Drive => "🖴",
            Self::Folder => "📁",
            Self::File => "📄",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    pub name: String,
    pub kind: EntryKind,
    pub content: String,
    pub children: Vec<FsEntry>,
}

impl FsEntry {
    fn container(name: &str, kind: EntryKind, children: Vec<FsEntry>) -> Self {
        Self {
            name: name.to_string(),
            kind,
            content: String::new(),
            children,
        }
    }

    fn folder(name: &str, children: Vec<FsEntry>) -> Self {
        Self::container(name, EntryKind::Folder, children)
    }

    fn file(name: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: EntryKind::File,
            content: content.to_string(),
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplorerError {
    #[error("Cannot create folders at root level.")]
    RootLevel,
}

/// Result of double-clicking an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Entered,
    OpenDocument(LaunchData),
    Missing,
}

/// Mock filesystem plus the folder currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerState {
    roots: Vec<FsEntry>,
    /// Child indices from the root list down to the open folder; empty at "My Computer".
    path: Vec<usize>,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self {
            roots: default_filesystem(),
            path: Vec::new(),
        }
    }
}

impl ExplorerState {
    pub fn items(&self) -> &[FsEntry] {
        let mut items = self.roots.as_slice();
        for &index in &self.path {
            match items.get(index) {
                Some(entry) => items = &entry.children,
                None => return &[],
            }
        }
        items
    }

    fn items_mut(&mut self) -> Option<&mut Vec<FsEntry>> {
        let mut items = &mut self.roots;
        for &index in &self.path {
            items = &mut items.get_mut(index)?.children;
        }
        Some(items)
    }

    pub fn address(&self) -> String {
        let mut address = String::from("My Computer");
        let mut items = self.roots.as_slice();
        for &index in &self.path {
            let Some(entry) = items.get(index) else {
                break;
            };
            address.push('\\');
            address.push_str(&entry.name);
            items = &entry.children;
        }
        address
    }

    pub fn at_root(&self) -> bool {
        self.path.is_empty()
    }

    pub fn up(&mut self) {
        self.path.pop();
    }

    pub fn activate(&mut self, index: usize) -> Activation {
        let Some(entry) = self.items().get(index) else {
            return Activation::Missing;
        };
        match entry.kind {
            EntryKind::Drive | EntryKind::Folder => {
                self.path.push(index);
                Activation::Entered
            }
            EntryKind::File => Activation::OpenDocument(LaunchData::TextDocument {
                name: entry.name.clone(),
                content: entry.content.clone(),
            }),
        }
    }

    /// Adds an empty folder to the open folder, numbering the name if it is taken.
    pub fn create_folder(&mut self) -> Result<String, ExplorerError> {
        if self.at_root() {
            return Err(ExplorerError::RootLevel);
        }
        let items = self.items_mut().ok_or(ExplorerError::RootLevel)?;
        let name = unique_name(items, NEW_FOLDER_NAME);
        items.push(FsEntry::folder(&name, Vec::new()));
        Ok(name)
    }

    pub fn status(&self) -> String {
        let count = self.items().len();
        format!("{count} object(s)   {:.1}KB", count as f64 * 1.5)
    }
}

fn unique_name(items: &[FsEntry], base: &str) -> String {
    let taken = |name: &str| items.iter().any(|entry| entry.name == name);
    if !taken(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{base} ({n})"))
        .find(|name| !taken(name))
        .unwrap_or_else(|| base.to_string())
}

fn default_filesystem() -> Vec<FsEntry> {
    vec![FsEntry::container(
        "C:",
        EntryKind::Drive,
        vec![
            FsEntry::folder(
                "Windows",
                vec![
                    FsEntry::folder("System32", Vec::new()),
                    FsEntry::folder("Fonts", Vec::new()),
                    FsEntry::file(
                        "Readme.txt",
                        "Retro Desktop OS\nVersion 1.0\n\nEnjoy the nostalgia!",
                    ),
                ],
            ),
            FsEntry::folder(
                "My Documents",
                vec![
                    FsEntry::file(
                        "todo.txt",
                        "- Buy milk\n- Feed the cat\n- Install Netscape Navigator",
                    ),
                    FsEntry::file(
                        "secret_plans.txt",
                        "Top Secret Plans:\n1. Rebuild Windows 95 in Rust\n2. ???\n3. Profit",
                    ),
                ],
            ),
            FsEntry::folder("Program Files", Vec::new()),
        ],
    )]
}
