//! Line-oriented front end over the document workspace.
//!
//! Documents are addressed by their 1-based position in the workspace.

use docshell::kernel::services::adapters::FileContentHandler;
use docshell::kernel::services::ports::{
    CloseChoice, ConfirmRequest, ContentHandler, DocumentSettings,
};
use docshell::kernel::{CloseOutcome, DocumentId, Workspace};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

const HELP: &str = "\
commands:
  new                   create an untitled document
  open <path>           open a file
  list                  list open documents
  append <n> <text>     append a line to document n
  rename <n> <title>    change the title of document n
  activate <n>          make document n the active one
  save <n>              save document n
  saveas <n> [path]     save document n to a new path
  close <n>             close document n
  help                  show this text
  quit                  close everything and exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    New,
    Open(PathBuf),
    List,
    Append(usize, String),
    Rename(usize, String),
    Activate(usize),
    Save(usize),
    SaveAs(usize, Option<PathBuf>),
    Close(usize),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    BadIndex(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Empty => write!(f, "empty command"),
            CommandError::Unknown(name) => write!(f, "unknown command: {}", name),
            CommandError::MissingArgument(what) => write!(f, "missing argument: {}", what),
            CommandError::BadIndex(raw) => write!(f, "not a document number: {}", raw),
        }
    }
}

impl std::error::Error for CommandError {}

pub fn parse_command(line: &str) -> Result<ShellCommand, CommandError> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name {
        "" => Err(CommandError::Empty),
        "new" => Ok(ShellCommand::New),
        "open" => Ok(ShellCommand::Open(PathBuf::from(required(rest, "path")?))),
        "list" | "ls" => Ok(ShellCommand::List),
        "append" => {
            let (index, text) = indexed(rest)?;
            Ok(ShellCommand::Append(index, text.to_string()))
        }
        "rename" => {
            let (index, title) = indexed(rest)?;
            Ok(ShellCommand::Rename(index, required(title, "title")?.to_string()))
        }
        "activate" => Ok(ShellCommand::Activate(indexed(rest)?.0)),
        "save" => Ok(ShellCommand::Save(indexed(rest)?.0)),
        "saveas" => {
            let (index, path) = indexed(rest)?;
            let path = (!path.is_empty()).then(|| PathBuf::from(path));
            Ok(ShellCommand::SaveAs(index, path))
        }
        "close" => Ok(ShellCommand::Close(indexed(rest)?.0)),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn required<'a>(value: &'a str, what: &'static str) -> Result<&'a str, CommandError> {
    if value.is_empty() {
        Err(CommandError::MissingArgument(what))
    } else {
        Ok(value)
    }
}

fn indexed(rest: &str) -> Result<(usize, &str), CommandError> {
    let (raw, tail) = match rest.split_once(char::is_whitespace) {
        Some((raw, tail)) => (raw, tail.trim_start()),
        None => (rest, ""),
    };
    let raw = required(raw, "document number")?;
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok((n, tail)),
        _ => Err(CommandError::BadIndex(raw.to_string())),
    }
}

fn read_line() -> io::Result<Option<String>> {
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

fn ask(question: &str) -> Option<String> {
    print!("{}", question);
    let _ = io::stdout().flush();
    read_line().ok().flatten()
}

/// Terminal version of the Save/Discard/Cancel dialog. End of input counts
/// as Cancel.
fn terminal_prompt(request: &ConfirmRequest) -> CloseChoice {
    println!("{}", request.header);
    loop {
        let Some(answer) = ask(&format!("{} [y]es/[n]o/[c]ancel: ", request.message)) else {
            return CloseChoice::Cancel;
        };
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return CloseChoice::Save,
            "n" | "no" => return CloseChoice::Discard,
            "c" | "cancel" => return CloseChoice::Cancel,
            _ => continue,
        }
    }
}

fn terminal_save_as(title: &str) -> Option<PathBuf> {
    let answer = ask(&format!("Save '{}' as: ", title))?;
    let answer = answer.trim();
    if answer.is_empty() {
        None
    } else {
        Some(PathBuf::from(answer))
    }
}

enum SaveTarget {
    /// The document's own location, asking only when it has none.
    Current,
    Ask,
    Path(PathBuf),
}

pub struct Shell {
    workspace: Workspace,
    handler: Rc<dyn ContentHandler>,
}

impl Shell {
    pub fn new(settings: DocumentSettings) -> Self {
        Self::with_handler(
            settings,
            Rc::new(FileContentHandler::new().with_save_as(terminal_save_as)),
        )
    }

    fn with_handler(settings: DocumentSettings, handler: Rc<dyn ContentHandler>) -> Self {
        Self {
            workspace: Workspace::new(settings),
            handler,
        }
    }

    pub fn open(&mut self, path: &Path) {
        match self.workspace.open_document(Rc::clone(&self.handler), path) {
            Ok(_) => self.list(),
            Err(e) => println!("cannot open {}: {}", path.display(), e),
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        println!("docshell - type 'help' for commands");
        loop {
            print!("> ");
            io::stdout().flush()?;
            let Some(line) = read_line()? else {
                // End of input: leave without asking.
                return Ok(());
            };
            match parse_command(&line) {
                Ok(ShellCommand::Quit) => {
                    if self.quit() {
                        return Ok(());
                    }
                }
                Ok(command) => self.execute(command),
                Err(CommandError::Empty) => {}
                Err(e) => println!("{}", e),
            }
        }
    }

    fn execute(&mut self, command: ShellCommand) {
        match command {
            ShellCommand::New => {
                self.workspace.new_document(Rc::clone(&self.handler));
                self.list();
            }
            ShellCommand::Open(path) => self.open(&path),
            ShellCommand::List => self.list(),
            ShellCommand::Append(n, text) => {
                if let Some(id) = self.id_at(n) {
                    if let Some(doc) = self.workspace.get_mut(id) {
                        doc.view_mut().edit_model().append(&format!("{}\n", text));
                    }
                    self.list();
                }
            }
            ShellCommand::Rename(n, title) => {
                if let Some(id) = self.id_at(n) {
                    if let Some(doc) = self.workspace.get_mut(id) {
                        doc.view_mut().set_title(title);
                    }
                    self.list();
                }
            }
            ShellCommand::Activate(n) => {
                if let Some(id) = self.id_at(n) {
                    if let Err(e) = self.workspace.set_active(id) {
                        println!("{}", e);
                    }
                    self.list();
                }
            }
            ShellCommand::Save(n) => {
                if let Some(id) = self.id_at(n) {
                    self.save(id, SaveTarget::Current);
                }
            }
            ShellCommand::SaveAs(n, path) => {
                if let Some(id) = self.id_at(n) {
                    let target = match path {
                        Some(path) => SaveTarget::Path(path),
                        None => SaveTarget::Ask,
                    };
                    self.save(id, target);
                }
            }
            ShellCommand::Close(n) => {
                if let Some(id) = self.id_at(n) {
                    self.close(id);
                }
            }
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::Quit => {}
        }
    }

    fn id_at(&self, n: usize) -> Option<DocumentId> {
        let id = self.workspace.ids().get(n - 1).copied();
        if id.is_none() {
            println!("no document {}", n);
        }
        id
    }

    fn list(&self) {
        if self.workspace.is_empty() {
            println!("(no documents)");
            return;
        }
        for (i, (id, doc)) in self.workspace.documents().enumerate() {
            let marker = if self.workspace.active() == Some(id) {
                '>'
            } else {
                ' '
            };
            let location = doc
                .location()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(unsaved)".to_string());
            println!("{}{:>3} {:<24} {}", marker, i + 1, doc.display_title(), location);
        }
    }

    fn save(&mut self, id: DocumentId, target: SaveTarget) {
        let Some(doc) = self.workspace.get_mut(id) else {
            return;
        };
        let handler = doc.handler();
        let view = doc.view_mut();
        let result = match &target {
            SaveTarget::Current => handler.save_content(view, false),
            SaveTarget::Ask => handler.save_content(view, true),
            SaveTarget::Path(path) => handler.save_content_to(view, path),
        };
        match result {
            Ok(()) => println!("saved {}", view.display_title()),
            Err(e) => println!("save failed: {}", e),
        }
    }

    fn close(&mut self, id: DocumentId) {
        match self.workspace.close_document(id, &mut terminal_prompt) {
            Ok(CloseOutcome::Closed) => self.list(),
            Ok(CloseOutcome::Retained) => println!("kept open: document has a location"),
            Ok(CloseOutcome::Cancelled) => println!("close cancelled"),
            Err(e) => println!("{}", e),
        }
    }

    fn quit(&mut self) -> bool {
        match self.workspace.close_all(&mut terminal_prompt) {
            Ok(done) => done,
            Err(e) => {
                println!("{}", e);
                false
            }
        }
    }
}
