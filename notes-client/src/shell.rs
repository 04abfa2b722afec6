//! Interactive shell — the navigation layer between the list and note views.
//!
//! Commands map onto paths resolved through the route table; everything the
//! user sees goes through the controllers, which own all view state.

use std::io::Write as _;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::ask::AskController;
use crate::editor::{NoteEditor, SubmitOutcome};
use crate::list::NoteList;
use crate::markdown;
use crate::router::{Route, RouteTable};
use crate::store::NoteStore;

type InputLines = Lines<BufReader<Stdin>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Open(String),
    New,
    Delete(String),
    Ask(String),
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parse one input line; `None` for a blank line.
    pub fn parse(line: &str) -> Option<Command> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let (cmd, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (trimmed, ""),
        };

        let command = match cmd {
            "list" | "ls" => Command::List,
            "open" | "edit" if !rest.is_empty() => Command::Open(rest.to_string()),
            "new" | "create" => Command::New,
            "delete" | "rm" if !rest.is_empty() => Command::Delete(rest.to_string()),
            "ask" if !rest.is_empty() => Command::Ask(rest.to_string()),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(trimmed.to_string()),
        };
        Some(command)
    }
}

/// Run the shell until quit or EOF.
pub async fn run(store: &dyn NoteStore) -> std::io::Result<()> {
    let routes = RouteTable::new();
    let mut list = NoteList::new();
    let mut ask = AskController::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    navigate(&routes, "/", store, &mut list, &mut lines).await?;
    print_help();

    loop {
        prompt("> ")?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match command {
            Command::List => navigate(&routes, "/", store, &mut list, &mut lines).await?,
            Command::Open(id) => {
                navigate(&routes, &format!("/{id}"), store, &mut list, &mut lines).await?
            }
            Command::New => navigate(&routes, "/new", store, &mut list, &mut lines).await?,
            Command::Delete(id) => delete_note(store, &mut list, &id).await,
            Command::Ask(question) => {
                println!("Thinking...");
                if ask.submit(store, &question).await {
                    println!("{}", ask.answer().unwrap_or_default());
                } else {
                    println!("Could not get an answer.");
                }
            }
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Unknown(input) => {
                println!("Unrecognized command '{input}'; type 'help' for commands.")
            }
        }
    }

    Ok(())
}

/// Resolve a path through the route table and mount the matching view.
async fn navigate(
    routes: &RouteTable,
    path: &str,
    store: &dyn NoteStore,
    list: &mut NoteList,
    lines: &mut InputLines,
) -> std::io::Result<()> {
    match routes.resolve(path) {
        Some(Route::AllNotes) => {
            list.refresh(store).await;
            render_list(list);
        }
        Some(Route::NewNote) => {
            edit_flow(NoteEditor::create(), store, lines).await?;
            list.refresh(store).await;
            render_list(list);
        }
        Some(Route::EditNote { note_id }) => {
            match store.get_note(&note_id).await {
                Ok(note) => {
                    println!("=== {} ===", note.title);
                    println!("{}", markdown::render_plain(&note.body));
                    edit_flow(NoteEditor::edit(note), store, lines).await?;
                }
                Err(e) => println!("Could not load note {note_id}: {e}"),
            }
            // Route change back to the list picks up whatever was saved.
            list.refresh(store).await;
            render_list(list);
        }
        None => println!("No route for '{path}'."),
    }
    Ok(())
}

/// Drive one editor until the note is saved, cancelled, or input ends.
async fn edit_flow(
    mut editor: NoteEditor,
    store: &dyn NoteStore,
    lines: &mut InputLines,
) -> std::io::Result<()> {
    loop {
        if let Some(err) = editor.last_error() {
            println!("Save failed: {err}");
            println!("Your draft is kept; adjust and save again, or '!cancel'.");
        }

        prompt(&format!("Title [{}]: ", editor.draft_title()))?;
        let Some(line) = lines.next_line().await? else {
            return Ok(());
        };
        let title = line.trim();
        if title == "!cancel" {
            editor.cancel();
            println!("Cancelled.");
            return Ok(());
        }
        if !title.is_empty() {
            editor.set_draft_title(title);
        }

        println!("Body (markdown). '.' alone ends input, '!keep' keeps the current body, '!cancel' aborts:");
        let mut body_lines: Vec<String> = Vec::new();
        let mut keep_body = false;
        loop {
            let Some(body_line) = lines.next_line().await? else {
                return Ok(());
            };
            match body_line.trim_end() {
                "." => break,
                "!keep" if body_lines.is_empty() => {
                    keep_body = true;
                    break;
                }
                "!cancel" => {
                    editor.cancel();
                    println!("Cancelled.");
                    return Ok(());
                }
                _ => body_lines.push(body_line),
            }
        }
        if !keep_body {
            editor.set_draft_body(body_lines.join("\n"));
        }

        match editor.submit(store).await {
            SubmitOutcome::Saved => {
                println!("Saved note {}.", editor.note().id);
                return Ok(());
            }
            SubmitOutcome::Rejected => continue,
        }
    }
}

async fn delete_note(store: &dyn NoteStore, list: &mut NoteList, id: &str) {
    // Prefer the listed note so the full record travels with the request.
    let note = match list.find(id) {
        Some(note) => note.clone(),
        None => notes_client_types::Note {
            id: id.to_string(),
            title: String::new(),
            body: String::new(),
        },
    };

    match store.delete_note(&note).await {
        Ok(()) => println!("Deleted note {id}."),
        Err(e) => println!("Could not delete note {id}: {e}"),
    }

    list.refresh(store).await;
    render_list(list);
}

fn render_list(list: &NoteList) {
    if let Some(err) = list.last_error() {
        println!("Could not load notes: {err}");
        return;
    }
    if list.notes().is_empty() {
        println!("No notes yet. Type 'new' to create one.");
        return;
    }
    for preview in list.previews() {
        println!("[{}] {}", preview.id, preview.title);
        if !preview.excerpt.is_empty() {
            println!("    {}", preview.excerpt);
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  list              show all notes");
    println!("  open <id>         view and edit a note");
    println!("  new               create a note");
    println!("  delete <id>       delete a note");
    println!("  ask <question>    ask a question about your notes");
    println!("  help              show this message");
    println!("  quit              exit");
}

fn prompt(text: &str) -> std::io::Result<()> {
    print!("{text}");
    std::io::stdout().flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_parse_to_nothing() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn commands_with_arguments() {
        assert_eq!(
            Command::parse("open 42"),
            Some(Command::Open("42".to_string()))
        );
        assert_eq!(
            Command::parse("delete 42"),
            Some(Command::Delete("42".to_string()))
        );
        assert_eq!(
            Command::parse("ask what is X"),
            Some(Command::Ask("what is X".to_string()))
        );
    }

    #[test]
    fn argument_commands_without_arguments_are_unknown() {
        assert_eq!(
            Command::parse("open"),
            Some(Command::Unknown("open".to_string()))
        );
        assert_eq!(
            Command::parse("ask"),
            Some(Command::Unknown("ask".to_string()))
        );
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(Command::parse("ls"), Some(Command::List));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(
            Command::parse("edit 7"),
            Some(Command::Open("7".to_string()))
        );
    }
}
