//! Plain-text rendering of a [`NotesPage`]: error banner, form, then list.

use std::fmt::Write;

use chrono::Local;
use notes_core::note::Note;

use crate::api::NotesBackend;
use crate::page::NotesPage;

const LOADING: &str = "Loading notes...";
const EMPTY: &str = "No notes found";

/// Render the whole page.
pub fn render_page<B: NotesBackend>(page: &NotesPage<B>) -> String {
    let mut out = String::new();

    if let Some(error) = page.error() {
        let _ = writeln!(out, "! {error}");
        out.push('\n');
    }

    render_form(&mut out, page);
    out.push('\n');
    out.push_str(&render_list(page));
    out
}

fn render_form<B: NotesBackend>(out: &mut String, page: &NotesPage<B>) {
    let heading = if page.editing().is_some() {
        "Edit note"
    } else {
        "New note"
    };
    let form = page.form();
    let _ = writeln!(out, "== {heading} ==");
    let _ = writeln!(out, "Title:   {}", form.title);
    let _ = writeln!(out, "Content: {}", form.content);
}

/// Render the list section: loading indicator, empty message or one block
/// per note.
pub fn render_list<B: NotesBackend>(page: &NotesPage<B>) -> String {
    let mut out = String::from("== Notes ==\n");

    if page.is_loading() {
        out.push_str(LOADING);
        out.push('\n');
    } else if page.notes().is_empty() {
        out.push_str(EMPTY);
        out.push('\n');
    } else {
        for note in page.notes() {
            out.push_str(&render_note(note));
        }
    }
    out
}

/// One note: checkbox, title and id, then content and creation time.
pub fn render_note(note: &Note) -> String {
    let mut out = String::new();
    let mark = if note.completed { "x" } else { " " };
    let _ = writeln!(out, "[{mark}] {} ({})", note.title, note.id);
    if let Some(content) = note.content.as_deref().filter(|c| !c.is_empty()) {
        for line in content.lines() {
            let _ = writeln!(out, "    {line}");
        }
    }
    let created = note.created_at.with_timezone(&Local);
    let _ = writeln!(out, "    Created: {}", created.format("%Y-%m-%d %H:%M:%S"));
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
