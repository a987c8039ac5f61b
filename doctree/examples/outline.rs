//! Interactive outline tree in the terminal.
//!
//! ```text
//! cargo run -p doctree --example outline [outline.json]
//! ```
//!
//! Arrow keys, Home/End, Enter/Space, `*` and type-ahead drive the tree.
//! `q` or Esc quits. Debug logging goes to `outline.log`.

use std::error::Error;
use std::fs::{self, File};
use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode};
use crossterm::{cursor, execute, queue, style, terminal};
use docdom::{Element, Event};
use doctree::page::OUTLINE_TREE_CLASS;
use doctree::{render_lines, Outline, OutlineEntry, TreeConfig, TreeIndex};
use simplelog::{Config, LevelFilter, WriteLogger};

const ROOT_ID: &str = "outline";

/// Restores the terminal when dropped.
struct Screen {
    stdout: Stdout,
}

impl Screen {
    fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { stdout })
    }

    fn draw(&mut self, tree: &TreeIndex) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        let width = usize::from(width);
        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;

        let lines = render_lines(tree, width);
        let body = usize::from(height).saturating_sub(2);
        for (row, line) in lines.iter().take(body).enumerate() {
            queue!(
                self.stdout,
                cursor::MoveTo(0, row as u16),
                style::Print(line)
            )?;
        }

        let status = match tree.selected_item().and_then(|i| tree.item(i)) {
            Some(item) => format!("selected: {} {}", item.label, item.href.as_deref().unwrap_or("")),
            None => "selected: none".to_string(),
        };
        queue!(
            self.stdout,
            cursor::MoveTo(0, height.saturating_sub(1)),
            style::Print(docdom::text::truncate_to_width(&status, width))
        )?;
        self.stdout.flush()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn sample() -> Outline {
    Outline::new(vec![
        OutlineEntry::new("Documentation")
            .href("/doc/")
            .child(OutlineEntry::new("Getting started").href("/doc/tutorial/getting-started"))
            .child(OutlineEntry::new("Effective Go").href("/doc/effective_go"))
            .child(
                OutlineEntry::new("Reference")
                    .child(OutlineEntry::new("Release history").href("/doc/devel/release"))
                    .child(OutlineEntry::new("Memory model").href("/ref/mem")),
            ),
        OutlineEntry::new("Packages")
            .href("/pkg/")
            .child(OutlineEntry::new("fmt").href("/pkg/fmt/"))
            .child(OutlineEntry::new("net/http").href("/pkg/net/http/")),
        OutlineEntry::new("Blog").href("/blog/"),
    ])
}

fn main() -> Result<(), Box<dyn Error>> {
    let log_file = File::create("outline.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let outline = match std::env::args().nth(1) {
        Some(path) => Outline::from_json(&fs::read_to_string(path)?)?,
        None => sample(),
    };

    let mut document = Element::div().child(outline.to_element(ROOT_ID, OUTLINE_TREE_CLASS));
    let mut tree = TreeIndex::try_new(&mut document, ROOT_ID, TreeConfig::new())?;
    tree.focus_first();

    let mut screen = Screen::new()?;
    loop {
        screen.draw(&tree)?;
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let raw = event::read()?;
        if let CrosstermEvent::Key(key) = &raw {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                return Ok(());
            }
        }

        let focused = tree
            .focused_item()
            .and_then(|i| tree.item(i))
            .map(|item| item.element_id.clone());
        if let Some(event) = Event::from_crossterm(&raw, focused.as_deref()) {
            let result = tree.dispatch(&event);
            log::debug!("{:?} -> {:?}", event, result);
            tree.sync(&mut document);
        }
    }
}
