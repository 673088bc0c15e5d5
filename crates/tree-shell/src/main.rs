//! Interactive console shell around a filterable tree
//!
//! Reads one command per line from stdin: elements can be added and removed
//! at runtime, and the tree is filtered live by a text query. The filtered
//! view is re-printed after every change; structural deltas are logged at
//! debug level (`RUST_LOG=debug`).

mod element;
mod render;

use anyhow::{anyhow, Context, Result};
use element::{text_query, Element};
use filter_tree::{FilterTree, NodeId};
use log::debug;
use std::io::{self, BufRead};

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Add an element, under the root or under a named parent
    Add {
        parent: Option<String>,
        text: String,
    },
    /// Remove an element and its subtree by name
    Remove { text: String },
    /// Set or clear the filter query
    Filter { query: String },
    /// Print the filtered tree
    Show,
    /// Print the unfiltered tree
    All,
    /// Print the command summary
    Help,
    /// Leave the shell
    Quit,
}

fn parse(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let command = match word {
        "add" => {
            if rest.is_empty() {
                return Err(anyhow!("usage: add [parent] <text>"));
            }
            match rest.split_once(char::is_whitespace) {
                Some((parent, text)) => Command::Add {
                    parent: Some(parent.to_string()),
                    text: text.trim().to_string(),
                },
                None => Command::Add {
                    parent: None,
                    text: rest.to_string(),
                },
            }
        }
        "rm" => {
            if rest.is_empty() {
                return Err(anyhow!("usage: rm <text>"));
            }
            Command::Remove {
                text: rest.to_string(),
            }
        }
        "filter" => Command::Filter {
            query: rest.to_string(),
        },
        "show" => Command::Show,
        "all" => Command::All,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(anyhow!("unknown command '{}', try 'help'", other)),
    };
    Ok(Some(command))
}

/// Find the first node whose element text equals `text`, in preorder
fn find_by_text(tree: &FilterTree<Element>, text: &str) -> Option<NodeId> {
    tree.descendants(tree.root())
        .ok()?
        .find(|&id| tree.value(id).map(|e| e.text() == text).unwrap_or(false))
}

/// Log structural deltas for a node, the way a display layer would consume
/// them to splice rows in and out
fn watch(tree: &mut FilterTree<Element>, node: NodeId) -> Result<()> {
    let label = tree
        .value(node)
        .map(|e| e.text().to_string())
        .unwrap_or_default();
    tree.subscribe(node, move |delta| {
        debug!(
            "'{}': visible children changed, added {:?}, removed {:?}",
            label, delta.added, delta.removed
        );
    })?;
    Ok(())
}

fn execute(tree: &mut FilterTree<Element>, command: Command) -> Result<bool> {
    match command {
        Command::Add { parent, text } => {
            let parent_id = match parent {
                None => tree.root(),
                Some(name) => find_by_text(tree, &name)
                    .ok_or_else(|| anyhow!("no element named '{}'", name))?,
            };
            let id = tree.add_child(parent_id, Element::new(text))?;
            watch(tree, id)?;
            println!("{}", render::render_visible(tree));
        }
        Command::Remove { text } => {
            let id =
                find_by_text(tree, &text).ok_or_else(|| anyhow!("no element named '{}'", text))?;
            let parent = tree
                .parent(id)
                .ok_or_else(|| anyhow!("cannot remove the root"))?;
            tree.remove_subtree(parent, id)?;
            println!("{}", render::render_visible(tree));
        }
        Command::Filter { query } => {
            tree.set_predicate(tree.root(), text_query(&query))?;
            println!("{}", render::render_visible(tree));
        }
        Command::Show => println!("{}", render::render_visible(tree)),
        Command::All => println!("{}", render::render_all(tree)),
        Command::Help => print_help(),
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Parse and run one input line. Returns false when the shell should stop.
fn feed(tree: &mut FilterTree<Element>, line: &str) -> bool {
    match parse(line) {
        Ok(None) => true,
        Ok(Some(command)) => match execute(tree, command) {
            Ok(keep_going) => keep_going,
            Err(e) => {
                eprintln!("error: {:#}", e);
                true
            }
        },
        Err(e) => {
            eprintln!("error: {:#}", e);
            true
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  add <text>           add an element under the root");
    println!("  add <parent> <text>  add an element under the named parent");
    println!("  rm <text>            remove the named element and its subtree");
    println!("  filter <query>       show only elements containing the query");
    println!("  filter               clear the filter");
    println!("  show                 print the filtered tree");
    println!("  all                  print the unfiltered tree");
    println!("  quit                 leave");
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let root_label = args.get(1).map(String::as_str).unwrap_or("Root");

    let mut tree = FilterTree::new(Element::new(root_label));
    let root = tree.root();
    watch(&mut tree, root)?;

    // An optional script file is replayed before reading stdin
    if let Some(script) = args.get(2) {
        let contents = std::fs::read_to_string(script)
            .with_context(|| format!("reading script '{}'", script))?;
        for line in contents.lines() {
            if !feed(&mut tree, line) {
                return Ok(());
            }
        }
    }

    println!("tree-shell: type 'help' for commands");
    println!("{}", render::render_visible(&tree));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if !feed(&mut tree, &line) {
            break;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
