use crate::manifest::Manifest;
use colored::Colorize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<Rc<RefCell<TreeNode>>>,
    is_file: bool,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
        }
    }
}

/// Links `relative` under the root, creating a directory node for every missing ancestor.
fn insert_path(
    lookup: &mut HashMap<PathBuf, Rc<RefCell<TreeNode>>>,
    root: &Rc<RefCell<TreeNode>>,
    relative: &Path,
    is_file: bool,
) {
    let mut parent = Rc::clone(root);
    let mut current = PathBuf::new();
    let segments: Vec<_> = relative.components().collect();

    for (i, segment) in segments.iter().enumerate() {
        current.push(segment.as_os_str());
        let leaf_is_file = is_file && i == segments.len() - 1;

        let node = match lookup.get(&current) {
            Some(node) => Rc::clone(node),
            None => {
                let name = segment.as_os_str().to_string_lossy().to_string();
                let node = Rc::new(RefCell::new(TreeNode::new(name, leaf_is_file)));

                parent.borrow_mut().children.push(Rc::clone(&node));
                lookup.insert(current.clone(), Rc::clone(&node));

                node
            }
        };

        parent = node;
    }
}

/// Build the directory tree from the manifest entries, returning the root node.
fn build_tree(manifest: &Manifest, destination: &Path) -> Rc<RefCell<TreeNode>> {
    // the root node represents the 'destination' directory
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let root = Rc::new(RefCell::new(TreeNode::new(root_name, false)));

    let mut lookup: HashMap<PathBuf, Rc<RefCell<TreeNode>>> = HashMap::new();

    for directory in manifest.directories.iter() {
        insert_path(&mut lookup, &root, Path::new(directory), false);
    }
    for (file, _) in manifest.files.iter() {
        insert_path(&mut lookup, &root, Path::new(file), true);
    }

    root
}

/// Render the tree with a nice ASCII style.
fn write_tree(buffer: &mut String, node: &Rc<RefCell<TreeNode>>, prefix: &str, is_last: bool) {
    let node_borrow = node.borrow();

    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name = if node_borrow.is_file {
        node_borrow.name.green()
    } else {
        node_borrow.name.blue()
    };
    let _ = writeln!(buffer, "{}{}{}", prefix.yellow(), connector, name);

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node_borrow.children.len();
    for (i, child) in node_borrow.children.iter().enumerate() {
        let last = i == len - 1;
        write_tree(buffer, child, &child_prefix, last);
    }
}

/// Renders the tree of everything `manifest` would create under `destination`.
pub fn render_tree(manifest: &Manifest, destination: &Path) -> String {
    let tree_root = build_tree(manifest, destination);

    let mut buffer = String::new();
    write_tree(&mut buffer, &tree_root, "", true);

    buffer
}

pub fn preview_as_tree(manifest: &Manifest, destination: &Path) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    print!("{}", render_tree(manifest, destination));

    let fancy_prompt = format!(
        "\n{} {}\n",
        "└─".bold().bright_blue(),
        "Dry run: nothing was written".bright_green()
    );

    println!("{}", fancy_prompt);
}
