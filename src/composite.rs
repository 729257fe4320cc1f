// Pattern: Composite - an inventory where categories and items answer the same call.
// A category's description is its own line followed by every child's, in insertion order.
//
// Trees are not meant for concurrent mutation: `add`/`remove` take `&mut self`,
// so the borrow checker already enforces a single writer.

use crate::error::{PatternError, Result};
use crate::narrator::Narrator;

// ============================================================================
// Layout of a tree listing
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeStyle {
    pub indent_step: String,
    pub branch_marker: String,
}

impl TreeStyle {
    pub fn new(indent_step: impl Into<String>, branch_marker: impl Into<String>) -> Self {
        Self {
            indent_step: indent_step.into(),
            branch_marker: branch_marker.into(),
        }
    }
}

impl Default for TreeStyle {
    fn default() -> Self {
        Self::new("  ", "--")
    }
}

/// The capability shared by every node in the tree.
pub trait Describe {
    fn describe_with(&self, indent: &str, style: &TreeStyle) -> String;

    fn describe(&self, indent: &str) -> String {
        self.describe_with(indent, &TreeStyle::default())
    }
}

// ============================================================================
// Leaf
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Describe for Item {
    fn describe_with(&self, _indent: &str, _style: &TreeStyle) -> String {
        format!("{}\n", self.name)
    }
}

// ============================================================================
// Composite
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
pub struct Category {
    name: String,
    children: Vec<Node>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Node {
    Category(Category),
    Item(Item),
}

impl From<Category> for Node {
    fn from(category: Category) -> Self {
        Node::Category(category)
    }
}

impl From<Item> for Node {
    fn from(item: Item) -> Self {
        Node::Item(item)
    }
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Appends after every existing child. The node is moved in, so it can only
    /// ever have one parent and the tree stays acyclic.
    pub fn add(&mut self, node: impl Into<Node>) {
        let node = node.into();
        tracing::debug!(parent = %self.name, child = node.name(), "adding child");
        self.children.push(node);
    }

    /// Detaches and returns the child at `index`. Out-of-range indices leave
    /// the children untouched.
    pub fn remove(&mut self, index: usize) -> Result<Node> {
        if index >= self.children.len() {
            tracing::warn!(
                parent = %self.name,
                index,
                len = self.children.len(),
                "remove out of bounds"
            );
            return Err(PatternError::out_of_bounds(index, self.children.len()));
        }
        let node = self.children.remove(index);
        tracing::debug!(parent = %self.name, child = node.name(), "removed child");
        Ok(node)
    }

    /// Mutable access to a child category, for filling a tree after attaching it.
    pub fn child_mut(&mut self, index: usize) -> Result<&mut Category> {
        let len = self.children.len();
        match self.children.get_mut(index) {
            Some(Node::Category(category)) => Ok(category),
            Some(Node::Item(_)) => Err(PatternError::NotACategory { index }),
            None => Err(PatternError::out_of_bounds(index, len)),
        }
    }

    /// Item names in depth-first pre-order.
    pub fn leaf_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut stack: Vec<&Node> = self.children.iter().rev().collect();
        while let Some(node) = stack.pop() {
            match node {
                Node::Item(item) => names.push(item.name()),
                Node::Category(category) => stack.extend(category.children.iter().rev()),
            }
        }
        names
    }
}

impl Describe for Category {
    fn describe_with(&self, indent: &str, style: &TreeStyle) -> String {
        let mut text = format!("{}:\n", self.name);
        // Explicit stack of (node, depth) so depth is bounded by memory, not the call stack.
        let mut stack: Vec<(&Node, usize)> = self.children.iter().rev().map(|n| (n, 1)).collect();

        while let Some((node, depth)) = stack.pop() {
            text.push_str(indent);
            for _ in 1..depth {
                text.push_str(&style.indent_step);
            }
            text.push_str(&style.branch_marker);

            match node {
                Node::Item(item) => text.push_str(&item.describe_with(indent, style)),
                Node::Category(category) => {
                    text.push_str(&category.name);
                    text.push_str(":\n");
                    stack.extend(category.children.iter().rev().map(|n| (n, depth + 1)));
                }
            }
        }
        text
    }
}

// Iterative drop so very deep trees don't overflow the stack.
impl Drop for Category {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Category(mut category) = node {
                pending.append(&mut category.children);
            }
        }
    }
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Category(category) => category.name(),
            Node::Item(item) => item.name(),
        }
    }

    pub fn as_category(&self) -> Option<&Category> {
        match self {
            Node::Category(category) => Some(category),
            Node::Item(_) => None,
        }
    }
}

impl Describe for Node {
    fn describe_with(&self, indent: &str, style: &TreeStyle) -> String {
        match self {
            Node::Category(category) => category.describe_with(indent, style),
            Node::Item(item) => item.describe_with(indent, style),
        }
    }
}

// ============================================================================
// Demo inventory
// ============================================================================

pub fn build_inventory() -> Category {
    let mut swords = Category::new("Sword");
    swords.add(Item::new("Iron Sword"));
    let mut axes = Category::new("Axe");
    axes.add(Item::new("Golden Axe"));

    let mut weapons = Category::new("Weapons");
    weapons.add(swords);
    weapons.add(axes);

    let mut helm = Category::new("Helm");
    helm.add(Item::new("Mithril Helm"));
    let mut shield = Category::new("Shield");
    shield.add(Item::new("Elven Shield"));

    let mut armor = Category::new("Armor");
    armor.add(helm);
    armor.add(shield);

    let mut potions = Category::new("Potion");
    potions.add(Item::new("Potion of Health"));

    let mut inventory = Category::new("Inventory");
    inventory.add(weapons);
    inventory.add(armor);
    inventory.add(potions);

    inventory
}

pub fn run_demo(out: &dyn Narrator, style: &TreeStyle) {
    let inventory = build_inventory();
    for line in inventory.describe_with("", style).lines() {
        out.say(line);
    }
}
